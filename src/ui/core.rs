// src/ui/core.rs
//! Core UI traits and types for the rating bar
//!
//! A widget is described by three capabilities the host drives:
//! [`Measurable`] for layout, [`Drawable`] for painting and [`Touchable`]
//! for pointer input. Widgets never call into the host; they record that they
//! need a redraw and the host polls [`Drawable::is_dirty`].

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::layouts::MeasureSpec;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events delivered by the host
///
/// A gesture is one `Press`, any number of `Drag`s, then either `Release`
/// or `Cancel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Touch drag to a new point
    Drag(TouchPoint),
    /// Touch lifted at a point
    Release(TouchPoint),
    /// Gesture abandoned by the host (no release will follow)
    Cancel,
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

/// Actions that UI elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A gesture committed a new rating
    RatingChanged(u32),
}

/// Screen area a widget needs repainted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }
}

/// Trait for UI elements that take part in the host's layout pass
pub trait Measurable {
    /// Resolve this element's size against the host constraints for each axis.
    ///
    /// The resolved size is remembered by the element and returned.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Place the element's top-left corner. The size from the last
    /// [`measure`](Measurable::measure) call is kept.
    fn set_position(&mut self, position: Point);
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled and any action
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

/// Combined trait for interactive drawable elements
pub trait Interactive: Measurable + Drawable + Touchable {}

/// Implement Interactive for any type that implements all three capabilities
impl<T: Measurable + Drawable + Touchable> Interactive for T {}
