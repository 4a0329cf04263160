// src/ui/components/rating_bar.rs
//! Star rating bar component

use alloc::boxed::Box;
use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

use super::star::{StarImage, TintedIcon};
use crate::config::{MAX_EXTENT, RatingBarConfig, check_extent};
use crate::error::{RatingBarError, RatingBarResult};
use crate::resources::{ResourceId, ResourceResolver};
use crate::ui::core::{
    Action, Drawable, Measurable, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::layouts::{MeasureSpec, resolve_size};
use crate::ui::styling::{Padding, Theme};

/// Receives committed rating changes
///
/// Any `FnMut(u32)` closure is a listener.
pub trait RatingChangeListener {
    fn on_rating_changed(&mut self, rating: u32);
}

impl<F: FnMut(u32)> RatingChangeListener for F {
    fn on_rating_changed(&mut self, rating: u32) {
        self(rating)
    }
}

/// State of an in-progress pointer gesture
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    rating_at_press: u32,
}

/// One icon box in the row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSlot {
    /// Position in the row, starting at 0
    pub index: u32,
    /// Screen area of the icon box
    pub bounds: Rectangle,
    /// Whether the slot shows the active (filled) icon
    pub active: bool,
}

/// Iterator over the icon boxes of a [`RatingBar`], left to right.
///
/// Slots before the rating are active. Once a slot at or past the rating
/// is reached the row stays inactive for the rest of the iteration.
#[derive(Debug, Clone)]
pub struct Slots {
    next: u32,
    count: u32,
    rating: u32,
    active: bool,
    cursor: Point,
    size: Size,
    step: i32,
}

impl Iterator for Slots {
    type Item = StarSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        if self.active && self.next >= self.rating {
            self.active = false;
        }

        let slot = StarSlot {
            index: self.next,
            bounds: Rectangle::new(self.cursor, self.size),
            active: self.active,
        };

        self.cursor.x = self.cursor.x.saturating_add(self.step);
        self.next += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Slots {}

/// Horizontal row of stars for picking an integer rating
///
/// Dragging across the row previews the rating under the pointer; lifting
/// the pointer commits it. A registered [`RatingChangeListener`] hears about
/// each committed change once, and [`handle_touch`](Touchable::handle_touch)
/// returns [`Action::RatingChanged`] for the same release.
///
/// # Layout
/// The desired width is `star_size * stars_count + stars_padding * (stars_count - 1)`
/// plus the horizontal padding; the desired height is `star_size` plus the
/// vertical padding. Hosts resolve this against their constraints with
/// [`Measurable::measure`] and then place the bar with
/// [`Measurable::set_position`].
///
/// # Redraws
/// Every setter marks the bar dirty, even when the value does not change.
/// Setters that change geometry also raise [`needs_layout`](RatingBar::needs_layout).
///
/// # Examples
/// ```ignore
/// let mut bar = RatingBar::new(RatingBarConfig::default(), NoResources)?;
/// bar.set_listener(|rating| info!("Selected rating: {}", rating));
/// bar.measure(MeasureSpec::AtMost(320), MeasureSpec::Unspecified);
/// bar.set_position(Point::new(0, 40));
/// ```
pub struct RatingBar<R: ResourceResolver> {
    bounds: Rectangle,
    stars_count: u32,
    star_size: u32,
    stars_padding: u32,
    padding: Padding,
    active_tint: Rgb565,
    inactive_tint: Rgb565,
    active_icon: TintedIcon,
    inactive_icon: TintedIcon,
    rating: u32,
    gesture: Option<Gesture>,
    row_content_width: u32,
    listener: Option<Box<dyn RatingChangeListener>>,
    resolver: R,
    dirty: bool,
    needs_layout: bool,
}

/// Look up `id`, falling back to a built-in image when the host has none.
fn resolve_or_default<R: ResourceResolver>(
    resolver: &R,
    id: ResourceId,
    fallback: StarImage,
) -> StarImage {
    resolver.resolve(id).unwrap_or_else(|| {
        warn!("Resource {:?} not found, using built-in {:?}", id, fallback);
        fallback
    })
}

impl<R: ResourceResolver> RatingBar<R> {
    /// Create a rating bar using the default theme for unset tints.
    pub fn new(config: RatingBarConfig, resolver: R) -> RatingBarResult<Self> {
        Self::with_theme(config, &Theme::default(), resolver)
    }

    /// Create a rating bar, taking unset tints from `theme`.
    ///
    /// Fails if the configuration has no stars or a zero star size.
    pub fn with_theme(config: RatingBarConfig, theme: &Theme, resolver: R) -> RatingBarResult<Self> {
        config.validate().inspect_err(|e| warn!("Invalid rating bar config: {}", e))?;

        let active_tint = config.active_tint(theme);
        let inactive_tint = config.inactive_tint(theme);

        let active_image = config
            .active_star_drawable
            .map(|id| resolve_or_default(&resolver, id, StarImage::DEFAULT_ACTIVE))
            .unwrap_or(StarImage::DEFAULT_ACTIVE);
        let inactive_image = config
            .inactive_star_drawable
            .map(|id| resolve_or_default(&resolver, id, StarImage::DEFAULT_INACTIVE))
            .unwrap_or(StarImage::DEFAULT_INACTIVE);

        let mut bar = Self {
            bounds: Rectangle::zero(),
            stars_count: config.stars_count,
            star_size: config.star_size,
            stars_padding: config.stars_padding,
            padding: config.padding,
            active_tint,
            inactive_tint,
            active_icon: TintedIcon::new(active_image, active_tint, config.star_size),
            inactive_icon: TintedIcon::new(inactive_image, inactive_tint, config.star_size),
            rating: config.rating.min(config.stars_count),
            gesture: None,
            row_content_width: 0,
            listener: None,
            resolver,
            dirty: true,
            needs_layout: true,
        };
        bar.bounds.size = bar.desired_size();
        bar.row_content_width = bar.desired_row_width();
        Ok(bar)
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Width of the icon row alone, without outer padding.
    pub fn desired_row_width(&self) -> u32 {
        let icons = self.star_size.saturating_mul(self.stars_count);
        let gaps = self.stars_padding.saturating_mul(self.stars_count - 1);
        icons.saturating_add(gaps)
    }

    /// Size the bar would like before host constraints are applied.
    pub fn desired_size(&self) -> Size {
        Size::new(
            self.desired_row_width()
                .saturating_add(self.padding.horizontal()),
            self.star_size.saturating_add(self.padding.vertical()),
        )
    }

    /// Row width used for pointer mapping, captured at the last measure.
    pub fn row_content_width(&self) -> u32 {
        self.row_content_width
    }

    /// Whether geometry changed since the last [`Measurable::measure`].
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Offset of the icon row from the top-left corner of the bounds.
    fn row_inset(&self) -> Point {
        Point::new(
            i32::try_from(self.padding.left).unwrap_or(i32::MAX),
            i32::try_from(self.padding.top).unwrap_or(i32::MAX),
        )
    }

    /// Top-left corner of the first icon box.
    fn row_origin(&self) -> Point {
        let inset = self.row_inset();
        Point::new(
            self.bounds.top_left.x.saturating_add(inset.x),
            self.bounds.top_left.y.saturating_add(inset.y),
        )
    }

    /// Icon boxes in paint order with their active state.
    pub fn slots(&self) -> Slots {
        let step = self.star_size.saturating_add(self.stars_padding);
        Slots {
            next: 0,
            count: self.stars_count,
            rating: self.rating,
            active: true,
            cursor: self.row_origin(),
            size: Size::new(self.star_size, self.star_size),
            step: i32::try_from(step).unwrap_or(i32::MAX),
        }
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// Map a pointer x offset from the start of the row to a rating.
    ///
    /// Each star claims `row_content_width / stars_count` pixels; the rating
    /// is the number of slots the pointer has entered, clamped to
    /// `[0, stars_count]`.
    pub fn rating_for_x(&self, x: i32) -> u32 {
        if x <= 0 {
            return 0;
        }
        let slot_width = self.row_content_width / self.stars_count;
        if slot_width == 0 {
            return self.stars_count;
        }
        (x as u32).div_ceil(slot_width).min(self.stars_count)
    }

    /// Pointer x relative to the left edge of the icon row.
    fn row_x(&self, point: TouchPoint) -> i32 {
        i32::from(point.x)
            .saturating_sub(self.bounds.top_left.x)
            .saturating_sub(self.row_inset().x)
    }

    fn track_pointer(&mut self, point: TouchPoint) {
        let rating = self.rating_for_x(self.row_x(point));
        self.rating = rating;
        self.dirty = true;
    }

    /// Whether a pointer gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }

    /// Register the listener for committed rating changes, replacing any previous one.
    pub fn set_listener<L: RatingChangeListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    pub fn rating(&self) -> u32 {
        self.rating
    }

    /// Set the displayed rating, clamped to `[0, stars_count]`.
    ///
    /// Does not notify the listener; only gestures do.
    pub fn set_rating(&mut self, rating: u32) {
        self.rating = rating.min(self.stars_count);
        self.dirty = true;
    }

    pub fn stars_count(&self) -> u32 {
        self.stars_count
    }

    /// Change the number of stars. A rating above the new count is clamped.
    pub fn set_stars_count(&mut self, count: u32) -> RatingBarResult<()> {
        if count == 0 {
            warn!("Rejecting star count of 0");
            return Err(RatingBarError::InvalidStarCount { count });
        }
        self.check_geometry(count, self.star_size, self.stars_padding, self.padding)?;
        self.stars_count = count;
        self.rating = self.rating.min(count);
        self.mark_geometry_changed();
        Ok(())
    }

    pub fn star_size(&self) -> u32 {
        self.star_size
    }

    pub fn set_star_size(&mut self, size: u32) -> RatingBarResult<()> {
        if size == 0 {
            warn!("Rejecting star size of 0");
            return Err(RatingBarError::InvalidStarSize { size });
        }
        self.check_geometry(self.stars_count, size, self.stars_padding, self.padding)?;
        self.star_size = size;
        self.active_icon.set_size(size);
        self.inactive_icon.set_size(size);
        self.mark_geometry_changed();
        Ok(())
    }

    pub fn stars_padding(&self) -> u32 {
        self.stars_padding
    }

    /// Set the gap between adjacent stars in pixels.
    pub fn set_stars_padding(&mut self, padding: u32) -> RatingBarResult<()> {
        self.check_geometry(self.stars_count, self.star_size, padding, self.padding)?;
        self.stars_padding = padding;
        self.mark_geometry_changed();
        Ok(())
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Set the outer padding around the row.
    pub fn set_padding(&mut self, padding: Padding) -> RatingBarResult<()> {
        self.check_geometry(self.stars_count, self.star_size, self.stars_padding, padding)?;
        self.padding = padding;
        self.mark_geometry_changed();
        Ok(())
    }

    pub fn active_tint(&self) -> Rgb565 {
        self.active_tint
    }

    pub fn set_active_tint(&mut self, tint: Rgb565) {
        self.active_tint = tint;
        self.active_icon.set_tint(tint);
        self.dirty = true;
    }

    pub fn inactive_tint(&self) -> Rgb565 {
        self.inactive_tint
    }

    pub fn set_inactive_tint(&mut self, tint: Rgb565) {
        self.inactive_tint = tint;
        self.inactive_icon.set_tint(tint);
        self.dirty = true;
    }

    /// Icon painted in active slots.
    pub fn active_icon(&self) -> &TintedIcon {
        &self.active_icon
    }

    /// Icon painted in inactive slots.
    pub fn inactive_icon(&self) -> &TintedIcon {
        &self.inactive_icon
    }

    /// Replace the active image. It is tinted with the current active tint.
    pub fn set_active_star_image(&mut self, image: StarImage) {
        self.active_icon.replace_image(image, self.active_tint);
        self.dirty = true;
    }

    /// Replace the inactive image. It is tinted with the current inactive tint.
    pub fn set_inactive_star_image(&mut self, image: StarImage) {
        self.inactive_icon.replace_image(image, self.inactive_tint);
        self.dirty = true;
    }

    /// Replace the active image by resource id, falling back to the built-in
    /// filled star if the resolver does not know `id`.
    pub fn set_active_star_resource(&mut self, id: ResourceId) {
        let image = resolve_or_default(&self.resolver, id, StarImage::DEFAULT_ACTIVE);
        self.set_active_star_image(image);
    }

    /// Replace the inactive image by resource id, falling back to the built-in
    /// outline star if the resolver does not know `id`.
    pub fn set_inactive_star_resource(&mut self, id: ResourceId) {
        let image = resolve_or_default(&self.resolver, id, StarImage::DEFAULT_INACTIVE);
        self.set_inactive_star_image(image);
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    fn check_geometry(
        &self,
        stars_count: u32,
        star_size: u32,
        stars_padding: u32,
        padding: Padding,
    ) -> RatingBarResult<()> {
        check_extent(stars_count, star_size, stars_padding, padding)
            .inspect_err(|e| warn!("Rejecting rating bar geometry: {}", e))
    }

    fn mark_geometry_changed(&mut self) {
        self.needs_layout = true;
        self.dirty = true;
    }
}

impl<R: ResourceResolver> Measurable for RatingBar<R> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let size = resolve_size(self.desired_size(), width, height);
        let size = Size::new(size.width.min(MAX_EXTENT), size.height.min(MAX_EXTENT));
        if self.bounds.size != size {
            self.bounds.size = size;
            self.dirty = true;
        }
        self.row_content_width = size.width.saturating_sub(self.padding.horizontal());
        self.needs_layout = false;

        debug!(
            "Rating bar measured {}x{} (row {}px) for {:?} x {:?}",
            size.width, size.height, self.row_content_width, width, height
        );
        size
    }

    fn set_position(&mut self, position: Point) {
        if self.bounds.top_left != position {
            self.bounds.top_left = position;
            self.dirty = true;
        }
    }
}

impl<R: ResourceResolver> Drawable for RatingBar<R> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let mut display = display.clipped(&self.bounds);

        for slot in self.slots() {
            let icon = if slot.active {
                &self.active_icon
            } else {
                &self.inactive_icon
            };
            icon.draw_at(slot.bounds.top_left, &mut display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl<R: ResourceResolver> Touchable for RatingBar<R> {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.gesture = Some(Gesture {
                    rating_at_press: self.rating,
                });
                TouchResult::Handled
            }
            TouchEvent::Drag(point) if self.gesture.is_some() => {
                self.track_pointer(point);
                TouchResult::Handled
            }
            TouchEvent::Release(point) => {
                let Some(gesture) = self.gesture.take() else {
                    return TouchResult::NotHandled;
                };
                self.track_pointer(point);

                if self.rating == gesture.rating_at_press {
                    return TouchResult::Handled;
                }

                debug!(
                    "Rating changed {} -> {}",
                    gesture.rating_at_press, self.rating
                );
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_rating_changed(self.rating);
                }
                TouchResult::Action(Action::RatingChanged(self.rating))
            }
            TouchEvent::Cancel => {
                let Some(gesture) = self.gesture.take() else {
                    return TouchResult::NotHandled;
                };
                // Drop the preview and go back to the committed rating
                if self.rating != gesture.rating_at_press {
                    self.rating = gesture.rating_at_press;
                    self.dirty = true;
                }
                TouchResult::Handled
            }
            _ => TouchResult::NotHandled,
        }
    }
}
