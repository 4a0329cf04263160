// src/ui/mod.rs
//! Rating bar UI system
//!
//! This module provides:
//! - Core capability traits for measurable, drawable and touchable elements
//! - Size negotiation with the host layout pass
//! - The rating bar component and its star icons
//! - Colors, padding and themes

pub mod components;
pub mod core;
pub mod layouts;
pub mod styling;

// Re-export commonly used items
pub use components::{
    MaskImage, RatingBar, RatingChangeListener, Slots, StarImage, StarSlot, TintedIcon,
};
pub use core::{
    Action, DirtyRegion, Drawable, Interactive, Measurable, TouchEvent, TouchPoint, TouchResult,
    Touchable,
};
pub use layouts::{MeasureSpec, resolve_size};
pub use styling::{ColorPalette, Padding, Theme, TintColor};
