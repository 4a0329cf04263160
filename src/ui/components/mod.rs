// src/ui/components/mod.rs
//! UI components library

pub mod rating_bar;
pub mod star;

pub use rating_bar::{RatingBar, RatingChangeListener, Slots, StarSlot};
pub use star::{MaskImage, StarImage, TintedIcon};
