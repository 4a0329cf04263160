// src/ui/layouts/mod.rs
//! Layout negotiation for UI elements

pub mod measure;

pub use measure::{MeasureSpec, resolve_size};
