//! Styling system for UI elements
//!
//! - [`colors`] - Color constants, 8-bit config colors and palettes
//! - [`layout`] - Padding
//! - [`theme`] - Global theme supplying default star tints

// Module declarations
pub mod colors;
pub mod layout;
pub mod theme;

// Re-export commonly used items for convenience
pub use colors::{
    COLOR_BACKGROUND, COLOR_STAR_ACTIVE, COLOR_STAR_ACTIVE_LIGHT, COLOR_STAR_INACTIVE,
    COLOR_STAR_INACTIVE_LIGHT, ColorPalette, TintColor, WHITE,
};
pub use layout::Padding;
pub use theme::Theme;
