//! Color definitions and palette management
//!
//! Colors are RGB565, the 16-bit format used by the displays this widget
//! targets.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

// ============================================================================
// Base Colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);


// ============================================================================
// Star Colors
// ============================================================================

/// Filled star - warm amber
pub const COLOR_STAR_ACTIVE: Rgb565 = Rgb565::new(255 >> 3, 193 >> 2, 7 >> 3);

/// Filled star on light backgrounds - deeper orange
pub const COLOR_STAR_ACTIVE_LIGHT: Rgb565 = Rgb565::new(245 >> 3, 124 >> 2, 0);

/// Empty star on dark backgrounds - medium gray
pub const COLOR_STAR_INACTIVE: Rgb565 = Rgb565::new(16, 32, 16);

/// Empty star on light backgrounds - light gray
pub const COLOR_STAR_INACTIVE_LIGHT: Rgb565 = Rgb565::new(21, 42, 21);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

// ============================================================================
// 8-bit colors
// ============================================================================

/// An 8-bit-per-channel color as it appears in configuration data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TintColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TintColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to RGB565 by dropping the low bits of each channel.
    pub const fn to_rgb565(self) -> Rgb565 {
        Rgb565::new(self.r >> 3, self.g >> 2, self.b >> 3)
    }
}

impl From<TintColor> for Rgb565 {
    fn from(color: TintColor) -> Self {
        color.to_rgb565()
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// Colors a host theme supplies to the rating bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Main background color
    pub background: Rgb565,

    /// Tint for filled stars
    pub star_active: Rgb565,

    /// Tint for empty stars
    pub star_inactive: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the default dark theme palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Creates a dark theme palette (default)
    pub fn dark() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            star_active: COLOR_STAR_ACTIVE,
            star_inactive: COLOR_STAR_INACTIVE,
        }
    }

    /// Creates a light theme palette
    pub fn light() -> Self {
        Self {
            background: WHITE,
            star_active: COLOR_STAR_ACTIVE_LIGHT,
            star_inactive: COLOR_STAR_INACTIVE_LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb888_conversion_drops_low_bits() {
        let color = TintColor::new(255, 193, 7).to_rgb565();
        assert_eq!(color, COLOR_STAR_ACTIVE);

        let white: Rgb565 = TintColor::new(255, 255, 255).into();
        assert_eq!(white, WHITE);
    }
}
