//! Global theme management
//!
//! The theme is where the rating bar takes its default tints from when a
//! configuration bundle leaves them out.

use super::colors::ColorPalette;

// ============================================================================
// Theme
// ============================================================================

/// Global theme configuration
///
/// # Examples
///
/// ```ignore
/// let theme = Theme::default();
/// let bar = RatingBar::with_theme(RatingBarConfig::default(), &theme, NoResources)?;
///
/// // Or start from the light theme
/// let bar = RatingBar::with_theme(RatingBarConfig::default(), &Theme::light(), NoResources)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// The active color palette (dark or light)
    pub palette: ColorPalette,
}

impl Default for Theme {
    /// Returns the default theme (dark mode)
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Creates a dark theme
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
        }
    }

    /// Creates a light theme
    pub fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
        }
    }
}
