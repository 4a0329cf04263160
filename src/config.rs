//! Construction-time configuration for the rating bar
//!
//! A [`RatingBarConfig`] is the attribute set a host hands to
//! [`RatingBar::new`](crate::RatingBar::new). Anything left unset falls back
//! to the defaults below or, for tints, to the host [`Theme`].
//!
//! | Field                    | Default                  |
//! |--------------------------|--------------------------|
//! | `stars_count`            | 5                        |
//! | `star_size`              | 100                      |
//! | `stars_padding`          | 0                        |
//! | `padding`                | 0 on all sides           |
//! | `active_star_tint`       | theme active star color  |
//! | `inactive_star_tint`     | theme inactive star color|
//! | `active_star_drawable`   | built-in filled star     |
//! | `inactive_star_drawable` | built-in outline star    |
//! | `rating`                 | 0                        |

use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{RatingBarError, RatingBarResult};
use crate::resources::ResourceId;
use crate::ui::styling::{Padding, Theme, TintColor};

pub const DEFAULT_STARS_COUNT: u32 = 5;
pub const DEFAULT_STAR_SIZE: u32 = 100;

/// Largest width or height a rating bar may have, in pixels.
pub const MAX_EXTENT: u32 = i32::MAX as u32;

/// Check that a bar with this geometry fits within [`MAX_EXTENT`] on both axes.
pub(crate) fn check_extent(
    stars_count: u32,
    star_size: u32,
    stars_padding: u32,
    padding: Padding,
) -> RatingBarResult<()> {
    let count = u64::from(stars_count);
    let width = u64::from(star_size)
        .saturating_mul(count)
        .saturating_add(u64::from(stars_padding).saturating_mul(count.saturating_sub(1)))
        .saturating_add(u64::from(padding.left))
        .saturating_add(u64::from(padding.right));
    let height = u64::from(star_size)
        .saturating_add(u64::from(padding.top))
        .saturating_add(u64::from(padding.bottom));

    let limit = u64::from(MAX_EXTENT);
    if width > limit || height > limit {
        return Err(RatingBarError::GeometryTooLarge { width, height });
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct RatingBarConfig {
    pub stars_count: u32,
    pub star_size: u32,
    pub stars_padding: u32,
    pub padding: Padding,
    pub active_star_tint: Option<TintColor>,
    pub inactive_star_tint: Option<TintColor>,
    pub active_star_drawable: Option<ResourceId>,
    pub inactive_star_drawable: Option<ResourceId>,
    pub rating: u32,
}

impl Default for RatingBarConfig {
    fn default() -> Self {
        Self {
            stars_count: DEFAULT_STARS_COUNT,
            star_size: DEFAULT_STAR_SIZE,
            stars_padding: 0,
            padding: Padding::default(),
            active_star_tint: None,
            inactive_star_tint: None,
            active_star_drawable: None,
            inactive_star_drawable: None,
            rating: 0,
        }
    }
}

impl RatingBarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stars_count(mut self, count: u32) -> Self {
        self.stars_count = count;
        self
    }

    pub fn with_star_size(mut self, size: u32) -> Self {
        self.star_size = size;
        self
    }

    pub fn with_stars_padding(mut self, padding: u32) -> Self {
        self.stars_padding = padding;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_active_tint(mut self, tint: TintColor) -> Self {
        self.active_star_tint = Some(tint);
        self
    }

    pub fn with_inactive_tint(mut self, tint: TintColor) -> Self {
        self.inactive_star_tint = Some(tint);
        self
    }

    pub fn with_active_drawable(mut self, id: ResourceId) -> Self {
        self.active_star_drawable = Some(id);
        self
    }

    pub fn with_inactive_drawable(mut self, id: ResourceId) -> Self {
        self.inactive_star_drawable = Some(id);
        self
    }

    pub fn with_rating(mut self, rating: u32) -> Self {
        self.rating = rating;
        self
    }

    /// Check the invariants a rating bar relies on.
    pub fn validate(&self) -> RatingBarResult<()> {
        if self.stars_count == 0 {
            return Err(RatingBarError::InvalidStarCount {
                count: self.stars_count,
            });
        }
        if self.star_size == 0 {
            return Err(RatingBarError::InvalidStarSize {
                size: self.star_size,
            });
        }
        check_extent(
            self.stars_count,
            self.star_size,
            self.stars_padding,
            self.padding,
        )
    }

    /// Tint for filled stars, falling back to the theme.
    pub fn active_tint(&self, theme: &Theme) -> Rgb565 {
        self.active_star_tint
            .map(TintColor::to_rgb565)
            .unwrap_or(theme.palette.star_active)
    }

    /// Tint for empty stars, falling back to the theme.
    pub fn inactive_tint(&self, theme: &Theme) -> Rgb565 {
        self.inactive_star_tint
            .map(TintColor::to_rgb565)
            .unwrap_or(theme.palette.star_inactive)
    }

    /// Decode a configuration bundle from its postcard form.
    pub fn from_postcard(bytes: &[u8]) -> RatingBarResult<Self> {
        postcard::from_bytes(bytes).map_err(|e| {
            warn!("Rejecting rating bar config: {:?}", e);
            RatingBarError::ConfigDecode
        })
    }

    /// Encode this configuration in postcard form.
    pub fn to_postcard(&self) -> RatingBarResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(|_| RatingBarError::ConfigDecode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::{COLOR_STAR_ACTIVE_LIGHT, COLOR_STAR_INACTIVE};

    #[test]
    fn test_defaults() {
        let config = RatingBarConfig::default();
        assert_eq!(config.stars_count, 5);
        assert_eq!(config.star_size, 100);
        assert_eq!(config.stars_padding, 0);
        assert_eq!(config.padding, Padding::all(0));
        assert_eq!(config.rating, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tints_fall_back_to_theme() {
        let config = RatingBarConfig::default();
        assert_eq!(config.active_tint(&Theme::light()), COLOR_STAR_ACTIVE_LIGHT);
        assert_eq!(config.inactive_tint(&Theme::dark()), COLOR_STAR_INACTIVE);

        let config = config.with_active_tint(TintColor::new(255, 0, 0));
        assert_eq!(config.active_tint(&Theme::light()), Rgb565::new(31, 0, 0));
    }

    #[test]
    fn test_validate_rejects_degenerate_geometry() {
        assert_eq!(
            RatingBarConfig::new().with_stars_count(0).validate(),
            Err(RatingBarError::InvalidStarCount { count: 0 })
        );
        assert_eq!(
            RatingBarConfig::new().with_star_size(0).validate(),
            Err(RatingBarError::InvalidStarSize { size: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_oversized_geometry() {
        let config = RatingBarConfig::new()
            .with_star_size(10)
            .with_padding(Padding::new(0, 0, 0, 0x8000_0000));
        assert_eq!(
            config.validate(),
            Err(RatingBarError::GeometryTooLarge {
                width: 0x8000_0000 + 50,
                height: 10,
            })
        );

        let config = RatingBarConfig::new()
            .with_stars_count(u32::MAX)
            .with_star_size(u32::MAX)
            .with_stars_padding(u32::MAX);
        assert!(matches!(
            config.validate(),
            Err(RatingBarError::GeometryTooLarge { .. })
        ));

        let config = RatingBarConfig::new().with_padding(Padding::new(0, 0, u32::MAX, 0));
        assert!(matches!(
            config.validate(),
            Err(RatingBarError::GeometryTooLarge { width: 500, .. })
        ));
    }

    #[test]
    fn test_validate_accepts_geometry_at_the_limit() {
        let config = RatingBarConfig::new()
            .with_stars_count(1)
            .with_star_size(10)
            .with_padding(Padding::new(0, 0, 0, MAX_EXTENT - 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_postcard_bundle() {
        let config = RatingBarConfig::new()
            .with_stars_count(7)
            .with_star_size(24)
            .with_stars_padding(4)
            .with_padding(Padding::symmetric(2, 6))
            .with_inactive_tint(TintColor::new(10, 20, 30))
            .with_active_drawable(ResourceId(3));

        let bytes = config.to_postcard().unwrap();
        assert_eq!(RatingBarConfig::from_postcard(&bytes), Ok(config));
    }

    #[test]
    fn test_truncated_bundle_is_rejected() {
        let bytes = RatingBarConfig::default().to_postcard().unwrap();
        assert_eq!(
            RatingBarConfig::from_postcard(&bytes[..2]),
            Err(RatingBarError::ConfigDecode)
        );
    }
}
