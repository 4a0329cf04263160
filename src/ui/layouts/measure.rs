// src/ui/layouts/measure.rs
//! Size negotiation between a widget and its host
//!
//! The host hands each widget one [`MeasureSpec`] per axis. The widget works
//! out the size it would like and resolves it against the constraint with
//! [`MeasureSpec::resolve`]. Both axes use the same rule.

use embedded_graphics::prelude::*;

/// Sizing constraint for one axis
///
/// - `Exact(n)`: the host has decided the size; content may be clipped
/// - `AtMost(n)`: the element may be as large as it wants up to `n`
/// - `Unspecified`: no constraint, the element gets its desired size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// Exact size in pixels
    Exact(u32),
    /// Upper bound in pixels
    AtMost(u32),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// Resolve a desired size against this constraint.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            MeasureSpec::Exact(size) => size,
            MeasureSpec::AtMost(bound) => desired.min(bound),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Resolve a desired size against a pair of axis constraints.
pub fn resolve_size(desired: Size, width: MeasureSpec, height: MeasureSpec) -> Size {
    Size::new(width.resolve(desired.width), height.resolve(desired.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ignores_desired() {
        assert_eq!(MeasureSpec::Exact(40).resolve(500), 40);
        assert_eq!(MeasureSpec::Exact(800).resolve(500), 800);
    }

    #[test]
    fn test_at_most_caps_desired() {
        assert_eq!(MeasureSpec::AtMost(300).resolve(500), 300);
        assert_eq!(MeasureSpec::AtMost(600).resolve(500), 500);
    }

    #[test]
    fn test_unspecified_uses_desired() {
        assert_eq!(MeasureSpec::Unspecified.resolve(500), 500);
    }

    #[test]
    fn test_axes_resolve_independently() {
        let desired = Size::new(500, 100);
        let size = resolve_size(desired, MeasureSpec::AtMost(320), MeasureSpec::Exact(150));
        assert_eq!(size, Size::new(320, 150));

        let size = resolve_size(desired, MeasureSpec::Unspecified, MeasureSpec::AtMost(60));
        assert_eq!(size, Size::new(500, 60));
    }
}
