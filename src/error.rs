//! Error types for rating bar configuration

use thiserror_no_std::Error;

/// Error types for rating bar construction and mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingBarError {
    /// A rating bar needs at least one star
    #[error("Invalid star count: {count} (must be at least 1)")]
    InvalidStarCount {
        /// The rejected count
        count: u32,
    },

    /// Stars need a non-empty icon box
    #[error("Invalid star size: {size} (must be at least 1px)")]
    InvalidStarSize {
        /// The rejected size
        size: u32,
    },

    /// The bar would not fit in the signed pixel coordinates used for drawing
    #[error("Rating bar of {width}x{height} exceeds the drawable range")]
    GeometryTooLarge {
        /// Desired width in pixels
        width: u64,
        /// Desired height in pixels
        height: u64,
    },

    /// Mask data does not match the declared dimensions
    #[error("Invalid mask: {width}x{height} needs a different length than {len} bytes")]
    InvalidMask {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
        /// Length of the supplied data
        len: usize,
    },

    /// A serialized configuration bundle could not be decoded
    #[error("Failed to decode rating bar configuration")]
    ConfigDecode,
}

/// Result type for rating bar operations
pub type RatingBarResult<T> = Result<T, RatingBarError>;
