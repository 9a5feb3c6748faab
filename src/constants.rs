//! Centralized constants for the terrapoint crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Sampler settings
pub mod sampler {
    /// Retry ceiling for rejection sampling before giving up on a country.
    ///
    /// Expected draws per accepted point is roughly bbox area / polygon
    /// area, which stays well under this for real country outlines.
    pub const MAX_ATTEMPTS: u32 = 10_000;
}

/// Output settings
pub mod output {
    /// Decimal places kept when emitting coordinates
    pub const COORD_DECIMALS: i32 = 4;
}
