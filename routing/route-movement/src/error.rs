//! Error types for movement rule construction.
//!
//! The rules themselves are total predicates and never fail. Errors only
//! arise while building their inputs: agent shapes, footprints and worlds.

use cf_spatial::SpatialError;

/// Errors that can occur while configuring a movement rule.
///
/// # Example
///
/// ```
/// use route_movement::MovementError;
///
/// let error = MovementError::InvalidShape { width: -1.0, height: 2.0 };
/// assert!(error.to_string().contains("invalid agent shape"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MovementError {
    /// Agent dimensions must be positive and finite.
    #[error("invalid agent shape: width {width}, height {height}")]
    InvalidShape {
        /// Requested width in world units.
        width: f64,
        /// Requested height in world units.
        height: f64,
    },

    /// A footprint spans more cells along one axis than a single check may sample.
    #[error("footprint extent {extent} along {axis} exceeds the limit of {max} voxels")]
    FootprintTooLarge {
        /// Axis name (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// Requested extent in voxels.
        extent: u64,
        /// Maximum allowed extent in voxels.
        max: u32,
    },

    /// The underlying spatial structure rejected its parameters.
    #[error(transparent)]
    Spatial(#[from] SpatialError),
}
