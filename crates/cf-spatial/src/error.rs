//! Error types for spatial operations.

/// Errors that can occur when building spatial structures.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The voxel size must be a positive finite number.
    #[error("voxel size must be positive and finite, got {0}")]
    InvalidVoxelSize(f64),
}
