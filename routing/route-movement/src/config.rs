//! Agent shape configuration.
//!
//! An [`AgentShape`] describes an agent's collider in world units. Rules
//! work on whole cells, so the shape is rounded up to a [`Footprint`] for a
//! given voxel size.
//!
//! # Example
//!
//! ```
//! use route_movement::AgentShape;
//! use cf_spatial::VoxelCoord;
//!
//! // A 0.6 x 1.8 humanoid on a 1.0 unit grid occupies a 1x2x1 column
//! let shape = AgentShape::default().with_width(0.6).with_height(1.8);
//! let footprint = shape.footprint(1.0)?;
//! assert_eq!(footprint.len(), 2);
//! assert!(footprint.contains(VoxelCoord::new(0, 1, 0)));
//! # Ok::<(), route_movement::MovementError>(())
//! ```

use cf_spatial::{GridBounds, SpatialError, VoxelCoord};
use tracing::debug;

use crate::error::MovementError;
use crate::footprint::{Footprint, MAX_FOOTPRINT_EXTENT};

/// Physical dimensions of an agent's collider.
///
/// `width` applies to both horizontal axes (X and Z), `height` to Y. The
/// agent's reference cell is the bottom-center cell of the resulting box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentShape {
    /// Horizontal extent in world units.
    pub width: f64,
    /// Vertical extent in world units.
    pub height: f64,
}

impl Default for AgentShape {
    /// A single-cell agent on a unit grid.
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl AgentShape {
    /// Creates a shape with the given width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Sets the horizontal extent.
    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the vertical extent.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Checks that both extents are positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`MovementError::InvalidShape`] otherwise.
    pub fn validate(&self) -> Result<(), MovementError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(MovementError::InvalidShape {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Number of whole voxels covering `(width, height)`.
    ///
    /// # Errors
    ///
    /// Fails if the shape or voxel size is invalid, or if either extent
    /// exceeds [`MAX_FOOTPRINT_EXTENT`].
    pub fn extent_in_voxels(&self, voxel_size: f64) -> Result<(u32, u32), MovementError> {
        if !(voxel_size.is_finite() && voxel_size > 0.0) {
            return Err(SpatialError::InvalidVoxelSize(voxel_size).into());
        }
        self.validate()?;

        let width = voxels_covering("x", self.width / voxel_size)?;
        let height = voxels_covering("y", self.height / voxel_size)?;
        Ok((width, height))
    }

    /// Rounds the shape up to whole voxels.
    ///
    /// With `w` voxels of width, horizontal offsets run from `-(w - 1) / 2`
    /// to `w / 2` on X and Z; vertical offsets run from `0` to `h - 1`.
    ///
    /// # Errors
    ///
    /// See [`AgentShape::extent_in_voxels`].
    pub fn footprint(&self, voxel_size: f64) -> Result<Footprint, MovementError> {
        let (width, height) = self.extent_in_voxels(voxel_size)?;

        // Both extents are within MAX_FOOTPRINT_EXTENT, so these fit in i32.
        let w = i32::try_from(width).unwrap_or(1);
        let h = i32::try_from(height).unwrap_or(1);
        let low = -((w - 1) / 2);
        let bounds = GridBounds::new(
            VoxelCoord::new(low, 0, low),
            VoxelCoord::new(low + w - 1, h - 1, low + w - 1),
        );

        debug!(
            width_voxels = width,
            height_voxels = height,
            voxel_size,
            "Derived agent footprint"
        );
        Footprint::from_bounds(bounds)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn voxels_covering(axis: &'static str, cells: f64) -> Result<u32, MovementError> {
    // Absorb float noise such as 1.8 / 0.6 = 3.0000000000000004.
    let rounded = (cells - 1e-9).ceil().max(1.0);
    if rounded > f64::from(MAX_FOOTPRINT_EXTENT) {
        return Err(MovementError::FootprintTooLarge {
            axis,
            extent: if rounded >= u64::MAX as f64 {
                u64::MAX
            } else {
                rounded as u64
            },
            max: MAX_FOOTPRINT_EXTENT,
        });
    }
    Ok(rounded as u32)
}
