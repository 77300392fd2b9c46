//! Sparse voxel storage.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::bounds::GridBounds;
use crate::error::SpatialError;
use crate::voxel::VoxelCoord;

/// A sparse, hash-backed 3D voxel grid.
///
/// Only cells that were explicitly set take memory. The grid also records
/// how its cells map onto world space: each voxel is a cube of
/// `voxel_size` world units, with cell `(0, 0, 0)` starting at `origin`.
///
/// # Example
///
/// ```
/// use cf_spatial::{VoxelCoord, VoxelGrid};
/// use nalgebra::Point3;
///
/// let mut grid: VoxelGrid<bool> = VoxelGrid::new(0.5);
/// grid.set(VoxelCoord::new(2, 0, 0), true);
///
/// let cell = grid.world_to_grid(Point3::new(1.2, 0.1, 0.4));
/// assert_eq!(cell, VoxelCoord::new(2, 0, 0));
/// assert_eq!(grid.get(cell), Some(&true));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelGrid<T> {
    voxel_size: f64,
    origin: Point3<f64>,
    data: HashMap<VoxelCoord, T>,
}

impl<T> VoxelGrid<T> {
    /// Creates an empty grid with its origin at world `(0, 0, 0)`.
    ///
    /// A non-positive size is replaced by its magnitude (at least
    /// `f64::EPSILON`). Use [`VoxelGrid::try_new`] to reject it instead.
    #[must_use]
    pub fn new(voxel_size: f64) -> Self {
        Self::with_origin(voxel_size, Point3::origin())
    }

    /// Creates an empty grid whose cell `(0, 0, 0)` starts at `origin`.
    #[must_use]
    pub fn with_origin(voxel_size: f64, origin: Point3<f64>) -> Self {
        Self {
            voxel_size: voxel_size.abs().max(f64::EPSILON),
            origin,
            data: HashMap::new(),
        }
    }

    /// Creates an empty grid, validating the voxel size.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidVoxelSize`] if `voxel_size` is not a
    /// positive finite number.
    ///
    /// ```
    /// use cf_spatial::{SpatialError, VoxelGrid};
    ///
    /// assert!(VoxelGrid::<bool>::try_new(1.0).is_ok());
    /// assert!(matches!(
    ///     VoxelGrid::<bool>::try_new(f64::NAN),
    ///     Err(SpatialError::InvalidVoxelSize(_))
    /// ));
    /// ```
    pub fn try_new(voxel_size: f64) -> Result<Self, SpatialError> {
        if !(voxel_size.is_finite() && voxel_size > 0.0) {
            return Err(SpatialError::InvalidVoxelSize(voxel_size));
        }
        Ok(Self::new(voxel_size))
    }

    /// Edge length of one voxel in world units.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.voxel_size
    }

    /// World position of the minimum corner of cell `(0, 0, 0)`.
    #[must_use]
    pub const fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Number of stored cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no cell is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maps a world-space point to the cell containing it.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn world_to_grid(&self, point: Point3<f64>) -> VoxelCoord {
        let cell = (point - self.origin) / self.voxel_size;
        // `as` saturates out-of-range floats, which keeps this total.
        VoxelCoord::new(
            cell.x.floor() as i32,
            cell.y.floor() as i32,
            cell.z.floor() as i32,
        )
    }

    /// Value stored at `coord`, if any.
    #[must_use]
    pub fn get(&self, coord: VoxelCoord) -> Option<&T> {
        self.data.get(&coord)
    }

    /// Stores `value` at `coord`, returning the previous value.
    pub fn set(&mut self, coord: VoxelCoord, value: T) -> Option<T> {
        self.data.insert(coord, value)
    }

    /// Removes and returns the value at `coord`.
    pub fn remove(&mut self, coord: VoxelCoord) -> Option<T> {
        self.data.remove(&coord)
    }

    /// Returns `true` if a value is stored at `coord`.
    #[must_use]
    pub fn contains(&self, coord: VoxelCoord) -> bool {
        self.data.contains_key(&coord)
    }

}

impl<T: Clone> VoxelGrid<T> {
    /// Stores a clone of `value` in every cell of `region`.
    ///
    /// ```
    /// use cf_spatial::{GridBounds, VoxelCoord, VoxelGrid};
    ///
    /// let mut grid = VoxelGrid::new(1.0);
    /// let floor = GridBounds::new(VoxelCoord::new(-2, 0, -2), VoxelCoord::new(2, 0, 2));
    /// grid.fill(floor, true);
    /// assert_eq!(grid.len(), 25);
    /// ```
    pub fn fill(&mut self, region: GridBounds, value: T) {
        for coord in region {
            self.data.insert(coord, value.clone());
        }
    }
}

impl<T> Default for VoxelGrid<T> {
    fn default() -> Self {
        Self::new(1.0)
    }
}
