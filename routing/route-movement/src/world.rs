//! World queries used by movement rules.
//!
//! Movement rules never own or mutate the world. They ask a [`WorldOracle`]
//! for the [`Penetrability`] of individual cells. The oracle must answer for
//! every coordinate, including space that is not loaded; deciding what
//! unloaded space means is the oracle's job, not the rule's.
//!
//! [`GridWorld`] is an in-memory oracle over a sparse [`VoxelGrid`].
//!
//! # Example
//!
//! ```
//! use route_movement::{GridWorld, Penetrability, WorldOracle};
//! use cf_spatial::{GridBounds, VoxelCoord};
//!
//! let mut world = GridWorld::new();
//! world.set(VoxelCoord::new(0, 0, 0), true);
//!
//! assert_eq!(world.classify(VoxelCoord::new(0, 0, 0)), Penetrability::Solid);
//! assert_eq!(world.classify(VoxelCoord::new(0, 1, 0)), Penetrability::Penetrable);
//!
//! // Treat everything outside a loaded chunk as solid
//! let chunk = GridBounds::new(VoxelCoord::new(-8, -8, -8), VoxelCoord::new(7, 7, 7));
//! let world = world.with_loaded_region(chunk, Penetrability::Solid);
//! assert!(!world.is_penetrable(VoxelCoord::new(100, 1, 0)));
//! ```

use std::sync::Arc;

use cf_spatial::{GridBounds, VoxelCoord, VoxelGrid};
use nalgebra::Point3;
use tracing::trace;

use crate::error::MovementError;

/// Whether a body may occupy a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Penetrability {
    /// Open space: a body may occupy or pass through the cell.
    #[default]
    Penetrable,
    /// Blocks passage and can provide support from below.
    Solid,
}

impl Penetrability {
    /// Returns `true` for [`Penetrability::Penetrable`].
    #[must_use]
    pub const fn is_penetrable(self) -> bool {
        matches!(self, Self::Penetrable)
    }

    /// Returns `true` for [`Penetrability::Solid`].
    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Solid)
    }
}

/// Read-only cell classification.
///
/// Implementations must be total: every coordinate gets an answer. Rules may
/// be evaluated from several threads at once, so an oracle shared that way
/// must tolerate concurrent reads (`Sync`).
pub trait WorldOracle {
    /// Classifies a single cell.
    fn classify(&self, cell: VoxelCoord) -> Penetrability;

    /// Shorthand for `classify(cell).is_penetrable()`.
    fn is_penetrable(&self, cell: VoxelCoord) -> bool {
        self.classify(cell).is_penetrable()
    }
}

impl<W: WorldOracle + ?Sized> WorldOracle for &W {
    fn classify(&self, cell: VoxelCoord) -> Penetrability {
        (**self).classify(cell)
    }
}

impl<W: WorldOracle + ?Sized> WorldOracle for Box<W> {
    fn classify(&self, cell: VoxelCoord) -> Penetrability {
        (**self).classify(cell)
    }
}

impl<W: WorldOracle + ?Sized> WorldOracle for Arc<W> {
    fn classify(&self, cell: VoxelCoord) -> Penetrability {
        (**self).classify(cell)
    }
}

/// Cell payload stored in a [`GridWorld`].
pub trait Block {
    /// How this block affects movement.
    fn penetrability(&self) -> Penetrability;
}

/// `true` marks an obstacle, matching obstacle grids used for routing.
impl Block for bool {
    fn penetrability(&self) -> Penetrability {
        if *self {
            Penetrability::Solid
        } else {
            Penetrability::Penetrable
        }
    }
}

impl Block for Penetrability {
    fn penetrability(&self) -> Penetrability {
        *self
    }
}

/// A [`WorldOracle`] backed by a sparse voxel grid.
///
/// Cells without a stored block are air. When a loaded region is set, every
/// cell outside it takes the configured unloaded classification, whatever the
/// grid stores there.
#[derive(Debug, Clone)]
pub struct GridWorld<T = bool> {
    grid: VoxelGrid<T>,
    loaded: Option<(GridBounds, Penetrability)>,
}

impl<T> GridWorld<T> {
    /// Creates an empty world with unit voxels and no loaded-region limit.
    #[must_use]
    pub fn new() -> Self {
        Self::from_grid(VoxelGrid::new(1.0))
    }

    /// Creates an empty world, validating the voxel size.
    ///
    /// # Errors
    ///
    /// Returns [`MovementError::Spatial`] if `voxel_size` is not positive and finite.
    pub fn try_new(voxel_size: f64) -> Result<Self, MovementError> {
        Ok(Self::from_grid(VoxelGrid::try_new(voxel_size)?))
    }

    /// Wraps an existing grid.
    #[must_use]
    pub const fn from_grid(grid: VoxelGrid<T>) -> Self {
        Self { grid, loaded: None }
    }

    /// Restricts answers from the grid to `region`.
    ///
    /// Cells outside `region` are classified as `unloaded`.
    #[must_use]
    pub fn with_loaded_region(mut self, region: GridBounds, unloaded: Penetrability) -> Self {
        self.loaded = Some((region, unloaded));
        self
    }

    /// The loaded region and the classification used outside it, if set.
    #[must_use]
    pub const fn loaded_region(&self) -> Option<(GridBounds, Penetrability)> {
        self.loaded
    }

    /// The backing grid.
    #[must_use]
    pub const fn grid(&self) -> &VoxelGrid<T> {
        &self.grid
    }

    /// Edge length of one voxel in world units.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.grid.voxel_size()
    }

    /// Places a block, returning the one it replaced.
    pub fn set(&mut self, cell: VoxelCoord, block: T) -> Option<T> {
        self.grid.set(cell, block)
    }

    /// Removes a block, leaving air.
    pub fn remove(&mut self, cell: VoxelCoord) -> Option<T> {
        self.grid.remove(cell)
    }
}

impl<T: Clone> GridWorld<T> {
    /// Places `block` in every cell of `region`.
    pub fn fill(&mut self, region: GridBounds, block: T) {
        self.grid.fill(region, block);
    }
}

impl<T: Block> GridWorld<T> {
    /// Classifies the cell containing a world-space point.
    #[must_use]
    pub fn classify_at_world(&self, point: Point3<f64>) -> Penetrability {
        self.classify(self.grid.world_to_grid(point))
    }
}

impl<T> Default for GridWorld<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Block> WorldOracle for GridWorld<T> {
    fn classify(&self, cell: VoxelCoord) -> Penetrability {
        if let Some((_, unloaded)) = self.loaded.filter(|(region, _)| !region.contains(cell)) {
            trace!(?cell, ?unloaded, "query outside loaded region");
            return unloaded;
        }
        self.grid
            .get(cell)
            .map_or(Penetrability::Penetrable, Block::penetrability)
    }
}
