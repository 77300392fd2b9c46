//! Spatial foundation types for voxel pathfinding.
//!
//! This crate provides the grid-space vocabulary shared by the routing crates:
//!
//! - [`VoxelCoord`] - Integer cell coordinates with wrapping arithmetic
//! - [`GridBounds`] - Inclusive axis-aligned boxes and their cell enumeration
//! - [`VoxelGrid`] - Sparse per-cell storage with world-space conversion
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used from
//! CLI tools, servers, WASM or another engine's plugin layer.
//!
//! # Coordinate System
//!
//! Y is the vertical axis. The cell "below" `(x, y, z)` is `(x, y - 1, z)`,
//! available as [`VoxelCoord::below`] and [`VoxelCoord::DOWN`].
//!
//! World coordinates are continuous `f64` values; grid coordinates are
//! discrete `i32` values. [`VoxelGrid`] converts between the two.
//!
//! # Example
//!
//! ```
//! use cf_spatial::{GridBounds, VoxelCoord, VoxelGrid};
//!
//! let mut grid: VoxelGrid<bool> = VoxelGrid::new(1.0);
//! grid.fill(
//!     GridBounds::new(VoxelCoord::new(-4, 0, -4), VoxelCoord::new(4, 0, 4)),
//!     true,
//! );
//!
//! let feet = VoxelCoord::new(0, 1, 0);
//! assert!(!grid.contains(feet));
//! assert!(grid.contains(feet.below()));
//!
//! // Every cell a one-step diagonal move sweeps through
//! let swept = GridBounds::new(feet, VoxelCoord::new(1, 1, 1));
//! assert_eq!(swept.iter().count(), 4);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod error;
mod grid;
mod voxel;

pub use bounds::{GridBounds, GridBoundsIter};
pub use error::SpatialError;
pub use grid::VoxelGrid;
pub use voxel::VoxelCoord;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
