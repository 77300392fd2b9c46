//! Reachable-neighbor enumeration for graph search.
//!
//! A search expands a node by asking which adjacent cells the agent can move
//! to. [`ReachableNeighbors`] enumerates the 26 (or 6) neighbors of a cell
//! and keeps those a [`MovementRule`] accepts.
//!
//! # Example
//!
//! ```
//! use route_movement::{Footprint, GridWorld, LeapRule, ReachableNeighbors};
//! use cf_spatial::{GridBounds, VoxelCoord};
//!
//! let mut world = GridWorld::new();
//! world.fill(GridBounds::new(VoxelCoord::new(-4, 0, -4), VoxelCoord::new(4, 0, 4)), true);
//! let leap = LeapRule::new(&world, Footprint::single());
//!
//! let neighbors: Vec<_> = ReachableNeighbors::new(&leap)
//!     .neighbors(VoxelCoord::new(0, 1, 0))
//!     .collect();
//! assert!(neighbors.contains(&VoxelCoord::new(1, 1, 1)));
//! assert!(neighbors.contains(&VoxelCoord::new(0, 2, 0)));
//! assert!(!neighbors.contains(&VoxelCoord::new(1, 0, 0)));
//! ```

use std::fmt;

use cf_spatial::VoxelCoord;
use tracing::debug;

use crate::rule::MovementRule;

/// Generator for the neighbors an agent can move to.
///
/// Handles connectivity (6 vs 26 neighbors); the rule decides which
/// candidates survive.
pub struct ReachableNeighbors<'a, R: ?Sized> {
    rule: &'a R,
    allow_diagonal: bool,
}

impl<'a, R: MovementRule + ?Sized> ReachableNeighbors<'a, R> {
    /// Creates a generator over `rule`.
    ///
    /// Defaults to 26-connectivity (diagonal allowed).
    #[must_use]
    pub const fn new(rule: &'a R) -> Self {
        Self {
            rule,
            allow_diagonal: true,
        }
    }

    /// Sets whether diagonal movement is allowed.
    ///
    /// - `true`: 26-connectivity (all 26 neighbors)
    /// - `false`: 6-connectivity (face neighbors only)
    #[must_use]
    pub const fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }

    /// Returns the number of candidate neighbors based on connectivity.
    #[must_use]
    pub const fn neighbor_count(&self) -> usize {
        if self.allow_diagonal { 26 } else { 6 }
    }

    /// Returns an iterator over neighbors of `cell` reachable from it.
    pub fn neighbors(&self, cell: VoxelCoord) -> impl Iterator<Item = VoxelCoord> + 'a {
        let rule = self.rule;
        let candidates: Box<dyn Iterator<Item = VoxelCoord>> = if self.allow_diagonal {
            Box::new(cell.all_neighbors().into_iter())
        } else {
            Box::new(cell.face_neighbors().into_iter())
        };

        candidates.filter(move |&n| rule.is_reachable(n, cell))
    }
}

// Only a reference to the rule is held, so copying never needs `R: Clone`.
#[allow(clippy::expl_impl_clone_on_copy)]
impl<R: ?Sized> Clone for ReachableNeighbors<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for ReachableNeighbors<'_, R> {}

impl<R: ?Sized> fmt::Debug for ReachableNeighbors<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReachableNeighbors")
            .field("allow_diagonal", &self.allow_diagonal)
            .finish_non_exhaustive()
    }
}

/// Collects the neighbors of `cell` that `rule` accepts.
///
/// Shorthand for driving a search's successor function.
///
/// ```
/// use route_movement::{reachable_neighbors, Footprint, GridWorld, LeapRule};
/// use cf_spatial::VoxelCoord;
///
/// // Nothing to stand on, so nothing is reachable
/// let world: GridWorld = GridWorld::new();
/// let leap = LeapRule::new(&world, Footprint::single());
/// assert!(reachable_neighbors(VoxelCoord::new(0, 5, 0), &leap, true).is_empty());
/// ```
#[must_use]
pub fn reachable_neighbors<R: MovementRule + ?Sized>(
    cell: VoxelCoord,
    rule: &R,
    allow_diagonal: bool,
) -> Vec<VoxelCoord> {
    let reachable: Vec<_> = ReachableNeighbors::new(rule)
        .with_diagonal(allow_diagonal)
        .neighbors(cell)
        .collect();

    debug!(?cell, count = reachable.len(), allow_diagonal, "Expanded cell");
    reachable
}
