//! Single-cell leaps, including diagonals.
//!
//! [`LeapRule`] accepts a step when three things hold:
//!
//! 1. The step moves at most one cell along every axis (Chebyshev distance
//!    of at most 1).
//! 2. For each footprint offset, every cell of the box swept between the
//!    offset's start and end positions is penetrable. The two cells directly
//!    below the offset's start and end are skipped: they are the ground the
//!    body stands on and are expected to be solid.
//! 3. The origin cell is walkable: open space with solid ground below.
//!
//! Only the origin's walkability is checked, so `is_reachable(a, b)` and
//! `is_reachable(b, a)` can differ. Leaping off a ledge into the air is a
//! legal step; leaping back from mid-air is not.
//!
//! # Example
//!
//! ```
//! use route_movement::{Footprint, GridWorld, LeapRule, MovementRule};
//! use cf_spatial::{GridBounds, VoxelCoord};
//!
//! let mut world = GridWorld::new();
//! world.fill(GridBounds::new(VoxelCoord::new(-4, 0, -4), VoxelCoord::new(4, 0, 4)), true);
//!
//! let leap = LeapRule::new(&world, Footprint::column(2));
//!
//! // Diagonal step across the floor
//! assert!(leap.is_reachable(VoxelCoord::new(1, 1, 1), VoxelCoord::new(0, 1, 0)));
//! // Two cells at once is never a leap
//! assert!(!leap.is_reachable(VoxelCoord::new(2, 1, 0), VoxelCoord::new(0, 1, 0)));
//! ```

use cf_spatial::{GridBounds, VoxelCoord};

use crate::footprint::FootprintProvider;
use crate::rule::MovementRule;
use crate::world::WorldOracle;

/// Largest per-axis distance a single leap may cover.
pub const MAX_LEAP_DISTANCE: u32 = 1;

/// The leap movement rule.
///
/// Holds the world it queries and the body shape it sweeps. Both are
/// injected at construction; pass references (`&world`) to share them
/// between rules. The rule keeps no state between calls, so it is `Sync`
/// whenever the world and footprint are.
#[derive(Debug, Clone)]
pub struct LeapRule<W, F> {
    world: W,
    footprint: F,
}

impl<W, F> LeapRule<W, F> {
    /// Creates a leap rule over `world` for a body shaped like `footprint`.
    #[must_use]
    pub const fn new(world: W, footprint: F) -> Self {
        Self { world, footprint }
    }

    /// The world this rule queries.
    #[must_use]
    pub const fn world(&self) -> &W {
        &self.world
    }

    /// The body shape this rule sweeps.
    #[must_use]
    pub const fn footprint(&self) -> &F {
        &self.footprint
    }
}

impl<W: WorldOracle, F: FootprintProvider> LeapRule<W, F> {
    /// Every cell whose penetrability the step from `from` to `to` depends on.
    ///
    /// Yields, footprint offset by offset, the cells of the box swept by that
    /// offset, minus the cells directly below its start and end. Cells shared
    /// by several offsets are yielded once per offset. The step-size bound is
    /// not applied here.
    ///
    /// ```
    /// use route_movement::{Footprint, GridWorld, LeapRule};
    /// use cf_spatial::VoxelCoord;
    ///
    /// let world: GridWorld = GridWorld::new();
    /// let leap = LeapRule::new(&world, Footprint::single());
    ///
    /// // Stepping up one cell: the start cell's support is skipped
    /// let cells: Vec<_> = leap
    ///     .clearance_cells(VoxelCoord::new(0, 2, 0), VoxelCoord::new(0, 1, 0))
    ///     .collect();
    /// assert_eq!(cells, vec![VoxelCoord::new(0, 2, 0)]);
    /// ```
    pub fn clearance_cells(
        &self,
        to: VoxelCoord,
        from: VoxelCoord,
    ) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.footprint
            .occupied_offsets()
            .iter()
            .flat_map(move |&offset| swept_cells(to + offset, from + offset))
    }

    /// Whether every swept cell of the step is open.
    fn swept_volume_clear(&self, to: VoxelCoord, from: VoxelCoord) -> bool {
        self.clearance_cells(to, from).all(|cell| self.world.is_penetrable(cell))
    }
}

/// Cells of the box between one offset's end and start, excluding the two
/// support cells beneath them.
fn swept_cells(to: VoxelCoord, from: VoxelCoord) -> impl Iterator<Item = VoxelCoord> {
    let to_below = to.below();
    let from_below = from.below();
    GridBounds::new(to, from)
        .into_iter()
        .filter(move |&cell| cell != to_below && cell != from_below)
}

impl<W: WorldOracle, F: FootprintProvider> MovementRule for LeapRule<W, F> {
    fn is_reachable(&self, to: VoxelCoord, from: VoxelCoord) -> bool {
        if to.chebyshev_distance(from) > MAX_LEAP_DISTANCE {
            return false;
        }
        self.swept_volume_clear(to, from) && self.is_walkable(from)
    }

    fn is_walkable(&self, cell: VoxelCoord) -> bool {
        self.world.is_penetrable(cell) && !self.world.is_penetrable(cell.below())
    }
}
