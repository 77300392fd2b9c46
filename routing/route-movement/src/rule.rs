//! The capability shared by every movement rule.
//!
//! A pathfinder asks a [`MovementRule`] two questions: may the agent step
//! from one cell to another, and may it stand in a cell at all. Each kind of
//! movement (leaping, walking, climbing, flying) is its own independent
//! implementation. A [`RuleSet`] combines several of them.
//!
//! # Example
//!
//! ```
//! use route_movement::{Footprint, GridWorld, LeapRule, MovementRule, RuleSet};
//! use cf_spatial::{GridBounds, VoxelCoord};
//!
//! let mut world = GridWorld::new();
//! world.fill(GridBounds::new(VoxelCoord::new(-4, 0, -4), VoxelCoord::new(4, 0, 4)), true);
//!
//! let rules = RuleSet::new().with_rule(LeapRule::new(world, Footprint::single()));
//! assert!(rules.is_reachable(VoxelCoord::new(1, 1, 0), VoxelCoord::new(0, 1, 0)));
//! ```

use std::fmt;
use std::sync::Arc;

use cf_spatial::VoxelCoord;

/// A movement capability evaluated per candidate step.
///
/// Implementations are pure predicates: the same inputs against the same
/// world always give the same answer, and no input is an error.
pub trait MovementRule {
    /// Whether the agent standing at `from` may move to `to`.
    fn is_reachable(&self, to: VoxelCoord, from: VoxelCoord) -> bool;

    /// Whether `cell` is a legal standing position.
    fn is_walkable(&self, cell: VoxelCoord) -> bool;
}

impl<R: MovementRule + ?Sized> MovementRule for &R {
    fn is_reachable(&self, to: VoxelCoord, from: VoxelCoord) -> bool {
        (**self).is_reachable(to, from)
    }

    fn is_walkable(&self, cell: VoxelCoord) -> bool {
        (**self).is_walkable(cell)
    }
}

impl<R: MovementRule + ?Sized> MovementRule for Box<R> {
    fn is_reachable(&self, to: VoxelCoord, from: VoxelCoord) -> bool {
        (**self).is_reachable(to, from)
    }

    fn is_walkable(&self, cell: VoxelCoord) -> bool {
        (**self).is_walkable(cell)
    }
}

impl<R: MovementRule + ?Sized> MovementRule for Arc<R> {
    fn is_reachable(&self, to: VoxelCoord, from: VoxelCoord) -> bool {
        (**self).is_reachable(to, from)
    }

    fn is_walkable(&self, cell: VoxelCoord) -> bool {
        (**self).is_walkable(cell)
    }
}

/// Dispatches over the active movement rules.
///
/// A step is reachable when any member rule accepts it, and a cell is
/// walkable when any member rule can stand there. An empty set accepts
/// nothing.
#[derive(Default)]
pub struct RuleSet<'a> {
    rules: Vec<Box<dyn MovementRule + Send + Sync + 'a>>,
}

impl<'a> RuleSet<'a> {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, returning the extended set.
    #[must_use]
    pub fn with_rule(mut self, rule: impl MovementRule + Send + Sync + 'a) -> Self {
        self.push(rule);
        self
    }

    /// Adds a rule in place.
    pub fn push(&mut self, rule: impl MovementRule + Send + Sync + 'a) {
        self.rules.push(Box::new(rule));
    }

    /// Number of member rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl MovementRule for RuleSet<'_> {
    fn is_reachable(&self, to: VoxelCoord, from: VoxelCoord) -> bool {
        self.rules.iter().any(|rule| rule.is_reachable(to, from))
    }

    fn is_walkable(&self, cell: VoxelCoord) -> bool {
        self.rules.iter().any(|rule| rule.is_walkable(cell))
    }
}

impl fmt::Debug for RuleSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts exactly one step and one standing cell.
    struct Only {
        to: VoxelCoord,
        from: VoxelCoord,
    }

    impl MovementRule for Only {
        fn is_reachable(&self, to: VoxelCoord, from: VoxelCoord) -> bool {
            to == self.to && from == self.from
        }

        fn is_walkable(&self, cell: VoxelCoord) -> bool {
            cell == self.from
        }
    }

    fn c(x: i32, y: i32, z: i32) -> VoxelCoord {
        VoxelCoord::new(x, y, z)
    }

    #[test]
    fn test_empty_set_rejects() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert!(!rules.is_reachable(c(0, 0, 0), c(0, 0, 0)));
        assert!(!rules.is_walkable(c(0, 0, 0)));
    }

    #[test]
    fn test_any_rule_accepts() {
        let a = Only {
            to: c(1, 0, 0),
            from: c(0, 0, 0),
        };
        let b = Only {
            to: c(0, 0, 1),
            from: c(0, 0, 0),
        };
        let rules = RuleSet::new().with_rule(a).with_rule(b);

        assert_eq!(rules.len(), 2);
        assert!(rules.is_reachable(c(1, 0, 0), c(0, 0, 0)));
        assert!(rules.is_reachable(c(0, 0, 1), c(0, 0, 0)));
        assert!(!rules.is_reachable(c(-1, 0, 0), c(0, 0, 0)));
        assert!(rules.is_walkable(c(0, 0, 0)));
    }

    #[test]
    fn test_borrowed_and_shared_rules() {
        let owned = Only {
            to: c(1, 1, 1),
            from: c(0, 0, 0),
        };
        let shared = Arc::new(Only {
            to: c(2, 2, 2),
            from: c(1, 1, 1),
        });

        let mut rules = RuleSet::new();
        rules.push(&owned);
        rules.push(Arc::clone(&shared));

        assert!(rules.is_reachable(c(1, 1, 1), c(0, 0, 0)));
        assert!(rules.is_reachable(c(2, 2, 2), c(1, 1, 1)));
        assert!(shared.is_walkable(c(1, 1, 1)));
        assert_eq!(format!("{rules:?}"), "RuleSet { rules: 2 }");
    }
}
