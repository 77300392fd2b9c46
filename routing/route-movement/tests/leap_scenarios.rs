//! Scenario tests for the leap rule against small hand-built worlds.
//!
//! Run with: cargo test -p route-movement --test leap_scenarios

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::thread;

use cf_spatial::{GridBounds, VoxelCoord};
use route_movement::{
    AgentShape, Footprint, GridWorld, LeapRule, MovementRule, Penetrability, RuleSet,
    WorldOracle, reachable_neighbors,
};

// =============================================================================
// Fixtures
// =============================================================================

fn c(x: i32, y: i32, z: i32) -> VoxelCoord {
    VoxelCoord::new(x, y, z)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Solid floor at y = 0 spanning x, z in -10..=10; air everywhere else.
fn floor_world() -> GridWorld {
    let mut world = GridWorld::new();
    world.fill(GridBounds::new(c(-10, 0, -10), c(10, 0, 10)), true);
    world
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn diagonal_leap_across_floor() {
    let world = floor_world();
    let leap = LeapRule::new(&world, Footprint::single());
    assert!(leap.is_reachable(c(1, 1, 1), c(0, 1, 0)));
}

#[test]
fn wall_at_destination_blocks() {
    let mut world = floor_world();
    world.set(c(1, 1, 0), true);
    let leap = LeapRule::new(&world, Footprint::single());
    assert!(!leap.is_reachable(c(1, 1, 0), c(0, 1, 0)));
}

#[test]
fn tall_body_blocked_at_head_height() {
    let mut world = floor_world();
    world.set(c(1, 2, 0), true);

    let short = LeapRule::new(&world, Footprint::single());
    let tall = LeapRule::new(&world, Footprint::column(2));

    assert!(short.is_reachable(c(1, 1, 0), c(0, 1, 0)));
    assert!(!tall.is_reachable(c(1, 1, 0), c(0, 1, 0)));
}

#[test]
fn floating_origin_is_never_reachable_from() {
    let world = floor_world();
    let leap = LeapRule::new(&world, Footprint::single());

    let from = c(0, 5, 0);
    assert!(!leap.is_walkable(from));
    for to in from.all_neighbors() {
        assert!(!leap.is_reachable(to, from));
    }
    assert!(!leap.is_reachable(from, from));
}

// =============================================================================
// Vertical steps
// =============================================================================

#[test]
fn step_up_onto_block() {
    let mut world = floor_world();
    world.set(c(1, 1, 0), true);
    let leap = LeapRule::new(&world, Footprint::single());

    assert!(leap.is_reachable(c(1, 2, 0), c(0, 1, 0)));
}

#[test]
fn step_down_from_block() {
    let mut world = floor_world();
    world.set(c(1, 1, 0), true);
    let leap = LeapRule::new(&world, Footprint::single());

    assert!(leap.is_reachable(c(0, 1, 0), c(1, 2, 0)));
}

#[test]
fn low_ceiling_blocks_step_up() {
    let mut world = floor_world();
    world.set(c(1, 1, 0), true);
    world.set(c(0, 2, 0), true);
    let leap = LeapRule::new(&world, Footprint::single());

    // The swept box covers the cell above the origin
    assert!(!leap.is_reachable(c(1, 2, 0), c(0, 1, 0)));
}

#[test]
fn leaping_off_a_ledge_is_one_way() {
    let world = floor_world();
    let leap = LeapRule::new(&world, Footprint::single());

    // Jumping up into open air is fine; nothing supports the way back
    assert!(leap.is_reachable(c(0, 2, 0), c(0, 1, 0)));
    assert!(!leap.is_reachable(c(0, 1, 0), c(0, 2, 0)));
}

#[test]
fn support_cell_of_origin_is_not_checked() {
    // The cell directly below the origin is excluded from clearance even when
    // it is the destination.
    let world = floor_world();
    let leap = LeapRule::new(&world, Footprint::single());
    assert!(leap.is_reachable(c(0, 0, 0), c(0, 1, 0)));
    assert!(!leap.is_reachable(c(1, 0, 0), c(0, 1, 0)));
}

// =============================================================================
// Step bound and null step
// =============================================================================

#[test]
fn steps_longer_than_one_cell_rejected() {
    let world = floor_world();
    let leap = LeapRule::new(&world, Footprint::single());
    let from = c(0, 1, 0);

    for to in [c(2, 1, 0), c(0, 1, 2), c(-2, 1, -2), c(0, 3, 0), c(1, 1, -2)] {
        assert!(!leap.is_reachable(to, from), "{to:?} should be out of range");
    }
}

#[test]
fn null_step_on_floor() {
    let world = floor_world();
    let leap = LeapRule::new(&world, Footprint::column(2));
    assert!(leap.is_reachable(c(3, 1, 3), c(3, 1, 3)));
}

#[test]
fn null_step_with_blocked_head() {
    let mut world = floor_world();
    world.set(c(0, 2, 0), true);
    let leap = LeapRule::new(&world, Footprint::column(2));

    // Standing is fine, occupying the cell with this body is not
    assert!(leap.is_walkable(c(0, 1, 0)));
    assert!(!leap.is_reachable(c(0, 1, 0), c(0, 1, 0)));
}

// =============================================================================
// Footprints
// =============================================================================

#[test]
fn wide_body_needs_wide_gap() {
    let mut world = floor_world();
    // One-cell doorway at x = 2 in a wall along z = 1
    for x in -3..=3 {
        if x != 2 {
            world.set(c(x, 1, 1), true);
        }
    }

    let narrow = LeapRule::new(&world, Footprint::single());
    assert!(narrow.is_reachable(c(2, 1, 1), c(2, 1, 0)));

    let body = AgentShape::new(3.0, 1.0).footprint(1.0).unwrap();
    let wide = LeapRule::new(&world, body);
    assert!(!wide.is_reachable(c(2, 1, 1), c(2, 1, 0)));
}

#[test]
fn shape_derived_footprint_matches_column() {
    let world = floor_world();
    let body = AgentShape::default().with_width(0.5).with_height(1.7);
    let from_shape = LeapRule::new(&world, body.footprint(1.0).unwrap());
    let column = LeapRule::new(&world, Footprint::column(2));

    for to in c(0, 1, 0).all_neighbors() {
        assert_eq!(
            from_shape.is_reachable(to, c(0, 1, 0)),
            column.is_reachable(to, c(0, 1, 0))
        );
    }
}

// =============================================================================
// Worlds
// =============================================================================

#[test]
fn unloaded_space_policy_decides_edge_steps() {
    init_tracing();
    let loaded = GridBounds::new(c(-10, -10, -10), c(10, 10, 10));

    let solid_edge = floor_world().with_loaded_region(loaded, Penetrability::Solid);
    let leap = LeapRule::new(&solid_edge, Footprint::single());
    assert!(!leap.is_reachable(c(11, 1, 0), c(10, 1, 0)));

    let open_edge = floor_world().with_loaded_region(loaded, Penetrability::Penetrable);
    let leap = LeapRule::new(&open_edge, Footprint::single());
    assert!(leap.is_reachable(c(11, 1, 0), c(10, 1, 0)));
}

/// Unbounded terrain: solid below y = 1.
struct Terrain;

impl WorldOracle for Terrain {
    fn classify(&self, cell: VoxelCoord) -> Penetrability {
        if cell.y < 1 {
            Penetrability::Solid
        } else {
            Penetrability::Penetrable
        }
    }
}

#[test]
fn custom_oracle() {
    let leap = LeapRule::new(Terrain, Footprint::column(2));
    let from = c(1_000_000, 1, -1_000_000);
    assert!(leap.is_walkable(from));
    assert!(leap.is_reachable(c(1_000_001, 1, -999_999), from));
    assert!(!leap.is_reachable(c(1_000_001, 0, -999_999), from));
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn rule_set_with_leap() {
    init_tracing();
    let world = floor_world();
    let rules = RuleSet::new()
        .with_rule(LeapRule::new(&world, Footprint::column(2)))
        .with_rule(LeapRule::new(&world, Footprint::single()));

    assert_eq!(rules.len(), 2);
    assert!(rules.is_walkable(c(0, 1, 0)));
    assert!(rules.is_reachable(c(1, 1, 0), c(0, 1, 0)));

    let neighbors = reachable_neighbors(c(0, 1, 0), &rules, true);
    assert_eq!(neighbors.len(), 18);
}

#[test]
fn shared_across_threads() {
    let world = Arc::new(floor_world());
    let leap = Arc::new(LeapRule::new(Arc::clone(&world), Footprint::column(2)));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let leap = Arc::clone(&leap);
            thread::spawn(move || leap.is_reachable(c(i + 1, 1, 0), c(i, 1, 0)))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
