//! Movement feasibility rules for voxel pathfinding.
//!
//! A graph search over voxel cells needs to know which moves an agent can
//! actually make. This crate answers that per candidate step, for an agent
//! whose body covers several cells.
//!
//! # Overview
//!
//! - [`WorldOracle`]: read-only cell classification ([`Penetrability`])
//! - [`FootprintProvider`]: the cells the agent's body occupies
//! - [`MovementRule`]: the two questions a search asks, "may I step there"
//!   and "may I stand here"
//! - [`LeapRule`]: single-cell steps (including diagonals) whose swept volume
//!   is clear, starting from solid ground
//! - [`RuleSet`]: several rules combined; any one accepting is enough
//! - [`ReachableNeighbors`]: neighbor expansion filtered by a rule
//!
//! [`GridWorld`] and [`Footprint`] are the in-memory implementations of the
//! two inputs; [`AgentShape`] derives a footprint from collider dimensions.
//!
//! # Quick Start
//!
//! ```
//! use route_movement::{AgentShape, GridWorld, LeapRule, MovementRule};
//! use cf_spatial::{GridBounds, VoxelCoord};
//!
//! // A floor at y = 0 with a one-block step at x = 1
//! let mut world = GridWorld::new();
//! world.fill(GridBounds::new(VoxelCoord::new(-8, 0, -8), VoxelCoord::new(8, 0, 8)), true);
//! world.set(VoxelCoord::new(1, 1, 0), true);
//!
//! // 0.6 x 1.8 humanoid, two cells tall on a unit grid
//! let body = AgentShape::new(0.6, 1.8).footprint(world.voxel_size())?;
//! let leap = LeapRule::new(&world, body);
//!
//! let feet = VoxelCoord::new(0, 1, 0);
//! assert!(leap.is_walkable(feet));
//! assert!(leap.is_reachable(VoxelCoord::new(1, 2, 0), feet)); // onto the step
//! assert!(!leap.is_reachable(VoxelCoord::new(1, 1, 0), feet)); // into it
//! # Ok::<(), route_movement::MovementError>(())
//! ```
//!
//! # Coordinate System
//!
//! Y is up. The cell below `(x, y, z)` is `(x, y - 1, z)`.
//!
//! # Threading
//!
//! Rules hold no mutable state. A rule built over `Sync` inputs can be
//! shared between search threads by reference.

#![doc(html_root_url = "https://docs.rs/route-movement/0.7.0")]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod footprint;
pub mod leap;
pub mod neighbors;
mod rule;
mod world;

pub use config::AgentShape;
pub use error::MovementError;
pub use footprint::{Footprint, FootprintProvider, MAX_FOOTPRINT_EXTENT};
pub use leap::{LeapRule, MAX_LEAP_DISTANCE};
pub use neighbors::{ReachableNeighbors, reachable_neighbors};
pub use rule::{MovementRule, RuleSet};
pub use world::{Block, GridWorld, Penetrability, WorldOracle};
