//! Physics simulation powered by `rapier`.
//!
//! [`PhysicsWorld`] is the seam between the simulation and the rigid-body
//! engine, [`PhysicsSimulator`] implements it on top of `rapier2d`, and
//! [`GravityField`] computes the attraction that is fed into each step.

pub mod gravity;
pub mod simulator;
pub mod world;

pub use gravity::*;
pub use simulator::*;
pub use world::*;

/// Fixed simulation timestep in seconds.
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const VELOCITY_ITERATIONS: usize = 6;
pub const POSITION_ITERATIONS: usize = 2;
/// Furthest a dynamic body may travel in a single step, in world units.
pub const MAX_TRANSLATION: f32 = 2.0;

static_assertions::const_assert!(VELOCITY_ITERATIONS > 0);
