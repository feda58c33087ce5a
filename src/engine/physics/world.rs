use crate::core::{Material, ShapeDesc};
use bon::Builder;
use nalgebra::Vector2;
use serde::Deserialize;
use snafu::Snafu;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum PhysicsError {
    #[snafu(display("The body handle does not refer to a live body"))]
    InvalidHandle,

    #[snafu(display("The engine rejected the fixture shape: {reason}"))]
    InvalidShape { reason: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    /// Infinite mass, never moved by forces. Used for arena boundaries.
    Static,
    #[default]
    Dynamic,
    /// Moved by its velocity only, ignores forces and collisions.
    Kinematic,
}

/// Everything the engine needs to create a body, before any fixture is attached.
#[derive(Debug, Copy, Clone, PartialEq, Builder)]
pub struct BodyDef {
    #[builder(default)]
    pub body_type: BodyType,
    #[builder(default = Vector2::zeros())]
    pub position: Vector2<f32>,
    #[builder(default = 0.0)]
    pub angle: f32,
    #[builder(default = Vector2::zeros())]
    pub linear_velocity: Vector2<f32>,
}

/// The rigid-body engine as seen by the simulation.
///
/// The engine owns all bodies. Callers only ever hold [`PhysicsWorld::Handle`]s
/// and have to expect accessors to return `None` once a body is gone.
pub trait PhysicsWorld {
    type Handle: Copy + Eq + Hash + Debug;

    fn create_body(&mut self, def: &BodyDef) -> Self::Handle;

    fn create_fixture(
        &mut self,
        body: Self::Handle,
        shape: &ShapeDesc,
        material: &Material,
    ) -> Result<(), PhysicsError>;

    /// Forces accumulate until the next [`PhysicsWorld::step`] consumes them.
    fn apply_force_to_center(&mut self, body: Self::Handle, force: Vector2<f32>, wake: bool);

    fn step(&mut self, dt: f32, velocity_iterations: usize, position_iterations: usize);

    /// Destroys every body. The world stays usable afterwards.
    fn dispose(&mut self);

    fn destroy_body(&mut self, body: Self::Handle);

    fn position(&self, body: Self::Handle) -> Option<Vector2<f32>>;

    fn angle(&self, body: Self::Handle) -> Option<f32>;

    fn linear_velocity(&self, body: Self::Handle) -> Option<Vector2<f32>>;

    fn set_linear_velocity(&mut self, body: Self::Handle, velocity: Vector2<f32>);

    /// Mass derived from the attached fixtures. Non-dynamic bodies report zero.
    fn mass(&self, body: Self::Handle) -> Option<f32>;

    fn body_type(&self, body: Self::Handle) -> Option<BodyType>;

    fn body_count(&self) -> usize;
}
