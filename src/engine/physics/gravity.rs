//! Pairwise gravitational attraction between a designated set of bodies.
//!
//! Only bodies explicitly listed as participants attract each other, the rest
//! of the registry (arena edges, decoration) is left to the rigid-body engine.

use crate::core::BodyRegistry;
use crate::physics::{BodyType, PhysicsWorld};
use itertools::Itertools;
use log::trace;
use nalgebra::Vector2;
use num_traits::Zero;
use snafu::{OptionExt, Snafu};

/// The physical constant. Scenarios usually scale it up to be visible.
pub const GRAVITATIONAL_CONSTANT: f32 = 6.67430e-11;

/// Separations below this are treated as this distance.
pub const MIN_DISTANCE: f32 = 1e-3;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(context(suffix(Err)))]
pub enum GravityError {
    #[snafu(display("Gravity participant {name:?} is not registered"))]
    UnknownBody { name: String },

    #[snafu(display("Gravity participant {name:?} no longer exists in the physics world"))]
    StaleBody { name: String },
}

/// Force exerted on `a` by `b`, pulling `a` towards `b`.
///
/// The distance is floored at `min_distance` so the result stays finite.
/// Coincident bodies have no direction to pull in and get no force.
pub fn gravitational_force(
    g: f32,
    min_distance: f32,
    pos_a: Vector2<f32>,
    mass_a: f32,
    pos_b: Vector2<f32>,
    mass_b: f32,
) -> Vector2<f32> {
    let offset = pos_b - pos_a;
    let distance = offset.norm();
    if distance == 0.0 || !distance.is_finite() {
        return Vector2::zero();
    }

    let clamped = distance.max(min_distance);
    let magnitude = g * (mass_a * mass_b) / (clamped * clamped);

    offset / distance * magnitude
}

#[derive(Debug, Clone, Copy)]
struct Snapshot<H> {
    handle: H,
    position: Vector2<f32>,
    mass: f32,
    dynamic: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GravityField {
    pub constant: f32,
    pub min_distance: f32,
    participants: Vec<String>,
}

impl Default for GravityField {
    fn default() -> Self {
        Self::new(GRAVITATIONAL_CONSTANT, MIN_DISTANCE)
    }
}

impl GravityField {
    pub fn new(constant: f32, min_distance: f32) -> Self {
        Self {
            constant,
            min_distance,
            participants: Vec::new(),
        }
    }

    /// Adds a body by name. Adding the same name twice has no effect.
    pub fn add_participant<S: Into<String>>(&mut self, name: S) {
        let name = name.into();
        if !self.participants.contains(&name) {
            self.participants.push(name);
        }
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }

    /// Net force on every dynamic participant.
    ///
    /// All positions are read before any force is computed, so the result
    /// only depends on the state at the start of the frame.
    pub fn net_forces<P: PhysicsWorld>(
        &self,
        physics: &P,
        registry: &BodyRegistry<P::Handle>,
    ) -> Result<Vec<(P::Handle, Vector2<f32>)>, GravityError> {
        let snapshots = self
            .participants
            .iter()
            .map(|name| -> Result<Snapshot<P::Handle>, GravityError> {
                let handle = registry.handle(name).context(UnknownBodyErr { name })?;
                let position = physics.position(handle).context(StaleBodyErr { name })?;
                let mass = physics.mass(handle).context(StaleBodyErr { name })?;
                let dynamic = physics.body_type(handle) == Some(BodyType::Dynamic);

                Ok(Snapshot {
                    handle,
                    position,
                    mass,
                    dynamic,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut net = vec![Vector2::<f32>::zero(); snapshots.len()];

        for (i, j) in (0..snapshots.len()).tuple_combinations() {
            let (a, b) = (&snapshots[i], &snapshots[j]);
            let force = gravitational_force(
                self.constant,
                self.min_distance,
                a.position,
                a.mass,
                b.position,
                b.mass,
            );
            net[i] += force;
            net[j] -= force;
        }

        Ok(snapshots
            .iter()
            .zip(net)
            .filter(|(s, _)| s.dynamic)
            .map(|(s, force)| {
                trace!("Net gravity on {:?}: {force:?}", s.handle);
                (s.handle, force)
            })
            .collect())
    }
}
