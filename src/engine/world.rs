//! The [`World`] struct owns the running simulation. It ties the rigid-body
//! engine, the body registry and the gravity field together and advances all
//! of them one frame at a time.
//!
//! Nothing in here is global: the world is created by whoever hosts the
//! simulation, passed by reference to everything that needs it and torn down
//! with it.

use crate::config::SimulationConfig;
use crate::core::{BodyEntry, BodyRegistry, RegistryError, ShapeError};
use crate::physics::{
    BodyDef, GravityError, GravityField, PhysicsError, PhysicsSimulator, PhysicsWorld,
};
use crate::prefabs::BodySpec;
use crate::rendering::{self, Primitive, Projection};
use crate::clock::FrameClock;
use crate::utils::WorldExtent;
use log::{debug, info, trace};
use snafu::{ResultExt, Snafu};
use std::time::Duration;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum BodyError {
    #[snafu(display("Cannot register body: {source}"))]
    Registry { source: RegistryError },

    #[snafu(display("Body {name:?} has an invalid description: {source}"))]
    Shape { name: String, source: ShapeError },

    #[snafu(display("The physics engine rejected body {name:?}: {source}"))]
    Engine { name: String, source: PhysicsError },
}

/// Central structure representing the running simulation.
pub struct World<P: PhysicsWorld = PhysicsSimulator> {
    pub physics: P,
    pub bodies: BodyRegistry<P::Handle>,
    pub gravity: GravityField,
    pub config: SimulationConfig,

    extent: WorldExtent,
    frame_index: u64,
    clock: FrameClock,
    requested_shutdown: bool,
}

impl World<PhysicsSimulator> {
    /// Create a world backed by `rapier`.
    pub fn new(extent: WorldExtent, config: SimulationConfig) -> Self {
        let physics = PhysicsSimulator::new(&config);
        World::with_physics(physics, extent, config)
    }
}

impl<P: PhysicsWorld> World<P> {
    pub fn with_physics(physics: P, extent: WorldExtent, config: SimulationConfig) -> Self {
        info!(
            "Creating a {}x{} world with G = {}",
            extent.width, extent.height, config.gravity_constant
        );

        World {
            physics,
            bodies: BodyRegistry::new(),
            gravity: GravityField::new(config.gravity_constant, config.min_distance),
            config,
            extent,
            frame_index: 0,
            clock: FrameClock::new(),
            requested_shutdown: false,
        }
    }

    /// Creates a body with a single fixture and registers it under its name.
    ///
    /// The description is validated before the engine is touched. If the
    /// engine refuses the fixture the half-built body is destroyed again and
    /// nothing is registered.
    pub fn create_body(&mut self, spec: &BodySpec) -> Result<P::Handle, BodyError> {
        self.bodies.ensure_vacant(&spec.name).context(RegistryErr)?;

        let name = &spec.name;
        let shape = spec.shape_desc().context(ShapeErr { name })?;
        let material = spec.material().context(ShapeErr { name })?;

        let def = BodyDef::builder()
            .body_type(spec.body_type)
            .position(spec.position())
            .linear_velocity(spec.linear_velocity)
            .build();

        let handle = self.physics.create_body(&def);
        if let Err(source) = self.physics.create_fixture(handle, &shape, &material) {
            self.physics.destroy_body(handle);
            return Err(source).context(EngineErr { name });
        }

        self.bodies
            .insert(BodyEntry {
                name: spec.name.clone(),
                handle,
                shape,
                material,
                body_type: spec.body_type,
            })
            .context(RegistryErr)?;

        debug!(
            "Created {:?} {} body {:?} at ({}, {})",
            spec.body_type, spec.shape, spec.name, spec.x, spec.y
        );

        Ok(handle)
    }

    pub fn handle(&self, name: &str) -> Option<P::Handle> {
        self.bodies.handle(name)
    }

    /// Advances the simulation by one frame.
    ///
    /// Net gravity for every participant is computed from the positions at
    /// the start of the frame and applied in full before the single world
    /// step runs.
    pub fn frame(&mut self) -> Result<(), GravityError> {
        self.clock.tick();

        let forces = self.gravity.net_forces(&self.physics, &self.bodies)?;
        for (handle, force) in forces {
            self.physics.apply_force_to_center(handle, force, true);
        }

        self.physics.step(
            self.config.timestep,
            self.config.velocity_iterations,
            self.config.position_iterations,
        );

        self.frame_index += 1;
        trace!("Frame {} stepped", self.frame_index);

        Ok(())
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        rendering::project(self)
    }

    pub fn projection(&self, viewport_width: f32, viewport_height: f32) -> Projection {
        Projection::new(
            self.extent,
            self.config.frame_origin,
            viewport_width,
            viewport_height,
        )
    }

    pub fn extent(&self) -> WorldExtent {
        self.extent
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Wall-clock duration of the last frame.
    pub fn delta_time(&self) -> Duration {
        self.clock.delta()
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    pub fn time(&self) -> Duration {
        self.clock.elapsed()
    }

    pub fn shutdown(&mut self) {
        self.requested_shutdown = true;
    }

    pub fn is_shutting_down(&self) -> bool {
        self.requested_shutdown
    }

    /// Releases every body. Safe to call more than once, also runs on drop.
    pub fn dispose(&mut self) {
        if self.bodies.is_empty() && self.physics.body_count() == 0 {
            return;
        }

        info!("Disposing world with {} registered bodies", self.bodies.len());
        self.gravity.clear();
        self.bodies.clear();
        self.physics.dispose();
    }
}

impl<P: PhysicsWorld> Drop for World<P> {
    fn drop(&mut self) {
        self.dispose();
    }
}
