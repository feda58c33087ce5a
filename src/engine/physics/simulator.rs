use crate::config::SimulationConfig;
use crate::core::{Material, ShapeDesc};
use crate::physics::{
    BodyDef, BodyType, InvalidHandleErr, InvalidShapeErr, MAX_TRANSLATION, PhysicsError,
    PhysicsWorld,
};
use log::trace;
use nalgebra::Vector2;
use rapier2d::prelude::*;
use snafu::ensure;
use std::num::NonZeroUsize;

pub struct PhysicsSimulator {
    pub gravity: Vector2<f32>,
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub query_pipeline: QueryPipeline,
    pub physics_hooks: (),
    pub event_handler: (),
}

impl Default for PhysicsSimulator {
    fn default() -> Self {
        PhysicsSimulator {
            gravity: Vector2::zeros(),
            rigid_body_set: RigidBodySet::default(),
            collider_set: ColliderSet::default(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::default(),
            island_manager: IslandManager::default(),
            broad_phase: DefaultBroadPhase::default(),
            narrow_phase: NarrowPhase::default(),
            impulse_joint_set: ImpulseJointSet::default(),
            multibody_joint_set: MultibodyJointSet::default(),
            ccd_solver: CCDSolver::default(),
            query_pipeline: QueryPipeline::default(),
            physics_hooks: (),
            event_handler: (),
        }
    }
}

impl From<BodyType> for RigidBodyType {
    fn from(value: BodyType) -> Self {
        match value {
            BodyType::Static => RigidBodyType::Fixed,
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Kinematic => RigidBodyType::KinematicVelocityBased,
        }
    }
}

impl PhysicsSimulator {
    pub fn new(config: &SimulationConfig) -> Self {
        let mut simulator = PhysicsSimulator {
            gravity: Vector2::from(config.world_gravity),
            ..PhysicsSimulator::default()
        };
        simulator.integration_parameters.dt = config.timestep;
        simulator.integration_parameters.length_unit = config.length_unit;
        simulator
    }

    fn body_type_of(rb: &RigidBody) -> BodyType {
        match rb.body_type() {
            RigidBodyType::Fixed => BodyType::Static,
            RigidBodyType::Dynamic => BodyType::Dynamic,
            RigidBodyType::KinematicPositionBased | RigidBodyType::KinematicVelocityBased => {
                BodyType::Kinematic
            }
        }
    }

    fn remove_body(&mut self, body: RigidBodyHandle) {
        self.rigid_body_set.remove(
            body,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }
}

impl PhysicsWorld for PhysicsSimulator {
    type Handle = RigidBodyHandle;

    fn create_body(&mut self, def: &BodyDef) -> RigidBodyHandle {
        let rigid_body = RigidBodyBuilder::new(def.body_type.into())
            .translation(def.position)
            .rotation(def.angle)
            .linvel(def.linear_velocity)
            // Super-elastic contacts against zero-thickness edges tunnel without it.
            .ccd_enabled(def.body_type == BodyType::Dynamic)
            .build();

        self.rigid_body_set.insert(rigid_body)
    }

    fn create_fixture(
        &mut self,
        body: RigidBodyHandle,
        shape: &ShapeDesc,
        material: &Material,
    ) -> Result<(), PhysicsError> {
        ensure!(self.rigid_body_set.contains(body), InvalidHandleErr);

        let shape = match *shape {
            ShapeDesc::Box {
                half_width,
                half_height,
            } => SharedShape::cuboid(half_width, half_height),
            ShapeDesc::Circle { radius } => SharedShape::ball(radius),
        };

        ensure!(
            material.density.is_finite(),
            InvalidShapeErr {
                reason: "non-finite density"
            }
        );

        // Mixing follows the max rule so one super-elastic fixture is enough
        // to make a contact bounce.
        let collider = ColliderBuilder::new(shape)
            .density(material.density)
            .friction(material.friction)
            .restitution(material.restitution)
            .restitution_combine_rule(CoefficientCombineRule::Max)
            .build();

        let handle = self
            .collider_set
            .insert_with_parent(collider, body, &mut self.rigid_body_set);

        // Gravity reads the mass before the first step, so it cannot wait for
        // the pipeline to update it.
        if let Some(rb) = self.rigid_body_set.get_mut(body) {
            rb.recompute_mass_properties_from_colliders(&self.collider_set);
        }
        trace!("Attached collider {handle:?} to body {body:?}");

        Ok(())
    }

    fn apply_force_to_center(&mut self, body: RigidBodyHandle, force: Vector2<f32>, wake: bool) {
        if let Some(rb) = self.rigid_body_set.get_mut(body) {
            rb.add_force(force, wake);
        }
    }

    fn step(&mut self, dt: f32, velocity_iterations: usize, position_iterations: usize) {
        self.integration_parameters.dt = dt;
        self.integration_parameters.num_solver_iterations =
            NonZeroUsize::new(velocity_iterations).unwrap_or(NonZeroUsize::MIN);
        self.integration_parameters.num_internal_stabilization_iterations = position_iterations;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &self.physics_hooks,
            &self.event_handler,
        );

        let max_speed = MAX_TRANSLATION / dt;
        for (_, rb) in self.rigid_body_set.iter_mut() {
            // rapier keeps user forces around until they are reset, a frame's
            // forces must not leak into the next one.
            rb.reset_forces(false);

            let speed = rb.linvel().norm();
            if rb.is_dynamic() && speed > max_speed {
                let capped = *rb.linvel() * (max_speed / speed);
                rb.set_linvel(capped, false);
            }
        }
    }

    fn dispose(&mut self) {
        let handles: Vec<_> = self.rigid_body_set.iter().map(|(h, _)| h).collect();
        for handle in handles {
            self.remove_body(handle);
        }
    }

    fn destroy_body(&mut self, body: RigidBodyHandle) {
        self.remove_body(body);
    }

    fn position(&self, body: RigidBodyHandle) -> Option<Vector2<f32>> {
        self.rigid_body_set.get(body).map(|rb| *rb.translation())
    }

    fn angle(&self, body: RigidBodyHandle) -> Option<f32> {
        self.rigid_body_set.get(body).map(|rb| rb.rotation().angle())
    }

    fn linear_velocity(&self, body: RigidBodyHandle) -> Option<Vector2<f32>> {
        self.rigid_body_set.get(body).map(|rb| *rb.linvel())
    }

    fn set_linear_velocity(&mut self, body: RigidBodyHandle, velocity: Vector2<f32>) {
        if let Some(rb) = self.rigid_body_set.get_mut(body) {
            rb.set_linvel(velocity, true);
        }
    }

    fn mass(&self, body: RigidBodyHandle) -> Option<f32> {
        self.rigid_body_set
            .get(body)
            .map(|rb| if rb.is_dynamic() { rb.mass() } else { 0.0 })
    }

    fn body_type(&self, body: RigidBodyHandle) -> Option<BodyType> {
        self.rigid_body_set.get(body).map(Self::body_type_of)
    }

    fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }
}
