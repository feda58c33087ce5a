#![allow(dead_code)]

use gravitas::config::SimulationConfig;
use gravitas::core::{Material, ShapeDesc};
use gravitas::physics::{BodyDef, BodyType, PhysicsError, PhysicsWorld};
use gravitas::utils::WorldExtent;
use gravitas::World;
use nalgebra::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Force(usize, Vector2<f32>),
    Step,
}

#[derive(Debug, Clone)]
pub struct FakeBody {
    pub body_type: BodyType,
    pub position: Vector2<f32>,
    pub angle: f32,
    pub velocity: Vector2<f32>,
    pub mass: f32,
    pub force: Vector2<f32>,
    pub alive: bool,
}

/// Collision-free stand-in for the engine. Integrates with semi-implicit Euler
/// and records every force and step in order.
#[derive(Debug, Default)]
pub struct FakePhysics {
    pub bodies: Vec<FakeBody>,
    pub events: Vec<Event>,
    pub reject_fixtures: bool,
}

impl PhysicsWorld for FakePhysics {
    type Handle = usize;

    fn create_body(&mut self, def: &BodyDef) -> usize {
        self.bodies.push(FakeBody {
            body_type: def.body_type,
            position: def.position,
            angle: def.angle,
            velocity: def.linear_velocity,
            mass: 0.0,
            force: Vector2::zeros(),
            alive: true,
        });
        self.bodies.len() - 1
    }

    fn create_fixture(
        &mut self,
        body: usize,
        shape: &ShapeDesc,
        material: &Material,
    ) -> Result<(), PhysicsError> {
        if self.reject_fixtures {
            return Err(PhysicsError::InvalidShape {
                reason: "rejected by test".to_string(),
            });
        }
        let body = self.bodies.get_mut(body).ok_or(PhysicsError::InvalidHandle)?;
        if body.body_type == BodyType::Dynamic {
            body.mass += shape.area() * material.density;
        }
        Ok(())
    }

    fn apply_force_to_center(&mut self, body: usize, force: Vector2<f32>, _wake: bool) {
        self.events.push(Event::Force(body, force));
        if let Some(b) = self.bodies.get_mut(body) {
            b.force += force;
        }
    }

    fn step(&mut self, dt: f32, _velocity_iterations: usize, _position_iterations: usize) {
        self.events.push(Event::Step);
        for body in self.bodies.iter_mut().filter(|b| b.alive) {
            if body.body_type == BodyType::Dynamic && body.mass > 0.0 {
                body.velocity += body.force / body.mass * dt;
            }
            if body.body_type != BodyType::Static {
                body.position += body.velocity * dt;
            }
            body.force = Vector2::zeros();
        }
    }

    fn dispose(&mut self) {
        for body in &mut self.bodies {
            body.alive = false;
        }
    }

    fn destroy_body(&mut self, body: usize) {
        if let Some(b) = self.bodies.get_mut(body) {
            b.alive = false;
        }
    }

    fn position(&self, body: usize) -> Option<Vector2<f32>> {
        self.live(body).map(|b| b.position)
    }

    fn angle(&self, body: usize) -> Option<f32> {
        self.live(body).map(|b| b.angle)
    }

    fn linear_velocity(&self, body: usize) -> Option<Vector2<f32>> {
        self.live(body).map(|b| b.velocity)
    }

    fn set_linear_velocity(&mut self, body: usize, velocity: Vector2<f32>) {
        if let Some(b) = self.bodies.get_mut(body) {
            b.velocity = velocity;
        }
    }

    fn mass(&self, body: usize) -> Option<f32> {
        self.live(body).map(|b| b.mass)
    }

    fn body_type(&self, body: usize) -> Option<BodyType> {
        self.live(body).map(|b| b.body_type)
    }

    fn body_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.alive).count()
    }
}

impl FakePhysics {
    fn live(&self, body: usize) -> Option<&FakeBody> {
        self.bodies.get(body).filter(|b| b.alive)
    }
}

pub fn fake_world(config: SimulationConfig) -> World<FakePhysics> {
    World::with_physics(FakePhysics::default(), WorldExtent::new(607.5, 1080.0), config)
}

pub fn assert_close(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "{a} and {b} differ by more than {eps}");
}

pub fn assert_vec_close(a: Vector2<f32>, b: Vector2<f32>, eps: f32) {
    assert!((a - b).norm() <= eps, "{a:?} and {b:?} differ by more than {eps}");
}
