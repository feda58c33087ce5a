use crate::World;
use crate::core::ShapeKind;
use crate::physics::PhysicsWorld;
use crate::prefabs::{BodySpec, Prefab};
use crate::world::BodyError;
use nalgebra::Vector2;

pub const THREE_BODY_NAMES: [&str; 3] = ["body1", "body2", "body3"];

/// Three equal circles that attract each other, started on a slightly
/// asymmetric configuration so the orbit never settles.
#[derive(Debug, Clone)]
pub struct ThreeBodyPrefab {
    /// Multiplies positions and sizes, velocities are left alone.
    pub scale: f32,
    pub diameter: f32,
    pub density: f32,
}

impl Default for ThreeBodyPrefab {
    fn default() -> Self {
        Self {
            scale: 1.0,
            diameter: 10.0,
            density: 1.0,
        }
    }
}

impl ThreeBodyPrefab {
    fn initial_states(&self) -> [(Vector2<f32>, Vector2<f32>); 3] {
        let s = self.scale;
        [
            (Vector2::new(-20.0 * s, 0.0), Vector2::new(0.0, 0.5)),
            (Vector2::new(20.0 * s, 0.0), Vector2::new(0.0, -0.5)),
            (Vector2::new(0.0, 1.0 * s), Vector2::new(0.5, 0.0)),
        ]
    }
}

impl Prefab for ThreeBodyPrefab {
    fn prefab_name(&self) -> &'static str {
        "Three Body Problem"
    }

    fn build<P: PhysicsWorld>(&self, world: &mut World<P>) -> Result<Vec<P::Handle>, BodyError> {
        let mut handles = Vec::with_capacity(3);

        let states = THREE_BODY_NAMES.into_iter().zip(self.initial_states());
        for (name, (position, velocity)) in states {
            let spec = BodySpec::builder()
                .name(name)
                .shape(ShapeKind::Circle)
                .x(position.x)
                .y(position.y)
                .width(self.diameter * self.scale)
                .density(self.density)
                .friction(0.0)
                .restitution(0.0)
                .linear_velocity(velocity)
                .build();

            handles.push(world.create_body(&spec)?);
            world.gravity.add_participant(name);
        }

        Ok(handles)
    }
}
