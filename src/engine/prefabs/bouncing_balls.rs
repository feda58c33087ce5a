use crate::World;
use crate::core::ShapeKind;
use crate::physics::PhysicsWorld;
use crate::prefabs::{BodySpec, Prefab};
use crate::world::BodyError;

/// Two balls stacked above the middle of the arena. With a restitution far
/// above 1 every bounce adds energy.
#[derive(Debug, Clone)]
pub struct BouncingBallsPrefab {
    pub restitution: f32,
    /// Whether the balls also attract each other.
    pub attract: bool,
}

impl Default for BouncingBallsPrefab {
    fn default() -> Self {
        Self {
            restitution: 1000.0,
            attract: false,
        }
    }
}

impl Prefab for BouncingBallsPrefab {
    fn prefab_name(&self) -> &'static str {
        "Bouncing Balls"
    }

    fn build<P: PhysicsWorld>(&self, world: &mut World<P>) -> Result<Vec<P::Handle>, BodyError> {
        let extent = world.extent();
        let diameter = 0.1 * extent.width;
        let half_height = extent.height / 2.0;

        let mut handles = Vec::with_capacity(2);
        for (name, height_fraction) in [("ball0", 0.8), ("ball1", 0.6)] {
            let spec = BodySpec::builder()
                .name(name)
                .shape(ShapeKind::Circle)
                .y(half_height * height_fraction)
                .width(diameter)
                .restitution(self.restitution)
                .build();

            handles.push(world.create_body(&spec)?);
            if self.attract {
                world.gravity.add_participant(name);
            }
        }

        Ok(handles)
    }
}
