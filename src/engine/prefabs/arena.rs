use crate::World;
use crate::core::ShapeKind;
use crate::physics::{BodyType, PhysicsWorld};
use crate::prefabs::{BodySpec, Prefab};
use crate::world::BodyError;

pub const ARENA_EDGES: [&str; 4] = ["bottom_edge", "top_edge", "left_edge", "right_edge"];

/// Four static, zero-thickness walls along the border of the world extent,
/// centered on the physics origin.
#[derive(Debug, Clone)]
pub struct ArenaPrefab {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for ArenaPrefab {
    fn default() -> Self {
        Self {
            friction: 0.0,
            restitution: 1.0,
        }
    }
}

impl Prefab for ArenaPrefab {
    fn prefab_name(&self) -> &'static str {
        "Arena"
    }

    fn build<P: PhysicsWorld>(&self, world: &mut World<P>) -> Result<Vec<P::Handle>, BodyError> {
        let half = world.extent().half();
        let (w, h) = (world.extent().width, world.extent().height);

        let edges = [
            (ARENA_EDGES[0], 0.0, -half.y, w, 0.0),
            (ARENA_EDGES[1], 0.0, half.y, w, 0.0),
            (ARENA_EDGES[2], -half.x, 0.0, 0.0, h),
            (ARENA_EDGES[3], half.x, 0.0, 0.0, h),
        ];

        edges
            .into_iter()
            .map(|(name, x, y, width, height)| {
                let spec = BodySpec::builder()
                    .name(name)
                    .shape(ShapeKind::Box)
                    .body_type(BodyType::Static)
                    .x(x)
                    .y(y)
                    .width(width)
                    .height(height)
                    .friction(self.friction)
                    .restitution(self.restitution)
                    .build();
                world.create_body(&spec)
            })
            .collect()
    }
}
