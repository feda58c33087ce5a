use crate::core::{Material, ShapeDesc, ShapeError, ShapeKind};
use crate::physics::BodyType;
use bon::Builder;
use nalgebra::Vector2;

/// Description of a single-fixture body, consumed by [`World::create_body`](crate::World::create_body).
///
/// `width` is the diameter for circles. `height` defaults to `width`.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct BodySpec {
    #[builder(into)]
    pub name: String,
    pub shape: ShapeKind,
    #[builder(default)]
    pub body_type: BodyType,
    #[builder(default = 0.0)]
    pub x: f32,
    #[builder(default = 0.0)]
    pub y: f32,
    pub width: f32,
    pub height: Option<f32>,
    #[builder(default = 1.0)]
    pub density: f32,
    #[builder(default = 0.0)]
    pub friction: f32,
    #[builder(default = 1.0)]
    pub restitution: f32,
    #[builder(default = Vector2::zeros())]
    pub linear_velocity: Vector2<f32>,
}

impl BodySpec {
    pub fn position(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    pub fn shape_desc(&self) -> Result<ShapeDesc, ShapeError> {
        ShapeDesc::new(self.shape, self.width, self.height.unwrap_or(self.width))
    }

    pub fn material(&self) -> Result<Material, ShapeError> {
        Material::new(self.density, self.friction, self.restitution)
    }
}
