use crate::World;
use crate::core::{BodyEntry, ShapeDesc};
use crate::physics::{BodyType, PhysicsWorld};
use crate::utils::Color;
use log::warn;
use nalgebra::{Rotation2, Vector2};
use smallvec::SmallVec;

/// Bodies whose name starts with this are diagnostics and stand out in a different color.
pub const DIAGNOSTIC_PREFIX: &str = "test";

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        center: Vector2<f32>,
        radius: f32,
        color: Color,
    },
    Polygon {
        vertices: SmallVec<[Vector2<f32>; 4]>,
        color: Color,
    },
}

impl Primitive {
    pub fn color(&self) -> Color {
        match self {
            Primitive::Circle { color, .. } | Primitive::Polygon { color, .. } => *color,
        }
    }

    /// Triangle fan around the first vertex. Only correct for convex polygons,
    /// circles produce no triangles.
    pub fn triangles(&self) -> Vec<[Vector2<f32>; 3]> {
        match self {
            Primitive::Circle { .. } => Vec::new(),
            Primitive::Polygon { vertices, .. } => {
                if vertices.len() < 3 {
                    return Vec::new();
                }
                (1..vertices.len() - 1)
                    .map(|i| [vertices[0], vertices[i], vertices[i + 1]])
                    .collect()
            }
        }
    }
}

pub fn classify(name: &str, body_type: BodyType) -> Color {
    if name.starts_with(DIAGNOSTIC_PREFIX) {
        Color::YELLOW
    } else if body_type == BodyType::Static {
        Color::WHITE
    } else {
        Color::RED
    }
}

/// Places a body's shape at its current transform, shifted by `offset`.
pub fn project_body<H>(
    entry: &BodyEntry<H>,
    position: Vector2<f32>,
    angle: f32,
    offset: Vector2<f32>,
) -> Primitive {
    let color = classify(&entry.name, entry.body_type);
    let translation = position + offset;

    match entry.shape {
        ShapeDesc::Circle { radius } => Primitive::Circle {
            center: translation,
            radius,
            color,
        },
        ShapeDesc::Box { .. } => {
            let rotation = Rotation2::new(angle);
            let vertices = entry
                .shape
                .local_vertices()
                .into_iter()
                .map(|v| rotation * v + translation)
                .collect();

            Primitive::Polygon { vertices, color }
        }
    }
}

/// Reads the current transform of every registered body. Pure, calling it
/// twice without a step in between gives the same list.
pub fn project<P: PhysicsWorld>(world: &World<P>) -> Vec<Primitive> {
    let offset = world.config.frame_origin.offset(&world.extent());

    world
        .bodies
        .iter()
        .filter_map(|entry| {
            let position = world.physics.position(entry.handle);
            let angle = world.physics.angle(entry.handle);
            match position.zip(angle) {
                Some((position, angle)) => Some(project_body(entry, position, angle, offset)),
                None => {
                    warn!("Body {:?} is registered but gone from the physics world", entry.name);
                    None
                }
            }
        })
        .collect()
}
