use nalgebra::Vector2;
use serde::Deserialize;
use smallvec::{SmallVec, smallvec};
use snafu::{Snafu, ensure};
use std::f32::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Upper bound the engine accepts for restitution. Values above 1 inject
/// energy on every collision, which scenarios use on purpose.
pub const MAX_RESTITUTION: f32 = 1000.0;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(context(suffix(Err)))]
pub enum ShapeError {
    #[snafu(display("Unknown shape kind {kind:?}, expected \"box\" or \"circle\""))]
    UnknownShape { kind: String },

    #[snafu(display("Shape {dimension} must be finite and non-negative, got {value}"))]
    InvalidDimension { dimension: &'static str, value: f32 },

    #[snafu(display("Material {property} is out of range, got {value}"))]
    InvalidMaterial { property: &'static str, value: f32 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Circle,
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "box" => Ok(ShapeKind::Box),
            "circle" => Ok(ShapeKind::Circle),
            _ => UnknownShapeErr { kind: s }.fail(),
        }
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Box => write!(f, "box"),
            ShapeKind::Circle => write!(f, "circle"),
        }
    }
}

/// Geometry of a single fixture, resolved once when the body is created.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeDesc {
    Box { half_width: f32, half_height: f32 },
    Circle { radius: f32 },
}

impl ShapeDesc {
    /// Build a shape from the width/height convention used by the body factory.
    ///
    /// For circles `width` is the diameter and `height` is ignored.
    pub fn new(kind: ShapeKind, width: f32, height: f32) -> Result<Self, ShapeError> {
        check_dimension("width", width)?;

        match kind {
            ShapeKind::Box => {
                check_dimension("height", height)?;
                Ok(ShapeDesc::Box {
                    half_width: width / 2.0,
                    half_height: height / 2.0,
                })
            }
            ShapeKind::Circle => Ok(ShapeDesc::Circle {
                radius: width / 2.0,
            }),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDesc::Box { .. } => ShapeKind::Box,
            ShapeDesc::Circle { .. } => ShapeKind::Circle,
        }
    }

    pub fn area(&self) -> f32 {
        match *self {
            ShapeDesc::Box {
                half_width,
                half_height,
            } => 4.0 * half_width * half_height,
            ShapeDesc::Circle { radius } => PI * radius * radius,
        }
    }

    /// Corners in the body frame, counter-clockwise starting bottom left.
    /// Circles have no vertices.
    pub fn local_vertices(&self) -> SmallVec<[Vector2<f32>; 4]> {
        match *self {
            ShapeDesc::Box {
                half_width: hw,
                half_height: hh,
            } => smallvec![
                Vector2::new(-hw, -hh),
                Vector2::new(hw, -hh),
                Vector2::new(hw, hh),
                Vector2::new(-hw, hh),
            ],
            ShapeDesc::Circle { .. } => SmallVec::new(),
        }
    }
}

fn check_dimension(dimension: &'static str, value: f32) -> Result<(), ShapeError> {
    ensure!(
        value.is_finite() && value >= 0.0,
        InvalidDimensionErr { dimension, value }
    );
    Ok(())
}

/// Material parameters of a fixture.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 1.0,
            friction: 0.0,
            restitution: 1.0,
        }
    }
}

impl Material {
    pub fn new(density: f32, friction: f32, restitution: f32) -> Result<Self, ShapeError> {
        let material = Self {
            density,
            friction,
            restitution,
        };
        material.validate()?;
        Ok(material)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        ensure!(
            self.density.is_finite() && self.density > 0.0,
            InvalidMaterialErr {
                property: "density",
                value: self.density
            }
        );
        ensure!(
            self.friction.is_finite() && self.friction >= 0.0,
            InvalidMaterialErr {
                property: "friction",
                value: self.friction
            }
        );
        ensure!(
            (0.0..=MAX_RESTITUTION).contains(&self.restitution),
            InvalidMaterialErr {
                property: "restitution",
                value: self.restitution
            }
        );
        Ok(())
    }
}
