use crate::utils::WorldExtent;
use nalgebra::Vector2;
use serde::Deserialize;

/// Where the origin of the physics frame sits on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameOrigin {
    /// Body coordinates are drawn as-is with `(0, 0)` in the middle of the world.
    #[default]
    Centered,
    /// Body coordinates are offset by half the world extent before drawing and
    /// the visible region spans `[0, width] x [0, height]`.
    Corner,
}

impl FrameOrigin {
    /// Offset added to body positions before they are handed to the renderer.
    pub fn offset(&self, extent: &WorldExtent) -> Vector2<f32> {
        match self {
            FrameOrigin::Centered => Vector2::zeros(),
            FrameOrigin::Corner => extent.half(),
        }
    }

    /// Lower left corner of the visible region in render coordinates.
    pub fn visible_min(&self, extent: &WorldExtent) -> Vector2<f32> {
        match self {
            FrameOrigin::Centered => -extent.half(),
            FrameOrigin::Corner => Vector2::zeros(),
        }
    }
}

/// Maps the world extent onto device pixels, keeping the aspect ratio and
/// letterboxing whatever is left of the viewport. Device y points down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    pub extent: WorldExtent,
    pub origin: FrameOrigin,
    pub viewport: Vector2<f32>,
}

impl Projection {
    pub fn new(
        extent: WorldExtent,
        origin: FrameOrigin,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        Self {
            extent,
            origin,
            viewport: Vector2::new(viewport_width, viewport_height),
        }
    }

    /// Device pixels per world unit.
    pub fn scale(&self) -> f32 {
        (self.viewport.x / self.extent.width).min(self.viewport.y / self.extent.height)
    }

    pub fn padding(&self) -> Vector2<f32> {
        (self.viewport - self.extent.size() * self.scale()) / 2.0
    }

    pub fn to_device(&self, point: Vector2<f32>) -> Vector2<f32> {
        let scale = self.scale();
        let padding = self.padding();
        let local = point - self.origin.visible_min(&self.extent);

        Vector2::new(
            padding.x + local.x * scale,
            padding.y + (self.extent.height - local.y) * scale,
        )
    }

    pub fn length_to_device(&self, length: f32) -> f32 {
        length * self.scale()
    }
}
