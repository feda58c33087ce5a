//! World sizing.
//!
//! The simulation extent is derived once from the display area and keeps a
//! fixed aspect ratio. It does not depend on the units bodies are placed in,
//! scenarios may use either scale.

use log::debug;
use nalgebra::Vector2;
use snafu::{Snafu, ensure};

/// Target aspect ratio of the world frame (width : height in landscape terms, 9:16).
pub const SCREEN_RATIO: f32 = 0.5625;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(context(suffix(Err)))]
pub enum ExtentError {
    #[snafu(display("Screen size must be positive and finite, got {width}x{height}"))]
    InvalidScreen { width: f32, height: f32 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldExtent {
    pub width: f32,
    pub height: f32,
}

impl WorldExtent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Derive the world extent from a screen size.
    ///
    /// Wide screens keep their height and shrink the width to the target
    /// ratio, everything else keeps its width and grows the height.
    /// Both inputs have to be positive.
    pub fn from_screen(screen_width: f32, screen_height: f32) -> Self {
        debug!("Screen size {screen_width}x{screen_height}");

        let extent = if screen_width / screen_height > SCREEN_RATIO {
            WorldExtent::new(screen_height * SCREEN_RATIO, screen_height)
        } else {
            WorldExtent::new(screen_width, screen_width / SCREEN_RATIO)
        };

        debug!("World size {}x{}", extent.width, extent.height);

        extent
    }

    /// Same as [`WorldExtent::from_screen`] but rejects sizes that would produce
    /// a degenerate or non-finite world.
    pub fn try_from_screen(screen_width: f32, screen_height: f32) -> Result<Self, ExtentError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        ensure!(
            valid(screen_width) && valid(screen_height),
            InvalidScreenErr {
                width: screen_width,
                height: screen_height,
            }
        );

        Ok(Self::from_screen(screen_width, screen_height))
    }

    pub fn half(&self) -> Vector2<f32> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn size(&self) -> Vector2<f32> {
        Vector2::new(self.width, self.height)
    }
}
