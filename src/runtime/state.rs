use crate::config::SimulationConfig;
use crate::world::World;
use crate::{AppRuntime, AppSettings};
use std::error::Error;

/// Hooks a host application implements. They map onto the create, per-frame
/// and dispose callbacks of the surrounding frame loop.
#[allow(unused)]
pub trait AppState: Sized {
    fn init(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn update(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn destroy(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

impl<S: AppState> AppRuntime for S {
    fn configure(self, screen_width: u32, screen_height: u32) -> AppSettings<Self> {
        AppSettings {
            screen_width: screen_width as f32,
            screen_height: screen_height as f32,
            frame_limit: None,
            realtime: true,
            config: SimulationConfig::default(),
            state: self,
        }
    }

    fn default_config(self) -> AppSettings<Self> {
        self.configure(1920, 1080)
    }
}
