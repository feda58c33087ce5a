use crate::AppState;
use crate::config::SimulationConfig;
use crate::rendering::{self, Canvas, LogCanvas, Projection};
use crate::utils::WorldExtent;
use crate::world::World;
use log::{error, info};
use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

pub struct App<S: AppState> {
    world: World,
    projection: Projection,
    frame_limit: Option<u64>,
    realtime: bool,
    state: S,
}

pub struct AppSettings<S: AppState> {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Stop after this many frames. `None` runs until the state asks for shutdown.
    pub frame_limit: Option<u64>,
    /// Sleep between frames so one frame takes one timestep of wall time.
    pub realtime: bool,
    pub config: SimulationConfig,
    pub state: S,
}

pub trait AppRuntime: AppState {
    fn configure(self, screen_width: u32, screen_height: u32) -> AppSettings<Self>;

    fn default_config(self) -> AppSettings<Self>;
}

impl<S: AppState> AppSettings<S> {
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.run_with_canvas(&mut LogCanvas::default())
    }

    pub fn run_with_canvas<C: Canvas>(self, canvas: &mut C) -> Result<(), Box<dyn Error>> {
        let app = self.init_state()?;
        app.run(canvas)
    }

    fn init_state(self) -> Result<App<S>, Box<dyn Error>> {
        self.config.validate()?;

        let extent = WorldExtent::try_from_screen(self.screen_width, self.screen_height)?;
        let world = World::new(extent, self.config);
        let projection = world.projection(self.screen_width, self.screen_height);

        Ok(App {
            world,
            projection,
            frame_limit: self.frame_limit,
            realtime: self.realtime,
            state: self.state,
        })
    }
}

impl<S: AppState> App<S> {
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn run<C: Canvas>(mut self, canvas: &mut C) -> Result<(), Box<dyn Error>> {
        info!("Initializing simulation state");
        if let Err(e) = self.state.init(&mut self.world) {
            error!("Init function hook returned: {e}");
            self.world.dispose();
            return Err(e);
        }

        let result = self.run_frames(canvas);

        if let Err(e) = self.state.destroy(&mut self.world) {
            error!("Destroy function hook returned: {e}");
        }
        self.world.dispose();

        result
    }

    fn run_frames<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), Box<dyn Error>> {
        let frame_time = Duration::from_secs_f32(self.world.config.timestep);

        while self.keep_running() {
            let started = Instant::now();

            self.render_frame(canvas)?;

            if self.realtime {
                if let Some(remaining) = frame_time.checked_sub(started.elapsed()) {
                    thread::sleep(remaining);
                }
            }
        }

        info!("Simulation stopped after {} frames", self.world.frame_index());
        Ok(())
    }

    fn keep_running(&self) -> bool {
        let below_limit = self
            .frame_limit
            .is_none_or(|limit| self.world.frame_index() < limit);

        !self.world.is_shutting_down() && below_limit
    }

    fn render_frame<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), Box<dyn Error>> {
        if let Err(e) = self.state.update(&mut self.world) {
            error!("Error happened when calling update function hook: {e}");
        }

        self.world.frame()?;

        let primitives = self.world.primitives();
        rendering::draw(canvas, &self.projection, &primitives);

        Ok(())
    }
}
