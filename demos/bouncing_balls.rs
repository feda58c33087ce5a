use gravitas::config::SimulationConfig;
use gravitas::prefabs::{ArenaPrefab, BouncingBallsPrefab, Prefab};
use gravitas::rendering::{DrawCall, RecordingCanvas};
use gravitas::{AppRuntime, AppState, World};
use log::{LevelFilter, error, info};
use std::error::Error;

#[derive(Debug, Default)]
struct BouncingBalls;

impl AppState for BouncingBalls {
    fn init(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        ArenaPrefab::default().spawn(world)?;
        BouncingBallsPrefab::default().spawn(world)?;
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let (width, height) = (1080, 1920);
    let config = match std::env::args().nth(1) {
        Some(path) => match SimulationConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                return;
            }
        },
        None => SimulationConfig {
            // Earth gravity scaled to the world height.
            world_gravity: [0.0, -9.81 * height as f32 / 100.0],
            ..SimulationConfig::default()
        },
    };

    let mut canvas = RecordingCanvas::default();
    let result = BouncingBalls
        .configure(width, height)
        .with_config(config)
        .with_frame_limit(600)
        .run_with_canvas(&mut canvas);

    if let Err(e) = result {
        error!("{e}");
        return;
    }

    for call in canvas.last_frame() {
        if let DrawCall::Circle { cx, cy, radius, .. } = call {
            info!("ball at ({cx:.1}, {cy:.1}) r={radius:.1}");
        }
    }
    info!("{} frames drawn", canvas.frames());
}
