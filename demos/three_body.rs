use gravitas::prefabs::{ArenaPrefab, Prefab, THREE_BODY_NAMES, ThreeBodyPrefab};
use gravitas::{AppState, GravitasApp, World};
use gravitas::physics::PhysicsWorld;
use log::info;
use std::error::Error;

// Strong enough to pull the bodies together within a few seconds.
const DEMO_GRAVITY: f32 = 40.0;

#[derive(Debug, Default, GravitasApp)]
struct ThreeBody;

impl AppState for ThreeBody {
    fn init(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        world.gravity.constant = DEMO_GRAVITY;

        ArenaPrefab::default().spawn(world)?;
        ThreeBodyPrefab::default().spawn(world)?;

        Ok(())
    }

    fn update(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        if world.frame_index() % 60 != 0 {
            return Ok(());
        }

        for name in THREE_BODY_NAMES {
            let Some(handle) = world.handle(name) else {
                continue;
            };
            if let Some(pos) = world.physics.position(handle) {
                info!("{name}: ({:.2}, {:.2})", pos.x, pos.y);
            }
        }

        Ok(())
    }
}
