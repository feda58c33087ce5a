pub mod clock;
pub mod core;
pub mod physics;
pub mod prefabs;
pub mod rendering;
pub mod world;

pub use self::world::World;
