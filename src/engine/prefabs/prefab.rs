use crate::World;
use crate::physics::PhysicsWorld;
use crate::world::BodyError;
use log::info;

pub trait Prefab {
    fn prefab_name(&self) -> &'static str;

    /// Creates the bodies of this prefab and returns their handles in creation order.
    fn build<P: PhysicsWorld>(&self, world: &mut World<P>) -> Result<Vec<P::Handle>, BodyError>;

    fn spawn<P: PhysicsWorld>(&self, world: &mut World<P>) -> Result<Vec<P::Handle>, BodyError> {
        let handles = self.build(world)?;
        info!("Spawned {} with {} bodies", self.prefab_name(), handles.len());
        Ok(handles)
    }
}
