//! Name-keyed collection of the bodies a [`World`](crate::World) owns.
//!
//! The registry never owns engine memory. It stores the engine handle next to
//! the shape and material the body was created with, so rendering never has to
//! ask the engine what kind of shape a fixture is.

use crate::core::{Material, ShapeDesc};
use crate::physics::BodyType;
use snafu::{Snafu, ensure};
use std::collections::HashMap;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(context(suffix(Err)))]
pub enum RegistryError {
    #[snafu(display("A body named {name:?} is already registered"))]
    DuplicateName { name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyEntry<H> {
    pub name: String,
    pub handle: H,
    pub shape: ShapeDesc,
    pub material: Material,
    pub body_type: BodyType,
}

/// Keeps insertion order so iteration, and therefore drawing, is deterministic.
#[derive(Debug, Clone)]
pub struct BodyRegistry<H> {
    entries: Vec<BodyEntry<H>>,
    index: HashMap<String, usize>,
}

impl<H> Default for BodyRegistry<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<H: Copy> BodyRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_vacant(&self, name: &str) -> Result<(), RegistryError> {
        ensure!(!self.index.contains_key(name), DuplicateNameErr { name });
        Ok(())
    }

    /// Registers a new entry. An existing entry with the same name is kept and
    /// the new one is rejected.
    pub fn insert(&mut self, entry: BodyEntry<H>) -> Result<(), RegistryError> {
        self.ensure_vacant(&entry.name)?;

        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&BodyEntry<H>> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn handle(&self, name: &str) -> Option<H> {
        self.get(name).map(|e| e.handle)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Removes an entry, making the name available again. Only meant to be
    /// used once the engine body behind it has been destroyed.
    pub fn remove(&mut self, name: &str) -> Option<BodyEntry<H>> {
        let removed = self.index.remove(name)?;
        let entry = self.entries.remove(removed);

        for i in self.index.values_mut() {
            if *i > removed {
                *i -= 1;
            }
        }

        Some(entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyEntry<H>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
