//! Core data structures used throughout the engine.
//!
//! This includes shape and material descriptors and the registry that maps
//! logical body names to engine handles.

pub mod registry;
pub mod shape;

pub use registry::*;
pub use shape::*;
