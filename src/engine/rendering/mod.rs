//! Turns the simulation state into draw calls.
//!
//! [`project`] reads every registered body into [`Primitive`]s, [`draw`]
//! hands them to a [`Canvas`] between a begin/end pair carrying the
//! [`Projection`].

pub mod canvas;
pub mod primitive;
pub mod projection;

pub use canvas::*;
pub use primitive::*;
pub use projection::*;
