#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
pub mod config;
pub mod engine;
pub mod runtime;
pub mod utils;

pub use engine::*;
pub use runtime::*;

pub use ::log;
pub use ::nalgebra;
pub use ::rapier2d;

#[cfg(feature = "derive")]
pub use ::gravitas_macros;

#[cfg(feature = "derive")]
pub use ::gravitas_macros::GravitasApp;
