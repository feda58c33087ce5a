//! Ready-made bodies and scenarios.
//!
//! [`BodySpec`] describes a single body, the [`Prefab`]s build whole
//! scenarios out of them.

pub mod arena;
pub mod body;
pub mod bouncing_balls;
pub mod prefab;
pub mod three_body;

pub use arena::*;
pub use body::*;
pub use bouncing_balls::*;
pub use prefab::*;
pub use three_body::*;
