//! Host lifecycle.
//!
//! [`AppState`] is what an application implements, [`AppSettings::run`]
//! drives it: one setup call, one update per frame and one teardown call,
//! all on the calling thread.

pub mod app;
pub mod state;

pub use app::*;
pub use state::*;
