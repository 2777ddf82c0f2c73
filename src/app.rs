//! Application module: the `App` context the runtime drives and the UI renders.
//!
//! `App` owns the settings, the screen navigator, the active home page and the
//! media backend handle, and turns [`crate::commands::Command`]s into calls on
//! them.

mod model;

pub use model::*;
