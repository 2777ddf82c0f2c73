//! Settings: library locations, playback defaults, control steps, window
//! options, the preference file and logging.
//!
//! Loaded once at startup from `config.toml` plus `PULSEPLAY__*` environment
//! overrides.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
