//! Media backend: a `rodio` output stream on its own thread, driven through
//! the [`MediaPlayer`] and [`AudioOutput`] traits.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioOutput, MediaPlayer, MediaStatus};

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod tests;
