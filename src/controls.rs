//! Playback controller: transport state, track advance and the display state
//! the home screen renders.

mod model;
mod transport;

pub use model::{Display, PlaybackState, format_mmss};
pub use transport::Controls;
