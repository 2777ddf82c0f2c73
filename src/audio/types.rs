//! Audio-related small types, handles and the traits the controller drives.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::library::Track;

/// Asynchronous notifications from the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    /// A newly set source is decoded and ready.
    Loaded,
    /// Playback reached the end of the current source.
    EndOfMedia,
    /// The source could not be opened or decoded.
    Invalid,
}

/// Transport operations of a media player.
///
/// Positions are milliseconds. Calls return immediately; state changes that
/// take time are reported later through [`MediaPlayer::poll_status`].
pub trait MediaPlayer {
    /// Replace the current source. Stops playback; reports `Loaded` or `Invalid`.
    fn set_source(&mut self, track: &Track);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_playing(&self) -> bool;
    fn position(&self) -> i64;
    /// Move to `position`. Out-of-range values are clamped; reaching the
    /// duration reports `EndOfMedia`.
    fn set_position(&mut self, position: i64);
    fn duration(&self) -> i64;
    /// Next pending status notification, if any.
    fn poll_status(&mut self) -> Option<MediaStatus>;
}

/// Output device and volume control.
pub trait AudioOutput {
    /// Human-readable descriptions of the output devices, in selection order.
    fn output_devices(&self) -> Vec<String>;
    fn select_output_device(&mut self, index: usize);
    /// Master volume as a fraction in `0.0..=1.0`.
    fn set_master_volume(&mut self, fraction: f32);
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Decode `path` into a fresh paused sink.
    SetSource {
        path: PathBuf,
        duration_hint: Option<Duration>,
    },
    Play,
    Pause,
    /// Move to the absolute position.
    Seek(Duration),
    SetVolume(f32),
    /// Reopen the output stream on the device at this index.
    SetDevice(usize),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone, Default)]
/// Runtime playback information shared between the UI and the audio thread.
pub struct PlaybackInfo {
    pub source: Option<PathBuf>,
    pub playing: bool,
    pub position: Duration,
    pub duration: Duration,
    pub volume: f32,
    pub device: Option<usize>,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
