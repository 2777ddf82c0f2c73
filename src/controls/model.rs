//! Controller-facing state types: `PlaybackState` and the published `Display`.

use crate::artwork::Artwork;

/// Transport state as seen by the user.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Everything the home screen renders for the transport bar and song panel.
///
/// Written only by [`super::Controls`]; the UI reads it.
#[derive(Debug, Clone, Default)]
pub struct Display {
    pub elapsed: String,
    pub total: String,
    pub slider_pos: i64,
    pub slider_max: i64,
    pub title: String,
    pub band: String,
    pub artwork: Option<Artwork>,
    pub window_title: String,
    pub shuffle_active: bool,
    pub autoplay: bool,
    /// Volume in percent, `0..=100`.
    pub volume: u8,
    pub device: Option<usize>,
}

impl Display {
    /// Slider fill in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.slider_max <= 0 {
            return 0.0;
        }
        (self.slider_pos as f64 / self.slider_max as f64).clamp(0.0, 1.0)
    }
}

/// Format milliseconds as zero-padded `MM:SS`, flooring to whole seconds.
pub fn format_mmss(ms: i64) -> String {
    let secs = ms.max(0) / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
