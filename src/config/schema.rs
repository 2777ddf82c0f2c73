use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/pulseplay/config.toml` or `~/.config/pulseplay/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PULSEPLAY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub paths: PathSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory holding the audio files. Each file stem is a track name.
    pub songs_dir: PathBuf,
    /// Directory holding `<track name>.<artwork_extension>` cover images.
    pub thumbnails_dir: PathBuf,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Extension of cover images inside `thumbnails_dir`.
    pub artwork_extension: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            songs_dir: PathBuf::from("songs"),
            thumbnails_dir: PathBuf::from("thumbnails"),
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            artwork_extension: "jpg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Start the next track as soon as it is loaded.
    pub autoplay: bool,
    /// Whether the catalog starts shuffled.
    pub shuffle: bool,
    /// Initial output volume in percent (0..=100).
    pub volume: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            shuffle: false,
            volume: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Milliseconds moved by rewind / seek.
    pub seek_step_ms: u64,
    /// Percentage points moved by volume up / down.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_ms: 10_000,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Base window title; the playing track is appended as `" - Name"`.
    pub window_title: String,
    /// Initial state of the tray "Quit on Close" toggle.
    pub quit_on_close: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_title: "PulsePlay Music Player".to_string(),
            quit_on_close: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Where the default preset name is stored.
    /// Falls back to `$XDG_CONFIG_HOME/pulseplay/preset_preference.txt`.
    pub preference_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `PULSEPLAY_LOG` is unset.
    pub filter: String,
    /// Log file. Falls back to `$XDG_STATE_HOME/pulseplay/pulseplay.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}
