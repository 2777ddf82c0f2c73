use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `PULSEPLAY__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PULSEPLAY")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.controls.seek_step_ms == 0 {
            return Err("controls.seek_step_ms must be >= 1".to_string());
        }
        if self.playback.volume > 100 {
            return Err("playback.volume must be within 0..=100".to_string());
        }
        if self.library.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("library.extensions must name at least one extension".to_string());
        }
        Ok(())
    }

    /// Location of the stored default preset.
    pub fn preference_path(&self) -> Option<PathBuf> {
        self.paths
            .preference_file
            .clone()
            .or_else(|| config_home().map(|d| d.join("pulseplay").join("preset_preference.txt")))
    }

    /// Location of the log file.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log.file.clone().or_else(default_log_path)
    }
}

/// Resolve the config path from `PULSEPLAY_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PULSEPLAY_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/pulseplay/config.toml`
/// or `~/.config/pulseplay/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    config_home().map(|d| d.join("pulseplay").join("config.toml"))
}

/// `$XDG_STATE_HOME/pulseplay/pulseplay.log`, or `~/.local/state/...`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("pulseplay").join("pulseplay.log"))
}

fn config_home() -> Option<PathBuf> {
    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    }
}
