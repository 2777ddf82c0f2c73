use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::navigation::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

/// Environment variable holding a `tracing` filter; overrides `log.filter`.
const LOG_ENV: &str = "PULSEPLAY_LOG";

/// Send `tracing` output to the log file so it never draws over the UI.
///
/// Logging is best effort: when the file cannot be opened the app runs
/// without a subscriber.
pub fn init_tracing(settings: &Settings) {
    let Some(path) = settings.log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("pulseplay: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// The preset preference store: a file when a location is known, memory otherwise.
pub fn open_store(settings: &Settings) -> Box<dyn PreferenceStore> {
    match settings.preference_path() {
        Some(path) => {
            info!(path = %path.display(), "preset preference file");
            Box::new(FilePreferenceStore::new(path))
        }
        None => {
            warn!("no preference location; the default preset will not persist");
            Box::new(MemoryPreferenceStore::default())
        }
    }
}
