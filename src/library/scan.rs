use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// `<thumbnails_dir>/<name>.<artwork_extension>` when that file exists.
pub fn artwork_path(name: &str, settings: &LibrarySettings) -> Option<PathBuf> {
    let ext = settings.artwork_extension.trim().trim_start_matches('.');
    let candidate = settings.thumbnails_dir.join(format!("{name}.{ext}"));
    candidate.is_file().then_some(candidate)
}

/// Build a `Track` for one audio file, probing tags when the file is readable.
pub fn track_from_path(path: &Path, settings: &LibrarySettings) -> Track {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let mut band: Option<String> = None;
    let mut duration: Option<Duration> = None;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            duration = Some(tagged.properties().duration());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.artist() {
                    let v = v.trim();
                    if !v.is_empty() {
                        band = Some(v.to_string());
                    }
                }
            }
        }
        Err(e) => debug!(path = %path.display(), error = %e, "no readable tags"),
    }

    Track {
        band: band.unwrap_or_else(|| name.clone()),
        artwork: artwork_path(&name, settings),
        path: path.to_path_buf(),
        name,
        duration,
    }
}

/// List the songs directory (non-recursive), ordered by track name.
pub fn scan(settings: &LibrarySettings) -> Vec<Track> {
    let walker = WalkDir::new(&settings.songs_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_audio_file(path, settings))
        .map(|path| track_from_path(&path, settings))
        .collect();
    // Same key as the catalog's alphabetical order, so unshuffling restores it.
    tracks.sort_by(|a, b| a.name.cmp(&b.name));
    tracks
}
