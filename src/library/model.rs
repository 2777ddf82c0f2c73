use std::path::{Path, PathBuf};
use std::time::Duration;

/// One playable song plus its artwork and tag metadata.
///
/// Built once by the scanner and never mutated; catalogs share it as `Arc<Track>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// File stem of the audio file; the identifier used for all asset lookups.
    pub name: String,
    /// Artist tag when present, otherwise the name.
    pub band: String,
    /// Audio file handed to the player.
    pub path: PathBuf,
    /// Cover image, only set when the file exists.
    pub artwork: Option<PathBuf>,
    /// Duration read from the tags, if the file could be probed.
    pub duration: Option<Duration>,
}

impl Track {
    /// The playable source handed to the media player.
    pub fn source(&self) -> &Path {
        &self.path
    }

    /// Name with the first letter upper-cased and the rest lower-cased.
    pub fn capitalized_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}
