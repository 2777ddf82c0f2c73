//! Error taxonomy shared by every module.

use std::path::PathBuf;

use crate::commands::Command;

/// Result alias carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No playable tracks were found; a playback session cannot start.
    #[error("no playable tracks found in {}", dir.display())]
    CatalogEmpty { dir: PathBuf },

    /// A catalog position outside `1..=len` was requested.
    #[error("catalog position {position} is out of range 1..={len}")]
    InvalidPosition { position: usize, len: usize },

    /// A preset name that does not match any registry entry.
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),

    /// A menu action that exists but does nothing yet.
    #[error("{} is not implemented yet", .0.label())]
    NotImplemented(Command),

    /// Artwork could not be loaded or decoded.
    #[error("cannot display artwork {}: {reason}", path.display())]
    MetadataDisplay { path: PathBuf, reason: String },

    /// "Save As Default" was requested while no preset is applied.
    #[error("no preset selected")]
    NoPresetSelected,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ::config::ConfigError),
}

impl Error {
    /// Errors that are reported to the user instead of ending the session.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::UnknownPreset(_) | Self::NotImplemented(_) | Self::NoPresetSelected
        )
    }
}
