use std::sync::Arc;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::model::Track;
use super::scan::scan;

/// Ordered set of tracks addressed by 1-based position.
///
/// Positions always form the contiguous range `1..=len()`. Reordering builds a
/// new catalog around the same `Arc<Track>` values.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Arc<Track>>,
}

impl Catalog {
    /// Scan the songs directory and build a catalog in listing order.
    pub fn load(settings: &LibrarySettings) -> Result<Self> {
        let tracks = scan(settings);
        if tracks.is_empty() {
            return Err(Error::CatalogEmpty {
                dir: settings.songs_dir.clone(),
            });
        }
        Ok(Self {
            tracks: tracks.into_iter().map(Arc::new).collect(),
        })
    }

    /// Build a catalog from already-constructed tracks.
    pub fn from_tracks<I>(tracks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<Track>>,
    {
        let tracks: Vec<Arc<Track>> = tracks.into_iter().collect();
        if tracks.is_empty() {
            return Err(Error::CatalogEmpty {
                dir: Default::default(),
            });
        }
        Ok(Self { tracks })
    }

    /// Track at 1-based `position`.
    pub fn get(&self, position: usize) -> Result<&Arc<Track>> {
        position
            .checked_sub(1)
            .and_then(|i| self.tracks.get(i))
            .ok_or(Error::InvalidPosition {
                position,
                len: self.tracks.len(),
            })
    }

    /// Rebuild position assignment from `tracks`, in the given order.
    pub fn reorder<I>(&self, tracks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<Track>>,
    {
        Self::from_tracks(tracks)
    }

    /// 1-based position of `track`, compared by identity.
    pub fn position_of(&self, track: &Arc<Track>) -> Option<usize> {
        self.tracks
            .iter()
            .position(|t| Arc::ptr_eq(t, track))
            .map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Track>> {
        self.tracks.iter()
    }

    /// The tracks sorted alphabetically by name.
    pub fn sorted_by_name(&self) -> Vec<Arc<Track>> {
        let mut tracks = self.tracks.clone();
        tracks.sort_by(|a, b| a.name.cmp(&b.name));
        tracks
    }

    /// Position after `position`, wrapping `len -> 1`.
    pub fn next_position(&self, position: usize) -> usize {
        if position >= self.tracks.len() {
            1
        } else {
            position + 1
        }
    }

    /// Position before `position`, wrapping `1 -> len`.
    pub fn previous_position(&self, position: usize) -> usize {
        if position <= 1 {
            self.tracks.len()
        } else {
            position - 1
        }
    }
}
