use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::artwork::Artwork;
use crate::audio::{AudioOutput, MediaPlayer, MediaStatus};
use crate::config::Settings;
use crate::error::Result;
use crate::library::{Catalog, Track};

use super::model::{Display, PlaybackState, format_mmss};

/// Transport controller for one home-screen session.
///
/// Drives the player `P` and owns the play order. Track changes always go
/// through the end-of-media path: navigation moves `song_num`, forces the
/// player to the end of the current source and lets the end-of-media handler
/// load the new track. `user_navigated` tells that handler not to advance a
/// second time, and `resume_on_load` makes the new track play once loaded.
pub struct Controls<P> {
    player: P,
    catalog: Catalog,
    song_num: usize,
    current: Arc<Track>,

    first: bool,
    user_navigated: bool,
    resume_on_load: bool,
    shuffled: bool,
    autoplay: bool,
    timer_active: bool,
    stopped: bool,

    seek_step_ms: i64,
    base_title: String,
    display: Display,
}

impl<P: MediaPlayer + AudioOutput> Controls<P> {
    /// Start a session at position 1 with the first track loaded and stopped.
    pub fn new(catalog: Catalog, player: P, settings: &Settings) -> Result<Self> {
        let current = catalog.get(1)?.clone();
        let mut controls = Self {
            player,
            catalog,
            song_num: 1,
            current,
            first: true,
            user_navigated: false,
            resume_on_load: false,
            shuffled: false,
            autoplay: settings.playback.autoplay,
            timer_active: false,
            stopped: true,
            seek_step_ms: settings.controls.seek_step_ms as i64,
            base_title: settings.ui.window_title.clone(),
            display: Display {
                elapsed: format_mmss(0),
                total: format_mmss(0),
                autoplay: settings.playback.autoplay,
                window_title: settings.ui.window_title.clone(),
                ..Display::default()
            },
        };

        info!(tracks = controls.catalog.len(), "playback session started");
        // Notifications left over from an earlier session belong to its source.
        while let Some(stale) = controls.player.poll_status() {
            debug!(?stale, "dropping stale media status");
        }
        controls.player.set_source(&controls.current);
        controls.change_vol(settings.playback.volume);
        if settings.playback.shuffle {
            controls.shuffle()?;
        }
        controls.stop();
        Ok(controls)
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn current(&self) -> &Arc<Track> {
        &self.current
    }

    /// 1-based position of the current track in the play order.
    pub fn song_num(&self) -> usize {
        self.song_num
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Whether the polling timer is running.
    pub fn timer_active(&self) -> bool {
        self.timer_active
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn playback_state(&self) -> PlaybackState {
        if self.player.is_playing() {
            PlaybackState::Playing
        } else if self.stopped {
            PlaybackState::Stopped
        } else {
            PlaybackState::Paused
        }
    }

    /// Toggle between playing and paused, then start the polling timer.
    pub fn play(&mut self) {
        if self.player.is_playing() {
            self.player.pause();
        } else {
            self.player.play();
        }
        self.stopped = false;
        self.display.slider_max = self.player.duration().max(0);
        self.timer_active = true;
    }

    pub fn pause(&mut self) {
        if self.player.is_playing() {
            self.player.pause();
        }
    }

    /// Pause and rewind to the start of the current track.
    pub fn stop(&mut self) {
        self.player.pause();
        self.player.set_position(0);
        self.display.slider_pos = 0;
        self.display.elapsed = format_mmss(0);
        self.stopped = true;
    }

    pub fn next(&mut self) -> Result<()> {
        let target = self.catalog.next_position(self.song_num);
        self.navigate_to(target)
    }

    pub fn previous(&mut self) -> Result<()> {
        let target = self.catalog.previous_position(self.song_num);
        self.navigate_to(target)
    }

    fn navigate_to(&mut self, target: usize) -> Result<()> {
        debug!(from = self.song_num, to = target, "user navigation");
        self.user_navigated = true;
        self.resume_on_load = true;
        self.song_num = target;

        let duration = self.player.duration();
        if duration > 0 {
            self.player.set_position(duration);
        } else {
            // Sources without a known length never report the end on a seek.
            self.on_media_status(MediaStatus::EndOfMedia)?;
        }
        if !self.player.is_playing() {
            self.play();
        }
        self.pump_events()
    }

    /// Apply every pending player notification, in order.
    pub fn pump_events(&mut self) -> Result<()> {
        while let Some(status) = self.player.poll_status() {
            self.on_media_status(status)?;
        }
        Ok(())
    }

    pub fn on_media_status(&mut self, status: MediaStatus) -> Result<()> {
        debug!(?status, song_num = self.song_num, "media status");
        match status {
            MediaStatus::EndOfMedia => {
                self.timer_active = false;
                if self.user_navigated {
                    self.user_navigated = false;
                } else {
                    self.song_num = self.catalog.next_position(self.song_num);
                }
                self.current = self.catalog.get(self.song_num)?.clone();
                self.player.set_source(&self.current);
                self.display.slider_pos = 0;
                self.stopped = true;
            }
            MediaStatus::Loaded => {
                self.display.total = format_mmss(self.player.duration());
                self.display.elapsed = format_mmss(0);
                if self.autoplay || self.resume_on_load {
                    self.resume_on_load = false;
                    self.player.pause();
                    self.play();
                }
                self.update_song_info();
                self.display.window_title =
                    format!("{} - {}", self.base_title, self.current.capitalized_name());
            }
            MediaStatus::Invalid => {
                self.resume_on_load = false;
                warn!(track = %self.current.name, "track cannot be played");
            }
        }
        Ok(())
    }

    fn update_song_info(&mut self) {
        self.display.title = self.current.name.clone();
        self.display.band = self.current.band.clone();
        match self.current.artwork.as_deref() {
            Some(path) => match Artwork::load(path) {
                Ok(art) => self.display.artwork = Some(art),
                Err(e) => debug!(error = %e, "keeping previous artwork"),
            },
            None => self.display.artwork = None,
        }
    }

    /// Polling-timer callback: publish the player position.
    pub fn tick(&mut self) {
        let position = self.player.position();
        self.display.slider_pos = position.max(0);
        if self.first && 0 < position && position < 100 {
            // First tick of the session: nudge the position once.
            self.first = false;
            self.seek();
            self.rewind();
        }
        self.display.elapsed = format_mmss(self.player.position());
    }

    pub fn rewind(&mut self) {
        let position = self.player.position() - self.seek_step_ms;
        self.player.set_position(position);
    }

    pub fn seek(&mut self) {
        let position = self.player.position() + self.seek_step_ms;
        self.player.set_position(position);
    }

    /// Absolute seek in milliseconds.
    pub fn change_song_pos(&mut self, position: i64) {
        self.player.set_position(position);
    }

    /// Toggle between a random order and alphabetical order, keeping the
    /// current track playing at its new position.
    pub fn shuffle(&mut self) -> Result<()> {
        let order = if self.shuffled {
            self.catalog.sorted_by_name()
        } else {
            let mut tracks: Vec<Arc<Track>> = self.catalog.iter().cloned().collect();
            tracks.shuffle(&mut rand::rng());
            tracks
        };
        self.catalog = self.catalog.reorder(order)?;
        self.shuffled = !self.shuffled;
        self.display.shuffle_active = self.shuffled;
        if let Some(position) = self.catalog.position_of(&self.current) {
            self.song_num = position;
        }
        info!(shuffled = self.shuffled, song_num = self.song_num, "play order changed");
        Ok(())
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
        self.display.autoplay = self.autoplay;
    }

    pub fn volume(&self) -> u8 {
        self.display.volume
    }

    /// Set the master volume, in percent.
    pub fn change_vol(&mut self, percent: u8) {
        let percent = percent.min(100);
        self.player.set_master_volume(f32::from(percent) / 100.0);
        self.display.volume = percent;
    }

    pub fn output_devices(&self) -> Vec<String> {
        self.player.output_devices()
    }

    pub fn change_audio_output(&mut self, index: usize) {
        let count = self.player.output_devices().len();
        if index >= count {
            warn!(index, count, "no such output device");
            return;
        }
        self.player.select_output_device(index);
        self.display.device = Some(index);
    }

    /// Select the device after the current one, wrapping around.
    pub fn next_audio_output(&mut self) {
        let count = self.player.output_devices().len();
        if count == 0 {
            return;
        }
        let index = self.display.device.map_or(0, |d| (d + 1) % count);
        self.change_audio_output(index);
    }
}
