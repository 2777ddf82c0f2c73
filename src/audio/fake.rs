//! In-memory media backend for controller and app tests.

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use crate::library::Track;

use super::types::{AudioOutput, MediaPlayer, MediaStatus};

pub const TRACK_MS: i64 = 180_000;

#[derive(Default)]
pub struct FakeState {
    pub source: Option<PathBuf>,
    pub playing: bool,
    pub position: i64,
    pub duration: i64,
    pub events: VecDeque<MediaStatus>,
    pub volume: f32,
    pub device: Option<usize>,
    pub sources_set: usize,
}

/// In-memory player: sources load instantly, seeking to the end finishes the track.
#[derive(Clone, Default)]
pub struct FakePlayer(Rc<RefCell<FakeState>>);

impl FakePlayer {
    pub fn state(&self) -> Ref<'_, FakeState> {
        self.0.borrow()
    }

    /// Simulate the current source playing to its end.
    pub fn finish_track(&self) {
        let mut s = self.0.borrow_mut();
        s.playing = false;
        s.position = s.duration;
        s.events.push_back(MediaStatus::EndOfMedia);
    }

    pub fn advance(&self, ms: i64) {
        self.0.borrow_mut().position += ms;
    }
}

impl MediaPlayer for FakePlayer {
    fn set_source(&mut self, track: &Track) {
        let mut s = self.0.borrow_mut();
        s.source = Some(track.path.clone());
        s.playing = false;
        s.position = 0;
        s.duration = TRACK_MS;
        s.sources_set += 1;
        s.events.push_back(MediaStatus::Loaded);
    }

    fn play(&mut self) {
        let mut s = self.0.borrow_mut();
        if s.source.is_some() && s.position < s.duration {
            s.playing = true;
        }
    }

    fn pause(&mut self) {
        self.0.borrow_mut().playing = false;
    }

    fn is_playing(&self) -> bool {
        self.state().playing
    }

    fn position(&self) -> i64 {
        self.state().position
    }

    fn set_position(&mut self, position: i64) {
        let mut s = self.0.borrow_mut();
        s.position = position.clamp(0, s.duration);
        if s.duration > 0 && s.position >= s.duration {
            s.playing = false;
            s.events.push_back(MediaStatus::EndOfMedia);
        }
    }

    fn duration(&self) -> i64 {
        self.state().duration
    }

    fn poll_status(&mut self) -> Option<MediaStatus> {
        self.0.borrow_mut().events.pop_front()
    }
}

impl AudioOutput for FakePlayer {
    fn output_devices(&self) -> Vec<String> {
        vec!["Speakers".into(), "Headphones".into()]
    }

    fn select_output_device(&mut self, index: usize) {
        self.0.borrow_mut().device = Some(index);
    }

    fn set_master_volume(&mut self, fraction: f32) {
        self.0.borrow_mut().volume = fraction;
    }
}
