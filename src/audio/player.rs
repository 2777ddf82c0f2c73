use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

use crate::library::Track;

use super::sink::output_device_names;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioOutput, MediaPlayer, MediaStatus, PlaybackHandle, PlaybackInfo};

/// Handle to the audio thread.
///
/// Cheap to clone; every clone drives the same thread. Queries are answered
/// from the shared `PlaybackInfo`, which each command updates before it is
/// sent so callers observe their own changes immediately.
#[derive(Clone)]
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    status: Arc<Mutex<Receiver<MediaStatus>>>,
    devices: Arc<Vec<String>>,
    join: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AudioPlayer {
    pub fn new(volume: f32) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (status_tx, status_rx) = mpsc::channel::<MediaStatus>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo {
            volume,
            ..PlaybackInfo::default()
        }));

        let audio_handle = spawn_audio_thread(rx, status_tx, playback_info.clone(), volume);

        Self {
            tx,
            playback: playback_info,
            status: Arc::new(Mutex::new(status_rx)),
            devices: Arc::new(output_device_names()),
            join: Arc::new(Mutex::new(Some(audio_handle))),
        }
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            debug!(cmd = ?e.0, "audio thread is gone");
        }
    }

    fn update(&self, f: impl FnOnce(&mut PlaybackInfo)) {
        if let Ok(mut info) = self.playback.lock() {
            f(&mut info);
        }
    }

    fn read<T>(&self, f: impl FnOnce(&PlaybackInfo) -> T) -> Option<T> {
        self.playback.lock().ok().map(|info| f(&info))
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

/// Clamp a millisecond position into `0..=duration` (no upper bound when the
/// duration is unknown).
pub(crate) fn clamp_position(position: i64, duration: Duration) -> Duration {
    let ms = position.max(0) as u64;
    let pos = Duration::from_millis(ms);
    if duration.is_zero() {
        pos
    } else {
        pos.min(duration)
    }
}

impl MediaPlayer for AudioPlayer {
    fn set_source(&mut self, track: &Track) {
        self.update(|info| {
            info.source = Some(track.source().to_path_buf());
            info.playing = false;
            info.position = Duration::ZERO;
            info.duration = track.duration.unwrap_or(Duration::ZERO);
        });
        self.send(AudioCmd::SetSource {
            path: track.source().to_path_buf(),
            duration_hint: track.duration,
        });
    }

    fn play(&mut self) {
        let has_source = self.read(|info| info.source.is_some()).unwrap_or(false);
        if has_source {
            self.update(|info| info.playing = true);
            self.send(AudioCmd::Play);
        }
    }

    fn pause(&mut self) {
        self.update(|info| info.playing = false);
        self.send(AudioCmd::Pause);
    }

    fn is_playing(&self) -> bool {
        self.read(|info| info.playing).unwrap_or(false)
    }

    fn position(&self) -> i64 {
        self.read(|info| info.position.as_millis() as i64)
            .unwrap_or(0)
    }

    fn set_position(&mut self, position: i64) {
        let mut target = Duration::ZERO;
        self.update(|info| {
            target = clamp_position(position, info.duration);
            info.position = target;
            if !info.duration.is_zero() && target >= info.duration {
                info.playing = false;
            }
        });
        self.send(AudioCmd::Seek(target));
    }

    fn duration(&self) -> i64 {
        self.read(|info| info.duration.as_millis() as i64)
            .unwrap_or(0)
    }

    fn poll_status(&mut self) -> Option<MediaStatus> {
        let rx = self.status.lock().ok()?;
        rx.try_recv().ok()
    }
}

impl AudioOutput for AudioPlayer {
    fn output_devices(&self) -> Vec<String> {
        self.devices.as_ref().clone()
    }

    fn select_output_device(&mut self, index: usize) {
        self.send(AudioCmd::SetDevice(index));
    }

    fn set_master_volume(&mut self, fraction: f32) {
        let v = fraction.clamp(0.0, 1.0);
        self.update(|info| info.volume = v);
        self.send(AudioCmd::SetVolume(v));
    }
}
