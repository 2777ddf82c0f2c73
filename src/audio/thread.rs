use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, Sink};
use tracing::{debug, error, info, warn};

use super::sink::{create_sink_at, open_stream};
use super::types::{AudioCmd, MediaStatus, PlaybackHandle};

/// How long the thread waits for a command before checking for end-of-media.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    status_tx: Sender<MediaStatus>,
    playback_info: PlaybackHandle,
    volume: f32,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match open_stream(None) {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "no audio output device");
                return;
            }
        };

        let mut engine = Engine {
            stream,
            status_tx,
            playback_info,
            sink: None,
            source: None,
            duration: Duration::ZERO,
            paused: true,
            started_at: None,
            accumulated: Duration::ZERO,
            volume,
        };

        loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    engine.quit(fade_out_ms);
                    break;
                }
                Ok(cmd) => engine.handle(cmd),
                Err(RecvTimeoutError::Timeout) => engine.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        debug!("audio thread finished");
    })
}

/// State owned by the audio thread.
struct Engine {
    stream: OutputStream,
    status_tx: Sender<MediaStatus>,
    playback_info: PlaybackHandle,
    sink: Option<Sink>,
    source: Option<PathBuf>,
    duration: Duration,
    paused: bool,
    // Track start time and accumulated elapsed when paused.
    started_at: Option<Instant>,
    accumulated: Duration,
    volume: f32,
}

impl Engine {
    fn handle(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::SetSource {
                path,
                duration_hint,
            } => self.load(path, duration_hint),
            AudioCmd::Play => self.play(),
            AudioCmd::Pause => self.pause(),
            AudioCmd::Seek(pos) => self.seek(pos),
            AudioCmd::SetVolume(v) => {
                self.volume = v;
                if let Some(s) = self.sink.as_ref() {
                    s.set_volume(v);
                }
            }
            AudioCmd::SetDevice(index) => self.switch_device(index),
            AudioCmd::Quit { .. } => {}
        }
    }

    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn notify(&self, status: MediaStatus) {
        debug!(?status, "media status");
        let _ = self.status_tx.send(status);
    }

    fn load(&mut self, path: PathBuf, duration_hint: Option<Duration>) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;

        match create_sink_at(&self.stream, &path, Duration::ZERO, self.volume) {
            Ok((sink, total)) => {
                self.duration = total.or(duration_hint).unwrap_or(Duration::ZERO);
                self.sink = Some(sink);
                self.source = Some(path);
                if let Ok(mut info) = self.playback_info.lock() {
                    info.duration = self.duration;
                    info.position = Duration::ZERO;
                }
                self.notify(MediaStatus::Loaded);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot decode source");
                self.source = None;
                self.duration = Duration::ZERO;
                self.notify(MediaStatus::Invalid);
            }
        }
    }

    fn play(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            if self.paused {
                s.play();
                self.paused = false;
                self.started_at = Some(Instant::now());
            }
        }
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            if !self.paused {
                s.pause();
                self.accumulated += self.started_at.map_or(Duration::ZERO, |st| st.elapsed());
                self.started_at = None;
                self.paused = true;
            }
        }
    }

    fn seek(&mut self, pos: Duration) {
        let Some(path) = self.source.clone() else {
            return;
        };

        if !self.duration.is_zero() && pos >= self.duration {
            if let Some(s) = self.sink.take() {
                s.stop();
            }
            self.paused = true;
            self.started_at = None;
            self.accumulated = self.duration;
            self.notify(MediaStatus::EndOfMedia);
            return;
        }

        // Scrubbing: rebuild the current sink and skip into the file.
        match create_sink_at(&self.stream, &path, pos, self.volume) {
            Ok((sink, _)) => {
                if let Some(s) = self.sink.take() {
                    s.stop();
                }
                if !self.paused {
                    sink.play();
                    self.started_at = Some(Instant::now());
                } else {
                    self.started_at = None;
                }
                self.accumulated = pos;
                self.sink = Some(sink);
            }
            Err(e) => warn!(error = %e, "seek failed"),
        }
    }

    fn switch_device(&mut self, index: usize) {
        let stream = match open_stream(Some(index)) {
            Ok(s) => s,
            Err(e) => {
                warn!(index, error = %e, "cannot open output device");
                return;
            }
        };
        info!(index, "output device switched");

        let position = self.elapsed();
        let was_paused = self.paused;
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.stream = stream;

        if let Some(path) = self.source.clone() {
            match create_sink_at(&self.stream, &path, position, self.volume) {
                Ok((sink, _)) => {
                    if !was_paused {
                        sink.play();
                        self.started_at = Some(Instant::now());
                    }
                    self.accumulated = position;
                    self.sink = Some(sink);
                }
                Err(e) => warn!(error = %e, "cannot reopen source on new device"),
            }
        }

        if let Ok(mut info) = self.playback_info.lock() {
            info.device = Some(index);
        }
    }

    /// Periodic check for end-of-media and position publishing.
    fn tick(&mut self) {
        let Some(s) = self.sink.as_ref() else {
            return;
        };
        if self.paused {
            return;
        }

        if s.empty() {
            self.paused = true;
            self.started_at = None;
            self.accumulated = self.duration;
            if let Ok(mut info) = self.playback_info.lock() {
                info.playing = false;
                info.position = self.duration;
            }
            self.notify(MediaStatus::EndOfMedia);
            return;
        }

        let mut elapsed = self.elapsed();
        if !self.duration.is_zero() {
            elapsed = elapsed.min(self.duration);
        }
        if let Ok(mut info) = self.playback_info.lock() {
            info.position = elapsed;
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(s) = self.sink.take() {
            if !self.paused {
                fade_out_sink(&s, self.volume, fade_out_ms);
            }
            s.stop();
        }
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
