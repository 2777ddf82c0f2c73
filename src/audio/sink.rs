//! Utilities for creating `rodio` sinks and output streams.
//!
//! Opening/decoding a file and preparing a paused `Sink` at the requested
//! start position, plus output device lookup through `cpal`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::cpal::traits::{DeviceTrait, HostTrait};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

pub(super) type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
///
/// Also returns the decoder's total duration when the format reports one.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
    volume: f32,
) -> Result<(Sink, Option<Duration>), SinkError> {
    let file = File::open(path)?;
    let decoder = Decoder::new(BufReader::new(file))?;
    let total = decoder.total_duration();
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = decoder.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok((sink, total))
}

/// Names of the host's output devices, in enumeration order.
pub(super) fn output_device_names() -> Vec<String> {
    let host = rodio::cpal::default_host();
    match host.output_devices() {
        Ok(devices) => devices
            .enumerate()
            .map(|(i, d)| d.name().unwrap_or_else(|_| format!("Output {}", i + 1)))
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "cannot enumerate output devices");
            Vec::new()
        }
    }
}

/// Open the default output stream, or the device at `index`.
pub(super) fn open_stream(index: Option<usize>) -> Result<OutputStream, SinkError> {
    let mut stream = match index {
        None => OutputStreamBuilder::open_default_stream()?,
        Some(i) => {
            let device = rodio::cpal::default_host()
                .output_devices()?
                .nth(i)
                .ok_or_else(|| format!("no output device at index {i}"))?;
            OutputStreamBuilder::from_device(device)?.open_stream()?
        }
    };
    // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
    // but noisy for a TUI app.
    stream.log_on_drop(false);
    Ok(stream)
}
