//! Procedural sound effects - no asset files.
//!
//! Both games play short square-wave tones on gameplay events. Synthesis is
//! the classic `sign(sin(2*pi*f*t))` scaled to mono f32 PCM at 44.1 kHz.
//!
//! Playback runs on one dedicated worker thread fed through a bounded
//! channel. The game loop never blocks on audio: a full queue drops the tone
//! with a warning, and a machine without an output device downgrades to
//! silence at startup instead of failing the game.

use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;

use crate::consts::SAMPLE_RATE;

/// Pending tone requests before the queue starts dropping.
const QUEUE_DEPTH: usize = 16;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open audio output stream: {0}")]
    Stream(#[from] rodio::StreamError),
}

/// A single square-wave tone request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration_secs: f32,
    pub amplitude: f32,
}

impl Tone {
    pub const fn new(freq_hz: f32, duration_secs: f32) -> Self {
        Self {
            freq_hz,
            duration_secs,
            amplitude: 0.5,
        }
    }

    pub const fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }
}

/// Render a square wave as mono f32 samples.
pub fn square_wave(freq_hz: f32, duration_secs: f32, amplitude: f32) -> Vec<f32> {
    let sample_count = (SAMPLE_RATE as f32 * duration_secs) as usize;
    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let t = i as f32 / SAMPLE_RATE as f32;
        let s = (std::f32::consts::TAU * freq_hz * t).sin();
        samples.push(if s >= 0.0 { amplitude } else { -amplitude });
    }
    samples
}

/// Handle to the audio worker. Dropping it shuts the worker down.
pub struct Audio {
    // Keeps the output device alive; playback goes through the handle
    // owned by the worker thread.
    _stream: OutputStream,
    tx: SyncSender<Tone>,
}

impl Audio {
    /// Open the default output device and start the playback worker.
    pub fn new(volume: f32) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        let (tx, rx) = mpsc::sync_channel::<Tone>(QUEUE_DEPTH);

        thread::spawn(move || playback_worker(rx, handle, volume));

        Ok(Self {
            _stream: stream,
            tx,
        })
    }

    /// Queue a tone for playback. Never blocks; a full queue drops the tone.
    pub fn play(&self, tone: Tone) {
        match self.tx.try_send(tone) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                log::warn!("audio queue full, dropping {:.0} Hz tone", tone.freq_hz);
            }
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("audio worker gone, dropping tone");
            }
        }
    }
}

fn playback_worker(rx: mpsc::Receiver<Tone>, handle: OutputStreamHandle, volume: f32) {
    while let Ok(tone) = rx.recv() {
        let sink = match Sink::try_new(&handle) {
            Ok(sink) => sink,
            Err(e) => {
                log::warn!("audio sink unavailable: {e}");
                continue;
            }
        };
        sink.set_volume(volume);
        let samples = square_wave(tone.freq_hz, tone.duration_secs, tone.amplitude);
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
        // Playback continues on rodio's mixer; the worker is immediately
        // free for the next request.
        sink.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_wave_sample_count() {
        let samples = square_wave(800.0, 0.1, 0.5);
        assert_eq!(samples.len(), 4410);
    }

    #[test]
    fn test_square_wave_is_two_valued() {
        let samples = square_wave(400.0, 0.05, 0.5);
        assert!(samples.iter().all(|&s| s == 0.5 || s == -0.5));
    }

    #[test]
    fn test_square_wave_alternates() {
        let samples = square_wave(440.0, 0.1, 1.0);
        assert!(samples.iter().any(|&s| s > 0.0));
        assert!(samples.iter().any(|&s| s < 0.0));
        // Roughly one full period per 1/440 s: count sign changes.
        let flips = samples.windows(2).filter(|w| w[0] != w[1]).count();
        let expected = (2.0 * 440.0 * 0.1) as usize;
        assert!(flips.abs_diff(expected) <= 2, "flips = {flips}");
    }

    #[test]
    fn test_tone_amplitude_override() {
        let tone = Tone::new(659.0, 0.1).with_amplitude(1.0);
        assert_eq!(tone.amplitude, 1.0);
        assert_eq!(Tone::new(659.0, 0.1).amplitude, 0.5);
    }
}
