//! `rodio`-backed playback engine.
//!
//! Each [`RodioEngine`] owns at most one paused-or-playing `Sink` on the
//! shared output mixer. Notifications are synthesized from sink state when the
//! event loop polls, so the players only ever observe them on their own thread.

use std::fs::File;
use std::io::BufReader;
use std::mem;
use std::path::Path;
use std::time::{Duration, Instant};

use rodio::mixer::Mixer;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, warn};

use super::engine::{EngineFactory, MediaEvent, PlaybackEngine};
use super::error::EngineError;

const TIME_UPDATE_EVERY: Duration = Duration::from_millis(250);

/// The process-wide output stream. Engines stop producing sound once it drops.
pub struct AudioOutput {
    stream: OutputStream,
}

impl AudioOutput {
    pub fn open_default() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which would land on
        // top of the terminal UI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }

    pub fn engine(&self) -> RodioEngine {
        RodioEngine::new(self.stream.mixer().clone())
    }

    pub fn factory(&self) -> RodioFactory {
        RodioFactory {
            mixer: self.stream.mixer().clone(),
        }
    }
}

pub struct RodioFactory {
    mixer: Mixer,
}

impl EngineFactory for RodioFactory {
    type Engine = RodioEngine;

    fn open(&mut self, uri: &str) -> RodioEngine {
        let mut engine = RodioEngine::new(self.mixer.clone());
        engine.load(uri);
        engine
    }
}

pub struct RodioEngine {
    mixer: Mixer,
    location: Option<String>,
    sink: Option<Sink>,
    duration: Option<Duration>,
    ended: bool,
    last_tick: Instant,
    events: Vec<MediaEvent>,
}

impl RodioEngine {
    fn new(mixer: Mixer) -> Self {
        Self {
            mixer,
            location: None,
            sink: None,
            duration: None,
            ended: false,
            last_tick: Instant::now(),
            events: Vec::new(),
        }
    }

    fn is_playing(&self) -> bool {
        !self.ended && self.sink.as_ref().is_some_and(|s| !s.is_paused())
    }

    /// Create a paused sink for `location`.
    fn open_sink(&self, location: &str) -> Result<(Sink, Option<Duration>), EngineError> {
        let path = Path::new(location);
        let file = File::open(path).map_err(|source| EngineError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| EngineError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let duration = source
            .total_duration()
            .or_else(|| crate::library::tags::duration(path));

        let sink = Sink::connect_new(&self.mixer);
        sink.append(source);
        sink.pause();
        Ok((sink, duration))
    }

    fn reopen(&mut self) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.duration = None;
        self.ended = false;

        let Some(location) = self.location.clone() else {
            return;
        };
        match self.open_sink(&location) {
            Ok((sink, duration)) => {
                debug!(%location, ?duration, "source loaded");
                self.sink = Some(sink);
                self.duration = duration;
            }
            // A broken source is silence, not a failure.
            Err(e) => warn!(error = %e, "source failed to load"),
        }
    }
}

impl PlaybackEngine for RodioEngine {
    fn load(&mut self, uri: &str) {
        let was_playing = self.is_playing();
        self.location = Some(uri.to_string());
        self.reopen();
        if was_playing {
            self.events.push(MediaEvent::Pause);
        }
    }

    fn play(&mut self) {
        if self.ended {
            // Playing an ended source starts it over.
            self.reopen();
        }
        if let Some(sink) = &self.sink {
            if sink.is_paused() {
                sink.play();
                self.last_tick = Instant::now();
                self.events.push(MediaEvent::Play);
            }
        }
    }

    fn pause(&mut self) {
        if self.is_playing() {
            if let Some(sink) = &self.sink {
                sink.pause();
            }
            self.events.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        !self.is_playing()
    }

    fn position(&self) -> Duration {
        match (&self.sink, self.ended) {
            (_, true) => self.duration.unwrap_or_default(),
            (Some(sink), false) => sink.get_pos(),
            (None, false) => Duration::ZERO,
        }
    }

    fn set_position(&mut self, position: Duration) {
        let target = match self.duration {
            Some(total) => position.min(total),
            None => position,
        };
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = sink.try_seek(target).map_err(EngineError::from) {
            warn!(error = %e, ?target, "seek ignored");
            return;
        }
        self.events.push(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        if self.is_playing() {
            let drained = self.sink.as_ref().is_some_and(Sink::empty);
            if drained {
                self.ended = true;
                if let Some(sink) = &self.sink {
                    sink.pause();
                }
                self.events.extend([MediaEvent::TimeUpdate, MediaEvent::Pause, MediaEvent::Ended]);
            } else if self.last_tick.elapsed() >= TIME_UPDATE_EVERY {
                self.last_tick = Instant::now();
                self.events.push(MediaEvent::TimeUpdate);
            }
        }
        mem::take(&mut self.events)
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}
