//! The native playback contract and the commands the players issue against it.

use std::time::Duration;

/// Notifications emitted by a playback engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback started or resumed.
    Play,
    /// Playback paused, including the implicit pause at the end of a source.
    Pause,
    /// The source played through to its end.
    Ended,
    /// The playback position moved.
    TimeUpdate,
}

/// A point-in-time view of an engine, handed to the pure state transitions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EngineStatus {
    pub paused: bool,
    pub position: Duration,
    /// `None` until the source's length is known.
    pub duration: Option<Duration>,
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self {
            paused: true,
            position: Duration::ZERO,
            duration: None,
        }
    }
}

impl EngineStatus {
    /// Position as a floored percentage of the duration.
    ///
    /// `None` when the duration is unknown or zero.
    pub fn percent(&self) -> Option<u8> {
        let total = self.duration.filter(|d| !d.is_zero())?;
        let pct = (100.0 * self.position.as_secs_f64() / total.as_secs_f64()).floor();
        Some(pct.clamp(0.0, 100.0) as u8)
    }
}

/// A single audio playback instance.
///
/// Commands never fail from the caller's point of view: an engine that cannot
/// open or decode its source simply stays silent and emits nothing.
pub trait PlaybackEngine {
    /// Point the engine at a new source. Does not start playback.
    fn load(&mut self, uri: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn position(&self) -> Duration;
    /// Move the playback position. Implementations clamp to the source bounds.
    fn set_position(&mut self, position: Duration);
    fn duration(&self) -> Option<Duration>;
    /// Drain notifications produced since the last call.
    fn poll_events(&mut self) -> Vec<MediaEvent>;

    /// Relative seek by whole seconds.
    ///
    /// Saturates at zero; the upper bound is whatever `set_position` enforces.
    fn nudge(&mut self, seconds: i64) {
        let current = self.position();
        let delta = Duration::from_secs(seconds.unsigned_abs());
        let target = if seconds < 0 {
            current.saturating_sub(delta)
        } else {
            current.saturating_add(delta)
        };
        self.set_position(target);
    }

    fn status(&self) -> EngineStatus {
        EngineStatus {
            paused: self.is_paused(),
            position: self.position(),
            duration: self.duration(),
        }
    }
}

/// Creates fresh engine instances bound to a source.
pub trait EngineFactory {
    type Engine: PlaybackEngine;

    fn open(&mut self, uri: &str) -> Self::Engine;
}

/// A command addressed to one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Load(String),
    Play,
    Pause,
    Seek(Duration),
    Nudge(i64),
}

impl EngineCommand {
    pub fn apply<E: PlaybackEngine + ?Sized>(self, engine: &mut E) {
        match self {
            EngineCommand::Load(uri) => engine.load(&uri),
            EngineCommand::Play => engine.play(),
            EngineCommand::Pause => engine.pause(),
            EngineCommand::Seek(position) => engine.set_position(position),
            EngineCommand::Nudge(seconds) => engine.nudge(seconds),
        }
    }
}
