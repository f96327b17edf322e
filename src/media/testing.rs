//! In-memory stand-ins for the view and the audio device.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::engine::{EngineFactory, MediaEvent, PlaybackEngine};
use super::render::{RenderSink, RenderUpdate};

#[derive(Debug, Default)]
pub struct FakeView {
    pub updates: Vec<RenderUpdate>,
}

impl FakeView {
    pub fn last_playing(&self) -> Option<bool> {
        self.updates.iter().rev().find_map(|u| match u {
            RenderUpdate::Playing(p) => Some(*p),
            _ => None,
        })
    }

    pub fn notices(&self) -> Vec<&str> {
        self.updates
            .iter()
            .filter_map(|u| match u {
                RenderUpdate::Notice(n) => Some(n.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for FakeView {
    fn render(&mut self, update: RenderUpdate) {
        self.updates.push(update);
    }
}

/// Behaves like an audio element whose media is always available instantly.
#[derive(Debug)]
pub struct FakeEngine {
    pub source: Option<String>,
    pub paused: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    /// Duration reported for every loaded source.
    pub media_length: Option<Duration>,
    pub events: Vec<MediaEvent>,
    pub loads: usize,
    live: Option<Rc<RefCell<usize>>>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            source: None,
            paused: true,
            position: Duration::ZERO,
            duration: None,
            media_length: Some(Duration::from_secs(200)),
            events: Vec::new(),
            loads: 0,
            live: None,
        }
    }
}

impl FakeEngine {
    pub fn finish(&mut self) {
        self.position = self.duration.unwrap_or_default();
        self.paused = true;
        self.events
            .extend([MediaEvent::TimeUpdate, MediaEvent::Pause, MediaEvent::Ended]);
    }
}

impl PlaybackEngine for FakeEngine {
    fn load(&mut self, uri: &str) {
        if !self.paused {
            self.paused = true;
            self.events.push(MediaEvent::Pause);
        }
        self.source = Some(uri.to_string());
        self.position = Duration::ZERO;
        self.duration = self.media_length;
        self.loads += 1;
    }

    fn play(&mut self) {
        if self.source.is_some() && self.paused {
            self.paused = false;
            self.events.push(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.events.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_position(&mut self, position: Duration) {
        self.position = match self.duration {
            Some(total) => position.min(total),
            None => position,
        };
        self.events.push(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Drop for FakeEngine {
    fn drop(&mut self) {
        if let Some(live) = &self.live {
            *live.borrow_mut() -= 1;
        }
    }
}

/// Hands out [`FakeEngine`]s and counts how many are alive at once.
#[derive(Debug, Default)]
pub struct FakeFactory {
    pub opened: Vec<String>,
    live: Rc<RefCell<usize>>,
    pub peak_live: usize,
}

impl FakeFactory {
    pub fn live(&self) -> usize {
        *self.live.borrow()
    }
}

impl EngineFactory for FakeFactory {
    type Engine = FakeEngine;

    fn open(&mut self, uri: &str) -> FakeEngine {
        *self.live.borrow_mut() += 1;
        self.peak_live = self.peak_live.max(self.live());
        self.opened.push(uri.to_string());

        let mut engine = FakeEngine::default();
        engine.live = Some(self.live.clone());
        engine.load(uri);
        engine
    }
}
