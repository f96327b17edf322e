//! Jukebox state and its transitions.
//!
//! Every operation returns the effects it wants applied instead of touching
//! the engine or the view itself.

use tracing::{debug, info};

use crate::config::JukeboxSettings;
use crate::library::FileEntry;
use crate::media::{EngineCommand, EngineStatus, MediaEvent, NowShowing, RenderUpdate, wrap_index};

use super::records::RecordCollection;
use super::scene::{SceneId, SceneRouter};

/// Identifies one playback instance. Ids are never reused within a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

/// The live handle and the record it was opened for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ActiveHandle {
    pub id: HandleId,
    pub record: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Create a playback instance bound to `uri`.
    Open { handle: HandleId, uri: String },
    Handle(HandleId, EngineCommand),
    /// Drop the playback instance.
    Release(HandleId),
    Render(RenderUpdate),
}

/// Result of an ingestion batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    pub accepted: usize,
    pub effects: Vec<Effect>,
}

pub struct Jukebox {
    router: SceneRouter,
    records: RecordCollection,
    current: usize,
    active: Option<ActiveHandle>,
    next_handle: u64,
    picker_open: bool,
}

impl Jukebox {
    pub fn new(router: SceneRouter, records: RecordCollection) -> Self {
        Self {
            router,
            records,
            current: 0,
            active: None,
            next_handle: 0,
            picker_open: false,
        }
    }

    pub fn from_settings(settings: &JukeboxSettings) -> Self {
        let scenes = settings
            .scenes
            .iter()
            .map(|s| SceneId::from(s.as_str()))
            .collect();
        let router = SceneRouter::new(scenes, SceneId::from(settings.landing_scene.as_str()));
        Self::new(router, RecordCollection::new(settings.placeholders.iter().cloned()))
    }

    pub fn router(&self) -> &SceneRouter {
        &self.router
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn active(&self) -> Option<ActiveHandle> {
        self.active
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    /// Arrow-key navigation only applies away from the landing scene.
    pub fn arrows_enabled(&self) -> bool {
        !self.router.is_landing()
    }

    /// Everything the view needs to draw the initial state.
    pub fn initial_render(&self) -> Vec<Effect> {
        vec![
            Effect::Render(RenderUpdate::Scene(self.router.current().to_string())),
            Effect::Render(RenderUpdate::Records(self.records.rows())),
            Effect::Render(RenderUpdate::Playing(false)),
        ]
    }

    pub fn show_scene(&mut self, id: &str) -> Vec<Effect> {
        render_all(self.router.show_scene(id))
    }

    pub fn cycle_scene(&mut self, forward: bool) -> Vec<Effect> {
        render_all(self.router.cycle(forward))
    }

    pub fn open_picker(&mut self) -> Vec<Effect> {
        self.set_picker(true)
    }

    pub fn close_picker(&mut self) -> Vec<Effect> {
        self.set_picker(false)
    }

    fn set_picker(&mut self, open: bool) -> Vec<Effect> {
        if self.picker_open == open {
            return Vec::new();
        }
        self.picker_open = open;
        vec![Effect::Render(RenderUpdate::Picker(open))]
    }

    /// Add the audio files of `files`; everything else is dropped silently.
    pub fn ingest<I>(&mut self, files: I) -> Ingested
    where
        I: IntoIterator<Item = FileEntry>,
    {
        let accepted = self.records.ingest(files);
        info!(accepted, total = self.records.len(), "files ingested");

        let noun = if accepted == 1 { "record" } else { "records" };
        Ingested {
            accepted,
            effects: vec![
                Effect::Render(RenderUpdate::Records(self.records.rows())),
                Effect::Render(RenderUpdate::Notice(format!("Added {accepted} {noun}"))),
            ],
        }
    }

    /// Play record `index`.
    ///
    /// A placeholder only produces a notice; nothing else changes.
    pub fn select(&mut self, index: usize) -> Vec<Effect> {
        let Some(record) = self.records.get(index) else {
            return Vec::new();
        };
        let Some(url) = record.url() else {
            debug!(index, name = %record.name, "placeholder selected");
            return vec![Effect::Render(RenderUpdate::Notice(format!(
                "\"{}\" is a placeholder, not playable",
                record.name
            )))];
        };
        let uri = url.to_string();
        let now = NowShowing {
            title: record.name.clone(),
            artist: None,
            cover: None,
        };

        let mut effects = self.release_active();

        let handle = HandleId(self.next_handle);
        self.next_handle += 1;
        self.active = Some(ActiveHandle {
            id: handle,
            record: index,
        });
        self.current = index;
        info!(index, name = %now.title, ?handle, "record selected");

        effects.push(Effect::Open { handle, uri });
        effects.push(Effect::Handle(handle, EngineCommand::Play));
        effects.push(Effect::Render(RenderUpdate::Track(now)));
        effects.push(Effect::Render(RenderUpdate::Playing(true)));
        effects.extend(self.close_picker());
        effects
    }

    pub fn next(&mut self) -> Vec<Effect> {
        self.step(1)
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> Vec<Effect> {
        if self.records.is_empty() {
            return Vec::new();
        }
        self.current = wrap_index(self.current as i64 + delta, self.records.len());
        self.select(self.current)
    }

    /// Resume the active handle. No-op without one or when it is already playing.
    pub fn play(&self, status: Option<&EngineStatus>) -> Vec<Effect> {
        match (self.active, status) {
            (Some(active), Some(status)) if status.paused => vec![
                Effect::Handle(active.id, EngineCommand::Play),
                Effect::Render(RenderUpdate::Playing(true)),
            ],
            _ => Vec::new(),
        }
    }

    /// Pause the active handle. No-op without one or when it is already paused.
    pub fn pause(&self, status: Option<&EngineStatus>) -> Vec<Effect> {
        match (self.active, status) {
            (Some(active), Some(status)) if !status.paused => vec![
                Effect::Handle(active.id, EngineCommand::Pause),
                Effect::Render(RenderUpdate::Playing(false)),
            ],
            _ => Vec::new(),
        }
    }

    pub fn toggle_play_pause(&self, status: Option<&EngineStatus>) -> Vec<Effect> {
        match status {
            Some(s) if s.paused => self.play(status),
            _ => self.pause(status),
        }
    }

    pub fn on_media_event(&mut self, handle: HandleId, event: MediaEvent) -> Vec<Effect> {
        match (self.active, event) {
            (Some(active), MediaEvent::Ended) if active.id == handle => {
                debug!(?handle, "playback ended");
                self.active = None;
                vec![
                    Effect::Render(RenderUpdate::Playing(false)),
                    Effect::Release(handle),
                ]
            }
            _ => Vec::new(),
        }
    }

    /// Remove an uploaded record, revoking its URL.
    ///
    /// Keeps `current_index` and the active handle's record index pointing at
    /// the same records they did before.
    pub fn evict(&mut self, index: usize) -> Vec<Effect> {
        let Some(record) = self.records.get(index) else {
            return Vec::new();
        };
        if record.is_placeholder() {
            return vec![Effect::Render(RenderUpdate::Notice(format!(
                "\"{}\" is a placeholder and stays in the catalog",
                record.name
            )))];
        }

        let mut effects = Vec::new();
        match self.active {
            Some(active) if active.record == index => {
                effects.extend(self.release_active());
                effects.push(Effect::Render(RenderUpdate::Playing(false)));
                effects.push(Effect::Render(RenderUpdate::TrackCleared));
            }
            Some(active) if active.record > index => {
                self.active = Some(ActiveHandle {
                    record: active.record - 1,
                    ..active
                });
            }
            _ => {}
        }

        let Some(removed) = self.records.evict(index) else {
            return effects;
        };
        info!(index, name = %removed.name, "record evicted");

        if self.current > index {
            self.current -= 1;
        }
        self.current = self.current.min(self.records.len().saturating_sub(1));

        effects.push(Effect::Render(RenderUpdate::Records(self.records.rows())));
        effects.push(Effect::Render(RenderUpdate::Notice(format!(
            "Removed \"{}\"",
            removed.name
        ))));
        effects
    }

    /// Session end: release the handle and every object URL.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let effects = self.release_active();
        let revoked = self.records.release_all();
        info!(revoked, "jukebox torn down");
        effects
    }

    fn release_active(&mut self) -> Vec<Effect> {
        match self.active.take() {
            Some(active) => vec![
                Effect::Handle(active.id, EngineCommand::Pause),
                Effect::Release(active.id),
            ],
            None => Vec::new(),
        }
    }
}

fn render_all(updates: Vec<RenderUpdate>) -> Vec<Effect> {
    updates.into_iter().map(Effect::Render).collect()
}
