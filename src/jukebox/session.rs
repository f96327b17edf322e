use tracing::warn;

use crate::library::FileEntry;
use crate::media::{EngineFactory, EngineStatus, PlaybackEngine, RenderSink};

use super::model::{Effect, HandleId, Jukebox};

/// User actions the jukebox understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JukeboxInput {
    /// A value picked from the scene selector.
    ShowScene(String),
    CycleScene { forward: bool },
    OpenPicker,
    ClosePicker,
    Select(usize),
    Next,
    Previous,
    Play,
    Pause,
    TogglePlayPause,
    Evict(usize),
}

/// Owns the jukebox state, the view, and the single live playback handle.
pub struct JukeboxSession<F: EngineFactory, V> {
    jukebox: Jukebox,
    factory: F,
    view: V,
    live: Option<(HandleId, F::Engine)>,
}

impl<F: EngineFactory, V: RenderSink> JukeboxSession<F, V> {
    pub fn new(jukebox: Jukebox, factory: F, view: V) -> Self {
        Self {
            jukebox,
            factory,
            view,
            live: None,
        }
    }

    pub fn start(&mut self) {
        let effects = self.jukebox.initial_render();
        self.apply(effects);
    }

    /// Ingest a batch of selected files and report how many were accepted.
    pub fn ingest(&mut self, files: Vec<FileEntry>) -> usize {
        let ingested = self.jukebox.ingest(files);
        self.apply(ingested.effects);
        ingested.accepted
    }

    pub fn handle(&mut self, input: JukeboxInput) {
        let status = self.active_status();
        let effects = match input {
            JukeboxInput::ShowScene(id) => self.jukebox.show_scene(&id),
            JukeboxInput::CycleScene { forward } => self.jukebox.cycle_scene(forward),
            JukeboxInput::OpenPicker => self.jukebox.open_picker(),
            JukeboxInput::ClosePicker => self.jukebox.close_picker(),
            JukeboxInput::Select(index) => self.jukebox.select(index),
            JukeboxInput::Next => self.jukebox.next(),
            JukeboxInput::Previous => self.jukebox.previous(),
            JukeboxInput::Play => self.jukebox.play(status.as_ref()),
            JukeboxInput::Pause => self.jukebox.pause(status.as_ref()),
            JukeboxInput::TogglePlayPause => self.jukebox.toggle_play_pause(status.as_ref()),
            JukeboxInput::Evict(index) => self.jukebox.evict(index),
        };
        self.apply(effects);
    }

    /// Route notifications from the live handle back into the jukebox.
    pub fn pump(&mut self) {
        let Some((id, engine)) = self.live.as_mut() else {
            return;
        };
        let id = *id;
        let events = engine.poll_events();
        for event in events {
            let effects = self.jukebox.on_media_event(id, event);
            self.apply(effects);
        }
    }

    /// End the session: release the handle and every object URL.
    pub fn finish(&mut self) {
        let effects = self.jukebox.teardown();
        self.apply(effects);
    }

    fn active_status(&self) -> Option<EngineStatus> {
        let active = self.jukebox.active()?;
        self.live
            .as_ref()
            .filter(|(id, _)| *id == active.id)
            .map(|(_, engine)| engine.status())
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Open { handle, uri } => {
                    if let Some((stale, _)) = self.live.take() {
                        warn!(?stale, "handle still live at open, dropping it");
                    }
                    let location = self
                        .jukebox
                        .records()
                        .resolve(&uri)
                        .map(|p| p.to_string_lossy().into_owned())
                        .unwrap_or(uri);
                    let engine = self.factory.open(&location);
                    self.live = Some((handle, engine));
                }
                Effect::Handle(handle, cmd) => match self.live.as_mut() {
                    Some((id, engine)) if *id == handle => cmd.apply(engine),
                    _ => warn!(?handle, ?cmd, "command for a handle that is not live"),
                },
                Effect::Release(handle) => {
                    if self.live.as_ref().is_some_and(|(id, _)| *id == handle) {
                        self.live = None;
                    }
                }
                Effect::Render(update) => self.view.render(update),
            }
        }
    }

    pub fn jukebox(&self) -> &Jukebox {
        &self.jukebox
    }

    #[cfg(test)]
    pub fn live_handle(&self) -> Option<HandleId> {
        self.live.as_ref().map(|(id, _)| *id)
    }

    #[cfg(test)]
    pub fn live_engine(&self) -> Option<&F::Engine> {
        self.live.as_ref().map(|(_, engine)| engine)
    }

    #[cfg(test)]
    pub fn live_engine_mut(&mut self) -> Option<&mut F::Engine> {
        self.live.as_mut().map(|(_, engine)| engine)
    }

    #[cfg(test)]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
