use std::path::PathBuf;

use crate::media::{EngineCommand, PlaybackEngine, RenderSink};

use super::model::{Effect, Playlist};

/// User actions the tracklist player understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaylistInput {
    /// Click on a tracklist entry.
    PlayIndex(usize),
    TogglePlayPause,
    Next,
    Previous,
    /// Seek-bar input, 0..=100.
    SeekTo(u8),
    /// Relative seek in seconds.
    Step(i64),
}

/// Owns the playlist state together with the engine and view it drives.
pub struct PlaylistSession<E, V> {
    playlist: Playlist,
    engine: E,
    view: V,
    music_root: PathBuf,
}

impl<E: PlaybackEngine, V: RenderSink> PlaylistSession<E, V> {
    pub fn new(playlist: Playlist, engine: E, view: V, music_root: impl Into<PathBuf>) -> Self {
        Self {
            playlist,
            engine,
            view,
            music_root: music_root.into(),
        }
    }

    /// Load the first track without playing it.
    pub fn start(&mut self) {
        let effects = self.playlist.load(0);
        self.apply(effects);
    }

    pub fn handle(&mut self, input: PlaylistInput) {
        let status = self.engine.status();
        let effects = match input {
            PlaylistInput::PlayIndex(n) => self.playlist.play_index(n as i64),
            PlaylistInput::TogglePlayPause => self.playlist.toggle_play_pause(&status),
            PlaylistInput::Next => self.playlist.next(),
            PlaylistInput::Previous => self.playlist.previous(),
            PlaylistInput::SeekTo(percent) => self.playlist.seek_to(percent, &status),
            PlaylistInput::Step(seconds) => self.playlist.step(seconds),
        };
        self.apply(effects);
    }

    /// React to whatever the engine reported since the last pump.
    pub fn pump(&mut self) {
        for event in self.engine.poll_events() {
            let status = self.engine.status();
            let effects = self.playlist.on_media_event(event, &status);
            self.apply(effects);
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Engine(EngineCommand::Load(src)) => {
                    let location = self.music_root.join(&src);
                    self.engine.load(&location.to_string_lossy());
                }
                Effect::Engine(cmd) => cmd.apply(&mut self.engine),
                Effect::Render(update) => self.view.render(update),
            }
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[cfg(test)]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
