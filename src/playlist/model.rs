//! Playlist model types: `Track`, `Playlist` and the effects they emit.

use std::time::Duration;

use tracing::debug;

use crate::config::TrackEntry;
use crate::media::{
    EngineCommand, EngineStatus, MediaEvent, NowShowing, RenderUpdate, wrap_index,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub src: String,
    pub cover: Option<String>,
}

impl From<TrackEntry> for Track {
    fn from(entry: TrackEntry) -> Self {
        Self {
            title: entry.title,
            artist: entry.artist,
            src: entry.src,
            cover: entry.cover,
        }
    }
}

/// Something the playlist wants done to the engine or the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Engine(EngineCommand),
    Render(RenderUpdate),
}

/// The tracklist and its cursor.
pub struct Playlist {
    tracks: Vec<Track>,
    current: usize,
    fallback_cover: String,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>, fallback_cover: impl Into<String>) -> Self {
        Self {
            tracks,
            current: 0,
            fallback_cover: fallback_cover.into(),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Make track `n` (wrapped into range) current and show it. Does not play.
    pub fn load(&mut self, n: i64) -> Vec<Effect> {
        if self.tracks.is_empty() {
            return Vec::new();
        }
        self.current = wrap_index(n, self.tracks.len());
        let track = &self.tracks[self.current];
        debug!(index = self.current, title = %track.title, "track loaded");

        vec![
            Effect::Engine(EngineCommand::Load(track.src.clone())),
            Effect::Render(RenderUpdate::Track(NowShowing {
                title: track.title.clone(),
                artist: Some(track.artist.clone()),
                cover: Some(
                    track
                        .cover
                        .clone()
                        .unwrap_or_else(|| self.fallback_cover.clone()),
                ),
            })),
        ]
    }

    pub fn play_index(&mut self, n: i64) -> Vec<Effect> {
        let mut effects = self.load(n);
        if !effects.is_empty() {
            effects.push(Effect::Engine(EngineCommand::Play));
        }
        effects
    }

    pub fn next(&mut self) -> Vec<Effect> {
        self.play_index(self.current as i64 + 1)
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        self.play_index(self.current as i64 - 1)
    }

    pub fn toggle_play_pause(&self, status: &EngineStatus) -> Vec<Effect> {
        let cmd = if status.paused {
            EngineCommand::Play
        } else {
            EngineCommand::Pause
        };
        vec![Effect::Engine(cmd)]
    }

    /// Jump to `percent` (0..=100, clamped) of the current track.
    ///
    /// Dropped while the duration is unknown.
    pub fn seek_to(&self, percent: u8, status: &EngineStatus) -> Vec<Effect> {
        let Some(total) = status.duration.filter(|d| !d.is_zero()) else {
            debug!(percent, "seek dropped, duration unknown");
            return Vec::new();
        };
        let fraction = f64::from(percent.min(100)) / 100.0;
        let target = Duration::from_secs_f64(total.as_secs_f64() * fraction);
        vec![Effect::Engine(EngineCommand::Seek(target))]
    }

    /// Relative seek. Bounds are the engine's business.
    pub fn step(&self, seconds: i64) -> Vec<Effect> {
        vec![Effect::Engine(EngineCommand::Nudge(seconds))]
    }

    pub fn on_media_event(&self, event: MediaEvent, status: &EngineStatus) -> Vec<Effect> {
        match event {
            MediaEvent::Play => vec![Effect::Render(RenderUpdate::Playing(true))],
            MediaEvent::Pause => vec![Effect::Render(RenderUpdate::Playing(false))],
            MediaEvent::TimeUpdate => status
                .percent()
                .map(|p| vec![Effect::Render(RenderUpdate::Seek(p))])
                .unwrap_or_default(),
            MediaEvent::Ended => Vec::new(),
        }
    }
}
