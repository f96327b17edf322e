//! The render contract: everything the players tell the view.

/// Metadata shown for the current track or record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowShowing {
    pub title: String,
    pub artist: Option<String>,
    /// Label artwork; `None` when the source has none (uploaded records).
    pub cover: Option<String>,
}

/// One record row as the picker shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub name: String,
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderUpdate {
    Track(NowShowing),
    /// Empty the now-playing area.
    TrackCleared,
    /// Drives the play/pause glyph and the vinyl spin.
    Playing(bool),
    /// Seek bar position, 0..=100.
    Seek(u8),
    Scene(String),
    /// Blank the scene selector's displayed value.
    SceneSelectorReset,
    Picker(bool),
    Records(Vec<RecordRow>),
    /// A one-line message for the user.
    Notice(String),
}

/// Write-only view surface. The players never read it back.
pub trait RenderSink {
    fn render(&mut self, update: RenderUpdate);
}
