use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/groove/config.toml` or `~/.config/groove/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `GROOVE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playlist: PlaylistSettings,
    pub jukebox: JukeboxSettings,
    pub library: LibrarySettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

/// One entry of the fixed tracklist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackEntry {
    pub title: String,
    pub artist: String,
    /// Audio source, relative to `playlist.music_root` unless absolute.
    pub src: String,
    /// Label artwork. Falls back to `playlist.fallback_cover`.
    #[serde(default)]
    pub cover: Option<String>,
}

impl TrackEntry {
    fn new(title: &str, artist: &str, src: &str, cover: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            src: src.to_string(),
            cover: cover.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Directory that relative `src` entries are resolved against.
    pub music_root: PathBuf,
    /// Artwork shown when a track has no cover of its own.
    pub fallback_cover: String,
    pub tracks: Vec<TrackEntry>,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            music_root: PathBuf::from("."),
            fallback_cover: "assets/covers/oldies.png".to_string(),
            tracks: vec![
                TrackEntry::new(
                    "Every Night (1980) [Japanese AOR]",
                    "Mariya Takeuchi",
                    "music/citypop/Mariya Takeuchi - Every Night (1980) [Japanese AOR].mp3",
                    Some("assets/covers/miss-m.jpg"),
                ),
                TrackEntry::new(
                    "Let's Groove",
                    "Earth, Wind & Fire",
                    "music/oldies_usa/Let's Groove.mp3",
                    Some("assets/covers/lets-groove.png"),
                ),
                TrackEntry::new(
                    "You Know How to Love Me (Long Version)",
                    "Phyllis Hyman",
                    "music/oldies_usa/You Know How to Love Me (Long Version).mp3",
                    None,
                ),
                TrackEntry::new(
                    "Ooh Baby Baby (12 Inch Version)",
                    "Zapp",
                    "music/oldies_usa/Zapp - Ooh Baby Baby (12 Inch Version).mp3",
                    None,
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JukeboxSettings {
    /// Known scene identifiers, in selector order.
    pub scenes: Vec<String>,
    /// Scene shown at startup; returning here resets the scene selector.
    pub landing_scene: String,
    /// Names of catalog entries shown before any file is added.
    pub placeholders: Vec<String>,
}

impl Default for JukeboxSettings {
    fn default() -> Self {
        Self {
            scenes: vec![
                "landing".to_string(),
                "jukebox".to_string(),
                "car-radio".to_string(),
            ],
            landing_scene: "landing".to_string(),
            placeholders: vec![
                "Side A - Empty Sleeve".to_string(),
                "Side B - Empty Sleeve".to_string(),
                "Dusty 45".to_string(),
            ],
        }
    }
}

/// How directories handed to the jukebox are walked.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to step when pressing the left/right arrows.
    pub step_seconds: u64,
    /// Seek-bar movement (percent) for `,` / `.`.
    pub seek_bar_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            step_seconds: 5,
            seek_bar_step: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Glyph on the play button while paused.
    pub play_glyph: String,
    /// Glyph on the play button while playing.
    pub pause_glyph: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ drop the needle ~ ".to_string(),
            play_glyph: "▶️".to_string(),
            pause_glyph: "⏸".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log file. The terminal belongs to the UI, so logs never go to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
