//! Terminal-side render sink.
//!
//! `TerminalView` stores whatever the players last told it; `ui::draw_*`
//! turns that into widgets every frame. The list cursor and the vinyl spin
//! frame are purely presentational and live here too.

use std::time::{Duration, Instant};

use crate::media::{NowShowing, RecordRow, RenderSink, RenderUpdate};

const NOTICE_TTL: Duration = Duration::from_secs(4);
const SPIN_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Default)]
pub struct TerminalView {
    pub now: Option<NowShowing>,
    pub playing: bool,
    pub seek: u8,
    pub scene: Option<String>,
    /// What the scene selector displays; `None` after a reset.
    pub scene_selector: Option<String>,
    pub picker_open: bool,
    pub records: Vec<RecordRow>,
    pub cursor: usize,
    notice: Option<(String, Instant)>,
    spin: usize,
}

impl RenderSink for TerminalView {
    fn render(&mut self, update: RenderUpdate) {
        match update {
            RenderUpdate::Track(now) => self.now = Some(now),
            RenderUpdate::TrackCleared => self.now = None,
            RenderUpdate::Playing(playing) => self.playing = playing,
            RenderUpdate::Seek(pct) => self.seek = pct.min(100),
            RenderUpdate::Scene(scene) => {
                self.scene_selector = Some(scene.clone());
                self.scene = Some(scene);
            }
            RenderUpdate::SceneSelectorReset => self.scene_selector = None,
            RenderUpdate::Picker(open) => self.picker_open = open,
            RenderUpdate::Records(rows) => {
                self.records = rows;
                self.cursor = self.cursor.min(self.records.len().saturating_sub(1));
            }
            RenderUpdate::Notice(text) => self.notice = Some((text, Instant::now())),
        }
    }
}

impl TerminalView {
    /// Advance the vinyl animation; frozen while paused.
    pub fn tick(&mut self) {
        if self.playing {
            self.spin = self.spin.wrapping_add(1);
        }
    }

    pub fn vinyl_frame(&self) -> &'static str {
        SPIN_FRAMES[self.spin % SPIN_FRAMES.len()]
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|(_, at)| at.elapsed() < NOTICE_TTL)
            .map(|(text, _)| text.as_str())
    }

    pub fn cursor_down(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }
}
