//! UI rendering helpers for the terminal user interface.
//!
//! This module renders both players from a [`TerminalView`] using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};

use crate::config::{ControlsSettings, UiSettings};
use crate::jukebox::SceneRouter;
use crate::playlist::Track;
use crate::view::TerminalView;

const PLAYLIST_CONTROLS: [(&str, &str); 7] = [
    ("space", "play/pause"),
    ("n/p", "next/prev"),
    ("←/→", "step"),
    (",/.", "seek bar"),
    ("j/k", "move"),
    ("enter", "play selected"),
    ("q", "quit"),
];

const JUKEBOX_CONTROLS: [(&str, &str); 7] = [
    ("tab", "scene"),
    ("o", "records"),
    ("space", "play/pause"),
    ("←/→", "prev/next record"),
    ("x", "remove record"),
    ("esc", "close/landing"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text(controls: &[(&str, &str)], step_seconds: Option<u64>) -> String {
    controls
        .iter()
        .map(|(key, action)| match (*action, step_seconds) {
            ("step", Some(secs)) => format!("[{key}] -/+{secs}s"),
            _ => format!("[{key}] {action}"),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// The label, the spinning record and the play button.
fn now_playing(frame: &mut Frame, area: Rect, view: &TerminalView, ui: &UiSettings) {
    let glyph = if view.playing {
        &ui.pause_glyph
    } else {
        &ui.play_glyph
    };

    let mut lines: Vec<String> = Vec::new();
    match &view.now {
        Some(now) => {
            lines.push(format!("{} {}", view.vinyl_frame(), now.title));
            if let Some(artist) = &now.artist {
                lines.push(format!("  {artist}"));
            }
            if let Some(cover) = &now.cover {
                lines.push(format!("  label: {cover}"));
            }
        }
        None => lines.push(format!("{} nothing on the platter", view.vinyl_frame())),
    }

    let title = format!(" {glyph} ");
    let mut par = Paragraph::new(lines.join("\n"))
        .block(padded(&title))
        .wrap(Wrap { trim: true });
    if view.playing {
        par = par.bold();
    }
    frame.render_widget(par, area);
}

fn header(frame: &mut Frame, area: Rect, ui: &UiSettings, name: &str) {
    let title = format!(" {name} ");
    let header = Paragraph::new(ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.as_str())
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, area);
}

fn footer(frame: &mut Frame, area: Rect, view: &TerminalView, text: String) {
    let text = match view.notice() {
        Some(notice) => format!("{notice}\n{text}"),
        None => text,
    };
    let footer = Paragraph::new(text)
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

fn list_widget<'a>(items: Vec<ListItem<'a>>, title: &'a str) -> List<'a> {
    List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ")
}

/// Render the tracklist player.
pub fn draw_playlist(
    frame: &mut Frame,
    view: &TerminalView,
    tracks: &[Track],
    current: usize,
    ui: &UiSettings,
    controls: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
        ])
        .split(frame.area());

    header(frame, chunks[0], ui, "groove");
    now_playing(frame, chunks[1], view, ui);

    let seek = Gauge::default()
        .block(Block::bordered().title(" seek "))
        .percent(u16::from(view.seek));
    frame.render_widget(seek, chunks[2]);

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let marker = if i == current { "♪ " } else { "  " };
            ListItem::new(format!("{marker}{} — {}", t.title, t.artist))
        })
        .collect();
    let mut state = ListState::default();
    if !tracks.is_empty() {
        state.select(Some(view.cursor.min(tracks.len() - 1)));
    }
    frame.render_stateful_widget(list_widget(items, " tracklist "), chunks[3], &mut state);

    footer(
        frame,
        chunks[4],
        view,
        controls_text(&PLAYLIST_CONTROLS, Some(controls.step_seconds)),
    );
}

/// Render the jukebox: scene tabs, the deck, and the record picker when open.
pub fn draw_jukebox(frame: &mut Frame, view: &TerminalView, router: &SceneRouter, ui: &UiSettings) {
    let scenes = router.scenes();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
        ])
        .split(frame.area());

    header(frame, chunks[0], ui, "groove jukebox");

    let selected = view
        .scene_selector
        .as_deref()
        .and_then(|sel| scenes.iter().position(|s| s.as_str() == sel));
    let tabs = Tabs::new(scenes.iter().map(|s| s.to_string()))
        .block(Block::bordered().title(" scene "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .select(selected);
    frame.render_widget(tabs, chunks[1]);

    if router.is_landing() {
        let welcome = Paragraph::new("Choose a scene with [tab] to start the music.")
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(welcome, chunks[2]);
    } else {
        let title = format!(" {} ", router.current());
        let body = Paragraph::new(format!(
            "{} records in the crate. Press [o] to pick one.",
            view.records.len()
        ))
        .block(padded(&title));
        let deck = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(1)])
            .split(chunks[2]);
        now_playing(frame, deck[0], view, ui);
        frame.render_widget(body, deck[1]);
    }

    if view.picker_open {
        let popup = centered_rect_sized(60, 14, chunks[2]);
        frame.render_widget(Clear, popup);

        let items: Vec<ListItem> = view
            .records
            .iter()
            .map(|r| {
                if r.placeholder {
                    ListItem::new(format!("{} (empty sleeve)", r.name)).italic()
                } else {
                    ListItem::new(r.name.as_str())
                }
            })
            .collect();
        let mut state = ListState::default();
        if !view.records.is_empty() {
            state.select(Some(view.cursor));
        }
        frame.render_stateful_widget(
            list_widget(items, " records (enter plays, esc closes) "),
            popup,
            &mut state,
        );
    }

    footer(frame, chunks[3], view, controls_text(&JUKEBOX_CONTROLS, None));
}
