use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::config;
use crate::jukebox::{Jukebox, JukeboxInput, JukeboxSession};
use crate::library::scan;
use crate::media::{AudioOutput, RodioFactory};
use crate::playlist::{Playlist, PlaylistInput, PlaylistSession, Track};
use crate::ui;
use crate::view::TerminalView;

type Term = Terminal<CrosstermBackend<std::io::Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What a key press means for the tracklist player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKey {
    Input(PlaylistInput),
    CursorDown,
    CursorUp,
    PlayCursor,
    /// Move the seek bar by this many percent.
    SeekBar(i16),
    Quit,
}

/// What a key press means for the jukebox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JukeboxKey {
    Input(JukeboxInput),
    CursorDown,
    CursorUp,
    SelectCursor,
    EvictCursor,
    Quit,
}

pub fn playlist_key(key: KeyEvent, controls: &config::ControlsSettings) -> Option<PlaylistKey> {
    let step = i64::try_from(controls.step_seconds).unwrap_or(i64::MAX);
    let bar = i16::from(controls.seek_bar_step);
    let action = match key.code {
        KeyCode::Char('q') => PlaylistKey::Quit,
        KeyCode::Char(' ') => PlaylistKey::Input(PlaylistInput::TogglePlayPause),
        KeyCode::Left => PlaylistKey::Input(PlaylistInput::Step(-step)),
        KeyCode::Right => PlaylistKey::Input(PlaylistInput::Step(step)),
        KeyCode::Char('n') => PlaylistKey::Input(PlaylistInput::Next),
        KeyCode::Char('p') => PlaylistKey::Input(PlaylistInput::Previous),
        KeyCode::Char(',') => PlaylistKey::SeekBar(-bar),
        KeyCode::Char('.') => PlaylistKey::SeekBar(bar),
        KeyCode::Char('j') | KeyCode::Down => PlaylistKey::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => PlaylistKey::CursorUp,
        KeyCode::Enter => PlaylistKey::PlayCursor,
        _ => return None,
    };
    Some(action)
}

/// Keys for the jukebox. The picker captures navigation while it is open.
pub fn jukebox_key(key: KeyEvent, jukebox: &Jukebox) -> Option<JukeboxKey> {
    if let KeyCode::Char('q') = key.code {
        return Some(JukeboxKey::Quit);
    }

    if jukebox.picker_open() {
        let action = match key.code {
            KeyCode::Esc => JukeboxKey::Input(JukeboxInput::ClosePicker),
            KeyCode::Char('j') | KeyCode::Down => JukeboxKey::CursorDown,
            KeyCode::Char('k') | KeyCode::Up => JukeboxKey::CursorUp,
            KeyCode::Enter => JukeboxKey::SelectCursor,
            KeyCode::Char('x') => JukeboxKey::EvictCursor,
            KeyCode::Char(' ') => JukeboxKey::Input(JukeboxInput::TogglePlayPause),
            _ => return None,
        };
        return Some(action);
    }

    let action = match key.code {
        KeyCode::Char(' ') => JukeboxKey::Input(JukeboxInput::TogglePlayPause),
        KeyCode::Tab => JukeboxKey::Input(JukeboxInput::CycleScene { forward: true }),
        KeyCode::BackTab => JukeboxKey::Input(JukeboxInput::CycleScene { forward: false }),
        KeyCode::Char('o') => JukeboxKey::Input(JukeboxInput::OpenPicker),
        KeyCode::Esc => {
            JukeboxKey::Input(JukeboxInput::ShowScene(jukebox.router().landing().to_string()))
        }
        KeyCode::Left if jukebox.arrows_enabled() => JukeboxKey::Input(JukeboxInput::Previous),
        KeyCode::Right if jukebox.arrows_enabled() => JukeboxKey::Input(JukeboxInput::Next),
        _ => return None,
    };
    Some(action)
}

/// Next key press, if any arrived within the poll interval.
fn poll_key() -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

pub fn run_playlist(
    terminal: &mut Term,
    settings: &config::Settings,
    output: &AudioOutput,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracks: Vec<Track> = settings
        .playlist
        .tracks
        .iter()
        .cloned()
        .map(Track::from)
        .collect();
    let playlist = Playlist::new(tracks, settings.playlist.fallback_cover.clone());
    let mut session = PlaylistSession::new(
        playlist,
        output.engine(),
        TerminalView::default(),
        settings.playlist.music_root.clone(),
    );
    session.start();
    info!(tracks = session.playlist().tracks().len(), "playlist ready");

    loop {
        session.pump();
        session.view_mut().tick();

        terminal.draw(|f| {
            ui::draw_playlist(
                f,
                session.view(),
                session.playlist().tracks(),
                session.playlist().current_index(),
                &settings.ui,
                &settings.controls,
            )
        })?;

        let Some(key) = poll_key()? else {
            continue;
        };
        if is_ctrl_c(&key) {
            break;
        }
        let Some(action) = playlist_key(key, &settings.controls) else {
            continue;
        };
        debug!(?action, "key");

        let len = session.playlist().tracks().len();
        match action {
            PlaylistKey::Quit => break,
            PlaylistKey::Input(input) => session.handle(input),
            PlaylistKey::CursorDown => session.view_mut().cursor_down(len),
            PlaylistKey::CursorUp => session.view_mut().cursor_up(len),
            PlaylistKey::PlayCursor => {
                let cursor = session.view().cursor;
                session.handle(PlaylistInput::PlayIndex(cursor));
            }
            PlaylistKey::SeekBar(delta) => {
                let target = (i16::from(session.view().seek) + delta).clamp(0, 100) as u8;
                session.handle(PlaylistInput::SeekTo(target));
            }
        }
    }

    Ok(())
}

pub fn run_jukebox(
    terminal: &mut Term,
    settings: &config::Settings,
    output: &AudioOutput,
    dirs: &[PathBuf],
) -> Result<(), Box<dyn std::error::Error>> {
    let jukebox = Jukebox::from_settings(&settings.jukebox);
    let mut session = JukeboxSession::new(jukebox, output.factory(), TerminalView::default());
    session.start();

    for dir in dirs {
        let files = scan(dir, &settings.library);
        let accepted = session.ingest(files);
        info!(dir = %dir.display(), accepted, "directory ingested");
    }

    let result = jukebox_loop(terminal, settings, &mut session);
    session.finish();
    result
}

fn jukebox_loop(
    terminal: &mut Term,
    settings: &config::Settings,
    session: &mut JukeboxSession<RodioFactory, TerminalView>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        session.pump();
        session.view_mut().tick();

        terminal.draw(|f| ui::draw_jukebox(f, session.view(), session.jukebox().router(), &settings.ui))?;

        let Some(key) = poll_key()? else {
            continue;
        };
        if is_ctrl_c(&key) {
            return Ok(());
        }
        let Some(action) = jukebox_key(key, session.jukebox()) else {
            continue;
        };
        debug!(?action, "key");

        let len = session.jukebox().records().len();
        match action {
            JukeboxKey::Quit => return Ok(()),
            JukeboxKey::Input(input) => session.handle(input),
            JukeboxKey::CursorDown => session.view_mut().cursor_down(len),
            JukeboxKey::CursorUp => session.view_mut().cursor_up(len),
            JukeboxKey::SelectCursor => {
                let cursor = session.view().cursor;
                session.handle(JukeboxInput::Select(cursor));
            }
            JukeboxKey::EvictCursor => {
                let cursor = session.view().cursor;
                session.handle(JukeboxInput::Evict(cursor));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn jukebox() -> Jukebox {
        Jukebox::from_settings(&config::JukeboxSettings::default())
    }

    #[test]
    fn playlist_arrows_step_by_configured_seconds() {
        let controls = config::ControlsSettings {
            step_seconds: 7,
            seek_bar_step: 10,
        };
        assert_eq!(
            playlist_key(press(KeyCode::Left), &controls),
            Some(PlaylistKey::Input(PlaylistInput::Step(-7)))
        );
        assert_eq!(
            playlist_key(press(KeyCode::Right), &controls),
            Some(PlaylistKey::Input(PlaylistInput::Step(7)))
        );
        assert_eq!(
            playlist_key(press(KeyCode::Char('.')), &controls),
            Some(PlaylistKey::SeekBar(10))
        );
        assert_eq!(playlist_key(press(KeyCode::Char('z')), &controls), None);
    }

    #[test]
    fn oversized_step_keeps_arrow_directions() {
        let controls = config::ControlsSettings {
            step_seconds: u64::MAX,
            seek_bar_step: 10,
        };
        assert_eq!(
            playlist_key(press(KeyCode::Left), &controls),
            Some(PlaylistKey::Input(PlaylistInput::Step(-i64::MAX)))
        );
        assert_eq!(
            playlist_key(press(KeyCode::Right), &controls),
            Some(PlaylistKey::Input(PlaylistInput::Step(i64::MAX)))
        );
    }

    #[test]
    fn jukebox_arrows_do_nothing_on_landing() {
        let mut jb = jukebox();
        assert_eq!(jukebox_key(press(KeyCode::Right), &jb), None);
        assert_eq!(jukebox_key(press(KeyCode::Left), &jb), None);

        jb.show_scene("jukebox");
        assert_eq!(
            jukebox_key(press(KeyCode::Right), &jb),
            Some(JukeboxKey::Input(JukeboxInput::Next))
        );
        assert_eq!(
            jukebox_key(press(KeyCode::Left), &jb),
            Some(JukeboxKey::Input(JukeboxInput::Previous))
        );
    }

    #[test]
    fn escape_closes_the_picker_before_leaving_the_scene() {
        let mut jb = jukebox();
        jb.show_scene("car-radio");
        jb.open_picker();
        assert_eq!(
            jukebox_key(press(KeyCode::Esc), &jb),
            Some(JukeboxKey::Input(JukeboxInput::ClosePicker))
        );

        jb.close_picker();
        assert_eq!(
            jukebox_key(press(KeyCode::Esc), &jb),
            Some(JukeboxKey::Input(JukeboxInput::ShowScene("landing".into())))
        );
    }

    #[test]
    fn picker_captures_list_navigation() {
        let mut jb = jukebox();
        jb.open_picker();
        assert_eq!(jukebox_key(press(KeyCode::Char('j')), &jb), Some(JukeboxKey::CursorDown));
        assert_eq!(jukebox_key(press(KeyCode::Enter), &jb), Some(JukeboxKey::SelectCursor));
        assert_eq!(jukebox_key(press(KeyCode::Char('x')), &jb), Some(JukeboxKey::EvictCursor));
        assert_eq!(jukebox_key(press(KeyCode::Tab), &jb), None);
    }

    #[test]
    fn quit_works_everywhere() {
        let mut jb = jukebox();
        assert_eq!(jukebox_key(press(KeyCode::Char('q')), &jb), Some(JukeboxKey::Quit));
        jb.open_picker();
        assert_eq!(jukebox_key(press(KeyCode::Char('q')), &jb), Some(JukeboxKey::Quit));
    }
}
