use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::media::AudioOutput;

mod event_loop;
mod logging;
mod settings;

/// Which front end to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Playlist,
    /// Directories to scan and ingest at startup.
    Jukebox(Vec<PathBuf>),
}

/// `groove [playlist|jukebox] [DIR...]`
///
/// Anything unrecognised in first position is taken as a directory, so
/// `groove ~/Music` starts the jukebox with that directory loaded.
pub fn parse_args<I>(args: I) -> Mode
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    match args.peek().map(String::as_str) {
        None | Some("playlist") => Mode::Playlist,
        Some("jukebox") => {
            args.next();
            Mode::Jukebox(args.map(PathBuf::from).collect())
        }
        Some(_) => Mode::Jukebox(args.map(PathBuf::from).collect()),
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback_reason) = settings::load_settings();
    let log_path = logging::init(&settings.log)?;
    if let Some(reason) = fallback_reason {
        warn!(%reason, "using default settings");
    }

    let mode = parse_args(std::env::args().skip(1));
    info!(?mode, log = %log_path.display(), "starting groove");

    let output = AudioOutput::open_default()?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = match mode {
        Mode::Playlist => event_loop::run_playlist(&mut terminal, &settings, &output),
        Mode::Jukebox(dirs) => event_loop::run_jukebox(&mut terminal, &settings, &output, &dirs),
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("groove stopped");
    run_result
}
