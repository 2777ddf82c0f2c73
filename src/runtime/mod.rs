use std::env;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::mpris::ControlCmd;
use crate::navigation::Navigator;

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

/// Fade applied to a playing track when the app quits.
const QUIT_FADE_OUT: Duration = Duration::from_millis(300);

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, settings_problem) = settings::load_settings();

    // Optional first argument: the songs directory.
    if let Some(dir) = env::args_os().nth(1) {
        settings.library.songs_dir = PathBuf::from(dir);
    }

    startup::init_tracing(&settings);
    if let Some(problem) = settings_problem {
        warn!("{problem}");
    }
    info!(songs_dir = %settings.library.songs_dir.display(), "starting");

    // Startup failures (unknown stored preset, no songs) end the program
    // before the terminal is taken over.
    let navigator = Navigator::start(startup::open_store(&settings))?;
    let audio_player = AudioPlayer::new(f32::from(settings.playback.volume) / 100.0);
    let mut app = App::new(settings, audio_player.clone(), navigator)?;

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &mut app, &mpris, &control_rx, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("quitting");
    audio_player.quit_softly(QUIT_FADE_OUT);
    run_result
}
