use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::audio::{AudioOutput, MediaPlayer};
use crate::commands::Command;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::navigation::PreferenceStore;
use crate::runtime::mpris_sync::{MprisSnapshot, snapshot, update_mpris};
use crate::ui;

/// How long one iteration waits for input; also the polling-timer period.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// What MPRIS was last told.
    pub last_mpris: Option<MprisSnapshot>,
    /// Last title written to the terminal.
    pub last_title: String,
}

/// Main terminal event loop: media events, the polling timer, MPRIS and
/// input. Returns `Ok(())` once a quit is requested.
pub fn run<P, S>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App<P, S>,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>>
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    loop {
        if let Err(e) = app.tick() {
            app.report(&e);
        }

        // Keep MPRIS in sync even when changes come from auto-advance or media keys.
        let now = snapshot(app);
        if state.last_mpris.as_ref() != Some(&now) {
            update_mpris(mpris, app);
            state.last_mpris = Some(now);
        }

        if app.window_title() != state.last_title {
            state.last_title = app.window_title().to_string();
            execute!(terminal.backend_mut(), SetTitle(&state.last_title))?;
        }

        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(cmd) = control_rx.try_recv() {
            debug!(?cmd, "MPRIS command");
            if let Err(e) = app.handle_remote(cmd) {
                app.report(&e);
            }
        }
        if app.should_quit {
            return Ok(());
        }

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let columns = ui::picker_columns(terminal.size()?.width.saturating_sub(2));
                handle_key_event(key, app, columns);
                if app.should_quit {
                    return Ok(());
                }
            }
        }
    }
}

fn handle_key_event<P, S>(key: KeyEvent, app: &mut App<P, S>, picker_columns: usize)
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    let command = Command::for_key(key.code);

    // While hidden only the tray menu answers.
    if !app.window_visible {
        if let Some(cmd @ (Command::ShowWindow | Command::Quit | Command::ToggleQuitOnClose)) =
            command
        {
            run_command(app, cmd);
        }
        return;
    }

    app.clear_status();

    if app.home().is_none() {
        let cols = picker_columns as isize;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => return app.move_picker(-1),
            KeyCode::Right | KeyCode::Char('l') => return app.move_picker(1),
            KeyCode::Up | KeyCode::Char('k') => return app.move_picker(-cols),
            KeyCode::Down | KeyCode::Char('j') => return app.move_picker(cols),
            KeyCode::Enter => {
                if let Err(e) = app.select_highlighted() {
                    app.report(&e);
                }
                return;
            }
            _ => {}
        }
    } else if let KeyCode::Char(c @ '0'..='9') = key.code {
        app.scrub_to(c as u8 - b'0');
        return;
    }

    if let Some(cmd) = command {
        run_command(app, cmd);
    }
}

fn run_command<P, S>(app: &mut App<P, S>, command: Command)
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    if let Err(e) = app.dispatch(command) {
        app.report(&e);
    }
}
