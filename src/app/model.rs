//! Application model types: `App` and `HomePage`.

use tracing::{debug, info, warn};

use crate::audio::{AudioOutput, MediaPlayer};
use crate::commands::Command;
use crate::config::Settings;
use crate::controls::{Controls, PlaybackState};
use crate::error::{Error, Result};
use crate::library::Catalog;
use crate::mpris::ControlCmd;
use crate::navigation::{Navigator, PreferenceStore, PresetSelection, Screen};
use crate::presets::Preset;

/// The playback screen: a themed preset plus the controller it drives.
pub struct HomePage<P> {
    pub selection: PresetSelection,
    pub controls: Controls<P>,
}

/// The main application context.
///
/// `P` is the media backend handle, cloned into each new [`Controls`]; `S`
/// stores the default preset.
pub struct App<P, S> {
    settings: Settings,
    player: P,
    navigator: Navigator<S>,
    home: Option<HomePage<P>>,

    /// Highlighted entry of the preset picker, an index into `Preset::list_all()`.
    pub picker_cursor: usize,
    pub window_visible: bool,
    pub quit_on_close: bool,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl<P, S> App<P, S>
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    /// Build the context for whatever screen `navigator` starts on.
    ///
    /// Starting on the home screen opens the playback session right away, so
    /// an empty songs directory fails here.
    pub fn new(settings: Settings, player: P, navigator: Navigator<S>) -> Result<Self> {
        let quit_on_close = settings.ui.quit_on_close;
        let mut app = Self {
            settings,
            player,
            navigator,
            home: None,
            picker_cursor: 0,
            window_visible: true,
            quit_on_close,
            status: None,
            should_quit: false,
        };
        if let Screen::Home(selection) = app.navigator.screen() {
            app.open_home(selection.preset)?;
        }
        Ok(app)
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    pub fn navigator(&self) -> &Navigator<S> {
        &self.navigator
    }

    pub fn home(&self) -> Option<&HomePage<P>> {
        self.home.as_ref()
    }

    /// Title of the (terminal) window.
    pub fn window_title(&self) -> &str {
        match &self.home {
            Some(home) => &home.controls.display().window_title,
            None => &self.settings.ui.window_title,
        }
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.home
            .as_ref()
            .map_or(PlaybackState::Stopped, |h| h.controls.playback_state())
    }

    fn open_home(&mut self, preset: Preset) -> Result<()> {
        let catalog = Catalog::load(&self.settings.library)?;
        let controls = Controls::new(catalog, self.player.clone(), &self.settings)?;
        let selection = self.navigator.select(preset);
        self.home = Some(HomePage {
            selection,
            controls,
        });
        Ok(())
    }

    /// Apply the preset under the picker cursor.
    pub fn select_highlighted(&mut self) -> Result<()> {
        let preset = Preset::list_all()
            .nth(self.picker_cursor)
            .ok_or(Error::InvalidPosition {
                position: self.picker_cursor + 1,
                len: Preset::count(),
            })?;
        self.open_home(preset)
    }

    /// Move the picker cursor by `delta` entries, staying inside the registry.
    pub fn move_picker(&mut self, delta: isize) {
        let last = Preset::count().saturating_sub(1);
        self.picker_cursor = self.picker_cursor.saturating_add_signed(delta).min(last);
    }

    /// Seek to `tenths` of the current track (digit keys).
    pub fn scrub_to(&mut self, tenths: u8) {
        if let Some(home) = self.home.as_mut() {
            let duration = home.controls.player().duration();
            home.controls
                .change_song_pos(duration * i64::from(tenths.min(10)) / 10);
        }
    }

    /// Periodic work: media notifications, then the polling timer.
    pub fn tick(&mut self) -> Result<()> {
        if let Some(home) = self.home.as_mut() {
            home.controls.pump_events()?;
            if home.controls.timer_active() {
                home.controls.tick();
            }
        }
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        debug!(?command, "dispatch");
        if command.needs_home() && self.home.is_none() {
            debug!(?command, "no playback session");
            return Ok(());
        }
        match command {
            Command::Open
            | Command::Save
            | Command::Close
            | Command::OpenMultipleFiles
            | Command::OpenPlaylist => Err(Error::NotImplemented(command)),

            Command::SaveAsDefault => {
                self.navigator.save_as_default()?;
                if let Some(selection) = self.navigator.selection() {
                    self.status = Some(format!("{} saved as default", selection.preset.name()));
                }
                Ok(())
            }
            Command::ChangePreset => self.change_preset(),

            Command::Quit => {
                self.should_quit = true;
                Ok(())
            }
            Command::ShowWindow => {
                self.window_visible = true;
                Ok(())
            }
            Command::ToggleQuitOnClose => {
                self.quit_on_close = !self.quit_on_close;
                info!(quit_on_close = self.quit_on_close, "tray option changed");
                Ok(())
            }
            Command::CloseWindow => {
                if self.quit_on_close {
                    self.should_quit = true;
                } else {
                    info!("window hidden, playback continues");
                    self.window_visible = false;
                }
                Ok(())
            }

            transport => self.transport(transport),
        }
    }

    fn change_preset(&mut self) -> Result<()> {
        if let Some(home) = self.home.as_mut() {
            home.controls.pause();
        }
        let previous = self.navigator.selection().map(|s| s.preset);
        self.navigator.change_preset()?;
        self.home = None;
        if let Some(preset) = previous {
            self.picker_cursor = Preset::list_all().position(|p| p == preset).unwrap_or(0);
        }
        Ok(())
    }

    fn transport(&mut self, command: Command) -> Result<()> {
        let volume_step = self.settings.controls.volume_step;
        let Some(home) = self.home.as_mut() else {
            return Ok(());
        };
        let controls = &mut home.controls;
        match command {
            Command::PreviousSong => controls.previous()?,
            Command::Rewind => controls.rewind(),
            Command::Play => controls.play(),
            Command::Stop => controls.stop(),
            Command::Seek => controls.seek(),
            Command::NextSong => controls.next()?,
            Command::Shuffle => controls.shuffle()?,
            Command::ToggleAutoplay => controls.toggle_autoplay(),
            Command::VolumeUp => controls.change_vol(controls.volume().saturating_add(volume_step)),
            Command::VolumeDown => {
                controls.change_vol(controls.volume().saturating_sub(volume_step))
            }
            Command::NextDevice => controls.next_audio_output(),
            other => debug!(command = ?other, "not a transport command"),
        }
        Ok(())
    }

    /// Translate a system-control request into commands.
    pub fn handle_remote(&mut self, cmd: ControlCmd) -> Result<()> {
        let playing = self.playback_state() == PlaybackState::Playing;
        match cmd {
            ControlCmd::Raise => self.dispatch(Command::ShowWindow),
            ControlCmd::Quit => self.dispatch(Command::Quit),
            ControlCmd::PlayPause => self.dispatch(Command::Play),
            ControlCmd::Play if !playing => self.dispatch(Command::Play),
            ControlCmd::Pause if playing => self.dispatch(Command::Play),
            ControlCmd::Play | ControlCmd::Pause => Ok(()),
            ControlCmd::Stop => self.dispatch(Command::Stop),
            ControlCmd::Next => self.dispatch(Command::NextSong),
            ControlCmd::Prev => self.dispatch(Command::PreviousSong),
        }
    }

    /// Show a failed command on the status line.
    pub fn report(&mut self, err: &Error) {
        if err.is_user_facing() {
            info!(error = %err, "command rejected");
        } else {
            warn!(error = %err, "command failed");
        }
        self.status = Some(err.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
