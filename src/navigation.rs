//! Screen navigation: preset picker versus home screen, and the stored default.

mod preference;

pub use preference::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

use tracing::info;

use crate::error::{Error, Result};
use crate::presets::{Preset, Rgba};

/// A resolved preset plus the two colors the controls are themed with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PresetSelection {
    pub preset: Preset,
    pub colors: (Rgba, Rgba),
}

impl PresetSelection {
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            colors: preset.boundary_colors(),
        }
    }
}

/// Which screen is shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    PresetPicker,
    Home(PresetSelection),
}

/// Two-screen state machine backed by a persisted default preset.
pub struct Navigator<S> {
    store: S,
    screen: Screen,
}

impl<S: PreferenceStore> Navigator<S> {
    /// Pick the initial screen from the stored preference.
    ///
    /// An empty preference shows the picker; a stored name that does not
    /// resolve fails with `UnknownPreset`.
    pub fn start(store: S) -> Result<Self> {
        let stored = store.load()?;
        let screen = match stored.as_deref().map(str::trim) {
            None | Some("") => Screen::PresetPicker,
            Some(name) => Screen::Home(PresetSelection::new(Preset::resolve_by_name(name)?)),
        };
        info!(?screen, "initial screen");
        Ok(Self { store, screen })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The applied preset, if the home screen is shown.
    pub fn selection(&self) -> Option<PresetSelection> {
        match self.screen {
            Screen::Home(selection) => Some(selection),
            Screen::PresetPicker => None,
        }
    }

    /// `PresetPicker --select--> Home`. Selecting from the home screen swaps the preset.
    pub fn select(&mut self, preset: Preset) -> PresetSelection {
        let selection = PresetSelection::new(preset);
        info!(preset = preset.name(), "preset selected");
        self.screen = Screen::Home(selection);
        selection
    }

    /// `Home --change_preset--> PresetPicker`, clearing the stored default.
    pub fn change_preset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.screen = Screen::PresetPicker;
        info!("stored preset cleared, back to picker");
        Ok(())
    }

    /// Store the applied preset as the default. The screen does not change.
    pub fn save_as_default(&mut self) -> Result<()> {
        let selection = self.selection().ok_or(Error::NoPresetSelected)?;
        self.store.save(selection.preset.name())?;
        info!(preset = selection.preset.name(), "preset saved as default");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests;
