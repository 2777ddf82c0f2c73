//! Menu and key commands.
//!
//! Every action reachable from a menu, a key or the system control surface is
//! a [`Command`]. [`MENU`] is the single table that binds commands to their
//! menu, label and key; the UI renders from it and the runtime looks keys up
//! in it.

use crossterm::event::KeyCode;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // File menu
    Open,
    Save,
    Close,
    OpenMultipleFiles,
    OpenPlaylist,
    // Preset menu
    SaveAsDefault,
    ChangePreset,
    // Tray menu
    Quit,
    ShowWindow,
    ToggleQuitOnClose,
    // Window
    CloseWindow,
    // Transport
    PreviousSong,
    Rewind,
    Play,
    Stop,
    Seek,
    NextSong,
    Shuffle,
    ToggleAutoplay,
    VolumeUp,
    VolumeDown,
    NextDevice,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Menu {
    File,
    Preset,
    Tray,
    Controls,
}

impl Menu {
    pub const ALL: [Menu; 4] = [Menu::File, Menu::Preset, Menu::Tray, Menu::Controls];

    pub fn title(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Preset => "Preset",
            Menu::Tray => "Tray",
            Menu::Controls => "Controls",
        }
    }
}

#[derive(Debug)]
pub struct MenuEntry {
    pub menu: Menu,
    pub command: Command,
    pub key: KeyCode,
    /// Key as shown in the help text.
    pub key_label: &'static str,
}

pub static MENU: &[MenuEntry] = &[
    entry(Menu::File, Command::Open, KeyCode::Char('o'), "o"),
    entry(Menu::File, Command::Save, KeyCode::Char('w'), "w"),
    entry(Menu::File, Command::Close, KeyCode::Char('C'), "C"),
    entry(Menu::File, Command::OpenMultipleFiles, KeyCode::Char('O'), "O"),
    entry(Menu::File, Command::OpenPlaylist, KeyCode::Char('P'), "P"),
    entry(Menu::Preset, Command::SaveAsDefault, KeyCode::Char('d'), "d"),
    entry(Menu::Preset, Command::ChangePreset, KeyCode::Char('c'), "c"),
    entry(Menu::Tray, Command::Quit, KeyCode::Char('q'), "q"),
    entry(Menu::Tray, Command::ShowWindow, KeyCode::Char('v'), "v"),
    entry(Menu::Tray, Command::ToggleQuitOnClose, KeyCode::Char('Q'), "Q"),
    entry(Menu::Controls, Command::CloseWindow, KeyCode::Esc, "esc"),
    entry(Menu::Controls, Command::PreviousSong, KeyCode::Char('h'), "h"),
    entry(Menu::Controls, Command::Rewind, KeyCode::Char('H'), "H"),
    entry(Menu::Controls, Command::Play, KeyCode::Char(' '), "space"),
    entry(Menu::Controls, Command::Stop, KeyCode::Char('x'), "x"),
    entry(Menu::Controls, Command::Seek, KeyCode::Char('L'), "L"),
    entry(Menu::Controls, Command::NextSong, KeyCode::Char('l'), "l"),
    entry(Menu::Controls, Command::Shuffle, KeyCode::Char('s'), "s"),
    entry(Menu::Controls, Command::ToggleAutoplay, KeyCode::Char('a'), "a"),
    entry(Menu::Controls, Command::VolumeUp, KeyCode::Char('+'), "+"),
    entry(Menu::Controls, Command::VolumeDown, KeyCode::Char('-'), "-"),
    entry(Menu::Controls, Command::NextDevice, KeyCode::Char('D'), "D"),
];

const fn entry(menu: Menu, command: Command, key: KeyCode, key_label: &'static str) -> MenuEntry {
    MenuEntry {
        menu,
        command,
        key,
        key_label,
    }
}

impl Command {
    /// Menu label, as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Command::Open => "Open",
            Command::Save => "Save",
            Command::Close => "Close",
            Command::OpenMultipleFiles => "Open Multiple Files",
            Command::OpenPlaylist => "Open Playlist",
            Command::SaveAsDefault => "Save As Default",
            Command::ChangePreset => "Change Preset",
            Command::Quit => "Quit",
            Command::ShowWindow => "Show Window",
            Command::ToggleQuitOnClose => "Quit on Close",
            Command::CloseWindow => "close window",
            Command::PreviousSong => "previous",
            Command::Rewind => "rewind",
            Command::Play => "play/pause",
            Command::Stop => "stop",
            Command::Seek => "seek",
            Command::NextSong => "next",
            Command::Shuffle => "shuffle",
            Command::ToggleAutoplay => "autoplay",
            Command::VolumeUp => "vol+",
            Command::VolumeDown => "vol-",
            Command::NextDevice => "device",
        }
    }

    /// Transport commands, which need a playback session.
    pub fn needs_home(self) -> bool {
        matches!(
            self,
            Command::PreviousSong
                | Command::Rewind
                | Command::Play
                | Command::Stop
                | Command::Seek
                | Command::NextSong
                | Command::Shuffle
                | Command::ToggleAutoplay
                | Command::VolumeUp
                | Command::VolumeDown
                | Command::NextDevice
        )
    }

    /// Look up the command bound to `key`.
    pub fn for_key(key: KeyCode) -> Option<Command> {
        MENU.iter().find(|e| e.key == key).map(|e| e.command)
    }
}

/// Entries of one menu, in table order.
pub fn menu_entries(menu: Menu) -> impl Iterator<Item = &'static MenuEntry> {
    MENU.iter().filter(move |e| e.menu == menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_and_commands_are_unique() {
        let mut keys = HashSet::new();
        let mut commands = HashSet::new();
        for e in MENU {
            assert!(keys.insert(format!("{:?}", e.key)), "duplicate key {:?}", e.key);
            assert!(commands.insert(e.command), "duplicate command {:?}", e.command);
        }
    }

    #[test]
    fn file_menu_lists_the_five_placeholders_in_order() {
        let labels: Vec<&str> = menu_entries(Menu::File).map(|e| e.command.label()).collect();
        assert_eq!(
            labels,
            vec!["Open", "Save", "Close", "Open Multiple Files", "Open Playlist"]
        );
    }

    #[test]
    fn preset_and_tray_menus_match_the_classic_layout() {
        let preset: Vec<Command> = menu_entries(Menu::Preset).map(|e| e.command).collect();
        assert_eq!(preset, vec![Command::SaveAsDefault, Command::ChangePreset]);

        let tray: Vec<Command> = menu_entries(Menu::Tray).map(|e| e.command).collect();
        assert_eq!(
            tray,
            vec![Command::Quit, Command::ShowWindow, Command::ToggleQuitOnClose]
        );
    }

    #[test]
    fn for_key_finds_bound_commands() {
        assert_eq!(Command::for_key(KeyCode::Char(' ')), Some(Command::Play));
        assert_eq!(Command::for_key(KeyCode::Esc), Some(Command::CloseWindow));
        assert_eq!(Command::for_key(KeyCode::Char('Z')), None);
    }

    #[test]
    fn only_transport_entries_need_a_session() {
        for entry in MENU {
            let transport = entry.menu == Menu::Controls && entry.command != Command::CloseWindow;
            assert_eq!(entry.command.needs_home(), transport, "{:?}", entry.command);
        }
    }
}
