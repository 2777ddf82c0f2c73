use super::*;
use std::fs;

#[test]
fn empty_preference_starts_on_the_picker() {
    let nav = Navigator::start(MemoryPreferenceStore::default()).unwrap();
    assert_eq!(nav.screen(), Screen::PresetPicker);
    assert_eq!(nav.selection(), None);
}

#[test]
fn stored_preference_starts_on_home_with_the_preset_applied() {
    let nav = Navigator::start(MemoryPreferenceStore::with_value("NightFade")).unwrap();
    let preset = Preset::resolve_by_name("NightFade").unwrap();
    assert_eq!(nav.screen(), Screen::Home(PresetSelection::new(preset)));
    assert_eq!(
        nav.selection().unwrap().colors,
        (Rgba::hex(0xa18cd1), Rgba::hex(0xfbc2eb))
    );
}

#[test]
fn unknown_stored_preset_fails_instead_of_falling_back() {
    let result = Navigator::start(MemoryPreferenceStore::with_value("Bogus"));
    assert!(matches!(result, Err(Error::UnknownPreset(name)) if name == "Bogus"));
}

#[test]
fn select_change_and_save_follow_the_state_machine() {
    let mut nav = Navigator::start(MemoryPreferenceStore::default()).unwrap();

    assert!(matches!(nav.save_as_default(), Err(Error::NoPresetSelected)));

    let preset = Preset::resolve_by_name("WarmFlame").unwrap();
    nav.select(preset);
    assert_eq!(nav.selection().map(|s| s.preset), Some(preset));

    nav.save_as_default().unwrap();
    assert_eq!(nav.selection().map(|s| s.preset), Some(preset));
    assert_eq!(nav.store().load().unwrap().as_deref(), Some("WarmFlame"));

    nav.change_preset().unwrap();
    assert_eq!(nav.screen(), Screen::PresetPicker);
    assert_eq!(nav.store().load().unwrap(), None);
}

#[test]
fn file_store_truncates_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("preset_preference.txt");
    let mut store = FilePreferenceStore::new(&path);

    assert_eq!(store.load().unwrap(), None);

    store.save("SunnyMorning").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("SunnyMorning"));

    store.save("NewLife").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "NewLife");

    store.clear().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn file_store_feeds_the_navigator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preset_preference.txt");
    fs::write(&path, "DeepBlue\n").unwrap();

    let nav = Navigator::start(FilePreferenceStore::new(&path)).unwrap();
    assert_eq!(
        nav.selection().map(|s| s.preset.name()),
        Some("DeepBlue")
    );
}
