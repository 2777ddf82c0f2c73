use super::*;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

fn make_track() -> Track {
    Track {
        name: "test".to_string(),
        band: "Test Artist".to_string(),
        path: PathBuf::from("/tmp/music/test.mp3"),
        artwork: Some(PathBuf::from("/tmp/thumbnails/test.jpg")),
        duration: Some(Duration::from_micros(1_234_567)),
    }
}

fn iface() -> (PlayerIface, Arc<Mutex<SharedState>>, mpsc::Receiver<ControlCmd>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };
    (iface, state, rx)
}

#[test]
fn set_track_metadata_sets_and_clears_shared_state() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let handle = MprisHandle {
        state: state.clone(),
    };

    handle.set_track_metadata(Some(7), Some(&make_track()));
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("test"));
        assert_eq!(s.artist, vec!["Test Artist".to_string()]);
        assert!(s.url.as_deref().unwrap().ends_with("/tmp/music/test.mp3"));
        assert!(s.art_url.as_deref().unwrap().starts_with("file://"));
        assert_eq!(s.length_micros, Some(1_234_567));
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/mpris/MediaPlayer2/track/7")
        );
    }

    handle.set_track_metadata(None, None);
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert!(s.artist.is_empty());
        assert_eq!(s.url, None);
        assert_eq!(s.art_url, None);
        assert_eq!(s.length_micros, None);
        assert!(s.track_id.is_none());
    }
}

#[test]
fn playback_status_maps_state_to_mpris_strings() {
    let (iface, state, _rx) = iface();
    for (playback, expected) in [
        (PlaybackState::Stopped, "Stopped"),
        (PlaybackState::Playing, "Playing"),
        (PlaybackState::Paused, "Paused"),
    ] {
        state.lock().unwrap().playback = playback;
        assert_eq!(iface.playback_status(), expected);
    }
}

#[test]
fn metadata_includes_expected_keys_when_present() {
    let (iface, state, _rx) = iface();
    let handle = MprisHandle { state };
    handle.set_track_metadata(Some(1), Some(&make_track()));

    let map = iface.metadata();
    for k in [
        "mpris:trackid",
        "xesam:title",
        "xesam:artist",
        "xesam:url",
        "mpris:artUrl",
        "mpris:length",
    ] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
}

#[test]
fn metadata_without_a_track_only_carries_an_empty_title() {
    let (iface, _state, _rx) = iface();
    let map = iface.metadata();
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("xesam:title"));
}

#[test]
fn raise_and_transport_methods_forward_commands() {
    let (iface, _state, rx) = iface();
    iface.play_pause();
    iface.next();
    iface.stop();
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![ControlCmd::PlayPause, ControlCmd::Next, ControlCmd::Stop]
    );

    let (tx, rx) = mpsc::channel();
    let root = RootIface { tx };
    root.raise();
    root.quit();
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![ControlCmd::Raise, ControlCmd::Quit]
    );
}
