use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_pulseplay_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("PULSEPLAY_CONFIG_PATH", "/tmp/pulseplay-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/pulseplay-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("pulseplay")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("pulseplay")
            .join("config.toml")
    );
}

#[test]
fn preference_path_defaults_next_to_config_and_honours_override() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");

    let mut s = Settings::default();
    assert_eq!(
        s.preference_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home/pulseplay/preset_preference.txt")
    );

    s.paths.preference_file = Some(PathBuf::from("/tmp/pref.txt"));
    assert_eq!(s.preference_path().unwrap(), PathBuf::from("/tmp/pref.txt"));
}

#[test]
fn log_path_uses_xdg_state_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");

    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/xdg-state/pulseplay/pulseplay.log")
    );
}

#[test]
fn defaults_match_the_classic_player() {
    let s = Settings::default();
    assert_eq!(s.controls.seek_step_ms, 10_000);
    assert!(s.playback.autoplay);
    assert!(!s.playback.shuffle);
    assert!(s.ui.quit_on_close);
    assert_eq!(s.ui.window_title, "PulsePlay Music Player");
    assert_eq!(s.library.songs_dir, PathBuf::from("songs"));
    assert_eq!(s.library.thumbnails_dir, PathBuf::from("thumbnails"));
    assert_eq!(s.library.artwork_extension, "jpg");
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_nonsense() {
    let mut s = Settings::default();
    s.controls.seek_step_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.volume = 101;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec!["  ".into()];
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
songs_dir = "/srv/music"
thumbnails_dir = "/srv/covers"
extensions = ["mp3"]
artwork_extension = "png"

[playback]
autoplay = false
shuffle = true
volume = 55

[controls]
seek_step_ms = 5000
volume_step = 10

[ui]
window_title = "hello"
quit_on_close = false

[paths]
preference_file = "/tmp/pref.txt"

[log]
filter = "pulseplay=debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PULSEPLAY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("PULSEPLAY__PLAYBACK__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.songs_dir, PathBuf::from("/srv/music"));
    assert_eq!(s.library.thumbnails_dir, PathBuf::from("/srv/covers"));
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert_eq!(s.library.artwork_extension, "png");
    assert!(!s.playback.autoplay);
    assert!(s.playback.shuffle);
    assert_eq!(s.playback.volume, 55);
    assert_eq!(s.controls.seek_step_ms, 5000);
    assert_eq!(s.controls.volume_step, 10);
    assert_eq!(s.ui.window_title, "hello");
    assert!(!s.ui.quit_on_close);
    assert_eq!(s.paths.preference_file, Some(PathBuf::from("/tmp/pref.txt")));
    assert_eq!(s.log.filter, "pulseplay=debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
volume = 80
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PULSEPLAY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("PULSEPLAY__PLAYBACK__VOLUME", "0");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.volume, 0);
}
