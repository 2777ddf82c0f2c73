use crate::app::App;
use crate::audio::{AudioOutput, MediaPlayer};
use crate::controls::PlaybackState;
use crate::mpris::MprisHandle;
use crate::navigation::PreferenceStore;

/// What MPRIS last saw: track position, track name and playback state.
pub type MprisSnapshot = (Option<usize>, Option<String>, PlaybackState);

pub fn snapshot<P, S>(app: &App<P, S>) -> MprisSnapshot
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    let home = app.home();
    (
        home.map(|h| h.controls.song_num()),
        home.map(|h| h.controls.current().name.clone()),
        app.playback_state(),
    )
}

pub fn update_mpris<P, S>(mpris: &MprisHandle, app: &App<P, S>)
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    let home = app.home();
    mpris.set_track_metadata(
        home.map(|h| h.controls.song_num()),
        home.map(|h| h.controls.current().as_ref()),
    );
    mpris.set_playback(app.playback_state());
}
