use super::player::clamp_position;
use std::time::Duration;

#[test]
fn clamp_position_bounds_negative_and_overlong_values() {
    let dur = Duration::from_secs(180);
    assert_eq!(clamp_position(-10_000, dur), Duration::ZERO);
    assert_eq!(clamp_position(5_000, dur), Duration::from_millis(5_000));
    assert_eq!(clamp_position(190_000, dur), dur);
}

#[test]
fn clamp_position_without_known_duration_only_clamps_below() {
    assert_eq!(clamp_position(-1, Duration::ZERO), Duration::ZERO);
    assert_eq!(
        clamp_position(999_999, Duration::ZERO),
        Duration::from_millis(999_999)
    );
}
