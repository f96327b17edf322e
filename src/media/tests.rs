use std::path::Path;
use std::time::Duration;

use proptest::prelude::*;

use super::testing::FakeEngine;
use super::*;

#[test]
fn wrap_index_handles_negative_and_overflowing_values() {
    assert_eq!(wrap_index(0, 4), 0);
    assert_eq!(wrap_index(3, 4), 3);
    assert_eq!(wrap_index(4, 4), 0);
    assert_eq!(wrap_index(-1, 4), 3);
    assert_eq!(wrap_index(-5, 4), 3);
    assert_eq!(wrap_index(9, 4), 1);
    assert_eq!(wrap_index(-7, 1), 0);
}

proptest! {
    #[test]
    fn wrap_index_matches_double_modulo(n in any::<i32>(), len in 1usize..500) {
        let n = i64::from(n);
        let l = len as i64;
        let got = wrap_index(n, len);
        prop_assert!(got < len);
        prop_assert_eq!(got as i64, ((n % l) + l) % l);
    }
}

#[test]
fn status_percent_floors_and_needs_a_duration() {
    let mut s = EngineStatus {
        paused: false,
        position: Duration::from_millis(33_900),
        duration: Some(Duration::from_secs(100)),
    };
    assert_eq!(s.percent(), Some(33));

    s.duration = None;
    assert_eq!(s.percent(), None);

    s.duration = Some(Duration::ZERO);
    assert_eq!(s.percent(), None);
}

#[test]
fn nudge_saturates_at_zero_and_defers_upper_bound_to_engine() {
    let mut engine = FakeEngine::default();
    engine.load("a.mp3");
    engine.set_position(Duration::from_secs(3));

    engine.nudge(-5);
    assert_eq!(engine.position(), Duration::ZERO);

    engine.nudge(5);
    assert_eq!(engine.position(), Duration::from_secs(5));

    engine.set_position(Duration::from_secs(198));
    engine.nudge(5);
    assert_eq!(engine.position(), Duration::from_secs(200));
}

#[test]
fn engine_command_apply_drives_the_engine() {
    let mut engine = FakeEngine::default();
    EngineCommand::Load("x.mp3".into()).apply(&mut engine);
    EngineCommand::Play.apply(&mut engine);
    assert!(!engine.is_paused());
    EngineCommand::Seek(Duration::from_secs(50)).apply(&mut engine);
    assert_eq!(engine.position(), Duration::from_secs(50));
    EngineCommand::Nudge(-10).apply(&mut engine);
    assert_eq!(engine.position(), Duration::from_secs(40));
    EngineCommand::Pause.apply(&mut engine);
    assert!(engine.is_paused());
    assert_eq!(
        engine.poll_events(),
        vec![
            MediaEvent::Play,
            MediaEvent::TimeUpdate,
            MediaEvent::TimeUpdate,
            MediaEvent::Pause
        ]
    );
}

#[test]
fn object_urls_resolve_until_revoked_and_are_never_reused() {
    let mut urls = ObjectUrlRegistry::new();
    let a = urls.allocate(Path::new("/music/a.mp3"));
    let b = urls.allocate(Path::new("/music/b.mp3"));
    assert_ne!(a, b);
    assert!(a.as_str().starts_with("blob:groove/"));
    assert_eq!(urls.resolve(a.as_str()), Some(Path::new("/music/a.mp3")));
    assert_eq!(urls.live_count(), 2);

    assert!(urls.revoke(&a));
    assert!(!urls.revoke(&a));
    assert_eq!(urls.resolve(a.as_str()), None);

    let c = urls.allocate(Path::new("/music/a.mp3"));
    assert_ne!(a, c);
    assert_eq!(urls.revoke_all(), 2);
    assert_eq!(urls.live_count(), 0);
    assert_eq!(urls.resolve(b.as_str()), None);
}
