use std::path::Path;
use std::time::Duration;

use proptest::prelude::*;

use super::*;
use crate::media::testing::{FakeEngine, FakeView};
use crate::media::{
    EngineCommand, EngineStatus, MediaEvent, NowShowing, PlaybackEngine, RenderUpdate,
};

fn t(title: &str) -> Track {
    Track {
        title: title.into(),
        artist: format!("{title} Artist"),
        src: format!("{title}.mp3"),
        cover: None,
    }
}

fn abc() -> Playlist {
    Playlist::new(vec![t("A"), t("B"), t("C")], "fallback.png")
}

fn status(paused: bool, position_secs: u64, duration_secs: Option<u64>) -> EngineStatus {
    EngineStatus {
        paused,
        position: Duration::from_secs(position_secs),
        duration: duration_secs.map(Duration::from_secs),
    }
}

#[test]
fn next_wraps_around_the_end() {
    let mut p = abc();
    assert_eq!(p.current_index(), 0);

    p.next();
    assert_eq!(p.current_track().unwrap().title, "B");
    p.next();
    assert_eq!(p.current_track().unwrap().title, "C");
    p.next();
    assert_eq!(p.current_index(), 0);
    assert_eq!(p.current_track().unwrap().title, "A");
}

#[test]
fn previous_from_first_goes_to_last() {
    let mut p = abc();
    p.previous();
    assert_eq!(p.current_index(), 2);
}

#[test]
fn load_normalizes_out_of_range_and_shows_track_without_playing() {
    let mut p = abc();
    let fx = p.load(-4);
    assert_eq!(p.current_index(), 2);
    assert_eq!(
        fx,
        vec![
            Effect::Engine(EngineCommand::Load("C.mp3".into())),
            Effect::Render(RenderUpdate::Track(NowShowing {
                title: "C".into(),
                artist: Some("C Artist".into()),
                cover: Some("fallback.png".into()),
            })),
        ]
    );
}

#[test]
fn load_prefers_track_cover_over_fallback() {
    let mut tracks = vec![t("A")];
    tracks[0].cover = Some("a.png".into());
    let mut p = Playlist::new(tracks, "fallback.png");

    let fx = p.load(0);
    let cover = fx.iter().find_map(|e| match e {
        Effect::Render(RenderUpdate::Track(now)) => now.cover.clone(),
        _ => None,
    });
    assert_eq!(cover.as_deref(), Some("a.png"));
}

#[test]
fn play_index_loads_then_plays() {
    let mut p = abc();
    let fx = p.play_index(7);
    assert_eq!(p.current_index(), 1);
    assert_eq!(fx.last(), Some(&Effect::Engine(EngineCommand::Play)));
}

#[test]
fn empty_playlist_is_inert() {
    let mut p = Playlist::new(Vec::new(), "fallback.png");
    assert!(p.load(3).is_empty());
    assert!(p.play_index(0).is_empty());
    assert!(p.next().is_empty());
    assert_eq!(p.current_track(), None);
}

#[test]
fn toggle_issues_the_complementary_command() {
    let p = abc();
    assert_eq!(
        p.toggle_play_pause(&status(true, 0, None)),
        vec![Effect::Engine(EngineCommand::Play)]
    );
    assert_eq!(
        p.toggle_play_pause(&status(false, 0, None)),
        vec![Effect::Engine(EngineCommand::Pause)]
    );
}

#[test]
fn seek_to_scales_duration_and_drops_when_unknown() {
    let p = abc();
    assert_eq!(
        p.seek_to(25, &status(false, 0, Some(200))),
        vec![Effect::Engine(EngineCommand::Seek(Duration::from_secs(50)))]
    );
    assert_eq!(
        p.seek_to(250, &status(false, 0, Some(200))),
        vec![Effect::Engine(EngineCommand::Seek(Duration::from_secs(200)))]
    );
    assert!(p.seek_to(50, &status(false, 10, None)).is_empty());
    assert!(p.seek_to(50, &status(false, 10, Some(0))).is_empty());
}

#[test]
fn step_is_delegated_unclamped() {
    let p = abc();
    assert_eq!(p.step(-5), vec![Effect::Engine(EngineCommand::Nudge(-5))]);
}

#[test]
fn media_events_sync_the_view() {
    let p = abc();
    let st = status(false, 61, Some(120));
    assert_eq!(
        p.on_media_event(MediaEvent::Play, &st),
        vec![Effect::Render(RenderUpdate::Playing(true))]
    );
    assert_eq!(
        p.on_media_event(MediaEvent::Pause, &st),
        vec![Effect::Render(RenderUpdate::Playing(false))]
    );
    assert_eq!(
        p.on_media_event(MediaEvent::TimeUpdate, &st),
        vec![Effect::Render(RenderUpdate::Seek(50))]
    );
    assert!(
        p.on_media_event(MediaEvent::TimeUpdate, &status(false, 61, None))
            .is_empty()
    );
    assert!(p.on_media_event(MediaEvent::Ended, &st).is_empty());
}

proptest! {
    #[test]
    fn next_then_previous_returns_to_start(len in 1usize..20, start in 0usize..20) {
        let tracks = (0..len).map(|i| t(&i.to_string())).collect();
        let mut p = Playlist::new(tracks, "f.png");
        p.load(start as i64);
        let origin = p.current_index();

        p.next();
        p.previous();
        prop_assert_eq!(p.current_index(), origin);

        p.previous();
        p.next();
        prop_assert_eq!(p.current_index(), origin);
    }

    #[test]
    fn load_always_lands_in_range(n in any::<i32>(), len in 1usize..20) {
        let tracks = (0..len).map(|i| t(&i.to_string())).collect();
        let mut p = Playlist::new(tracks, "f.png");
        p.load(i64::from(n));
        let l = len as i64;
        prop_assert_eq!(p.current_index() as i64, ((i64::from(n) % l) + l) % l);
    }
}

fn session() -> PlaylistSession<FakeEngine, FakeView> {
    PlaylistSession::new(abc(), FakeEngine::default(), FakeView::default(), "/music")
}

#[test]
fn session_start_loads_first_track_without_autoplay() {
    let mut s = session();
    s.start();
    let expected = Path::new("/music")
        .join("A.mp3")
        .to_string_lossy()
        .into_owned();
    assert_eq!(s.engine().source.as_deref(), Some(expected.as_str()));
    assert!(s.engine().is_paused());
    s.pump();
    assert_eq!(s.view().last_playing(), None);
}

#[test]
fn session_play_and_pause_round_trip_through_media_events() {
    let mut s = session();
    s.start();

    s.handle(PlaylistInput::TogglePlayPause);
    s.pump();
    assert_eq!(s.view().last_playing(), Some(true));

    s.handle(PlaylistInput::TogglePlayPause);
    s.pump();
    assert_eq!(s.view().last_playing(), Some(false));
}

#[test]
fn session_seek_and_time_update_move_the_seek_bar() {
    let mut s = session();
    s.start();
    s.handle(PlaylistInput::PlayIndex(1));
    s.handle(PlaylistInput::SeekTo(40));
    s.pump();

    assert_eq!(s.engine().position(), Duration::from_secs(80));
    assert_eq!(s.view().updates.last(), Some(&RenderUpdate::Seek(40)));

    s.handle(PlaylistInput::Step(-5));
    s.pump();
    assert_eq!(s.view().updates.last(), Some(&RenderUpdate::Seek(37)));
}

#[test]
fn session_seek_without_duration_leaves_position_alone() {
    let mut s = session();
    s.engine_mut().media_length = None;
    s.start();
    s.handle(PlaylistInput::Step(30));
    s.handle(PlaylistInput::SeekTo(90));
    assert_eq!(s.engine().position(), Duration::from_secs(30));
}

#[test]
fn session_next_while_playing_switches_source_and_keeps_playing() {
    let mut s = session();
    s.start();
    s.handle(PlaylistInput::TogglePlayPause);
    s.handle(PlaylistInput::Next);
    s.pump();

    assert_eq!(s.playlist().current_index(), 1);
    assert!(!s.engine().is_paused());
    assert_eq!(s.view().last_playing(), Some(true));
    assert_eq!(s.engine().loads, 2);
}
