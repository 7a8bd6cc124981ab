//! End-to-end behaviour of the gallery against the in-memory surface, on
//! virtual time.

use std::time::Duration;

use slidekit_core::headless::FIRST_DOT_ID;
use slidekit_core::{
    DotId, Gallery, GalleryEvent, GallerySettings, HeadlessSurface,
    Lifecycle, Listener, ManualScheduler, NavControl,
};

type TestGallery = Gallery<HeadlessSurface, ManualScheduler>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("slidekit_core=trace")
        .try_init();
}

fn still() -> GallerySettings {
    GallerySettings {
        auto_speed: 0.0,
        ..GallerySettings::default()
    }
}

fn gallery_with(
    slides: usize,
    width: f32,
    settings: GallerySettings,
) -> TestGallery {
    init_tracing();
    let mut gallery = Gallery::new(
        HeadlessSurface::new(slides, width),
        ManualScheduler::new(),
        settings,
    )
    .expect("gallery");
    gallery.initialize().expect("initialize");
    gallery
}

fn gallery(slides: usize) -> TestGallery {
    gallery_with(slides, 300.0, still())
}

fn swipe(gallery: &mut TestGallery, from: f32, to: f32) {
    gallery.handle(GalleryEvent::PointerDown { x: from });
    gallery.handle(GalleryEvent::PointerMove { x: to });
    gallery.handle(GalleryEvent::PointerUp);
}

fn dot(slide: u64) -> DotId {
    DotId(FIRST_DOT_ID + slide)
}

#[test]
fn initialize_presents_first_slide() {
    let g = gallery(3);
    let surface = g.surface();

    assert!(surface.is_mounted());
    assert_eq!(surface.offset(), 0.0);
    assert_eq!(surface.transition(), Duration::ZERO);
    assert!(surface.is_nav_disabled(NavControl::Left));
    assert!(!surface.is_nav_disabled(NavControl::Right));
    assert_eq!(surface.active_dots(), vec![dot(0)]);

    let layout = surface.track_layout().expect("layout pushed");
    assert_eq!(layout.width, 300.0);
    assert_eq!(layout.maximum_x, -620.0);
    assert_eq!(layout.track_width, 930.0);

    assert_eq!(surface.live_subscriptions(), 7);
    assert!(!surface.is_subscribed(Listener::PointerMove));
    assert_eq!(g.lifecycle(), Lifecycle::Live);
}

#[test]
fn commit_lands_on_target_offset() {
    let mut g = gallery(3);
    for index in [2, 1, 0, 2] {
        g.commit_slide(index, 1);
        assert_eq!(g.state().x(), -(index as f32) * 310.0);
        assert_eq!(g.surface().offset(), g.state().x());
        assert_eq!(g.state().current_slide(), index);
    }
    assert!(!g.commit_slide(3, 1));
    assert_eq!(g.state().current_slide(), 2);
}

#[test]
fn click_left_at_first_slide_changes_nothing() {
    let mut g = gallery(3);
    let writes = g.surface().offset_writes();
    let before = g.snapshot();

    g.handle(GalleryEvent::ClickLeft);

    assert_eq!(g.snapshot(), before);
    assert_eq!(g.surface().offset_writes(), writes);
}

#[test]
fn buttons_step_and_stop_at_the_ends() {
    let mut g = gallery(3);
    g.handle(GalleryEvent::ClickRight);
    g.handle(GalleryEvent::ClickRight);
    assert_eq!(g.state().current_slide(), 2);
    assert!(g.surface().is_nav_disabled(NavControl::Right));
    assert!(!g.surface().is_nav_disabled(NavControl::Left));

    g.handle(GalleryEvent::ClickRight);
    assert_eq!(g.state().current_slide(), 2);

    g.handle(GalleryEvent::ClickLeft);
    assert_eq!(g.state().current_slide(), 1);
    assert_eq!(g.state().prev_slide(), 2);
    assert_eq!(g.surface().transition(), Duration::from_millis(500));
    assert_eq!(g.surface().active_dots(), vec![dot(1)]);
}

#[test]
fn drag_follows_pointer_inside_track() {
    let mut g = gallery(4);
    g.handle(GalleryEvent::PointerDown { x: 100.0 });
    assert!(g.surface().is_dragging());
    assert!(g.surface().is_subscribed(Listener::PointerMove));
    assert_eq!(g.surface().transition(), Duration::ZERO);

    g.handle(GalleryEvent::PointerMove { x: 40.0 });
    let session = g.drag().expect("drag in progress");
    assert_eq!(session.drag_shift(), -60.0);
    assert_eq!(g.state().x(), -60.0);
    assert_eq!(g.surface().offset(), -60.0);
}

#[test]
fn drag_past_first_slide_is_rubber_banded() {
    let mut g = gallery(3);
    g.handle(GalleryEvent::PointerDown { x: 0.0 });
    g.handle(GalleryEvent::PointerMove { x: 100.0 });
    assert_eq!(g.surface().offset(), 20.0);

    g.handle(GalleryEvent::PointerUp);
    assert_eq!(g.state().current_slide(), 0);
    assert_eq!(g.surface().offset(), 0.0);
    assert!(!g.surface().is_dragging());
}

#[test]
fn drag_past_last_slide_is_rubber_banded() {
    let mut g = gallery(3);
    g.click_dot(2);
    g.handle(GalleryEvent::PointerDown { x: 200.0 });
    g.handle(GalleryEvent::PointerMove { x: 0.0 });
    // shift -200: held 40px beyond maximum_x.
    assert_eq!(g.surface().offset(), -660.0);
}

#[test]
fn swipe_commits_only_past_sensitivity() {
    let mut g = gallery(3);

    swipe(&mut g, 200.0, 150.0);
    assert_eq!(g.state().current_slide(), 1);
    assert_eq!(g.surface().offset(), -310.0);
    assert_eq!(g.surface().transition(), Duration::from_millis(500));

    swipe(&mut g, 200.0, 170.0);
    assert_eq!(g.state().current_slide(), 1);
    assert_eq!(g.surface().offset(), -310.0);

    swipe(&mut g, 100.0, 160.0);
    assert_eq!(g.state().current_slide(), 0);
}

#[test]
fn swipe_of_exactly_sensitivity_stays_put() {
    let mut g = gallery(3);
    swipe(&mut g, 200.0, 160.0);
    assert_eq!(g.state().current_slide(), 0);
    assert_eq!(g.surface().offset(), 0.0);
}

#[test]
fn hand_built_settings_are_clamped() {
    let settings = GallerySettings {
        margin: -200.0,
        ..still()
    };
    let mut g = gallery_with(3, 100.0, settings);
    assert_eq!(g.settings().margin, 0.0);
    assert_eq!(g.state().maximum_x(), -200.0);

    g.click_right();
    let state = g.state();
    assert_eq!(state.x(), -100.0);
    assert!(state.maximum_x() <= state.x() && state.x() <= 0.0);
}

#[test]
fn release_unsubscribes_pointer_move() {
    let mut g = gallery(3);
    g.handle(GalleryEvent::PointerDown { x: 10.0 });
    g.handle(GalleryEvent::PointerCancel);

    assert!(!g.surface().is_subscribed(Listener::PointerMove));
    assert!(g.drag().is_none());

    let offset = g.surface().offset();
    g.handle(GalleryEvent::PointerMove { x: 500.0 });
    assert_eq!(g.surface().offset(), offset);
}

#[test]
fn repeated_pointer_down_keeps_one_move_listener() {
    let mut g = gallery(3);
    g.handle(GalleryEvent::PointerDown { x: 10.0 });
    g.handle(GalleryEvent::PointerDown { x: 50.0 });
    g.handle(GalleryEvent::PointerMove { x: 0.0 });
    assert_eq!(g.drag().map(|d| d.drag_shift()), Some(-50.0));

    g.handle(GalleryEvent::PointerUp);
    assert_eq!(g.state().current_slide(), 1);
    assert!(!g.surface().is_subscribed(Listener::PointerMove));
    assert_eq!(g.surface().stale_unsubscribes(), 0);
}

#[test]
fn pointer_up_without_drag_is_ignored() {
    let mut g = gallery(3);
    let before = g.snapshot();
    g.handle(GalleryEvent::PointerUp);
    assert_eq!(g.snapshot(), before);
}

#[test]
fn dot_jump_scales_transition_with_distance() {
    let mut g = gallery(4);
    g.handle(GalleryEvent::ClickDot(dot(3)));

    assert_eq!(g.state().current_slide(), 3);
    assert_eq!(g.surface().transition(), Duration::from_millis(1_500));
    assert_eq!(g.surface().active_dots(), vec![dot(3)]);

    g.handle(GalleryEvent::ClickDot(dot(3)));
    assert_eq!(g.state().prev_slide(), 0);

    g.handle(GalleryEvent::ClickDot(DotId(7)));
    assert_eq!(g.state().current_slide(), 3);
}

#[test]
fn snapback_keeps_current_dot_active() {
    let mut g = gallery(3);
    swipe(&mut g, 100.0, 90.0);
    assert_eq!(g.state().prev_slide(), 0);
    assert_eq!(g.surface().active_dots(), vec![dot(0)]);
}

#[test]
fn dots_disabled_builds_no_indicators() {
    let settings = GallerySettings {
        dots: false,
        ..still()
    };
    let mut g = gallery_with(3, 300.0, settings);
    assert!(g.surface().dot_ids().is_empty());
    assert!(!g.surface().is_subscribed(Listener::ClickDots));

    g.handle(GalleryEvent::ClickDot(DotId(FIRST_DOT_ID)));
    assert_eq!(g.state().current_slide(), 0);
    assert_eq!(g.snapshot().active_dot, None);
}

#[test]
fn autoplay_advances_and_wraps_without_animation() {
    let mut g = gallery_with(3, 300.0, GallerySettings::default());

    assert_eq!(g.advance(Duration::from_millis(4_999)), 0);
    assert_eq!(g.advance(Duration::from_millis(1)), 1);
    assert_eq!(g.state().current_slide(), 1);
    assert_eq!(g.surface().transition(), Duration::from_millis(500));

    g.advance(Duration::from_secs(5));
    assert_eq!(g.state().current_slide(), 2);

    g.advance(Duration::from_secs(5));
    assert_eq!(g.state().current_slide(), 0);
    assert_eq!(g.surface().transition(), Duration::ZERO);
    assert_eq!(g.surface().offset(), 0.0);
}

#[test]
fn auto_speed_shortens_the_interval() {
    let settings = GallerySettings {
        auto_speed: 2.0,
        ..GallerySettings::default()
    };
    let mut g = gallery_with(5, 300.0, settings);
    assert_eq!(g.advance(Duration::from_secs(10)), 4);
    assert_eq!(g.state().current_slide(), 4);
}

#[test]
fn autoplay_does_not_fire_during_drag() {
    let mut g = gallery_with(3, 300.0, GallerySettings::default());
    g.advance(Duration::from_secs(4));
    g.handle(GalleryEvent::PointerDown { x: 100.0 });

    assert_eq!(g.advance(Duration::from_secs(20)), 0);
    assert_eq!(g.state().current_slide(), 0);
    assert!(!g.autoplay().is_running());

    g.handle(GalleryEvent::PointerUp);
    assert!(g.autoplay().is_running());

    assert_eq!(g.advance(Duration::from_millis(4_900)), 0);
    assert_eq!(g.advance(Duration::from_millis(100)), 1);
    assert_eq!(g.state().current_slide(), 1);
}

#[test]
fn teardown_mid_drag_releases_everything() {
    let mut g = gallery_with(3, 300.0, GallerySettings::default());
    g.handle(GalleryEvent::Resize);
    g.handle(GalleryEvent::PointerDown { x: 100.0 });
    g.handle(GalleryEvent::PointerMove { x: 20.0 });

    g.teardown();

    let surface = g.surface();
    assert_eq!(surface.live_subscriptions(), 0);
    assert_eq!(surface.stale_unsubscribes(), 0);
    assert!(!surface.is_dragging());
    assert_eq!(surface.offset(), 0.0);
    assert_eq!(g.scheduler().pending(), 0);
    assert!(g.subscriptions().is_empty());
    assert_eq!(g.lifecycle(), Lifecycle::TornDown);

    g.teardown();
    assert_eq!(g.surface().stale_unsubscribes(), 0);
}

#[test]
fn events_after_teardown_are_ignored() {
    let mut g = gallery(3);
    g.teardown();
    let writes = g.surface().offset_writes();

    g.handle(GalleryEvent::ClickRight);
    g.handle(GalleryEvent::PointerDown { x: 0.0 });
    assert!(!g.click_dot(2));
    assert_eq!(g.advance(Duration::from_secs(60)), 0);

    assert_eq!(g.state().current_slide(), 0);
    assert_eq!(g.surface().offset_writes(), writes);
    assert_eq!(g.surface().live_subscriptions(), 0);
}

#[test]
fn resize_burst_relayouts_once() {
    let mut g = gallery(3);
    g.click_right();
    g.surface_mut().set_width(500.0);
    let writes = g.surface().offset_writes();

    for _ in 0..5 {
        g.handle(GalleryEvent::Resize);
        g.advance(Duration::from_millis(20));
    }
    assert_eq!(g.surface().offset_writes(), writes);
    assert_eq!(g.state().width(), 300.0);

    assert_eq!(g.advance(Duration::from_millis(100)), 1);
    assert_eq!(g.surface().offset_writes(), writes + 1);
    assert_eq!(g.state().width(), 500.0);
    assert_eq!(g.state().current_slide(), 1);
    assert_eq!(g.surface().offset(), -510.0);
    assert_eq!(g.surface().transition(), Duration::ZERO);
    assert_eq!(g.state().maximum_x(), -1_020.0);
}

#[test]
fn relayout_during_drag_rebases_the_gesture() {
    let mut g = gallery(3);
    g.click_right();
    g.handle(GalleryEvent::PointerDown { x: 100.0 });
    g.surface_mut().set_width(400.0);
    g.handle(GalleryEvent::Resize);
    g.advance(Duration::from_millis(100));

    g.handle(GalleryEvent::PointerMove { x: 40.0 });
    assert_eq!(g.surface().offset(), -470.0);

    g.handle(GalleryEvent::PointerUp);
    assert_eq!(g.state().current_slide(), 2);
    assert_eq!(g.surface().offset(), -820.0);
}

#[test]
fn single_slide_never_moves() {
    let mut g = gallery_with(1, 300.0, GallerySettings::default());
    assert!(g.surface().is_nav_disabled(NavControl::Left));
    assert!(g.surface().is_nav_disabled(NavControl::Right));
    assert_eq!(g.state().maximum_x(), 0.0);

    swipe(&mut g, 0.0, -400.0);
    swipe(&mut g, 0.0, 400.0);
    assert_eq!(g.state().current_slide(), 0);

    assert_eq!(g.advance(Duration::from_secs(5)), 1);
    assert_eq!(g.state().current_slide(), 0);
    assert_eq!(g.surface().transition(), Duration::ZERO);
    assert_eq!(g.surface().offset(), 0.0);
}

#[test]
fn rendered_offset_tweens_toward_target() {
    let mut g = gallery(3);
    g.click_right();
    assert_eq!(g.rendered_offset(), 0.0);

    g.advance(Duration::from_millis(250));
    let mid = g.rendered_offset();
    assert!(mid < 0.0 && mid > -310.0, "mid-transition offset {mid}");

    g.advance(Duration::from_millis(250));
    assert_eq!(g.rendered_offset(), -310.0);
}

#[test]
fn surface_mirrors_engine_snapshot() {
    let mut g = gallery(4);
    g.click_dot(2);
    swipe(&mut g, 300.0, 200.0);

    let engine = g.snapshot();
    let surface = g.surface().snapshot();
    assert_eq!(engine.current_slide, 3);
    assert_eq!(surface.offset, engine.offset);
    assert_eq!(surface.transition, engine.transition);
    assert_eq!(surface.left_disabled, engine.left_disabled);
    assert_eq!(surface.right_disabled, engine.right_disabled);
    assert_eq!(surface.active_dots, vec![dot(3)]);
    assert_eq!(engine.active_dot, Some(3));
    assert!(!surface.dragging);
}
