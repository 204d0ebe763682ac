use std::collections::BTreeMap;
use std::time::Duration;

use gesture_ring::app::{Event, Section};
use gesture_ring::scene::SceneKind;
use gesture_ring::ui::render_to_string;
use gesture_ring::{initialize, Action, Config, GestureKind};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn config(context: &str) -> Config {
    let mut map = BTreeMap::new();
    map.insert("seed".to_string(), "11".to_string());
    map.insert("landing_cycle".to_string(), "false".to_string());
    map.insert("initial_context".to_string(), context.to_string());
    Config::from_map(&map)
}

#[test]
fn presentation_swipe_left_goes_back_a_slide() {
    let mut c = initialize(&config("presentation"));
    let (_, actions) = c.handle_event(&Event::EnterExperience).unwrap();
    assert_eq!(actions, vec![Action::FadeOut(Section::Landing)]);

    let (_, actions) = c.handle_event(&Event::Frame { now: ms(300) }).unwrap();
    assert!(actions.contains(&Action::FadeIn(Section::Main)));
    assert!(actions.contains(&Action::SceneCreated(SceneKind::Live)));

    c.handle_event(&Event::SimulateGesture(GestureKind::SwipeLeft)).unwrap();
    c.handle_event(&Event::Frame { now: ms(900) }).unwrap();

    let state = c.state();
    let card = state.response.unwrap();
    assert_eq!(card.mapping.icon, "📊");
    assert_eq!(card.mapping.label, "Previous Slide");
    assert_eq!(card.mapping.action, "Navigate Back");
    assert_eq!(state.timeline.len(), 1);
    assert_eq!(state.mode_label, "Presentation");
}

#[test]
fn media_rotate_changes_volume() {
    let mut c = initialize(&config("media"));
    c.handle_event(&Event::SimulateGesture(GestureKind::Rotate)).unwrap();

    let card = c.state().response.unwrap();
    assert_eq!(card.mapping.icon, "🔊");
    assert_eq!(card.mapping.label, "Volume Changed");
    assert_eq!(card.mapping.action, "Volume Control");
    assert!(card.active);

    c.handle_event(&Event::Frame { now: ms(2500) }).unwrap();
    assert!(!c.state().response.unwrap().active);
}

#[test]
fn a_second_gesture_postpones_the_return_to_idle() {
    let mut c = initialize(&config("general"));
    c.handle_event(&Event::SimulateGesture(GestureKind::Tap)).unwrap();
    c.handle_event(&Event::Frame { now: ms(2000) }).unwrap();
    c.handle_event(&Event::SimulateGesture(GestureKind::SwipeRight)).unwrap();

    c.handle_event(&Event::Frame { now: ms(3500) }).unwrap();
    assert_eq!(c.state().current_gesture, GestureKind::SwipeRight);

    c.handle_event(&Event::Frame { now: ms(5000) }).unwrap();
    assert_eq!(c.state().current_gesture, GestureKind::Idle);
    assert_eq!(c.state().confidence_percent(), 0);
    assert_eq!(c.state().timeline.len(), 2);
}

#[test]
fn double_enter_fades_once() {
    let mut c = initialize(&config("presentation"));
    c.handle_event(&Event::EnterExperience).unwrap();
    let (changed, actions) = c.handle_event(&Event::EnterExperience).unwrap();
    assert!(!changed);
    assert!(actions.is_empty());

    c.handle_event(&Event::Frame { now: ms(300) }).unwrap();
    assert_eq!(c.state().section, Section::Main);
    assert_eq!(c.factory().created(SceneKind::Live), 1);
}

#[test]
fn repeated_live_view_keeps_one_scene() {
    let mut c = initialize(&config("presentation"));
    c.handle_event(&Event::SwitchView("live".to_string())).unwrap();
    c.handle_event(&Event::SwitchView("live".to_string())).unwrap();
    c.handle_event(&Event::Frame { now: ms(200) }).unwrap();
    c.handle_event(&Event::SwitchView("live".to_string())).unwrap();
    c.handle_event(&Event::Frame { now: ms(400) }).unwrap();

    assert_eq!(c.factory().created(SceneKind::Live), 1);
    assert!(c.live_scene().is_ok());
}

#[test]
fn rendered_frame_reflects_dispatch() {
    let mut c = initialize(&config("accessibility"));
    c.handle_event(&Event::EnterExperience).unwrap();
    c.handle_event(&Event::Frame { now: ms(300) }).unwrap();
    c.handle_event(&Event::SimulateGesture(GestureKind::Tap)).unwrap();
    c.handle_event(&Event::Frame { now: ms(900) }).unwrap();

    let snapshot = c.visible_snapshot();
    assert_eq!(snapshot.as_ref().map(|s| s.kind), Some(SceneKind::Live));

    let vm = c.state().compute_viewmodel(24, 80, snapshot.as_ref());
    let frame = render_to_string(&vm, &c.state().theme, 24, 80);
    assert!(frame.contains("Tap → "));
    assert!(frame.contains("Accessibility"));
    assert!(!frame.contains("No gestures yet"));
}
