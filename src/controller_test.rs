#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn setup() -> (InteractionController, ParameterCache) {
    (InteractionController::default(), ParameterCache::new())
}

fn writes(actions: &[Action]) -> Vec<(ParamKey, f32)> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::WriteParameter { key, value } => Some((*key, *value)),
            _ => None,
        })
        .collect()
}

fn repaints(actions: &[Action]) -> Vec<Rect> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Repaint(rect) => Some(*rect),
            _ => None,
        })
        .collect()
}

fn damage_of(key: ParamKey) -> Rect {
    region_for(key).unwrap().damage_rect()
}

// =============================================================
// drag_value
// =============================================================

fn session(axis: Axis, value: f32, x: f64, y: f64) -> DragSession {
    DragSession { key: ParamKey::Bitcrush, axis, baseline_value: value, baseline_pointer: Point::new(x, y) }
}

#[test]
fn drag_value_up_raises_normal_dial() {
    let v = drag_value(&session(Axis::Normal, 0.5, 420.0, 350.0), Point::new(420.0, 330.0), 546.0);
    assert!((v - (0.5 + 60.0 / 546.0)).abs() < 1e-5);
}

#[test]
fn drag_value_down_lowers_normal_dial() {
    let v = drag_value(&session(Axis::Normal, 0.5, 420.0, 350.0), Point::new(420.0, 370.0), 546.0);
    assert!(v < 0.5);
}

#[test]
fn drag_value_normal_ignores_horizontal_motion() {
    let v = drag_value(&session(Axis::Normal, 0.4, 420.0, 350.0), Point::new(500.0, 350.0), 546.0);
    assert_eq!(v, 0.4);
}

#[test]
fn drag_value_right_raises_inverted_dial() {
    let v = drag_value(&session(Axis::Inverted, 0.2, 600.0, 400.0), Point::new(620.0, 400.0), 546.0);
    assert!((v - (0.2 + 60.0 / 546.0)).abs() < 1e-5);
}

#[test]
fn drag_value_inverted_uses_height_not_width() {
    let s = session(Axis::Inverted, 0.0, 600.0, 400.0);
    let tall = drag_value(&s, Point::new(610.0, 400.0), 1000.0);
    let short = drag_value(&s, Point::new(610.0, 400.0), 500.0);
    assert!((tall - 0.03).abs() < 1e-6);
    assert!((short - 0.06).abs() < 1e-6);
}

#[test]
fn drag_value_clamps() {
    assert_eq!(drag_value(&session(Axis::Normal, 0.9, 0.0, 500.0), Point::new(0.0, 0.0), 546.0), 1.0);
    assert_eq!(drag_value(&session(Axis::Normal, 0.1, 0.0, 0.0), Point::new(0.0, 500.0), 546.0), 0.0);
}

// =============================================================
// Press: misses
// =============================================================

#[test]
fn press_outside_every_region_is_noop() {
    let (mut ctl, mut cache) = setup();
    let before = cache.clone();
    for (x, y) in [(5.0, 5.0), (300.0, 200.0), (420.0, 429.0), (950.0, 540.0)] {
        let actions = ctl.press(Point::new(x, y), Button::Primary, &mut cache);
        assert!(actions.is_empty(), "press at ({x}, {y}) emitted {actions:?}");
        assert_eq!(*ctl.state(), InputState::Idle);
    }
    assert_eq!(cache, before);
}

#[test]
fn middle_button_on_control_is_noop() {
    let (mut ctl, mut cache) = setup();
    let actions = ctl.press(Point::new(420.0, 350.0), Button::Middle, &mut cache);
    assert!(actions.is_empty());
    assert_eq!(*ctl.state(), InputState::Idle);
}

// =============================================================
// Press: continuous controls
// =============================================================

#[test]
fn primary_press_on_dial_starts_drag_and_repaints_it() {
    let (mut ctl, mut cache) = setup();
    cache.set(ParamKey::Bitcrush, 0.5);
    let actions = ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    assert_eq!(actions, vec![Action::Repaint(damage_of(ParamKey::Bitcrush))]);
    let session = ctl.state().session().unwrap();
    assert_eq!(session.key, ParamKey::Bitcrush);
    assert_eq!(session.axis, Axis::Normal);
    assert_eq!(session.baseline_value, 0.5);
    assert_eq!(session.baseline_pointer, Point::new(420.0, 350.0));
    assert_eq!(ctl.active_key(), Some(ParamKey::Bitcrush));
}

#[test]
fn primary_press_on_filter_records_inverted_axis() {
    let (mut ctl, mut cache) = setup();
    ctl.press(Point::new(650.0, 380.0), Button::Primary, &mut cache);
    assert_eq!(ctl.state().session().unwrap().axis, Axis::Inverted);
    assert_eq!(ctl.active_key(), Some(ParamKey::Highpass));
}

#[test]
fn secondary_press_resets_to_default_once() {
    let (mut ctl, mut cache) = setup();
    cache.set(ParamKey::MasterVolume, 0.1);
    let actions = ctl.press(Point::new(880.0, 400.0), Button::Secondary, &mut cache);
    assert_eq!(writes(&actions), vec![(ParamKey::MasterVolume, 0.7)]);
    assert_eq!(repaints(&actions), vec![damage_of(ParamKey::MasterVolume)]);
    assert_eq!(cache.get(ParamKey::MasterVolume), 0.7);
    assert_eq!(*ctl.state(), InputState::Idle);
}

#[test]
fn secondary_press_on_pitch_resets_to_half() {
    let (mut ctl, mut cache) = setup();
    cache.set(ParamKey::Pitch, 0.9);
    let actions = ctl.press(Point::new(150.0, 400.0), Button::Secondary, &mut cache);
    assert_eq!(writes(&actions), vec![(ParamKey::Pitch, 0.5)]);
    assert!(ctl.state().session().is_none());
}

#[test]
fn new_press_replaces_active_drag() {
    let (mut ctl, mut cache) = setup();
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    let actions = ctl.press(Point::new(300.0, 200.0), Button::Primary, &mut cache);
    assert_eq!(actions, vec![Action::Repaint(damage_of(ParamKey::Bitcrush))]);
    assert_eq!(*ctl.state(), InputState::Idle);
}

#[test]
fn new_press_on_other_dial_repaints_both() {
    let (mut ctl, mut cache) = setup();
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    let actions = ctl.press(Point::new(150.0, 400.0), Button::Primary, &mut cache);
    assert_eq!(
        repaints(&actions),
        vec![damage_of(ParamKey::Bitcrush), damage_of(ParamKey::Pitch)]
    );
    assert_eq!(ctl.active_key(), Some(ParamKey::Pitch));
}

// =============================================================
// Motion
// =============================================================

#[test]
fn bitcrush_drag_scenario() {
    let (mut ctl, mut cache) = setup();
    cache.set(ParamKey::Bitcrush, 0.5);
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);

    let actions = ctl.motion(Point::new(420.0, 330.0), &mut cache);

    let expected = 0.5 + (20.0 / 546.0) * 3.0;
    let w = writes(&actions);
    assert_eq!(w.len(), 1);
    assert_eq!(w[0].0, ParamKey::Bitcrush);
    assert!((w[0].1 - expected).abs() < 1e-5);
    assert!((w[0].1 - 0.610).abs() < 1e-3);
    assert_eq!(repaints(&actions), vec![damage_of(ParamKey::Bitcrush)]);
    assert!((cache.get(ParamKey::Bitcrush) - expected).abs() < 1e-5);
}

#[test]
fn motion_repaints_before_writing() {
    let (mut ctl, mut cache) = setup();
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    let actions = ctl.motion(Point::new(420.0, 340.0), &mut cache);
    assert!(matches!(actions[0], Action::Repaint(_)));
    assert!(matches!(actions[1], Action::WriteParameter { .. }));
}

#[test]
fn motion_resets_baseline_each_event() {
    let (mut ctl, mut cache) = setup();
    cache.set(ParamKey::Distortion, 0.2);
    ctl.press(Point::new(420.0, 450.0), Button::Primary, &mut cache);
    ctl.motion(Point::new(420.0, 440.0), &mut cache);
    let session = *ctl.state().session().unwrap();
    assert_eq!(session.baseline_pointer, Point::new(420.0, 440.0));
    assert_eq!(session.baseline_value, cache.get(ParamKey::Distortion));
}

#[test]
fn drag_accumulates_without_acceleration() {
    let (mut a, mut cache_a) = setup();
    let (mut b, mut cache_b) = setup();
    cache_a.set(ParamKey::Bitcrush, 0.2);
    cache_b.set(ParamKey::Bitcrush, 0.2);
    a.press(Point::new(420.0, 400.0), Button::Primary, &mut cache_a);
    b.press(Point::new(420.0, 400.0), Button::Primary, &mut cache_b);

    for y in [395.0, 390.0, 385.0, 380.0] {
        a.motion(Point::new(420.0, y), &mut cache_a);
    }
    b.motion(Point::new(420.0, 380.0), &mut cache_b);

    assert!((cache_a.get(ParamKey::Bitcrush) - cache_b.get(ParamKey::Bitcrush)).abs() < 1e-5);
}

#[test]
fn drag_clamps_at_top_and_bottom() {
    let (mut ctl, mut cache) = setup();
    ctl.press(Point::new(420.0, 420.0), Button::Primary, &mut cache);
    let up = ctl.motion(Point::new(420.0, -2000.0), &mut cache);
    assert_eq!(writes(&up), vec![(ParamKey::Bitcrush, 1.0)]);
    let down = ctl.motion(Point::new(420.0, 5000.0), &mut cache);
    assert_eq!(writes(&down), vec![(ParamKey::Bitcrush, 0.0)]);
}

#[test]
fn drag_on_filter_follows_horizontal_motion() {
    let (mut ctl, mut cache) = setup();
    cache.set(ParamKey::Lowpass, 0.5);
    ctl.press(Point::new(650.0, 470.0), Button::Primary, &mut cache);
    let actions = ctl.motion(Point::new(670.0, 470.0), &mut cache);
    let w = writes(&actions);
    assert_eq!(w[0].0, ParamKey::Lowpass);
    assert!(w[0].1 > 0.5);
}

#[test]
fn motion_without_drag_emits_no_writes() {
    let (mut ctl, mut cache) = setup();
    let actions = ctl.motion(Point::new(420.0, 350.0), &mut cache);
    assert!(writes(&actions).is_empty());
    assert!(repaints(&actions).is_empty());
}

#[test]
fn drag_outlives_pointer_leaving_the_canvas() {
    let (mut ctl, mut cache) = setup();
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    ctl.motion(Point::new(2000.0, 2000.0), &mut cache);
    assert_eq!(ctl.active_key(), Some(ParamKey::Bitcrush));
}

#[test]
fn zero_height_canvas_suspends_drag_math() {
    let (mut ctl, mut cache) = setup();
    ctl.resize(956.0, 0.0);
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    let actions = ctl.motion(Point::new(420.0, 330.0), &mut cache);
    assert!(writes(&actions).is_empty());
}

#[test]
fn resize_changes_drag_sensitivity() {
    let (mut ctl, mut cache) = setup();
    assert_eq!(ctl.resize(956.0, 1092.0), Action::Repaint(Rect::new(0.0, 0.0, 956.0, 1092.0)));
    cache.set(ParamKey::Bitcrush, 0.5);
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    let w = writes(&ctl.motion(Point::new(420.0, 330.0), &mut cache));
    assert!((w[0].1 - (0.5 + 60.0 / 1092.0)).abs() < 1e-5);
}

// =============================================================
// Release
// =============================================================

#[test]
fn release_without_press_is_noop() {
    let (mut ctl, _) = setup();
    assert!(ctl.release().is_empty());
    assert_eq!(*ctl.state(), InputState::Idle);
}

#[test]
fn release_ends_drag() {
    let (mut ctl, mut cache) = setup();
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    assert_eq!(ctl.release(), vec![Action::Repaint(damage_of(ParamKey::Bitcrush))]);
    assert_eq!(*ctl.state(), InputState::Idle);
    let after = ctl.motion(Point::new(420.0, 300.0), &mut cache);
    assert!(writes(&after).is_empty());
}

// =============================================================
// Rebase
// =============================================================

#[test]
fn rebase_moves_baseline_of_dragged_key_only() {
    let (mut ctl, mut cache) = setup();
    ctl.press(Point::new(420.0, 350.0), Button::Primary, &mut cache);
    ctl.rebase(ParamKey::Pitch, 0.9);
    assert_eq!(ctl.state().session().unwrap().baseline_value, 0.0);
    ctl.rebase(ParamKey::Bitcrush, 0.9);
    assert_eq!(ctl.state().session().unwrap().baseline_value, 0.9);
}

// =============================================================
// Retrigger grid
// =============================================================

#[test]
fn grid_press_writes_multiplexed_cell() {
    let (mut ctl, mut cache) = setup();
    // slice 3, level 2
    let actions = ctl.press(Point::new(226.0 + 27.6 * 2.5, 340.0 + 10.9375 * 3.5), Button::Primary, &mut cache);
    let w = writes(&actions);
    assert_eq!(w.len(), 1);
    assert_eq!(w[0].0, ParamKey::Retrigger);
    assert!((w[0].1 - 3.2).abs() < 1e-5);
    assert_eq!(repaints(&actions), vec![damage_of(ParamKey::Retrigger)]);
    assert_eq!(cache.level(3), 2);
    assert_eq!(*ctl.state(), InputState::Idle);
}

#[test]
fn grid_clear_writes_every_slice_in_order() {
    let (mut ctl, mut cache) = setup();
    cache.set_level(4, 3);
    cache.set_level(9, 1);

    let actions = ctl.press(Point::new(300.0, 400.0), Button::Secondary, &mut cache);

    let w = writes(&actions);
    assert_eq!(w.len(), 16);
    for (slice, (key, value)) in w.iter().enumerate() {
        assert_eq!(*key, ParamKey::Retrigger);
        assert_eq!(*value, slice as f32);
    }
    assert_eq!(repaints(&actions).len(), 16);
    assert!(cache.levels().iter().all(|&l| l == 0));
}

#[test]
fn grid_clear_interleaves_write_and_repaint() {
    let (mut ctl, mut cache) = setup();
    let actions = ctl.press(Point::new(300.0, 400.0), Button::Secondary, &mut cache);
    for pair in actions.chunks(2) {
        assert!(matches!(pair[0], Action::WriteParameter { .. }));
        assert!(matches!(pair[1], Action::Repaint(_)));
    }
}

// =============================================================
// Header link
// =============================================================

#[test]
fn link_press_opens_project_url() {
    let (mut ctl, mut cache) = setup();
    let actions = ctl.press(Point::new(700.0, 40.0), Button::Primary, &mut cache);
    assert_eq!(actions, vec![Action::OpenLink(PROJECT_URL)]);
}

#[test]
fn link_opens_on_secondary_but_not_middle() {
    let (mut ctl, mut cache) = setup();
    let pt = Point::new(700.0, 40.0);
    assert_eq!(ctl.press(pt, Button::Secondary, &mut cache), vec![Action::OpenLink(PROJECT_URL)]);
    assert!(ctl.press(pt, Button::Middle, &mut cache).is_empty());
}

#[test]
fn link_cursor_shows_above_clickable_band() {
    let (mut ctl, mut cache) = setup();
    let pt = Point::new(700.0, 23.0);
    assert_eq!(ctl.motion(pt, &mut cache), vec![Action::SetCursor(Cursor::Link)]);
    assert!(ctl.press(pt, Button::Primary, &mut cache).is_empty());
}

#[test]
fn link_hover_changes_cursor_once() {
    let (mut ctl, mut cache) = setup();
    assert_eq!(ctl.motion(Point::new(700.0, 40.0), &mut cache), vec![Action::SetCursor(Cursor::Link)]);
    assert!(ctl.motion(Point::new(710.0, 45.0), &mut cache).is_empty());
    assert_eq!(ctl.motion(Point::new(300.0, 300.0), &mut cache), vec![Action::SetCursor(Cursor::Default)]);
}
