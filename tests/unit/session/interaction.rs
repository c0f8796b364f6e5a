use super::*;

fn markers() -> Vec<Point> {
    vec![
        Point::new(100.0, 100.0),
        Point::new(200.0, 100.0),
        Point::new(203.0, 100.0),
    ]
}

#[test]
fn hit_test_prefers_topmost() {
    let m = markers();
    assert_eq!(hit_test(&m, 5.0, Point::new(101.0, 101.0)), Some(0));
    assert_eq!(hit_test(&m, 5.0, Point::new(201.0, 100.0)), Some(2));
    assert_eq!(hit_test(&m, 5.0, Point::new(150.0, 100.0)), None);
}

#[test]
fn enter_then_exit_round_trips() {
    let mut s = MapState::default();
    assert!(s.hover_enter(1, Point::new(200.0, 100.0)));
    assert_eq!(s.hover().map(|h| h.marker), Some(1));
    assert!(!s.hover_exit(0));
    assert!(s.hover_exit(1));
    assert_eq!(s, MapState::IDLE);
}

#[test]
fn click_replaces_previous_info() {
    let mut s = MapState::default();
    assert!(s.click(0));
    assert!(s.click(2));
    assert_eq!(s.info(), Some(2));
    assert!(!s.click(2));
}

#[test]
fn moving_between_markers_swaps_hover() {
    let m = markers();
    let mut s = MapState::default();
    assert!(s.apply(PointerEvent::Move(Point::new(100.0, 100.0)), &m, 5.0));
    assert!(!s.apply(PointerEvent::Move(Point::new(101.0, 100.0)), &m, 5.0));
    assert!(s.apply(PointerEvent::Move(Point::new(206.0, 100.0)), &m, 5.0));
    let hover = s.hover().unwrap();
    assert_eq!(hover.marker, 2);
    assert_eq!(hover.cursor, Point::new(206.0, 100.0));
}

#[test]
fn moving_off_and_leaving_clear_hover() {
    let m = markers();
    let mut s = MapState::default();
    s.apply(PointerEvent::Move(Point::new(100.0, 100.0)), &m, 5.0);
    assert!(s.apply(PointerEvent::Move(Point::new(0.0, 0.0)), &m, 5.0));
    assert!(s.hover().is_none());

    s.apply(PointerEvent::Move(Point::new(100.0, 100.0)), &m, 5.0);
    assert!(s.apply(PointerEvent::Leave, &m, 5.0));
    assert!(s.hover().is_none());
    assert!(!s.apply(PointerEvent::Leave, &m, 5.0));
}

#[test]
fn click_off_marker_keeps_info() {
    let m = markers();
    let mut s = MapState::default();
    s.apply(PointerEvent::Click(Point::new(100.0, 100.0)), &m, 5.0);
    assert!(!s.apply(PointerEvent::Click(Point::new(500.0, 500.0)), &m, 5.0));
    assert_eq!(s.info(), Some(0));
}
