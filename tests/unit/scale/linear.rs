use super::*;

#[test]
fn map_hits_range_ends_and_midpoint() {
    let s = LinearScale::new([2000.0, 2020.0], [50.0, 910.0]);
    assert_eq!(s.map(2000.0), 50.0);
    assert_eq!(s.map(2010.0), 480.0);
    assert_eq!(s.map(2020.0), 910.0);
}

#[test]
fn flipped_range_maps_top_down() {
    let s = LinearScale::new([14.0, 15.0], [450.0, 50.0]);
    assert!(s.map(14.9) < s.map(14.1));
    assert!((s.map(14.5) - 250.0).abs() < 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let s = LinearScale::new([3.0, 3.0], [0.0, 100.0]);
    assert_eq!(s.map(3.0), 50.0);
    assert_eq!(s.ticks(5), vec![3.0]);
}

#[test]
fn year_ticks_step_by_five() {
    let s = LinearScale::new([2000.0, 2020.0], [50.0, 910.0]);
    assert_eq!(s.ticks(5), vec![2000.0, 2005.0, 2010.0, 2015.0, 2020.0]);
    assert_eq!(s.tick_step(5), 0.0);
    assert_eq!(s.tick_precision(5), 0);
}

#[test]
fn temperature_ticks_use_tenths() {
    let s = LinearScale::new([14.0, 15.0], [450.0, 50.0]);
    let ticks = s.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0], 14.0);
    assert_eq!(ticks[1], 14.1);
    assert_eq!(ticks[10], 15.0);
    assert_eq!(s.tick_precision(10), 1);
    assert_eq!(format_fixed(ticks[3], 1), "14.3");
}

#[test]
fn reversed_domain_yields_descending_ticks() {
    let s = LinearScale::new([10.0, 0.0], [0.0, 100.0]);
    let ticks = s.ticks(2);
    assert_eq!(ticks, vec![10.0, 5.0, 0.0]);
}

#[test]
fn ticks_never_leave_domain() {
    let s = LinearScale::new([0.13, 0.87], [0.0, 1.0]);
    let ticks = s.ticks(4);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|&t| (0.13..=0.87).contains(&t)));
}

#[test]
fn zero_count_has_no_ticks() {
    let s = LinearScale::new([0.0, 1.0], [0.0, 1.0]);
    assert!(s.ticks(0).is_empty());
}

#[test]
fn negative_zero_prints_plain() {
    assert_eq!(format_fixed(-0.0, 1), "0.0");
}

#[test]
fn overflowing_span_yields_no_ticks() {
    let s = LinearScale::new([-1e308, 1e308], [450.0, 50.0]);
    assert!(s.ticks(5).is_empty());
    assert_eq!(s.tick_step(5), 0.0);
    assert_eq!(s.tick_precision(5), 0);
}
