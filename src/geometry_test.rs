#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn wall() -> Wall {
    Wall { width: 300.0, height: 250.0 }
}

fn object() -> WallObject {
    WallObject {
        id: Uuid::new_v4(),
        name: "Test Object".into(),
        width: 60.0,
        height: 40.0,
        x: 100.0,
        y: 80.0,
        nails: Vec::new(),
    }
}

fn nail() -> Nail {
    Nail { id: Uuid::new_v4(), offset_x: 30.0, offset_y: 10.0 }
}

// --- Rect ---

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center(), Point::new(25.0, 40.0));
    assert_eq!(r.origin(), Point::new(10.0, 20.0));
    assert_eq!(r.size(), Size::new(30.0, 40.0));
}

#[test]
fn rect_contains_includes_edges() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
}

#[test]
fn rect_overlap_is_open_interval() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let touching = Rect::new(20.0, 10.0, 10.0, 10.0);
    let overlapping = Rect::new(20.0, 9.0, 10.0, 10.0);
    assert!(!a.overlaps_vertically(&touching));
    assert!(a.overlaps_vertically(&overlapping));
    assert!(a.overlaps_horizontally(&Rect::new(5.0, 50.0, 10.0, 10.0)));
    assert!(!a.overlaps_horizontally(&Rect::new(10.0, 50.0, 10.0, 10.0)));
}

// --- Nail positions ---

#[test]
fn nail_absolute_position_adds_offsets() {
    let pos = nail_absolute_position(&object(), &nail());
    assert_eq!(pos.from_left, 130.0);
    assert_eq!(pos.from_top, 90.0);
}

#[test]
fn nail_distances_to_all_edges() {
    let d = nail_distances(&object(), &nail(), &wall());
    assert_eq!(d.from_left, 130.0);
    assert_eq!(d.from_right, 170.0);
    assert_eq!(d.from_top, 90.0);
    assert_eq!(d.from_bottom, 160.0);
}

#[test]
fn nail_distances_sum_to_wall_size() {
    let w = wall();
    for (x, y, ox, oy) in [(0.0, 0.0, 0.0, 0.0), (12.5, 33.3, 7.1, 2.2), (240.0, 210.0, 60.0, 40.0)] {
        let obj = WallObject { x, y, ..object() };
        let n = Nail { offset_x: ox, offset_y: oy, ..nail() };
        let d = nail_distances(&obj, &n, &w);
        assert!(approx_eq(d.from_left + d.from_right, w.width));
        assert!(approx_eq(d.from_top + d.from_bottom, w.height));
    }
}

#[test]
fn nail_distances_go_negative_off_wall() {
    let obj = WallObject { x: 290.0, ..object() };
    let d = nail_distances(&obj, &nail(), &wall());
    assert_eq!(d.from_right, -20.0);
}

#[test]
fn object_center_is_half_size() {
    assert_eq!(object_center(&object()), Point::new(130.0, 100.0));
}

// --- Wall bounds ---

#[test]
fn within_wall_inclusive_edges() {
    let w = wall();
    assert!(is_within_wall(0.0, 0.0, 300.0, 250.0, &w));
    assert!(is_within_wall(100.0, 80.0, 60.0, 40.0, &w));
    assert!(!is_within_wall(-0.1, 0.0, 10.0, 10.0, &w));
    assert!(!is_within_wall(241.0, 0.0, 60.0, 40.0, &w));
    assert!(!is_within_wall(0.0, 211.0, 60.0, 40.0, &w));
}

#[test]
fn constrain_leaves_in_bounds_untouched() {
    assert_eq!(constrain_to_wall(100.0, 80.0, 60.0, 40.0, &wall()), Point::new(100.0, 80.0));
}

#[test]
fn constrain_clamps_negative_to_zero() {
    assert_eq!(constrain_to_wall(-20.0, -10.0, 60.0, 40.0, &wall()), Point::new(0.0, 0.0));
}

#[test]
fn constrain_clamps_past_far_edge() {
    assert_eq!(constrain_to_wall(280.0, 230.0, 60.0, 40.0, &wall()), Point::new(240.0, 210.0));
}

#[test]
fn constrain_oversized_object_lands_at_zero() {
    let p = constrain_to_wall(50.0, 50.0, 400.0, 300.0, &wall());
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn constrain_result_always_in_bounds() {
    let w = wall();
    for x in [-1000.0, -1.0, 0.0, 17.0, 239.9, 240.0, 500.0] {
        for y in [-50.0, 0.0, 100.0, 210.0, 999.0] {
            let p = constrain_to_wall(x, y, 60.0, 40.0, &w);
            assert!(p.x >= 0.0 && p.x <= w.width - 60.0);
            assert!(p.y >= 0.0 && p.y <= w.height - 40.0);
            assert!(is_within_wall(p.x, p.y, 60.0, 40.0, &w));
        }
    }
}

#[test]
fn clamp_low_wins_when_bounds_invert() {
    assert_eq!(clamp_low_wins(5.0, 2.0, 3.0), 5.0);
    assert_eq!(clamp_low_wins(0.0, 10.0, 3.0), 3.0);
}
