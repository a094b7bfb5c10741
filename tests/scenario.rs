//! End-to-end flows through the public API, the way a host drives it.
#![allow(clippy::float_cmp)]

use wallplan::config::EditorConfig;
use wallplan::geometry::{Point, nail_distances};
use wallplan::hit::{HitPart, hit_test, nail_tolerance};
use wallplan::persist::Snapshot;
use wallplan::snap::GuideLabel;
use wallplan::store::Store;
use wallplan::transform::CanvasTransform;
use wallplan::units::{Unit, format_measurement, parse_length};

#[test]
fn default_frame_nail_coordinates() {
    let mut store = Store::new();
    let id = store.add_default_object().unwrap();
    let obj = store.object(&id).unwrap();
    assert_eq!((obj.x, obj.y), (120.0, 105.0));

    let left = &obj.nails[0];
    let right = &obj.nails[1];
    assert_eq!((left.offset_x, left.offset_y), (9.0, 4.0));
    assert_eq!((right.offset_x, right.offset_y), (51.0, 4.0));

    let d = nail_distances(obj, left, &store.wall());
    assert_eq!((d.from_left, d.from_right, d.from_top, d.from_bottom), (129.0, 171.0, 109.0, 141.0));

    assert_eq!(format_measurement(d.from_left, Unit::Cm, 1), "129.0cm");
    assert_eq!(format_measurement(d.from_left, Unit::Inch, 1), "50.8\"");
}

#[test]
fn pointer_drag_snaps_to_wall_edge_and_center() {
    let mut store = Store::new();
    let id = store.add_default_object().unwrap();
    let wall = store.wall();
    let view = CanvasTransform::fit(680.0, 540.0, &wall, store.config().canvas_padding);

    // Press on the middle of the frame.
    let press = view.to_real(Point::new(340.0, 270.0));
    assert_eq!(press, Point::new(150.0, 125.0));
    let tolerance = nail_tolerance(&view, store.config().min_touch_target);
    let hit = hit_test(press, store.objects(), store.selected_object_id(), tolerance).unwrap();
    assert_eq!(hit.object_id, id);
    assert_eq!(hit.part, HitPart::Body);

    let obj = store.object(&id).unwrap();
    let grab = Point::new(press.x - obj.x, press.y - obj.y);
    store.begin_drag(&id).unwrap();

    let pointer = view.to_real(Point::new(104.0, 276.0));
    let frame = store.drag_move(Point::new(pointer.x - grab.x, pointer.y - grab.y)).unwrap();
    assert_eq!(frame.position, Point::new(0.0, 105.0));
    let labels: Vec<GuideLabel> = frame.guides.iter().map(|g| g.label).collect();
    assert_eq!(labels, vec![GuideLabel::Center, GuideLabel::Edge]);

    assert_eq!(store.end_drag().unwrap(), Point::new(0.0, 105.0));
    let obj = store.object(&id).unwrap();
    let d = nail_distances(obj, &obj.nails[0], &wall);
    assert_eq!((d.from_left, d.from_top), (9.0, 109.0));
}

#[test]
fn form_edits_in_inches_land_in_centimeters() {
    let mut store = Store::new();
    store.set_unit(Unit::Inch);
    let width = parse_length("100", store.unit()).unwrap();
    let height = parse_length("not a number", store.unit()).unwrap_or(store.wall().height);

    store.set_wall_dimensions(width, height).unwrap();
    assert_eq!(store.wall().width, 254.0);
    assert_eq!(store.wall().height, 250.0);
}

#[test]
fn snapshot_survives_json_reload() {
    let mut store = Store::new();
    let id = store.add_default_object().unwrap();
    store.set_nail_count(&id, 3).unwrap();
    store.move_object(&id, 10.0, 20.0).unwrap();
    store.set_unit(Unit::Inch);

    let text = store.snapshot().to_json().unwrap();
    let restored = Store::from_snapshot(Snapshot::from_json(&text).unwrap(), EditorConfig::default()).unwrap();

    assert_eq!(restored.snapshot(), store.snapshot());
    assert_eq!(restored.unit(), Unit::Inch);
    assert_eq!(restored.object(&id).unwrap().nails.len(), 3);
}
