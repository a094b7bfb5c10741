#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::doc::Nail;

fn make_object(x: f64, y: f64) -> WallObject {
    WallObject {
        id: Uuid::new_v4(),
        name: "Frame".into(),
        width: 60.0,
        height: 40.0,
        x,
        y,
        nails: vec![Nail::new(9.0, 4.0), Nail::new(51.0, 4.0)],
    }
}

fn snapshot() -> Snapshot {
    Snapshot {
        wall: Wall { width: 300.0, height: 250.0 },
        objects: vec![make_object(120.0, 105.0), make_object(10.0, 10.0)],
        unit: Unit::Inch,
    }
}

#[test]
fn json_round_trip_preserves_everything() {
    let before = snapshot();
    let text = before.to_json().unwrap();
    let back = Snapshot::from_json(&text).unwrap();
    assert_eq!(back, before);
}

#[test]
fn json_shape_matches_stored_record() {
    let nail_id = Uuid::nil();
    let obj_id = Uuid::from_u128(1);
    let snap = Snapshot {
        wall: Wall { width: 300.0, height: 250.0 },
        objects: vec![WallObject {
            id: obj_id,
            name: "Mirror".into(),
            width: 60.0,
            height: 40.0,
            x: 1.0,
            y: 2.0,
            nails: vec![Nail { id: nail_id, offset_x: 30.0, offset_y: 4.0 }],
        }],
        unit: Unit::Cm,
    };
    let value: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "wall": { "width": 300.0, "height": 250.0 },
            "objects": [{
                "id": obj_id.to_string(),
                "name": "Mirror",
                "width": 60.0,
                "height": 40.0,
                "x": 1.0,
                "y": 2.0,
                "nails": [{ "id": nail_id.to_string(), "offsetX": 30.0, "offsetY": 4.0 }],
            }],
            "unit": "cm",
        })
    );
}

#[test]
fn missing_objects_and_unit_default() {
    let snap = Snapshot::from_json(r#"{ "wall": { "width": 200, "height": 100 } }"#).unwrap();
    assert!(snap.objects.is_empty());
    assert_eq!(snap.unit, Unit::Cm);
    assert_eq!(snap.wall, Wall { width: 200.0, height: 100.0 });
}

#[test]
fn malformed_json_is_rejected() {
    let err = Snapshot::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PersistError::Json(_)));
}

#[test]
fn unknown_unit_is_rejected() {
    let err = Snapshot::from_json(r#"{ "wall": { "width": 1, "height": 1 }, "unit": "furlong" }"#).unwrap_err();
    assert!(matches!(err, PersistError::Json(_)));
}

#[test]
fn zero_wall_is_rejected() {
    let err = Snapshot::from_json(r#"{ "wall": { "width": 0, "height": 100 } }"#).unwrap_err();
    assert!(matches!(err, PersistError::InvalidWall { .. }));
}

#[test]
fn negative_object_size_is_rejected() {
    let mut snap = snapshot();
    snap.objects[1].height = -1.0;
    let bad_id = snap.objects[1].id;
    let err = Snapshot::from_json(&snap.to_json().unwrap()).unwrap_err();
    assert!(matches!(err, PersistError::InvalidObject(id) if id == bad_id));
}

#[test]
fn duplicate_object_id_is_rejected() {
    let mut snap = snapshot();
    snap.objects[1].id = snap.objects[0].id;
    assert!(matches!(snap.validate(), Err(PersistError::DuplicateId(_))));
}

#[test]
fn duplicate_nail_id_is_rejected() {
    let mut snap = snapshot();
    snap.objects[0].nails[1].id = snap.objects[0].nails[0].id;
    assert!(matches!(snap.validate(), Err(PersistError::DuplicateId(_))));
}
