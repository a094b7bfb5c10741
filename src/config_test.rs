#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_constants() {
    let config = EditorConfig::default();
    assert_eq!(config.snap_threshold, 5.0);
    assert_eq!(config.canvas_padding, 20.0);
    assert_eq!(config.grid_step, 10.0);
    assert_eq!(config.default_wall, Wall { width: 300.0, height: 250.0 });
    assert_eq!(config.default_object_size, Size::new(60.0, 40.0));
    assert_eq!(config.default_nail_count, 2);
    assert_eq!(config.nail_radius, 0.0);
    assert_eq!(config.min_touch_target, 44.0);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn empty_lookup_gives_defaults() {
    assert_eq!(EditorConfig::from_lookup(|_| None), EditorConfig::default());
}

#[test]
fn overrides_are_applied() {
    let config = EditorConfig::from_lookup(lookup_from(&[
        ("WALLPLAN_SNAP_THRESHOLD_CM", "2.5"),
        ("WALLPLAN_WALL_WIDTH_CM", "400"),
        ("WALLPLAN_WALL_HEIGHT_CM", " 260 "),
        ("WALLPLAN_OBJECT_WIDTH_CM", "50"),
        ("WALLPLAN_NAIL_COUNT", "3"),
        ("WALLPLAN_NAIL_RADIUS_CM", "0.5"),
        ("WALLPLAN_CANVAS_PADDING_PX", "0"),
        ("WALLPLAN_LOG", "debug"),
    ]));
    assert_eq!(config.snap_threshold, 2.5);
    assert_eq!(config.default_wall, Wall { width: 400.0, height: 260.0 });
    assert_eq!(config.default_object_size, Size::new(50.0, 40.0));
    assert_eq!(config.default_nail_count, 3);
    assert_eq!(config.nail_radius, 0.5);
    assert_eq!(config.canvas_padding, 0.0);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn invalid_values_fall_back() {
    let config = EditorConfig::from_lookup(lookup_from(&[
        ("WALLPLAN_SNAP_THRESHOLD_CM", "lots"),
        ("WALLPLAN_WALL_WIDTH_CM", "-10"),
        ("WALLPLAN_WALL_HEIGHT_CM", "0"),
        ("WALLPLAN_GRID_STEP_CM", "NaN"),
        ("WALLPLAN_NAIL_COUNT", "-1"),
        ("WALLPLAN_NAIL_RADIUS_CM", "-2"),
        ("WALLPLAN_LOG", "loud"),
    ]));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn parse_or_trims_and_falls_back() {
    assert_eq!(parse_or(Some(" 7 ".into()), 1_usize), 7);
    assert_eq!(parse_or(Some("seven".into()), 1_usize), 1);
    assert_eq!(parse_or::<usize>(None, 1), 1);
}
