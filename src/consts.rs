//! Shared numeric constants for the wall planner.

// ── Defaults ────────────────────────────────────────────────────

/// Default wall width in centimeters (3 m).
pub const DEFAULT_WALL_WIDTH_CM: f64 = 300.0;

/// Default wall height in centimeters (2.5 m).
pub const DEFAULT_WALL_HEIGHT_CM: f64 = 250.0;

/// Width of a freshly added object, in centimeters.
pub const DEFAULT_OBJECT_WIDTH_CM: f64 = 60.0;

/// Height of a freshly added object, in centimeters.
pub const DEFAULT_OBJECT_HEIGHT_CM: f64 = 40.0;

/// Name given to a freshly added object.
pub const DEFAULT_OBJECT_NAME: &str = "My Frame";

/// Nails placed on a freshly added object.
pub const DEFAULT_NAIL_COUNT: usize = 2;

// ── Nail distribution ───────────────────────────────────────────

/// Horizontal margin from each side, as a fraction of object width (2+ nails).
pub const NAIL_MARGIN_PERCENT: f64 = 0.15;

/// Vertical inset from the object's top edge, as a fraction of object height.
pub const NAIL_TOP_OFFSET_PERCENT: f64 = 0.1;

// ── Snapping ────────────────────────────────────────────────────

/// Distance in centimeters within which a candidate position is pulled into alignment.
pub const SNAP_THRESHOLD_CM: f64 = 5.0;

// ── Units ───────────────────────────────────────────────────────

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

// ── Canvas ──────────────────────────────────────────────────────

/// Padding in pixels between the viewport edge and the scaled wall.
pub const CANVAS_PADDING_PX: f64 = 20.0;

/// Spacing of background grid lines, in centimeters.
pub const GRID_STEP_CM: f64 = 10.0;

/// Minimum side of a touch target, in pixels.
pub const MIN_TOUCH_TARGET_PX: f64 = 44.0;

// ── Persistence ─────────────────────────────────────────────────

/// Key under which the host stores the serialized snapshot.
pub const STORAGE_KEY: &str = "nail-positioner-storage";
