//! Wall planning core: place frames on a wall and work out where the nails go.
//!
//! Everything here is pure geometry over centimeters plus one stateful
//! [`store::Store`] that owns the editor record. The host (a browser view, a
//! desktop shell, a test) feeds pointer positions and form values in, draws
//! what comes back, and persists [`persist::Snapshot`]s wherever it likes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Editor state, transitions, subscriptions and the drag session |
//! | [`doc`] | Wall, object and nail types plus [`doc::DocError`] |
//! | [`geometry`] | Points, rectangles, clamping and nail-to-wall distances |
//! | [`nails`] | Automatic nail layout and per-nail constraints |
//! | [`snap`] | Wall and sibling snapping with alignment guides |
//! | [`measure`] | Dimension lines for frames, nails and gaps |
//! | [`transform`] | Centimeter to pixel mapping, grid lines |
//! | [`hit`] | Hit-testing objects and nails |
//! | [`units`] | cm / inch conversion, formatting and parsing |
//! | [`persist`] | JSON snapshot encode / decode |
//! | [`config`] | Editor settings with `WALLPLAN_*` overrides |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`consts`] | Shared defaults (wall size, snap threshold, margins) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod geometry;
pub mod hit;
pub mod logging;
pub mod measure;
pub mod nails;
pub mod persist;
pub mod snap;
pub mod store;
pub mod transform;
pub mod units;
