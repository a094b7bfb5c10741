//! Editor state: the single authoritative record and its transitions.
//!
//! `Store` owns the wall, the ordered object list (last is top-most), the
//! selection, the display unit and an optional drag session. Every mutation
//! goes through a method here, is applied whole before returning, and is then
//! announced to subscribers as a [`Change`].
//!
//! Positions are re-clamped into the wall whenever a transition could break
//! the containment invariant: moving, resizing an object and resizing the
//! wall. Drag moves are the exception. While a drag is active the object keeps
//! its committed position and the host draws it at [`DragFrame::position`];
//! only [`Store::end_drag`] writes back.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::consts::DEFAULT_OBJECT_NAME;
use crate::doc::{
    DocError, Nail, NailId, NailPatch, ObjectId, ObjectPatch, Wall, WallObject, is_positive_length,
};
use crate::geometry::{Point, Rect, Size, constrain_to_wall};
use crate::measure::{DragIndicators, drag_indicators};
use crate::nails::{NailOffset, constrain_nail_position, distribute_nails};
use crate::persist::{PersistError, Snapshot};
use crate::snap::{SnapGuide, snap_within};
use crate::units::Unit;

/// Notification sent to subscribers after a transition is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    WallResized(Wall),
    ObjectAdded(ObjectId),
    /// Name, size or position changed.
    ObjectUpdated(ObjectId),
    ObjectRemoved(ObjectId),
    /// A nail was added, moved or removed, or the set was redistributed.
    NailsChanged(ObjectId),
    SelectionChanged { object: Option<ObjectId>, nail: Option<NailId> },
    UnitChanged(Unit),
    /// Whole state replaced, by `reset` or a snapshot load.
    Reset,
}

/// Handle returned by [`Store::subscribe`].
pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(&Change)>;

/// One snapped drag step for the host to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DragFrame {
    /// Snapped top-left corner. Not yet clamped to the wall.
    pub position: Point,
    pub guides: Vec<SnapGuide>,
    pub indicators: DragIndicators,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    object_id: ObjectId,
    origin: Point,
    last: Point,
}

pub struct Store {
    config: EditorConfig,
    wall: Wall,
    objects: Vec<WallObject>,
    selected_object: Option<ObjectId>,
    selected_nail: Option<NailId>,
    unit: Unit,
    drag: Option<DragSession>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl Default for Store {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store on `config.default_wall`.
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            wall: config.default_wall,
            config,
            objects: Vec::new(),
            selected_object: None,
            selected_nail: None,
            unit: Unit::default(),
            drag: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Build a store from a persisted snapshot.
    ///
    /// # Errors
    ///
    /// See [`Store::load_snapshot`].
    pub fn from_snapshot(snapshot: Snapshot, config: EditorConfig) -> Result<Self, PersistError> {
        let mut store = Self::with_config(config);
        store.load_snapshot(snapshot)?;
        Ok(store)
    }

    /// Replace the whole state with a persisted snapshot. Subscribers stay.
    ///
    /// Objects are re-clamped into the wall and nails into their objects, so
    /// a hand-edited record still satisfies the containment invariants.
    /// Selection and any drag are cleared.
    ///
    /// # Errors
    ///
    /// Returns whatever [`Snapshot::validate`] rejects; the state is left
    /// unchanged.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) -> Result<(), PersistError> {
        snapshot.validate().inspect_err(|e| warn!(error = %e, "rejected snapshot"))?;
        self.wall = snapshot.wall;
        self.unit = snapshot.unit;
        self.objects = snapshot.objects;
        for obj in &mut self.objects {
            contain(obj, &self.wall, self.config.nail_radius);
        }
        self.selected_object = None;
        self.selected_nail = None;
        self.drag = None;

        info!(objects = self.objects.len(), "snapshot loaded");
        self.notify(&Change::Reset);
        Ok(())
    }

    // --- Subscriptions ---

    /// Register a listener called after every applied transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: &Change) {
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }

    fn notify_selection(&mut self) {
        let change = Change::SelectionChanged { object: self.selected_object, nail: self.selected_nail };
        self.notify(&change);
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn wall(&self) -> Wall {
        self.wall
    }

    /// All objects in draw order.
    #[must_use]
    pub fn objects(&self) -> &[WallObject] {
        &self.objects
    }

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&WallObject> {
        self.objects.iter().find(|o| o.id == *id)
    }

    #[must_use]
    pub fn selected_object(&self) -> Option<&WallObject> {
        self.selected_object.and_then(|id| self.object(&id))
    }

    #[must_use]
    pub fn selected_object_id(&self) -> Option<ObjectId> {
        self.selected_object
    }

    #[must_use]
    pub fn selected_nail(&self) -> Option<NailId> {
        self.selected_nail
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Every object except `id`.
    pub fn siblings_of(&self, id: ObjectId) -> impl Iterator<Item = &WallObject> {
        self.objects.iter().filter(move |o| o.id != id)
    }

    /// The persistable part of the state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { wall: self.wall, objects: self.objects.clone(), unit: self.unit }
    }

    fn object_mut(&mut self, id: &ObjectId) -> Result<&mut WallObject, DocError> {
        self.objects.iter_mut().find(|o| o.id == *id).ok_or(DocError::ObjectNotFound(*id))
    }

    // --- Wall ---

    /// Resize the wall and pull every object back inside it.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::InvalidWall`] for non-positive or non-finite sides;
    /// the state is left unchanged.
    pub fn set_wall_dimensions(&mut self, width: f64, height: f64) -> Result<(), DocError> {
        let wall = Wall::new(width, height).inspect_err(|e| warn!(error = %e, "rejected wall resize"))?;
        self.wall = wall;
        for obj in &mut self.objects {
            contain(obj, &wall, self.config.nail_radius);
        }
        info!(width, height, "wall resized");
        self.notify(&Change::WallResized(wall));
        Ok(())
    }

    // --- Objects ---

    /// Add an object centered on the wall with evenly spread nails and select it.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::InvalidSize`] for non-positive or non-finite sides.
    pub fn add_object(&mut self, name: impl Into<String>, size: Size) -> Result<ObjectId, DocError> {
        if !(is_positive_length(size.width) && is_positive_length(size.height)) {
            return Err(DocError::InvalidSize { width: size.width, height: size.height });
        }

        let x = (self.wall.width - size.width) / 2.0;
        let y = (self.wall.height - size.height) / 2.0;
        let origin = constrain_to_wall(x, y, size.width, size.height, &self.wall);
        let obj = WallObject {
            id: Uuid::new_v4(),
            name: name.into(),
            width: size.width,
            height: size.height,
            x: origin.x,
            y: origin.y,
            nails: distribute_nails(size.width, size.height, self.config.default_nail_count),
        };
        let id = obj.id;
        info!(object_id = %id, name = %obj.name, x = origin.x, y = origin.y, "object added");
        self.objects.push(obj);
        self.selected_object = Some(id);
        self.selected_nail = None;

        self.notify(&Change::ObjectAdded(id));
        self.notify_selection();
        Ok(id)
    }

    /// Add a "My Frame" object of the configured default size.
    ///
    /// # Errors
    ///
    /// Same as [`Store::add_object`].
    pub fn add_default_object(&mut self) -> Result<ObjectId, DocError> {
        self.add_object(DEFAULT_OBJECT_NAME, self.config.default_object_size)
    }

    /// Apply a sparse update, then re-clamp the object and its nails.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`] or [`DocError::InvalidSize`]. On
    /// error nothing is changed.
    pub fn update_object(&mut self, id: &ObjectId, patch: ObjectPatch) -> Result<(), DocError> {
        let wall = self.wall;
        let radius = self.config.nail_radius;
        let obj = self.object_mut(id)?;

        let width = patch.width.unwrap_or(obj.width);
        let height = patch.height.unwrap_or(obj.height);
        if !(is_positive_length(width) && is_positive_length(height)) {
            warn!(object_id = %id, width, height, "rejected object resize");
            return Err(DocError::InvalidSize { width, height });
        }

        if let Some(name) = patch.name {
            obj.name = name;
        }
        obj.width = width;
        obj.height = height;
        obj.x = patch.x.unwrap_or(obj.x);
        obj.y = patch.y.unwrap_or(obj.y);
        contain(obj, &wall, radius);

        debug!(object_id = %id, x = obj.x, y = obj.y, width, height, "object updated");
        self.notify(&Change::ObjectUpdated(*id));
        Ok(())
    }

    /// Move an object, clamped to the wall. Returns the committed position.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`].
    pub fn move_object(&mut self, id: &ObjectId, x: f64, y: f64) -> Result<Point, DocError> {
        let wall = self.wall;
        let obj = self.object_mut(id)?;
        let pos = constrain_to_wall(x, y, obj.width, obj.height, &wall);
        obj.x = pos.x;
        obj.y = pos.y;

        debug!(object_id = %id, x = pos.x, y = pos.y, "object moved");
        self.notify(&Change::ObjectUpdated(*id));
        Ok(pos)
    }

    /// Remove an object and its nails. Clears the nail selection.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`].
    pub fn remove_object(&mut self, id: &ObjectId) -> Result<WallObject, DocError> {
        let idx = self.objects.iter().position(|o| o.id == *id).ok_or(DocError::ObjectNotFound(*id))?;
        let removed = self.objects.remove(idx);

        if self.selected_object == Some(*id) {
            self.selected_object = None;
        }
        self.selected_nail = None;
        if self.drag.is_some_and(|d| d.object_id == *id) {
            self.drag = None;
        }

        info!(object_id = %id, "object removed");
        self.notify(&Change::ObjectRemoved(*id));
        self.notify_selection();
        Ok(removed)
    }

    /// Select an object, or clear the selection with `None`. Always clears the
    /// nail selection.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`] for an unknown id.
    pub fn select_object(&mut self, id: Option<ObjectId>) -> Result<(), DocError> {
        match id {
            Some(id) if self.object(&id).is_none() => return Err(DocError::ObjectNotFound(id)),
            _ => {}
        }
        self.selected_object = id;
        self.selected_nail = None;
        self.notify_selection();
        Ok(())
    }

    // --- Nails ---

    /// Add a nail at an offset, constrained to the object.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`].
    pub fn add_nail(&mut self, object_id: &ObjectId, offset_x: f64, offset_y: f64) -> Result<NailId, DocError> {
        let radius = self.config.nail_radius;
        let obj = self.object_mut(object_id)?;
        let offset = constrain_nail_position(offset_x, offset_y, obj.width, obj.height, radius);
        let nail = Nail::new(offset.offset_x, offset.offset_y);
        let nail_id = nail.id;
        obj.nails.push(nail);

        debug!(object_id = %object_id, nail_id = %nail_id, "nail added");
        self.notify(&Change::NailsChanged(*object_id));
        Ok(nail_id)
    }

    /// Apply a sparse nail update, constrained to the object.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`] or [`DocError::NailNotFound`].
    pub fn update_nail(
        &mut self,
        object_id: &ObjectId,
        nail_id: &NailId,
        patch: NailPatch,
    ) -> Result<NailOffset, DocError> {
        let radius = self.config.nail_radius;
        let obj = self.object_mut(object_id)?;
        let (width, height) = (obj.width, obj.height);
        let nail = obj
            .nail_mut(nail_id)
            .ok_or(DocError::NailNotFound { object_id: *object_id, nail_id: *nail_id })?;

        let offset = constrain_nail_position(
            patch.offset_x.unwrap_or(nail.offset_x),
            patch.offset_y.unwrap_or(nail.offset_y),
            width,
            height,
            radius,
        );
        nail.offset_x = offset.offset_x;
        nail.offset_y = offset.offset_y;

        debug!(object_id = %object_id, nail_id = %nail_id, x = offset.offset_x, y = offset.offset_y, "nail moved");
        self.notify(&Change::NailsChanged(*object_id));
        Ok(offset)
    }

    /// Set both offsets of a nail.
    ///
    /// # Errors
    ///
    /// See [`Store::update_nail`].
    pub fn move_nail(
        &mut self,
        object_id: &ObjectId,
        nail_id: &NailId,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<NailOffset, DocError> {
        self.update_nail(object_id, nail_id, NailPatch { offset_x: Some(offset_x), offset_y: Some(offset_y) })
    }

    /// Remove one nail. Clears the nail selection if it pointed at it.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`] or [`DocError::NailNotFound`].
    pub fn remove_nail(&mut self, object_id: &ObjectId, nail_id: &NailId) -> Result<Nail, DocError> {
        let obj = self.object_mut(object_id)?;
        let idx = obj
            .nails
            .iter()
            .position(|n| n.id == *nail_id)
            .ok_or(DocError::NailNotFound { object_id: *object_id, nail_id: *nail_id })?;
        let removed = obj.nails.remove(idx);

        debug!(object_id = %object_id, nail_id = %nail_id, "nail removed");
        self.notify(&Change::NailsChanged(*object_id));
        if self.selected_nail == Some(*nail_id) {
            self.selected_nail = None;
            self.notify_selection();
        }
        Ok(removed)
    }

    /// Select a nail, or clear with `None`. The owning object becomes the
    /// selected object.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::UnknownNail`] when no object has this nail.
    pub fn select_nail(&mut self, nail_id: Option<NailId>) -> Result<(), DocError> {
        if let Some(nail_id) = nail_id {
            let owner = self
                .objects
                .iter()
                .find(|o| o.nail(&nail_id).is_some())
                .map(|o| o.id)
                .ok_or(DocError::UnknownNail(nail_id))?;
            self.selected_object = Some(owner);
        }
        self.selected_nail = nail_id;
        self.notify_selection();
        Ok(())
    }

    /// Replace an object's nails with `count` evenly distributed ones.
    /// Clears the nail selection, since every id changes.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`].
    pub fn set_nail_count(&mut self, object_id: &ObjectId, count: usize) -> Result<(), DocError> {
        let obj = self.object_mut(object_id)?;
        obj.nails = distribute_nails(obj.width, obj.height, count);

        debug!(object_id = %object_id, count, "nails redistributed");
        self.notify(&Change::NailsChanged(*object_id));
        if self.selected_nail.take().is_some() {
            self.notify_selection();
        }
        Ok(())
    }

    /// Redistribute with one more nail. Returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`].
    pub fn add_hole(&mut self, object_id: &ObjectId) -> Result<usize, DocError> {
        let count = self.object(object_id).ok_or(DocError::ObjectNotFound(*object_id))?.nails.len() + 1;
        self.set_nail_count(object_id, count)?;
        Ok(count)
    }

    /// Redistribute with one fewer nail, keeping at least one. Returns the new
    /// count; a single-nail object is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`].
    pub fn remove_hole(&mut self, object_id: &ObjectId) -> Result<usize, DocError> {
        let current = self.object(object_id).ok_or(DocError::ObjectNotFound(*object_id))?.nails.len();
        if current <= 1 {
            return Ok(current);
        }
        self.set_nail_count(object_id, current - 1)?;
        Ok(current - 1)
    }

    // --- Misc ---

    pub fn set_unit(&mut self, unit: Unit) {
        if self.unit == unit {
            return;
        }
        self.unit = unit;
        debug!(?unit, "display unit changed");
        self.notify(&Change::UnitChanged(unit));
    }

    /// Back to the configured default wall with no objects. Subscribers stay.
    pub fn reset(&mut self) {
        self.wall = self.config.default_wall;
        self.objects.clear();
        self.selected_object = None;
        self.selected_nail = None;
        self.unit = Unit::default();
        self.drag = None;
        info!("store reset");
        self.notify(&Change::Reset);
    }

    // --- Drag session ---

    /// Start dragging an object. Selects it.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ObjectNotFound`].
    pub fn begin_drag(&mut self, id: &ObjectId) -> Result<(), DocError> {
        let obj = self.object(id).ok_or(DocError::ObjectNotFound(*id))?;
        let origin = Point::new(obj.x, obj.y);
        self.drag = Some(DragSession { object_id: *id, origin, last: origin });

        debug!(object_id = %id, x = origin.x, y = origin.y, "drag started");
        if self.selected_object != Some(*id) || self.selected_nail.is_some() {
            self.selected_object = Some(*id);
            self.selected_nail = None;
            self.notify_selection();
        }
        Ok(())
    }

    /// Snap a proposed top-left corner and compute the live overlay.
    ///
    /// The object itself is not moved.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::NoActiveDrag`], or [`DocError::ObjectNotFound`]
    /// if the dragged object vanished.
    pub fn drag_move(&mut self, proposed: Point) -> Result<DragFrame, DocError> {
        let session = self.drag.ok_or(DocError::NoActiveDrag)?;
        let id = session.object_id;
        let size = self.object(&id).ok_or(DocError::ObjectNotFound(id))?.size();

        let snapped = snap_within(proposed, size, &self.wall, self.siblings_of(id), self.config.snap_threshold);
        let rect = Rect::from_origin_size(snapped.position, size);
        let indicators = drag_indicators(&rect, &self.wall, self.siblings_of(id));

        self.drag = Some(DragSession { last: snapped.position, ..session });
        Ok(DragFrame { position: snapped.position, guides: snapped.guides, indicators })
    }

    /// Commit the last snapped position, clamped to the wall, and end the drag.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::NoActiveDrag`], or [`DocError::ObjectNotFound`]
    /// if the dragged object vanished.
    pub fn end_drag(&mut self) -> Result<Point, DocError> {
        let session = self.drag.take().ok_or(DocError::NoActiveDrag)?;
        let pos = self.move_object(&session.object_id, session.last.x, session.last.y)?;
        info!(
            object_id = %session.object_id,
            from_x = session.origin.x,
            from_y = session.origin.y,
            x = pos.x,
            y = pos.y,
            "drag committed"
        );
        Ok(pos)
    }

    /// Abandon the drag, leaving the object where it was. Returns false if no
    /// drag was active.
    pub fn cancel_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(session) => {
                debug!(object_id = %session.object_id, "drag cancelled");
                true
            }
            None => false,
        }
    }

    /// The object being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<ObjectId> {
        self.drag.map(|d| d.object_id)
    }
}

/// Clamp an object into the wall and its nails into the object.
fn contain(obj: &mut WallObject, wall: &Wall, nail_radius: f64) {
    let pos = constrain_to_wall(obj.x, obj.y, obj.width, obj.height, wall);
    obj.x = pos.x;
    obj.y = pos.y;
    for nail in &mut obj.nails {
        let offset = constrain_nail_position(nail.offset_x, nail.offset_y, obj.width, obj.height, nail_radius);
        nail.offset_x = offset.offset_x;
        nail.offset_y = offset.offset_y;
    }
}
