// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: committed state, rotation gating and gesture handling.

use bedplan_motion::{Phase, RotationAnimator, RotationObserver, Tick};
use bedplan_placement::{
    BED_SIZES, BedSize, EffectiveFootprint, Edge, Extension, Footprint, Orientation, RoomBounds,
    RoomViewport, RotationDirection, RotationPlan, UnknownBedSize, bed_size, clamp_position,
    plan_rotation, resolve_footprint, sanitize_offset,
};
use kurbo::{Point, Rect, Vec2};

use crate::config::LayoutConfig;
use crate::drag::DragGesture;

/// The single owned layout state for one bed in one room.
///
/// Orientation, position, room bounds, base footprint and extension are only
/// changed through the commit points below, and every commit ends with a
/// re-clamp so the position is never left stale:
/// - [`LayoutEngine::set_room`], [`LayoutEngine::set_footprint`] and
///   [`LayoutEngine::set_bed_size`] for dimension input.
/// - [`LayoutEngine::set_extension_present`], [`LayoutEngine::set_extension_size`]
///   and [`LayoutEngine::set_extension`] for headboard input.
/// - [`LayoutEngine::commit_position`], [`LayoutEngine::drag_to`] and
///   [`LayoutEngine::drop_at`] for placement.
/// - Completion of a rotation inside [`LayoutEngine::tick`].
///
/// Rotations are gated: while one is in flight (including its settle delay),
/// further rotation requests are dropped and drag input is ignored.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    room: RoomBounds,
    footprint: Footprint,
    extension: Extension,
    orientation: Orientation,
    position: Point,
    bed_size: Option<&'static BedSize>,
    animator: RotationAnimator,
    pending: Option<RotationPlan>,
    drag: DragGesture,
}

/// Everything a renderer needs from a [`LayoutEngine`], copied out at once.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot {
    /// Committed orientation.
    pub orientation: Orientation,
    /// Committed top-left position in room units.
    pub position: Point,
    /// Occupied footprint for the committed orientation.
    pub footprint: EffectiveFootprint,
    /// Current presentation angle in degrees.
    pub angle: f64,
    /// Transient rotation to apply about the object's center.
    pub visual_rotation: f64,
    /// Whether a rotation is in flight.
    pub is_animating: bool,
    /// Side of the occupied rectangle the headboard is drawn on, if shown.
    pub extension_edge: Option<Edge>,
}

impl LayoutEngine {
    /// Creates an engine from `config`, clamping the initial position.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        let mut engine = Self {
            room: config.room,
            footprint: config.footprint,
            extension: config.extension,
            orientation: config.orientation,
            position: config.position,
            bed_size: catalog_entry(config.footprint),
            animator: RotationAnimator::new(config.animator),
            pending: None,
            drag: DragGesture::default(),
        };
        engine.reclamp();
        engine
    }

    /// Room bounds.
    #[must_use]
    pub fn room(&self) -> RoomBounds {
        self.room
    }

    /// Base footprint.
    #[must_use]
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Catalog entry matching the base footprint, if any.
    #[must_use]
    pub fn bed_size(&self) -> Option<&'static BedSize> {
        self.bed_size
    }

    /// Headboard presence and depth.
    #[must_use]
    pub fn extension(&self) -> Extension {
        self.extension
    }

    /// Committed orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Committed top-left position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Occupied footprint for the committed orientation.
    #[must_use]
    pub fn effective_footprint(&self) -> EffectiveFootprint {
        resolve_footprint(self.orientation, self.footprint, self.extension)
    }

    /// Occupied rectangle in room units.
    #[must_use]
    pub fn occupied_rect(&self) -> Rect {
        self.effective_footprint().rect_at(self.position)
    }

    /// Occupied rectangle as fractions of the room's width and length.
    ///
    /// Returns `None` if the room has no positive area.
    #[must_use]
    pub fn fractional_rect(&self) -> Option<Rect> {
        let RoomBounds { width, length } = self.room;
        if !(width > 0.0 && length > 0.0) {
            return None;
        }
        let r = self.occupied_rect();
        Some(Rect::new(
            r.x0 / width,
            r.y0 / length,
            r.x1 / width,
            r.y1 / length,
        ))
    }

    /// `true` from the start of a rotation until its settle delay has elapsed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// The rotation currently in flight, before it is committed.
    #[must_use]
    pub fn pending_rotation(&self) -> Option<&RotationPlan> {
        self.pending.as_ref()
    }

    /// Current presentation angle.
    ///
    /// While sweeping this is the animated angle; otherwise it is the angle
    /// of the committed orientation.
    #[must_use]
    pub fn current_angle(&self) -> f64 {
        if self.animator.phase() == Phase::Animating {
            self.animator.current_angle()
        } else {
            self.orientation.angle_degrees()
        }
    }

    /// Rotation to apply to the object about its center while sweeping.
    ///
    /// This is the animated angle relative to the committed orientation, and
    /// `0` whenever no sweep is running.
    #[must_use]
    pub fn visual_rotation(&self) -> f64 {
        self.current_angle() - self.orientation.angle_degrees()
    }

    /// Counter-rotation that keeps labels on the object upright while sweeping.
    #[must_use]
    pub fn content_counter_rotation(&self) -> f64 {
        -self.visual_rotation()
    }

    /// Whether a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Copies out all renderer-facing state.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            orientation: self.orientation,
            position: self.position,
            footprint: self.effective_footprint(),
            angle: self.current_angle(),
            visual_rotation: self.visual_rotation(),
            is_animating: self.is_animating(),
            extension_edge: self
                .extension
                .present
                .then(|| self.orientation.extension_edge()),
        }
    }

    /// Replaces the room bounds.
    pub fn set_room(&mut self, room: RoomBounds) {
        tracing::debug!(width = room.width, length = room.length, "room bounds committed");
        self.room = room;
        self.reclamp();
    }

    /// Replaces the base footprint with custom dimensions.
    pub fn set_footprint(&mut self, footprint: Footprint) {
        tracing::debug!(
            width = footprint.width,
            length = footprint.length,
            "footprint committed"
        );
        self.footprint = footprint;
        self.bed_size = catalog_entry(footprint);
        self.reclamp();
    }

    /// Switches to a catalog bed size.
    ///
    /// Unknown identifiers leave the state untouched.
    pub fn set_bed_size(&mut self, id: &str) -> Result<(), UnknownBedSize> {
        let size = bed_size(id)?;
        tracing::debug!(id = size.id, "bed size committed");
        self.footprint = size.footprint;
        self.bed_size = Some(size);
        self.reclamp();
        Ok(())
    }

    /// Shows or hides the headboard, keeping its size.
    pub fn set_extension_present(&mut self, present: bool) {
        self.set_extension(self.extension.with_present(present));
    }

    /// Changes the headboard depth, keeping its presence flag.
    pub fn set_extension_size(&mut self, size: f64) {
        self.set_extension(self.extension.with_size(size));
    }

    /// Replaces the headboard presence and depth together.
    pub fn set_extension(&mut self, extension: Extension) {
        tracing::debug!(
            present = extension.present,
            size = extension.size,
            "extension committed"
        );
        self.extension = extension;
        self.reclamp();
    }

    /// Moves the object to `position`, clamped into the room. Returns where it landed.
    ///
    /// Ignored (returns `None`) while a rotation is in flight, since the
    /// rotation commits its own position when it completes.
    pub fn commit_position(&mut self, position: Point) -> Option<Point> {
        if self.animator.is_animating() {
            tracing::debug!(x = position.x, y = position.y, "position dropped; rotation in flight");
            return None;
        }
        self.position = position;
        self.reclamp();
        tracing::debug!(x = self.position.x, y = self.position.y, "position committed");
        Some(self.position)
    }

    /// Requests a quarter-turn in `direction` at host time `now`.
    ///
    /// Returns the plan being animated, or `None` if a rotation is already in
    /// flight; dropped requests are not queued.
    pub fn rotate(&mut self, direction: RotationDirection, now: f64) -> Option<RotationPlan> {
        if self.animator.is_animating() {
            tracing::debug!(?direction, "rotation request dropped; one is in flight");
            return None;
        }
        let plan = plan_rotation(
            direction,
            self.orientation,
            self.footprint,
            self.position,
            self.room,
            self.extension,
        );
        if !self.animator.start(now, plan.start_angle, plan.delta) {
            return None;
        }
        if self.drag.is_dragging() {
            tracing::debug!("drag ended by rotation");
            self.drag.end();
        }
        tracing::debug!(from = %plan.from, to = %plan.to, "rotation planned");
        self.pending = Some(plan);
        Some(plan)
    }

    /// Shorthand for [`LayoutEngine::rotate`] clockwise.
    pub fn rotate_clockwise(&mut self, now: f64) -> Option<RotationPlan> {
        self.rotate(RotationDirection::Clockwise, now)
    }

    /// Shorthand for [`LayoutEngine::rotate`] counterclockwise.
    pub fn rotate_counterclockwise(&mut self, now: f64) -> Option<RotationPlan> {
        self.rotate(RotationDirection::Counterclockwise, now)
    }

    /// Advances a rotation in flight to host time `now`.
    ///
    /// `observer` receives the animated angle on every sweeping tick. On the
    /// tick that finishes the sweep, the planned orientation and position are
    /// committed (and re-clamped against the current room) before
    /// completion is reported.
    pub fn tick(&mut self, now: f64, observer: &mut impl RotationObserver) -> Tick {
        let mut forward = ProgressOnly(observer);
        let tick = self.animator.tick(now, &mut forward);
        if let Tick::Completed(_) = tick {
            if let Some(plan) = self.pending.take() {
                self.orientation = plan.to;
                self.position = plan.position;
                self.reclamp();
                tracing::debug!(
                    orientation = %self.orientation,
                    x = self.position.x,
                    y = self.position.y,
                    "rotation committed"
                );
            }
            forward.0.on_complete();
        }
        tick
    }

    /// Starts a drag at view-space `pointer` over the room shown in `displayed`.
    ///
    /// The grab offset is taken from the object's current on-screen top-left.
    /// Returns `false` while a rotation is in flight or when `displayed` is
    /// degenerate.
    pub fn begin_drag(&mut self, pointer: Point, displayed: Rect) -> bool {
        if self.animator.is_animating() {
            return false;
        }
        let Some(viewport) = self.viewport(displayed) else {
            return false;
        };
        let grab = viewport.grab_offset(pointer, self.position);
        tracing::trace!(grab_x = grab.x, grab_y = grab.y, "drag started");
        self.drag.start(grab);
        true
    }

    /// Moves the object under `pointer` during a drag. Returns the new position.
    ///
    /// Ignored (returns `None`) while a rotation is in flight, when no drag is
    /// active, or when `displayed` is degenerate.
    pub fn drag_to(&mut self, pointer: Point, displayed: Rect) -> Option<Point> {
        if self.animator.is_animating() {
            return None;
        }
        let grab = self.drag.grab_offset()?;
        let viewport = self.viewport(displayed)?;
        self.position = viewport.place(pointer, grab, self.effective_footprint());
        tracing::trace!(x = self.position.x, y = self.position.y, "drag moved");
        Some(self.position)
    }

    /// Drops the object at `pointer`, ending the drag. Returns the committed position.
    ///
    /// `reported_offset` is the grab offset carried by the drop event, if any.
    /// When it is missing or not finite, the offset captured by
    /// [`LayoutEngine::begin_drag`] is used instead. Without either, or while
    /// a rotation is in flight, the drop is ignored.
    pub fn drop_at(
        &mut self,
        pointer: Point,
        displayed: Rect,
        reported_offset: Option<Vec2>,
    ) -> Option<Point> {
        if self.animator.is_animating() {
            return None;
        }
        let captured = self.drag.grab_offset();
        self.drag.end();
        let grab = match (reported_offset, captured) {
            (_, Some(captured)) => {
                if reported_offset.is_some_and(|o| !o.is_finite()) {
                    tracing::warn!("unreadable drop offset; using the captured grab offset");
                }
                sanitize_offset(reported_offset, captured)
            }
            (Some(reported), None) if reported.is_finite() => reported,
            _ => return None,
        };
        let viewport = self.viewport(displayed)?;
        self.commit_position(viewport.to_room_space(pointer, grab))
    }

    /// Abandons the current drag, keeping the position reached so far.
    pub fn cancel_drag(&mut self) {
        self.drag.end();
    }

    fn viewport(&self, displayed: Rect) -> Option<RoomViewport> {
        let viewport = RoomViewport::new(displayed, self.room);
        if viewport.is_none() {
            tracing::warn!(
                width = displayed.width(),
                height = displayed.height(),
                "degenerate room display; pointer input ignored"
            );
        }
        viewport
    }

    fn reclamp(&mut self) {
        let clamped = clamp_position(self.position, self.effective_footprint(), self.room);
        if clamped != self.position {
            tracing::trace!(
                from_x = self.position.x,
                from_y = self.position.y,
                to_x = clamped.x,
                to_y = clamped.y,
                "position re-clamped"
            );
            self.position = clamped;
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

fn catalog_entry(footprint: Footprint) -> Option<&'static BedSize> {
    BED_SIZES.iter().find(|size| size.footprint == footprint)
}

// Forwards progress only; the engine reports completion after committing.
struct ProgressOnly<'a, O>(&'a mut O);

impl<O: RotationObserver> RotationObserver for ProgressOnly<'_, O> {
    fn on_progress(&mut self, angle: f64) {
        self.0.on_progress(angle);
    }

    fn on_complete(&mut self) {}
}
