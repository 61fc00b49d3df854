// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between on-screen pointer coordinates and room space.
//!
//! The room is displayed stretched into a rectangle in view (pixel) space.
//! [`RoomViewport`] keeps the affine transforms in both directions so pointer
//! positions can be converted into room units and object positions back into
//! pixels.
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use bedplan_placement::{RoomBounds, RoomViewport};
//!
//! let displayed = Rect::new(10.0, 10.0, 310.0, 370.0);
//! let viewport = RoomViewport::new(displayed, RoomBounds::new(305.0, 366.0)).unwrap();
//!
//! let p = viewport.to_room_space(Point::new(120.0, 80.0), Vec2::new(20.0, 30.0));
//! assert!((p.x - 91.5).abs() < 1e-9);
//! assert!((p.y - 40.0 * 366.0 / 360.0).abs() < 1e-9);
//! ```

use kurbo::{Affine, Point, Rect, Vec2};

use crate::clamp::{RoomBounds, clamp_position};
use crate::footprint::EffectiveFootprint;

/// A room displayed inside a view-space rectangle.
#[derive(Clone, Copy, Debug)]
pub struct RoomViewport {
    displayed: Rect,
    room: RoomBounds,
    room_to_view: Affine,
    view_to_room: Affine,
}

impl RoomViewport {
    /// Creates a viewport for `room` shown in `displayed`.
    ///
    /// Returns `None` when either rectangle has a zero, negative or
    /// non-finite extent. A `displayed` rectangle with `x1 < x0` or `y1 < y0`
    /// counts as negative.
    #[must_use]
    pub fn new(displayed: Rect, room: RoomBounds) -> Option<Self> {
        let view = displayed.size();
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !(usable(view.width)
            && usable(view.height)
            && usable(room.width)
            && usable(room.length))
        {
            return None;
        }
        // Room → view: scale room units into pixels, then move into the displayed rect.
        let room_to_view = Affine::translate(displayed.origin().to_vec2())
            * Affine::scale_non_uniform(view.width / room.width, view.height / room.length);
        Some(Self {
            displayed,
            room,
            room_to_view,
            view_to_room: room_to_view.inverse(),
        })
    }

    /// Room units per pixel along each axis.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            self.room.width / self.displayed.width(),
            self.room.length / self.displayed.height(),
        )
    }

    /// Converts a view-space point into room space.
    #[must_use]
    pub fn view_to_room_point(&self, pt: Point) -> Point {
        self.view_to_room * pt
    }

    /// Converts a room-space point into view space.
    #[must_use]
    pub fn room_to_view_point(&self, pt: Point) -> Point {
        self.room_to_view * pt
    }

    /// Offset of `pointer` from the on-screen top-left of an object at `position`.
    ///
    /// This is the grab offset captured at the start of a drag.
    #[must_use]
    pub fn grab_offset(&self, pointer: Point, position: Point) -> Vec2 {
        pointer - self.room_to_view_point(position)
    }

    /// Room-space top-left for a pointer at `pointer` holding the object at `grab_offset`.
    ///
    /// The result is not clamped.
    #[must_use]
    pub fn to_room_space(&self, pointer: Point, grab_offset: Vec2) -> Point {
        self.view_to_room_point(pointer - grab_offset)
    }

    /// Like [`RoomViewport::to_room_space`], then clamped for `footprint`.
    #[must_use]
    pub fn place(&self, pointer: Point, grab_offset: Vec2, footprint: EffectiveFootprint) -> Point {
        clamp_position(self.to_room_space(pointer, grab_offset), footprint, self.room)
    }
}

/// Returns `reported` if both components are finite, otherwise `fallback`.
///
/// Gesture payloads can carry unreadable offsets; the offset captured at the
/// start of the gesture is the fallback.
#[must_use]
pub fn sanitize_offset(reported: Option<Vec2>, fallback: Vec2) -> Vec2 {
    match reported {
        Some(offset) if offset.is_finite() => offset,
        _ => fallback,
    }
}
