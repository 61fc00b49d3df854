// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Room bounds and keeping the object's top-left inside them.

use kurbo::Point;

use crate::footprint::EffectiveFootprint;

/// Width and length of the room in room-space units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomBounds {
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub length: f64,
}

impl RoomBounds {
    /// Creates room bounds from width and length.
    #[must_use]
    pub const fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

/// Returns the in-bounds top-left position nearest to `position`.
///
/// Each axis is limited to `[0, room - footprint]`. When the footprint is
/// larger than the room on an axis, that axis pins to `0` and the object
/// overflows the far edge.
#[must_use]
pub fn clamp_position(position: Point, footprint: EffectiveFootprint, room: RoomBounds) -> Point {
    Point::new(
        clamp_axis(position.x, room.width - footprint.width),
        clamp_axis(position.y, room.length - footprint.total_length),
    )
}

/// `true` if `position` is already where [`clamp_position`] would put it.
#[must_use]
pub fn is_in_bounds(position: Point, footprint: EffectiveFootprint, room: RoomBounds) -> bool {
    clamp_position(position, footprint, room) == position
}

// `max` last so a negative upper limit still yields 0.
fn clamp_axis(value: f64, upper: f64) -> f64 {
    value.min(upper).max(0.0)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{RoomBounds, clamp_position, is_in_bounds};
    use crate::footprint::EffectiveFootprint;

    const ROOM: RoomBounds = RoomBounds::new(305.0, 366.0);
    const BED: EffectiveFootprint = EffectiveFootprint {
        width: 90.0,
        total_length: 190.0,
    };

    #[test]
    fn in_bounds_position_is_unchanged() {
        for p in [
            Point::ZERO,
            Point::new(10.0, 20.0),
            Point::new(215.0, 176.0),
            Point::new(100.5, 0.25),
        ] {
            assert_eq!(clamp_position(p, BED, ROOM), p);
            assert!(is_in_bounds(p, BED, ROOM));
        }
    }

    #[test]
    fn clamping_is_idempotent() {
        let once = clamp_position(Point::new(400.0, -12.0), BED, ROOM);
        assert_eq!(clamp_position(once, BED, ROOM), once);
    }

    #[test]
    fn result_stays_inside_room_when_object_fits() {
        let mut x = -200.0;
        while x <= 500.0 {
            let mut y = -200.0;
            while y <= 600.0 {
                let p = clamp_position(Point::new(x, y), BED, ROOM);
                assert!(p.x >= 0.0 && p.x <= ROOM.width - BED.width, "x {x} -> {}", p.x);
                assert!(
                    p.y >= 0.0 && p.y <= ROOM.length - BED.total_length,
                    "y {y} -> {}",
                    p.y
                );
                y += 37.5;
            }
            x += 25.0;
        }
    }

    #[test]
    fn far_edges_clamp_to_room_minus_footprint() {
        let p = clamp_position(Point::new(1_000.0, 1_000.0), BED, ROOM);
        assert_eq!(p, Point::new(215.0, 176.0));
    }

    #[test]
    fn oversized_object_pins_to_origin() {
        let small = RoomBounds::new(60.0, 100.0);
        let p = clamp_position(Point::new(25.0, 40.0), BED, small);
        assert_eq!(p, Point::ZERO);
    }

    #[test]
    fn non_finite_input_collapses_into_range() {
        let p = clamp_position(Point::new(f64::NAN, f64::INFINITY), BED, ROOM);
        assert_eq!(p, Point::new(215.0, 176.0));
    }
}
