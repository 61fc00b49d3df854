// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planning a single quarter-turn.
//!
//! Planning is pure: it computes where the object ends up and which angles
//! to animate between, without changing any state. The caller decides
//! whether a rotation may start (only one may be in flight) and commits the
//! plan once its animation completes.

use kurbo::Point;

use crate::clamp::{RoomBounds, clamp_position};
use crate::footprint::{EffectiveFootprint, Extension, Footprint, resolve_footprint};
use crate::orientation::{Orientation, RotationDirection};

/// Everything needed to animate and then commit one quarter-turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationPlan {
    /// Direction of the turn.
    pub direction: RotationDirection,
    /// Orientation before the turn.
    pub from: Orientation,
    /// Orientation after the turn.
    pub to: Orientation,
    /// Angle the animation starts at, the angle of [`RotationPlan::from`].
    pub start_angle: f64,
    /// Signed sweep of the animation, `+90` or `-90`.
    pub delta: f64,
    /// Clamped top-left position after the turn.
    pub position: Point,
    /// Occupied footprint after the turn.
    pub footprint: EffectiveFootprint,
}

impl RotationPlan {
    /// Angle the animation ends at, `start_angle + delta`.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.delta
    }
}

/// Plans a quarter-turn of the object in `direction`.
///
/// The turn pivots on the geometric center of the current occupied
/// rectangle: the new top-left is derived from that center and the new
/// footprint, then clamped into `room`.
#[must_use]
pub fn plan_rotation(
    direction: RotationDirection,
    orientation: Orientation,
    footprint: Footprint,
    position: Point,
    room: RoomBounds,
    extension: Extension,
) -> RotationPlan {
    let to = orientation.next(direction);
    let current = resolve_footprint(orientation, footprint, extension);
    let center = current.center_at(position);
    let next = resolve_footprint(to, footprint, extension);
    let position = clamp_position(next.origin_for_center(center), next, room);
    RotationPlan {
        direction,
        from: orientation,
        to,
        start_angle: orientation.angle_degrees(),
        delta: direction.delta_degrees(),
        position,
        footprint: next,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::plan_rotation;
    use crate::clamp::RoomBounds;
    use crate::footprint::{Extension, Footprint};
    use crate::orientation::{Orientation, RotationDirection};

    const ROOM: RoomBounds = RoomBounds::new(305.0, 366.0);
    const SINGLE: Footprint = Footprint::new(90.0, 190.0);

    #[test]
    fn clockwise_from_north_corner_recenters_and_clamps() {
        let plan = plan_rotation(
            RotationDirection::Clockwise,
            Orientation::North,
            SINGLE,
            Point::ZERO,
            ROOM,
            Extension::NONE,
        );
        assert_eq!(plan.to, Orientation::East);
        assert_eq!(plan.start_angle, 0.0);
        assert_eq!(plan.delta, 90.0);
        assert_eq!(plan.end_angle(), 90.0);
        assert_eq!(plan.footprint.width, 190.0);
        assert_eq!(plan.footprint.total_length, 90.0);
        // Center (45, 95) gives an unclamped origin of (-50, 50).
        assert_eq!(plan.position, Point::new(0.0, 50.0));
    }

    #[test]
    fn counterclockwise_sweeps_negative() {
        let plan = plan_rotation(
            RotationDirection::Counterclockwise,
            Orientation::North,
            SINGLE,
            Point::new(100.0, 100.0),
            ROOM,
            Extension::NONE,
        );
        assert_eq!(plan.to, Orientation::West);
        assert_eq!(plan.start_angle, 0.0);
        assert_eq!(plan.delta, -90.0);
        assert_eq!(plan.end_angle(), -90.0);
    }

    #[test]
    fn center_is_preserved_with_enough_margin() {
        let ext = Extension::attached(15.0);
        for o in Orientation::ALL {
            for d in [RotationDirection::Clockwise, RotationDirection::Counterclockwise] {
                let position = Point::new(80.0, 90.0);
                let before = crate::resolve_footprint(o, SINGLE, ext).center_at(position);
                let plan = plan_rotation(d, o, SINGLE, position, ROOM, ext);
                let after = plan.footprint.center_at(plan.position);
                assert!((before.x - after.x).abs() < 1e-9, "{o} {d:?}");
                assert!((before.y - after.y).abs() < 1e-9, "{o} {d:?}");
            }
        }
    }

    #[test]
    fn planned_position_is_always_in_bounds() {
        let mut x = 0.0;
        while x <= 215.0 {
            let mut y = 0.0;
            while y <= 176.0 {
                let plan = plan_rotation(
                    RotationDirection::Clockwise,
                    Orientation::North,
                    SINGLE,
                    Point::new(x, y),
                    ROOM,
                    Extension::NONE,
                );
                assert!(crate::is_in_bounds(plan.position, plan.footprint, ROOM));
                y += 22.0;
            }
            x += 21.5;
        }
    }

    #[test]
    fn four_turns_return_to_start_orientation_and_angle() {
        let mut o = Orientation::South;
        let mut position = Point::new(100.0, 100.0);
        let mut angle = o.angle_degrees();
        for _ in 0..4 {
            let plan = plan_rotation(
                RotationDirection::Clockwise,
                o,
                SINGLE,
                position,
                ROOM,
                Extension::NONE,
            );
            assert_eq!(plan.start_angle, o.angle_degrees());
            angle += plan.delta;
            o = plan.to;
            position = plan.position;
        }
        assert_eq!(o, Orientation::South);
        assert_eq!(angle - 360.0, Orientation::South.angle_degrees());
        assert!((position.x - 100.0).abs() < 1e-9);
        assert!((position.y - 100.0).abs() < 1e-9);
    }
}
