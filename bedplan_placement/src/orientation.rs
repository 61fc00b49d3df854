// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four facing orientations and quarter-turn rotation directions.
//!
//! An [`Orientation`] names the side of the room the headboard faces. The
//! mapping to angles is fixed: North is `0°` and each clockwise step adds
//! `90°`.
//!
//! ```
//! use bedplan_placement::{Orientation, RotationDirection};
//!
//! let o = Orientation::North.next(RotationDirection::Clockwise);
//! assert_eq!(o, Orientation::East);
//! assert_eq!(o.angle_degrees(), 90.0);
//! assert!(!o.is_along_primary_axis());
//! ```

use core::fmt;

/// One of the four discrete facing directions of the object within the room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Headboard at the top edge, `0°`.
    #[default]
    North,
    /// Headboard at the right edge, `90°`.
    East,
    /// Headboard at the bottom edge, `180°`.
    South,
    /// Headboard at the left edge, `270°`.
    West,
}

/// Direction of a single quarter-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationDirection {
    /// Increasing angle, North → East → South → West.
    Clockwise,
    /// Decreasing angle, North → West → South → East.
    Counterclockwise,
}

/// A side of an axis-aligned rectangle in room space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// The `min_y` side.
    Top,
    /// The `max_x` side.
    Right,
    /// The `max_y` side.
    Bottom,
    /// The `min_x` side.
    Left,
}

impl RotationDirection {
    /// Signed angle of one step in degrees: `+90` clockwise, `-90` counterclockwise.
    #[must_use]
    pub const fn delta_degrees(self) -> f64 {
        match self {
            Self::Clockwise => 90.0,
            Self::Counterclockwise => -90.0,
        }
    }
}

impl Orientation {
    /// All orientations in clockwise order starting at North.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the cyclically adjacent orientation in `direction`.
    #[must_use]
    pub const fn next(self, direction: RotationDirection) -> Self {
        match (self, direction) {
            (Self::North, RotationDirection::Clockwise) => Self::East,
            (Self::East, RotationDirection::Clockwise) => Self::South,
            (Self::South, RotationDirection::Clockwise) => Self::West,
            (Self::West, RotationDirection::Clockwise) => Self::North,
            (Self::North, RotationDirection::Counterclockwise) => Self::West,
            (Self::West, RotationDirection::Counterclockwise) => Self::South,
            (Self::South, RotationDirection::Counterclockwise) => Self::East,
            (Self::East, RotationDirection::Counterclockwise) => Self::North,
        }
    }

    /// Angle of this orientation in degrees, in `{0, 90, 180, 270}`.
    #[must_use]
    pub const fn angle_degrees(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::East => 90.0,
            Self::South => 180.0,
            Self::West => 270.0,
        }
    }

    /// Inverse of [`Orientation::angle_degrees`].
    ///
    /// The angle is normalized into `[0, 360)` first, so `-90` maps to West
    /// and `450` to East. Angles that are not a whole quarter-turn return `None`.
    #[must_use]
    pub fn from_angle(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        let normalized = degrees % 360.0;
        let normalized = if normalized < 0.0 {
            normalized + 360.0
        } else {
            normalized
        };
        Self::ALL
            .into_iter()
            .find(|o| o.angle_degrees() == normalized)
    }

    /// `true` for North and South, where the base length runs along the room's length axis.
    #[must_use]
    pub const fn is_along_primary_axis(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// `true` for North and West, where the extension precedes the body along the layout axis.
    #[must_use]
    pub const fn is_extension_at_start(self) -> bool {
        matches!(self, Self::North | Self::West)
    }

    /// The side of the occupied rectangle the headboard faces, for drawing it.
    #[must_use]
    pub const fn extension_edge(self) -> Edge {
        match self {
            Self::North => Edge::Top,
            Self::East => Edge::Right,
            Self::South => Edge::Bottom,
            Self::West => Edge::Left,
        }
    }

    /// Short human-readable name, as shown on the headboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
