// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial layout and animator settings.

use bedplan_motion::AnimatorConfig;
use bedplan_placement::{BED_SIZES, Extension, Footprint, Orientation, RoomBounds};
use kurbo::Point;

/// Initial state and timing for a [`crate::LayoutEngine`].
///
/// The defaults describe a 305 × 366 room with a single bed in the top-left
/// corner, facing North, with a 15-unit headboard attached.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Room width and length.
    pub room: RoomBounds,
    /// Base footprint of the bed.
    pub footprint: Footprint,
    /// Headboard presence and depth.
    pub extension: Extension,
    /// Initial facing.
    pub orientation: Orientation,
    /// Initial top-left position; clamped on construction.
    pub position: Point,
    /// Rotation animation timing.
    pub animator: AnimatorConfig,
}

impl LayoutConfig {
    /// Default headboard depth.
    pub const DEFAULT_HEADBOARD: f64 = 15.0;

    /// Returns a copy with different room bounds.
    #[must_use]
    pub fn with_room(self, room: RoomBounds) -> Self {
        Self { room, ..self }
    }

    /// Returns a copy with a different base footprint.
    #[must_use]
    pub fn with_footprint(self, footprint: Footprint) -> Self {
        Self { footprint, ..self }
    }

    /// Returns a copy with a different extension.
    #[must_use]
    pub fn with_extension(self, extension: Extension) -> Self {
        Self { extension, ..self }
    }

    /// Returns a copy with a different initial orientation.
    #[must_use]
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Returns a copy with a different initial position.
    #[must_use]
    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// Returns a copy with different animation timing.
    #[must_use]
    pub fn with_animator(self, animator: AnimatorConfig) -> Self {
        Self { animator, ..self }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            room: RoomBounds::new(305.0, 366.0),
            footprint: BED_SIZES[0].footprint,
            extension: Extension::attached(Self::DEFAULT_HEADBOARD),
            orientation: Orientation::North,
            position: Point::ZERO,
            animator: AnimatorConfig::default(),
        }
    }
}
