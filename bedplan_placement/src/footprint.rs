// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base footprints, the optional extension, and effective occupied size.

use kurbo::{Point, Rect, Size, Vec2};

use crate::orientation::Orientation;

/// Intrinsic `(width, length)` of the object, independent of orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    /// Short side of the body.
    pub width: f64,
    /// Long side of the body, not counting any extension.
    pub length: f64,
}

impl Footprint {
    /// Creates a footprint from its base width and length.
    #[must_use]
    pub const fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

/// An optional element attached to the object's head end, such as a headboard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extension {
    /// Whether the extension is currently attached.
    pub present: bool,
    /// Depth of the extension, added to the total length when present.
    pub size: f64,
}

impl Extension {
    /// No extension.
    pub const NONE: Self = Self {
        present: false,
        size: 0.0,
    };

    /// An attached extension of the given depth.
    #[must_use]
    pub const fn attached(size: f64) -> Self {
        Self {
            present: true,
            size,
        }
    }

    /// Returns a copy with the presence flag replaced, keeping the size.
    #[must_use]
    pub const fn with_present(self, present: bool) -> Self {
        Self { present, ..self }
    }

    /// Returns a copy with the size replaced, keeping the presence flag.
    #[must_use]
    pub const fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    /// The length this extension adds to the occupied footprint.
    #[must_use]
    pub const fn contribution(self) -> f64 {
        if self.present { self.size } else { 0.0 }
    }
}

/// Occupied size of the object in room space for a given orientation.
///
/// `width` runs along the room's width axis (x) and `total_length` along the
/// room's length axis (y), extension included.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveFootprint {
    /// Extent along the room's width axis.
    pub width: f64,
    /// Extent along the room's length axis.
    pub total_length: f64,
}

impl EffectiveFootprint {
    /// The footprint as a `kurbo` size (`height` is the total length).
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.total_length)
    }

    /// Half extents, the offset from the top-left corner to the center.
    #[must_use]
    pub fn half_extent(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.total_length / 2.0)
    }

    /// The rectangle occupied when the top-left corner is at `position`.
    #[must_use]
    pub fn rect_at(self, position: Point) -> Rect {
        Rect::from_origin_size(position, self.size())
    }

    /// Center of the occupied rectangle when the top-left corner is at `position`.
    #[must_use]
    pub fn center_at(self, position: Point) -> Point {
        position + self.half_extent()
    }

    /// Top-left corner that puts the center of the occupied rectangle at `center`.
    #[must_use]
    pub fn origin_for_center(self, center: Point) -> Point {
        center - self.half_extent()
    }
}

/// Computes the occupied footprint for `orientation`.
///
/// North and South keep the base axes; East and West swap width and length.
/// An attached extension adds its size to the total length (the extent along
/// the room's length axis) once, whatever the orientation.
#[must_use]
pub fn resolve_footprint(
    orientation: Orientation,
    footprint: Footprint,
    extension: Extension,
) -> EffectiveFootprint {
    let (width, length) = if orientation.is_along_primary_axis() {
        (footprint.width, footprint.length)
    } else {
        (footprint.length, footprint.width)
    };
    EffectiveFootprint {
        width,
        total_length: length + extension.contribution(),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{Extension, Footprint, resolve_footprint};
    use crate::orientation::Orientation;

    const SINGLE: Footprint = Footprint::new(90.0, 190.0);

    #[test]
    fn primary_axis_keeps_base_dimensions() {
        for o in [Orientation::North, Orientation::South] {
            let fp = resolve_footprint(o, SINGLE, Extension::NONE);
            assert_eq!(fp.width, 90.0);
            assert_eq!(fp.total_length, 190.0);
        }
    }

    #[test]
    fn cross_axis_swaps_dimensions() {
        for o in [Orientation::East, Orientation::West] {
            let fp = resolve_footprint(o, SINGLE, Extension::NONE);
            assert_eq!(fp.width, 190.0);
            assert_eq!(fp.total_length, 90.0);
        }
    }

    #[test]
    fn extension_adds_exactly_once_for_every_orientation() {
        let ext = Extension::attached(15.0);
        for o in Orientation::ALL {
            let bare = resolve_footprint(o, SINGLE, Extension::NONE);
            let with = resolve_footprint(o, SINGLE, ext);
            assert_eq!(with.width, bare.width, "{o}");
            assert_eq!(with.total_length, bare.total_length + 15.0, "{o}");
        }
    }

    #[test]
    fn hidden_extension_keeps_its_size_but_contributes_nothing() {
        let ext = Extension::attached(15.0).with_present(false);
        assert_eq!(ext.size, 15.0);
        assert_eq!(ext.contribution(), 0.0);
        let fp = resolve_footprint(Orientation::North, SINGLE, ext);
        assert_eq!(fp.total_length, 190.0);
    }

    #[test]
    fn center_and_origin_are_inverse() {
        let fp = resolve_footprint(Orientation::North, SINGLE, Extension::attached(10.0));
        let origin = Point::new(12.0, 30.0);
        let center = fp.center_at(origin);
        assert_eq!(center, Point::new(57.0, 130.0));
        assert_eq!(fp.origin_for_center(center), origin);
        assert_eq!(fp.rect_at(origin), Rect::new(12.0, 30.0, 102.0, 230.0));
    }
}
