// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog of standard bed sizes, in centimeters.

use alloc::string::{String, ToString};

use crate::footprint::Footprint;

/// A named standard bed size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BedSize {
    /// Stable identifier, such as `"queen"`.
    pub id: &'static str,
    /// Display name, such as `"Queen Bed"`.
    pub name: &'static str,
    /// Base footprint of the mattress frame.
    pub footprint: Footprint,
}

/// The standard sizes, smallest first.
pub const BED_SIZES: [BedSize; 4] = [
    BedSize {
        id: "single",
        name: "Single Bed",
        footprint: Footprint::new(90.0, 190.0),
    },
    BedSize {
        id: "double",
        name: "Double Bed",
        footprint: Footprint::new(135.0, 190.0),
    },
    BedSize {
        id: "queen",
        name: "Queen Bed",
        footprint: Footprint::new(150.0, 200.0),
    },
    BedSize {
        id: "king",
        name: "King Bed",
        footprint: Footprint::new(180.0, 200.0),
    },
];

/// Returned when a bed-size identifier is not in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("bed size with id \"{id}\" not found")]
pub struct UnknownBedSize {
    /// The identifier that was looked up.
    pub id: String,
}

/// Looks up a standard bed size by identifier.
pub fn bed_size(id: &str) -> Result<&'static BedSize, UnknownBedSize> {
    BED_SIZES
        .iter()
        .find(|size| size.id == id)
        .ok_or_else(|| UnknownBedSize { id: id.to_string() })
}

/// Display name for `id`, or `id` itself when it is not in the catalog.
#[must_use]
pub fn display_name(id: &str) -> &str {
    bed_size(id).map_or(id, |size| size.name)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{BED_SIZES, UnknownBedSize, bed_size, display_name};
    use crate::footprint::Footprint;

    #[test]
    fn known_sizes_resolve() {
        assert_eq!(bed_size("single").unwrap().footprint, Footprint::new(90.0, 190.0));
        assert_eq!(bed_size("double").unwrap().footprint, Footprint::new(135.0, 190.0));
        assert_eq!(bed_size("queen").unwrap().footprint, Footprint::new(150.0, 200.0));
        assert_eq!(bed_size("king").unwrap().footprint, Footprint::new(180.0, 200.0));
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in BED_SIZES.iter().enumerate() {
            for b in &BED_SIZES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn unknown_size_is_a_distinct_error() {
        let err = bed_size("bunk").unwrap_err();
        assert_eq!(
            err,
            UnknownBedSize {
                id: "bunk".to_string()
            }
        );
        assert_eq!(err.to_string(), "bed size with id \"bunk\" not found");
    }

    #[test]
    fn display_name_falls_back_to_raw_id() {
        assert_eq!(display_name("king"), "King Bed");
        assert_eq!(display_name("hammock"), "hammock");
    }
}
