// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bedplan_placement --heading-base-level=0

//! Bedplan Placement: geometry for placing one rectangular object in a room.
//!
//! This crate is a small, headless model of a bed (with an optional
//! headboard) lying in a rectangular room. It focuses on:
//! - The four facing orientations and quarter-turn steps between them ([`Orientation`]).
//! - The effective occupied footprint for an orientation, headboard included
//!   ([`resolve_footprint`]).
//! - Keeping the object's top-left corner inside the room ([`clamp_position`]).
//! - Converting pointer coordinates on a displayed room into room units ([`RoomViewport`]).
//! - Planning a center-preserving quarter-turn ([`plan_rotation`]).
//! - A catalog of standard bed sizes ([`bed_size`]).
//!
//! All linear quantities share one room-space unit (the catalog uses
//! centimeters). Positions are `kurbo` points with `x` as the left edge and
//! `y` as the top edge. Angles are degrees, with North at `0`.
//!
//! It does **not** own any state or drive animation. Callers are expected to:
//! - Keep the current orientation, position, room bounds and extension.
//! - Re-clamp after every change to any of those.
//! - Animate between [`RotationPlan::start_angle`] and
//!   [`RotationPlan::end_angle`] and commit the plan afterwards.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use bedplan_placement::{
//!     Extension, Footprint, Orientation, RoomBounds, RotationDirection, plan_rotation,
//! };
//!
//! let room = RoomBounds::new(305.0, 366.0);
//! let bed = Footprint::new(90.0, 190.0);
//!
//! let plan = plan_rotation(
//!     RotationDirection::Clockwise,
//!     Orientation::North,
//!     bed,
//!     Point::ZERO,
//!     room,
//!     Extension::NONE,
//! );
//! assert_eq!(plan.to, Orientation::East);
//! assert_eq!(plan.position, Point::new(0.0, 50.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod catalog;
mod clamp;
mod footprint;
mod orientation;
mod plan;
mod pointer;

pub use catalog::{BED_SIZES, BedSize, UnknownBedSize, bed_size, display_name};
pub use clamp::{RoomBounds, clamp_position, is_in_bounds};
pub use footprint::{EffectiveFootprint, Extension, Footprint, resolve_footprint};
pub use orientation::{Edge, Orientation, RotationDirection};
pub use plan::{RotationPlan, plan_rotation};
pub use pointer::{RoomViewport, sanitize_offset};
