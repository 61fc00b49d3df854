// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bedplan_layout --heading-base-level=0

//! Bedplan Layout: the owned layout state for one bed in one room.
//!
//! This crate ties together the geometry from `bedplan_placement` and the
//! animation from `bedplan_motion` into a single state record,
//! [`LayoutEngine`], which a view layer drives with:
//! - Dimension and headboard input (room bounds, bed size, headboard flag and depth).
//! - Pointer or touch gestures over the displayed room ([`LayoutEngine::begin_drag`],
//!   [`LayoutEngine::drag_to`], [`LayoutEngine::drop_at`]).
//! - Rotation requests ([`LayoutEngine::rotate`]) and per-frame ticks
//!   ([`LayoutEngine::tick`]) from whatever frame callback the host has.
//!
//! The engine answers with numbers only: orientation, position, effective
//! footprint, the transient animation angle and whether a rotation is in
//! flight ([`LayoutEngine::snapshot`]). It never renders.
//!
//! Every change to the state is followed by a re-clamp, so the bed's
//! top-left stays inside the room whenever the bed fits, and pins to the
//! origin when it does not.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use bedplan_layout::{LayoutConfig, LayoutEngine};
//! use bedplan_placement::{Extension, Orientation};
//!
//! let mut engine = LayoutEngine::new(LayoutConfig::default().with_extension(Extension::NONE));
//!
//! // Drag the bed 40 units right on a room shown at one pixel per unit.
//! let displayed = Rect::new(0.0, 0.0, 305.0, 366.0);
//! assert!(engine.begin_drag(Point::new(10.0, 10.0), displayed));
//! engine.drag_to(Point::new(50.0, 10.0), displayed);
//! engine.drop_at(Point::new(50.0, 10.0), displayed, None);
//! assert_eq!(engine.position(), Point::new(40.0, 0.0));
//!
//! // Rotate clockwise; the host ticks with its own timestamps.
//! engine.rotate_clockwise(0.0).unwrap();
//! assert!(engine.rotate_clockwise(1.0).is_none());
//! for now in [16.0, 160.0, 300.0, 400.0] {
//!     engine.tick(now, &mut ());
//! }
//! assert_eq!(engine.orientation(), Orientation::East);
//! assert!(!engine.is_animating());
//! ```
//!
//! ## Logging
//!
//! Commits, rotation lifecycle and ignored input are reported through
//! `tracing` events. No subscriber is installed by this crate.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod drag;
mod engine;

pub use config::LayoutConfig;
pub use drag::DragGesture;
pub use engine::{LayoutEngine, LayoutSnapshot};
