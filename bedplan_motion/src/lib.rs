// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bedplan_motion --heading-base-level=0

//! Bedplan Motion: host-driven quarter-turn animation.
//!
//! This crate animates an angle from a start value through a signed sweep
//! over a fixed duration with a cosine ease-in-out curve. It does not own a
//! clock or a frame loop: hosts call [`RotationAnimator::tick`] from
//! whatever per-frame mechanism they have (a UI frame callback, a timer, a
//! thread loop) and pass the current timestamp.
//!
//! The pieces are:
//! - [`ease_in_out_cosine`]: the easing curve, `0.5 - cos(t * PI) / 2`.
//! - [`RotationAnimator`]: an `Idle → Animating → Settling → Idle` state
//!   machine that reports progress and completion through a
//!   [`RotationObserver`], and refuses to start while busy.
//! - [`AnimatorConfig`]: sweep duration and post-completion settle delay.
//!
//! Angles reported while animating are presentation-only. Whatever the
//! animation represents should be committed from the completion callback.
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
mod easing;

pub use animator::{AnimatorConfig, Callbacks, Phase, RotationAnimator, RotationObserver, Tick};
pub use easing::{clamp_unit, ease_in_out_cosine};
