// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress clamping and the cosine ease used for rotation sweeps.

use core::f64::consts::PI;

/// Clamps `t` into `[0, 1]`. `NaN` maps to `0`.
#[must_use]
pub fn clamp_unit(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else if t > 0.0 {
        t
    } else {
        0.0
    }
}

/// Cosine ease-in-out: `0.5 - cos(t * PI) / 2` for `t` clamped to `[0, 1]`.
///
/// Starts and ends with zero velocity; `0` maps to `0` and `1` maps to `1`.
#[must_use]
pub fn ease_in_out_cosine(t: f64) -> f64 {
    let t = clamp_unit(t);
    if t == 1.0 {
        return 1.0;
    }
    0.5 - libm::cos(t * PI) / 2.0
}
