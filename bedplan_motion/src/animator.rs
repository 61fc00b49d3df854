// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven rotation animation.
//!
//! ## Usage
//!
//! 1) Call [`RotationAnimator::start`] with the current host timestamp, the
//!    start angle and the signed sweep.
//! 2) Once per frame, call [`RotationAnimator::tick`] with the current
//!    timestamp and an observer. Each tick reports the eased angle; the tick
//!    that reaches the end reports the exact end angle and then completes.
//! 3) Keep ticking until [`RotationAnimator::is_animating`] is `false`: after
//!    completing, the animator stays busy for a short settle delay so that a
//!    double click does not immediately start another turn.
//!
//! Timestamps are plain `f64` values in a host-chosen time unit (usually
//! milliseconds). Progress is derived from elapsed time, never from the
//! number of ticks.
//!
//! ## Minimal example
//!
//! ```
//! use bedplan_motion::{AnimatorConfig, Callbacks, RotationAnimator, Tick};
//!
//! let mut animator = RotationAnimator::new(AnimatorConfig::default());
//! assert!(animator.start(0.0, 0.0, 90.0));
//! assert!(!animator.start(1.0, 0.0, 90.0));
//!
//! let mut completed = 0;
//! let mut last = 0.0;
//! let mut observer = Callbacks::new(|angle| last = angle, || completed += 1);
//! for now in [16.0, 150.0, 300.0] {
//!     animator.tick(now, &mut observer);
//! }
//! assert_eq!(animator.tick(400.0, &mut observer), Tick::Settled);
//! drop(observer);
//!
//! assert_eq!(last, 90.0);
//! assert_eq!(completed, 1);
//! assert!(!animator.is_animating());
//! ```

use crate::easing::{clamp_unit, ease_in_out_cosine};

/// Timing configuration for [`RotationAnimator`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatorConfig {
    /// Length of the sweep, in host time units.
    pub duration: f64,
    /// How long the animator stays busy after completing.
    pub settle_delay: f64,
}

impl AnimatorConfig {
    /// Default sweep duration.
    pub const DEFAULT_DURATION: f64 = 300.0;
    /// Default settle delay after completion.
    pub const DEFAULT_SETTLE_DELAY: f64 = 100.0;

    /// Returns a copy with a different sweep duration.
    #[must_use]
    pub const fn with_duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    /// Returns a copy with a different settle delay.
    #[must_use]
    pub const fn with_settle_delay(self, settle_delay: f64) -> Self {
        Self {
            settle_delay,
            ..self
        }
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            settle_delay: Self::DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Receives animation callbacks from [`RotationAnimator::tick`].
pub trait RotationObserver {
    /// Called on every animating tick with the current angle in degrees.
    fn on_progress(&mut self, angle: f64);

    /// Called exactly once per animation, right after the final progress call.
    fn on_complete(&mut self);
}

/// Adapts a pair of closures into a [`RotationObserver`].
pub struct Callbacks<P, C> {
    on_progress: P,
    on_complete: C,
}

impl<P, C> Callbacks<P, C>
where
    P: FnMut(f64),
    C: FnMut(),
{
    /// Wraps a progress closure and a completion closure.
    pub fn new(on_progress: P, on_complete: C) -> Self {
        Self {
            on_progress,
            on_complete,
        }
    }
}

impl<P, C> core::fmt::Debug for Callbacks<P, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

impl<P, C> RotationObserver for Callbacks<P, C>
where
    P: FnMut(f64),
    C: FnMut(),
{
    fn on_progress(&mut self, angle: f64) {
        (self.on_progress)(angle);
    }

    fn on_complete(&mut self) {
        (self.on_complete)();
    }
}

/// Observer that ignores every callback.
impl RotationObserver for () {
    fn on_progress(&mut self, _angle: f64) {}

    fn on_complete(&mut self) {}
}

/// Coarse lifecycle of a [`RotationAnimator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No rotation in flight; a new one may start.
    Idle,
    /// Sweeping from the start angle to the end angle.
    Animating,
    /// Completed, waiting out the settle delay before accepting a new rotation.
    Settling,
}

/// What a single [`RotationAnimator::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Nothing in flight.
    Idle,
    /// Mid-sweep, at the given angle.
    Progress(f64),
    /// Reached the end angle and invoked completion.
    Completed(f64),
    /// Still inside the settle delay.
    Settling,
    /// The settle delay elapsed; the animator is idle again.
    Settled,
}

#[derive(Clone, Copy, Debug)]
enum State {
    Idle,
    Animating {
        started_at: f64,
        start_angle: f64,
        delta: f64,
        eased: f64,
    },
    Settling {
        until: f64,
    },
}

/// Fixed-duration, eased, non-cancelable rotation animation.
///
/// At most one animation is in flight; [`RotationAnimator::start`] refuses
/// while busy. See the [module docs](self) for the tick protocol.
#[derive(Clone, Debug)]
pub struct RotationAnimator {
    config: AnimatorConfig,
    state: State,
    current_angle: f64,
}

impl RotationAnimator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new(config: AnimatorConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            current_angle: 0.0,
        }
    }

    /// The timing configuration.
    #[must_use]
    pub fn config(&self) -> AnimatorConfig {
        self.config
    }

    /// Replaces the timing configuration. Takes effect for the next animation.
    pub fn set_config(&mut self, config: AnimatorConfig) {
        self.config = config;
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Animating { .. } => Phase::Animating,
            State::Settling { .. } => Phase::Settling,
        }
    }

    /// `true` from [`RotationAnimator::start`] until the settle delay has elapsed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Most recently reported angle, in degrees.
    ///
    /// This is presentation state only.
    #[must_use]
    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    /// Starts sweeping from `start_angle` by `delta` degrees at time `now`.
    ///
    /// Returns `false` and changes nothing if an animation is already in flight.
    pub fn start(&mut self, now: f64, start_angle: f64, delta: f64) -> bool {
        if self.is_animating() {
            tracing::debug!(start_angle, delta, "rotation already in flight; start ignored");
            return false;
        }
        self.state = State::Animating {
            started_at: now,
            start_angle,
            delta,
            eased: 0.0,
        };
        self.current_angle = start_angle;
        tracing::debug!(now, start_angle, delta, "rotation animation started");
        true
    }

    /// Advances the animation to time `now`, invoking `observer` as needed.
    pub fn tick(&mut self, now: f64, observer: &mut impl RotationObserver) -> Tick {
        match self.state {
            State::Idle => Tick::Idle,
            State::Animating {
                started_at,
                start_angle,
                delta,
                eased,
            } => {
                let progress = self.progress(now - started_at);
                if progress >= 1.0 {
                    let end = start_angle + delta;
                    self.current_angle = end;
                    observer.on_progress(end);
                    self.state = if self.config.settle_delay > 0.0 {
                        State::Settling {
                            until: now + self.config.settle_delay,
                        }
                    } else {
                        State::Idle
                    };
                    tracing::debug!(now, end_angle = end, "rotation animation completed");
                    observer.on_complete();
                    return Tick::Completed(end);
                }
                // Never step backwards if the host clock does.
                let eased = ease_in_out_cosine(progress).max(eased);
                let angle = start_angle + delta * eased;
                self.state = State::Animating {
                    started_at,
                    start_angle,
                    delta,
                    eased,
                };
                self.current_angle = angle;
                tracing::trace!(now, progress, angle, "rotation tick");
                observer.on_progress(angle);
                Tick::Progress(angle)
            }
            State::Settling { until } => {
                if now >= until {
                    self.state = State::Idle;
                    tracing::debug!(now, "rotation settled");
                    Tick::Settled
                } else {
                    Tick::Settling
                }
            }
        }
    }

    fn progress(&self, elapsed: f64) -> f64 {
        if self.config.duration > 0.0 {
            clamp_unit(elapsed / self.config.duration)
        } else {
            1.0
        }
    }
}

impl Default for RotationAnimator {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::{AnimatorConfig, Callbacks, Phase, RotationAnimator, RotationObserver, Tick};

    #[derive(Default)]
    struct Recorder {
        angles: Vec<f64>,
        completions: usize,
    }

    impl RotationObserver for Recorder {
        fn on_progress(&mut self, angle: f64) {
            self.angles.push(angle);
        }

        fn on_complete(&mut self) {
            self.completions += 1;
        }
    }

    fn run(animator: &mut RotationAnimator, times: &[f64]) -> Recorder {
        let mut rec = Recorder::default();
        for &t in times {
            animator.tick(t, &mut rec);
        }
        rec
    }

    #[test]
    fn new_animator_is_idle() {
        let mut a = RotationAnimator::default();
        assert_eq!(a.phase(), Phase::Idle);
        assert!(!a.is_animating());
        assert_eq!(a.tick(10.0, &mut ()), Tick::Idle);
    }

    #[test]
    fn start_sets_current_angle() {
        let mut a = RotationAnimator::default();
        assert!(a.start(1_000.0, 180.0, -90.0));
        assert_eq!(a.phase(), Phase::Animating);
        assert_eq!(a.current_angle(), 180.0);
    }

    #[test]
    fn second_start_is_dropped() {
        let mut a = RotationAnimator::default();
        assert!(a.start(0.0, 0.0, 90.0));
        assert!(!a.start(10.0, 90.0, 90.0));
        let rec = run(&mut a, &[300.0]);
        assert_eq!(rec.angles, [90.0]);
    }

    #[test]
    fn clockwise_angles_increase_to_exact_end() {
        let mut a = RotationAnimator::default();
        a.start(0.0, 90.0, 90.0);
        let rec = run(&mut a, &[16.0, 33.0, 50.0, 120.0, 200.0, 290.0, 310.0]);
        assert!(rec.angles.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(rec.angles.last().copied(), Some(180.0));
        assert_eq!(rec.completions, 1);
    }

    #[test]
    fn counterclockwise_angles_decrease_to_exact_end() {
        let mut a = RotationAnimator::default();
        a.start(0.0, 0.0, -90.0);
        let rec = run(&mut a, &[10.0, 100.0, 150.0, 299.0, 300.0]);
        assert!(rec.angles.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(rec.angles.last().copied(), Some(-90.0));
        assert_eq!(rec.completions, 1);
    }

    #[test]
    fn midpoint_is_half_the_sweep() {
        let mut a = RotationAnimator::default();
        a.start(0.0, 0.0, 90.0);
        match a.tick(150.0, &mut ()) {
            Tick::Progress(angle) => assert!((angle - 45.0).abs() < 1e-9),
            other => panic!("unexpected tick {other:?}"),
        }
    }

    #[test]
    fn progress_depends_on_time_not_tick_count() {
        let mut sparse = RotationAnimator::default();
        sparse.start(0.0, 0.0, 90.0);
        let mut dense = RotationAnimator::default();
        dense.start(0.0, 0.0, 90.0);

        run(&mut dense, &[1.0, 2.0, 3.0, 50.0, 75.0, 99.0]);
        let a = sparse.tick(100.0, &mut ());
        let b = dense.tick(100.0, &mut ());
        assert_eq!(a, b);
    }

    #[test]
    fn completion_fires_once_then_settles() {
        let mut a = RotationAnimator::default();
        a.start(0.0, 0.0, 90.0);
        let rec = run(&mut a, &[400.0, 420.0, 450.0]);
        assert_eq!(rec.completions, 1);
        assert_eq!(rec.angles, [90.0]);
        assert_eq!(a.phase(), Phase::Settling);
        assert!(a.is_animating());
        assert!(!a.start(460.0, 90.0, 90.0));

        assert_eq!(a.tick(499.0, &mut ()), Tick::Settling);
        assert_eq!(a.tick(500.0, &mut ()), Tick::Settled);
        assert!(!a.is_animating());
        assert!(a.start(501.0, 90.0, 90.0));
    }

    #[test]
    fn backwards_clock_does_not_reverse_the_sweep() {
        let mut a = RotationAnimator::default();
        a.start(100.0, 0.0, 90.0);
        let rec = run(&mut a, &[250.0, 200.0, 120.0, 90.0]);
        assert!(rec.angles.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn zero_duration_and_delay_complete_on_first_tick() {
        let config = AnimatorConfig::default()
            .with_duration(0.0)
            .with_settle_delay(0.0);
        let mut a = RotationAnimator::new(config);
        a.start(5.0, 270.0, 90.0);
        assert_eq!(a.tick(5.0, &mut ()), Tick::Completed(360.0));
        assert!(!a.is_animating());
    }

    #[test]
    fn closure_callbacks_receive_events() {
        let mut angles = Vec::new();
        let mut done = false;
        {
            let mut cb = Callbacks::new(|a| angles.push(a), || done = true);
            let mut a = RotationAnimator::default();
            a.start(0.0, 0.0, 90.0);
            a.tick(150.0, &mut cb);
            a.tick(300.0, &mut cb);
        }
        assert_eq!(angles.len(), 2);
        assert!(done);
    }
}
