// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity for one gesture.
//!
//! ## Overview
//!
//! Platforms usually ship their own velocity tracker. [`VelocityTracker`] is the
//! seam for plugging one in; it is treated as a black box that takes samples
//! and reports a signed horizontal velocity. [`LeastSquaresTracker`] is the
//! built-in implementation for hosts without one.
//!
//! [`VelocitySampler`] wraps a tracker with the per-gesture lifecycle the
//! controllers need: reset at pointer-down, sample on every move and on the
//! final up, query once, release.
//!
//! ```
//! use understory_slide::velocity::VelocitySampler;
//!
//! let mut sampler: VelocitySampler = VelocitySampler::default();
//! // Querying an idle sampler is safe.
//! assert_eq!(sampler.horizontal_speed(), 0.0);
//!
//! sampler.reset();
//! sampler.add_sample(100.0, 0.0, 0);
//! sampler.add_sample(80.0, 0.0, 10);
//! sampler.add_sample(60.0, 0.0, 20);
//! // 2 px/ms to the left, reported as a magnitude in px/s.
//! assert!((sampler.horizontal_speed() - 2000.0).abs() < 1e-6);
//! ```

use crate::config::VELOCITY_WINDOW_MS;

/// Ring buffer capacity of [`LeastSquaresTracker`].
const HISTORY_SIZE: usize = 20;

/// Velocities are reported per this many milliseconds (px/s).
const UNITS_PER_SECOND_MS: u32 = 1000;

/// One recorded pointer position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureSample {
    /// Horizontal position, px.
    pub x: f64,
    /// Vertical position, px.
    pub y: f64,
    /// Timestamp, ms.
    pub time_ms: u64,
}

/// A velocity-tracking primitive.
pub trait VelocityTracker {
    /// Forget all samples.
    fn clear(&mut self);
    /// Record a sample. Samples arrive in chronological order.
    fn add_movement(&mut self, sample: GestureSample);
    /// Number of samples currently held.
    fn sample_count(&self) -> usize;
    /// Signed horizontal velocity in px per `units_ms` milliseconds.
    fn x_velocity(&self, units_ms: u32) -> f64;
}

/// Least-squares line fit of x over time.
///
/// Keeps the last 20 samples and fits only those within `window_ms` of the
/// newest one. Returns 0 for fewer than two usable samples or a zero time span.
#[derive(Clone, Debug)]
pub struct LeastSquaresTracker {
    samples: [Option<GestureSample>; HISTORY_SIZE],
    index: usize,
    window_ms: u64,
}

impl Default for LeastSquaresTracker {
    fn default() -> Self {
        Self::new(VELOCITY_WINDOW_MS)
    }
}

impl LeastSquaresTracker {
    /// Create a tracker fitting samples from the last `window_ms` milliseconds.
    pub fn new(window_ms: u64) -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
            window_ms,
        }
    }

    fn newest(&self) -> Option<GestureSample> {
        self.samples[self.index]
    }
}

impl VelocityTracker for LeastSquaresTracker {
    fn clear(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    fn add_movement(&mut self, sample: GestureSample) {
        if let Some(last) = self.newest() {
            if sample.time_ms < last.time_ms {
                log::trace!(
                    "dropping sample at {}ms, older than {}ms",
                    sample.time_ms,
                    last.time_ms
                );
                return;
            }
            self.index = (self.index + 1) % HISTORY_SIZE;
        }
        self.samples[self.index] = Some(sample);
    }

    fn sample_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_some()).count()
    }

    fn x_velocity(&self, units_ms: u32) -> f64 {
        let Some(newest) = self.newest() else {
            return 0.0;
        };

        let (mut n, mut sum_t, mut sum_x, mut sum_tt, mut sum_tx) = (0.0, 0.0, 0.0, 0.0, 0.0);
        let mut cursor = self.index;
        for _ in 0..HISTORY_SIZE {
            let Some(sample) = self.samples[cursor] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            if age > self.window_ms {
                break;
            }
            // Time relative to the newest sample keeps the sums small.
            let t = -(age as f64);
            n += 1.0;
            sum_t += t;
            sum_x += sample.x;
            sum_tt += t * t;
            sum_tx += t * sample.x;
            cursor = (cursor + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if n < 2.0 {
            return 0.0;
        }
        let denominator = n * sum_tt - sum_t * sum_t;
        if denominator == 0.0 {
            return 0.0;
        }
        let per_ms = (n * sum_tx - sum_t * sum_x) / denominator;
        per_ms * f64::from(units_ms)
    }
}

/// Per-gesture wrapper around a [`VelocityTracker`].
#[derive(Clone, Debug, Default)]
pub struct VelocitySampler<T: VelocityTracker = LeastSquaresTracker> {
    tracker: T,
    active: bool,
}

impl VelocitySampler<LeastSquaresTracker> {
    /// Sampler backed by the built-in tracker with the given window.
    pub fn with_window(window_ms: u64) -> Self {
        Self::with_tracker(LeastSquaresTracker::new(window_ms))
    }
}

impl<T: VelocityTracker> VelocitySampler<T> {
    /// Wrap a platform tracker.
    pub fn with_tracker(tracker: T) -> Self {
        Self {
            tracker,
            active: false,
        }
    }

    /// Start a new gesture, discarding any previous samples.
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.active = true;
    }

    /// Record a sample for the current gesture. Ignored after [`release`](Self::release).
    pub fn add_sample(&mut self, x: f64, y: f64, time_ms: u64) {
        if !self.active {
            return;
        }
        self.tracker.add_movement(GestureSample { x, y, time_ms });
    }

    /// Horizontal speed in px/s, always `>= 0`.
    ///
    /// Returns 0 with fewer than two samples or outside a gesture.
    pub fn horizontal_speed(&self) -> f64 {
        if !self.active || self.tracker.sample_count() < 2 {
            return 0.0;
        }
        magnitude(self.tracker.x_velocity(UNITS_PER_SECOND_MS))
    }

    /// End the gesture and drop its samples.
    pub fn release(&mut self) {
        self.tracker.clear();
        self.active = false;
    }

    /// Whether a gesture is being sampled.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Access the wrapped tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }
}

fn magnitude(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else if v < 0.0 {
        -v
    } else {
        v
    }
}
