// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step-wise snap animation.
//!
//! ## Overview
//!
//! [`SnapAnimator`] moves an offset by a fixed signed step once per period
//! until it reaches either travel bound. It never blocks or sleeps: the host
//! calls [`SnapAnimator::poll`] from its timer or frame callback and publishes
//! each returned frame. [`SnapAnimator::next_frame_at`] tells the host when the
//! next frame falls due.
//!
//! The first frame is due immediately on start. A late poll returns every
//! frame that fell due in the meantime, one per call, so no intermediate offset
//! is skipped. On overshoot the offset is clamped to the exact bound and the
//! animation ends with that frame.
//!
//! ```
//! use understory_slide::animator::SnapAnimator;
//!
//! let mut anim = SnapAnimator::new();
//! anim.start(-100, 30, (-100, 0), 20, 0);
//! let mut frames = Vec::new();
//! let mut now = 0;
//! while anim.is_running() {
//!     while let Some(frame) = anim.poll(now) {
//!         frames.push(frame.offset);
//!     }
//!     now += 20;
//! }
//! assert_eq!(frames, [-70, -40, -10, 0]);
//! ```

/// One published animation step.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnimationFrame {
    /// Offset to render.
    pub offset: i32,
    /// True for the final frame, which sits exactly on a travel bound.
    pub settled: bool,
}

/// Fixed-step, fixed-period offset animation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapAnimator {
    offset: i32,
    step: i32,
    min: i32,
    max: i32,
    period_ms: u64,
    next_at: Option<u64>,
}

impl SnapAnimator {
    /// An idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating from `from` by `step` per `period_ms`, within `(min, max)`.
    ///
    /// `from` is clamped into the bounds first. Starting replaces any animation
    /// already in flight.
    pub fn start(&mut self, from: i32, step: i32, bounds: (i32, i32), period_ms: u64, now_ms: u64) {
        let (min, max) = bounds;
        debug_assert!(min <= max, "animation bounds must be ordered");
        self.min = min;
        self.max = max.max(min);
        self.offset = from.clamp(self.min, self.max);
        self.step = step;
        self.period_ms = period_ms;
        self.next_at = Some(now_ms);
    }

    /// Return the next frame if one is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<AnimationFrame> {
        let due = self.next_at?;
        if now_ms < due {
            return None;
        }

        let next = self.offset.saturating_add(self.step);
        let settled = self.step == 0
            || (self.step > 0 && next >= self.max)
            || (self.step < 0 && next <= self.min);
        self.offset = next.clamp(self.min, self.max);
        self.next_at = if settled {
            None
        } else {
            Some(due.saturating_add(self.period_ms))
        };

        Some(AnimationFrame {
            offset: self.offset,
            settled,
        })
    }

    /// Stop the animation, returning the last published offset if one was running.
    pub fn cancel(&mut self) -> Option<i32> {
        self.next_at.take().map(|_| self.offset)
    }

    /// Whether frames are still pending.
    pub fn is_running(&self) -> bool {
        self.next_at.is_some()
    }

    /// Time at which the next frame falls due.
    pub fn next_frame_at(&self) -> Option<u64> {
        self.next_at
    }

    /// Most recently published (or starting) offset.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Signed step of the current or last animation.
    pub fn step(&self) -> i32 {
        self.step
    }
}
