// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One animated margin: offset, visibility, and its snap animation.

use crate::animator::SnapAnimator;
use crate::geometry::PanelGeometry;
use crate::host::SlideHost;
use crate::types::{MarginTarget, SnapTarget};

/// What a call to [`PanelTrack::tick`] did.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ticked {
    /// At least one frame was published.
    pub(crate) published: bool,
    /// The animation reached its target on this tick.
    pub(crate) settled: bool,
}

/// State of a single panel margin.
///
/// `open` is only written when a snap completes; while dragging or animating
/// it still reports the last settled state.
#[derive(Clone, Debug)]
pub(crate) struct PanelTrack {
    geometry: PanelGeometry,
    margin: MarginTarget,
    offset: i32,
    open: bool,
    anchor: i32,
    animator: SnapAnimator,
    pending: Option<SnapTarget>,
    interrupted: Option<SnapTarget>,
}

impl PanelTrack {
    pub(crate) fn new(geometry: PanelGeometry, margin: MarginTarget, open: bool) -> Self {
        let offset = geometry.rest_offset(open);
        Self {
            geometry,
            margin,
            offset,
            open,
            anchor: offset,
            animator: SnapAnimator::new(),
            pending: None,
            interrupted: None,
        }
    }

    pub(crate) fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    pub(crate) fn offset(&self) -> i32 {
        self.offset
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub(crate) fn next_frame_at(&self) -> Option<u64> {
        self.animator.next_frame_at()
    }

    /// Visibility a new gesture should assume: the target of an interrupted
    /// snap if there is one, the settled state otherwise.
    pub(crate) fn heading_open(&self) -> bool {
        self.interrupted.map_or(self.open, |t| t.open)
    }

    /// True when the margin sits at its closed rest offset with nothing pending.
    pub(crate) fn is_at_rest_closed(&self) -> bool {
        !self.open && self.interrupted.is_none() && self.offset == self.geometry.closed_offset()
    }

    /// Push the current offset to the host.
    pub(crate) fn publish(&self, host: &mut impl SlideHost) {
        host.set_offset(self.margin, self.offset);
    }

    /// Prepare for a new gesture, stopping any snap in flight.
    ///
    /// The panel stays where the animation last left it and drags continue from
    /// there. Returns true if an animation was interrupted.
    pub(crate) fn begin_gesture(&mut self) -> bool {
        let interrupted = match self.animator.cancel() {
            Some(last) => {
                self.offset = last;
                self.interrupted = self.pending.take();
                log::debug!(
                    "snap on {:?} interrupted at {last}, was heading to {:?}",
                    self.margin,
                    self.interrupted
                );
                true
            }
            None => false,
        };
        self.anchor = self.offset;
        interrupted
    }

    /// Follow the pointer: `delta_x` px since pointer-down.
    pub(crate) fn drag(&mut self, host: &mut impl SlideHost, delta_x: i32) {
        self.offset = self.geometry.drag_offset(self.anchor, delta_x);
        self.publish(host);
    }

    /// Start snapping to `target`.
    pub(crate) fn settle(&mut self, target: SnapTarget, step: i32, period_ms: u64, now_ms: u64) {
        let signed = self.geometry.step_toward(target.open, step);
        log::debug!(
            "snapping {:?} from {} to {} (step {signed})",
            self.margin,
            self.offset,
            target.target_offset
        );
        self.interrupted = None;
        self.pending = Some(target);
        self.animator.start(
            self.offset,
            signed,
            (self.geometry.travel_min(), self.geometry.travel_max()),
            period_ms,
            now_ms,
        );
    }

    /// Snap target of an interrupted animation, consumed.
    pub(crate) fn take_interrupted(&mut self) -> Option<SnapTarget> {
        self.interrupted.take()
    }

    /// Drop any interrupted target; the next gesture decides afresh.
    pub(crate) fn forget_interrupted(&mut self) {
        self.interrupted = None;
    }

    /// Publish every frame due at `now_ms`.
    pub(crate) fn tick(&mut self, host: &mut impl SlideHost, now_ms: u64) -> Ticked {
        let mut ticked = Ticked::default();
        while let Some(frame) = self.animator.poll(now_ms) {
            self.offset = frame.offset;
            log::trace!("{:?} -> {}", self.margin, frame.offset);
            self.publish(host);
            ticked.published = true;
            if frame.settled {
                let open = self
                    .pending
                    .take()
                    .map_or(frame.offset == self.geometry.open_offset(), |t| t.open);
                self.open = open;
                self.anchor = self.offset;
                ticked.settled = true;
                log::debug!("{:?} settled at {} (open: {open})", self.margin, self.offset);
            }
        }
        ticked
    }

    /// Jump to the closed rest offset without animating.
    pub(crate) fn close_now(&mut self, host: &mut impl SlideHost) {
        let _ = self.animator.cancel();
        self.pending = None;
        self.interrupted = None;
        self.open = false;
        self.offset = self.geometry.closed_offset();
        self.anchor = self.offset;
        self.publish(host);
    }

    /// Replace the geometry after the host was re-measured, keeping visibility.
    ///
    /// An animation in flight is resolved to its target immediately.
    pub(crate) fn remeasure(&mut self, host: &mut impl SlideHost, geometry: PanelGeometry) {
        if self.animator.cancel().is_some()
            && let Some(target) = self.pending.take()
        {
            self.open = target.open;
        }
        self.pending = None;
        self.interrupted = None;
        self.geometry = geometry;
        self.offset = geometry.rest_offset(self.open);
        self.anchor = self.offset;
        self.publish(host);
    }
}
