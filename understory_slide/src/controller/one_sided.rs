// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture handling shared by the widgets that drive a single panel.

use crate::config::SlideConfig;
use crate::error::SlideResult;
use crate::gesture::{GesturePhase, GestureState, SlideDirection, crossed_slop};
use crate::geometry::PanelGeometry;
use crate::host::{PanelChild, SlideHost};
use crate::snap;
use crate::types::{MarginTarget, PointerEvent, PointerKind, SnapTarget};
use crate::velocity::{VelocitySampler, VelocityTracker};

use super::track::PanelTrack;

/// One panel, one binary direction, one gesture at a time.
#[derive(Clone, Debug)]
pub(crate) struct OneSided<T: VelocityTracker> {
    config: SlideConfig,
    track: Option<PanelTrack>,
    gesture: GestureState<SlideDirection>,
    velocity: VelocitySampler<T>,
    slop: i32,
}

impl<T: VelocityTracker> OneSided<T> {
    pub(crate) fn new(config: SlideConfig, tracker: T) -> Self {
        Self {
            config,
            track: None,
            gesture: GestureState::default(),
            velocity: VelocitySampler::with_tracker(tracker),
            slop: 0,
        }
    }

    pub(crate) fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Derive geometry from the host and publish the resting offset.
    ///
    /// On failure the controller forgets its geometry and ignores input until
    /// the next successful measure.
    pub(crate) fn measure(
        &mut self,
        host: &mut impl SlideHost,
        margin: MarginTarget,
        derive: impl FnOnce(&SlideConfig, &[PanelChild], i32) -> SlideResult<PanelGeometry>,
    ) -> SlideResult<()> {
        let geometry = self
            .config
            .validate()
            .and_then(|()| derive(&self.config, host.children(), host.measured_width()));
        let geometry = match geometry {
            Ok(geometry) => geometry,
            Err(err) => {
                log::warn!("slide panel not measured: {err}");
                self.track = None;
                self.gesture.clear();
                self.velocity.release();
                return Err(err);
            }
        };

        self.slop = host.scaled_touch_slop().max(0);
        match &mut self.track {
            Some(track) => track.remeasure(host, geometry),
            None => {
                let track = PanelTrack::new(geometry, margin, false);
                track.publish(host);
                self.track = Some(track);
            }
        }
        log::debug!(
            "measured {margin:?}: travel [{}, {}], slop {}",
            geometry.travel_min(),
            geometry.travel_max(),
            self.slop
        );
        Ok(())
    }

    /// Feed one pointer event. Does nothing before the first successful measure.
    pub(crate) fn handle(&mut self, host: &mut impl SlideHost, event: PointerEvent) {
        let Some(track) = self.track.as_mut() else {
            return;
        };
        let pos = event.position;
        match event.kind {
            PointerKind::Down => {
                let _ = track.begin_gesture();
                self.gesture.begin(pos);
                self.velocity.reset();
                self.velocity.add_sample(pos.x, pos.y, event.time_ms);
            }
            PointerKind::Move => {
                if !self.velocity.is_active() {
                    return;
                }
                self.velocity.add_sample(pos.x, pos.y, event.time_ms);
                let (dx, dy) = self.gesture.track(pos);
                if self.gesture.direction() == SlideDirection::None
                    && crossed_slop(dx, dy, self.slop, self.config.lock_vertical)
                {
                    let direction = SlideDirection::for_visibility(track.heading_open());
                    log::debug!("slide locked {direction:?} at dx {dx}");
                    self.gesture.lock(direction);
                }
                if self.gesture.direction() != SlideDirection::None {
                    track.drag(host, dx);
                }
            }
            PointerKind::Up => {
                if !self.velocity.is_active() {
                    return;
                }
                self.velocity.add_sample(pos.x, pos.y, event.time_ms);
                let dx = self.gesture.finish(pos);
                let now = event.time_ms;
                if let Some(intent) = self.gesture.direction().intent() {
                    let velocity = self.velocity.horizontal_speed();
                    let target =
                        snap::decide(track.geometry(), &self.config.snap, intent, dx, velocity);
                    log::debug!("released {intent:?} at dx {dx}, {velocity:.1} px/s -> {target:?}");
                    track.settle(target, self.config.step, self.config.step_period_ms, now);
                    self.gesture.settle();
                } else if dx.saturating_abs() < self.slop && track.is_open() {
                    log::debug!("tap on open panel, closing");
                    let target = SnapTarget {
                        target_offset: track.geometry().closed_offset(),
                        open: false,
                    };
                    track.settle(target, self.config.step, self.config.step_period_ms, now);
                    self.gesture.settle();
                } else if let Some(target) = track.take_interrupted() {
                    log::debug!("resuming interrupted snap to {target:?}");
                    track.settle(target, self.config.step, self.config.step_period_ms, now);
                    self.gesture.settle();
                } else {
                    self.gesture.clear();
                }
                self.velocity.release();
            }
        }
    }

    /// Publish due frames. Returns true while an animation is still running.
    pub(crate) fn tick(&mut self, host: &mut impl SlideHost, now_ms: u64) -> bool {
        let Some(track) = self.track.as_mut() else {
            return false;
        };
        if track.tick(host, now_ms).settled {
            self.gesture.clear();
        }
        track.is_animating()
    }

    /// Snap to `open` without a gesture.
    pub(crate) fn settle_to(&mut self, open: bool, now_ms: u64) {
        let Some(track) = self.track.as_mut() else {
            return;
        };
        let _ = track.begin_gesture();
        track.forget_interrupted();
        let target = SnapTarget {
            target_offset: track.geometry().rest_offset(open),
            open,
        };
        track.settle(target, self.config.step, self.config.step_period_ms, now_ms);
        self.velocity.release();
        self.gesture.settle();
    }

    pub(crate) fn is_measured(&self) -> bool {
        self.track.is_some()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.track.as_ref().is_some_and(PanelTrack::is_open)
    }

    pub(crate) fn is_sliding(&self) -> bool {
        self.gesture.is_sliding()
    }

    pub(crate) fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    pub(crate) fn offset(&self) -> Option<i32> {
        self.track.as_ref().map(PanelTrack::offset)
    }

    pub(crate) fn geometry(&self) -> Option<&PanelGeometry> {
        self.track.as_ref().map(PanelTrack::geometry)
    }

    pub(crate) fn next_frame_at(&self) -> Option<u64> {
        self.track.as_ref().and_then(PanelTrack::next_frame_at)
    }
}
