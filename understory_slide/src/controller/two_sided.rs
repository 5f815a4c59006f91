// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content pane between a left and a right menu.

use crate::config::SlideConfig;
use crate::error::{SlideError, SlideResult};
use crate::geometry::PanelGeometry;
use crate::gesture::{GesturePhase, GestureState, TwoSidedDirection};
use crate::host::SlideHost;
use crate::snap;
use crate::types::{
    MarginTarget, OpenEdge, PointerEvent, PointerKind, Side, Sides, SnapTarget, TouchSource,
};
use crate::velocity::{LeastSquaresTracker, VelocitySampler, VelocityTracker};

use super::consumes;
use super::track::PanelTrack;

const LEFT_MENU: usize = 0;
const RIGHT_MENU: usize = 1;
const CONTENT: usize = 2;

#[derive(Clone, Debug)]
struct Tracks {
    left: PanelTrack,
    right: PanelTrack,
}

impl Tracks {
    fn get(&self, side: Side) -> &PanelTrack {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut PanelTrack {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Make `side` the only menu on screen and hand it the content.
    fn reveal(&mut self, host: &mut impl SlideHost, side: Side) {
        let (shown, hidden) = match side {
            Side::Left => (LEFT_MENU, RIGHT_MENU),
            Side::Right => (RIGHT_MENU, LEFT_MENU),
        };
        host.set_child_shown(shown, true);
        host.set_child_shown(hidden, false);
        host.set_content_anchor(CONTENT, side.opposite());
        let other = self.get_mut(side.opposite());
        if !other.is_at_rest_closed() {
            log::debug!("closing {:?} panel before revealing {side:?}", side.opposite());
            other.close_now(host);
        }
    }
}

/// Left menu (child 0), right menu (child 1), and content (child 2).
///
/// Revealing the left menu slides the content right by driving its right
/// margin over `[-left_width, 0]`; the right menu drives its left margin over
/// `[-right_width, 0]`. Only one menu is on screen at a time. A drag reveals a
/// menu only while both are closed and the vertical drift is still inside the
/// slop, and an open menu can only be dragged back toward its edge.
///
/// ```
/// use understory_slide::config::SlideConfig;
/// use understory_slide::controller::TwoSidedMenuController;
/// use understory_slide::types::Sides;
/// # use understory_slide::host::{PanelChild, SlideHost};
/// # use understory_slide::types::MarginTarget;
/// # struct Host(Vec<PanelChild>);
/// # impl SlideHost for Host {
/// #     fn children(&self) -> &[PanelChild] { &self.0 }
/// #     fn measured_width(&self) -> i32 { 1000 }
/// #     fn scaled_touch_slop(&self) -> i32 { 16 }
/// #     fn set_offset(&mut self, _: MarginTarget, _: i32) {}
/// # }
/// # let mut host = Host(vec![
/// #     PanelChild { width: 300 },
/// #     PanelChild { width: 250 },
/// #     PanelChild { width: 1000 },
/// # ]);
/// let mut menus = TwoSidedMenuController::new(SlideConfig::two_sided());
/// menus.measure(&mut host).unwrap();
/// menus.open_right(&mut host, 0);
/// let mut now = 0;
/// while menus.tick(&mut host, now) {
///     now += 15;
/// }
/// assert_eq!(menus.open_sides(), Sides::RIGHT);
/// ```
#[derive(Clone, Debug)]
pub struct TwoSidedMenuController<T: VelocityTracker = LeastSquaresTracker> {
    config: SlideConfig,
    tracks: Option<Tracks>,
    gesture: GestureState<TwoSidedDirection>,
    velocity: VelocitySampler<T>,
    slop: i32,
    source: Option<TouchSource>,
}

impl TwoSidedMenuController {
    /// Controller with the built-in velocity tracker.
    pub fn new(config: SlideConfig) -> Self {
        let tracker = LeastSquaresTracker::new(config.velocity_window_ms);
        Self::with_tracker(config, tracker)
    }
}

impl<T: VelocityTracker> TwoSidedMenuController<T> {
    /// Controller fed by a platform velocity tracker.
    pub fn with_tracker(config: SlideConfig, tracker: T) -> Self {
        Self {
            config,
            tracks: None,
            gesture: GestureState::default(),
            velocity: VelocitySampler::with_tracker(tracker),
            slop: 0,
            source: None,
        }
    }

    /// Derive both menus' bounds from their measured widths.
    ///
    /// On failure the controller ignores input until the next successful measure.
    pub fn measure(&mut self, host: &mut impl SlideHost) -> SlideResult<()> {
        let (left, right) = match self.derive(&*host) {
            Ok(geometry) => geometry,
            Err(err) => {
                log::warn!("two-sided menu not measured: {err}");
                self.tracks = None;
                self.gesture.clear();
                self.velocity.release();
                return Err(err);
            }
        };

        self.slop = host.scaled_touch_slop().max(0);
        match &mut self.tracks {
            Some(tracks) => {
                tracks.left.remeasure(host, left);
                tracks.right.remeasure(host, right);
            }
            None => {
                let tracks = Tracks {
                    left: PanelTrack::new(left, MarginTarget::right(CONTENT), false),
                    right: PanelTrack::new(right, MarginTarget::left(CONTENT), false),
                };
                tracks.left.publish(host);
                tracks.right.publish(host);
                self.tracks = Some(tracks);
            }
        }
        log::debug!(
            "measured two-sided menu: left {}, right {}, slop {}",
            left.panel_width(),
            right.panel_width(),
            self.slop
        );
        Ok(())
    }

    fn derive(&self, host: &impl SlideHost) -> SlideResult<(PanelGeometry, PanelGeometry)> {
        self.config.validate()?;
        let children = host.children();
        if children.len() <= CONTENT {
            return Err(SlideError::MissingChild {
                index: children.len(),
                count: children.len(),
            });
        }
        let viewport = host.measured_width();
        let left = PanelGeometry::hidden_by_negative_margin(
            children[LEFT_MENU].width,
            viewport,
            Side::Left,
            OpenEdge::Min,
        )?;
        let right = PanelGeometry::hidden_by_negative_margin(
            children[RIGHT_MENU].width,
            viewport,
            Side::Right,
            OpenEdge::Min,
        )?;
        Ok((left, right))
    }

    /// Route input from `source` through this controller.
    ///
    /// The view is unfocused while the content slides and on every animation
    /// frame. While disabled its input is claimed.
    pub fn bind_touch_source(&mut self, source: TouchSource) {
        self.source = Some(source);
    }

    /// Feed a pointer event; returns whether the controller consumed it.
    pub fn on_pointer_event(&mut self, host: &mut impl SlideHost, event: PointerEvent) -> bool {
        self.handle(host, event);
        consumes(
            host,
            self.source,
            self.gesture.is_sliding(),
            !self.open_sides().is_empty(),
        )
    }

    fn handle(&mut self, host: &mut impl SlideHost, event: PointerEvent) {
        let Some(tracks) = self.tracks.as_mut() else {
            return;
        };
        let pos = event.position;
        match event.kind {
            PointerKind::Down => {
                let _ = tracks.left.begin_gesture();
                let _ = tracks.right.begin_gesture();
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
                if self.gesture.direction() == TwoSidedDirection::None {
                    let direction = TwoSidedDirection::choose(
                        tracks.left.heading_open(),
                        tracks.right.heading_open(),
                        dx,
                        dy,
                        self.slop,
                    );
                    if direction != TwoSidedDirection::None {
                        log::debug!("slide locked {direction:?} at ({dx}, {dy})");
                        self.gesture.lock(direction);
                        if matches!(
                            direction,
                            TwoSidedDirection::ShowLeft | TwoSidedDirection::ShowRight
                        ) && let Some(side) = direction.side()
                        {
                            tracks.reveal(host, side);
                        }
                    }
                }
                if let Some(side) = self.gesture.direction().side() {
                    tracks.get_mut(side).drag(host, dx);
                }
            }
            PointerKind::Up => {
                if !self.velocity.is_active() {
                    return;
                }
                self.velocity.add_sample(pos.x, pos.y, event.time_ms);
                let dx = self.gesture.finish(pos);
                let (step, period, now) =
                    (self.config.step, self.config.step_period_ms, event.time_ms);
                let direction = self.gesture.direction();
                if let (Some(side), Some(intent)) = (direction.side(), direction.intent()) {
                    let velocity = self.velocity.horizontal_speed();
                    let track = tracks.get_mut(side);
                    let target =
                        snap::decide(track.geometry(), &self.config.snap, intent, dx, velocity);
                    log::debug!(
                        "released {direction:?} at dx {dx}, {velocity:.1} px/s -> {target:?}"
                    );
                    track.settle(target, step, period, now);
                    tracks.get_mut(side.opposite()).forget_interrupted();
                    self.gesture.settle();
                } else if dx.saturating_abs() < self.slop
                    && let Some(side) = open_side(tracks)
                {
                    log::debug!("tap on open {side:?} panel, closing");
                    let track = tracks.get_mut(side);
                    let target = SnapTarget {
                        target_offset: track.geometry().closed_offset(),
                        open: false,
                    };
                    track.settle(target, step, period, now);
                    self.gesture.settle();
                } else {
                    let mut resumed = false;
                    for side in [Side::Left, Side::Right] {
                        let track = tracks.get_mut(side);
                        if let Some(target) = track.take_interrupted() {
                            log::debug!("resuming interrupted {side:?} snap to {target:?}");
                            track.settle(target, step, period, now);
                            resumed = true;
                        }
                    }
                    if resumed {
                        self.gesture.settle();
                    } else {
                        self.gesture.clear();
                    }
                }
                self.velocity.release();
            }
        }
    }

    /// Publish due animation frames; true while more are pending.
    pub fn tick(&mut self, host: &mut impl SlideHost, now_ms: u64) -> bool {
        let Some(tracks) = self.tracks.as_mut() else {
            return false;
        };
        let left = tracks.left.tick(host, now_ms);
        let right = tracks.right.tick(host, now_ms);
        if (left.published || right.published)
            && let Some(source) = self.source
        {
            host.unfocus(source);
        }
        let animating = tracks.left.is_animating() || tracks.right.is_animating();
        if (left.settled || right.settled) && !animating {
            self.gesture.clear();
        }
        animating
    }

    /// When the host should call [`tick`](Self::tick) next.
    pub fn next_frame_at(&self) -> Option<u64> {
        let tracks = self.tracks.as_ref()?;
        match (tracks.left.next_frame_at(), tracks.right.next_frame_at()) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (l, r) => l.or(r),
        }
    }

    /// Animate the left menu open.
    pub fn open_left(&mut self, host: &mut impl SlideHost, now_ms: u64) {
        self.settle_side(host, Side::Left, true, now_ms);
    }

    /// Animate the left menu closed.
    pub fn close_left(&mut self, host: &mut impl SlideHost, now_ms: u64) {
        self.settle_side(host, Side::Left, false, now_ms);
    }

    /// Animate the right menu open.
    pub fn open_right(&mut self, host: &mut impl SlideHost, now_ms: u64) {
        self.settle_side(host, Side::Right, true, now_ms);
    }

    /// Animate the right menu closed.
    pub fn close_right(&mut self, host: &mut impl SlideHost, now_ms: u64) {
        self.settle_side(host, Side::Right, false, now_ms);
    }

    fn settle_side(&mut self, host: &mut impl SlideHost, side: Side, open: bool, now_ms: u64) {
        let Some(tracks) = self.tracks.as_mut() else {
            return;
        };
        if open {
            tracks.reveal(host, side);
        }
        tracks.get_mut(side.opposite()).forget_interrupted();
        let track = tracks.get_mut(side);
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

    /// Whether the left menu has settled open.
    pub fn is_left_open(&self) -> bool {
        self.is_open(Side::Left)
    }

    /// Whether the right menu has settled open.
    pub fn is_right_open(&self) -> bool {
        self.is_open(Side::Right)
    }

    fn is_open(&self, side: Side) -> bool {
        self.tracks.as_ref().is_some_and(|t| t.get(side).is_open())
    }

    /// Menus that have settled open.
    pub fn open_sides(&self) -> Sides {
        let mut sides = Sides::empty();
        sides.set(Sides::LEFT, self.is_left_open());
        sides.set(Sides::RIGHT, self.is_right_open());
        sides
    }

    /// Whether a drag is in progress or animating out.
    pub fn is_sliding(&self) -> bool {
        self.gesture.is_sliding()
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Direction locked by the current gesture.
    pub fn direction(&self) -> TwoSidedDirection {
        self.gesture.direction()
    }

    /// Last offset published for the margin that reveals `side`.
    pub fn offset(&self, side: Side) -> Option<i32> {
        self.tracks.as_ref().map(|t| t.get(side).offset())
    }

    /// Bounds of the menu on `side`, once measured.
    pub fn geometry(&self, side: Side) -> Option<&PanelGeometry> {
        self.tracks.as_ref().map(|t| t.get(side).geometry())
    }
}

fn open_side(tracks: &Tracks) -> Option<Side> {
    [Side::Left, Side::Right]
        .into_iter()
        .find(|&side| tracks.get(side).is_open())
}
