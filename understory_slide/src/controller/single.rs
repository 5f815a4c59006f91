// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-screen menu under a content pane.

use crate::config::SlideConfig;
use crate::error::{SlideError, SlideResult};
use crate::geometry::PanelGeometry;
use crate::gesture::GesturePhase;
use crate::host::SlideHost;
use crate::types::{MarginTarget, OpenEdge, PointerEvent, Side, TouchSource};
use crate::velocity::{LeastSquaresTracker, VelocityTracker};

use super::one_sided::OneSided;
use super::{CONTENT, MENU};

/// A menu that slides in from the left over most of the screen.
///
/// The menu (child 0) is as wide as the viewport minus
/// [`SlideConfig::menu_padding`], so a strip of content stays visible when it is
/// open. Its left margin runs from `-(viewport - padding)` (closed) to `0` (open).
///
/// ```
/// use understory_slide::config::SlideConfig;
/// use understory_slide::controller::SingleMenuController;
/// # use understory_slide::host::{PanelChild, SlideHost};
/// # use understory_slide::types::{MarginTarget, PointerEvent};
/// # struct Host(Vec<PanelChild>, i32);
/// # impl SlideHost for Host {
/// #     fn children(&self) -> &[PanelChild] { &self.0 }
/// #     fn measured_width(&self) -> i32 { 1000 }
/// #     fn scaled_touch_slop(&self) -> i32 { 16 }
/// #     fn set_offset(&mut self, _: MarginTarget, v: i32) { self.1 = v; }
/// # }
/// let mut host = Host(vec![PanelChild { width: 920 }, PanelChild { width: 1000 }], 0);
/// let mut menu = SingleMenuController::new(SlideConfig::single_menu());
/// menu.measure(&mut host).unwrap();
/// assert_eq!(host.1, -920);
///
/// menu.on_pointer_event(&mut host, PointerEvent::down(10.0, 500.0, 0));
/// menu.on_pointer_event(&mut host, PointerEvent::moved(700.0, 500.0, 100));
/// menu.on_pointer_event(&mut host, PointerEvent::up(710.0, 500.0, 120));
/// let mut now = 120;
/// while menu.tick(&mut host, now) {
///     now += 20;
/// }
/// assert!(menu.is_menu_open());
/// assert_eq!(host.1, 0);
/// ```
#[derive(Clone, Debug)]
pub struct SingleMenuController<T: VelocityTracker = LeastSquaresTracker> {
    core: OneSided<T>,
    source: Option<TouchSource>,
}

impl SingleMenuController {
    /// Controller with the built-in velocity tracker.
    pub fn new(config: SlideConfig) -> Self {
        let tracker = LeastSquaresTracker::new(config.velocity_window_ms);
        Self::with_tracker(config, tracker)
    }
}

impl<T: VelocityTracker> SingleMenuController<T> {
    /// Controller fed by a platform velocity tracker.
    pub fn with_tracker(config: SlideConfig, tracker: T) -> Self {
        Self {
            core: OneSided::new(config, tracker),
            source: None,
        }
    }

    /// Derive panel bounds from the host and place the menu.
    ///
    /// The first measure parks the menu closed; later ones keep its visibility.
    pub fn measure(&mut self, host: &mut impl SlideHost) -> SlideResult<()> {
        self.core
            .measure(host, MarginTarget::left(MENU), |config, children, viewport| {
                if children.len() <= CONTENT {
                    return Err(SlideError::MissingChild {
                        index: CONTENT,
                        count: children.len(),
                    });
                }
                let width = viewport.saturating_sub(config.menu_padding);
                if width < 0 {
                    return Err(SlideError::NegativeWidth(width));
                }
                PanelGeometry::new(-width, 0, width, viewport, Side::Left, OpenEdge::Max)
            })
    }

    /// Unfocus `source` while the menu slides over it.
    pub fn bind_touch_source(&mut self, source: TouchSource) {
        self.source = Some(source);
    }

    /// Feed a pointer event. The menu always consumes input.
    pub fn on_pointer_event(&mut self, host: &mut impl SlideHost, event: PointerEvent) -> bool {
        self.core.handle(host, event);
        if self.core.is_sliding()
            && let Some(source) = self.source
        {
            host.unfocus(source);
        }
        true
    }

    /// Publish due animation frames; true while more are pending.
    pub fn tick(&mut self, host: &mut impl SlideHost, now_ms: u64) -> bool {
        self.core.tick(host, now_ms)
    }

    /// When the host should call [`tick`](Self::tick) next.
    pub fn next_frame_at(&self) -> Option<u64> {
        self.core.next_frame_at()
    }

    /// Animate the menu open.
    pub fn open(&mut self, now_ms: u64) {
        self.core.settle_to(true, now_ms);
    }

    /// Animate the menu closed, revealing the content.
    pub fn close(&mut self, now_ms: u64) {
        self.core.settle_to(false, now_ms);
    }

    /// Whether the menu has settled open.
    pub fn is_menu_open(&self) -> bool {
        self.core.is_open()
    }

    /// Whether a drag is in progress or animating out.
    pub fn is_sliding(&self) -> bool {
        self.core.is_sliding()
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.core.phase()
    }

    /// Last offset published for the menu's left margin.
    pub fn menu_offset(&self) -> Option<i32> {
        self.core.offset()
    }

    /// Bounds derived by the last successful [`measure`](Self::measure).
    pub fn geometry(&self) -> Option<&PanelGeometry> {
        self.core.geometry()
    }

    /// Configuration in use.
    pub fn config(&self) -> &SlideConfig {
        self.core.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;
    use alloc::vec::Vec;

    const MARGIN: MarginTarget = MarginTarget::left(MENU);

    fn setup() -> (SingleMenuController, RecordingHost) {
        let mut host = RecordingHost::new(1000, 16, &[920, 1000]);
        let mut c = SingleMenuController::new(SlideConfig::single_menu());
        c.measure(&mut host).unwrap();
        (c, host)
    }

    fn settle(c: &mut SingleMenuController, host: &mut RecordingHost, mut now: u64) -> u64 {
        while c.tick(host, now) {
            now += 20;
        }
        now
    }

    #[test]
    fn measure_parks_menu_closed() {
        let (c, host) = setup();
        assert_eq!(host.offsets(MARGIN), [-920]);
        assert_eq!(c.geometry().unwrap().travel_min(), -920);
        assert!(!c.is_menu_open());
    }

    #[test]
    fn measure_needs_content_child() {
        let mut host = RecordingHost::new(1000, 16, &[920]);
        let mut c = SingleMenuController::new(SlideConfig::single_menu());
        assert_eq!(
            c.measure(&mut host),
            Err(SlideError::MissingChild { index: 1, count: 1 })
        );
        // Inert: input is swallowed but nothing moves.
        assert!(c.on_pointer_event(&mut host, PointerEvent::down(0.0, 0.0, 0)));
        assert!(c.on_pointer_event(&mut host, PointerEvent::moved(300.0, 0.0, 10)));
        assert!(host.calls.is_empty());
        assert!(!c.tick(&mut host, 100));
    }

    #[test]
    fn drag_offsets_stay_in_bounds() {
        let (mut c, mut host) = setup();
        c.on_pointer_event(&mut host, PointerEvent::down(10.0, 500.0, 0));
        for (i, x) in [30.0, 400.0, 1400.0, -600.0, 200.0].into_iter().enumerate() {
            c.on_pointer_event(&mut host, PointerEvent::moved(x, 500.0, 10 * i as u64 + 10));
        }
        let offsets = host.offsets(MARGIN);
        assert_eq!(offsets, [-920, -900, -530, 0, -920, -730]);
        assert!(offsets.iter().all(|o| (-920..=0).contains(o)));
        assert_eq!(c.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn vertical_drift_does_not_block_slide() {
        let (mut c, mut host) = setup();
        c.on_pointer_event(&mut host, PointerEvent::down(10.0, 500.0, 0));
        c.on_pointer_event(&mut host, PointerEvent::moved(40.0, 560.0, 10));
        assert!(c.is_sliding());
    }

    #[test]
    fn long_slow_drag_opens() {
        let (mut c, mut host) = setup();
        c.on_pointer_event(&mut host, PointerEvent::down(100.0, 500.0, 0));
        c.on_pointer_event(&mut host, PointerEvent::moved(400.0, 500.0, 3_000));
        c.on_pointer_event(&mut host, PointerEvent::moved(700.0, 500.0, 6_000));
        c.on_pointer_event(&mut host, PointerEvent::up(700.0, 500.0, 12_000));
        assert_eq!(c.phase(), GesturePhase::Settling);
        assert!(!c.is_menu_open());
        settle(&mut c, &mut host, 12_000);
        assert!(c.is_menu_open());
        assert_eq!(host.last_offset(MARGIN), Some(0));
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert!(!c.is_sliding());
    }

    #[test]
    fn short_fling_opens() {
        let (mut c, mut host) = setup();
        c.on_pointer_event(&mut host, PointerEvent::down(100.0, 500.0, 0));
        c.on_pointer_event(&mut host, PointerEvent::moved(150.0, 500.0, 50));
        c.on_pointer_event(&mut host, PointerEvent::up(200.0, 500.0, 100));
        settle(&mut c, &mut host, 100);
        assert!(c.is_menu_open());
    }

    #[test]
    fn short_slow_drag_snaps_back() {
        let (mut c, mut host) = setup();
        c.on_pointer_event(&mut host, PointerEvent::down(100.0, 500.0, 0));
        c.on_pointer_event(&mut host, PointerEvent::moved(150.0, 500.0, 5_000));
        c.on_pointer_event(&mut host, PointerEvent::up(150.0, 500.0, 10_000));
        settle(&mut c, &mut host, 10_000);
        assert!(!c.is_menu_open());
        assert_eq!(host.last_offset(MARGIN), Some(-920));
    }

    #[test]
    fn open_animation_steps_by_thirty() {
        let mut host = RecordingHost::new(480, 16, &[400, 480]);
        let mut c = SingleMenuController::new(SlideConfig::single_menu());
        c.measure(&mut host).unwrap();
        c.open(0);
        settle(&mut c, &mut host, 0);
        let mut expected: Vec<i32> = Vec::from([-400]);
        expected.extend((1..=13).map(|k| -400 + 30 * k));
        expected.push(0);
        assert_eq!(host.offsets(MARGIN), expected);
    }

    #[test]
    fn tap_closes_open_menu_without_dragging() {
        let (mut c, mut host) = setup();
        c.open(0);
        settle(&mut c, &mut host, 0);
        assert!(c.is_menu_open());

        c.on_pointer_event(&mut host, PointerEvent::down(950.0, 300.0, 5_000));
        c.on_pointer_event(&mut host, PointerEvent::moved(955.0, 300.0, 5_010));
        assert_eq!(c.phase(), GesturePhase::Idle);
        c.on_pointer_event(&mut host, PointerEvent::up(955.0, 300.0, 5_020));
        assert_eq!(c.phase(), GesturePhase::Settling);
        assert!(!c.is_sliding());
        settle(&mut c, &mut host, 5_020);
        assert!(!c.is_menu_open());
        assert_eq!(host.last_offset(MARGIN), Some(-920));
    }

    #[test]
    fn closing_drag_credits_padding() {
        let (mut c, mut host) = setup();
        c.open(0);
        let now = settle(&mut c, &mut host, 0);
        c.on_pointer_event(&mut host, PointerEvent::down(800.0, 300.0, now));
        c.on_pointer_event(&mut host, PointerEvent::moved(600.0, 300.0, now + 4_000));
        c.on_pointer_event(&mut host, PointerEvent::moved(379.0, 300.0, now + 8_000));
        c.on_pointer_event(&mut host, PointerEvent::up(379.0, 300.0, now + 16_000));
        settle(&mut c, &mut host, now + 16_000);
        assert!(!c.is_menu_open());
    }

    #[test]
    fn settling_twice_is_idempotent() {
        let (mut c, mut host) = setup();
        c.open(0);
        let now = settle(&mut c, &mut host, 0);
        let published = host.offsets(MARGIN).len();
        c.open(now);
        settle(&mut c, &mut host, now);
        assert!(c.is_menu_open());
        assert_eq!(host.offsets(MARGIN)[published..], [0]);
    }

    #[test]
    fn touch_during_animation_reseeds_from_last_frame() {
        let (mut c, mut host) = setup();
        c.open(0);
        assert!(c.tick(&mut host, 0));
        assert!(c.tick(&mut host, 20));
        assert_eq!(c.menu_offset(), Some(-860));

        c.on_pointer_event(&mut host, PointerEvent::down(500.0, 300.0, 30));
        assert_eq!(c.next_frame_at(), None);
        assert!(!c.tick(&mut host, 1_000));
        c.on_pointer_event(&mut host, PointerEvent::moved(530.0, 300.0, 40));
        assert_eq!(c.menu_offset(), Some(-830));

        // Dragging back past the start and releasing slowly returns it closed.
        c.on_pointer_event(&mut host, PointerEvent::moved(50.0, 300.0, 4_000));
        c.on_pointer_event(&mut host, PointerEvent::up(50.0, 300.0, 9_000));
        settle(&mut c, &mut host, 9_000);
        assert!(!c.is_menu_open());
    }

    #[test]
    fn bound_view_is_unfocused_while_sliding() {
        let (mut c, mut host) = setup();
        c.bind_touch_source(TouchSource(9));
        c.on_pointer_event(&mut host, PointerEvent::down(10.0, 500.0, 0));
        assert_eq!(host.unfocus_count(), 0);
        c.on_pointer_event(&mut host, PointerEvent::moved(60.0, 500.0, 10));
        c.on_pointer_event(&mut host, PointerEvent::moved(90.0, 500.0, 20));
        assert_eq!(host.unfocus_count(), 2);
    }

    #[test]
    fn tap_during_opening_resumes_it() {
        let (mut c, mut host) = setup();
        c.open(0);
        let _ = c.tick(&mut host, 0);
        c.on_pointer_event(&mut host, PointerEvent::down(500.0, 300.0, 10));
        c.on_pointer_event(&mut host, PointerEvent::up(500.0, 300.0, 15));
        assert_eq!(c.phase(), GesturePhase::Settling);
        settle(&mut c, &mut host, 15);
        assert!(c.is_menu_open());
    }
}
