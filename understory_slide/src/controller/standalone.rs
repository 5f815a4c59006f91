// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable slide panel: content slides aside to uncover a menu beneath it.

use crate::config::SlideConfig;
use crate::error::{SlideError, SlideResult};
use crate::geometry::PanelGeometry;
use crate::gesture::GesturePhase;
use crate::host::SlideHost;
use crate::types::{MarginTarget, OpenEdge, PointerEvent, PointerKind, Side, TouchSource};
use crate::velocity::{LeastSquaresTracker, VelocityTracker};

use super::one_sided::OneSided;
use super::{CONTENT, MENU, consumes};

/// Content pane (child 1) over a left menu (child 0).
///
/// The content's right margin is animated over `[-menu_width, 0]`; it is
/// `-menu_width` when the menu is uncovered. Consumption follows the bound
/// view: input is claimed while sliding, while the menu is open, or while the
/// bound view is disabled, and released to the view otherwise.
#[derive(Clone, Debug)]
pub struct StandaloneSlidePanel<T: VelocityTracker = LeastSquaresTracker> {
    core: OneSided<T>,
    source: Option<TouchSource>,
}

impl StandaloneSlidePanel {
    /// Panel with the built-in velocity tracker.
    pub fn new(config: SlideConfig) -> Self {
        let tracker = LeastSquaresTracker::new(config.velocity_window_ms);
        Self::with_tracker(config, tracker)
    }
}

impl<T: VelocityTracker> StandaloneSlidePanel<T> {
    /// Panel fed by a platform velocity tracker.
    pub fn with_tracker(config: SlideConfig, tracker: T) -> Self {
        Self {
            core: OneSided::new(config, tracker),
            source: None,
        }
    }

    /// Derive bounds from the menu's measured width.
    pub fn measure(&mut self, host: &mut impl SlideHost) -> SlideResult<()> {
        self.core
            .measure(host, MarginTarget::right(CONTENT), |_, children, viewport| {
                let count = children.len();
                let menu = children.get(MENU).ok_or(SlideError::MissingChild {
                    index: MENU,
                    count,
                })?;
                if count <= CONTENT {
                    return Err(SlideError::MissingChild {
                        index: CONTENT,
                        count,
                    });
                }
                PanelGeometry::hidden_by_negative_margin(
                    menu.width,
                    viewport,
                    Side::Left,
                    OpenEdge::Min,
                )
            })
    }

    /// Route input from `source` through this panel.
    ///
    /// The view is unfocused while the content slides and, when disabled, has
    /// its input claimed by the panel.
    pub fn bind_touch_source(&mut self, source: TouchSource) {
        self.source = Some(source);
    }

    /// Feed a pointer event; returns whether the panel consumed it.
    pub fn on_pointer_event(&mut self, host: &mut impl SlideHost, event: PointerEvent) -> bool {
        if event.kind == PointerKind::Down && self.core.is_measured() {
            host.set_child_shown(MENU, true);
        }
        self.core.handle(host, event);
        consumes(host, self.source, self.core.is_sliding(), self.core.is_open())
    }

    /// Publish due animation frames; true while more are pending.
    pub fn tick(&mut self, host: &mut impl SlideHost, now_ms: u64) -> bool {
        self.core.tick(host, now_ms)
    }

    /// When the host should call [`tick`](Self::tick) next.
    pub fn next_frame_at(&self) -> Option<u64> {
        self.core.next_frame_at()
    }

    /// Slide the content aside to uncover the menu.
    pub fn open(&mut self, now_ms: u64) {
        self.core.settle_to(true, now_ms);
    }

    /// Slide the content back over the menu.
    pub fn close(&mut self, now_ms: u64) {
        self.core.settle_to(false, now_ms);
    }

    /// Whether the menu has settled uncovered.
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

    /// Last offset published for the content's right margin.
    pub fn content_offset(&self) -> Option<i32> {
        self.core.offset()
    }

    /// Bounds derived by the last successful [`measure`](Self::measure).
    pub fn geometry(&self) -> Option<&PanelGeometry> {
        self.core.geometry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{HostCall, RecordingHost};

    const MARGIN: MarginTarget = MarginTarget::right(CONTENT);
    const VIEW: TouchSource = TouchSource(7);

    fn setup() -> (StandaloneSlidePanel, RecordingHost) {
        let mut host = RecordingHost::new(1000, 16, &[300, 1000]);
        let mut p = StandaloneSlidePanel::new(SlideConfig::standalone());
        p.measure(&mut host).unwrap();
        p.bind_touch_source(VIEW);
        (p, host)
    }

    fn settle(p: &mut StandaloneSlidePanel, host: &mut RecordingHost, mut now: u64) -> u64 {
        while p.tick(host, now) {
            now += 20;
        }
        now
    }

    #[test]
    fn content_margin_covers_menu_at_rest() {
        let (p, host) = setup();
        assert_eq!(host.offsets(MARGIN), [0]);
        let g = p.geometry().unwrap();
        assert_eq!((g.travel_min(), g.travel_max()), (-300, 0));
        assert_eq!(g.open_offset(), -300);
    }

    #[test]
    fn missing_menu_is_reported() {
        let mut host = RecordingHost::new(1000, 16, &[]);
        let mut p = StandaloneSlidePanel::new(SlideConfig::standalone());
        assert_eq!(
            p.measure(&mut host),
            Err(SlideError::MissingChild { index: 0, count: 0 })
        );
        assert!(!p.on_pointer_event(&mut host, PointerEvent::down(1.0, 1.0, 0)));
        assert!(host.calls.is_empty());
    }

    #[test]
    fn idle_touches_pass_through() {
        let (mut p, mut host) = setup();
        assert!(!p.on_pointer_event(&mut host, PointerEvent::down(100.0, 100.0, 0)));
        assert!(host.calls.contains(&HostCall::Shown(MENU, true)));
        assert!(!p.on_pointer_event(&mut host, PointerEvent::moved(105.0, 100.0, 10)));
        assert!(!p.on_pointer_event(&mut host, PointerEvent::up(105.0, 100.0, 20)));
        assert_eq!(host.unfocus_count(), 0);
    }

    #[test]
    fn sliding_claims_input_and_unfocuses_view() {
        let (mut p, mut host) = setup();
        p.on_pointer_event(&mut host, PointerEvent::down(100.0, 100.0, 0));
        assert!(p.on_pointer_event(&mut host, PointerEvent::moved(140.0, 102.0, 10)));
        assert_eq!(p.content_offset(), Some(-40));
        assert_eq!(host.unfocus_count(), 1);
    }

    #[test]
    fn vertical_scroll_is_not_a_slide() {
        let (mut p, mut host) = setup();
        p.on_pointer_event(&mut host, PointerEvent::down(100.0, 100.0, 0));
        assert!(!p.on_pointer_event(&mut host, PointerEvent::moved(130.0, 140.0, 10)));
        // Still too much vertical drift for a slide.
        assert!(!p.on_pointer_event(&mut host, PointerEvent::moved(200.0, 140.0, 20)));
        assert!(!p.is_sliding());
        assert_eq!(host.offsets(MARGIN), [0]);
    }

    #[test]
    fn disabled_view_input_is_claimed() {
        let (mut p, mut host) = setup();
        host.enabled = false;
        assert!(p.on_pointer_event(&mut host, PointerEvent::down(100.0, 100.0, 0)));
    }

    #[test]
    fn open_menu_claims_input_until_closed() {
        let (mut p, mut host) = setup();
        p.open(0);
        let now = settle(&mut p, &mut host, 0);
        assert!(p.is_menu_open());
        assert_eq!(host.last_offset(MARGIN), Some(-300));
        assert_eq!(host.offsets(MARGIN)[1..4], [-30, -60, -90]);

        assert!(p.on_pointer_event(&mut host, PointerEvent::down(500.0, 100.0, now)));
        assert!(p.on_pointer_event(&mut host, PointerEvent::up(501.0, 100.0, now + 5)));
        let now = settle(&mut p, &mut host, now + 5);
        assert!(!p.is_menu_open());
        assert_eq!(host.last_offset(MARGIN), Some(0));
        assert!(!p.on_pointer_event(&mut host, PointerEvent::down(500.0, 100.0, now)));
    }

    #[test]
    fn drag_past_half_viewport_uncovers_menu() {
        let (mut p, mut host) = setup();
        p.on_pointer_event(&mut host, PointerEvent::down(10.0, 100.0, 0));
        p.on_pointer_event(&mut host, PointerEvent::moved(300.0, 100.0, 2_000));
        p.on_pointer_event(&mut host, PointerEvent::moved(520.0, 100.0, 4_000));
        assert_eq!(p.content_offset(), Some(-300));
        p.on_pointer_event(&mut host, PointerEvent::up(520.0, 100.0, 8_000));
        settle(&mut p, &mut host, 8_000);
        assert!(p.is_menu_open());
    }
}
