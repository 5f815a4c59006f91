// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide panel over a scrolling list.
//!
//! Shows which touches the panel claims from the list it is bound to: a
//! vertical scroll passes through, a horizontal flick slides the content
//! aside, and once the menu is open every touch is claimed.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example standalone`

use understory_slide::config::SlideConfig;
use understory_slide::controller::StandaloneSlidePanel;
use understory_slide::host::{PanelChild, SlideHost};
use understory_slide::types::{MarginTarget, PointerEvent, TouchSource};

const LIST: TouchSource = TouchSource(1);

struct Window {
    children: [PanelChild; 2],
    content_margin: i32,
    menu_shown: bool,
    list_focused: bool,
}

impl SlideHost for Window {
    fn children(&self) -> &[PanelChild] {
        &self.children
    }

    fn measured_width(&self) -> i32 {
        720
    }

    fn scaled_touch_slop(&self) -> i32 {
        16
    }

    fn set_offset(&mut self, _target: MarginTarget, value: i32) {
        self.content_margin = value;
    }

    fn set_child_shown(&mut self, child: usize, shown: bool) {
        if child == 0 && shown != self.menu_shown {
            println!("  menu shown: {shown}");
            self.menu_shown = shown;
        }
    }

    fn unfocus(&mut self, source: TouchSource) {
        if self.list_focused {
            println!("  list {source:?} loses focus");
            self.list_focused = false;
        }
    }
}

fn feed(panel: &mut StandaloneSlidePanel, window: &mut Window, events: &[PointerEvent]) {
    for &event in events {
        let claimed = panel.on_pointer_event(window, event);
        println!(
            "  {:?} at ({}, {}): claimed {claimed}, content margin {}",
            event.kind, event.position.x, event.position.y, window.content_margin
        );
    }
    while let Some(at) = panel.next_frame_at() {
        panel.tick(window, at);
    }
}

fn main() {
    env_logger::init();

    let mut window = Window {
        children: [PanelChild { width: 260 }, PanelChild { width: 720 }],
        content_margin: 0,
        menu_shown: false,
        list_focused: true,
    };
    let mut panel = StandaloneSlidePanel::new(SlideConfig::standalone());
    panel.bind_touch_source(LIST);
    if let Err(err) = panel.measure(&mut window) {
        eprintln!("cannot lay out panel: {err}");
        return;
    }

    println!("vertical scroll:");
    feed(
        &mut panel,
        &mut window,
        &[
            PointerEvent::down(300.0, 600.0, 0),
            PointerEvent::moved(305.0, 500.0, 40),
            PointerEvent::up(306.0, 420.0, 80),
        ],
    );

    println!("horizontal flick:");
    feed(
        &mut panel,
        &mut window,
        &[
            PointerEvent::down(40.0, 400.0, 1_000),
            PointerEvent::moved(90.0, 402.0, 1_020),
            PointerEvent::moved(160.0, 403.0, 1_040),
            PointerEvent::up(200.0, 403.0, 1_060),
        ],
    );
    println!("menu open: {}, content margin {}", panel.is_menu_open(), window.content_margin);

    println!("tap while open:");
    feed(
        &mut panel,
        &mut window,
        &[
            PointerEvent::down(500.0, 300.0, 3_000),
            PointerEvent::up(500.0, 300.0, 3_050),
        ],
    );
    println!("menu open: {}, content margin {}", panel.is_menu_open(), window.content_margin);
}
