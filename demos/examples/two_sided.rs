// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content between a left and a right menu.
//!
//! Swipes reveal the menu on the side the content moves away from. Host calls
//! are printed as they happen, including the visibility and anchoring changes
//! made when a menu is revealed.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example two_sided`

use understory_slide::config::SlideConfig;
use understory_slide::controller::TwoSidedMenuController;
use understory_slide::host::{PanelChild, SlideHost};
use understory_slide::types::{MarginTarget, PointerEvent, Side};

const NAMES: [&str; 3] = ["left menu", "right menu", "content"];

struct Layout {
    children: [PanelChild; 3],
}

impl SlideHost for Layout {
    fn children(&self) -> &[PanelChild] {
        &self.children
    }

    fn measured_width(&self) -> i32 {
        1080
    }

    fn scaled_touch_slop(&self) -> i32 {
        24
    }

    fn set_offset(&mut self, target: MarginTarget, value: i32) {
        println!("  {} {:?} margin = {value}", NAMES[target.child], target.edge);
    }

    fn set_child_shown(&mut self, child: usize, shown: bool) {
        println!("  {} shown: {shown}", NAMES[child]);
    }

    fn set_content_anchor(&mut self, child: usize, side: Side) {
        println!("  {} anchored {side:?}", NAMES[child]);
    }
}

fn swipe(
    menus: &mut TwoSidedMenuController,
    layout: &mut Layout,
    from: f64,
    to: f64,
    t0: u64,
) -> u64 {
    menus.on_pointer_event(layout, PointerEvent::down(from, 900.0, t0));
    let mid = (from + to) / 2.0;
    menus.on_pointer_event(layout, PointerEvent::moved(mid, 902.0, t0 + 30));
    menus.on_pointer_event(layout, PointerEvent::up(to, 903.0, t0 + 60));
    let mut now = t0 + 60;
    while let Some(at) = menus.next_frame_at() {
        now = at;
        menus.tick(layout, now);
    }
    println!("  open: {:?}", menus.open_sides());
    now
}

fn main() {
    env_logger::init();

    let mut layout = Layout {
        children: [
            PanelChild { width: 600 },
            PanelChild { width: 480 },
            PanelChild { width: 1080 },
        ],
    };
    let mut menus = TwoSidedMenuController::new(SlideConfig::two_sided());
    if let Err(err) = menus.measure(&mut layout) {
        eprintln!("cannot lay out menus: {err}");
        return;
    }

    println!("swipe right, revealing the left menu:");
    let now = swipe(&mut menus, &mut layout, 100.0, 400.0, 0);
    println!("swipe left, hiding it again:");
    let now = swipe(&mut menus, &mut layout, 700.0, 300.0, now + 500);
    println!("swipe left, revealing the right menu:");
    let now = swipe(&mut menus, &mut layout, 900.0, 600.0, now + 500);
    println!("open the left menu from code:");
    menus.open_left(&mut layout, now + 500);
    while let Some(at) = menus.next_frame_at() {
        menus.tick(&mut layout, at);
    }
    println!("  open: {:?}", menus.open_sides());
}
