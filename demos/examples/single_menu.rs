// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-screen menu driven by a scripted drag.
//!
//! A slow drag past half the screen opens the menu; a tap on the strip of
//! content left beside it closes it again.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example single_menu`

use understory_slide::config::SlideConfig;
use understory_slide::controller::SingleMenuController;
use understory_slide::host::{PanelChild, SlideHost};
use understory_slide::types::{MarginTarget, PointerEvent};

struct Screen {
    children: Vec<PanelChild>,
    width: i32,
}

impl SlideHost for Screen {
    fn children(&self) -> &[PanelChild] {
        &self.children
    }

    fn measured_width(&self) -> i32 {
        self.width
    }

    fn scaled_touch_slop(&self) -> i32 {
        24
    }

    fn set_offset(&mut self, target: MarginTarget, value: i32) {
        println!("  {:?} margin of child {} = {value}", target.edge, target.child);
    }
}

fn run_animation(menu: &mut SingleMenuController, screen: &mut Screen, mut now: u64) -> u64 {
    while let Some(at) = menu.next_frame_at() {
        now = at;
        menu.tick(screen, now);
    }
    now
}

fn main() {
    env_logger::init();

    let width = 480;
    let config = SlideConfig::single_menu();
    let mut screen = Screen {
        children: vec![
            PanelChild {
                width: width - config.menu_padding,
            },
            PanelChild { width },
        ],
        width,
    };
    let mut menu = SingleMenuController::new(config);

    println!("measure:");
    if let Err(err) = menu.measure(&mut screen) {
        eprintln!("cannot lay out menu: {err}");
        return;
    }

    println!("drag right across the screen:");
    menu.on_pointer_event(&mut screen, PointerEvent::down(10.0, 300.0, 0));
    for step in 1..=6_u32 {
        let x = 10.0 + f64::from(step) * 50.0;
        let t = u64::from(step) * 400;
        menu.on_pointer_event(&mut screen, PointerEvent::moved(x, 300.0, t));
    }
    menu.on_pointer_event(&mut screen, PointerEvent::up(310.0, 300.0, 4_000));
    println!("release, phase {:?}:", menu.phase());
    let now = run_animation(&mut menu, &mut screen, 4_000);
    println!("menu open: {}", menu.is_menu_open());

    println!("tap the content strip:");
    menu.on_pointer_event(&mut screen, PointerEvent::down(450.0, 200.0, now + 500));
    menu.on_pointer_event(&mut screen, PointerEvent::up(452.0, 200.0, now + 560));
    run_animation(&mut menu, &mut screen, now + 560);
    println!("menu open: {}", menu.is_menu_open());
}
