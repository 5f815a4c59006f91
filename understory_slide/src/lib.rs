// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slide --heading-base-level=0

//! Understory Slide: drag-to-reveal panels for touch UIs.
//!
//! ## Overview
//!
//! This crate turns a single-pointer drag into the margin offset of a sliding
//! panel, decides on release whether the panel snaps open or closed, and steps
//! the snap animation from host-driven ticks. It does not render, lay out, or
//! own views: everything it needs from the UI comes through the
//! [`SlideHost`](crate::host::SlideHost) trait.
//!
//! ## Widgets
//!
//! - [`SingleMenuController`](crate::controller::SingleMenuController): a
//!   wide menu that slides in from the left over the content.
//! - [`StandaloneSlidePanel`](crate::controller::StandaloneSlidePanel): content
//!   that slides aside to uncover a menu, layered over an interactive view.
//! - [`TwoSidedMenuController`](crate::controller::TwoSidedMenuController):
//!   content between a left and a right menu, one visible at a time.
//!
//! Per-widget tunables live in [`SlideConfig`](crate::config::SlideConfig),
//! with a preset for each widget.
//!
//! ## Building blocks
//!
//! The controllers are thin compositions of pieces that can be used on their own:
//!
//! - [`GestureState`](crate::gesture::GestureState): origin, deltas, and the
//!   direction locked once the touch slop is crossed.
//! - [`VelocitySampler`](crate::velocity::VelocitySampler): release speed from a
//!   pluggable [`VelocityTracker`](crate::velocity::VelocityTracker).
//! - [`decide`](crate::snap::decide): the pure open/closed decision.
//! - [`SnapAnimator`](crate::animator::SnapAnimator): fixed-step animation
//!   polled with the current time.
//!
//! ## Example
//!
//! ```
//! use understory_slide::config::SlideConfig;
//! use understory_slide::controller::StandaloneSlidePanel;
//! use understory_slide::host::{PanelChild, SlideHost};
//! use understory_slide::types::{MarginTarget, PointerEvent};
//!
//! struct Surface {
//!     children: [PanelChild; 2],
//!     content_right_margin: i32,
//! }
//!
//! impl SlideHost for Surface {
//!     fn children(&self) -> &[PanelChild] {
//!         &self.children
//!     }
//!     fn measured_width(&self) -> i32 {
//!         720
//!     }
//!     fn scaled_touch_slop(&self) -> i32 {
//!         16
//!     }
//!     fn set_offset(&mut self, _target: MarginTarget, value: i32) {
//!         self.content_right_margin = value;
//!     }
//! }
//!
//! let mut surface = Surface {
//!     children: [PanelChild { width: 240 }, PanelChild { width: 720 }],
//!     content_right_margin: 0,
//! };
//! let mut panel = StandaloneSlidePanel::new(SlideConfig::standalone());
//! panel.measure(&mut surface).unwrap();
//!
//! // A quick flick to the right uncovers the menu.
//! panel.on_pointer_event(&mut surface, PointerEvent::down(20.0, 400.0, 0));
//! panel.on_pointer_event(&mut surface, PointerEvent::moved(60.0, 401.0, 16));
//! panel.on_pointer_event(&mut surface, PointerEvent::up(120.0, 401.0, 32));
//!
//! while let Some(at) = panel.next_frame_at() {
//!     panel.tick(&mut surface, at);
//! }
//! assert!(panel.is_menu_open());
//! assert_eq!(surface.content_right_margin, -240);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animator;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod snap;
pub mod types;
pub mod velocity;
