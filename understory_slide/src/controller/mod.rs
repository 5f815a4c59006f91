// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide widget controllers.
//!
//! ## Overview
//!
//! Each controller owns the gesture state, a velocity sampler, and one animated
//! margin per panel. The host feeds it pointer events and timer ticks; the
//! controller answers with offsets through [`SlideHost::set_offset`].
//!
//! - [`SingleMenuController`]: a wide left menu whose own margin slides.
//! - [`StandaloneSlidePanel`]: content that slides right to uncover a menu.
//! - [`TwoSidedMenuController`]: content between a left and a right menu.
//!
//! ## Driving a controller
//!
//! 1. Call `measure` once the host is laid out, and again after any resize.
//! 2. Forward every pointer event to `on_pointer_event`. The returned flag says
//!    whether the widget claimed the event.
//! 3. While `next_frame_at` is `Some(t)`, call `tick` at or after `t`.
//!
//! A pointer-down while a panel is still snapping stops the animation where it
//! is. Dragging continues from there; a plain tap lets the snap finish.

mod one_sided;
mod single;
mod standalone;
mod track;
mod two_sided;

pub use single::SingleMenuController;
pub use standalone::StandaloneSlidePanel;
pub use two_sided::TwoSidedMenuController;

use crate::host::SlideHost;
use crate::types::TouchSource;

/// Menu child of the one-panel widgets.
pub(crate) const MENU: usize = 0;
/// Content child of the one-panel widgets.
pub(crate) const CONTENT: usize = 1;

/// Consumption rule for widgets layered over an interactive view.
///
/// A disabled bound view never sees input. While sliding the bound view is
/// unfocused on every event.
pub(crate) fn consumes(
    host: &mut impl SlideHost,
    source: Option<TouchSource>,
    sliding: bool,
    open: bool,
) -> bool {
    if let Some(source) = source {
        if !host.is_enabled(source) {
            return true;
        }
        if sliding {
            host.unfocus(source);
        }
    }
    sliding || open
}
