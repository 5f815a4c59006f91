// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host surface seam.
//!
//! Controllers never touch views directly. They read measurements from a
//! [`SlideHost`] and push margin offsets and visibility changes back into it.
//! Implement it on top of whatever owns the real views.
//!
//! ## Child order
//!
//! Children are addressed by position:
//!
//! | widget | 0 | 1 | 2 |
//! |---|---|---|---|
//! | single menu, standalone panel | menu | content | |
//! | two-sided layout | left menu | right menu | content |

use crate::types::{MarginTarget, Side, TouchSource};

/// Measured metrics of one child of the host surface.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PanelChild {
    /// Measured width, px.
    pub width: i32,
}

/// A surface hosting slide panels.
pub trait SlideHost {
    /// Children in layout order.
    fn children(&self) -> &[PanelChild];

    /// Width of the surface, px.
    fn measured_width(&self) -> i32;

    /// Distance a pointer may wander before a drag is recognized, px.
    fn scaled_touch_slop(&self) -> i32;

    /// Apply a margin offset and schedule a repaint.
    fn set_offset(&mut self, target: MarginTarget, value: i32);

    /// Show or hide a child.
    fn set_child_shown(&mut self, _child: usize, _shown: bool) {}

    /// Pin `child` to `side` of the surface so the opposite margin can move it.
    fn set_content_anchor(&mut self, _child: usize, _side: Side) {}

    /// Drop focus and pressed state from a bound view while panels move over it.
    fn unfocus(&mut self, _source: TouchSource) {}

    /// Whether a bound view currently accepts input.
    fn is_enabled(&self, _source: TouchSource) -> bool {
        true
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A recording host for controller tests.

    use alloc::vec::Vec;

    use super::*;

    /// Everything a controller asked of the host, in order.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum HostCall {
        Offset(MarginTarget, i32),
        Shown(usize, bool),
        Anchor(usize, Side),
        Unfocus(TouchSource),
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingHost {
        pub(crate) children: Vec<PanelChild>,
        pub(crate) width: i32,
        pub(crate) slop: i32,
        pub(crate) enabled: bool,
        pub(crate) calls: Vec<HostCall>,
    }

    impl RecordingHost {
        pub(crate) fn new(width: i32, slop: i32, child_widths: &[i32]) -> Self {
            Self {
                children: child_widths.iter().map(|&width| PanelChild { width }).collect(),
                width,
                slop,
                enabled: true,
                calls: Vec::new(),
            }
        }

        /// Offsets published to `target`, in order.
        pub(crate) fn offsets(&self, target: MarginTarget) -> Vec<i32> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    HostCall::Offset(t, v) if *t == target => Some(*v),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn last_offset(&self, target: MarginTarget) -> Option<i32> {
            self.offsets(target).last().copied()
        }

        pub(crate) fn unfocus_count(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, HostCall::Unfocus(_)))
                .count()
        }
    }

    impl SlideHost for RecordingHost {
        fn children(&self) -> &[PanelChild] {
            &self.children
        }

        fn measured_width(&self) -> i32 {
            self.width
        }

        fn scaled_touch_slop(&self) -> i32 {
            self.slop
        }

        fn set_offset(&mut self, target: MarginTarget, value: i32) {
            self.calls.push(HostCall::Offset(target, value));
        }

        fn set_child_shown(&mut self, child: usize, shown: bool) {
            self.calls.push(HostCall::Shown(child, shown));
        }

        fn set_content_anchor(&mut self, child: usize, side: Side) {
            self.calls.push(HostCall::Anchor(child, side));
        }

        fn unfocus(&mut self, source: TouchSource) {
            self.calls.push(HostCall::Unfocus(source));
        }

        fn is_enabled(&self, _source: TouchSource) -> bool {
            self.enabled
        }
    }
}
