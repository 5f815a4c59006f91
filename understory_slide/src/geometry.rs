// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-panel travel bounds and orientation.
//!
//! A [`PanelGeometry`] is computed once the host surface has been measured.
//! It answers three questions for the rest of the crate:
//!
//! - where the panel rests when open and when closed,
//! - how a horizontal drag maps onto an offset,
//! - how far inside its travel range any offset must be clamped.
//!
//! ## Offset mapping
//!
//! A drag of `dx` pixels is first turned into *progress* toward revealing the
//! panel (`dx` for a left panel, `-dx` for a right one) and then applied to the
//! offset in whichever direction leads to the open bound:
//!
//! ```
//! use understory_slide::geometry::PanelGeometry;
//! use understory_slide::types::{OpenEdge, Side};
//!
//! // A 400 px left menu whose left margin runs from -400 (closed) to 0 (open).
//! let g = PanelGeometry::new(-400, 0, 400, 1000, Side::Left, OpenEdge::Max).unwrap();
//! assert_eq!(g.drag_offset(g.closed_offset(), 150), -250);
//! assert_eq!(g.drag_offset(g.closed_offset(), 900), 0);
//! assert_eq!(g.drag_offset(g.open_offset(), -50), -50);
//! ```

use crate::config::ThresholdBasis;
use crate::error::{SlideError, SlideResult};
use crate::types::{OpenEdge, Side};

/// Static bounds of one panel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PanelGeometry {
    travel_min: i32,
    travel_max: i32,
    panel_width: i32,
    viewport_width: i32,
    side: Side,
    open_edge: OpenEdge,
}

impl PanelGeometry {
    /// Build geometry, checking that the travel range is non-empty and that
    /// widths are non-negative.
    pub fn new(
        travel_min: i32,
        travel_max: i32,
        panel_width: i32,
        viewport_width: i32,
        side: Side,
        open_edge: OpenEdge,
    ) -> SlideResult<Self> {
        if travel_min > travel_max {
            return Err(SlideError::InvertedTravel {
                min: travel_min,
                max: travel_max,
            });
        }
        if panel_width < 0 {
            return Err(SlideError::NegativeWidth(panel_width));
        }
        if viewport_width < 0 {
            return Err(SlideError::NegativeWidth(viewport_width));
        }
        Ok(Self {
            travel_min,
            travel_max,
            panel_width,
            viewport_width,
            side,
            open_edge,
        })
    }

    /// Geometry for a margin that hides a panel of `panel_width` by going
    /// negative: travel `[-panel_width, 0]`.
    pub fn hidden_by_negative_margin(
        panel_width: i32,
        viewport_width: i32,
        side: Side,
        open_edge: OpenEdge,
    ) -> SlideResult<Self> {
        if panel_width < 0 {
            return Err(SlideError::NegativeWidth(panel_width));
        }
        Self::new(-panel_width, 0, panel_width, viewport_width, side, open_edge)
    }

    /// Lower travel bound.
    pub fn travel_min(&self) -> i32 {
        self.travel_min
    }

    /// Upper travel bound.
    pub fn travel_max(&self) -> i32 {
        self.travel_max
    }

    /// Width of the panel being revealed.
    pub fn panel_width(&self) -> i32 {
        self.panel_width
    }

    /// Width of the host viewport.
    pub fn viewport_width(&self) -> i32 {
        self.viewport_width
    }

    /// Edge the panel slides out from.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Which bound means open.
    pub fn open_edge(&self) -> OpenEdge {
        self.open_edge
    }

    /// Offset at which the panel is fully open.
    pub fn open_offset(&self) -> i32 {
        match self.open_edge {
            OpenEdge::Min => self.travel_min,
            OpenEdge::Max => self.travel_max,
        }
    }

    /// Offset at which the panel is fully closed.
    pub fn closed_offset(&self) -> i32 {
        match self.open_edge {
            OpenEdge::Min => self.travel_max,
            OpenEdge::Max => self.travel_min,
        }
    }

    /// Resting offset for the given visibility.
    pub fn rest_offset(&self, open: bool) -> i32 {
        if open {
            self.open_offset()
        } else {
            self.closed_offset()
        }
    }

    /// `+1` if opening increases the offset, `-1` if it decreases it.
    pub fn toward_open(&self) -> i32 {
        match self.open_edge {
            OpenEdge::Min => -1,
            OpenEdge::Max => 1,
        }
    }

    /// Clamp `offset` into `[travel_min, travel_max]`.
    pub fn clamp(&self, offset: i32) -> i32 {
        offset.clamp(self.travel_min, self.travel_max)
    }

    /// Horizontal delta expressed as progress toward revealing this panel.
    pub fn progress(&self, delta_x: i32) -> i32 {
        delta_x.saturating_mul(self.side.reveal_sign())
    }

    /// Offset after dragging `delta_x` pixels from `anchor`, clamped.
    pub fn drag_offset(&self, anchor: i32, delta_x: i32) -> i32 {
        let moved = self.progress(delta_x).saturating_mul(self.toward_open());
        self.clamp(anchor.saturating_add(moved))
    }

    /// Signed animation step that heads toward the open (`true`) or closed bound.
    pub fn step_toward(&self, open: bool, magnitude: i32) -> i32 {
        let magnitude = magnitude.saturating_abs();
        if open {
            magnitude * self.toward_open()
        } else {
            -magnitude * self.toward_open()
        }
    }

    /// Distance a drag must exceed to snap by distance alone.
    pub fn snap_distance(&self, basis: ThresholdBasis) -> i32 {
        match basis {
            ThresholdBasis::Viewport => self.viewport_width / 2,
            ThresholdBasis::Panel => self.panel_width / 2,
        }
    }
}
