// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release decision: snap open or snap closed.
//!
//! [`decide`] is a pure function of the release. A drag snaps to its intended
//! state when it has travelled past the distance threshold or when the release
//! is a fling faster than [`SnapRules::snap_velocity`]. Otherwise the panel
//! returns to where the gesture started.
//!
//! A fling counts in whichever direction it ends. Rules with
//! [`SnapRules::fling_requires_progress`] set ignore a fling when the drag
//! finished behind its starting point.
//!
//! ```
//! use understory_slide::config::SnapRules;
//! use understory_slide::geometry::PanelGeometry;
//! use understory_slide::snap::decide;
//! use understory_slide::types::{Intent, OpenEdge, Side};
//!
//! let g = PanelGeometry::new(-920, 0, 920, 1000, Side::Left, OpenEdge::Max).unwrap();
//! let rules = SnapRules::default();
//!
//! // Short, fast drag: opens on velocity.
//! assert!(decide(&g, &rules, Intent::Opening, 100, 250.0).open);
//! // Short, slow drag: falls back closed.
//! assert!(!decide(&g, &rules, Intent::Opening, 50, 10.0).open);
//! ```

use crate::config::SnapRules;
use crate::geometry::PanelGeometry;
use crate::types::{Intent, SnapTarget};

/// Decide where a released panel settles.
///
/// - `intent`: direction the gesture was heading when it locked.
/// - `drag_delta_x`: release position minus pointer-down position, in px.
/// - `velocity`: release speed in px/s (magnitude).
pub fn decide(
    geometry: &PanelGeometry,
    rules: &SnapRules,
    intent: Intent,
    drag_delta_x: i32,
    velocity: f64,
) -> SnapTarget {
    let progress = geometry.progress(drag_delta_x);
    let distance = geometry.snap_distance(rules.threshold);
    let fling = velocity > rules.snap_velocity;
    let gated = rules.fling_requires_progress;

    let open = match intent {
        Intent::Opening => progress > distance || (fling && (!gated || progress >= 0)),
        Intent::Closing => {
            let closed = progress
                .saturating_neg()
                .saturating_add(rules.padding_allowance)
                > distance
                || (fling && (!gated || progress <= 0));
            !closed
        }
    };

    SnapTarget {
        target_offset: geometry.rest_offset(open),
        open,
    }
}
