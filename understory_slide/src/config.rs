// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for the slide widgets and per-widget presets.
//!
//! Every widget in this crate runs the same gesture and snap core. What differs
//! between them is captured here: how far a drag must travel to count, how fast
//! a fling must be, how big each animation step is, and how often it fires.
//!
//! ```
//! use understory_slide::config::{SlideConfig, ThresholdBasis};
//!
//! let config = SlideConfig::two_sided();
//! assert_eq!(config.snap.threshold, ThresholdBasis::Panel);
//! assert_eq!(config.step_period_ms, 15);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{SlideError, SlideResult};

/// Fling speed, in px/s, above which a release snaps regardless of distance.
pub const SNAP_VELOCITY: f64 = 200.0;

/// Offset change per animation step, in px.
pub const DEFAULT_STEP: i32 = 30;

/// Animation step period for the single-pane widgets, in ms.
pub const DEFAULT_STEP_PERIOD_MS: u64 = 20;

/// Animation step period for the two-sided layout, in ms.
pub const TWO_SIDED_STEP_PERIOD_MS: u64 = 15;

/// Space left uncovered to the right of the single-menu widget's menu, in px.
pub const DEFAULT_MENU_PADDING: i32 = 80;

/// Window over which release velocity is estimated, in ms.
pub const VELOCITY_WINDOW_MS: u64 = 1000;

/// What the distance threshold of a snap is measured against.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThresholdBasis {
    /// Half the viewport width.
    Viewport,
    /// Half the width of the panel being moved.
    Panel,
}

/// Rules consumed by [`snap::decide`](crate::snap::decide).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapRules {
    /// Release speed (px/s) that must be strictly exceeded for a fling snap.
    pub snap_velocity: f64,
    /// Basis of the distance threshold.
    pub threshold: ThresholdBasis,
    /// Extra distance credited to a closing drag (a panel narrower than the viewport).
    pub padding_allowance: i32,
    /// Ignore a fling when the drag ended up behind where it started.
    ///
    /// With this set, pulling a closed panel out and flicking it back toward
    /// its edge leaves it closed. The one-panel presets turn it on.
    pub fling_requires_progress: bool,
}

impl Default for SnapRules {
    fn default() -> Self {
        Self {
            snap_velocity: SNAP_VELOCITY,
            threshold: ThresholdBasis::Viewport,
            padding_allowance: 0,
            fling_requires_progress: false,
        }
    }
}

/// Full configuration of one slide widget.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideConfig {
    /// Snap decision rules.
    pub snap: SnapRules,
    /// Magnitude of each animation step, in px.
    pub step: i32,
    /// Delay between animation steps, in ms.
    pub step_period_ms: u64,
    /// Gap kept beside the menu when the panel width derives from the viewport.
    pub menu_padding: i32,
    /// Reject a drag as a slide when it crosses the vertical slop first.
    pub lock_vertical: bool,
    /// Velocity estimation window, in ms.
    pub velocity_window_ms: u64,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self::standalone()
    }
}

impl SlideConfig {
    /// Preset for the full-screen single menu: viewport threshold, the menu
    /// padding credited to closing drags, no vertical lock.
    pub fn single_menu() -> Self {
        Self {
            snap: SnapRules {
                padding_allowance: DEFAULT_MENU_PADDING,
                fling_requires_progress: true,
                ..SnapRules::default()
            },
            step: DEFAULT_STEP,
            step_period_ms: DEFAULT_STEP_PERIOD_MS,
            menu_padding: DEFAULT_MENU_PADDING,
            lock_vertical: false,
            velocity_window_ms: VELOCITY_WINDOW_MS,
        }
    }

    /// Preset for the reusable slide panel: viewport threshold with vertical lock.
    pub fn standalone() -> Self {
        Self {
            snap: SnapRules {
                fling_requires_progress: true,
                ..SnapRules::default()
            },
            step: DEFAULT_STEP,
            step_period_ms: DEFAULT_STEP_PERIOD_MS,
            menu_padding: 0,
            lock_vertical: true,
            velocity_window_ms: VELOCITY_WINDOW_MS,
        }
    }

    /// Preset for the left/right layout: panel-relative threshold, faster steps.
    pub fn two_sided() -> Self {
        Self {
            snap: SnapRules {
                threshold: ThresholdBasis::Panel,
                ..SnapRules::default()
            },
            step: DEFAULT_STEP,
            step_period_ms: TWO_SIDED_STEP_PERIOD_MS,
            menu_padding: 0,
            lock_vertical: true,
            velocity_window_ms: VELOCITY_WINDOW_MS,
        }
    }

    /// Check that the animation can make progress.
    pub fn validate(&self) -> SlideResult<()> {
        if self.step == 0 || self.step_period_ms == 0 {
            return Err(SlideError::ZeroStepPeriod);
        }
        if self.menu_padding < 0 {
            return Err(SlideError::NegativeWidth(self.menu_padding));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_where_widgets_differ() {
        let single = SlideConfig::single_menu();
        let standalone = SlideConfig::standalone();
        let two = SlideConfig::two_sided();

        assert_eq!(single.snap.padding_allowance, 80);
        assert_eq!(standalone.snap.padding_allowance, 0);
        assert!(!single.lock_vertical);
        assert!(standalone.lock_vertical && two.lock_vertical);
        assert_eq!(single.step_period_ms, 20);
        assert_eq!(two.step_period_ms, 15);
        assert_eq!(two.snap.threshold, ThresholdBasis::Panel);
        assert_eq!(single.snap.snap_velocity, 200.0);
    }

    #[test]
    fn only_one_panel_presets_gate_backward_flings() {
        assert!(SlideConfig::single_menu().snap.fling_requires_progress);
        assert!(SlideConfig::standalone().snap.fling_requires_progress);
        assert!(!SlideConfig::two_sided().snap.fling_requires_progress);
        assert!(!SnapRules::default().fling_requires_progress);
    }

    #[test]
    fn validate_rejects_stalled_animation() {
        let mut config = SlideConfig::default();
        assert_eq!(config.validate(), Ok(()));
        config.step = 0;
        assert_eq!(config.validate(), Err(SlideError::ZeroStepPeriod));
        config.step = 30;
        config.step_period_ms = 0;
        assert_eq!(config.validate(), Err(SlideError::ZeroStepPeriod));
    }

    #[test]
    fn validate_rejects_negative_padding() {
        let config = SlideConfig {
            menu_padding: -1,
            ..SlideConfig::single_menu()
        };
        assert_eq!(config.validate(), Err(SlideError::NegativeWidth(-1)));
    }
}
