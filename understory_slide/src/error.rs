// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup-time errors.
//!
//! Gesture handling itself never fails: offsets are clamped and missing data
//! defaults to a no-op. Only measuring a host surface and validating a
//! [`SlideConfig`](crate::config::SlideConfig) can report an error.

use thiserror::Error;

/// Errors raised while building geometry or validating configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideError {
    /// The travel range is empty (`min > max`).
    #[error("inverted travel range: min {min} > max {max}")]
    InvertedTravel {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },

    /// A panel or viewport width is negative.
    #[error("negative width: {0}")]
    NegativeWidth(i32),

    /// The host surface has fewer children than the widget needs.
    #[error("missing child {index}: surface has {count} children")]
    MissingChild {
        /// Index the widget expected.
        index: usize,
        /// Number of children the host reported.
        count: usize,
    },

    /// A snap animation would never advance.
    #[error("snap animation step and period must be non-zero")]
    ZeroStepPeriod,
}

/// Result type alias for setup operations.
pub type SlideResult<T> = Result<T, SlideError>;
