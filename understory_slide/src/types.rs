// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by the slide widgets: pointer events, sides, margins, and flags.
//!
//! ## Overview
//!
//! These types describe what flows between the host surface and the controllers.
//! Pointer events come in, [`MarginTarget`] offsets go out.

use kurbo::Point;

/// Kind of a pointer event.
///
/// Exactly one pointer is tracked; secondary pointers are the host's concern.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// The pointer touched the surface.
    Down,
    /// The pointer moved while touching.
    Move,
    /// The pointer was lifted.
    Up,
}

/// A single pointer event, in surface coordinates.
///
/// Fed to the controllers' `on_pointer_event`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Where it happened, in raw (screen) pixels.
    pub position: Point,
    /// Event timestamp in milliseconds. Must not decrease within a gesture.
    pub time_ms: u64,
}

impl PointerEvent {
    /// A [`PointerKind::Down`] event at `(x, y)`.
    pub fn down(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Point::new(x, y),
            time_ms,
        }
    }

    /// A [`PointerKind::Move`] event at `(x, y)`.
    pub fn moved(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Point::new(x, y),
            time_ms,
        }
    }

    /// A [`PointerKind::Up`] event at `(x, y)`.
    pub fn up(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Point::new(x, y),
            time_ms,
        }
    }
}

/// Horizontal side of the surface.
///
/// For a panel this is the edge it slides out from; a left panel is revealed by
/// dragging toward +x, a right panel by dragging toward -x.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The left edge.
    Left,
    /// The right edge.
    Right,
}

impl Side {
    /// `+1` when dragging toward +x reveals a panel on this side, `-1` otherwise.
    #[inline]
    pub const fn reveal_sign(self) -> i32 {
        match self {
            Self::Left => 1,
            Self::Right => -1,
        }
    }

    /// The other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Which travel bound of a panel corresponds to "fully open".
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenEdge {
    /// Open at `travel_min`; opening decreases the offset.
    Min,
    /// Open at `travel_max`; opening increases the offset.
    Max,
}

/// Whether a gesture or snap moves a panel toward open or toward closed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Intent {
    /// Revealing the panel.
    Opening,
    /// Hiding the panel.
    Closing,
}

/// Which margin of a child the host should apply an offset to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MarginEdge {
    /// The child's left margin.
    Left,
    /// The child's right margin.
    Right,
}

/// A child margin driven by a controller.
///
/// `child` indexes [`SlideHost::children`](crate::host::SlideHost::children).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MarginTarget {
    /// Positional index of the child in the host surface.
    pub child: usize,
    /// Which of its margins moves.
    pub edge: MarginEdge,
}

impl MarginTarget {
    /// Target the left margin of `child`.
    pub const fn left(child: usize) -> Self {
        Self {
            child,
            edge: MarginEdge::Left,
        }
    }

    /// Target the right margin of `child`.
    pub const fn right(child: usize) -> Self {
        Self {
            child,
            edge: MarginEdge::Right,
        }
    }
}

/// Handle for the view whose touches drive a controller.
///
/// The host assigns the value; controllers only hand it back through
/// [`SlideHost::unfocus`](crate::host::SlideHost::unfocus) and
/// [`SlideHost::is_enabled`](crate::host::SlideHost::is_enabled).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TouchSource(pub u32);

/// Output of the snap decision: where to settle and what visibility results.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SnapTarget {
    /// Offset the panel comes to rest at (one of its travel bounds).
    pub target_offset: i32,
    /// Whether the panel is open once settled there.
    pub open: bool,
}

bitflags::bitflags! {
    /// Set of side panels that are fully open.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// The left panel is open.
        const LEFT  = 0b0000_0001;
        /// The right panel is open.
        const RIGHT = 0b0000_0010;
    }
}

impl From<Side> for Sides {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Self::LEFT,
            Side::Right => Self::RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_sign_follows_side() {
        assert_eq!(Side::Left.reveal_sign(), 1);
        assert_eq!(Side::Right.reveal_sign(), -1);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }

    #[test]
    fn sides_from_side() {
        let mut open = Sides::empty();
        open |= Side::Right.into();
        assert!(open.contains(Sides::RIGHT));
        assert!(!open.contains(Sides::LEFT));
    }

    #[test]
    fn pointer_constructors_set_kind() {
        assert_eq!(PointerEvent::down(1.0, 2.0, 3).kind, PointerKind::Down);
        assert_eq!(PointerEvent::moved(1.0, 2.0, 3).kind, PointerKind::Move);
        let up = PointerEvent::up(4.0, 5.0, 6);
        assert_eq!(up.kind, PointerKind::Up);
        assert_eq!(up.position, Point::new(4.0, 5.0));
        assert_eq!(up.time_ms, 6);
    }
}
