// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch state machine shared by all slide widgets.
//!
//! ## Phases
//!
//! A gesture moves through `Idle → Dragging → Settling → Idle`:
//!
//! - pointer-down records the origin and leaves the gesture `Idle`;
//! - the first move that crosses the touch slop locks a direction and enters `Dragging`;
//! - release hands over to the snap animator (`Settling`);
//! - once the animation settles the state is cleared back to `Idle`.
//!
//! A release without a drag can still enter `Settling` directly (tap-to-close).
//!
//! ## Directions
//!
//! The state is generic over its direction set. Single-panel widgets use the
//! binary [`SlideDirection`]; the left/right layout uses the five-way
//! [`TwoSidedDirection`]. A direction is chosen once per gesture and never
//! changes until the gesture is cleared.
//!
//! ```
//! use kurbo::Point;
//! use understory_slide::gesture::{GesturePhase, GestureState, SlideDirection, crossed_slop};
//!
//! let mut g: GestureState<SlideDirection> = GestureState::default();
//! g.begin(Point::new(100.0, 300.0));
//! let (dx, dy) = g.track(Point::new(140.0, 302.0));
//! assert!(crossed_slop(dx, dy, 16, true));
//! g.lock(SlideDirection::for_visibility(false));
//! assert_eq!(g.phase(), GesturePhase::Dragging);
//! assert_eq!(g.direction(), SlideDirection::Opening);
//! ```

use kurbo::Point;

use crate::types::{Intent, Side};

/// Phase of the gesture state machine.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum GesturePhase {
    /// No slide in progress; the pointer may be down but has not crossed the slop.
    #[default]
    Idle,
    /// A direction is locked and offsets follow the pointer.
    Dragging,
    /// A snap animation is running.
    Settling,
}

/// Direction of a single-panel slide.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SlideDirection {
    /// Nothing locked yet.
    #[default]
    None,
    /// Revealing the panel.
    Opening,
    /// Hiding the panel.
    Closing,
}

impl SlideDirection {
    /// Direction implied by the panel's current visibility.
    pub fn for_visibility(open: bool) -> Self {
        if open { Self::Closing } else { Self::Opening }
    }

    /// The intent, if a direction is locked.
    pub fn intent(self) -> Option<Intent> {
        match self {
            Self::None => None,
            Self::Opening => Some(Intent::Opening),
            Self::Closing => Some(Intent::Closing),
        }
    }
}

/// Direction of a slide in the left/right layout.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TwoSidedDirection {
    /// Nothing locked yet.
    #[default]
    None,
    /// Revealing the left panel.
    ShowLeft,
    /// Revealing the right panel.
    ShowRight,
    /// Hiding the left panel.
    HideLeft,
    /// Hiding the right panel.
    HideRight,
}

impl TwoSidedDirection {
    /// Choose a direction for a move of `(dx, dy)` from the origin.
    ///
    /// An open panel can only be hidden, by dragging back toward its edge. With
    /// both closed, a horizontal drag reveals the panel on the side it moves away
    /// from, provided the vertical delta is still inside the slop. Returns
    /// [`None`](Self::None) until one of these holds.
    pub fn choose(left_open: bool, right_open: bool, dx: i32, dy: i32, slop: i32) -> Self {
        let horizontal = dx.saturating_abs() >= slop;
        if left_open {
            if horizontal && dx < 0 {
                return Self::HideLeft;
            }
        } else if right_open {
            if horizontal && dx > 0 {
                return Self::HideRight;
            }
        } else if horizontal && dy.saturating_abs() < slop {
            if dx > 0 {
                return Self::ShowLeft;
            }
            if dx < 0 {
                return Self::ShowRight;
            }
        }
        Self::None
    }

    /// The panel involved, if a direction is locked.
    pub fn side(self) -> Option<Side> {
        match self {
            Self::None => None,
            Self::ShowLeft | Self::HideLeft => Some(Side::Left),
            Self::ShowRight | Self::HideRight => Some(Side::Right),
        }
    }

    /// The intent, if a direction is locked.
    pub fn intent(self) -> Option<Intent> {
        match self {
            Self::None => None,
            Self::ShowLeft | Self::ShowRight => Some(Intent::Opening),
            Self::HideLeft | Self::HideRight => Some(Intent::Closing),
        }
    }
}

/// Whether a move of `(dx, dy)` counts as a horizontal slide.
///
/// With `lock_vertical`, a move that has already drifted a slop's worth
/// vertically is treated as a scroll and rejected.
pub fn crossed_slop(dx: i32, dy: i32, slop: i32, lock_vertical: bool) -> bool {
    dx.saturating_abs() >= slop && (!lock_vertical || dy.saturating_abs() < slop)
}

/// Pointer positions and slide state for the active gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState<D = SlideDirection> {
    down: Point,
    last: Point,
    up_x: f64,
    sliding: bool,
    direction: D,
    phase: GesturePhase,
}

impl<D: Copy + Default> GestureState<D> {
    /// Start a gesture at `pos`.
    pub fn begin(&mut self, pos: Point) {
        self.down = pos;
        self.last = pos;
        self.up_x = pos.x;
        self.sliding = false;
        self.direction = D::default();
        self.phase = GesturePhase::Idle;
    }

    /// Record a move and return the whole-pixel delta since pointer-down.
    pub fn track(&mut self, pos: Point) -> (i32, i32) {
        self.last = pos;
        self.delta_to(pos)
    }

    /// Record the release and return the horizontal whole-pixel delta.
    pub fn finish(&mut self, pos: Point) -> i32 {
        self.last = pos;
        self.up_x = pos.x;
        self.delta_to(pos).0
    }

    /// Whole-pixel delta from the origin to `pos`, truncated toward zero.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Offsets are whole pixels; the cast truncates and saturates."
    )]
    pub fn delta_to(&self, pos: Point) -> (i32, i32) {
        let delta = pos - self.down;
        (delta.x as i32, delta.y as i32)
    }

    /// Lock a direction and enter [`GesturePhase::Dragging`].
    pub fn lock(&mut self, direction: D) {
        self.direction = direction;
        self.sliding = true;
        self.phase = GesturePhase::Dragging;
    }

    /// Enter [`GesturePhase::Settling`].
    ///
    /// `sliding` is left as is: a tap that settles a panel never slid.
    pub fn settle(&mut self) {
        self.phase = GesturePhase::Settling;
    }

    /// Forget the gesture and return to [`GesturePhase::Idle`].
    pub fn clear(&mut self) {
        *self = Self {
            down: Point::ZERO,
            last: Point::ZERO,
            up_x: 0.0,
            sliding: false,
            direction: D::default(),
            phase: GesturePhase::Idle,
        };
    }

    /// Pointer-down position.
    pub fn down(&self) -> Point {
        self.down
    }

    /// Latest recorded position.
    pub fn last(&self) -> Point {
        self.last
    }

    /// Horizontal release position.
    pub fn up_x(&self) -> f64 {
        self.up_x
    }

    /// True from the moment a direction locks until the panel settles.
    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    /// Locked direction.
    pub fn direction(&self) -> D {
        self.direction
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }
}
