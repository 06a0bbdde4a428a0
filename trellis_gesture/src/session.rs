// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session state and transition outcome types.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use trellis_hit::Edge;
use trellis_registry::Axis;

/// Which axes the pan tracker follows during a drag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum DragAxis {
    /// Track horizontal movement only.
    X,
    /// Track vertical movement only. The common case for stacked lists.
    #[default]
    Y,
    /// Track both axes.
    Any,
}

impl DragAxis {
    /// The axes this mode tracks, in x-then-y order.
    #[must_use]
    pub fn tracked(self) -> &'static [Axis] {
        match self {
            Self::X => &[Axis::X],
            Self::Y => &[Axis::Y],
            Self::Any => &[Axis::X, Axis::Y],
        }
    }

    fn mask(self, v: Vec2) -> Vec2 {
        match self {
            Self::X => Vec2::new(v.x, 0.0),
            Self::Y => Vec2::new(0.0, v.y),
            Self::Any => v,
        }
    }
}

/// Cumulative pan state for one drag session.
///
/// `origin` is the dragged item's absolute resting position, captured when
/// the drag starts. `translation` accumulates pointer movement relative to
/// the first tracked pointer position (the anchor), so the very first move
/// of a session contributes no displacement.
#[derive(Clone, Debug, PartialEq)]
pub struct PanVector {
    /// Absolute resting position of the dragged item at drag start.
    pub origin: Point,
    /// Cumulative pointer movement since the anchor, unmasked.
    pub translation: Vec2,
    pub(crate) anchor: Option<Point>,
}

impl PanVector {
    pub(crate) fn new(origin: Point) -> Self {
        Self {
            origin,
            translation: Vec2::ZERO,
            anchor: None,
        }
    }

    pub(crate) fn track(&mut self, point: Point) {
        let anchor = *self.anchor.get_or_insert(point);
        self.translation = point - anchor;
    }

    /// The pan's current absolute position: origin plus the translation
    /// masked to the tracked axes.
    #[must_use]
    pub fn position(&self, axis: DragAxis) -> Point {
        self.origin + axis.mask(self.translation)
    }
}

/// The ephemeral state of one active drag.
///
/// Owned exclusively by the arbiter; the autoscroll layer only reads
/// `current_zone` and `current_edge`, and the drop callback receives a
/// borrowed snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<Z, I> {
    /// The item being dragged.
    pub item: I,
    /// The zone the item was resting in when the drag started.
    pub origin_zone: Z,
    /// Pan tracking state.
    pub pan: PanVector,
    /// The zone currently under the pointer, if any.
    pub current_zone: Option<Z>,
    /// The edge of the current zone the pointer is near, if any.
    pub current_edge: Option<Edge>,
}

/// Observable lifecycle phase of the arbiter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DragPhase {
    /// No session; ready to start a drag.
    Idle,
    /// A session is active and tracking pointer movement.
    Dragging,
    /// Released; the drop callback's future has not resolved yet.
    Dropping,
}

/// One state change produced by a pointer move.
///
/// Emitted only when the value actually changed since the previous move —
/// hosts can treat every entry as a reason to re-render.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DragChange<Z> {
    /// The zone under the pointer changed.
    Zone(Option<Z>),
    /// The edge proximity within the current zone changed.
    Edge(Option<Edge>),
}

/// Change list for a single move: at most a zone change plus an edge change.
pub type DragChanges<Z> = SmallVec<[DragChange<Z>; 2]>;

/// Result of delivering a pointer move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MoveOutcome<Z> {
    /// No session is tracking (idle, or a drop is resolving); the event was
    /// discarded.
    Ignored,
    /// The pointer is outside the arena on a tracked axis and still heading
    /// outward; the event was dropped without touching any state.
    Suppressed,
    /// The move was tracked; `changes` holds whatever actually changed.
    Tracked {
        /// Zone/edge changes caused by this move, possibly empty.
        changes: DragChanges<Z>,
    },
}

/// Result of a release.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReleaseOutcome {
    /// No session was active. Release can double-fire in practice; this is a
    /// benign no-op, never an error.
    NoActiveDrag,
    /// The drop callback was invoked and its future resolved synchronously;
    /// the arbiter is idle again.
    Completed,
    /// The drop callback was invoked and its future is still pending; poll
    /// to completion via [`crate::DragArbiter::poll_drop`].
    DropPending,
}

/// Result of polling a pending drop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DropProgress {
    /// No drop is pending.
    Idle,
    /// The drop future is still pending.
    Pending,
    /// The drop future resolved; the session has been cleared.
    Completed,
}
