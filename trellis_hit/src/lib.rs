// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_hit --heading-base-level=0

//! Trellis Hit: stateless spatial classification for a drag-and-drop layer.
//!
//! ## Overview
//!
//! Two pure queries over absolute-space rectangles, shared by the gesture
//! arbiter and the autoscroll controller:
//!
//! - [`locate_zone`]: which registered drop zone (if any) contains a pointer
//!   position. A linear first-match scan — zones are assumed non-overlapping,
//!   so the first containing rectangle is *the* answer, and behavior for
//!   overlapping zones is deliberately unspecified.
//! - [`detect_edge`]: whether a pointer position sits inside one of the four
//!   threshold-sized bands along a zone's sides, classified as an [`Edge`].
//!   Bands are tested in a fixed [`Edge::PRIORITY`] order, so a position in a
//!   corner resolves to `Top`/`Bottom` before `Left`/`Right`.
//!
//! Containment is inclusive on all four bounds (see [`contains_point`]): a
//! pointer resting exactly on a zone boundary still counts as inside, which
//! keeps edge detection live while a drag hugs the border.
//!
//! Neither query owns any state. Feed them rectangles from whatever store
//! you keep them in — typically a `trellis_registry` — and treat the result
//! as a classification of the current pointer position only.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect};

/// Which side of a drop zone a pointer is near.
///
/// The variants are closed by construction: downstream consumers (such as an
/// autoscroll step computation) can match exhaustively and no "unknown edge"
/// case can reach them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    /// Near the top side.
    Top,
    /// Near the bottom side.
    Bottom,
    /// Near the left side.
    Left,
    /// Near the right side.
    Right,
}

impl Edge {
    /// Detection order: corners resolve to `Top`/`Bottom` before
    /// `Left`/`Right`.
    pub const PRIORITY: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];
}

/// Whether `point` lies within `rect`, inclusive of all four bounds.
///
/// Kurbo's own `Rect::contains` is exclusive of the maximum corner; zone
/// membership and edge bands both need a pointer resting exactly on a
/// boundary to count as inside.
#[inline]
#[must_use]
pub fn contains_point(rect: &Rect, point: Point) -> bool {
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}

/// The threshold-sized band along one side of `rect`.
///
/// The top and bottom bands span the full width at `threshold` height; the
/// left and right bands span the full height at `threshold` width.
#[must_use]
pub fn edge_band(rect: &Rect, edge: Edge, threshold: f64) -> Rect {
    match edge {
        Edge::Top => Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + threshold),
        Edge::Bottom => Rect::new(rect.x0, rect.y1 - threshold, rect.x1, rect.y1),
        Edge::Left => Rect::new(rect.x0, rect.y0, rect.x0 + threshold, rect.y1),
        Edge::Right => Rect::new(rect.x1 - threshold, rect.y0, rect.x1, rect.y1),
    }
}

/// Classify `point` against the four edge bands of `rect`.
///
/// Returns the first band (in [`Edge::PRIORITY`] order) containing `point`,
/// or `None` when the point is in the interior or outside the rectangle
/// entirely.
#[must_use]
pub fn detect_edge(point: Point, rect: &Rect, threshold: f64) -> Option<Edge> {
    Edge::PRIORITY
        .into_iter()
        .find(|&edge| contains_point(&edge_band(rect, edge, threshold), point))
}

/// Find the first zone whose rectangle contains `point`.
///
/// `zones` is any iterator of `(key, rect)` pairs; the key of the first
/// containing rectangle is returned together with that rectangle. An empty
/// iterator yields `None`, as does a point outside every zone.
#[must_use]
pub fn locate_zone<Z>(
    point: Point,
    zones: impl IntoIterator<Item = (Z, Rect)>,
) -> Option<(Z, Rect)> {
    zones
        .into_iter()
        .find(|(_, rect)| contains_point(rect, point))
}
