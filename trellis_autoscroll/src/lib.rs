// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_autoscroll --heading-base-level=0

//! Trellis Autoscroll: edge-triggered scrolling for a drag-and-drop layer.
//!
//! ## Overview
//!
//! While a drag hovers near the edge of a scrollable drop zone, the zone
//! should creep in that direction so the user can reach content that is
//! scrolled out of view. [`Autoscroll`] implements that as a deterministic
//! polling controller: one instance per drop zone, fed the drag session's
//! current zone and edge via [`Autoscroll::sync`], and ticked from the host's
//! loop via [`Autoscroll::tick`].
//!
//! A tick that is due reads the zone's rectangle and content offset from the
//! shared registry, applies a fixed signed step along the axis the edge
//! implies, and issues a [`ScrollSink::scroll_to`] command with the new
//! absolute offset. Before applying, it checks whether the projected offset
//! would move past the zone's content bound on that axis; if so it halts and
//! stops itself without scrolling.
//!
//! ## Timer ownership
//!
//! There is no background timer. The "interval" is a deadline the controller
//! owns as an explicit handle ([`Autoscroll::is_active`]); starting always
//! cancels any previous schedule, stopping clears the handle and is a safe
//! no-op when repeated, and dropping the controller cannot leak a callback
//! because there is nothing to leak. Time enters only as injected
//! millisecond timestamps, which keeps every schedule decision testable.
//!
//! The scroll *direction* is captured when the schedule starts. An edge
//! change during a drag must therefore restart the schedule — merely
//! redirecting it would keep the old deadline — and [`Autoscroll::sync`]
//! does exactly that.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

use core::hash::Hash;

use kurbo::Vec2;
use trellis_hit::Edge;
use trellis_registry::{RegistryError, SpatialRegistry};

/// Default tick interval in milliseconds.
pub const AUTOSCROLL_INTERVAL_MS: u64 = 300;

/// Default scroll step per tick, in shared-space distance units.
pub const AUTOSCROLL_STEP: f64 = 20.0;

/// Tuning for an autoscroll controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoscrollConfig {
    /// Milliseconds between scroll nudges.
    pub interval_ms: u64,
    /// Distance scrolled per nudge.
    pub step: f64,
}

impl Default for AutoscrollConfig {
    fn default() -> Self {
        Self {
            interval_ms: AUTOSCROLL_INTERVAL_MS,
            step: AUTOSCROLL_STEP,
        }
    }
}

/// Receiver for outbound scroll commands.
///
/// The host implements this on whatever drives its scrollable view; the
/// offset is the new absolute content offset, not a delta.
pub trait ScrollSink<Z> {
    /// Scroll `zone`'s content to `offset`.
    fn scroll_to(&mut self, zone: &Z, offset: Vec2);
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Nothing was due: the controller is inactive or the deadline has not
    /// arrived.
    Idle,
    /// A scroll command was issued with this new content offset. Hosts
    /// should re-render so the drag shadow tracks the moved content.
    Scrolled(Vec2),
    /// The projected offset would pass the zone's content bound; the
    /// controller stopped itself without scrolling.
    Halted,
}

// The owned timer handle: direction captured at start, plus the next
// deadline.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveScroll {
    edge: Edge,
    next_due: u64,
}

/// Per-zone autoscroll controller.
///
/// At most one schedule is active per controller instance; starting a new one
/// always cancels the previous one first.
#[derive(Clone, Debug)]
pub struct Autoscroll<Z> {
    zone: Z,
    config: AutoscrollConfig,
    active: Option<ActiveScroll>,
}

impl<Z> Autoscroll<Z> {
    /// Create a controller for `zone` with default tuning.
    pub fn new(zone: Z) -> Self {
        Self::with_config(zone, AutoscrollConfig::default())
    }

    /// Create a controller for `zone` with explicit tuning.
    pub fn with_config(zone: Z, config: AutoscrollConfig) -> Self {
        Self {
            zone,
            config,
            active: None,
        }
    }

    /// The zone this controller scrolls.
    #[must_use]
    pub fn zone(&self) -> &Z {
        &self.zone
    }

    /// The controller's tuning.
    #[must_use]
    pub fn config(&self) -> AutoscrollConfig {
        self.config
    }

    /// Whether a schedule is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin scrolling toward `edge`, first tick one interval from `now`.
    ///
    /// Cancels any schedule already running; the direction is captured here
    /// and does not follow later edge changes (restart instead).
    pub fn start(&mut self, edge: Edge, now: u64) {
        self.stop();
        self.active = Some(ActiveScroll {
            edge,
            next_due: now + self.config.interval_ms,
        });
        log::debug!("autoscroll started toward {edge:?}");
    }

    /// Cancel the active schedule, if any. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.active = None;
    }
}

impl<Z: PartialEq> Autoscroll<Z> {
    /// Reconcile with the drag session's current zone and edge.
    ///
    /// Mirrors what the session state means for this zone:
    /// - pointer not over this zone → stop;
    /// - edge differs from the running schedule's → restart toward the new
    ///   edge, or stop when the pointer left the edge bands;
    /// - unchanged → leave the schedule alone.
    pub fn sync(&mut self, current_zone: Option<&Z>, current_edge: Option<Edge>, now: u64) {
        if current_zone != Some(&self.zone) {
            self.stop();
            return;
        }
        if current_edge == self.active.map(|a| a.edge) {
            return;
        }
        match current_edge {
            Some(edge) => self.start(edge, now),
            None => self.stop(),
        }
    }
}

impl<Z: Clone + Eq + Hash> Autoscroll<Z> {
    /// Run one tick at time `now`.
    ///
    /// Does nothing unless a schedule is active and due. A due tick checks
    /// the stop condition *before* applying: when the projected offset would
    /// move past the zone's content bound on the scroll axis, the controller
    /// halts (and stops) without issuing a scroll. Otherwise it issues a
    /// scroll-to with the new absolute offset and schedules the next tick.
    pub fn tick<I: Clone + Eq + Hash>(
        &mut self,
        now: u64,
        registry: &SpatialRegistry<Z, I>,
        sink: &mut impl ScrollSink<Z>,
    ) -> Result<TickOutcome, RegistryError<Z, I>> {
        let Some(active) = self.active else {
            return Ok(TickOutcome::Idle);
        };
        if now < active.next_due {
            return Ok(TickOutcome::Idle);
        }

        let rect = registry.zone_rect(&self.zone)?;
        let offset = registry.content_offset(&self.zone)?;
        let projected = offset + edge_delta(active.edge, self.config.step);

        let past_bound = match active.edge {
            Edge::Top => projected.y <= rect.y0,
            Edge::Bottom => projected.y >= rect.y1,
            Edge::Left => projected.x <= rect.x0,
            Edge::Right => projected.x >= rect.x1,
        };
        if past_bound {
            self.stop();
            log::debug!("autoscroll halted at {:?} content bound", active.edge);
            return Ok(TickOutcome::Halted);
        }

        sink.scroll_to(&self.zone, projected);
        if let Some(active) = self.active.as_mut() {
            active.next_due = now + self.config.interval_ms;
        }
        Ok(TickOutcome::Scrolled(projected))
    }
}

// The signed step along the axis an edge implies: scrolling "toward" an edge
// moves the content offset outward on that side.
fn edge_delta(edge: Edge, step: f64) -> Vec2 {
    match edge {
        Edge::Top => Vec2::new(0.0, -step),
        Edge::Bottom => Vec2::new(0.0, step),
        Edge::Left => Vec2::new(-step, 0.0),
        Edge::Right => Vec2::new(step, 0.0),
    }
}
