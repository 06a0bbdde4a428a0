// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_gesture --heading-base-level=0

//! Trellis Gesture: the pan-gesture state machine of a drag-and-drop layer.
//!
//! ## Overview
//!
//! [`DragArbiter`] owns the lifecycle of a single in-progress drag:
//!
//! - **Start** ([`DragArbiter::start_drag`]): requires a measured item
//!   layout, captures the item's origin zone, and seeds the pan origin from
//!   the item's absolute resting position so the drag shadow starts exactly
//!   under the item.
//! - **Move** ([`DragArbiter::on_move`]): bounds movement to the arena
//!   rectangle per tracked axis, then refreshes the session's current zone
//!   and edge. Changes are *diffed*: a move that lands in the same zone with
//!   the same edge produces no change events, which is what lets a host
//!   re-render only when something actually changed.
//! - **Release** ([`DragArbiter::release`]): invokes the configured drop
//!   callback exactly once with a session snapshot and parks the returned
//!   future; the machine stays in [`DragPhase::Dropping`] until
//!   [`DragArbiter::poll_drop`] observes completion, then returns to idle.
//! - **Terminate** ([`DragArbiter::terminate`]): the forced exit. Clears the
//!   session and any parked drop future synchronously, skipping the drop
//!   callback entirely.
//!
//! Exactly one session can be active at a time, and the arbiter never
//! voluntarily hands the gesture back to the host while one is
//! ([`DragArbiter::termination_request`]).
//!
//! ## Event model
//!
//! The host delivers pointer events as plain method calls on its own
//! single-threaded dispatch loop; nothing here blocks or spawns. The drop
//! callback is the one asynchronous surface: it returns a boxed future that
//! the arbiter polls with a wake-flag waker, so a host can check
//! [`DragArbiter::drop_wake_requested`] from its loop instead of busy
//! polling.
//!
//! ## State
//!
//! Spatial state (zone rectangles, content offsets, item layouts, the arena)
//! lives in a [`trellis_registry::SpatialRegistry`] passed by reference into
//! each transition; the arbiter itself owns only the session and the parked
//! drop future.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arbiter;
mod error;
mod session;

pub use arbiter::{DragArbiter, DragConfig, DropFuture, DropHandler};
pub use error::DragError;
pub use session::{
    DragAxis, DragChange, DragChanges, DragPhase, DragSession, DropProgress, MoveOutcome,
    PanVector, ReleaseOutcome,
};
