// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_registry --heading-base-level=0

//! Trellis Registry: the shared spatial store for a drag-and-drop layer.
//!
//! ## Overview
//!
//! This crate holds the coordinate state that every other Trellis component
//! reads: per-zone screen rectangles and scroll content offsets, per-item
//! measured rectangles, and the outer arena rectangle that bounds gesture
//! tracking. It is pure data plus accessors — no gesture logic lives here.
//!
//! The host UI framework feeds measurements in through plain method calls
//! (layout callbacks → [`SpatialRegistry::set_zone_rect`], scroll callbacks →
//! [`SpatialRegistry::set_content_offset`], item measurement →
//! [`SpatialRegistry::set_item_layout`]), and the gesture and autoscroll
//! layers read them back out on every pointer move or timer tick.
//!
//! ## Coordinate space
//!
//! All rectangles live in one shared absolute coordinate space. The only
//! place a zone-relative adjustment happens is
//! [`SpatialRegistry::item_absolute_offset`], which folds a zone's content
//! offset into an item's resting position. That value seeds the pan origin
//! when a drag starts, so a drag shadow appears exactly where the item rests
//! rather than at some gesture-origin artifact.
//!
//! ## Identity
//!
//! Zones and items are keyed by caller-chosen value types (`Z`, `I`), not by
//! object identity. Hosts routinely recreate their view objects between
//! layout measurement and drag start; re-registering the same key replaces
//! the stored layout and every lookup keeps resolving. Do not "fix" this to
//! reference identity.
//!
//! ## Preconditions
//!
//! Querying a zone before [`SpatialRegistry::init_zone`], an item before its
//! layout was measured, or the arena before it was measured is a sequencing
//! bug in the surrounding wiring. Those queries return a typed
//! [`RegistryError`] that callers should propagate, not retry.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod error;
mod registry;

pub use axis::Axis;
pub use error::RegistryError;
pub use registry::{EDGE_THRESHOLD, ItemLayout, SpatialRegistry};
