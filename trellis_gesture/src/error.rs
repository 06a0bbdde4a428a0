// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for drag transitions.

use thiserror::Error;
use trellis_registry::RegistryError;

/// A drag transition could not proceed.
///
/// `ItemNotLayout` and `DragInProgress` abort a drag-start attempt without
/// creating a session. Registry precondition failures (unmeasured arena,
/// unregistered zone) pass through unchanged — they mean the host wired its
/// measurement callbacks in the wrong order, and the caller should surface
/// them, not retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DragError<Z, I> {
    /// Drag start was requested for an item whose layout was never measured.
    #[error("drag item {0:?} has no measured layout")]
    ItemNotLayout(I),
    /// A drag session is already active; exactly one may exist at a time.
    #[error("a drag session is already active")]
    DragInProgress,
    /// A registry precondition failed during the transition.
    #[error(transparent)]
    Registry(#[from] RegistryError<Z, I>),
}
