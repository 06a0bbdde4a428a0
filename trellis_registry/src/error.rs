// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed precondition errors for registry queries.

use thiserror::Error;

/// A query hit state the host has not supplied yet.
///
/// Every variant is a sequencing bug in the wiring around the registry: the
/// host must register and measure before anything queries. Callers should
/// surface these immediately rather than retrying — the registry never
/// substitutes defaults for missing measurements.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError<Z, I> {
    /// A zone was queried before `init_zone` registered it.
    #[error("drop zone {0:?} is not registered")]
    UnregisteredZone(Z),
    /// An item was queried before the host measured its layout.
    #[error("drag item {0:?} has no recorded layout")]
    UnknownItem(I),
    /// The arena rectangle was queried before the host measured it.
    #[error("arena rectangle has not been measured")]
    ArenaNotMeasured,
}
