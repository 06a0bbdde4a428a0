// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spatial registry itself.

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Rect, Vec2};

use crate::axis::Axis;
use crate::error::RegistryError;

/// Default edge-proximity threshold, in shared-space distance units.
pub const EDGE_THRESHOLD: f64 = 10.0;

/// Measured layout of a drag item: its rectangle and owning zone.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemLayout<Z> {
    /// The item's measured rectangle, zone-local to its owning zone's
    /// scrolled content.
    pub rect: Rect,
    /// The zone that owns the item.
    pub zone: Z,
}

#[derive(Clone, Debug, PartialEq)]
struct ZoneState {
    rect: Rect,
    content_offset: Vec2,
}

impl ZoneState {
    const fn zeroed() -> Self {
        Self {
            rect: Rect::ZERO,
            content_offset: Vec2::ZERO,
        }
    }
}

/// Coordinate store shared by every component of a drag-and-drop layer.
///
/// One registry instance backs one drag arena. It is a plain value: construct
/// it explicitly and pass it by reference to whatever needs it. There is no
/// global instance.
///
/// `Z` keys drop zones and `I` keys drag items; both are compared by value,
/// never by reference identity (see the crate docs on identity).
#[derive(Clone, Debug)]
pub struct SpatialRegistry<Z, I> {
    zones: HashMap<Z, ZoneState>,
    items: HashMap<I, ItemLayout<Z>>,
    arena: Option<Rect>,
    edge_threshold: f64,
}

impl<Z, I> Default for SpatialRegistry<Z, I>
where
    Z: Clone + Eq + Hash,
    I: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Z, I> SpatialRegistry<Z, I>
where
    Z: Clone + Eq + Hash,
    I: Clone + Eq + Hash,
{
    /// Create an empty registry with the default edge threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_edge_threshold(EDGE_THRESHOLD)
    }

    /// Create an empty registry with a custom edge-proximity threshold.
    #[must_use]
    pub fn with_edge_threshold(edge_threshold: f64) -> Self {
        Self {
            zones: HashMap::new(),
            items: HashMap::new(),
            arena: None,
            edge_threshold,
        }
    }

    /// The edge-proximity threshold for this registry's zones.
    #[must_use]
    pub fn edge_threshold(&self) -> f64 {
        self.edge_threshold
    }

    /// Register a drop zone under `name` with a zero rect and zero content
    /// offset.
    ///
    /// Re-initializing an existing name replaces its state wholesale; callers
    /// must not rely on re-init preserving a previously measured layout.
    pub fn init_zone(&mut self, name: Z) {
        self.zones.insert(name, ZoneState::zeroed());
    }

    /// Whether `name` has been registered.
    #[must_use]
    pub fn has_zone(&self, name: &Z) -> bool {
        self.zones.contains_key(name)
    }

    /// Record a zone's screen rectangle (host layout callback).
    pub fn set_zone_rect(&mut self, name: &Z, rect: Rect) -> Result<(), RegistryError<Z, I>> {
        self.zone_mut(name)?.rect = rect;
        Ok(())
    }

    /// A zone's current screen rectangle.
    pub fn zone_rect(&self, name: &Z) -> Result<Rect, RegistryError<Z, I>> {
        Ok(self.zone(name)?.rect)
    }

    /// Record a zone's scroll content offset (host scroll callback).
    pub fn set_content_offset(
        &mut self,
        name: &Z,
        offset: Vec2,
    ) -> Result<(), RegistryError<Z, I>> {
        self.zone_mut(name)?.content_offset = offset;
        Ok(())
    }

    /// A zone's current scroll content offset.
    pub fn content_offset(&self, name: &Z) -> Result<Vec2, RegistryError<Z, I>> {
        Ok(self.zone(name)?.content_offset)
    }

    /// Record (or replace) an item's measured layout within `zone`.
    ///
    /// Upserts keyed by the item value: measuring the same item key again —
    /// even from a freshly recreated host object — replaces the prior entry.
    pub fn set_item_layout(&mut self, zone: Z, item: I, rect: Rect) {
        self.items.insert(item, ItemLayout { rect, zone });
    }

    /// An item's recorded layout.
    pub fn item_layout(&self, item: &I) -> Result<&ItemLayout<Z>, RegistryError<Z, I>> {
        self.items
            .get(item)
            .ok_or_else(|| RegistryError::UnknownItem(item.clone()))
    }

    /// An item's resting position in absolute space along `axis`.
    ///
    /// Computed as `zone.rect + item.rect − zone.content_offset` on the given
    /// axis. This is what a pan origin must be seeded with: the gesture's own
    /// origin is wherever the finger happened to land, and using it would
    /// make the drag shadow jump visibly at drag start.
    pub fn item_absolute_offset(&self, item: &I, axis: Axis) -> Result<f64, RegistryError<Z, I>> {
        let layout = self.item_layout(item)?;
        let zone = self.zone(&layout.zone)?;
        Ok(axis.rect_min(&zone.rect) + axis.rect_min(&layout.rect)
            - axis.of_vec(zone.content_offset))
    }

    /// Record the arena rectangle — the outer draggable surface bound.
    pub fn set_arena_rect(&mut self, rect: Rect) {
        self.arena = Some(rect);
    }

    /// The arena rectangle used to clamp gesture tracking.
    pub fn arena_rect(&self) -> Result<Rect, RegistryError<Z, I>> {
        self.arena.ok_or(RegistryError::ArenaNotMeasured)
    }

    /// Iterate all registered zones as `(name, rect)` pairs.
    ///
    /// The order is map order and not meaningful; zones are assumed
    /// non-overlapping, so zone location treats any first containment match
    /// as the answer.
    pub fn zones(&self) -> impl Iterator<Item = (&Z, Rect)> {
        self.zones.iter().map(|(name, state)| (name, state.rect))
    }

    fn zone(&self, name: &Z) -> Result<&ZoneState, RegistryError<Z, I>> {
        self.zones
            .get(name)
            .ok_or_else(|| RegistryError::UnregisteredZone(name.clone()))
    }

    fn zone_mut(&mut self, name: &Z) -> Result<&mut ZoneState, RegistryError<Z, I>> {
        self.zones
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnregisteredZone(name.clone()))
    }
}
