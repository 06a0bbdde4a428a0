// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag arbiter: a single-session pan state machine.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;
use core::future::Future;
use core::hash::Hash;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};

use futures_task::ArcWake;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;
use trellis_hit::{detect_edge, locate_zone};
use trellis_registry::{Axis, RegistryError, SpatialRegistry};

use crate::error::DragError;
use crate::session::{
    DragAxis, DragChange, DragPhase, DragSession, DropProgress, MoveOutcome, PanVector,
    ReleaseOutcome,
};

/// The future returned by a drop callback.
pub type DropFuture = Pin<Box<dyn Future<Output = ()>>>;

/// The drop callback, configured at construction.
///
/// Invoked exactly once per completed drop with a borrowed snapshot of the
/// session; whatever asynchronous work it starts is represented by the
/// returned future. The arbiter does not interpret failures — hosts absorb
/// their own; resolution always returns the machine to idle.
pub type DropHandler<Z, I> = Box<dyn FnMut(&DragSession<Z, I>) -> DropFuture>;

/// Arbiter configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragConfig {
    /// Which axes pointer movement is tracked along.
    pub axis: DragAxis,
}

// Wake requests from the drop future are recorded in a flag the host can
// check from its dispatch loop; there is no executor here.
#[derive(Debug, Default)]
struct WakeFlag(AtomicBool);

impl WakeFlag {
    fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }

    fn requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl ArcWake for WakeFlag {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        arc_self.0.store(true, Ordering::Release);
    }
}

struct PendingDrop {
    future: DropFuture,
    wake: Arc<WakeFlag>,
}

/// State machine owning the lifecycle of a single in-progress drag.
///
/// Transition methods take the shared [`SpatialRegistry`] by reference; the
/// arbiter holds no spatial state of its own and can be driven entirely from
/// a test without any UI harness.
pub struct DragArbiter<Z, I> {
    config: DragConfig,
    on_drop: DropHandler<Z, I>,
    session: Option<DragSession<Z, I>>,
    pending_drop: Option<PendingDrop>,
}

impl<Z: fmt::Debug, I: fmt::Debug> fmt::Debug for DragArbiter<Z, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragArbiter")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

impl<Z, I> DragArbiter<Z, I> {
    /// Create an arbiter with the given configuration and drop callback.
    pub fn new(config: DragConfig, on_drop: DropHandler<Z, I>) -> Self {
        Self {
            config,
            on_drop,
            session: None,
            pending_drop: None,
        }
    }

    /// The configured drag axis mode.
    #[must_use]
    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.pending_drop.is_some() {
            DragPhase::Dropping
        } else if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// The active session, if any. Remains available while a drop resolves.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<Z, I>> {
        self.session.as_ref()
    }

    /// Whether host scroll views should allow native scrolling.
    ///
    /// `false` exactly while a session exists — scrolling and dragging fight
    /// over the same pointer.
    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.session.is_none()
    }

    /// Answer a host request to hand the gesture to another responder.
    ///
    /// The arbiter never voluntarily releases an in-progress gesture:
    /// returns `false` while a session is active, `true` otherwise.
    #[must_use]
    pub fn termination_request(&self) -> bool {
        self.session.is_none()
    }

    /// Release the gesture, resolving the drag as a drop.
    ///
    /// With no active session this is a benign no-op — gesture delivery can
    /// double-fire a release, and a release arriving while a previous drop
    /// is still resolving counts as "already not dragging". Otherwise the
    /// drop callback runs exactly once with a session snapshot and its
    /// future is polled immediately; if it is not yet ready the arbiter
    /// stays in [`DragPhase::Dropping`] until [`Self::poll_drop`] completes
    /// it.
    pub fn release(&mut self) -> ReleaseOutcome {
        if self.pending_drop.is_some() {
            return ReleaseOutcome::NoActiveDrag;
        }
        let Some(session) = self.session.as_ref() else {
            return ReleaseOutcome::NoActiveDrag;
        };
        let future = (self.on_drop)(session);
        self.pending_drop = Some(PendingDrop {
            future,
            wake: Arc::new(WakeFlag::default()),
        });
        log::debug!("drag released; drop callback invoked");
        match self.poll_drop() {
            DropProgress::Completed => ReleaseOutcome::Completed,
            _ => ReleaseOutcome::DropPending,
        }
    }

    /// Drive a pending drop future one step.
    ///
    /// On readiness the session is cleared and the arbiter is idle again.
    /// Safe to call at any time; with nothing pending it reports
    /// [`DropProgress::Idle`].
    pub fn poll_drop(&mut self) -> DropProgress {
        let Some(pending) = self.pending_drop.as_mut() else {
            return DropProgress::Idle;
        };
        pending.wake.clear();
        let waker = futures_task::waker(pending.wake.clone());
        let mut cx = Context::from_waker(&waker);
        match pending.future.as_mut().poll(&mut cx) {
            Poll::Ready(()) => {
                self.pending_drop = None;
                self.session = None;
                log::debug!("drop resolved; session cleared");
                DropProgress::Completed
            }
            Poll::Pending => DropProgress::Pending,
        }
    }

    /// Whether a parked drop future has requested a wake since the last
    /// poll. Hosts can check this from their loop instead of busy polling.
    #[must_use]
    pub fn drop_wake_requested(&self) -> bool {
        self.pending_drop
            .as_ref()
            .is_some_and(|p| p.wake.requested())
    }

    /// Forcibly end the drag, skipping the drop callback.
    ///
    /// Clears the session and cancels any parked drop future synchronously —
    /// a drop future still pending at termination is dropped and its late
    /// resolution is never observed. Returns whether anything was cleared;
    /// repeated termination is a no-op.
    pub fn terminate(&mut self) -> bool {
        let had_state = self.session.is_some() || self.pending_drop.is_some();
        if had_state {
            log::debug!("drag terminated; session state cleared");
        }
        self.pending_drop = None;
        self.session = None;
        had_state
    }
}

impl<Z, I> DragArbiter<Z, I>
where
    Z: Clone + Eq + Hash,
    I: Clone + Eq + Hash,
{
    /// Start a drag for `item`.
    ///
    /// Requires the item to have a measured layout and no session to be
    /// active. Captures the origin zone and seeds the pan origin from the
    /// item's absolute resting position on both axes, so the shadow starts
    /// under the item instead of jumping to the gesture origin.
    pub fn start_drag(
        &mut self,
        item: I,
        registry: &SpatialRegistry<Z, I>,
    ) -> Result<(), DragError<Z, I>> {
        if self.session.is_some() || self.pending_drop.is_some() {
            return Err(DragError::DragInProgress);
        }
        let Ok(layout) = registry.item_layout(&item) else {
            return Err(DragError::ItemNotLayout(item));
        };
        let origin_zone = layout.zone.clone();
        let origin = Point::new(
            registry.item_absolute_offset(&item, Axis::X)?,
            registry.item_absolute_offset(&item, Axis::Y)?,
        );
        self.session = Some(DragSession {
            item,
            origin_zone: origin_zone.clone(),
            pan: PanVector::new(origin),
            current_zone: Some(origin_zone),
            current_edge: None,
        });
        log::debug!("drag session started at ({}, {})", origin.x, origin.y);
        Ok(())
    }

    /// Deliver a pointer move.
    ///
    /// Movement is bounded by the arena rectangle independently per tracked
    /// axis: an event whose position is outside the arena on an axis *and*
    /// whose velocity heads further outward is dropped whole, with no state
    /// mutation. Movement back toward the interior is always permitted.
    ///
    /// A tracked move refreshes the session's current zone and edge, emitting
    /// a change entry only for values that actually changed. Crossing into a
    /// different zone resets the edge first, so the new zone's edge state is
    /// re-announced even when its label matches the old zone's.
    pub fn on_move(
        &mut self,
        point: Point,
        velocity: Vec2,
        registry: &SpatialRegistry<Z, I>,
    ) -> Result<MoveOutcome<Z>, RegistryError<Z, I>> {
        if self.pending_drop.is_some() || self.session.is_none() {
            return Ok(MoveOutcome::Ignored);
        }
        let arena = registry.arena_rect()?;
        if !self.permits_move(point, velocity, &arena) {
            return Ok(MoveOutcome::Suppressed);
        }
        let threshold = registry.edge_threshold();
        let Some(session) = self.session.as_mut() else {
            return Ok(MoveOutcome::Ignored);
        };
        session.pan.track(point);

        let hit = locate_zone(point, registry.zones());
        let new_zone: Option<Z> = hit.as_ref().map(|&(zone, _)| zone.clone());
        let new_edge = hit.and_then(|(_, rect)| detect_edge(point, &rect, threshold));

        let mut changes = SmallVec::new();
        if new_zone != session.current_zone {
            session.current_zone = new_zone.clone();
            session.current_edge = None;
            changes.push(DragChange::Zone(new_zone));
        }
        if new_edge != session.current_edge {
            session.current_edge = new_edge;
            changes.push(DragChange::Edge(new_edge));
        }
        Ok(MoveOutcome::Tracked { changes })
    }

    /// The drag shadow's current frame: the pan position with the dragged
    /// item's measured size. `None` when no session is active.
    #[must_use]
    pub fn shadow_frame(&self, registry: &SpatialRegistry<Z, I>) -> Option<Rect> {
        let session = self.session.as_ref()?;
        let layout = registry.item_layout(&session.item).ok()?;
        let origin = session.pan.position(self.config.axis);
        Some(Rect::from_origin_size(origin, layout.rect.size()))
    }

    fn permits_move(&self, point: Point, velocity: Vec2, arena: &Rect) -> bool {
        self.config.axis.tracked().iter().all(|&axis| {
            let pos = axis.of_point(point);
            let vel = axis.of_vec(velocity);
            let before_min = pos < axis.rect_min(arena);
            let beyond_max = pos > axis.rect_max(arena);
            (!before_min || vel > 0.0) && (!beyond_max || vel < 0.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use trellis_hit::Edge;

    type Registry = SpatialRegistry<&'static str, &'static str>;
    type Arbiter = DragArbiter<&'static str, &'static str>;

    // Two zones stacked vertically inside a taller arena, with the dragged
    // item resting near the top of the upper zone.
    fn registry() -> Registry {
        let mut reg = Registry::new();
        reg.set_arena_rect(Rect::new(0.0, 0.0, 100.0, 700.0));
        reg.init_zone("upper");
        reg.set_zone_rect(&"upper", Rect::new(0.0, 0.0, 100.0, 300.0))
            .unwrap();
        reg.init_zone("lower");
        reg.set_zone_rect(&"lower", Rect::new(0.0, 300.0, 100.0, 600.0))
            .unwrap();
        reg.set_item_layout("upper", "todo-1", Rect::new(0.0, 40.0, 100.0, 80.0));
        reg
    }

    fn counting_arbiter(config: DragConfig) -> (Arbiter, Rc<Cell<usize>>) {
        let drops = Rc::new(Cell::new(0));
        let counter = drops.clone();
        let arbiter = DragArbiter::new(
            config,
            Box::new(move |_session| {
                counter.set(counter.get() + 1);
                Box::pin(async {})
            }),
        );
        (arbiter, drops)
    }

    // A future that stays pending until its gate is opened.
    struct Gate(Rc<Cell<bool>>);

    impl Future for Gate {
        type Output = ();

        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
            if self.0.get() {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        }
    }

    fn gated_arbiter(config: DragConfig) -> (Arbiter, Rc<Cell<usize>>, Rc<Cell<bool>>) {
        let drops = Rc::new(Cell::new(0));
        let gate = Rc::new(Cell::new(false));
        let counter = drops.clone();
        let gate_for_handler = gate.clone();
        let arbiter = DragArbiter::new(
            config,
            Box::new(move |_session| {
                counter.set(counter.get() + 1);
                Box::pin(Gate(gate_for_handler.clone()))
            }),
        );
        (arbiter, drops, gate)
    }

    fn vel(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn start_requires_a_measured_layout() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        assert_eq!(
            arbiter.start_drag("ghost", &reg),
            Err(DragError::ItemNotLayout("ghost"))
        );
        assert_eq!(arbiter.phase(), DragPhase::Idle);
    }

    #[test]
    fn start_captures_origin_zone_and_seeds_the_pan_origin() {
        let mut reg = Registry::new();
        reg.init_zone("list");
        reg.set_zone_rect(&"list", Rect::new(50.0, 10.0, 150.0, 510.0))
            .unwrap();
        reg.set_content_offset(&"list", Vec2::new(10.0, 20.0)).unwrap();
        reg.set_item_layout("list", "todo-1", Rect::new(20.0, 123.0, 120.0, 163.0));

        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        let session = arbiter.session().unwrap();
        assert_eq!(session.origin_zone, "list");
        assert_eq!(session.current_zone, Some("list"));
        assert_eq!(session.current_edge, None);
        // zone + item − content offset, both axes.
        assert_eq!(session.pan.origin, Point::new(60.0, 113.0));
        assert_eq!(arbiter.phase(), DragPhase::Dragging);
        assert!(!arbiter.scroll_enabled());
    }

    #[test]
    fn only_one_session_at_a_time() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();
        assert_eq!(
            arbiter.start_drag("todo-1", &reg),
            Err(DragError::DragInProgress)
        );
    }

    #[test]
    fn moves_without_a_session_are_ignored() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        let outcome = arbiter
            .on_move(Point::new(50.0, 50.0), vel(0.0, 1.0), &reg)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored);
    }

    #[test]
    fn moves_require_a_measured_arena() {
        let mut reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        reg = {
            // Rebuild without the arena to simulate a missing measurement.
            let mut bare = Registry::new();
            bare.init_zone("upper");
            bare.set_item_layout("upper", "todo-1", Rect::new(0.0, 40.0, 100.0, 80.0));
            bare
        };
        assert_eq!(
            arbiter.on_move(Point::new(50.0, 50.0), vel(0.0, 1.0), &reg),
            Err(RegistryError::ArenaNotMeasured)
        );
    }

    #[test]
    fn movement_outside_the_arena_heading_outward_is_suppressed() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        // Above the arena, still moving up: dropped whole.
        let outcome = arbiter
            .on_move(Point::new(50.0, -5.0), vel(0.0, -1.0), &reg)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Suppressed);
        assert_eq!(arbiter.session().unwrap().pan.translation, Vec2::ZERO);

        // Zero velocity does not re-admit the event either.
        let outcome = arbiter
            .on_move(Point::new(50.0, -5.0), vel(0.0, 0.0), &reg)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Suppressed);

        // Same position but heading back inside: tracked.
        let outcome = arbiter
            .on_move(Point::new(50.0, -5.0), vel(0.0, 3.0), &reg)
            .unwrap();
        assert!(matches!(outcome, MoveOutcome::Tracked { .. }));
    }

    #[test]
    fn bounding_is_per_axis_for_any_mode() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig { axis: DragAxis::Any });
        arbiter.start_drag("todo-1", &reg).unwrap();

        // Inside on y, outside on x and heading further out: suppressed.
        let outcome = arbiter
            .on_move(Point::new(120.0, 50.0), vel(1.0, 0.0), &reg)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Suppressed);

        // Outside on x but heading back: tracked.
        let outcome = arbiter
            .on_move(Point::new(120.0, 50.0), vel(-1.0, 0.0), &reg)
            .unwrap();
        assert!(matches!(outcome, MoveOutcome::Tracked { .. }));
    }

    #[test]
    fn y_mode_ignores_horizontal_excursions() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        // Outside on x, but only y is tracked: not suppressed.
        let outcome = arbiter
            .on_move(Point::new(120.0, 50.0), vel(1.0, 0.0), &reg)
            .unwrap();
        assert!(matches!(outcome, MoveOutcome::Tracked { .. }));
    }

    #[test]
    fn zone_and_edge_changes_are_diffed() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        // Interior of the origin zone: nothing changed.
        let outcome = arbiter
            .on_move(Point::new(50.0, 150.0), vel(0.0, 1.0), &reg)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Tracked { changes: SmallVec::new() });

        // Into the lower zone, near its top edge: both change.
        let outcome = arbiter
            .on_move(Point::new(50.0, 305.0), vel(0.0, 1.0), &reg)
            .unwrap();
        let MoveOutcome::Tracked { changes } = outcome else {
            panic!("expected tracked move");
        };
        assert_eq!(
            &changes[..],
            &[
                DragChange::Zone(Some("lower")),
                DragChange::Edge(Some(Edge::Top)),
            ]
        );

        // The same position again: no re-emission.
        let outcome = arbiter
            .on_move(Point::new(50.0, 305.0), vel(0.0, 1.0), &reg)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Tracked { changes: SmallVec::new() });
    }

    #[test]
    fn crossing_zones_reannounces_a_coinciding_edge() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        // Near the bottom edge of the upper zone.
        let outcome = arbiter
            .on_move(Point::new(50.0, 295.0), vel(0.0, 1.0), &reg)
            .unwrap();
        let MoveOutcome::Tracked { changes } = outcome else {
            panic!("expected tracked move");
        };
        assert_eq!(&changes[..], &[DragChange::Edge(Some(Edge::Bottom))]);

        // Near the bottom edge of the lower zone: same edge label, but the
        // zone change resets it, so the edge is announced again — autoscroll
        // direction is captured at start time and must restart.
        let outcome = arbiter
            .on_move(Point::new(50.0, 595.0), vel(0.0, 1.0), &reg)
            .unwrap();
        let MoveOutcome::Tracked { changes } = outcome else {
            panic!("expected tracked move");
        };
        assert_eq!(
            &changes[..],
            &[
                DragChange::Zone(Some("lower")),
                DragChange::Edge(Some(Edge::Bottom)),
            ]
        );
    }

    #[test]
    fn leaving_every_zone_clears_the_current_zone() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        // Inside the arena but below both zones.
        let outcome = arbiter
            .on_move(Point::new(50.0, 650.0), vel(0.0, 1.0), &reg)
            .unwrap();
        let MoveOutcome::Tracked { changes } = outcome else {
            panic!("expected tracked move");
        };
        assert_eq!(&changes[..], &[DragChange::Zone(None)]);
        assert_eq!(arbiter.session().unwrap().current_zone, None);
    }

    #[test]
    fn release_fires_the_drop_callback_exactly_once() {
        let reg = registry();
        let (mut arbiter, drops) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        assert_eq!(arbiter.release(), ReleaseOutcome::Completed);
        assert_eq!(drops.get(), 1);
        assert_eq!(arbiter.phase(), DragPhase::Idle);
        assert!(arbiter.session().is_none());

        // Double-fired release is a benign no-op.
        assert_eq!(arbiter.release(), ReleaseOutcome::NoActiveDrag);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn release_without_a_session_is_a_noop() {
        let (mut arbiter, drops) = counting_arbiter(DragConfig::default());
        assert_eq!(arbiter.release(), ReleaseOutcome::NoActiveDrag);
        assert_eq!(drops.get(), 0);
    }

    #[test]
    fn pending_drop_suspends_the_machine_until_polled() {
        let reg = registry();
        let (mut arbiter, drops, gate) = gated_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        assert_eq!(arbiter.release(), ReleaseOutcome::DropPending);
        assert_eq!(drops.get(), 1);
        assert_eq!(arbiter.phase(), DragPhase::Dropping);
        // The session snapshot survives until the drop resolves.
        assert!(arbiter.session().is_some());

        // Gesture delivery is not blocked, but moves no longer track.
        let outcome = arbiter
            .on_move(Point::new(50.0, 150.0), vel(0.0, 1.0), &reg)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored);

        // A release during the pending drop is "already not dragging".
        assert_eq!(arbiter.release(), ReleaseOutcome::NoActiveDrag);
        assert_eq!(drops.get(), 1);

        assert_eq!(arbiter.poll_drop(), DropProgress::Pending);
        gate.set(true);
        assert_eq!(arbiter.poll_drop(), DropProgress::Completed);
        assert_eq!(arbiter.phase(), DragPhase::Idle);
        assert!(arbiter.session().is_none());
        assert_eq!(arbiter.poll_drop(), DropProgress::Idle);
    }

    #[test]
    fn terminate_skips_the_drop_callback() {
        let reg = registry();
        let (mut arbiter, drops) = counting_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();

        assert!(arbiter.terminate());
        assert_eq!(drops.get(), 0);
        assert_eq!(arbiter.phase(), DragPhase::Idle);
        assert!(arbiter.scroll_enabled());

        // Repeated termination is a no-op.
        assert!(!arbiter.terminate());
    }

    #[test]
    fn terminate_cancels_a_pending_drop() {
        let reg = registry();
        let (mut arbiter, drops, gate) = gated_arbiter(DragConfig::default());
        arbiter.start_drag("todo-1", &reg).unwrap();
        assert_eq!(arbiter.release(), ReleaseOutcome::DropPending);

        assert!(arbiter.terminate());
        assert_eq!(arbiter.phase(), DragPhase::Idle);

        // Late resolution of the cancelled future is never observed.
        gate.set(true);
        assert_eq!(arbiter.poll_drop(), DropProgress::Idle);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn termination_requests_are_rejected_while_dragging() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        assert!(arbiter.termination_request());

        arbiter.start_drag("todo-1", &reg).unwrap();
        assert!(!arbiter.termination_request());

        arbiter.terminate();
        assert!(arbiter.termination_request());
    }

    #[test]
    fn shadow_frame_rests_under_the_item_and_tracks_the_pan() {
        let reg = registry();
        let (mut arbiter, _) = counting_arbiter(DragConfig::default());
        assert_eq!(arbiter.shadow_frame(&reg), None);

        arbiter.start_drag("todo-1", &reg).unwrap();
        // Before any movement: the item's absolute resting position with its
        // measured size (100×40).
        assert_eq!(
            arbiter.shadow_frame(&reg),
            Some(Rect::new(0.0, 40.0, 100.0, 80.0))
        );

        // Anchor, then move down 30: only y tracks in the default mode.
        arbiter
            .on_move(Point::new(50.0, 60.0), vel(0.0, 1.0), &reg)
            .unwrap();
        arbiter
            .on_move(Point::new(60.0, 90.0), vel(0.0, 1.0), &reg)
            .unwrap();
        assert_eq!(
            arbiter.shadow_frame(&reg),
            Some(Rect::new(0.0, 70.0, 100.0, 110.0))
        );
    }

    #[test]
    fn drop_handler_sees_the_session_snapshot() {
        let reg = registry();
        let seen = Rc::new(Cell::new(None));
        let seen_in_handler = seen.clone();
        let mut arbiter: Arbiter = DragArbiter::new(
            DragConfig::default(),
            Box::new(move |session| {
                seen_in_handler.set(Some((session.item, session.current_zone)));
                Box::pin(async {})
            }),
        );

        arbiter.start_drag("todo-1", &reg).unwrap();
        arbiter
            .on_move(Point::new(50.0, 305.0), vel(0.0, 1.0), &reg)
            .unwrap();
        arbiter.release();
        assert_eq!(seen.get(), Some(("todo-1", Some("lower"))));
    }
}
