// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drag between two stacked lists, with edge autoscroll.
//!
//! This example plays the host framework's role: it feeds layout and scroll
//! measurements into a `SpatialRegistry`, delivers a pointer trace to a
//! `DragArbiter`, reconciles per-zone `Autoscroll` controllers with the
//! session after every move, and applies scroll-to commands back into the
//! registry the way a real scroll view's callback would.
//!
//! Run:
//! - `cargo run -p trellis_demos --example drag_between_lists`

use kurbo::{Point, Rect, Vec2};
use trellis_autoscroll::{Autoscroll, ScrollSink, TickOutcome};
use trellis_gesture::{DragArbiter, DragConfig, DragPhase, MoveOutcome};
use trellis_registry::SpatialRegistry;

/// Records scroll commands so the host loop can apply them after the tick.
#[derive(Default)]
struct HostScroller {
    commands: Vec<(&'static str, Vec2)>,
}

impl ScrollSink<&'static str> for HostScroller {
    fn scroll_to(&mut self, zone: &&'static str, offset: Vec2) {
        println!("  [host] scroll {} to ({:.0}, {:.0})", zone, offset.x, offset.y);
        self.commands.push((*zone, offset));
    }
}

fn main() {
    // The host measured two stacked lists inside a full-screen arena.
    let mut registry: SpatialRegistry<&'static str, &'static str> = SpatialRegistry::new();
    registry.set_arena_rect(Rect::new(0.0, 0.0, 320.0, 640.0));

    registry.init_zone("inbox");
    registry
        .set_zone_rect(&"inbox", Rect::new(0.0, 0.0, 320.0, 320.0))
        .unwrap();
    registry.init_zone("archive");
    registry
        .set_zone_rect(&"archive", Rect::new(0.0, 320.0, 320.0, 640.0))
        .unwrap();
    registry
        .set_content_offset(&"archive", Vec2::new(0.0, 60.0))
        .unwrap();

    // Item measurements arrive per item as the lists lay out.
    registry.set_item_layout("inbox", "todo-42", Rect::new(0.0, 80.0, 320.0, 120.0));

    let mut arbiter = DragArbiter::new(
        DragConfig::default(),
        Box::new(|session| {
            println!(
                "  [drop] item {:?} from {:?} onto {:?}",
                session.item, session.origin_zone, session.current_zone
            );
            Box::pin(async {})
        }),
    );

    let mut scrollers = [Autoscroll::new("inbox"), Autoscroll::new("archive")];
    let mut sink = HostScroller::default();

    // Long-press starts the drag.
    arbiter.start_drag("todo-42", &registry).unwrap();
    println!(
        "drag started, shadow at {:?}",
        arbiter.shadow_frame(&registry).unwrap()
    );

    // A pointer trace heading into the archive list and parking on its
    // bottom edge, with the clock advancing 150 ms per sample.
    let trace = [
        (Point::new(160.0, 110.0), Vec2::new(0.0, 0.4)),
        (Point::new(160.0, 240.0), Vec2::new(0.0, 0.9)),
        (Point::new(160.0, 420.0), Vec2::new(0.0, 0.8)),
        (Point::new(160.0, 635.0), Vec2::new(0.0, 0.3)),
        (Point::new(160.0, 635.0), Vec2::new(0.0, 0.0)),
        (Point::new(160.0, 635.0), Vec2::new(0.0, 0.0)),
    ];

    let mut now: u64 = 0;
    for (point, velocity) in trace {
        now += 150;
        match arbiter.on_move(point, velocity, &registry).unwrap() {
            MoveOutcome::Tracked { changes } if !changes.is_empty() => {
                println!("t={now}ms move to ({:.0}, {:.0}): {changes:?}", point.x, point.y);
            }
            MoveOutcome::Tracked { .. } => {}
            other => println!("t={now}ms move to ({:.0}, {:.0}): {other:?}", point.x, point.y),
        }

        // Reconcile the autoscroll controllers with the session, then tick.
        let session = arbiter.session().unwrap();
        for scroller in &mut scrollers {
            scroller.sync(session.current_zone.as_ref(), session.current_edge, now);
            match scroller.tick(now, &registry, &mut sink).unwrap() {
                TickOutcome::Halted => {
                    println!("  [autoscroll] {} hit its content bound", scroller.zone());
                }
                TickOutcome::Scrolled(_) | TickOutcome::Idle => {}
            }
        }

        // The host's scroll views confirm each command via their scroll
        // callbacks, which land back in the registry.
        for (zone, offset) in sink.commands.drain(..) {
            registry.set_content_offset(&zone, offset).unwrap();
        }
    }

    // Finger lifts: the drop callback resolves and the arbiter goes idle.
    let outcome = arbiter.release();
    println!("released: {outcome:?}, phase now {:?}", arbiter.phase());
    assert_eq!(arbiter.phase(), DragPhase::Idle);

    for scroller in &mut scrollers {
        scroller.stop();
    }
}
