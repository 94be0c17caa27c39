// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gestures from a [`PointerTracker`] driving a [`ViewportController`].

use std::cell::RefCell;
use std::rc::Rc;

use blueprint::{Settings, ViewportController};
use blueprint_pointer::{
    GestureMask, PointerInput, PointerTracker, RawEvent, StaticTarget, WHEEL_BURST_TIMEOUT,
    WheelInput,
};
use blueprint_svg::Document;
use kurbo::{Point, Rect};

const VIEW: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

fn bound() -> (PointerTracker<StaticTarget>, Rc<RefCell<ViewportController>>) {
    let mut doc = Document::new();
    doc.set_layout_rect(doc.root(), VIEW);
    let view = Rc::new(RefCell::new(
        ViewportController::mount(doc, Settings::default()).unwrap(),
    ));

    let mut tracker = PointerTracker::new(StaticTarget::new(VIEW));
    let sink = Rc::clone(&view);
    tracker.on(GestureMask::all(), move |e| sink.borrow_mut().apply_gesture(e));
    (tracker, view)
}

fn pointer(id: i64, x: f64, y: f64, t: u64) -> PointerInput {
    PointerInput::new(id, (x, y), t)
}

#[test]
fn drag_pans_the_view() {
    let (mut tracker, view) = bound();
    tracker.handle(RawEvent::PointerDown(pointer(1, 10.0, 10.0, 0)));
    tracker.handle(RawEvent::PointerMove(pointer(1, 30.0, 25.0, 16)));
    tracker.handle(RawEvent::PointerMove(pointer(1, 35.0, 20.0, 32)));
    tracker.handle(RawEvent::PointerUp(pointer(1, 35.0, 20.0, 48)));

    assert_eq!(view.borrow().position(), Point::new(425.0, 310.0));
    assert_eq!(view.borrow().scale(), 1.0);
}

#[test]
fn hover_does_not_pan() {
    let (mut tracker, view) = bound();
    tracker.handle(RawEvent::PointerMove(pointer(1, 30.0, 25.0, 0)));
    tracker.handle(RawEvent::PointerMove(pointer(1, 90.0, 95.0, 16)));
    assert_eq!(view.borrow().position(), Point::new(400.0, 300.0));
}

#[test]
fn second_pointer_does_not_pan() {
    let (mut tracker, view) = bound();
    tracker.handle(RawEvent::PointerDown(pointer(1, 10.0, 10.0, 0)));
    tracker.handle(RawEvent::PointerDown(pointer(2, 50.0, 50.0, 5)));
    tracker.handle(RawEvent::PointerMove(pointer(2, 80.0, 80.0, 16)));
    assert_eq!(view.borrow().position(), Point::new(400.0, 300.0));
}

#[test]
fn wheel_zooms_about_pointer() {
    let (mut tracker, view) = bound();
    let anchor = Point::new(100.0, 150.0);
    let before = view.borrow().view_to_content(anchor);

    // Scrolling down with the default inverted direction zooms out.
    tracker.handle(RawEvent::Wheel(WheelInput::new(anchor, 53.0, 0)));
    assert!((view.borrow().scale() - 0.9).abs() < 1e-12);

    tracker.handle(RawEvent::Wheel(WheelInput::new(anchor, -53.0, 30)));
    tracker.poll(30 + WHEEL_BURST_TIMEOUT);
    assert_eq!(tracker.next_deadline(), None);

    let view = view.borrow();
    assert!((view.scale() - 0.99).abs() < 1e-12);
    let after = view.view_to_content(anchor);
    assert!((before - after).hypot() < 1e-9);
}
