// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer tracker: raw pointer/wheel input in, semantic gestures out.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::debounce::Debounce;
use crate::gesture::{GestureEvent, GestureKind, GestureMask, UnknownGesture};
use crate::input::{Millis, PointerId, PointerInput, PointerTarget, RawEvent, WheelInput};
use crate::motion::Motion;

/// Quiet period, in milliseconds, after which a wheel burst ends.
pub const WHEEL_BURST_TIMEOUT: Millis = 120;

/// Handle returned by [`PointerTracker::on`]; pass it to [`PointerTracker::off`]
/// to remove the listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Listener {
    subscription: Subscription,
    kinds: GestureMask,
    callback: Box<dyn FnMut(&GestureEvent)>,
}

/// Turns raw input on one target element into a gesture stream.
///
/// At most one pan is tracked at a time: the pointer that went down first
/// owns the pan until it is released, and input from any other pointer is
/// ignored for pan purposes. Wheel input is grouped into bursts bracketed by
/// [`GestureKind::WheelStart`] and [`GestureKind::WheelEnd`].
///
/// The tracker is driven entirely by the host: forward raw input through
/// [`handle`](Self::handle) and call [`poll`](Self::poll) at (or after)
/// [`next_deadline`](Self::next_deadline) so wheel bursts can close.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use kurbo::Rect;
/// use blueprint_pointer::{
///     GestureKind, GestureMask, PointerInput, PointerTracker, RawEvent, StaticTarget,
/// };
///
/// let mut tracker = PointerTracker::new(StaticTarget::new(Rect::new(0.0, 0.0, 800.0, 600.0)));
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// tracker.on(GestureMask::PAN, move |event| sink.borrow_mut().push(event.kind));
///
/// tracker.handle(RawEvent::PointerDown(PointerInput::new(1, (10.0, 10.0), 0)));
/// tracker.handle(RawEvent::PointerMove(PointerInput::new(1, (15.0, 12.0), 16)));
/// tracker.handle(RawEvent::PointerUp(PointerInput::new(1, (15.0, 12.0), 32)));
///
/// assert_eq!(
///     *seen.borrow(),
///     [GestureKind::PanStart, GestureKind::PanMove, GestureKind::PanEnd]
/// );
/// ```
pub struct PointerTracker<T> {
    target: T,
    listeners: Vec<Listener>,
    next_subscription: u64,
    panning: Option<PointerId>,
    motion: Motion,
    wheel_delta: i8,
    wheel_burst: Debounce,
}

impl<T: PointerTarget> PointerTracker<T> {
    /// Attaches a tracker to `target`, disabling its native touch gestures.
    pub fn new(mut target: T) -> Self {
        target.disable_touch_action();
        Self {
            target,
            listeners: Vec::new(),
            next_subscription: 0,
            panning: None,
            motion: Motion::default(),
            wheel_delta: 0,
            wheel_burst: Debounce::new(WHEEL_BURST_TIMEOUT),
        }
    }

    /// The target element handle.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the target element handle.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Detaches the tracker, dropping every listener and returning the target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// The pointer currently driving a pan, if any.
    pub fn panning(&self) -> Option<PointerId> {
        self.panning
    }

    /// Last recorded position relative to the target.
    pub fn position(&self) -> Point {
        self.motion.position()
    }

    /// Movement between the last two recorded positions.
    pub fn movement(&self) -> Vec2 {
        self.motion.movement()
    }

    /// Direction of the last wheel event (`0` before any wheel input).
    pub fn wheel_delta(&self) -> i8 {
        self.wheel_delta
    }

    /// When the open wheel burst will end if no further wheel input arrives.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.wheel_burst.deadline()
    }

    /// Registers `listener` for every kind in `kinds`.
    ///
    /// Listeners run synchronously, in registration order.
    pub fn on<F>(&mut self, kinds: impl Into<GestureMask>, listener: F) -> Subscription
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push(Listener {
            subscription,
            kinds: kinds.into(),
            callback: Box::new(listener),
        });
        subscription
    }

    /// Registers `listener` for a whitespace/comma separated list of event names.
    ///
    /// See [`GestureMask::parse`] for the accepted syntax.
    pub fn on_names<F>(&mut self, names: &str, listener: F) -> Result<Subscription, UnknownGesture>
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        let kinds = GestureMask::parse(names)?;
        Ok(self.on(kinds, listener))
    }

    /// Removes a listener. Returns `false` if it was already removed.
    pub fn off(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.subscription != subscription);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Processes one raw input event.
    ///
    /// A wheel burst whose deadline passed before `event` is closed first.
    pub fn handle(&mut self, event: RawEvent) {
        self.poll(event.time());
        match event {
            RawEvent::PointerDown(input) => self.pointer_down(input),
            RawEvent::PointerMove(input) => self.pointer_move(input),
            RawEvent::PointerUp(input) | RawEvent::PointerCancel(input) => self.pointer_up(input),
            RawEvent::Wheel(input) => self.wheel(input),
        }
    }

    /// Reports the current time; emits [`GestureKind::WheelEnd`] if the burst went quiet.
    pub fn poll(&mut self, now: Millis) {
        if self.wheel_burst.poll(now) {
            self.emit(GestureKind::WheelEnd);
        }
    }

    /// Snapshot of the current state tagged with `kind`.
    pub fn snapshot(&self, kind: GestureKind) -> GestureEvent {
        GestureEvent {
            kind,
            wheel_delta: self.wheel_delta,
            panning: self.panning,
            movement: self.motion.movement(),
            position: self.motion.position(),
        }
    }

    /// Delivers one snapshot to every listener interested in `kind`.
    pub fn emit(&mut self, kind: GestureKind) {
        let event = self.snapshot(kind);
        for listener in &mut self.listeners {
            if listener.kinds.matches(kind) {
                (listener.callback)(&event);
            }
        }
    }

    fn record(&mut self, page: Point) {
        let rect = self.target.bounding_client_rect();
        let movement = self.motion.record(page, rect);
        tracing::trace!(?movement, position = ?self.motion.position(), "pointer motion");
    }

    fn pointer_down(&mut self, input: PointerInput) {
        if let Some(active) = self.panning {
            tracing::trace!(pointer = ?input.pointer_id, ?active, "ignored pointer down while panning");
            return;
        }
        self.record(input.page);
        self.panning = Some(input.pointer_id);
        tracing::debug!(pointer = ?input.pointer_id, "pan started");
        self.emit(GestureKind::PanStart);
    }

    fn pointer_move(&mut self, input: PointerInput) {
        // Hover signal goes out before the pan check, with the last recorded position.
        self.emit(GestureKind::Move);
        if self.panning != Some(input.pointer_id) {
            return;
        }
        self.record(input.page);
        self.emit(GestureKind::PanMove);
    }

    fn pointer_up(&mut self, input: PointerInput) {
        if self.panning != Some(input.pointer_id) {
            tracing::trace!(pointer = ?input.pointer_id, "ignored pointer up");
            return;
        }
        self.record(input.page);
        self.panning = None;
        tracing::debug!(pointer = ?input.pointer_id, "pan ended");
        self.emit(GestureKind::PanEnd);
    }

    fn wheel(&mut self, input: WheelInput) {
        self.record(input.page);
        self.wheel_delta = if input.delta_y > 0.0 { 1 } else { -1 };
        if self.wheel_burst.arm(input.time) {
            self.emit(GestureKind::WheelStart);
        }
        self.emit(GestureKind::WheelMove);
    }
}

impl<T: fmt::Debug> fmt::Debug for PointerTracker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerTracker")
            .field("target", &self.target)
            .field("listeners", &self.listeners.len())
            .field("next_subscription", &self.next_subscription)
            .field("panning", &self.panning)
            .field("motion", &self.motion)
            .field("wheel_delta", &self.wheel_delta)
            .field("wheel_burst", &self.wheel_burst)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    use kurbo::Rect;

    use super::*;
    use crate::input::StaticTarget;

    fn tracker() -> PointerTracker<StaticTarget> {
        PointerTracker::new(StaticTarget::new(Rect::new(0.0, 0.0, 800.0, 600.0)))
    }

    fn record_all(tracker: &mut PointerTracker<StaticTarget>) -> Rc<RefCell<Vec<GestureEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        tracker.on(GestureMask::all(), move |e| sink.borrow_mut().push(*e));
        log
    }

    #[test]
    fn new_disables_touch_action() {
        let t = tracker();
        assert!(t.target().touch_action_disabled);
        assert_eq!(t.panning(), None);
        assert_eq!(t.wheel_delta(), 0);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut t = tracker();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let order = Rc::clone(&order);
            t.on(GestureKind::PanStart, move |_| order.borrow_mut().push(i));
        }
        t.emit(GestureKind::PanStart);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn off_removes_only_that_listener() {
        let mut t = tracker();
        let log = record_all(&mut t);
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let sub = t.on(GestureMask::all(), move |_| *c.borrow_mut() += 1);

        t.emit(GestureKind::Move);
        assert!(t.off(sub));
        assert!(!t.off(sub));
        t.emit(GestureKind::Move);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(t.listener_count(), 1);
    }

    #[test]
    fn delivered_events_are_snapshots() {
        let mut t = tracker();
        let log = record_all(&mut t);

        t.handle(RawEvent::PointerDown(PointerInput::new(7, (10.0, 20.0), 0)));
        t.handle(RawEvent::PointerMove(PointerInput::new(7, (30.0, 25.0), 10)));

        let log = log.borrow();
        assert_eq!(log[0].kind, GestureKind::PanStart);
        assert_eq!(log[0].position, Point::new(10.0, 20.0));
        assert_eq!(log[0].panning, Some(PointerId(7)));
        let pan_move = log.iter().find(|e| e.kind == GestureKind::PanMove).unwrap();
        assert_eq!(pan_move.position, Point::new(30.0, 25.0));
        assert_eq!(pan_move.movement, Vec2::new(20.0, 5.0));
    }

    #[test]
    fn cancel_ends_pan() {
        let mut t = tracker();
        let log = record_all(&mut t);

        t.handle(RawEvent::PointerDown(PointerInput::new(1, (0.0, 0.0), 0)));
        t.handle(RawEvent::PointerCancel(PointerInput::new(1, (3.0, 4.0), 5)));

        assert_eq!(t.panning(), None);
        assert_eq!(log.borrow().last().map(|e| e.kind), Some(GestureKind::PanEnd));
    }

    #[test]
    fn wheel_sets_direction_from_delta_sign() {
        let mut t = tracker();
        t.handle(RawEvent::Wheel(WheelInput::new((0.0, 0.0), 3.0, 0)));
        assert_eq!(t.wheel_delta(), 1);
        t.handle(RawEvent::Wheel(WheelInput::new((0.0, 0.0), -3.0, 10)));
        assert_eq!(t.wheel_delta(), -1);
        t.handle(RawEvent::Wheel(WheelInput::new((0.0, 0.0), 0.0, 20)));
        assert_eq!(t.wheel_delta(), -1);
    }

    #[test]
    fn late_event_closes_stale_burst_first() {
        let mut t = tracker();
        let log = record_all(&mut t);

        t.handle(RawEvent::Wheel(WheelInput::new((0.0, 0.0), 1.0, 0)));
        // No poll in between: the host was busy. The next wheel event still
        // sees the first burst close before opening a second one.
        t.handle(RawEvent::Wheel(WheelInput::new((0.0, 0.0), 1.0, 500)));

        let kinds: Vec<_> = log.borrow().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                GestureKind::WheelStart,
                GestureKind::WheelMove,
                GestureKind::WheelEnd,
                GestureKind::WheelStart,
                GestureKind::WheelMove,
            ]
        );
        assert_eq!(t.next_deadline(), Some(620));
    }
}
