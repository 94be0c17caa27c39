// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=blueprint_pointer --heading-base-level=0

//! Blueprint Pointer: normalize raw pointer and wheel input into gestures.
//!
//! Platforms deliver pointer input as a noisy stream: several pointers may be
//! down at once, pointers get cancelled, and wheel events arrive in rapid
//! bursts without any "done scrolling" signal. This crate turns that stream
//! into a small, consistent gesture vocabulary:
//!
//! | event         | emitted when                                              |
//! |---------------|-----------------------------------------------------------|
//! | `move`        | any pointer moves (hover signal, independent of panning)  |
//! | `pan.start`   | a pointer goes down while no pan is active                |
//! | `pan.move`    | the pointer driving the pan moves                         |
//! | `pan.end`     | the pointer driving the pan is released or cancelled      |
//! | `wheel.start` | first wheel event of a burst                              |
//! | `wheel.move`  | every wheel event                                         |
//! | `wheel.end`   | [`WHEEL_BURST_TIMEOUT`] ms after the last wheel event      |
//!
//! Every event carries a [`GestureEvent`] snapshot: the wheel direction, the
//! pointer driving the pan (if any), the movement since the previous sample
//! and the position relative to the target element.
//!
//! The building blocks are usable on their own:
//!
//! - [`Motion`]: target-relative position and movement bookkeeping.
//! - [`Debounce`]: burst start/end detection on host-supplied time.
//! - [`PointerTracker`]: the full state machine plus listener registry.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use blueprint_pointer::{PointerTracker, RawEvent, StaticTarget, WheelInput};
//!
//! let mut tracker = PointerTracker::new(StaticTarget::new(Rect::new(0.0, 0.0, 640.0, 480.0)));
//! let names = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
//! let sink = names.clone();
//! tracker
//!     .on_names("wheel.start wheel.end", move |event| sink.borrow_mut().push(event.kind.name()))
//!     .unwrap();
//!
//! tracker.handle(RawEvent::Wheel(WheelInput::new((20.0, 20.0), 1.0, 1_000)));
//! tracker.handle(RawEvent::Wheel(WheelInput::new((20.0, 20.0), 1.0, 1_050)));
//! tracker.poll(1_169);
//! tracker.poll(1_170);
//!
//! assert_eq!(*names.borrow(), ["wheel.start", "wheel.end"]);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod debounce;
mod gesture;
mod input;
mod motion;
mod tracker;

pub use debounce::Debounce;
pub use gesture::{GestureEvent, GestureKind, GestureMask, UnknownGesture};
pub use input::{Millis, PointerId, PointerInput, PointerTarget, RawEvent, StaticTarget, WheelInput};
pub use motion::Motion;
pub use tracker::{PointerTracker, Subscription, WHEEL_BURST_TIMEOUT};
