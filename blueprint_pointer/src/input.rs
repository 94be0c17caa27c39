// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input accepted by the tracker and the target element seam.

use kurbo::{Point, Rect};

/// Identifier of a physical pointer (mouse, pen, or a single touch contact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub i64);

/// Timestamp in host milliseconds.
pub type Millis = u64;

/// A pointer down/move/up/cancel sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// The pointer this sample belongs to.
    pub pointer_id: PointerId,
    /// Position in page coordinates.
    pub page: Point,
    /// When the sample was produced.
    pub time: Millis,
}

impl PointerInput {
    /// Convenience constructor.
    #[must_use]
    pub fn new(pointer_id: i64, page: impl Into<Point>, time: Millis) -> Self {
        Self {
            pointer_id: PointerId(pointer_id),
            page: page.into(),
            time,
        }
    }
}

/// A wheel sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Position in page coordinates.
    pub page: Point,
    /// Vertical scroll amount; only its sign is used.
    pub delta_y: f64,
    /// When the sample was produced.
    pub time: Millis,
}

impl WheelInput {
    /// Convenience constructor.
    #[must_use]
    pub fn new(page: impl Into<Point>, delta_y: f64, time: Millis) -> Self {
        Self {
            page: page.into(),
            delta_y,
            time,
        }
    }
}

/// Low-level input forwarded by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawEvent {
    /// `pointerdown`.
    PointerDown(PointerInput),
    /// `pointermove`.
    PointerMove(PointerInput),
    /// `pointerup`.
    PointerUp(PointerInput),
    /// `pointercancel`: the platform took the pointer away.
    PointerCancel(PointerInput),
    /// `wheel`.
    Wheel(WheelInput),
}

impl RawEvent {
    /// Host timestamp of the sample.
    #[must_use]
    pub fn time(&self) -> Millis {
        match self {
            Self::PointerDown(p) | Self::PointerMove(p) | Self::PointerUp(p) | Self::PointerCancel(p) => {
                p.time
            }
            Self::Wheel(w) => w.time,
        }
    }

    /// Page-space position of the sample.
    #[must_use]
    pub fn page(&self) -> Point {
        match self {
            Self::PointerDown(p) | Self::PointerMove(p) | Self::PointerUp(p) | Self::PointerCancel(p) => {
                p.page
            }
            Self::Wheel(w) => w.page,
        }
    }
}

/// The element a tracker listens on.
///
/// The tracker does not own the element's lifetime; implementations are
/// usually cheap handles into the host's element tree.
pub trait PointerTarget {
    /// Current bounding rectangle of the element in page coordinates.
    fn bounding_client_rect(&self) -> Rect;

    /// Turn off the platform's native touch gestures (`touch-action: none`).
    fn disable_touch_action(&mut self);
}

/// A target with a fixed, host-updated rectangle.
///
/// Useful for hosts that already know the element's layout and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaticTarget {
    /// The element's bounding rectangle.
    pub rect: Rect,
    /// Set once a tracker has been attached.
    pub touch_action_disabled: bool,
}

impl StaticTarget {
    /// A target occupying `rect`.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            touch_action_disabled: false,
        }
    }
}

impl PointerTarget for StaticTarget {
    fn bounding_client_rect(&self) -> Rect {
        self.rect
    }

    fn disable_touch_action(&mut self) {
        self.touch_action_disabled = true;
    }
}

impl<T: PointerTarget + ?Sized> PointerTarget for &mut T {
    fn bounding_client_rect(&self) -> Rect {
        (**self).bounding_client_rect()
    }

    fn disable_touch_action(&mut self) {
        (**self).disable_touch_action();
    }
}
