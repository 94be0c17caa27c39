// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture vocabulary: event kinds, kind masks and delivered event snapshots.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use kurbo::{Point, Vec2};

use crate::input::PointerId;

/// The semantic gestures emitted by [`PointerTracker`](crate::PointerTracker).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Raw hover signal, emitted on every pointer move regardless of pan state.
    Move,
    /// A pointer went down and started driving a pan.
    PanStart,
    /// The pointer driving the pan moved.
    PanMove,
    /// The pointer driving the pan was released or cancelled.
    PanEnd,
    /// First wheel event of a burst.
    WheelStart,
    /// Any wheel event.
    WheelMove,
    /// The wheel burst went quiet for [`WHEEL_BURST_TIMEOUT`](crate::WHEEL_BURST_TIMEOUT).
    WheelEnd,
}

impl GestureKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Move,
        Self::PanStart,
        Self::PanMove,
        Self::PanEnd,
        Self::WheelStart,
        Self::WheelMove,
        Self::WheelEnd,
    ];

    /// The dotted event name, e.g. `"pan.start"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::PanStart => "pan.start",
            Self::PanMove => "pan.move",
            Self::PanEnd => "pan.end",
            Self::WheelStart => "wheel.start",
            Self::WheelMove => "wheel.move",
            Self::WheelEnd => "wheel.end",
        }
    }

    /// The single-kind mask for this kind.
    #[must_use]
    pub const fn mask(self) -> GestureMask {
        match self {
            Self::Move => GestureMask::MOVE,
            Self::PanStart => GestureMask::PAN_START,
            Self::PanMove => GestureMask::PAN_MOVE,
            Self::PanEnd => GestureMask::PAN_END,
            Self::WheelStart => GestureMask::WHEEL_START,
            Self::WheelMove => GestureMask::WHEEL_MOVE,
            Self::WheelEnd => GestureMask::WHEEL_END,
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GestureKind {
    type Err = UnknownGesture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownGesture::new(s))
    }
}

bitflags! {
    /// A set of [`GestureKind`]s a listener is interested in.
    ///
    /// [`GestureMask::all`] is the wildcard subscription.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GestureMask: u8 {
        /// [`GestureKind::Move`].
        const MOVE = 1 << 0;
        /// [`GestureKind::PanStart`].
        const PAN_START = 1 << 1;
        /// [`GestureKind::PanMove`].
        const PAN_MOVE = 1 << 2;
        /// [`GestureKind::PanEnd`].
        const PAN_END = 1 << 3;
        /// [`GestureKind::WheelStart`].
        const WHEEL_START = 1 << 4;
        /// [`GestureKind::WheelMove`].
        const WHEEL_MOVE = 1 << 5;
        /// [`GestureKind::WheelEnd`].
        const WHEEL_END = 1 << 6;

        /// The whole pan gesture.
        const PAN = Self::PAN_START.bits() | Self::PAN_MOVE.bits() | Self::PAN_END.bits();
        /// The whole wheel burst.
        const WHEEL = Self::WHEEL_START.bits() | Self::WHEEL_MOVE.bits() | Self::WHEEL_END.bits();
    }
}

impl GestureMask {
    /// Returns `true` if `kind` is part of this mask.
    #[must_use]
    pub const fn matches(self, kind: GestureKind) -> bool {
        self.contains(kind.mask())
    }

    /// Parses a whitespace and/or comma separated list of event names.
    ///
    /// `"*"` selects every kind. Empty lists produce an empty mask.
    ///
    /// ```
    /// use blueprint_pointer::GestureMask;
    ///
    /// let mask = GestureMask::parse("pan.start, pan.end").unwrap();
    /// assert_eq!(mask, GestureMask::PAN_START | GestureMask::PAN_END);
    /// assert_eq!(GestureMask::parse("*").unwrap(), GestureMask::all());
    /// assert!(GestureMask::parse("pan.stop").is_err());
    /// ```
    pub fn parse(names: &str) -> Result<Self, UnknownGesture> {
        names
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .try_fold(Self::empty(), |mask, name| {
                if name == "*" {
                    Ok(Self::all())
                } else {
                    name.parse::<GestureKind>().map(|kind| mask | kind.mask())
                }
            })
    }
}

impl From<GestureKind> for GestureMask {
    fn from(kind: GestureKind) -> Self {
        kind.mask()
    }
}

/// Error returned when an event name is not part of the gesture vocabulary.
#[derive(Clone, PartialEq, Eq)]
pub struct UnknownGesture {
    name: String,
}

impl UnknownGesture {
    fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for UnknownGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnknownGesture {{ name: {:?} }}", self.name)
    }
}

impl fmt::Display for UnknownGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gesture event name {:?}", self.name)
    }
}

impl core::error::Error for UnknownGesture {}

/// Snapshot of tracker state delivered to listeners.
///
/// Events are plain values: mutating the tracker after delivery never
/// changes an event a listener already received.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    /// Which gesture this is.
    pub kind: GestureKind,
    /// Direction of the last wheel event: `1`, `-1`, or `0` before any wheel input.
    pub wheel_delta: i8,
    /// Pointer currently driving a pan, if any.
    pub panning: Option<PointerId>,
    /// Distance between the two most recently recorded positions.
    pub movement: Vec2,
    /// Last recorded position, relative to the target's bounding rect.
    pub position: Point,
}
