// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion state helper: record target-relative positions and the movement between them.
//!
//! ## Usage
//!
//! 1) Call [`Motion::record`] with a page-space sample and the target's current bounding rect.
//! 2) Read [`Motion::position`] (target-relative) and [`Motion::movement`] (delta since the
//!    previous record).
//!
//! Movement is always the difference between two consecutive *recorded*
//! positions, never a platform-provided delta, so it stays correct when the
//! target's rect shifts between samples.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use blueprint_pointer::Motion;
//!
//! let mut motion = Motion::default();
//! let rect = Rect::new(100.0, 50.0, 900.0, 650.0);
//!
//! motion.record(Point::new(110.0, 60.0), rect);
//! assert_eq!(motion.position(), Point::new(10.0, 10.0));
//!
//! motion.record(Point::new(115.0, 58.0), rect);
//! assert_eq!(motion.movement(), Vec2::new(5.0, -2.0));
//! ```

use kurbo::{Point, Rect, Vec2};

/// Last known target-relative position and the movement that led to it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    position: Point,
    movement: Vec2,
}

impl Motion {
    /// Records a page-space sample relative to `target_rect`, returning the movement.
    pub fn record(&mut self, page: Point, target_rect: Rect) -> Vec2 {
        let previous = self.position;
        self.position = Point::new(page.x - target_rect.x0, page.y - target_rect.y0);
        self.movement = self.position - previous;
        self.movement
    }

    /// Last recorded position, relative to the target's top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Delta between the last two recorded positions.
    #[must_use]
    pub fn movement(&self) -> Vec2 {
        self.movement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN_RECT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn new_motion_is_at_origin() {
        let motion = Motion::default();
        assert_eq!(motion.position(), Point::ZERO);
        assert_eq!(motion.movement(), Vec2::ZERO);
    }

    #[test]
    fn first_record_moves_from_origin() {
        let mut motion = Motion::default();

        let delta = motion.record(Point::new(10.0, 20.0), ORIGIN_RECT);

        assert_eq!(delta, Vec2::new(10.0, 20.0));
        assert_eq!(motion.position(), Point::new(10.0, 20.0));
    }

    #[test]
    fn multiple_records_track_incremental_deltas() {
        let mut motion = Motion::default();
        motion.record(Point::new(0.0, 0.0), ORIGIN_RECT);

        assert_eq!(motion.record(Point::new(5.0, 3.0), ORIGIN_RECT), Vec2::new(5.0, 3.0));
        assert_eq!(motion.record(Point::new(8.0, 7.0), ORIGIN_RECT), Vec2::new(3.0, 4.0));
        assert_eq!(motion.record(Point::new(10.0, 10.0), ORIGIN_RECT), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn position_is_relative_to_target_rect() {
        let mut motion = Motion::default();
        let rect = Rect::new(40.0, 30.0, 240.0, 130.0);

        motion.record(Point::new(50.0, 45.0), rect);

        assert_eq!(motion.position(), Point::new(10.0, 15.0));
    }

    #[test]
    fn shifting_target_changes_movement() {
        let mut motion = Motion::default();
        motion.record(Point::new(50.0, 50.0), ORIGIN_RECT);

        // Same page position, but the target scrolled 10px left underneath it.
        let shifted = Rect::new(-10.0, 0.0, 90.0, 100.0);
        let delta = motion.record(Point::new(50.0, 50.0), shifted);

        assert_eq!(delta, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn zero_movement_delta() {
        let mut motion = Motion::default();
        motion.record(Point::new(50.0, 50.0), ORIGIN_RECT);

        let delta = motion.record(Point::new(50.0, 50.0), ORIGIN_RECT);

        assert_eq!(delta, Vec2::ZERO);
    }

    #[test]
    fn negative_movement_deltas() {
        let mut motion = Motion::default();
        motion.record(Point::new(100.0, 100.0), ORIGIN_RECT);

        let delta = motion.record(Point::new(90.0, 85.0), ORIGIN_RECT);

        assert_eq!(delta, Vec2::new(-10.0, -15.0));
    }
}
