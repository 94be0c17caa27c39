// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce helper: detect the start and the end of an input burst.
//!
//! A [`Debounce`] is a single-shot deadline that is pushed back every time it
//! is re-armed. It never runs anything on its own; the host reports time via
//! [`Debounce::poll`].
//!
//! ## Minimal example
//!
//! ```
//! use blueprint_pointer::Debounce;
//!
//! let mut burst = Debounce::new(120);
//!
//! assert!(burst.arm(0)); // first event opens a burst
//! assert!(!burst.arm(100)); // still inside the burst, deadline moves to 220
//! assert!(!burst.poll(219));
//! assert!(burst.poll(220)); // quiet long enough: the burst ends
//! assert!(!burst.is_pending());
//! ```

use crate::input::Millis;

/// A cancellable, reschedule-on-event deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    timeout: Millis,
    deadline: Option<Millis>,
}

impl Debounce {
    /// A debounce that fires `timeout` milliseconds after the last [`arm`](Self::arm).
    #[must_use]
    pub const fn new(timeout: Millis) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub const fn timeout(&self) -> Millis {
        self.timeout
    }

    /// (Re)schedules the deadline at `now + timeout`.
    ///
    /// Returns `true` when no deadline was pending, i.e. this call opened a
    /// new burst.
    pub fn arm(&mut self, now: Millis) -> bool {
        let opened = self.deadline.is_none();
        self.deadline = Some(now.saturating_add(self.timeout));
        opened
    }

    /// Fires the deadline if `now` has reached it.
    ///
    /// Returns `true` exactly once per burst; the debounce is idle afterwards.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// When the pending deadline expires, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Returns `true` while a burst is open.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_debounce_never_fires() {
        let mut d = Debounce::new(120);
        assert!(!d.poll(0));
        assert!(!d.poll(10_000));
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn arm_reports_burst_start_only_once() {
        let mut d = Debounce::new(120);
        assert!(d.arm(5));
        assert!(!d.arm(50));
        assert!(!d.arm(100));
        assert_eq!(d.deadline(), Some(220));
    }

    #[test]
    fn poll_fires_once_at_deadline() {
        let mut d = Debounce::new(120);
        d.arm(0);
        assert!(!d.poll(119));
        assert!(d.poll(120));
        assert!(!d.poll(121));
    }

    #[test]
    fn rearm_after_fire_opens_new_burst() {
        let mut d = Debounce::new(120);
        d.arm(0);
        assert!(d.poll(500));
        assert!(d.arm(600));
    }

    #[test]
    fn cancel_drops_deadline_silently() {
        let mut d = Debounce::new(120);
        d.arm(0);
        d.cancel();
        assert!(!d.poll(1_000));
        assert!(d.arm(1_000));
    }

    #[test]
    fn arm_saturates_near_max_time() {
        let mut d = Debounce::new(120);
        d.arm(Millis::MAX - 1);
        assert_eq!(d.deadline(), Some(Millis::MAX));
    }
}
