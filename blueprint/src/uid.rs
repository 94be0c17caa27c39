// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide unique ids for mounted blueprints.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static LAST_UID: AtomicU64 = AtomicU64::new(0);

/// Identifies one mounted blueprint; used to namespace element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uid(u64);

impl Uid {
    /// Wraps an id produced by the caller's own generator.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Takes the next id from the process-wide counter.
    ///
    /// Ids start at `1` and increase monotonically; they are never reused.
    #[must_use]
    pub fn next() -> Self {
        Self(LAST_UID.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_strictly_increasing() {
        let a = Uid::next();
        let b = Uid::next();
        assert!(a.get() >= 1);
        assert!(b > a);
    }
}
