//! Shared evaluation counter.

use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times any derived node's combining function ran.
///
/// One counter per graph; every derived node's closure captures a clone.
/// The core never bumps it directly: increments happen only from inside
/// combining functions, which the engine invokes during build/read/write.
/// Clones share state, so the builder's counter and the caller's are the
/// same count.
#[derive(Debug, Clone, Default)]
pub struct EvalCounter {
    count: Rc<Cell<u64>>,
}

impl EvalCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one combining-function run.
    pub(crate) fn bump(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// Total runs so far.
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// Reset to zero, e.g. to exclude build-time evaluations of an eager
    /// engine from a drive measurement.
    pub fn reset(&self) {
        self.count.set(0);
    }
}
