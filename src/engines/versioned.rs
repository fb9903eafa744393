//! Global-clock memoizing engine.

use crate::engine::{ReactiveEngine, ReadCell};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Engine with one global write clock and per-cell memoization.
///
/// Every write ticks the clock; a computed cell caches `(tick, value)` and
/// recomputes only when pulled at a newer tick. Pull-based and glitch-free:
/// a read always sees values consistent with the current clock. Within one
/// tick each pulled node runs at most once, so diamonds do not multiply
/// recomputation.
#[derive(Debug, Clone)]
pub struct VersionedEngine {
    clock: Rc<Cell<u64>>,
}

impl VersionedEngine {
    pub fn new() -> Self {
        Self {
            clock: Rc::new(Cell::new(0)),
        }
    }
}

impl Default for VersionedEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable source cell; ticks the shared clock on write.
#[derive(Clone)]
pub struct VersionedSignal {
    value: Rc<Cell<i64>>,
}

struct ComputedState {
    compute: RefCell<Box<dyn FnMut() -> i64>>,
    /// `(clock tick, value)` of the last evaluation.
    cache: Cell<Option<(u64, i64)>>,
    clock: Rc<Cell<u64>>,
}

/// Derived cell with clock-stamped cache.
#[derive(Clone)]
pub struct VersionedComputed {
    state: Rc<ComputedState>,
}

impl ReadCell for VersionedSignal {
    fn read(&self) -> i64 {
        self.value.get()
    }
}

impl ReadCell for VersionedComputed {
    fn read(&self) -> i64 {
        let now = self.state.clock.get();
        if let Some((tick, value)) = self.state.cache.get() {
            if tick == now {
                return value;
            }
        }
        let value = {
            let mut compute = self.state.compute.borrow_mut();
            compute()
        };
        self.state.cache.set(Some((now, value)));
        value
    }
}

impl ReactiveEngine for VersionedEngine {
    type Signal = VersionedSignal;
    type Computed = VersionedComputed;

    fn name(&self) -> &'static str {
        "versioned"
    }

    fn signal(&self, initial: i64) -> VersionedSignal {
        VersionedSignal {
            value: Rc::new(Cell::new(initial)),
        }
    }

    fn computed(&self, compute: Box<dyn FnMut() -> i64>) -> VersionedComputed {
        VersionedComputed {
            state: Rc::new(ComputedState {
                compute: RefCell::new(compute),
                cache: Cell::new(None),
                clock: self.clock.clone(),
            }),
        }
    }

    fn write(&self, signal: &VersionedSignal, value: i64) {
        signal.value.set(value);
        self.clock.set(self.clock.get() + 1);
    }
}
