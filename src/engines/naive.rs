//! Recompute-on-read engine, no caching.

use crate::engine::{ReactiveEngine, ReadCell};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Engine that reruns every computed closure on every read.
///
/// Gives the worst-case recomputation count: reading a leaf re-evaluates its
/// entire upstream cone, once per converging path. Useful as the differential
/// upper bound and as the simplest possible correct adapter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveEngine;

impl NaiveEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Mutable source cell.
#[derive(Clone)]
pub struct NaiveSignal {
    value: Rc<Cell<i64>>,
}

/// Derived cell; holds only its closure.
#[derive(Clone)]
pub struct NaiveComputed {
    compute: Rc<RefCell<Box<dyn FnMut() -> i64>>>,
}

impl ReadCell for NaiveSignal {
    fn read(&self) -> i64 {
        self.value.get()
    }
}

impl ReadCell for NaiveComputed {
    fn read(&self) -> i64 {
        // Graphs are DAGs, so the recursive reads below never re-enter this
        // cell's RefCell.
        let mut compute = self.compute.borrow_mut();
        compute()
    }
}

impl ReactiveEngine for NaiveEngine {
    type Signal = NaiveSignal;
    type Computed = NaiveComputed;

    fn name(&self) -> &'static str {
        "naive"
    }

    fn signal(&self, initial: i64) -> NaiveSignal {
        NaiveSignal {
            value: Rc::new(Cell::new(initial)),
        }
    }

    fn computed(&self, compute: Box<dyn FnMut() -> i64>) -> NaiveComputed {
        NaiveComputed {
            compute: Rc::new(RefCell::new(compute)),
        }
    }

    fn write(&self, signal: &NaiveSignal, value: i64) {
        signal.value.set(value);
    }
}
