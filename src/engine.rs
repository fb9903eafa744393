//! Abstract reactive-engine adapter.
//!
//! The workload generator and driver never talk to a concrete engine
//! directly; everything goes through [`ReactiveEngine`]. One implementation
//! per engine under test, selected at configuration time.

/// Readable handle to a reactive cell.
///
/// Reading returns the current (possibly freshly recomputed) value and
/// triggers whatever propagation the engine requires for correctness.
pub trait ReadCell {
    fn read(&self) -> i64;
}

/// Capability set a reactive engine must expose to be benchmarked.
///
/// Handles are cheap clones (reference-counted in practice): derived-node
/// closures capture clones of their upstream handles.
pub trait ReactiveEngine {
    /// Mutable source cell handle.
    type Signal: ReadCell + Clone + 'static;
    /// Derived cell handle.
    type Computed: ReadCell + Clone + 'static;

    /// Engine name for reports.
    fn name(&self) -> &'static str;

    /// Create a mutable source cell.
    fn signal(&self, initial: i64) -> Self::Signal;

    /// Create a derived cell whose value is produced by `compute`. The
    /// closure may read any number of signal/computed handles; the engine
    /// decides when it reruns.
    fn computed(&self, compute: Box<dyn FnMut() -> i64>) -> Self::Computed;

    /// Update a source value, scheduling/performing propagation per engine
    /// policy.
    fn write(&self, signal: &Self::Signal, value: i64);

    /// Scoped grouping of writes. The driver guarantees entry and exit are
    /// paired exactly once, non-reentrant.
    fn with_batch<T>(&self, scope: impl FnOnce() -> T) -> T {
        scope()
    }

    /// Scoped grouping around graph construction, so the engine may batch
    /// internal bookkeeping. Side effects must be indistinguishable from
    /// building without the scope.
    fn with_build<T>(&self, scope: impl FnOnce() -> T) -> T {
        scope()
    }
}
