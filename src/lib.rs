//! Synthetic dependency-graph workloads for benchmarking reactive signal engines.
//!
//! This crate provides tools for:
//! - Building layered signal/computed graphs with configurable width, depth,
//!   fan-in, and static/dynamic dependency mix
//! - Driving write/read cycles against an abstract engine adapter
//! - Counting actual recomputations to judge under- and over-evaluation
//! - Recording run results for cross-engine comparison
//!
//! The crate does not implement a production reactive engine. Engines under
//! test plug in through the [`ReactiveEngine`] trait; two reference engines
//! ([`NaiveEngine`], [`VersionedEngine`]) are included so runs can be compared
//! differentially.
//!
//! # Example
//!
//! ```
//! use signal_bench::{BenchRunner, GraphConfig, VersionedEngine};
//!
//! let config = GraphConfig::minimal()
//!     .with_width(10)
//!     .with_total_layers(5)
//!     .with_iterations(100)
//!     .with_seed(42);
//!
//! let runner = BenchRunner::new(VersionedEngine::new(), config);
//! let report = runner.run();
//! assert!(report.evals > 0);
//! ```

mod config;
mod engine;
mod engines;
pub mod generator;
mod presets;
mod recorder;
mod runner;
mod sampler;
mod stream;
mod verify;

pub use config::{GraphConfig, SerializableConfig};
pub use engine::{ReactiveEngine, ReadCell};
pub use engines::{
    EngineKind, NaiveComputed, NaiveEngine, NaiveSignal, VersionedComputed, VersionedEngine,
    VersionedSignal,
};
pub use generator::{
    build_graph, CellRef, DerivedNode, EvalCounter, Graph, GraphAndCounter, NodeKind,
};
pub use presets::Presets;
pub use recorder::{ExportError, RunMetadata, RunRecord};
pub use runner::{run_graph, BenchRunner, RunReport};
pub use sampler::remove_elems;
pub use stream::{FloatSource, FloatStream};
pub use verify::{sum_divergence, ExpectationFailure, RunExpectation};
