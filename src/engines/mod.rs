//! Reference engine adapters.
//!
//! These exist so the harness is runnable and differentially testable on its
//! own: both engines compute the same values for any graph, but with very
//! different recomputation counts ([`NaiveEngine`] is the upper bound,
//! [`VersionedEngine`] recomputes at most once per write tick per pulled
//! node).

mod naive;
mod versioned;

pub use naive::{NaiveComputed, NaiveEngine, NaiveSignal};
pub use versioned::{VersionedComputed, VersionedEngine, VersionedSignal};

use crate::config::GraphConfig;
use crate::runner::{BenchRunner, RunReport};

/// Engine selection for configuration-time dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Recompute on every read, no caching.
    Naive,
    /// Global write clock with per-cell memoization.
    Versioned,
}

impl EngineKind {
    /// Short name, matching `ReactiveEngine::name` of the selected engine.
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Naive => "naive",
            EngineKind::Versioned => "versioned",
        }
    }

    /// Build and drive one run of `config` on the selected engine.
    pub fn run(&self, config: GraphConfig) -> RunReport {
        match self {
            EngineKind::Naive => BenchRunner::new(NaiveEngine::new(), config).run(),
            EngineKind::Versioned => BenchRunner::new(VersionedEngine::new(), config).run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_engines() {
        use crate::engine::ReactiveEngine;
        assert_eq!(EngineKind::Naive.name(), NaiveEngine::new().name());
        assert_eq!(EngineKind::Versioned.name(), VersionedEngine::new().name());
    }

    #[test]
    fn kinds_agree_on_sums() {
        let config = GraphConfig::minimal()
            .with_width(6)
            .with_total_layers(4)
            .with_static_fraction(0.5)
            .with_n_sources(2)
            .with_iterations(10)
            .with_seed(42);

        let naive = EngineKind::Naive.run(config.clone());
        let versioned = EngineKind::Versioned.run(config);

        assert_eq!(naive.sum, versioned.sum);
        assert!(naive.evals >= versioned.evals);
    }
}
