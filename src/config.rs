//! Configuration types for graph workloads.

use serde::{Deserialize, Serialize};

/// Complete configuration for one graph workload.
///
/// Preconditions are caller contracts, not validated here: `width >= 1`,
/// `total_layers >= 1`, `n_sources` in `[1, width]` (fan-in wraps modulo the
/// row width, deliberately creating overlapping dependency diamonds),
/// `static_fraction` and `read_fraction` in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    // === Structural parameters ===
    /// Number of source cells, and the width of every derived layer.
    pub width: u32,

    /// Total layer count: one source layer plus `total_layers - 1` derived
    /// layers.
    pub total_layers: u32,

    /// Probability threshold below which a node is static (strict `<`).
    pub static_fraction: f64,

    /// Per-node fan-in into the previous layer.
    pub n_sources: u32,

    // === Drive parameters ===
    /// Number of write/read cycles.
    pub iterations: u32,

    /// Fraction of leaves sampled for reading (0.0-1.0).
    pub read_fraction: f64,

    // === RNG ===
    /// Seed for reproducibility (None = random).
    pub seed: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::minimal()
    }
}

impl GraphConfig {
    /// Create a minimal configuration for fast tests.
    pub fn minimal() -> Self {
        Self {
            width: 10,
            total_layers: 3,
            static_fraction: 0.75,
            n_sources: 2,
            iterations: 10,
            read_fraction: 1.0,
            seed: Some(42),
        }
    }

    // === Builder methods ===

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_total_layers(mut self, total_layers: u32) -> Self {
        self.total_layers = total_layers;
        self
    }

    pub fn with_static_fraction(mut self, fraction: f64) -> Self {
        self.static_fraction = fraction;
        self
    }

    pub fn with_n_sources(mut self, n_sources: u32) -> Self {
        self.n_sources = n_sources;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_read_fraction(mut self, fraction: f64) -> Self {
        self.read_fraction = fraction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_random_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Convert to a serializable form for recording.
    pub fn to_serializable(&self) -> SerializableConfig {
        SerializableConfig {
            width: self.width,
            total_layers: self.total_layers,
            static_fraction: self.static_fraction,
            n_sources: self.n_sources,
            iterations: self.iterations,
            read_fraction: self.read_fraction,
            seed: self.seed,
        }
    }
}

/// Serializable configuration for recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableConfig {
    pub width: u32,
    pub total_layers: u32,
    pub static_fraction: f64,
    pub n_sources: u32,
    pub iterations: u32,
    pub read_fraction: f64,
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains() {
        let config = GraphConfig::minimal()
            .with_width(100)
            .with_total_layers(12)
            .with_static_fraction(0.95)
            .with_n_sources(4)
            .with_iterations(7000)
            .with_read_fraction(0.2)
            .with_seed(7);

        assert_eq!(config.width, 100);
        assert_eq!(config.total_layers, 12);
        assert_eq!(config.static_fraction, 0.95);
        assert_eq!(config.n_sources, 4);
        assert_eq!(config.iterations, 7000);
        assert_eq!(config.read_fraction, 0.2);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn serializable_round_trip() {
        let config = GraphConfig::minimal().with_seed(99).to_serializable();
        let json = serde_json::to_string(&config).unwrap();
        let back: SerializableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn random_seed_clears_seed() {
        let config = GraphConfig::minimal().with_random_seed();
        assert_eq!(config.seed, None);
    }
}
