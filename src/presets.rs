//! Predefined workload shapes for common benchmark scenarios.

use crate::config::GraphConfig;

/// Collection of preset configurations.
pub struct Presets;

impl Presets {
    /// Quick sanity check (CI-friendly, runs fast on any engine).
    pub fn quick() -> GraphConfig {
        GraphConfig::minimal()
            .with_width(10)
            .with_total_layers(3)
            .with_static_fraction(0.75)
            .with_n_sources(2)
            .with_iterations(25)
            .with_read_fraction(1.0)
    }

    /// Small mostly-static component, shallow and lightly sampled.
    pub fn simple_component() -> GraphConfig {
        GraphConfig::minimal()
            .with_width(10)
            .with_total_layers(5)
            .with_static_fraction(1.0)
            .with_n_sources(2)
            .with_iterations(600_000)
            .with_read_fraction(0.2)
    }

    /// Component with a quarter of its nodes dynamically shaped.
    pub fn dynamic_component() -> GraphConfig {
        GraphConfig::minimal()
            .with_width(10)
            .with_total_layers(10)
            .with_static_fraction(0.75)
            .with_n_sources(2)
            .with_iterations(15_000)
            .with_read_fraction(0.2)
    }

    /// Large, wide, deep graph in web-app proportions.
    pub fn large_app() -> GraphConfig {
        GraphConfig::minimal()
            .with_width(1000)
            .with_total_layers(12)
            .with_static_fraction(0.95)
            .with_n_sources(4)
            .with_iterations(7_000)
            .with_read_fraction(1.0)
    }

    /// Wide layers with heavy fan-in: stresses diamond deduplication.
    pub fn wide_dense() -> GraphConfig {
        GraphConfig::minimal()
            .with_width(1000)
            .with_total_layers(5)
            .with_static_fraction(1.0)
            .with_n_sources(25)
            .with_iterations(3_000)
            .with_read_fraction(1.0)
    }

    /// Narrow but very deep chain of layers.
    pub fn deep_chain() -> GraphConfig {
        GraphConfig::minimal()
            .with_width(5)
            .with_total_layers(500)
            .with_static_fraction(1.0)
            .with_n_sources(3)
            .with_iterations(500)
            .with_read_fraction(1.0)
    }

    /// Half of all nodes change their effective dependencies with data:
    /// stresses engines that cache dependency lists from the first run.
    pub fn highly_dynamic() -> GraphConfig {
        GraphConfig::minimal()
            .with_width(100)
            .with_total_layers(15)
            .with_static_fraction(0.5)
            .with_n_sources(6)
            .with_iterations(2_000)
            .with_read_fraction(1.0)
    }

    /// All presets as a list for iteration.
    pub fn all() -> Vec<(&'static str, GraphConfig)> {
        vec![
            ("quick", Self::quick()),
            ("simple_component", Self::simple_component()),
            ("dynamic_component", Self::dynamic_component()),
            ("large_app", Self::large_app()),
            ("wide_dense", Self::wide_dense()),
            ("deep_chain", Self::deep_chain()),
            ("highly_dynamic", Self::highly_dynamic()),
        ]
    }
}
