//! Layered dependency graphs over an engine adapter.

use crate::config::GraphConfig;
use crate::engine::{ReactiveEngine, ReadCell};
use crate::generator::counter::EvalCounter;
use crate::generator::row::make_row;
use crate::stream::FloatStream;
use serde::{Deserialize, Serialize};

/// Shape tag for a derived node.
///
/// Recorded out of band at build time so tooling can distinguish node shapes
/// without inspecting combining functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Fixed dependency set, every source read on every evaluation.
    Static,
    /// Effective dependency set varies with the first source's value.
    Dynamic,
}

impl NodeKind {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, NodeKind::Dynamic)
    }

    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Static => "static",
            NodeKind::Dynamic => "dynamic",
        }
    }
}

/// Derived cell handle plus its shape tag.
#[derive(Debug, Clone)]
pub struct DerivedNode<C> {
    pub cell: C,
    pub kind: NodeKind,
}

/// Row input: either a source signal (first derived layer) or a computed
/// cell from the previous layer.
#[derive(Debug, Clone)]
pub enum CellRef<S, C> {
    Signal(S),
    Computed(C),
}

impl<S: ReadCell, C: ReadCell> ReadCell for CellRef<S, C> {
    fn read(&self) -> i64 {
        match self {
            CellRef::Signal(signal) => signal.read(),
            CellRef::Computed(computed) => computed.read(),
        }
    }
}

/// A built graph: `width` sources plus `total_layers - 1` derived layers of
/// the same width. Layer `i` depends only on layer `i - 1` (layer 0 on the
/// sources); no back-edges, no skip-layer edges.
pub struct Graph<E: ReactiveEngine> {
    pub sources: Vec<E::Signal>,
    pub layers: Vec<Vec<DerivedNode<E::Computed>>>,
}

impl<E: ReactiveEngine> Graph<E> {
    /// The last derived layer, read and summed by the driver.
    ///
    /// Panics if the graph has no derived layers (`total_layers = 1`).
    pub fn leaves(&self) -> &[DerivedNode<E::Computed>] {
        &self.layers[self.layers.len() - 1]
    }

    /// Number of dynamic nodes across all layers.
    pub fn dynamic_node_count(&self) -> usize {
        self.layers
            .iter()
            .flatten()
            .filter(|node| node.kind.is_dynamic())
            .count()
    }

    /// Number of static nodes across all layers.
    pub fn static_node_count(&self) -> usize {
        self.layers
            .iter()
            .flatten()
            .filter(|node| !node.kind.is_dynamic())
            .count()
    }

    /// Shape tags per layer, for diagnostic dumps.
    pub fn kind_rows(&self) -> Vec<Vec<NodeKind>> {
        self.layers
            .iter()
            .map(|row| row.iter().map(|node| node.kind).collect())
            .collect()
    }
}

/// A graph paired with its evaluation counter; both share the same lifetime.
pub struct GraphAndCounter<E: ReactiveEngine> {
    pub graph: Graph<E>,
    pub counter: EvalCounter,
}

/// Build a layered graph per `config`.
///
/// Allocates `width` source cells seeded `0..width-1`, then builds
/// `total_layers - 1` derived rows, threading each row as the source set of
/// the next. The whole build runs inside a single `with_build` scope so the
/// engine may batch dependency registration. Behavior is undefined (caller
/// responsibility) if `n_sources > width`.
pub fn build_graph<E: ReactiveEngine>(engine: &E, config: &GraphConfig) -> GraphAndCounter<E> {
    let seed = config.seed.unwrap_or_else(rand::random);

    engine.with_build(|| {
        let counter = EvalCounter::new();
        let mut stream = FloatStream::from_seed(seed);

        let sources: Vec<E::Signal> = (0..config.width)
            .map(|i| engine.signal(i as i64))
            .collect();

        let mut prev: Vec<CellRef<E::Signal, E::Computed>> =
            sources.iter().cloned().map(CellRef::Signal).collect();

        let mut layers = Vec::with_capacity(config.total_layers.saturating_sub(1) as usize);
        for _ in 1..config.total_layers {
            let row = make_row(
                engine,
                &prev,
                &counter,
                config.static_fraction,
                config.n_sources,
                &mut stream,
            );
            prev = row
                .iter()
                .map(|node| CellRef::Computed(node.cell.clone()))
                .collect();
            layers.push(row);
        }

        GraphAndCounter {
            graph: Graph { sources, layers },
            counter,
        }
    })
}
