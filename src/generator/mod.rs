//! Synthetic graph construction: sources, derived rows, and the shared
//! evaluation counter.

mod counter;
mod graph;
mod row;

pub use counter::EvalCounter;
pub use graph::{build_graph, CellRef, DerivedNode, Graph, GraphAndCounter, NodeKind};
