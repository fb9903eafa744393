//! One derived layer at a time.

use crate::engine::{ReactiveEngine, ReadCell};
use crate::generator::counter::EvalCounter;
use crate::generator::graph::{CellRef, DerivedNode, NodeKind};
use crate::stream::FloatSource;

/// Build one derived row from the previous row.
///
/// Node `my_dex` reads `n_sources` cells of the previous row at positions
/// `(my_dex + k) % width`, in that order; the first entry is the dynamic
/// node's distinguished first source. One draw from the shaping stream per
/// node decides its kind: strictly below `static_fraction` is static.
pub(crate) fn make_row<E: ReactiveEngine, R: FloatSource>(
    engine: &E,
    prev: &[CellRef<E::Signal, E::Computed>],
    counter: &EvalCounter,
    static_fraction: f64,
    n_sources: u32,
    stream: &mut R,
) -> Vec<DerivedNode<E::Computed>> {
    let width = prev.len();

    (0..width)
        .map(|my_dex| {
            let deps: Vec<CellRef<E::Signal, E::Computed>> = (0..n_sources as usize)
                .map(|k| prev[(my_dex + k) % width].clone())
                .collect();
            let counter = counter.clone();

            if stream.next_float() < static_fraction {
                // Static shape: every source read on every run, list order,
                // no short-circuiting. Sums grow geometrically with layer
                // depth, so addition wraps rather than aborting deep runs.
                let cell = engine.computed(Box::new(move || {
                    counter.bump();
                    deps.iter()
                        .fold(0i64, |sum, dep| sum.wrapping_add(dep.read()))
                }));
                DerivedNode {
                    cell,
                    kind: NodeKind::Static,
                }
            } else {
                // Dynamic shape: the first source's value picks one tail
                // position to skip, so the effective dependency set varies
                // with data rather than structure.
                let cell = engine.computed(Box::new(move || {
                    counter.bump();
                    let mut sum = deps[0].read();
                    let tail = &deps[1..];
                    if !tail.is_empty() {
                        let should_drop = (sum & 1) == 1;
                        let drop_dex = sum.rem_euclid(tail.len() as i64) as usize;
                        for (pos, dep) in tail.iter().enumerate() {
                            if should_drop && pos == drop_dex {
                                continue;
                            }
                            sum = sum.wrapping_add(dep.read());
                        }
                    }
                    sum
                }));
                DerivedNode {
                    cell,
                    kind: NodeKind::Dynamic,
                }
            }
        })
        .collect()
}
