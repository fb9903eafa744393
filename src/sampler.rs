//! Leaf sampling by repeated removal.

use crate::stream::FloatSource;

/// Return a copy of `list` with exactly `remove_count` elements removed.
///
/// Removals happen one at a time; each draws a position
/// `floor(rand * current_len)` in the shrinking copy. Which elements survive
/// is therefore order-dependent on the stream, not a combinatorial subset:
/// reproducing a fixed seed requires this exact shrink-and-redraw process.
/// Retained elements keep their original relative order.
///
/// Precondition (caller contract): `remove_count <= list.len()`. Violations
/// panic on out-of-range removal.
pub fn remove_elems<T: Clone, R: FloatSource>(
    list: &[T],
    remove_count: usize,
    rand: &mut R,
) -> Vec<T> {
    let mut copy = list.to_vec();
    for _ in 0..remove_count {
        let rm_dex = (rand.next_float() * copy.len() as f64).floor() as usize;
        copy.remove(rm_dex);
    }
    copy
}
