//! Collapsing stubs into final vertices.
//!
//! Final vertex `g` owns the `m` consecutive stubs `(g - 1) m + 1 ..= g m`. A stub reference
//! that stays inside the current group becomes a self-loop of the final vertex; any other
//! reference becomes an edge to the group it lands in. Folding only ever writes to the group
//! currently being walked, so folding `m`-aligned sub-ranges independently and concatenating
//! the parts gives exactly the graph obtained from one pass over the whole range.

use crate::core::{
    entities::{Graph, Vertex, VertexId},
    utils::errors::{ConfigError, GenerationError},
};
use std::ops::Range;

/// Final vertex owning stub `id` for fold factor `m`.
#[inline]
pub fn group_of(id: VertexId, m: VertexId) -> VertexId {
    if id % m == 0 {
        id / m
    } else {
        id / m + 1
    }
}

/// Checks that `range` lies within `len` stubs and starts and ends on group boundaries.
///
/// The end of the stub graph counts as a boundary even when `len` is not a multiple of `m`.
pub fn check_range(range: &Range<usize>, len: usize, m: usize) -> Result<(), GenerationError> {
    if m == 0 {
        return Err(ConfigError::EdgeMultiplicityTooSmall(m).into());
    }
    if range.start > range.end || range.end > len {
        return Err(GenerationError::FoldRangeOutOfBounds {
            from: range.start,
            to: range.end,
            len,
        });
    }
    if range.start % m != 0 || (range.end % m != 0 && range.end != len) {
        return Err(GenerationError::MisalignedFoldRange {
            from: range.start,
            to: range.end,
            multiplicity: m,
        });
    }
    Ok(())
}

/// Folds the stubs with zero-based indices in `range` into final vertices.
///
/// The stub at index `i` must carry id `i + 1`, as produced by the stub builder.
pub fn fold(stubs: &Graph, range: Range<usize>, m: usize) -> Result<Graph, GenerationError> {
    check_range(&range, stubs.count(), m)?;
    let step = m as VertexId;

    let mut folded = Graph::with_capacity(range.len() / m + 1);
    let mut group = (range.start / m) as VertexId + 1;
    // open interval of stub ids belonging to `group`
    let mut left = (group - 1) * step;
    let mut right = group * step + 1;
    let mut loops: Vec<VertexId> = Vec::new();

    for (offset, stub) in stubs.vertices()[range.clone()].iter().enumerate() {
        for &neighbor in stub.neighbors() {
            if left < neighbor && neighbor < right {
                loops.push(group);
            } else {
                folded.attach_neighbor(group, group_of(neighbor, step));
            }
        }

        let position = range.start + offset + 1;
        if position % m == 0 || position == range.end {
            if !loops.is_empty() {
                folded.attach_neighbors(group, &loops);
            } else if !folded.contains(group) {
                folded.add_vertex(Vertex::new(group));
            }
            loops.clear();
            group += 1;
            left += step;
            right += step;
        }
    }

    Ok(folded)
}
