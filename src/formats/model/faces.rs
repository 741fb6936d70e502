//! Triangle strip decoding and vertex compaction.
//!
//! Index buffers hold `u16` triangle strips separated by the primitive
//! restart value `0xFFFF`. Each window of three consecutive indices in a
//! strip is one triangle; every second window has its first two indices
//! swapped to keep a consistent winding. Degenerate triangles (repeated
//! indices) are dropped after winding is assigned.

use std::collections::BTreeMap;

use crate::{Error, Result};

/// Strip separator.
pub const PRIMITIVE_RESTART: u16 = 0xFFFF;

/// Expand strip-encoded `indices` into a triangle list.
pub fn strip_triangles(indices: &[u16]) -> Vec<[u16; 3]> {
    let mut triangles = Vec::new();
    for strip in indices.split(|&i| i == PRIMITIVE_RESTART) {
        for (n, w) in strip.windows(3).enumerate() {
            let tri = if n % 2 == 1 {
                [w[1], w[0], w[2]]
            } else {
                [w[0], w[1], w[2]]
            };
            if tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2] {
                triangles.push(tri);
            }
        }
    }
    triangles
}

/// Triangles renumbered onto the vertices they reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compacted {
    /// Faces using local indices `0..used.len()`.
    pub faces: Vec<[u32; 3]>,
    /// Source vertex index of each local vertex, ascending.
    pub used: Vec<usize>,
}

/// Renumber `triangles` densely by ascending source index.
///
/// Fails when a triangle references a vertex at or beyond `vertex_count`.
pub fn compact(triangles: &[[u16; 3]], vertex_count: usize) -> Result<Compacted> {
    let mut rank: BTreeMap<u16, u32> = triangles.iter().flatten().map(|&i| (i, 0)).collect();
    if let Some((&last, _)) = rank.last_key_value()
        && last as usize >= vertex_count
    {
        return Err(Error::InvalidRange("face index past the mesh's vertices"));
    }
    let mut used = Vec::with_capacity(rank.len());
    for (n, (&index, slot)) in rank.iter_mut().enumerate() {
        *slot = n as u32;
        used.push(index as usize);
    }
    let faces = triangles
        .iter()
        .map(|t| t.map(|i| rank[&i]))
        .collect();
    Ok(Compacted { faces, used })
}

/// Pick the entries of `values` listed in `used`.
pub fn gather<T: Copy>(values: &[T], used: &[usize]) -> Vec<T> {
    used.iter().map(|&i| values[i]).collect()
}
