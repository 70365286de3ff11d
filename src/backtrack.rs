//! Reference isomorphism tests by exhaustive backtracking
//!
//! Nodes of the first graph are assigned images in index order. These
//! are mainly useful for cross-checking [find_isomorphism](crate::find_isomorphism)
//! on small graphs.
use crate::graph::AdjGraph;

use itertools::Itertools;

/// Find an isomorphism by trying every image for every node
pub fn backtrack_simple(g1: &AdjGraph, g2: &AdjGraph) -> Option<Vec<usize>> {
    backtrack_with(g1, g2, |_, _| true)
}

/// Find an isomorphism, only trying images of equal degree
///
/// Graphs with different degree sequences are rejected without search.
pub fn backtrack_degree(g1: &AdjGraph, g2: &AdjGraph) -> Option<Vec<usize>> {
    if !g1.degrees().sorted().eq(g2.degrees().sorted()) {
        return None;
    }
    backtrack_with(g1, g2, |u, v| g1.degree(u) == g2.degree(v))
}

fn backtrack_with<F>(g1: &AdjGraph, g2: &AdjGraph, filter: F) -> Option<Vec<usize>>
where
    F: Fn(usize, usize) -> bool,
{
    if g1.node_count() != g2.node_count() {
        return None;
    }
    let n = g1.node_count();
    let mut mapping = Vec::with_capacity(n);
    let mut used = vec![false; n];
    if extend(g1, g2, &filter, &mut mapping, &mut used) {
        Some(mapping)
    } else {
        None
    }
}

fn extend<F>(
    g1: &AdjGraph,
    g2: &AdjGraph,
    filter: &F,
    mapping: &mut Vec<usize>,
    used: &mut [bool],
) -> bool
where
    F: Fn(usize, usize) -> bool,
{
    let u = mapping.len();
    if u == g1.node_count() {
        return true;
    }
    for v in 0..g2.node_count() {
        if used[v] || !filter(u, v) || !consistent(g1, g2, mapping, u, v) {
            continue;
        }
        mapping.push(v);
        used[v] = true;
        if extend(g1, g2, filter, mapping, used) {
            return true;
        }
        used[v] = false;
        mapping.pop();
    }
    false
}

/// Whether mapping `u` to `v` agrees with all earlier assignments
fn consistent(
    g1: &AdjGraph,
    g2: &AdjGraph,
    mapping: &[usize],
    u: usize,
    v: usize,
) -> bool {
    g1.is_adjacent(u, u) == g2.is_adjacent(v, v)
        && mapping.iter().enumerate().all(|(i, &a_i)| {
            g1.is_adjacent(u, i) == g2.is_adjacent(v, a_i)
                && g1.is_adjacent(i, u) == g2.is_adjacent(a_i, v)
        })
}
