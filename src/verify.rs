use crate::graph::AdjGraph;

use itertools::iproduct;

/// Check a partial mapping on the nodes marked in `matched`
///
/// For every ordered pair `(u, v)` of matched nodes of `g1`, the
/// adjacency of `u` and `v` in `g1` has to coincide with the adjacency
/// of their images in `g2`. Entries of unmatched nodes are ignored.
pub fn is_partial_isomorphism(
    g1: &AdjGraph,
    g2: &AdjGraph,
    mapping: &[Option<usize>],
    matched: &[bool],
) -> bool {
    let domain = Vec::from_iter(
        (0..g1.node_count())
            .filter(|&u| matched[u])
            .filter_map(|u| mapping[u].map(|img| (u, img))),
    );
    if domain.len() != matched.iter().filter(|&&m| m).count() {
        return false;
    }
    iproduct!(&domain, &domain).all(|(&(u, a_u), &(v, a_v))| {
        g1.is_adjacent(u, v) == g2.is_adjacent(a_u, a_v)
    })
}

/// Check that `mapping` is an isomorphism from `g1` to `g2`
///
/// The mapping has to be a bijection on the node set, preserving both
/// adjacency and non-adjacency.
pub fn is_isomorphism(g1: &AdjGraph, g2: &AdjGraph, mapping: &[usize]) -> bool {
    let n = g1.node_count();
    if g2.node_count() != n || mapping.len() != n {
        return false;
    }
    let mut hit = vec![false; n];
    for &img in mapping {
        if img >= n || std::mem::replace(&mut hit[img], true) {
            return false;
        }
    }
    iproduct!(0..n, 0..n).all(|(u, v)| {
        g1.is_adjacent(u, v) == g2.is_adjacent(mapping[u], mapping[v])
    })
}
