use crate::graph::AdjGraph;
use crate::partition::Partition;
use crate::refine::incompatible;
use crate::verify::{is_isomorphism, is_partial_isomorphism};

use log::{debug, trace};

/// Counters collected during a search
#[cfg_attr(feature = "serde-1", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct SearchStats {
    /// Number of search states visited
    pub calls: usize,
    /// Number of partition pairs stabilised
    pub refinements: usize,
    /// Number of states rejected by the compatibility check
    pub pruned: usize,
    /// Number of batches of forced matches
    pub forced_commits: usize,
    /// Number of states with a genuine choice between candidates
    pub branch_points: usize,
    /// Number of candidate images that passed partial validation
    pub candidates_tried: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Accept(Vec<usize>),
    Reject,
}

/// Find an isomorphism from `g1` to `g2`
///
/// On success, entry `u` of the returned vector is the image of node
/// `u` of `g1`. Graphs with different node counts are never
/// isomorphic.
///
/// # Example
///
/// ```rust
/// use wl_iso::{find_isomorphism, graph::AdjGraph, verify::is_isomorphism};
///
/// let g1 = AdjGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// let g2 = AdjGraph::from_edges(3, [(0, 2), (2, 1)]).unwrap();
/// let iso = find_isomorphism(&g1, &g2).unwrap();
/// assert!(is_isomorphism(&g1, &g2, &iso));
///
/// let g3 = AdjGraph::from_edges(3, [(0, 1)]).unwrap();
/// assert_eq!(find_isomorphism(&g1, &g3), None);
/// ```
pub fn find_isomorphism(g1: &AdjGraph, g2: &AdjGraph) -> Option<Vec<usize>> {
    find_isomorphism_with_stats(g1, g2).0
}

/// Like [find_isomorphism], additionally returning search statistics
pub fn find_isomorphism_with_stats(
    g1: &AdjGraph,
    g2: &AdjGraph,
) -> (Option<Vec<usize>>, SearchStats) {
    if g1.node_count() != g2.node_count() {
        debug!(
            "Node counts differ: {} vs {}",
            g1.node_count(),
            g2.node_count()
        );
        return (None, SearchStats::default());
    }
    let mut search = Search::new(g1, g2);
    let outcome = search.run(Partition::new(g1), Partition::new(g2));
    let res = match outcome {
        Outcome::Accept(mapping) => {
            assert!(
                is_isomorphism(g1, g2, &mapping),
                "search accepted an invalid mapping {mapping:?}"
            );
            Some(mapping)
        }
        Outcome::Reject => None,
    };
    debug!("Search finished: {:?}", search.stats);
    (res, search.stats)
}

/// Mutable state shared along one search path
///
/// Every change to `mapping`, `matched` and `k` is undone before a
/// rejected state returns to its parent.
struct Search<'a> {
    g1: &'a AdjGraph,
    g2: &'a AdjGraph,
    mapping: Vec<Option<usize>>,
    matched: Vec<bool>,
    k: usize,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(g1: &'a AdjGraph, g2: &'a AdjGraph) -> Self {
        let n = g1.node_count();
        Self {
            g1,
            g2,
            mapping: vec![None; n],
            matched: vec![false; n],
            k: 0,
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self, mut p1: Partition, mut p2: Partition) -> Outcome {
        self.stats.calls += 1;
        if self.k == self.g1.node_count() {
            return Outcome::Accept(self.mapping.iter().flatten().copied().collect());
        }

        p1.stabilize();
        p2.stabilize();
        self.stats.refinements += 1;
        if incompatible(&p1, &p2) {
            debug!("Pruning at depth {} with {} classes", self.k, p1.class_count());
            self.stats.pruned += 1;
            return Outcome::Reject;
        }

        let Some(class) = p1.smallest_unmatched_class(&self.matched) else {
            return Outcome::Reject;
        };
        if p1.class_size(class) == 1 {
            self.forced_commit(p1, p2)
        } else {
            self.branch(class, p1, p2)
        }
    }

    /// Match all unmatched singleton classes at once
    ///
    /// There is no choice involved, so a failure is passed on to the
    /// parent state without retrying.
    fn forced_commit(&mut self, p1: Partition, p2: Partition) -> Outcome {
        self.stats.forced_commits += 1;
        let mut committed = Vec::new();
        for (c1, c2) in p1.classes().iter().zip(p2.classes()) {
            let u = c1[0];
            if c1.len() != 1 || self.matched[u] {
                continue;
            }
            self.mapping[u] = Some(c2[0]);
            self.matched[u] = true;
            committed.push(u);
        }
        self.k += committed.len();
        trace!(
            "Forced {} matches, {} of {} nodes matched",
            committed.len(),
            self.k,
            self.matched.len()
        );

        if is_partial_isomorphism(self.g1, self.g2, &self.mapping, &self.matched) {
            if let res @ Outcome::Accept(_) = self.run(p1, p2) {
                return res;
            }
        }

        self.k -= committed.len();
        for u in committed {
            self.mapping[u] = None;
            self.matched[u] = false;
        }
        Outcome::Reject
    }

    /// Try every node of the corresponding class of `p2` as the image
    /// of the representative of `class` in `p1`
    fn branch(&mut self, class: usize, p1: Partition, p2: Partition) -> Outcome {
        self.stats.branch_points += 1;
        let u = p1.representative(class);
        debug!(
            "Branching on node {u} in class {class} of size {} at depth {}",
            p1.class_size(class),
            self.k
        );
        self.matched[u] = true;
        self.k += 1;

        for (pos, &v) in p2.class(class).iter().enumerate() {
            self.mapping[u] = Some(v);
            if !is_partial_isomorphism(self.g1, self.g2, &self.mapping, &self.matched) {
                continue;
            }
            self.stats.candidates_tried += 1;
            trace!("Trying {u} -> {v}");
            let mut n1 = p1.clone();
            let mut n2 = p2.clone();
            n1.isolate(class, 0);
            n2.isolate(class, pos);
            if let res @ Outcome::Accept(_) = self.run(n1, n2) {
                return res;
            }
        }

        self.k -= 1;
        self.mapping[u] = None;
        self.matched[u] = false;
        Outcome::Reject
    }
}
