use crate::graph::AdjGraph;
use crate::search::find_isomorphism;

use petgraph::{
    graph::{Graph, IndexType, NodeIndex},
    Undirected,
};

/// Find an explicit isomorphism between two graphs
pub trait FindIsomorphism {
    type Node;

    /// Map every node of `self` to a node of `other`, such that
    /// adjacency is preserved in both directions
    ///
    /// Returns `None` if the graphs are not isomorphic.
    fn find_isomorphism(&self, other: &Self) -> Option<Vec<Self::Node>>;
}

impl<N, E, Ix: IndexType> FindIsomorphism for Graph<N, E, Undirected, Ix> {
    type Node = NodeIndex<Ix>;

    fn find_isomorphism(&self, other: &Self) -> Option<Vec<Self::Node>> {
        let g1 = AdjGraph::from(self);
        let g2 = AdjGraph::from(other);
        let mapping = find_isomorphism(&g1, &g2)?;
        Some(Vec::from_iter(mapping.into_iter().map(NodeIndex::new)))
    }
}

impl FindIsomorphism for AdjGraph {
    type Node = usize;

    fn find_isomorphism(&self, other: &Self) -> Option<Vec<Self::Node>> {
        find_isomorphism(self, other)
    }
}
