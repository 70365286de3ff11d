use crate::error::GraphError;

use petgraph::{
    graph::{Graph, IndexType},
    visit::{EdgeRef, NodeIndexable},
    Undirected,
};

/// Immutable graph on the nodes `0..n`
///
/// Adjacency is stored both as a dense matrix, for constant-time
/// edge queries during validation, and as per-node neighbour lists,
/// which seed the signatures used in colour refinement.
///
/// # Example
///
/// ```rust
/// use wl_iso::graph::AdjGraph;
///
/// let path = AdjGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// assert_eq!(path.degree(1), 2);
/// assert!(path.is_adjacent(2, 1));
/// assert!(!path.is_adjacent(0, 2));
/// ```
#[cfg_attr(feature = "serde-1", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AdjGraph {
    adj: Vec<Vec<bool>>,
    neighbors: Vec<Vec<usize>>,
}

impl AdjGraph {
    /// Construct a graph from the neighbour list of each node
    ///
    /// The relation is recorded exactly as given: `v` in the list of
    /// `u` sets `adj(u, v)` only. Repeated entries collapse.
    pub fn from_adjacency_lists<I, L>(lists: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = usize>,
    {
        let lists = Vec::from_iter(lists.into_iter().map(Vec::from_iter));
        let n = lists.len();
        let mut adj = vec![vec![false; n]; n];
        for (node, list) in lists.into_iter().enumerate() {
            for index in list {
                if index >= n {
                    return Err(GraphError::NodeOutOfRange { node, index, n });
                }
                adj[node][index] = true;
            }
        }
        Ok(Self::from_matrix(adj))
    }

    /// Construct an undirected graph with `n` nodes from an edge list
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adj = vec![vec![false; n]; n];
        for (u, v) in edges {
            if u >= n || v >= n {
                let (node, index) = if u >= n { (v, u) } else { (u, v) };
                return Err(GraphError::NodeOutOfRange { node, index, n });
            }
            adj[u][v] = true;
            adj[v][u] = true;
        }
        Ok(Self::from_matrix(adj))
    }

    fn from_matrix(adj: Vec<Vec<bool>>) -> Self {
        let neighbors = Vec::from_iter(adj.iter().map(|row| {
            Vec::from_iter(
                row.iter().enumerate().filter(|&(_, &a)| a).map(|(v, _)| v),
            )
        }));
        Self { adj, neighbors }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.adj[u][v]
    }

    pub fn degree(&self, u: usize) -> usize {
        self.neighbors[u].len()
    }

    /// Neighbours of `u` in ascending order
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.neighbors[u]
    }

    pub fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().map(|n| n.len())
    }
}

impl<N, E, Ix: IndexType> From<&Graph<N, E, Undirected, Ix>> for AdjGraph {
    fn from(g: &Graph<N, E, Undirected, Ix>) -> Self {
        let n = g.node_count();
        let mut adj = vec![vec![false; n]; n];
        for e in g.edge_references() {
            let (u, v) = (g.to_index(e.source()), g.to_index(e.target()));
            adj[u][v] = true;
            adj[v][u] = true;
        }
        Self::from_matrix(adj)
    }
}
