use petgraph::{
    graph::{Graph, IndexType, NodeIndex, UnGraph},
    EdgeType,
};
use rand::{
    distributions::Uniform,
    prelude::*
};
use rand_distr::Normal;
use rand_xoshiro::Xoshiro256Plus;

/// Endless stream of random simple undirected graphs
pub struct GraphIter {
    rng: Xoshiro256Plus,
    pub node_distr: Uniform<usize>,
    edge_distr: Normal<f64>,
}

impl Default for GraphIter {
    fn default() -> Self {
        Self {
            rng: Xoshiro256Plus::seed_from_u64(0),
            node_distr: Uniform::from(1..10),
            edge_distr: Normal::new(0.5, 1.0).unwrap(),
        }
    }
}

impl Iterator for GraphIter {
    type Item = UnGraph<(), ()>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rng = &mut self.rng;
        let nnodes = self.node_distr.sample(&mut rng);
        let mut g = Graph::with_capacity(nnodes, nnodes * nnodes / 2);
        for _ in 0..nnodes {
            g.add_node(());
        }
        for i in 0..nnodes {
            for j in (i + 1)..nnodes {
                let has_edge = self.edge_distr.sample(&mut rng)
                    .clamp(0.0, 1.0)
                    .round() as u64;
                if has_edge > 0 {
                    g.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }
        Some(g)
    }
}

/// Apply a random permutation to the node labels
pub fn randomize_labels<N, E, Ty, Ix, R>(
    g: Graph<N, E, Ty, Ix>,
    rng: &mut R
) -> Graph<N, E, Ty, Ix>
where
    N: Clone,
    E: Clone,
    Ty: EdgeType,
    Ix: IndexType,
    R: Rng,
{
    let mut new_pos = Vec::from_iter(0..g.node_count());
    new_pos.shuffle(rng);
    let mut old_pos = vec![0; new_pos.len()];
    for (old, &new) in new_pos.iter().enumerate() {
        old_pos[new] = old;
    }

    let mut res = Graph::with_capacity(g.node_count(), g.edge_count());
    for &old in &old_pos {
        res.add_node(g[NodeIndex::new(old)].clone());
    }
    for e in g.raw_edges() {
        res.add_edge(
            NodeIndex::new(new_pos[e.source().index()]),
            NodeIndex::new(new_pos[e.target().index()]),
            e.weight.clone()
        );
    }
    res
}
