//! Graph isomorphism by colour refinement and backtracking.
//!
//! Decides whether two finite graphs are isomorphic and, if they are,
//! finds an explicit bijection between their nodes. Both graphs are
//! first refined to their stable partitions with the one-dimensional
//! [Weisfeiler-Lehman method](https://en.wikipedia.org/wiki/Weisfeiler_Leman_graph_isomorphism_test).
//! Where refinement leaves several candidates, a backtracking search
//! fixes one node at a time, refining again after every choice.
//! Graphs from [petgraph](https://github.com/petgraph/petgraph) are
//! supported directly.
//!
//! # Example
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use wl_iso::prelude::*;
//!
//! // Two different vertex labellings for the tree graph with two edges
//! let g1 = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
//! let g2 = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2)]);
//!
//! // The middle of the path has to be mapped to the centre
//! let iso = g1.find_isomorphism(&g2).unwrap();
//! assert_eq!(iso[1].index(), 0);
//!
//! // A path is not isomorphic to a triangle
//! let g3 = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
//! assert!(g1.find_isomorphism(&g3).is_none());
//!
//! // Alternatively, work with the dense representation directly
//! let g1 = AdjGraph::from(&g1);
//! let g2 = AdjGraph::from(&g2);
//! let iso = find_isomorphism(&g1, &g2).unwrap();
//! assert!(is_isomorphism(&g1, &g2, &iso));
//! ```
//!
//! There is no guarantee of polynomial running time. For graphs that
//! colour refinement cannot tell apart, such as strongly regular
//! graphs, the search degenerates to exhaustive backtracking.
//!
//! # Features
//!
//! * `serde-1`: Enables serialisation of [AdjGraph](graph::AdjGraph)
//!              and [SearchStats](search::SearchStats) objects using
//!              [serde](https://crates.io/crates/serde).
//!
//! To enable features `feature1`, `feature2` add the following to
//! your Cargo.toml:
//! ```toml
//! [dependencies]
//! wl-iso = { version = "0.1", features = ["feature1", "feature2"] }
//! ```
pub mod backtrack;
pub mod error;
pub mod graph;
pub mod io;
mod iso;
pub mod partition;
pub mod prelude;
pub mod refine;
pub mod search;
pub mod verify;

pub use iso::FindIsomorphism;
pub use search::{find_isomorphism, find_isomorphism_with_stats};
