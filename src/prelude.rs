pub use crate::graph::AdjGraph;
pub use crate::iso::FindIsomorphism;
pub use crate::search::{find_isomorphism, find_isomorphism_with_stats, SearchStats};
pub use crate::verify::is_isomorphism;
