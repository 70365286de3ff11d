use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    #[error("Neighbour {index} of node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: usize, index: usize, n: usize },
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Expected a non-negative integer, found `{0}`")]
    InvalidToken(String),
    #[error("io error")]
    Io(#[from] std::io::Error),
}
