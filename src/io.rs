//! Plain text graph format
//!
//! A graph starts with a header `n m` giving the number of nodes and
//! edges, followed by one record per node `u = 0, ..., n - 1`. Each
//! record is the number `d` of neighbours of `u` followed by `d`
//! neighbour indices. Tokens are separated by arbitrary whitespace,
//! and several graphs may follow each other in the same stream.
//!
//! The edge count in the header is not checked. Adjacency is
//! recorded exactly as listed, so undirected graphs have to list every
//! edge from both ends.
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::GraphError;
use crate::graph::AdjGraph;

/// Verdict written for isomorphic graphs
pub const ISOMORPHIC: &str = "oui";
/// Verdict written for non-isomorphic graphs
pub const NOT_ISOMORPHIC: &str = "non";

/// Whitespace-separated tokens of a buffered reader
pub struct Tokens<R> {
    reader: R,
    line: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    /// Parse the next token
    pub fn next_parsed<T: FromStr>(&mut self) -> Result<T, GraphError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| GraphError::InvalidToken(token))
    }

    fn next_token(&mut self) -> Result<String, GraphError> {
        loop {
            if let Some(token) = self.line.pop() {
                return Ok(token);
            }
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Err(GraphError::UnexpectedEof);
            }
            self.line =
                Vec::from_iter(buf.split_whitespace().rev().map(String::from));
        }
    }
}

/// Read the next graph from a token stream
pub fn read_graph<R: BufRead>(
    tokens: &mut Tokens<R>,
) -> Result<AdjGraph, GraphError> {
    let n: usize = tokens.next_parsed()?;
    let _m: usize = tokens.next_parsed()?;
    let mut lists = Vec::with_capacity(n);
    for _ in 0..n {
        let degree: usize = tokens.next_parsed()?;
        let list = (0..degree)
            .map(|_| tokens.next_parsed())
            .collect::<Result<Vec<usize>, _>>()?;
        lists.push(list);
    }
    AdjGraph::from_adjacency_lists(lists)
}

/// Read two consecutive graphs
pub fn read_graph_pair<R: BufRead>(
    reader: R,
) -> Result<(AdjGraph, AdjGraph), GraphError> {
    let mut tokens = Tokens::new(reader);
    let g1 = read_graph(&mut tokens)?;
    let g2 = read_graph(&mut tokens)?;
    Ok((g1, g2))
}

/// Write the verdict, followed by the images of all nodes if an
/// isomorphism was found
pub fn write_outcome<W: Write>(
    mut out: W,
    iso: Option<&[usize]>,
) -> std::io::Result<()> {
    match iso {
        None => writeln!(out, "{NOT_ISOMORPHIC}"),
        Some(mapping) => {
            writeln!(out, "{ISOMORPHIC}")?;
            let images = Vec::from_iter(mapping.iter().map(usize::to_string));
            writeln!(out, "{}", images.join(" "))
        }
    }
}
