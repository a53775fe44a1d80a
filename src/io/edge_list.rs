//! # EdgeList
//!
//! The EdgeList-Format consists of a single header line `n m`, followed by `m` lines
//! `u v` representing the normalized edge `Edge(u, v)` with zero-based node ids.

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use super::*;
use crate::ops::{AdjacencyList, GraphEdgeOrder};

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for Edge(u, v) in graph.ordered_edges() {
            writeln!(writer, "{u} {v}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_sorted_edges() {
        let graph = AdjArray::from_edges(4, [Edge(2, 3), Edge(0, 1), Edge(1, 3)].iter());

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "4 3\n0 1\n1 3\n2 3\n"
        );
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArray::new(2);

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "2 0\n");
    }
}
