//! # Pajek
//!
//! The Pajek `.net` format lists all vertices under a `*Vertices n` section header with
//! one-based ids and quoted labels, followed by an `*Edges` section with one `u v` line
//! per undirected edge. We label every vertex with its zero-based node id.

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use super::*;
use crate::ops::AdjacencyList;

/// A writer for the Pajek `.net` format
#[derive(Debug, Clone, Default)]
pub struct PajekWriter;

impl PajekWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for PajekWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "*Vertices {}", graph.number_of_nodes())?;
        for u in graph.vertices() {
            writeln!(writer, "{} \"{}\"", u + 1, u)?;
        }

        writeln!(writer, "*Edges")?;
        for Edge(u, v) in graph.ordered_edges() {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the Pajek format.
/// Shorthand for default settings.
pub trait PajekWrite {
    /// Tries to write the graph to a writer
    fn try_write_pajek<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_pajek_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_pajek(writer)
    }
}

impl<G: AdjacencyList> PajekWrite for G {
    fn try_write_pajek<W: Write>(&self, writer: W) -> Result<()> {
        PajekWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_vertices_and_edges() {
        let graph = AdjArray::from_edges(3, [Edge(0, 2), Edge(0, 1)].iter());

        let mut buffer = Vec::new();
        graph.try_write_pajek(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "*Vertices 3\n1 \"0\"\n2 \"1\"\n3 \"2\"\n*Edges\n1 2\n1 3\n"
        );
    }
}
