/*!
# IO

Utilities for exporting graphs to different text file formats.

## Output Formats

Currently supported output formats:
- **EdgeList**: a `n m` header line followed by one `u v` line per edge,
- **Pajek**: the `.net` format of the Pajek network analysis tool, which the original
  experiment scripts of these models typically consume.

## Traits

To generalize over writing:
- [`GraphWriter`] is implemented by writers for a specific format,
- [`GraphWrite`] abstracts over writing using a given [`FileFormat`].

Generated graphs are read-only after generation, so no readers are provided; regenerating
from a stored seed is the canonical way to reproduce a graph.
*/

pub mod edge_list;
pub mod pajek;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use edge_list::*;
pub use pajek::*;

/// Identifier for a graph file format.
///
/// Used in [`GraphWrite`] to determine the correct writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Edge list format
    EdgeList,
    /// Pajek `.net` format
    Pajek,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edgelist" => Ok(FileFormat::EdgeList),
            "pajek" => Ok(FileFormat::Pajek),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}").as_str(),
            )),
        }
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any [`Write`] instance and a
/// convenience wrapper to write directly to files.
///
/// Typically implemented by specific writers (e.g., [`EdgeListWriter`], [`PajekWriter`]).
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
///
/// Provides a unified interface to output graphs to writers or files by dispatching to the
/// correct format-specific writer.
///
/// Automatically implemented for graphs that support all required format-specific traits
/// (e.g., [`EdgeListWrite`], [`PajekWrite`]).
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: EdgeListWrite + PajekWrite,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => self.try_write_edge_list(writer),
            FileFormat::Pajek => self.try_write_pajek(writer),
        }
    }
}
