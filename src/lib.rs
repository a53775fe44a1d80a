/*!
`rgraphs` generates synthetic random graphs under three classical network models and
analyzes their degree distributions:

- **Erdős–Rényi** `G(n,p)`: every node pair is connected independently with probability `p`,
- **Barabási–Albert** preferential attachment: new nodes connect to existing nodes with
  probability proportional to their current degree,
- **Configuration model**: a power-law degree sequence is drawn per node and stubs are
  randomly matched into edges.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the
graph. As the generated networks stay far below `2^32` nodes, this suffices and saves space
compared to `u64/usize`. For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

All three models produce **simple undirected graphs**: no self-loops, no duplicate edges.

# Design

Each generator is a configurable struct that is set up via the *Builder* / *Setter* pattern
before being run against a caller-provided random number generator:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `try_generate()` or `try_stream()`.

The [`RandomGraph`](crate::gens::RandomGraph) trait additionally abstracts whole-graph
construction for all implemented models into reusable constructors on every graph type
implementing [`GraphFromScratch`](crate::ops::GraphFromScratch).

Randomness is never ambient: every generation method borrows a `rand::Rng`, so seeding a
`Pcg64Mcg` (or any other RNG) makes a run fully reproducible.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all
  standard graph representations,
- [`gens`] includes the random graph generators for the three network models,
- [`algo`] includes degree-distribution analysis, most notably power-law exponent
  estimation via log-binned histogram regression,
- [`io`] includes writers for exporting a generated graph to text formats,
- [`utils`] includes helper traits and the bounded power-law degree distribution.

In most use-cases, `use rgraphs::{prelude::*, gens::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

pub use edge::{Edge, NumEdges};
pub use error::{Error, Result};
pub use node::{Node, NodeBitSet, NumNodes};

/// `rgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
