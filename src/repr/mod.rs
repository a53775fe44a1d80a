/*!
# Graph Representations

Graphs are stored as one [`Neighborhood`] per node inside an [`UndirectedGraph`].
The neighborhood backend determines the trade-off between memory usage and lookup
performance:

- [`AdjArray`]: adjacency arrays (`Vec<Node>` per node), compact and fast to iterate,
- [`AdjMatrix`]: one bitset row per node, constant-time edge queries for dense graphs.

[`digest`] additionally provides representation-independent hash digests of graphs,
useful as regression baselines for seeded random generation.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub mod digest;

pub use neighborhood::*;
pub use undirected::*;
