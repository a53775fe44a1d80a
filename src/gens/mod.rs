/*!
# Graph Generators

This module provides a suite of traits and builder patterns for constructing random graph
generators.

Each graph generator allows parameterized control over structural properties of the graph
(e.g., number of nodes, connection probability, power-law exponent), and can produce either
a complete collection of edges or a stream of them through iterators.

Generators are designed to support a builder-style pattern for fluent graph configuration.
The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `try_generate()` or `try_stream()`.

Parameters are validated when generation starts; invalid configurations surface as
[`Error::InvalidArgument`](crate::Error::InvalidArgument) instead of producing a graph.

In addition, the [`RandomGraph`] trait abstracts the generation of whole graph instances
into reusable constructors. These implementations internally rely on the edge generators to
create graph structure according to each model's requirements.

Supported models include:
- `G(n,p)`: Erdős–Rényi model with independent edge probability ([`Gnp`])
- Barabási–Albert preferential attachment ([`PrefAttach`])
- Configuration model with power-law degree resampling ([`ConfigModel`])

All graph types implementing [`GraphFromScratch`] can leverage the [`RandomGraph`] trait
for convenient random graph construction.
*/

use rand::Rng;

use crate::{error::Result, prelude::*};

mod config_model;
mod gnp;
mod pref_attach;

pub use config_model::*;
pub use gnp::*;
pub use pref_attach::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator (builder variant).
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list or a lazily-evaluated
/// stream (iterator) of edges. All randomness is drawn from the caller-provided `Rng`, so
/// a seeded generator makes runs reproducible.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `try_stream()` into a `Vec<Edge>` as default.
    ///
    /// # Errors
    /// Propagates the parameter validation of [`GraphGenerator::try_stream`].
    fn try_generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        Ok(self.try_stream(rng)?.collect())
    }

    /// Creates a lazy iterator (stream) over generated edges.
    ///
    /// Preferred for large graphs or pipelined filtering. Depending on the underlying
    /// graph model, this might also be just an iterator over an already generated list of
    /// edges if a direct iterator is not feasible in the model.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the generator
    /// is misconfigured; model-specific failures are documented on the implementors.
    fn try_stream<R>(&self, rng: &mut R) -> Result<impl Iterator<Item = Edge>>
    where
        R: Rng;
}

/// Trait for building full graph instances from the implemented random models.
///
/// Requires that the implementing type supports construction from a set of edges.
/// Provided implementations use the corresponding edge generators under the hood.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng;

    /// Creates a random Barabási–Albert graph with `n` nodes, a complete seed graph on
    /// `n0` nodes, and `m` attachments per arriving node.
    fn barabasi_albert<R>(rng: &mut R, n: NumNodes, n0: NumNodes, m: NumNodes) -> Result<Self>
    where
        R: Rng;

    /// Creates a random configuration-model graph with `n` nodes and power-law degree
    /// exponent `gamma`.
    fn configuration_model<R>(rng: &mut R, n: NumNodes, gamma: f64) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Ok(Self::from_edges(
            n,
            Gnp::new().nodes(n).prob(p).try_stream(rng)?,
        ))
    }

    fn barabasi_albert<R>(rng: &mut R, n: NumNodes, n0: NumNodes, m: NumNodes) -> Result<Self>
    where
        R: Rng,
    {
        Ok(Self::from_edges(
            n,
            PrefAttach::new()
                .nodes(n)
                .seed_nodes(n0)
                .attachments(m)
                .try_stream(rng)?,
        ))
    }

    fn configuration_model<R>(rng: &mut R, n: NumNodes, gamma: f64) -> Result<Self>
    where
        R: Rng,
    {
        Ok(Self::from_edges(
            n,
            ConfigModel::new().nodes(n).gamma(gamma).try_stream(rng)?,
        ))
    }
}
