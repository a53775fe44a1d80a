use fxhash::FxHashSet;
use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};
use rand_distr::Distribution;

use crate::{error::invalid_argument_unless, gens::*, prelude::*, utils::TruncatedPowerLaw};

/// Default number of shuffle-and-pair rounds before generation gives up
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Configuration-model generator with power-law degree resampling.
///
/// Every node draws a target degree from a [`TruncatedPowerLaw`] with mass proportional to
/// `k^(-gamma)` over `1..=floor(sqrt(n))`. The node id is then repeated once per drawn
/// degree in a stub list, and stubs are matched into edges in rounds: shuffle the stubs,
/// pair consecutive entries, accept a pair unless it forms a self-loop or repeats an
/// accepted edge, and carry the stubs of rejected pairs into the next round.
///
/// Rounds end once at most one stub is left. Because rejected stubs may never pair up
/// (e.g. when all remaining stubs belong to one node), the rounds are capped; hitting the
/// cap is reported as [`Error::NonConvergence`](crate::Error::NonConvergence) rather than
/// silently returning a truncated graph. The realized degree sequence may fall short of
/// the drawn one by the stubs that were still unmatched when pairing converged.
#[derive(Debug, Copy, Clone)]
pub struct ConfigModel {
    n: NumNodes,
    gamma: Option<f64>,
    max_rounds: usize,
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self {
            n: 0,
            gamma: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl ConfigModel {
    /// Creates a new empty configuration-model generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the power-law exponent of the degree distribution
    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = Some(gamma);
    }

    /// Sets the power-law exponent of the degree distribution (builder variant)
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.set_gamma(gamma);
        self
    }

    /// Sets the maximum number of pairing rounds
    pub fn set_max_rounds(&mut self, max_rounds: usize) {
        self.max_rounds = max_rounds;
    }

    /// Sets the maximum number of pairing rounds (builder variant)
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.set_max_rounds(max_rounds);
        self
    }
}

impl NumNodesGen for ConfigModel {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for ConfigModel {
    /// Draws the degree sequence and runs stub pairing to completion, then streams the
    /// accepted edges.
    ///
    /// Unlike the streaming models, all randomized work happens up front: the pairing
    /// rounds need global knowledge of accepted edges, so edges cannot be produced lazily.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `n == 0` or
    ///   `gamma <= 1` (or unset),
    /// - [`Error::NonConvergence`](crate::Error::NonConvergence) if pairing hits the round
    ///   cap with more than one stub unmatched.
    fn try_stream<R>(&self, rng: &mut R) -> Result<impl Iterator<Item = Edge>>
    where
        R: Rng,
    {
        invalid_argument_unless!(self.n > 0, "at least one node must be generated");
        let gamma = self
            .gamma
            .ok_or_else(|| Error::InvalidArgument("gamma of ConfigModel was not set".into()))?;

        // degree support is 1..=floor(sqrt(n)); n >= 1 keeps it non-empty
        let max_degree = (self.n as f64).sqrt().floor() as NumNodes;
        let distr = TruncatedPowerLaw::new(gamma, max_degree)?;

        let stubs: Vec<Node> = (0..self.n)
            .flat_map(|u| std::iter::repeat(u).take(distr.sample(rng) as usize))
            .collect();

        Ok(pair_stubs(rng, stubs, self.max_rounds)?.into_iter())
    }
}

/// Matches stubs into simple edges via shuffle-and-pair rounds.
///
/// Each round shuffles the remaining stubs uniformly and walks consecutive pairs: an
/// accepted pair becomes an edge, the first stub of a rejected pair (self-loop or repeated
/// edge) is carried into the next round, as is a trailing unpaired stub. Accepted edges
/// from all rounds are unioned.
fn pair_stubs<R>(rng: &mut R, mut stubs: Vec<Node>, max_rounds: usize) -> Result<Vec<Edge>>
where
    R: Rng,
{
    let mut edges = Vec::with_capacity(stubs.len() / 2);
    let mut accepted: FxHashSet<Edge> = FxHashSet::default();

    let mut rounds = 0;
    while stubs.len() > 1 {
        if rounds == max_rounds {
            return Err(Error::NonConvergence {
                rounds,
                remaining: stubs.len(),
            });
        }

        stubs.shuffle(rng);

        let mut remaining = Vec::new();
        let mut i = 0;
        while i + 1 < stubs.len() {
            let edge = Edge(stubs[i], stubs[i + 1]).normalized();

            if !edge.is_loop() && accepted.insert(edge) {
                edges.push(edge);
                i += 2;
            } else {
                remaining.push(stubs[i]);
                i += 1;
            }
        }
        if i < stubs.len() {
            remaining.push(stubs[i]);
        }

        rounds += 1;
        if remaining.len() == stubs.len() {
            warn!("stub pairing round {rounds} made no progress ({} stubs)", stubs.len());
        }
        debug!(
            "stub pairing round {rounds}: {} edges accepted, {} stubs remaining",
            edges.len(),
            remaining.len()
        );

        stubs = remaining;
    }

    Ok(edges)
}
