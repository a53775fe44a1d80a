use rand::Rng;

use crate::{error::invalid_argument_unless, gens::*, prelude::*, utils::*};

/// `G(n,p)` graphs connect every unordered node pair `{u, v}` with `u < v` independently
/// with probability `p`.
///
/// Each pair is decided by exactly one Bernoulli draw against the caller's `Rng`, so a run
/// over `n` nodes consumes `n * (n - 1) / 2` draws regardless of the outcome. Self-loops
/// and duplicate edges cannot occur by construction.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the connection probability `p`
    pub fn set_prob(&mut self, prob: f64) {
        self.p = Some(prob);
    }

    /// Updates the connection probability `p` (builder variant)
    pub fn prob(mut self, prob: f64) -> Self {
        self.set_prob(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `n == 0`, no
    /// probability was set, or the probability lies outside `[0, 1]`.
    fn try_stream<R>(&self, rng: &mut R) -> Result<impl Iterator<Item = Edge>>
    where
        R: Rng,
    {
        invalid_argument_unless!(self.n > 0, "at least one node must be generated");

        let p = self
            .p
            .ok_or_else(|| Error::InvalidArgument("probability of Gnp was not set".into()))?;
        invalid_argument_unless!(
            p.is_valid_probability(),
            "connection probability must lie in [0, 1], got {p}"
        );

        Ok(GnpGenerator {
            rng,
            n: self.n,
            p,
            u: 0,
            v: 1,
        })
    }
}

/// Streaming edge generator for `G(n,p)`.
///
/// Walks all normalized node pairs in lexicographic order and yields those whose
/// Bernoulli draw succeeds. Implements [`Iterator`] with `Item = Edge`.
pub struct GnpGenerator<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    n: NumNodes,
    p: f64,
    u: Node,
    v: Node,
}

impl<'a, R> Iterator for GnpGenerator<'a, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while self.u + 1 < self.n {
            let edge = Edge(self.u, self.v);

            self.v += 1;
            if self.v == self.n {
                self.u += 1;
                self.v = self.u + 1;
            }

            if self.rng.random_bool(self.p) {
                return Some(edge);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn invalid_parameters() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(Gnp::new().prob(0.5).try_generate(rng).is_err());
        assert!(Gnp::new().nodes(10).try_generate(rng).is_err());

        for p in [-10.0, -0.001, 1.0001, 3.4] {
            assert!(Gnp::new().nodes(10).prob(p).try_generate(rng).is_err());
        }
    }

    #[test]
    fn edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        // p = 1.0 yields the complete graph
        let edges = Gnp::new().nodes(10).prob(1.0).try_generate(rng).unwrap();
        assert_eq!(edges.len(), 45);
        assert_eq!(
            edges,
            (0..10u32)
                .flat_map(|u| ((u + 1)..10).map(move |v| Edge(u, v)))
                .collect_vec()
        );

        // p = 0.0 yields no edges
        let edges = Gnp::new().nodes(10).prob(0.0).try_generate(rng).unwrap();
        assert!(edges.is_empty());

        // a single node has no pair to connect
        let edges = Gnp::new().nodes(1).prob(1.0).try_generate(rng).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn simple_edges_only() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..10 {
            let edges = Gnp::new().nodes(30).prob(0.3).try_generate(rng).unwrap();

            assert!(edges.iter().all(|e| !e.is_loop() && e.is_normalized()));
            assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
        }
    }

    #[test]
    fn expected_edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        let (n, p, runs) = (50u32, 0.2, 200u64);
        let possible = u64::from(n * (n - 1) / 2);

        let total: u64 = (0..runs)
            .map(|_| {
                Gnp::new().nodes(n).prob(p).try_generate(rng).unwrap().len() as u64
            })
            .sum();

        // mean edge count is p * C(n,2) = 245; the sampled mean over 200 runs stays
        // within a few standard deviations of that
        let mean = total as f64 / runs as f64;
        let expected = p * possible as f64;
        assert!((mean - expected).abs() < 10.0, "mean {mean} vs {expected}");
    }
}
