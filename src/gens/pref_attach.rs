use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{error::invalid_argument_unless, gens::*, prelude::*};

/// Barabási–Albert preferential-attachment generator.
///
/// The model starts from a complete seed graph on `n0` nodes and grows it node by node:
/// every arriving node connects to `m` distinct existing nodes, each chosen with
/// probability proportional to its current degree. The degree table is refreshed at every
/// arrival, so earlier attachments feed back into later choices (rich-get-richer).
///
/// Hosts are sampled without replacement: a draw that hits an already-chosen host is
/// discarded and redrawn, so every non-seed node ends up with exactly `min(m, existing)`
/// attachments.
#[derive(Debug, Copy, Clone)]
pub struct PrefAttach {
    n: NumNodes,
    m: NumNodes,
    n0: NumNodes,
}

impl Default for PrefAttach {
    fn default() -> Self {
        Self { n: 0, m: 1, n0: 2 }
    }
}

impl PrefAttach {
    /// Creates a new preferential-attachment generator with `m = 1` and `n0 = 2`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of edges every arriving node creates
    pub fn set_attachments(&mut self, m: NumNodes) {
        self.m = m;
    }

    /// Sets the number of edges every arriving node creates (builder variant)
    pub fn attachments(mut self, m: NumNodes) -> Self {
        self.set_attachments(m);
        self
    }

    /// Sets the size of the complete seed graph
    pub fn set_seed_nodes(&mut self, n0: NumNodes) {
        self.n0 = n0;
    }

    /// Sets the size of the complete seed graph (builder variant)
    pub fn seed_nodes(mut self, n0: NumNodes) -> Self {
        self.set_seed_nodes(n0);
        self
    }
}

impl NumNodesGen for PrefAttach {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for PrefAttach {
    /// Creates a streaming generator over Barabási–Albert edges: first the complete seed
    /// graph, then `m` attachment edges per arriving node.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) unless
    /// `1 <= m <= n0 < n` and `n0 >= 2`.
    fn try_stream<R>(&self, rng: &mut R) -> Result<impl Iterator<Item = Edge>>
    where
        R: Rng,
    {
        invalid_argument_unless!(self.m > 0, "every arriving node must create an edge");
        invalid_argument_unless!(
            self.n0 >= 2,
            "the seed graph needs at least two nodes, got {}",
            self.n0
        );
        invalid_argument_unless!(
            self.m <= self.n0,
            "attachment count {} exceeds seed size {}",
            self.m,
            self.n0
        );
        invalid_argument_unless!(
            self.n0 < self.n,
            "seed size {} must be smaller than the total node count {}",
            self.n0,
            self.n
        );

        Ok(PrefAttachGenerator::new(rng, self.n, self.n0, self.m))
    }
}

/// Streaming edge generator for the Barabási–Albert model.
///
/// Yields the `n0 * (n0 - 1) / 2` seed edges first and then the attachment edges of the
/// arriving nodes `n0..n` in arrival order. Implements [`Iterator`] with `Item = Edge`.
///
/// # Internal Algorithm
///
/// At every arrival the current degrees are frozen into a cumulative interval table over
/// the existing nodes in ascending node id. A uniform draw in `[0, total_degree)` is
/// mapped to its owning interval by binary search; draws hitting an already-selected host
/// are rejected and redrawn until the attachment budget of the step is exhausted.
pub struct PrefAttachGenerator<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    n: NumNodes,
    m: NumNodes,
    n0: NumNodes,
    degrees: Vec<NumNodes>,

    // seed phase state
    seed_u: Node,
    seed_v: Node,

    // growth phase state, frozen per arriving node
    cur: Node,
    intervals: Vec<u64>,
    draw: Uniform<u64>,
    selected: NodeBitSet,
    selected_count: NumNodes,
    step_budget: NumNodes,
}

impl<'a, R> PrefAttachGenerator<'a, R>
where
    R: Rng,
{
    /// Creates a new [`PrefAttachGenerator`].
    ///
    /// # Panics
    /// Panics unless `1 <= m <= n0 < n` and `n0 >= 2`; [`PrefAttach`] validates these
    /// bounds before construction.
    pub fn new(rng: &'a mut R, n: NumNodes, n0: NumNodes, m: NumNodes) -> Self {
        assert!(m >= 1 && m <= n0 && n0 >= 2 && n0 < n);

        Self {
            rng,
            n,
            m,
            n0,
            degrees: vec![0; n as usize],
            seed_u: 0,
            seed_v: 1,
            // the first growth step advances to node `n0` and freezes its table
            cur: n0 - 1,
            intervals: Vec::new(),
            draw: Uniform::new(0, 1).unwrap(),
            selected: NodeBitSet::new(n),
            selected_count: 0,
            step_budget: 0,
        }
    }

    /// Freezes the cumulative-degree table over all nodes preceding `cur` and resets the
    /// per-step selection state.
    fn freeze_intervals(&mut self) {
        self.intervals.clear();
        let mut acc = 0u64;
        for u in 0..self.cur {
            acc += u64::from(self.degrees[u as usize]);
            self.intervals.push(acc);
        }

        self.draw = Uniform::new(0, acc).unwrap();
        self.selected.clear_all();
        self.selected_count = 0;
        self.step_budget = self.m.min(self.cur);
    }
}

impl<'a, R> Iterator for PrefAttachGenerator<'a, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        // seed phase: emit the complete graph on `0..n0`
        if self.seed_u + 1 < self.n0 {
            let edge = Edge(self.seed_u, self.seed_v);
            self.degrees[self.seed_u as usize] += 1;
            self.degrees[self.seed_v as usize] += 1;

            self.seed_v += 1;
            if self.seed_v == self.n0 {
                self.seed_u += 1;
                self.seed_v = self.seed_u + 1;
            }

            return Some(edge);
        }

        // growth phase
        loop {
            if self.selected_count == self.step_budget {
                self.cur += 1;
                if self.cur >= self.n {
                    return None;
                }
                self.freeze_intervals();
                continue;
            }

            let x = self.draw.sample(self.rng);
            let host = self.intervals.partition_point(|&c| c <= x) as Node;

            if self.selected.set_bit(host) {
                // host already chosen in this step, redraw
                continue;
            }

            self.selected_count += 1;
            self.degrees[host as usize] += 1;
            self.degrees[self.cur as usize] += 1;

            return Some(Edge(host, self.cur));
        }
    }
}
