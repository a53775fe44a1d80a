use super::*;

/// An undirected graph representation storing one [`Neighborhood`] per node.
///
/// Every edge `{u, v}` is recorded in both endpoint neighborhoods; `num_edges` counts each
/// undirected edge once. Self-loops are not representable by the generators in this crate,
/// but the structure itself stores a loop `{u, u}` as a single entry in `u`'s neighborhood.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArray = UndirectedGraph<ArrNeighborhood>;

/// Representation using an Adjacency-Matrix
pub type AdjMatrix = UndirectedGraph<BitNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Creates a list of at most `m_ub` distinct normalized non-loop edges for nodes `0..n`
    fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
        let mut edges: Vec<Edge> = (0..m_ub)
            .filter_map(|_| {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                (u != v).then(|| Edge(u, v).normalized())
            })
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    fn check_graph_new<G: GraphEdgeEditing + GraphNodeOrder + GraphEdgeOrder>() {
        for n in 1..50 {
            let graph = G::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert!(graph.is_singleton());
        }
    }

    fn check_adjacency<G>()
    where
        G: GraphEdgeEditing + AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m_ub in [n * 2, n * 5] {
                let edges = random_edges(rng, n, m_ub);
                let graph = G::from_edges(n, edges.iter());

                assert_eq!(graph.number_of_edges() as usize, edges.len());
                assert_eq!(graph.ordered_edges().collect_vec(), edges);

                for &Edge(u, v) in &edges {
                    assert!(graph.has_edge(u, v));
                    assert!(graph.has_edge(v, u));
                }

                // degree sum equals twice the edge count in a loop-free graph
                let deg_sum: u64 = graph.degrees().map(u64::from).sum();
                assert_eq!(deg_sum, 2 * edges.len() as u64);
            }
        }
    }

    #[test]
    fn graph_new() {
        check_graph_new::<AdjArray>();
        check_graph_new::<AdjMatrix>();
    }

    #[test]
    fn adjacency() {
        check_adjacency::<AdjArray>();
        check_adjacency::<AdjMatrix>();
    }

    #[test]
    fn duplicate_edges_are_rejected() {
        let mut graph = AdjArray::new(4);
        assert!(!graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(1, 0));
        assert_eq!(graph.number_of_edges(), 1);
    }
}
