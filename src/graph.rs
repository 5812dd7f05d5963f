use std::cmp::Reverse;
use std::ops::AddAssign;

use num::Zero;
use ordered_float::OrderedFloat;

use crate::error::GraphError;
use crate::heap::MinHeap;
use crate::union_find::UnionFind;

/// Outgoing half of an edge. The source vertex is implicit: it is the
/// adjacency slot the edge is stored under.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    #[inline]
    pub const fn new(to: usize, weight: W) -> Self {
        Self { to, weight }
    }
}

/// Undirected weighted graph over `usize` vertices, stored as an
/// adjacency list with every undirected edge expanded into both
/// directions.
///
/// The weight type only needs a total order and additive zero, so
/// integer weights work directly and real weights go through
/// [`OrderedFloat`] (see [`FloatGraph`]). All vertex indices are
/// validated on the way in; the algorithms never index out of bounds.
///
/// Negative weights are accepted. The algorithms only compare and sum,
/// but callers whose domain assumes non-negative weights should note
/// that negative values shift what "minimum" means.
#[derive(Clone, Debug, Default)]
pub struct Graph<W> {
    edges: Vec<Vec<Edge<W>>>,
}

/// [`Graph`] over real weights.
pub type FloatGraph = Graph<OrderedFloat<f64>>;

impl<W: Copy + Ord + AddAssign + Zero> Graph<W> {
    /// Builds a graph from a prepared adjacency list; the vertex count
    /// is the outer length. Fails if any edge target is out of range.
    pub fn new(edges: Vec<Vec<Edge<W>>>) -> Result<Self, GraphError> {
        let nodes = edges.len();
        for (from, adjacent) in edges.iter().enumerate() {
            for edge in adjacent {
                if edge.to >= nodes {
                    return Err(GraphError::EdgeOutOfRange {
                        from,
                        to: edge.to,
                        nodes,
                    });
                }
            }
        }

        Ok(Self { edges })
    }

    /// Graph with `nodes` vertices and no edges yet.
    #[inline]
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            edges: vec![Vec::new(); nodes],
        }
    }

    /// O(1)
    #[inline]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Inserts the undirected edge `{u, v}`, expanding it into both
    /// adjacency directions. A self-loop is stored once.
    pub fn add_undirected(&mut self, u: usize, v: usize, weight: W) -> Result<(), GraphError> {
        let nodes = self.node_count();
        if u >= nodes || v >= nodes {
            return Err(GraphError::EdgeOutOfRange { from: u, to: v, nodes });
        }

        self.edges[u].push(Edge::new(v, weight));
        if u != v {
            self.edges[v].push(Edge::new(u, weight));
        }

        Ok(())
    }

    /// Total weight of the minimum spanning tree grown from
    /// `start`, by Prim's algorithm.
    ///
    /// Only the connected component containing `start` is covered;
    /// vertices outside it contribute nothing. An empty graph yields
    /// zero regardless of `start`.
    ///
    /// O(E log V)
    pub fn prim(&self, start: usize) -> Result<W, GraphError> {
        let nodes = self.node_count();
        if nodes == 0 {
            return Ok(W::zero());
        }
        if start >= nodes {
            return Err(GraphError::NodeOutOfRange { node: start, nodes });
        }

        let mut visited = vec![false; nodes];
        // None stands in for an infinite distance-to-tree
        let mut best: Vec<Option<W>> = vec![None; nodes];
        best[start] = Some(W::zero());

        let mut queue = MinHeap::with_capacity(nodes);
        queue.push(Reverse((W::zero(), start)));

        let mut total = W::zero();
        while let Some(Reverse((weight, node))) = queue.pop() {
            if visited[node] {
                // stale entry: a cheaper key for this vertex already won
                continue;
            }
            visited[node] = true;
            total += weight;

            for edge in &self.edges[node] {
                if visited[edge.to] {
                    continue;
                }
                match best[edge.to] {
                    Some(known) if known <= edge.weight => {}
                    _ => {
                        best[edge.to] = Some(edge.weight);
                        queue.push(Reverse((edge.weight, edge.to)));
                    }
                }
            }
        }

        log::debug!(
            "prim: visited {}/{} nodes from start {}",
            visited.iter().filter(|&&seen| seen).count(),
            nodes,
            start,
        );

        Ok(total)
    }

    /// Total weight of the minimum spanning forest, by Kruskal's
    /// algorithm: one MST per connected component, summed.
    ///
    /// O(E log V)
    pub fn kruskal(&self) -> W {
        let mut queue: MinHeap<(W, usize, usize)> =
            self.undirected_edges().map(Reverse).collect();

        let mut union_find = UnionFind::new(self.node_count());
        let mut total = W::zero();
        let mut accepted = 0usize;

        while let Some(Reverse((weight, from, to))) = queue.pop() {
            if union_find.union(from, to) {
                log::trace!("kruskal: take edge ({}, {})", from, to);
                total += weight;
                accepted += 1;
            }
        }

        log::debug!(
            "kruskal: accepted {} edges, {} components",
            accepted,
            union_find.set_count(),
        );

        total
    }

    /// Number of connected components.
    ///
    /// O(E + V)
    pub fn components(&self) -> usize {
        let mut union_find = UnionFind::new(self.node_count());
        for (_, from, to) in self.undirected_edges() {
            union_find.union(from, to);
        }

        union_find.set_count()
    }

    /// Canonical single-direction edge list as `(weight, from, to)`.
    ///
    /// The adjacency stores each undirected edge in both directions;
    /// keeping only `from <= to` collapses the pair back to one record
    /// so Kruskal never counts a weight twice.
    fn undirected_edges(&self) -> impl Iterator<Item = (W, usize, usize)> + '_ {
        self.edges.iter().enumerate().flat_map(|(from, adjacent)| {
            adjacent
                .iter()
                .filter(move |edge| from <= edge.to)
                .map(move |edge| (edge.weight, from, edge.to))
        })
    }
}
