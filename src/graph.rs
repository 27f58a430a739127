use std::collections::HashMap;

use ndarray::Array2;
use petgraph::{
    stable_graph::{IndexType, NodeIndex, StableGraph},
    EdgeType,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable snapshot of the graph topology.
///
/// Vertices are plain indices `0..n`. Every edit produces a new snapshot, the
/// layout engine migrates its per-vertex state from the previous one.
///
/// `directed` is presentation only: the adjacency matrix is symmetric either way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    n: usize,
    edges: Vec<(usize, usize)>,
    directed: bool,
    labels: Vec<String>,
}

impl GraphModel {
    /// Creates a graph with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Default::default()
        }
    }

    /// Creates a graph from an edge list, validating every endpoint.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        let edges: Vec<_> = edges.into_iter().collect();
        for &(u, v) in &edges {
            if u >= n || v >= n {
                return Err(Error::EdgeOutOfRange { edge: (u, v), n });
            }
        }

        Ok(Self {
            n,
            edges,
            ..Default::default()
        })
    }

    /// Attaches one label per vertex. An empty vector clears labels.
    pub fn with_labels(mut self, labels: Vec<String>) -> Result<Self> {
        if !labels.is_empty() && labels.len() != self.n {
            return Err(Error::LabelCountMismatch {
                labels: labels.len(),
                n: self.n,
            });
        }
        self.labels = labels;
        Ok(self)
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns a snapshot with one more vertex. If the graph is labeled the new
    /// vertex gets `label`, otherwise its index is used as label.
    pub fn with_vertex(&self, label: Option<String>) -> Self {
        let mut next = self.clone();
        if !next.labels.is_empty() || label.is_some() {
            if next.labels.is_empty() {
                next.labels = (0..next.n).map(|i| i.to_string()).collect();
            }
            let label = label.unwrap_or_else(|| next.n.to_string());
            next.labels.push(label);
        }
        next.n += 1;
        next
    }

    /// Returns a snapshot with the edge `(u, v)` appended.
    pub fn with_edge(&self, u: usize, v: usize) -> Result<Self> {
        if u >= self.n || v >= self.n {
            return Err(Error::EdgeOutOfRange {
                edge: (u, v),
                n: self.n,
            });
        }
        let mut next = self.clone();
        next.edges.push((u, v));
        Ok(next)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Display label of vertex `i`, falling back to its index.
    pub fn label(&self, i: usize) -> String {
        self.labels
            .get(i)
            .cloned()
            .unwrap_or_else(|| i.to_string())
    }

    /// Symmetric 0/1 similarity matrix with zero diagonal for loop-free graphs.
    /// Edge direction is ignored.
    pub fn adjacency(&self) -> Array2<f64> {
        let mut m = Array2::zeros((self.n, self.n));
        for &(u, v) in &self.edges {
            m[[u, v]] = 1.;
            m[[v, u]] = 1.;
        }
        m
    }

    /// Converts into a petgraph [`StableGraph`] whose node weights are the vertex labels.
    pub fn to_stable_graph<Ty: EdgeType>(&self) -> StableGraph<String, (), Ty> {
        let mut g = StableGraph::with_capacity(self.n, self.edges.len());
        let idxs: Vec<_> = (0..self.n).map(|i| g.add_node(self.label(i))).collect();
        for &(u, v) in &self.edges {
            g.add_edge(idxs[u], idxs[v], ());
        }
        g
    }
}

/// Builds a [`GraphModel`] from a petgraph [`StableGraph`]. Node indices are
/// compacted to `0..node_count` in iteration order, directedness is taken from `Ty`.
pub fn from_stable_graph<N, E, Ty, Ix>(g: &StableGraph<N, E, Ty, Ix>) -> GraphModel
where
    N: ToString,
    Ty: EdgeType,
    Ix: IndexType,
{
    let order: Vec<NodeIndex<Ix>> = g.node_indices().collect();
    let position: HashMap<NodeIndex<Ix>, usize> = order
        .iter()
        .enumerate()
        .map(|(i, &idx)| (idx, i))
        .collect();

    let labels = order.iter().map(|&idx| g[idx].to_string()).collect();
    let edges = g
        .edge_indices()
        .filter_map(|e| {
            let (source, target) = g.edge_endpoints(e)?;
            Some((*position.get(&source)?, *position.get(&target)?))
        })
        .collect();

    GraphModel {
        n: order.len(),
        edges,
        directed: Ty::is_directed(),
        labels,
    }
}

impl<N, E, Ty, Ix> From<&StableGraph<N, E, Ty, Ix>> for GraphModel
where
    N: ToString,
    Ty: EdgeType,
    Ix: IndexType,
{
    fn from(g: &StableGraph<N, E, Ty, Ix>) -> Self {
        from_stable_graph(g)
    }
}
