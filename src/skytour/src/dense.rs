use crate::edge::{Edge, EdgeId};
use crate::error::{Error, Result};
use crate::graph::EulerGraph;
use crate::vertex::Vertex;

/// A directed multigraph over the vertices `0..n`, stored by vertex index.
#[derive(Debug, Clone, Default)]
pub struct DenseGraph {
    vertices: Vec<Vertex<usize>>,
    edges: Vec<Edge<usize>>,
}

impl DenseGraph {
    /// Create a graph with `n` vertices and no edges.
    #[must_use]
    pub fn with_vertices(n: usize) -> Self {
        DenseGraph {
            vertices: (0..n).map(Vertex::new).collect(),
            edges: Vec::new(),
        }
    }

    /// Create a graph with `n` vertices from a list of `(source, destination)` pairs.
    ///
    /// # Errors
    ///
    /// Fails if an endpoint is not below `n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::with_vertices(n);

        for &(source, destination) in edges {
            graph.add_edge(source, destination)?;
        }

        Ok(graph)
    }

    /// Add a single edge between two vertices.
    ///
    /// # Errors
    ///
    /// Fails if either endpoint is out of range.
    pub fn add_edge(&mut self, source: usize, destination: usize) -> Result<EdgeId> {
        let vertex_count = self.vertices.len();
        if let Some(&vertex) = [source, destination].iter().find(|&&v| v >= vertex_count) {
            return Err(Error::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(id, None, source, destination));

        self.vertices[source].add_outgoing(id);
        self.vertices[destination].add_inbound(id);

        Ok(id)
    }
}

impl EulerGraph for DenseGraph {
    type Key = usize;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn keys(&self) -> impl Iterator<Item = &usize> {
        self.vertices.iter().map(Vertex::key)
    }

    fn vertex(&self, key: &usize) -> Option<&Vertex<usize>> {
        self.vertices.get(*key)
    }

    fn edge(&self, id: EdgeId) -> &Edge<usize> {
        &self.edges[id]
    }

    fn transposed(&self) -> Self {
        let mut vertices: Vec<_> = (0..self.vertices.len()).map(Vertex::new).collect();

        for (t, vertex) in vertices.iter_mut().zip(&self.vertices) {
            vertex.outgoing().iter().for_each(|&e| t.add_inbound(e));
            vertex.inbound().iter().for_each(|&e| t.add_outgoing(e));
        }

        DenseGraph {
            vertices,
            edges: self.edges.iter().map(Edge::reversed).collect(),
        }
    }
}
