use std::fmt;

use crate::edge::EdgeId;

/// A graph vertex and the ids of the edges entering and leaving it.
///
/// A self-loop appears once in each list. Two vertices are equal iff their keys are equal.
#[derive(Debug, Clone)]
pub struct Vertex<K> {
    key: K,
    inbound: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

impl<K> Vertex<K> {
    /// Create a vertex with no edges.
    #[must_use]
    pub fn new(key: K) -> Self {
        Vertex {
            key,
            inbound: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Return the vertex key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Return incoming edges
    #[must_use]
    pub fn inbound(&self) -> &[EdgeId] {
        &self.inbound
    }

    /// Return outgoing edges
    #[must_use]
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Set incoming edge.
    pub fn add_inbound(&mut self, edge: EdgeId) {
        self.inbound.push(edge);
    }

    /// Set outgoing edge.
    pub fn add_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
    }

    /// The in-degree of the vertex.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.inbound.len()
    }

    /// The out-degree of the vertex.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// A vertex is balanced when it has at least one edge and equal in- and out-degree.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.in_degree() > 0 && self.in_degree() == self.out_degree()
    }

    /// True if paths diverge here, i.e. the vertex has more than one outgoing edge.
    #[must_use]
    pub fn is_branching(&self) -> bool {
        self.out_degree() > 1
    }
}

impl<K: PartialEq> PartialEq for Vertex<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for Vertex<K> {}

impl<K: fmt::Display> fmt::Display for Vertex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in:{} out:{}", self.key, self.in_degree(), self.out_degree())
    }
}
