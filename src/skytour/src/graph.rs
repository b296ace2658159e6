//! The graph capability set shared by the checker and the circuit builder.
//!
//! Two backings implement it: [`crate::dbg::DeBruijnGraph`], keyed by (k-1)-mer strings, and
//! [`crate::dense::DenseGraph`], keyed by small dense integers.

use std::fmt::Debug;
use std::hash::Hash;

use crate::edge::{Edge, EdgeId};
use crate::vertex::Vertex;

/// A directed multigraph whose vertices are addressed by key and whose edges are addressed by id.
pub trait EulerGraph {
    type Key: Clone + Eq + Hash + Ord + Debug;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// All vertex keys. The order is stable for a given graph instance.
    fn keys(&self) -> impl Iterator<Item = &Self::Key>;

    fn vertex(&self, key: &Self::Key) -> Option<&Vertex<Self::Key>>;

    /// Look up an edge by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    fn edge(&self, id: EdgeId) -> &Edge<Self::Key>;

    /// The same graph with every edge reversed. Edge ids and names are preserved.
    #[must_use]
    fn transposed(&self) -> Self
    where
        Self: Sized;

    /// The vertex used as the starting point of traversals.
    fn first_key(&self) -> Option<&Self::Key> {
        self.keys().next()
    }

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Outgoing edge ids of `key`, empty if the vertex does not exist.
    fn outgoing(&self, key: &Self::Key) -> &[EdgeId] {
        self.vertex(key).map(Vertex::outgoing).unwrap_or_default()
    }

    /// Inbound edge ids of `key`, empty if the vertex does not exist.
    fn inbound(&self, key: &Self::Key) -> &[EdgeId] {
        self.vertex(key).map(Vertex::inbound).unwrap_or_default()
    }

    /// Vertices in key order.
    fn vertices(&self) -> impl Iterator<Item = &Vertex<Self::Key>> {
        self.keys().filter_map(|key| self.vertex(key))
    }
}
