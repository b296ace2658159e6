use std::collections::BTreeMap;

use petgraph::graph::{Graph, NodeIndex};

use crate::edge::{Edge, EdgeId};
use crate::error::{Error, Result};
use crate::graph::EulerGraph;
use crate::kmer::kmers_from_reads;
use crate::vertex::Vertex;

/// Represents a de Bruijn graph: vertices are (k-1)-mers, and every k-mer is an edge from its
/// prefix to its suffix.
#[derive(Debug, Clone, Default)]
pub struct DeBruijnGraph {
    vertices: BTreeMap<String, Vertex<String>>,
    edges: Vec<Edge<String>>,
}

/// Split a k-mer into its (k-1)-length prefix and suffix.
fn split_kmer(kmer: &str) -> (&str, &str) {
    let last = kmer.char_indices().next_back().map_or(0, |(i, _)| i);
    let first = kmer.chars().next().map_or(0, char::len_utf8);

    (&kmer[..last], &kmer[first..])
}

impl DeBruijnGraph {
    /// Create an empty de Bruijn graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a de Bruijn graph from a multiset of k-mers.
    ///
    /// # Errors
    ///
    /// Fails on an empty input, on k < 2, and on k-mers that do not all share the same length.
    pub fn from_kmers<I, S>(kmers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = DeBruijnGraph::new();
        let mut expected = None;

        for kmer in kmers {
            let kmer = kmer.as_ref();
            let found = kmer.chars().count();

            match expected {
                None if found < 2 => return Err(Error::KmerTooShort { k: found }),
                None => expected = Some(found),
                Some(k) if k != found => {
                    return Err(Error::InconsistentKmerLength {
                        expected: k,
                        found,
                        kmer: kmer.to_string(),
                    })
                }
                Some(_) => {}
            }

            graph.add_kmer(kmer);
        }

        if graph.edges.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(graph)
    }

    /// Create a de Bruijn graph from the distinct k-mers found in a set of reads.
    ///
    /// # Errors
    ///
    /// Fails if k is out of range, a read is not ASCII, or no read is at least k long.
    pub fn from_reads<S: AsRef<str>>(reads: &[S], k: usize) -> Result<Self> {
        let kmers = kmers_from_reads(reads, k)?;

        Self::from_kmers(&kmers)
    }

    /// Add a single k-mer to the graph as an edge, creating its endpoint vertices as needed.
    ///
    /// The k-mer is not validated; it is the caller's job to keep k-mer lengths uniform.
    pub fn add_kmer(&mut self, kmer: &str) -> EdgeId {
        let (left, right) = split_kmer(kmer);
        let id = self.edges.len();

        self.edges.push(Edge::new(
            id,
            Some(kmer.to_string()),
            left.to_string(),
            right.to_string(),
        ));

        self.add_vertex(left).add_outgoing(id);
        self.add_vertex(right).add_inbound(id);

        id
    }

    /// Check if a given (k-1)-mer exists in the graph.
    #[must_use]
    pub fn has_vertex(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    /// The k-mer size the graph was built with, if it has any edges.
    #[must_use]
    pub fn kmer_size(&self) -> Option<usize> {
        self.edges
            .first()
            .and_then(Edge::name)
            .map(|kmer| kmer.chars().count())
    }

    /// Iterate over the k-mers in edge creation order.
    pub fn kmers(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().filter_map(Edge::name)
    }

    /// Convert to a petgraph graph with (k-1)-mers as node weights and k-mers as edge weights.
    #[must_use]
    pub fn to_petgraph(&self) -> Graph<String, String> {
        let mut g = Graph::new();
        let mut idx: BTreeMap<&str, NodeIndex> = BTreeMap::new();

        for key in self.vertices.keys() {
            idx.insert(key.as_str(), g.add_node(key.clone()));
        }

        for edge in &self.edges {
            g.add_edge(
                idx[edge.source().as_str()],
                idx[edge.destination().as_str()],
                edge.name().unwrap_or_default().to_string(),
            );
        }

        g
    }

    fn add_vertex(&mut self, key: &str) -> &mut Vertex<String> {
        self.vertices
            .entry(key.to_string())
            .or_insert_with(|| Vertex::new(key.to_string()))
    }
}

impl EulerGraph for DeBruijnGraph {
    type Key = String;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn keys(&self) -> impl Iterator<Item = &String> {
        self.vertices.keys()
    }

    fn vertex(&self, key: &String) -> Option<&Vertex<String>> {
        self.vertices.get(key)
    }

    fn edge(&self, id: EdgeId) -> &Edge<String> {
        &self.edges[id]
    }

    fn transposed(&self) -> Self {
        let edges: Vec<_> = self.edges.iter().map(Edge::reversed).collect();

        let vertices = self
            .vertices
            .iter()
            .map(|(key, vertex)| {
                let mut t = Vertex::new(key.clone());
                vertex.outgoing().iter().for_each(|&e| t.add_inbound(e));
                vertex.inbound().iter().for_each(|&e| t.add_outgoing(e));

                (key.clone(), t)
            })
            .collect();

        DeBruijnGraph { vertices, edges }
    }
}
