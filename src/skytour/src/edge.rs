/// Index of an edge within the graph that created it.
pub type EdgeId = usize;

/// A directed edge. For de Bruijn graphs the name is the k-mer the edge was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<K> {
    id: EdgeId,
    name: Option<String>,
    source: K,
    destination: K,
}

impl<K: PartialEq + Clone> Edge<K> {
    /// Create an edge from `source` to `destination`.
    #[must_use]
    pub fn new(id: EdgeId, name: Option<String>, source: K, destination: K) -> Self {
        Edge {
            id,
            name,
            source,
            destination,
        }
    }

    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn source(&self) -> &K {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &K {
        &self.destination
    }

    /// True when the edge starts and ends on the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// The same edge pointing the other way. Id and name are kept.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Edge {
            id: self.id,
            name: self.name.clone(),
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_loop() {
        let e = Edge::new(0, Some("000".to_string()), "00".to_string(), "00".to_string());
        assert!(e.is_self_loop());

        let e = Edge::new(1, Some("001".to_string()), "00".to_string(), "01".to_string());
        assert!(!e.is_self_loop());
    }

    #[test]
    fn test_reversed_keeps_id_and_name() {
        let e = Edge::new(7, Some("001".to_string()), "00".to_string(), "01".to_string());
        let r = e.reversed();

        assert_eq!(r.id(), 7);
        assert_eq!(r.name(), Some("001"));
        assert_eq!(r.source(), "01");
        assert_eq!(r.destination(), "00");
        assert_eq!(r.reversed(), e);
    }

    #[test]
    fn test_unnamed_edge() {
        let e = Edge::new(3, None, 1usize, 2usize);

        assert_eq!(e.name(), None);
        assert_eq!(*e.source(), 1);
        assert_eq!(*e.destination(), 2);
    }
}
