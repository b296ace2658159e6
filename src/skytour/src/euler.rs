//! Eulerian-circuit feasibility: every vertex balanced and the graph strongly connected.

use std::collections::HashSet;
use std::fmt;

use crate::graph::EulerGraph;

/// Why a graph has no Eulerian circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Infeasibility<K> {
    EmptyGraph,
    Unbalanced {
        key: K,
        in_degree: usize,
        out_degree: usize,
    },
    NotStronglyConnected {
        unreached: usize,
    },
}

impl<K: fmt::Debug> fmt::Display for Infeasibility<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Infeasibility::EmptyGraph => write!(f, "graph has no vertices"),
            Infeasibility::Unbalanced {
                key,
                in_degree,
                out_degree,
            } => write!(
                f,
                "vertex {key:?} is unbalanced (in-degree {in_degree}, out-degree {out_degree})"
            ),
            Infeasibility::NotStronglyConnected { unreached } => {
                write!(f, "graph is not strongly connected ({unreached} vertices unreached)")
            }
        }
    }
}

/// Collect the keys reachable from `start` along outgoing edges.
///
/// Uses an explicit stack, so deep graphs do not exhaust the call stack.
pub fn reachable_from<'a, G: EulerGraph>(graph: &'a G, start: &'a G::Key) -> HashSet<&'a G::Key> {
    let mut visited = HashSet::with_capacity(graph.vertex_count());
    let mut stack = vec![start];

    while let Some(key) = stack.pop() {
        if !visited.insert(key) {
            continue;
        }

        for &e in graph.outgoing(key) {
            let next = graph.edge(e).destination();
            if !visited.contains(next) {
                stack.push(next);
            }
        }
    }

    visited
}

/// Check in-degree == out-degree != 0 for every vertex.
///
/// # Errors
///
/// Returns the first unbalanced vertex in key order.
pub fn check_balance<G: EulerGraph>(graph: &G) -> Result<(), Infeasibility<G::Key>> {
    match graph.vertices().find(|v| !v.is_balanced()) {
        Some(v) => Err(Infeasibility::Unbalanced {
            key: v.key().clone(),
            in_degree: v.in_degree(),
            out_degree: v.out_degree(),
        }),
        None => Ok(()),
    }
}

/// True if every vertex has equal, nonzero in- and out-degree.
#[must_use]
pub fn is_balanced<G: EulerGraph>(graph: &G) -> bool {
    check_balance(graph).is_ok()
}

/// Check that every vertex is reachable from the first vertex in both the graph and its
/// transpose.
///
/// # Errors
///
/// Returns how many vertices one of the two traversals failed to reach.
pub fn check_strong_connectivity<G: EulerGraph>(graph: &G) -> Result<(), Infeasibility<G::Key>> {
    let Some(start) = graph.first_key() else {
        return Err(Infeasibility::EmptyGraph);
    };

    let forward = reachable_from(graph, start).len();
    if forward < graph.vertex_count() {
        return Err(Infeasibility::NotStronglyConnected {
            unreached: graph.vertex_count() - forward,
        });
    }

    let transposed = graph.transposed();
    let backward = reachable_from(&transposed, start).len();
    if backward < graph.vertex_count() {
        return Err(Infeasibility::NotStronglyConnected {
            unreached: graph.vertex_count() - backward,
        });
    }

    Ok(())
}

/// True if all vertices belong to a single strongly connected component.
#[must_use]
pub fn is_strongly_connected<G: EulerGraph>(graph: &G) -> bool {
    check_strong_connectivity(graph).is_ok()
}

/// Check the balance and strong-connectivity conditions for an Eulerian circuit.
///
/// # Errors
///
/// Returns the first condition that fails.
pub fn check_eulerian<G: EulerGraph>(graph: &G) -> Result<(), Infeasibility<G::Key>> {
    if graph.is_empty() {
        return Err(Infeasibility::EmptyGraph);
    }

    check_balance(graph)?;
    check_strong_connectivity(graph)
}

/// True if the graph has an Eulerian circuit.
#[must_use]
pub fn has_eulerian_circuit<G: EulerGraph>(graph: &G) -> bool {
    check_eulerian(graph).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbg::DeBruijnGraph;
    use crate::dense::DenseGraph;

    #[test]
    fn test_two_vertex_circuit_with_self_loop() {
        let g = DenseGraph::from_edges(2, &[(0, 1), (0, 0), (1, 0)]).unwrap();

        assert!(has_eulerian_circuit(&g));
    }

    #[test]
    fn test_single_self_loop() {
        let g = DenseGraph::from_edges(1, &[(0, 0)]).unwrap();

        assert!(has_eulerian_circuit(&g));
    }

    #[test]
    fn test_unbalanced() {
        let g = DenseGraph::from_edges(2, &[(0, 1), (0, 1), (1, 0)]).unwrap();

        assert!(!has_eulerian_circuit(&g));
        assert_eq!(
            check_eulerian(&g),
            Err(Infeasibility::Unbalanced {
                key: 0,
                in_degree: 1,
                out_degree: 2
            })
        );
    }

    #[test]
    fn test_unbalanced_triangle_with_chord() {
        let g = DenseGraph::from_edges(3, &[(0, 1), (0, 2), (1, 2), (2, 0)]).unwrap();

        assert!(!is_balanced(&g));
        assert!(!has_eulerian_circuit(&g));
    }

    #[test]
    fn test_isolated_vertex() {
        let g = DenseGraph::from_edges(3, &[(0, 1), (1, 0)]).unwrap();

        assert_eq!(
            check_eulerian(&g),
            Err(Infeasibility::Unbalanced {
                key: 2,
                in_degree: 0,
                out_degree: 0
            })
        );
    }

    #[test]
    fn test_not_strongly_connected() {
        let g = DenseGraph::from_edges(4, &[(0, 1), (1, 0), (2, 3), (3, 2)]).unwrap();

        assert!(is_balanced(&g));
        assert!(!is_strongly_connected(&g));
        assert_eq!(
            check_eulerian(&g),
            Err(Infeasibility::NotStronglyConnected { unreached: 2 })
        );
    }

    #[test]
    fn test_reachable_forward_but_not_backward() {
        // 0 -> 1 -> 2 -> 1: everything is reachable from 0, but 0 is unreachable from the rest.
        let g = DenseGraph::from_edges(3, &[(0, 1), (1, 2), (2, 1)]).unwrap();

        assert_eq!(reachable_from(&g, &0).len(), 3);
        assert!(!is_strongly_connected(&g));
    }

    #[test]
    fn test_empty_graph() {
        let g = DenseGraph::with_vertices(0);

        assert_eq!(check_eulerian(&g), Err(Infeasibility::EmptyGraph));
        assert!(!is_strongly_connected(&g));
    }

    #[test]
    fn test_de_bruijn_unbalanced() {
        let g = DeBruijnGraph::from_kmers(["001", "010"]).unwrap();

        assert!(!has_eulerian_circuit(&g));
        assert!(matches!(
            check_eulerian(&g),
            Err(Infeasibility::Unbalanced { ref key, .. }) if key == "00"
        ));
    }

    #[test]
    fn test_de_bruijn_binary_cycle() {
        let g = DeBruijnGraph::from_kmers(["001", "010", "100"]).unwrap();

        assert!(has_eulerian_circuit(&g));
    }

    #[test]
    fn test_display() {
        let reason: Infeasibility<usize> = Infeasibility::NotStronglyConnected { unreached: 3 };

        assert_eq!(
            reason.to_string(),
            "graph is not strongly connected (3 vertices unreached)"
        );
    }
}
