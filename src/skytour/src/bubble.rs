//! Bubble detection: pairs of short, vertex-disjoint paths that diverge at one vertex of a de
//! Bruijn graph and converge again at another.

use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;

use crate::dbg::DeBruijnGraph;
use crate::error::Result;
use crate::graph::EulerGraph;
use crate::utils::default_bounded_progress_bar;

/// A simple forward path from a junction vertex.
#[derive(Debug, Clone)]
struct Traversal<'a> {
    source: &'a String,
    end: &'a String,
    vertices: HashSet<&'a String>,
}

impl<'a> Traversal<'a> {
    fn start(source: &'a String) -> Self {
        Traversal {
            source,
            end: source,
            vertices: HashSet::from([source]),
        }
    }

    fn extend(&self, next: &'a String) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.insert(next);

        Traversal {
            source: self.source,
            end: next,
            vertices,
        }
    }

    /// Two traversals form a bubble if they share both endpoints and nothing else.
    fn forms_bubble_with(&self, other: &Traversal<'a>) -> bool {
        self.source == other.source
            && self.end == other.end
            && self.vertices.intersection(&other.vertices).count() == 2
    }
}

/// Count the bubbles of the de Bruijn graph built from the distinct k-mers of `reads`.
///
/// # Errors
///
/// Fails if the graph cannot be built (bad k, non-ASCII reads, or no k-mers).
pub fn count_bubbles<S: AsRef<str>>(reads: &[S], k: usize, max_depth: usize) -> Result<usize> {
    let graph = DeBruijnGraph::from_reads(reads, k)?;

    crate::elog!(
        "Built de Bruijn graph with {} vertices and {} edges for k={}.",
        graph.vertex_count(),
        graph.edge_count(),
        k
    );

    Ok(count_graph_bubbles(&graph, max_depth))
}

/// Count bubbles whose two paths are at most `max_depth` edges long.
///
/// From every vertex with more than one outgoing edge, simple paths are grown one edge per
/// level. Each unordered pair of paths with the same source and end that meet only at those two
/// vertices counts as one bubble.
#[must_use]
pub fn count_graph_bubbles(graph: &DeBruijnGraph, max_depth: usize) -> usize {
    let junctions: Vec<_> = graph.vertices().filter(|v| v.is_branching()).collect();
    let mut by_end: BTreeMap<&String, Vec<Traversal>> = BTreeMap::new();

    let progress_bar =
        default_bounded_progress_bar("Searching for bubbles", junctions.len() as u64);

    for junction in junctions {
        let mut level = vec![Traversal::start(junction.key())];

        for _ in 0..max_depth {
            if level.is_empty() {
                break;
            }

            let mut next_level = Vec::new();
            for traversal in &level {
                for &e in graph.outgoing(traversal.end) {
                    let next = graph.edge(e).destination();

                    if !traversal.vertices.contains(next) {
                        let extended = traversal.extend(next);
                        by_end.entry(next).or_default().push(extended.clone());
                        next_level.push(extended);
                    }
                }
            }

            level = next_level;
        }

        progress_bar.inc(1);
    }

    progress_bar.finish_and_clear();

    by_end
        .values()
        .map(|traversals| {
            traversals
                .iter()
                .tuple_combinations()
                .filter(|(a, b)| a.forms_bubble_with(b))
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bubbles_sample1() {
        let reads = [
            "AACG", "AAGG", "ACGT", "AGGT", "CGTT", "GCAA", "GGTT", "GTTG", "TGCA", "TTGC",
        ];

        assert_eq!(count_bubbles(&reads, 3, 3).unwrap(), 1);
    }

    #[test]
    fn test_count_bubbles_sample2() {
        assert_eq!(count_bubbles(&["AABBA", "AACBA", "AADBA"], 3, 3).unwrap(), 3);
    }

    #[test]
    fn test_count_bubbles_sample3() {
        let reads = ["ATCCTAG", "TCCTAGA", "ATCGTCA", "CGTCAGA", "CGTTTCA", "TTTCAGA"];

        assert_eq!(count_bubbles(&reads, 4, 6).unwrap(), 2);
    }

    #[test]
    fn test_count_bubbles_sample4() {
        assert_eq!(count_bubbles(&["ATGCAG", "ATCGCA", "ATACGC"], 3, 4).unwrap(), 3);
    }

    #[test]
    fn test_bubble_longer_than_depth_is_missed() {
        let reads = [
            "AACG", "AAGG", "ACGT", "AGGT", "CGTT", "GCAA", "GGTT", "GTTG", "TGCA", "TTGC",
        ];

        assert_eq!(count_bubbles(&reads, 3, 2).unwrap(), 0);
        assert_eq!(count_bubbles(&reads, 3, 0).unwrap(), 0);
    }

    #[test]
    fn test_no_junctions() {
        assert_eq!(count_bubbles(&["AAAAAA"], 3, 3).unwrap(), 0);
    }

    #[test]
    fn test_traversal_overlap() {
        let (a, b, c, d) = (
            "AA".to_string(),
            "AB".to_string(),
            "AC".to_string(),
            "BA".to_string(),
        );

        let upper = Traversal::start(&a).extend(&b).extend(&d);
        let lower = Traversal::start(&a).extend(&c).extend(&d);
        let same = Traversal::start(&a).extend(&b).extend(&d);

        assert!(upper.forms_bubble_with(&lower));
        assert!(!upper.forms_bubble_with(&same));
    }

    #[test]
    fn test_bubble_paths_may_differ_in_length() {
        let (a, b, c, d) = (
            "AA".to_string(),
            "AB".to_string(),
            "AC".to_string(),
            "BA".to_string(),
        );

        let upper = Traversal::start(&a).extend(&b).extend(&d);
        let direct = Traversal::start(&a).extend(&d);
        let detour = Traversal::start(&a).extend(&b).extend(&c).extend(&d);

        assert!(upper.forms_bubble_with(&direct));
        assert!(!upper.forms_bubble_with(&detour));
    }

    #[test]
    fn test_converging_paths_are_not_searched() {
        assert_eq!(count_bubbles(&["ACT", "GCT"], 3, 3).unwrap(), 0);
    }
}
