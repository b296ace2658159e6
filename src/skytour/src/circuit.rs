//! Eulerian circuit construction: a stack-driven Hierholzer walk that closes the ring at every
//! dead end and splices the next sub-tour in at the source of the next edge it follows.

use crate::edge::EdgeId;
use crate::euler::check_eulerian;
use crate::graph::EulerGraph;
use crate::path::{Path, Step};

/// Build an Eulerian circuit of `graph`.
///
/// Returns an empty path if the graph has no Eulerian circuit. Otherwise the returned path is a
/// ring with exactly one step per edge, and consecutive steps (including the wrap from the last
/// step to the first) follow every edge exactly once.
pub fn build_circuit<G: EulerGraph>(graph: &G) -> Path<G::Key> {
    if let Err(reason) = check_eulerian(graph) {
        crate::elog!("No Eulerian circuit: {}", reason);
        return Path::new();
    }

    let Some(start) = graph.first_key() else {
        return Path::new();
    };

    let mut path = Path::new();
    let mut used = vec![false; graph.edge_count()];
    let mut stack: Vec<EdgeId> = Vec::with_capacity(graph.edge_count());
    let mut pending_re_root = false;

    path.add_step(start.clone());
    stack.extend(graph.outgoing(start).iter().rev());

    while let Some(e) = stack.pop() {
        // An edge can sit on the stack more than once if its source was visited twice.
        if used[e] {
            continue;
        }
        used[e] = true;

        let edge = graph.edge(e);
        let destination = edge.destination();

        let (self_loops, onward): (Vec<EdgeId>, Vec<EdgeId>) = graph
            .outgoing(destination)
            .iter()
            .copied()
            .filter(|&o| !used[o])
            .partition(|&o| graph.edge(o).is_self_loop());

        if onward.is_empty() {
            // Dead end: only possible back at the start of the current sub-tour, which the ring
            // closure stands for.
            debug_assert_eq!(path.first_step().map(Step::key), Some(destination));

            for o in self_loops {
                used[o] = true;
                path.add_step(destination.clone());
            }

            path.complete_cycle();
            pending_re_root = true;
        } else {
            if pending_re_root {
                let spliced = path.re_root_at(edge.source());
                debug_assert!(spliced, "no step to splice at for {:?}", edge.source());
                pending_re_root = false;
            }

            path.add_step(destination.clone());

            for o in self_loops {
                used[o] = true;
                path.add_step(destination.clone());
            }

            stack.extend(onward.iter().rev());
        }
    }

    debug_assert!(used.iter().all(|&u| u));
    debug_assert_eq!(path.len(), graph.edge_count());

    path
}

/// Build an Eulerian circuit, or `None` if the graph has none.
pub fn eulerian_circuit<G: EulerGraph>(graph: &G) -> Option<Path<G::Key>> {
    let path = build_circuit(graph);

    (!path.is_empty()).then_some(path)
}
