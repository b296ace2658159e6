use crate::circuit::eulerian_circuit;
use crate::dbg::DeBruijnGraph;
use crate::error::{Error, Result};
use crate::graph::EulerGraph;
use crate::kmer::binary_kmers;
use crate::render::assemble_circular;

/// Find a k-universal circular binary string: a circular string of length 2^k containing every
/// binary k-mer exactly once.
///
/// # Errors
///
/// Fails if k < 2.
pub fn k_universal_circular_string(k: usize) -> Result<String> {
    let kmers = binary_kmers(k)?;
    let graph = DeBruijnGraph::from_kmers(&kmers)?;

    crate::elog!(
        "Built de Bruijn graph with {} vertices and {} edges for k={}.",
        graph.vertex_count(),
        graph.edge_count(),
        k
    );

    let circuit = eulerian_circuit(&graph).ok_or(Error::NoEulerianCircuit)?;

    Ok(assemble_circular(&circuit))
}
