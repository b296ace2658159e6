use crate::dbg::DeBruijnGraph;
use crate::error::{Error, Result};
use crate::euler::has_eulerian_circuit;
use crate::kmer::MAX_KMER_SIZE;
use crate::utils::default_bounded_progress_bar;

/// Find the largest k for which the distinct k-mers of `reads` form a de Bruijn graph with an
/// Eulerian circuit.
///
/// The search starts at the shortest read length (capped at the largest supported k-mer size)
/// and decreases k down to 2. Returns `None` if no k qualifies.
///
/// # Errors
///
/// Fails if no reads are given or a read is not ASCII.
pub fn select_optimal_k<S: AsRef<str>>(reads: &[S]) -> Result<Option<usize>> {
    let Some(shortest) = reads.iter().map(|read| read.as_ref().len()).min() else {
        return Err(Error::EmptyInput);
    };

    let max_k = shortest.min(MAX_KMER_SIZE);
    if max_k < 2 {
        return Ok(None);
    }

    let progress_bar = default_bounded_progress_bar("Selecting k-mer size", (max_k - 1) as u64);

    for k in (2..=max_k).rev() {
        let graph = DeBruijnGraph::from_reads(reads, k)?;
        progress_bar.inc(1);

        if has_eulerian_circuit(&graph) {
            progress_bar.finish_and_clear();
            crate::elog!("Selected k={} ({} reads).", k, reads.len());

            return Ok(Some(k));
        }
    }

    progress_bar.finish_and_clear();
    crate::elog!("No k-mer size between 2 and {} yields an Eulerian circuit.", max_k);

    Ok(None)
}
