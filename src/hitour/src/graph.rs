use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use petgraph::dot::Dot;

use skytour::dbg::DeBruijnGraph;

pub fn start(output: &PathBuf, kmer_size: usize, reads_path: &PathBuf) -> anyhow::Result<()> {
    let reads = skytour::parse::read_sequences(reads_path)?;
    let graph = DeBruijnGraph::from_reads(&reads, kmer_size)?.to_petgraph();

    skytour::elog!(
        "Writing graph with {} vertices and {} edges.",
        graph.node_count(),
        graph.edge_count()
    );

    let mut file = File::create(output)?;
    write!(file, "{}", Dot::new(&graph))?;

    Ok(())
}
