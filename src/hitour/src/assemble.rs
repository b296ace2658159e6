use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use skytour::dbg::DeBruijnGraph;
use skytour::graph::EulerGraph;

pub fn start(
    output: &PathBuf,
    kmers: bool,
    kmer_size: Option<usize>,
    input: &PathBuf,
) -> anyhow::Result<()> {
    let sequences = skytour::parse::read_sequences(input)?;

    let graph = if kmers {
        DeBruijnGraph::from_kmers(&sequences)?
    } else {
        let k = kmer_size.ok_or_else(|| anyhow::anyhow!("--kmer-size is required for reads"))?;
        DeBruijnGraph::from_reads(&sequences, k)?
    };

    skytour::elog!(
        "Built de Bruijn graph with {} vertices and {} edges.",
        graph.vertex_count(),
        graph.edge_count()
    );

    let assembly = skytour::circuit::eulerian_circuit(&graph)
        .map_or_else(|| "0".to_string(), |circuit| skytour::render::assemble_circular(&circuit));

    let mut file = File::create(output)?;
    writeln!(file, "{assembly}")?;

    Ok(())
}
