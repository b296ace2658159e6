use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use skytour::graph::EulerGraph;

pub fn start(output: &PathBuf, edge_list: &PathBuf) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(edge_list)
        .with_context(|| format!("Failed to read edge list {}", edge_list.display()))?;
    let graph = skytour::parse::parse_edge_list(&text)
        .with_context(|| format!("Failed to parse edge list {}", edge_list.display()))?;

    skytour::elog!(
        "Loaded graph with {} vertices and {} edges.",
        graph.vertex_count(),
        graph.edge_count()
    );

    let circuit = skytour::circuit::build_circuit(&graph);

    let mut file = File::create(output)?;
    writeln!(
        file,
        "{}",
        skytour::render::format_circuit_with(&circuit, |v| v + 1)
    )?;

    Ok(())
}
