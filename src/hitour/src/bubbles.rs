use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub fn start(
    output: &PathBuf,
    kmer_size: usize,
    max_depth: usize,
    reads_path: &PathBuf,
) -> anyhow::Result<()> {
    let reads = skytour::parse::read_sequences(reads_path)?;
    let bubbles = skytour::bubble::count_bubbles(&reads, kmer_size, max_depth)?;

    skytour::elog!("Found {} bubbles of depth at most {}.", bubbles, max_depth);

    let mut file = File::create(output)?;
    writeln!(file, "{bubbles}")?;

    Ok(())
}
