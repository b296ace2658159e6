use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub fn start(output: &PathBuf, kmer_size: usize) -> anyhow::Result<()> {
    let universal = skytour::universal::k_universal_circular_string(kmer_size)?;

    let mut file = File::create(output)?;
    writeln!(file, "{universal}")?;

    Ok(())
}
