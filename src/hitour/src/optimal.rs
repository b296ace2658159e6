use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub fn start(output: &PathBuf, reads_path: &PathBuf) -> anyhow::Result<()> {
    let reads = skytour::parse::read_sequences(reads_path)?;
    let k = skytour::optimal::select_optimal_k(&reads)?;

    let mut file = File::create(output)?;
    writeln!(file, "{}", k.unwrap_or(0))?;

    Ok(())
}
