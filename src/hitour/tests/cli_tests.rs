use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_hitour(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hitour"))
        .args(args)
        .output()
        .expect("Failed to execute hitour")
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run a subcommand that writes to `--output` and return the trimmed output contents.
fn run_to_file(dir: &TempDir, args: &[&str]) -> String {
    let output_path = dir.path().join("output.txt");
    let mut full_args = args.to_vec();
    full_args.extend(["--output", output_path.to_str().unwrap()]);

    let output = run_hitour(&full_args);
    assert!(
        output.status.success(),
        "hitour {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    read_trimmed(&output_path)
}

fn read_trimmed(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap().trim_end().to_string()
}

#[test]
fn test_universal() {
    let temp_dir = TempDir::new().unwrap();
    let universal = run_to_file(&temp_dir, &["universal", "-k", "3"]);

    assert_eq!(universal.len(), 8);

    let wrapped = format!("{universal}{}", &universal[..2]);
    let mut windows: Vec<&str> = (0..8).map(|i| &wrapped[i..i + 3]).collect();
    windows.sort_unstable();

    assert_eq!(
        windows,
        vec!["000", "001", "010", "011", "100", "101", "110", "111"]
    );
}

#[test]
fn test_euler_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let edges = write_input(&temp_dir, "edges.txt", "3 3\n1 2\n2 3\n3 1\n");

    let circuit = run_to_file(&temp_dir, &["euler", edges.to_str().unwrap()]);

    assert_eq!(circuit, "1\n1 2 3");
}

#[test]
fn test_euler_infeasible() {
    let temp_dir = TempDir::new().unwrap();
    let edges = write_input(&temp_dir, "edges.txt", "2 1\n1 2\n");

    let circuit = run_to_file(&temp_dir, &["euler", edges.to_str().unwrap()]);

    assert_eq!(circuit, "0");
}

#[test]
fn test_euler_malformed_edge_list() {
    let temp_dir = TempDir::new().unwrap();
    let edges = write_input(&temp_dir, "edges.txt", "2 1\n1 5\n");
    let output_path = temp_dir.path().join("output.txt");

    let output = run_hitour(&[
        "euler",
        edges.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
}

#[test]
fn test_assemble_kmers() {
    let temp_dir = TempDir::new().unwrap();
    let kmers = write_input(&temp_dir, "kmers.txt", "ACG\nCGT\nGTA\nTAC\n");

    let assembly = run_to_file(&temp_dir, &["assemble", "--kmers", kmers.to_str().unwrap()]);

    assert_eq!(assembly, "CGTA");
}

#[test]
fn test_assemble_reads() {
    let temp_dir = TempDir::new().unwrap();
    let reads = write_input(&temp_dir, "reads.fa", ">r1\nACGTA\n>r2\nGTACG\n");

    let assembly = run_to_file(&temp_dir, &["assemble", "-k", "3", reads.to_str().unwrap()]);

    assert_eq!(assembly, "CGTA");
}

#[test]
fn test_assemble_infeasible() {
    let temp_dir = TempDir::new().unwrap();
    let kmers = write_input(&temp_dir, "kmers.txt", "AAC\nACG\n");

    let assembly = run_to_file(&temp_dir, &["assemble", "--kmers", kmers.to_str().unwrap()]);

    assert_eq!(assembly, "0");
}

#[test]
fn test_assemble_reads_require_kmer_size() {
    let temp_dir = TempDir::new().unwrap();
    let reads = write_input(&temp_dir, "reads.txt", "ACGTA\n");

    let output = run_hitour(&["assemble", reads.to_str().unwrap()]);

    assert!(!output.status.success());
}

#[test]
fn test_bubbles() {
    let temp_dir = TempDir::new().unwrap();
    let reads = write_input(&temp_dir, "reads.txt", "AABBA\nAACBA\nAADBA\n");

    let bubbles = run_to_file(
        &temp_dir,
        &["bubbles", "-k", "3", "-t", "3", reads.to_str().unwrap()],
    );

    assert_eq!(bubbles, "3");
}

#[test]
fn test_optimal_k() {
    let temp_dir = TempDir::new().unwrap();
    let reads = write_input(&temp_dir, "reads.txt", "AACG\nACGT\nCAAC\nGTTG\nTGCA\n");

    assert_eq!(run_to_file(&temp_dir, &["optimal-k", reads.to_str().unwrap()]), "3");
}

#[test]
fn test_optimal_k_none() {
    let temp_dir = TempDir::new().unwrap();
    let reads = write_input(&temp_dir, "reads.txt", "ACGT\nTTTT\n");

    assert_eq!(run_to_file(&temp_dir, &["optimal-k", reads.to_str().unwrap()]), "0");
}

#[test]
fn test_graph_dot() {
    let temp_dir = TempDir::new().unwrap();
    let reads = write_input(&temp_dir, "reads.txt", "ACGTA\n");

    let dot = run_to_file(&temp_dir, &["graph", "-k", "3", reads.to_str().unwrap()]);

    assert!(dot.starts_with("digraph {"));
    for kmer in ["ACG", "CGT", "GTA"] {
        assert!(dot.contains(kmer), "missing edge label {kmer}");
    }
}
