use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod assemble;
mod bubbles;
mod euler;
mod graph;
mod optimal;
mod universal;

#[derive(Debug, Parser)] // requires `derive` feature
#[clap(name = "hitour")]
#[clap(about = "Eulerian circuits, circular assembly, and bubble detection in de Bruijn graphs.", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Construct a k-universal circular binary string.
    #[clap(arg_required_else_help = true)]
    Universal {
        /// Output path for the circular string.
        #[clap(short, long, value_parser, default_value = "/dev/stdout")]
        output: PathBuf,

        /// Kmer-size
        #[clap(short, long, value_parser)]
        kmer_size: usize,
    },

    /// Find an Eulerian circuit in a directed graph given as a 1-based edge list.
    #[clap(arg_required_else_help = true)]
    Euler {
        /// Output path for the circuit ("0" if there is none).
        #[clap(short, long, value_parser, default_value = "/dev/stdout")]
        output: PathBuf,

        /// Edge list: an "n m" header followed by m "u v" lines.
        #[clap(required = true, value_parser)]
        edge_list: PathBuf,
    },

    /// Assemble a circular genome from k-mers or reads.
    #[clap(arg_required_else_help = true)]
    Assemble {
        /// Output path for the assembled circular sequence.
        #[clap(short, long, value_parser, default_value = "/dev/stdout")]
        output: PathBuf,

        /// Treat the input as k-mers instead of reads.
        #[clap(long)]
        kmers: bool,

        /// Kmer-size (required for reads)
        #[clap(short, long, value_parser, required_unless_present = "kmers")]
        kmer_size: Option<usize>,

        /// FASTA, FASTQ, or one-sequence-per-line file.
        #[clap(required = true, value_parser)]
        input: PathBuf,
    },

    /// Count bubbles in the de Bruijn graph of a set of reads.
    #[clap(arg_required_else_help = true)]
    Bubbles {
        /// Output path for the bubble count.
        #[clap(short, long, value_parser, default_value = "/dev/stdout")]
        output: PathBuf,

        /// Kmer-size
        #[clap(short, long, value_parser)]
        kmer_size: usize,

        /// Maximum length of either path of a bubble.
        #[clap(short = 't', long, value_parser)]
        max_depth: usize,

        /// FASTA, FASTQ, or one-sequence-per-line file.
        #[clap(required = true, value_parser)]
        reads_path: PathBuf,
    },

    /// Select the largest k-mer size whose de Bruijn graph has an Eulerian circuit.
    #[clap(arg_required_else_help = true)]
    OptimalK {
        /// Output path for the selected k ("0" if none qualifies).
        #[clap(short, long, value_parser, default_value = "/dev/stdout")]
        output: PathBuf,

        /// FASTA, FASTQ, or one-sequence-per-line file.
        #[clap(required = true, value_parser)]
        reads_path: PathBuf,
    },

    /// Write the de Bruijn graph of a set of reads in DOT format.
    #[clap(arg_required_else_help = true)]
    Graph {
        /// Output path for the DOT file.
        #[clap(short, long, value_parser, default_value = "/dev/stdout")]
        output: PathBuf,

        /// Kmer-size
        #[clap(short, long, value_parser)]
        kmer_size: usize,

        /// FASTA, FASTQ, or one-sequence-per-line file.
        #[clap(required = true, value_parser)]
        reads_path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    skytour::elog!("Hitour version {}", env!("CARGO_PKG_VERSION"));
    skytour::elog!("{:?}", args);

    match args.command {
        Commands::Universal { output, kmer_size } => {
            universal::start(&output, kmer_size)?;
        }
        Commands::Euler { output, edge_list } => {
            euler::start(&output, &edge_list)?;
        }
        Commands::Assemble {
            output,
            kmers,
            kmer_size,
            input,
        } => {
            assemble::start(&output, kmers, kmer_size, &input)?;
        }
        Commands::Bubbles {
            output,
            kmer_size,
            max_depth,
            reads_path,
        } => {
            bubbles::start(&output, kmer_size, max_depth, &reads_path)?;
        }
        Commands::OptimalK { output, reads_path } => {
            optimal::start(&output, &reads_path)?;
        }
        Commands::Graph {
            output,
            kmer_size,
            reads_path,
        } => {
            graph::start(&output, kmer_size, &reads_path)?;
        }
    }

    skytour::elog!("Complete.");

    Ok(())
}
