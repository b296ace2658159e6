use std::path::Path;

use needletail::parse_fastx_file;

use crate::dense::DenseGraph;
use crate::error::{Error, Result};
use crate::utils::default_unbounded_progress_bar;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read sequences from a file.
///
/// FASTA and FASTQ files (plain or gzipped) are read through `needletail`. Anything else is
/// treated as one sequence per line, with blank lines skipped.
///
/// # Errors
///
/// Fails if the file cannot be read or a FASTA/FASTQ record is malformed.
pub fn read_sequences(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read(path)?;

    let is_fastx = contents.starts_with(&GZIP_MAGIC)
        || matches!(
            contents.iter().find(|b| !b.is_ascii_whitespace()),
            Some(b'>' | b'@')
        );

    let sequences = if is_fastx {
        let mut reader = parse_fastx_file(path)?;
        let mut sequences = Vec::new();

        let progress_bar = default_unbounded_progress_bar("Reading sequences");
        while let Some(record) = reader.next() {
            let record = record?;
            sequences.push(String::from_utf8_lossy(&record.seq()).into_owned());
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        sequences
    } else {
        String::from_utf8_lossy(&contents)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    };

    crate::elog!("Read {} sequences from {}.", sequences.len(), path.display());

    Ok(sequences)
}

/// Parse a directed edge list into a [`DenseGraph`].
///
/// The first non-blank line holds the vertex count `n` and edge count `m`; it is followed by `m`
/// lines `u v` naming an edge from `u` to `v`, with vertices numbered from 1.
///
/// # Errors
///
/// Fails with [`Error::MalformedInput`] on a missing or unparseable line, a vertex id outside
/// `1..=n`, or an edge count that does not match the header.
pub fn parse_edge_list(text: &str) -> Result<DenseGraph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(malformed(1, "missing header"));
    };
    let (n, m) = parse_pair(header_line, header)?;

    let mut graph = DenseGraph::with_vertices(n);
    let mut edge_count = 0;

    for (line_number, line) in lines {
        let (u, v) = parse_pair(line_number, line)?;

        if u == 0 || v == 0 || u > n || v > n {
            return Err(malformed(
                line_number,
                &format!("edge {u} -> {v} names a vertex outside 1..={n}"),
            ));
        }

        graph.add_edge(u - 1, v - 1)?;
        edge_count += 1;
    }

    if edge_count != m {
        return Err(malformed(
            header_line,
            &format!("header declares {m} edges but {edge_count} were found"),
        ));
    }

    Ok(graph)
}

fn parse_pair(line_number: usize, line: &str) -> Result<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let &[a, b] = fields.as_slice() else {
        return Err(malformed(
            line_number,
            &format!("expected two integers, found '{line}'"),
        ));
    };

    let parse = |field: &str| {
        field
            .parse::<usize>()
            .map_err(|_| malformed(line_number, &format!("'{field}' is not a non-negative integer")))
    };

    Ok((parse(a)?, parse(b)?))
}

fn malformed(line: usize, message: &str) -> Error {
    Error::MalformedInput {
        line,
        message: message.to_string(),
    }
}
