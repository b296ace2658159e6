use std::collections::BTreeSet;

use itertools::Itertools;
use needletail::Sequence;

use crate::error::{Error, Result};

/// Largest supported k-mer size.
pub const MAX_KMER_SIZE: usize = u8::MAX as usize;

/// Validate a k-mer size and narrow it to the width used for sequence windows.
fn kmer_size(k: usize) -> Result<u8> {
    if k < 2 {
        return Err(Error::KmerTooShort { k });
    }

    u8::try_from(k).map_err(|_| Error::KmerTooLong { k })
}

/// Generate all 2^k binary strings of length k, in lexicographic order.
///
/// # Errors
///
/// Fails if k < 2.
pub fn binary_kmers(k: usize) -> Result<Vec<String>> {
    if k < 2 {
        return Err(Error::KmerTooShort { k });
    }

    Ok(std::iter::repeat_n(['0', '1'], k)
        .multi_cartesian_product()
        .map(|symbols| symbols.into_iter().collect())
        .collect())
}

/// All length-k windows of a single read, in order and with repeats.
///
/// # Errors
///
/// Fails if k is out of range or the read is not ASCII.
pub fn kmer_windows(read: &str, k: usize) -> Result<Vec<String>> {
    let k = kmer_size(k)?;

    if !read.is_ascii() {
        return Err(Error::InvalidRead {
            read: read.to_string(),
        });
    }

    let seq = read.as_bytes().to_vec();

    Ok(seq
        .kmers(k)
        .map(|kmer| String::from_utf8_lossy(kmer).into_owned())
        .collect())
}

/// The distinct length-k windows across a set of reads.
///
/// # Errors
///
/// Fails if no reads are given, if k is out of range, or if any read is not ASCII.
pub fn kmers_from_reads<S: AsRef<str>>(reads: &[S], k: usize) -> Result<BTreeSet<String>> {
    if reads.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut kmers = BTreeSet::new();
    for read in reads {
        kmers.extend(kmer_windows(read.as_ref(), k)?);
    }

    Ok(kmers)
}
