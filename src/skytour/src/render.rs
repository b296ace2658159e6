use std::fmt::Display;
use std::hash::Hash;

use itertools::Itertools;

use crate::path::Path;

/// Concatenate a per-vertex suffix in circuit order.
///
/// For an overlap graph the suffix is the part of each read not covered by its predecessor; for a
/// de Bruijn graph it is the last symbol of each (k-1)-mer (see [`assemble_circular`]).
pub fn assemble_with<K, F, S>(path: &Path<K>, mut suffix: F) -> String
where
    K: Clone + Eq + Hash,
    F: FnMut(&K) -> S,
    S: AsRef<str>,
{
    path.iter().fold(String::new(), |mut acc, key| {
        acc.push_str(suffix(key).as_ref());
        acc
    })
}

/// Spell the circular string of a de Bruijn circuit from the last symbol of every vertex.
#[must_use]
pub fn assemble_circular<K>(path: &Path<K>) -> String
where
    K: AsRef<str> + Clone + Eq + Hash,
{
    path.iter()
        .filter_map(|key| key.as_ref().chars().next_back())
        .collect()
}

/// Format a circuit as `0` when there is no circuit, otherwise `1` on its own line followed by
/// the space-separated vertex labels.
#[must_use]
pub fn format_circuit<K>(path: &Path<K>) -> String
where
    K: Display + Clone + Eq + Hash,
{
    format_circuit_with(path, K::to_string)
}

/// Like [`format_circuit`], with a custom label per vertex (e.g. 1-based ids).
pub fn format_circuit_with<K, F, D>(path: &Path<K>, label: F) -> String
where
    K: Clone + Eq + Hash,
    F: FnMut(&K) -> D,
    D: Display,
{
    if path.is_empty() {
        "0".to_string()
    } else {
        format!("1\n{}", path.iter().map(label).join(" "))
    }
}
