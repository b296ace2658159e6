//! A closed walk stored as a ring of steps in an arena.
//!
//! Steps are never removed. The ring can be re-rooted at the most recent step of any vertex in
//! O(1), which is how sub-tours found later in a circuit search are spliced into the ring.

use std::collections::HashMap;
use std::hash::Hash;

/// A single step of a [`Path`]: a vertex key plus links to its neighbours in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<K> {
    key: K,
    next: Option<usize>,
    prev: Option<usize>,
}

impl<K> Step<K> {
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Arena index of the following step.
    #[must_use]
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Arena index of the preceding step.
    #[must_use]
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }
}

/// An ordered, doubly-linked sequence of vertex steps that can be closed into a ring.
#[derive(Debug, Clone)]
pub struct Path<K> {
    steps: Vec<Step<K>>,
    first: Option<usize>,
    last: Option<usize>,
    last_step_of: HashMap<K, usize>,
}

impl<K> Default for Path<K> {
    fn default() -> Self {
        Path {
            steps: Vec::new(),
            first: None,
            last: None,
            last_step_of: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Path<K> {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True once the last step links back to the first.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        match (self.first, self.last) {
            (Some(first), Some(last)) => self.steps[last].next == Some(first),
            _ => false,
        }
    }

    #[must_use]
    pub fn first_step(&self) -> Option<&Step<K>> {
        self.first.map(|i| &self.steps[i])
    }

    #[must_use]
    pub fn last_step(&self) -> Option<&Step<K>> {
        self.last.map(|i| &self.steps[i])
    }

    /// Look up a step by arena index.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&Step<K>> {
        self.steps.get(index)
    }

    /// Append a vertex to the end of the path.
    ///
    /// If the path is currently a ring, the first step's vertex is appended again before `key`:
    /// the ring is opened at its first step and the new vertex continues from there.
    pub fn add_step(&mut self, key: K) {
        if self.is_cycle() {
            if let Some(first) = self.first {
                let first_key = self.steps[first].key.clone();
                self.link(first_key);
            }
        }

        self.link(key);
    }

    /// Close the path into a ring by linking the last step back to the first.
    pub fn complete_cycle(&mut self) {
        if let (Some(first), Some(last)) = (self.first, self.last) {
            self.steps[last].next = Some(first);
            self.steps[first].prev = Some(last);
        }
    }

    /// Make the most recent step of `key` the first step, and its predecessor the last.
    ///
    /// No steps are moved. Returns false, leaving the path untouched, if `key` has no step or its
    /// most recent step has no predecessor.
    pub fn re_root_at(&mut self, key: &K) -> bool {
        let Some(&step) = self.last_step_of.get(key) else {
            return false;
        };
        let Some(prev) = self.steps[step].prev else {
            return false;
        };

        self.first = Some(step);
        self.last = Some(prev);

        true
    }

    /// Iterate over the vertex keys from the first step, following successor links, until the
    /// walk returns to the first step or runs out of steps.
    #[must_use]
    pub fn iter(&self) -> PathIter<'_, K> {
        PathIter {
            path: self,
            cursor: self.first,
        }
    }

    /// The vertex keys in path order, each step once.
    #[must_use]
    pub fn list_vertices(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// The vertex keys in path order, with the first vertex repeated at the end when the path is
    /// a ring.
    #[must_use]
    pub fn closed_walk(&self) -> Vec<&K> {
        let mut walk = self.list_vertices();

        if self.is_cycle() {
            if let Some(step) = self.first_step() {
                walk.push(step.key());
            }
        }

        walk
    }

    fn link(&mut self, key: K) {
        let index = self.steps.len();

        self.steps.push(Step {
            key: key.clone(),
            next: None,
            prev: self.last,
        });

        match self.last {
            Some(last) => self.steps[last].next = Some(index),
            None => self.first = Some(index),
        }

        self.last = Some(index);
        self.last_step_of.insert(key, index);
    }
}

impl<'a, K: Clone + Eq + Hash> IntoIterator for &'a Path<K> {
    type Item = &'a K;
    type IntoIter = PathIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the keys of a [`Path`], see [`Path::iter`].
pub struct PathIter<'a, K> {
    path: &'a Path<K>,
    cursor: Option<usize>,
}

impl<'a, K> Iterator for PathIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let step = &self.path.steps[self.cursor?];

        self.cursor = step.next.filter(|&next| Some(next) != self.path.first);

        Some(&step.key)
    }
}
