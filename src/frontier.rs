use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use std::hash::Hash;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// A set of unique nodes used for the open and closed frontiers of a search. Membership tests are
/// hash lookups. Iteration yields members in the order they were first added, and removing a member
/// keeps the relative order of the rest, so scans over the set are reproducible.
#[derive(Clone, Debug)]
pub struct FrontierSet<N: Eq + Hash> {
    elements: FxIndexSet<N>,
}

impl<N: Eq + Hash> Default for FrontierSet<N> {
    fn default() -> FrontierSet<N> {
        FrontierSet {
            elements: FxIndexSet::default(),
        }
    }
}

impl<N: Eq + Hash> FrontierSet<N> {
    pub fn new() -> FrontierSet<N> {
        FrontierSet::default()
    }

    /// Adds a node, returning false if it was already present (the set is left unchanged).
    pub fn add(&mut self, node: N) -> bool {
        self.elements.insert(node)
    }

    /// Removes a node if present, returning whether it was.
    pub fn remove(&mut self, node: &N) -> bool {
        self.elements.shift_remove(node)
    }

    pub fn remove_all<'a, I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        for node in nodes {
            self.remove(node);
        }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.elements.contains(node)
    }

    /// Members in insertion order.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.elements.iter()
    }

    pub(crate) fn get_index(&self, index: usize) -> Option<&N> {
        self.elements.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<N: Eq + Hash + Clone> FrontierSet<N> {
    /// An owned snapshot of the members in insertion order.
    pub fn to_vec(&self) -> Vec<N> {
        self.elements.iter().cloned().collect()
    }
}

impl<N: Eq + Hash> Extend<N> for FrontierSet<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for node in iter {
            self.add(node);
        }
    }
}

impl<N: Eq + Hash> FromIterator<N> for FrontierSet<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut set = FrontierSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, N: Eq + Hash> IntoIterator for &'a FrontierSet<N> {
    type Item = &'a N;
    type IntoIter = indexmap::set::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
