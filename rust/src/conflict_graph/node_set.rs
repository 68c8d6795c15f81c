//! Fixed-capacity bitset of node indices.

use crate::interner::NodeId;

const WORD_BITS: usize = 64;

/// Set of node indices backed by `u64` words.
///
/// All sets combined by the binary operations must share the same capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeSet {
    words: Vec<u64>,
}

#[inline]
fn split(id: NodeId) -> (usize, u64) {
    let i = id as usize;
    (i / WORD_BITS, 1u64 << (i % WORD_BITS))
}

impl NodeSet {
    /// An empty set able to hold indices `0..capacity`.
    pub fn empty(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
        }
    }

    /// The set `{0, 1, ..., len - 1}`.
    pub fn full(len: usize) -> Self {
        let mut set = Self::empty(len);
        for (i, word) in set.words.iter_mut().enumerate() {
            let remaining = len - i * WORD_BITS;
            *word = if remaining >= WORD_BITS {
                u64::MAX
            } else {
                (1u64 << remaining) - 1
            };
        }
        set
    }

    #[inline]
    pub fn insert(&mut self, id: NodeId) {
        let (w, bit) = split(id);
        self.words[w] |= bit;
    }

    #[inline]
    pub fn remove(&mut self, id: NodeId) {
        let (w, bit) = split(id);
        if let Some(word) = self.words.get_mut(w) {
            *word &= !bit;
        }
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        let (w, bit) = split(id);
        self.words.get(w).is_some_and(|word| word & bit != 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Keep only members also in `other`.
    pub fn intersect_with(&mut self, other: &NodeSet) {
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= b;
        }
    }

    /// Drop every member that is also in `other`.
    pub fn difference_with(&mut self, other: &NodeSet) {
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= !b;
        }
    }

    /// Smallest member.
    pub fn first(&self) -> Option<NodeId> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, &w)| w != 0)
            .map(|(i, w)| (i * WORD_BITS + w.trailing_zeros() as usize) as NodeId)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl FromIterator<NodeId> for NodeSet {
    /// Collects into a set sized to the largest member.
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let ids: Vec<NodeId> = iter.into_iter().collect();
        let capacity = ids.iter().max().map_or(0, |&m| m as usize + 1);
        let mut set = Self::empty(capacity);
        for id in ids {
            set.insert(id);
        }
        set
    }
}

/// Ascending iterator over a [`NodeSet`].
pub struct Iter<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some((self.index * WORD_BITS + tz) as NodeId);
            }
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
    }
}
