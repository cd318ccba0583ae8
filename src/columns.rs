//! Fixed-capacity set of candidate column counts.

/// Upper bound on distinct candidates the column generator can produce.
pub const MAX_CANDIDATES: usize = 4;

/// A small, stack-allocated set of distinct, positive column counts.
///
/// Insertion order is preserved. Zero and duplicate values are ignored,
/// as are pushes beyond [`MAX_CANDIDATES`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnCandidates {
    slots: [u32; MAX_CANDIDATES],
    len: usize,
}

impl ColumnCandidates {
    /// Empty set.
    pub const fn new() -> Self {
        Self {
            slots: [0; MAX_CANDIDATES],
            len: 0,
        }
    }

    /// Set holding exactly one column count.
    pub fn single(columns: u32) -> Self {
        let mut set = Self::new();
        set.push(columns);
        set
    }

    /// Insert a column count. Returns `true` if it was added.
    pub fn push(&mut self, columns: u32) -> bool {
        if columns == 0 || self.contains(columns) || self.len == MAX_CANDIDATES {
            return false;
        }
        self.slots[self.len] = columns;
        self.len += 1;
        true
    }

    pub fn contains(&self, columns: u32) -> bool {
        self.as_slice().contains(&columns)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.slots[..self.len]
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, u32>> {
        self.as_slice().iter().copied()
    }
}

impl<'a> IntoIterator for &'a ColumnCandidates {
    type Item = u32;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
