//! Sorted sparse rows: the storage unit of `RowMat`.
//!
//! A `Row` keeps its entries strictly ascending by column with no duplicate
//! columns. The invariant is maintained by funneling every mutation through
//! `merge_append`; `raw_insert` is the unchecked primitive underneath it.

use num_traits::Float;

/// A single stored coefficient: a value at a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<T> {
    pub value: T,
    pub col: usize,
}

/// One matrix row, sorted by column.
#[derive(Clone, Debug)]
pub struct Row<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Row<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> Row<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries, ascending by column.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Binary search for `col`. Returns the entry index when stored.
    pub fn lookup(&self, col: usize) -> Option<usize> {
        self.entries.binary_search_by_key(&col, |e| e.col).ok()
    }

    /// Index at which `col` keeps the row sorted when inserted.
    ///
    /// Caller contract: `col` is not already stored. Callers always check
    /// `lookup` first, so the exact-match arm below is unreachable under
    /// correct usage; it is kept as an invariant guard.
    pub fn insertion_point(&self, col: usize) -> usize {
        let (mut lo, mut hi) = (0, self.entries.len());
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.entries[mid].col == col {
                debug_assert!(false, "insertion_point called for stored column {col}");
                return mid + 1;
            }
            if col < self.entries[mid].col {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}

impl<T: Float> Row<T> {
    /// Value stored at `col`, if any.
    pub fn get(&self, col: usize) -> Option<T> {
        self.lookup(col).map(|pos| self.entries[pos].value)
    }

    /// Insert without checking for duplicates. Caller contract: `col` is
    /// not already stored.
    pub fn raw_insert(&mut self, value: T, col: usize) {
        let at = self.insertion_point(col);
        self.entries.insert(at, Entry { value, col });
    }

    /// Accumulate `value` into the entry at `col`, inserting it when
    /// absent. The only mutation used by constructors and operators, so
    /// the sorted-unique invariant holds after every call.
    pub fn merge_append(&mut self, value: T, col: usize) {
        match self.lookup(col) {
            Some(pos) => self.entries[pos].value = self.entries[pos].value + value,
            None => self.raw_insert(value, col),
        }
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
