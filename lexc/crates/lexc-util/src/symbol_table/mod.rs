//! Symbol tables - ordered, deduplicating lexeme storage.
//!
//! This module provides [`SymbolTable`], the storage behind the identifier
//! table and the constant table of an analysis.
//!
//! A table only ever grows. [`SymbolTable::intern`] is the sole mutator: it
//! returns the index of an equal value when one is already present and
//! otherwise appends the value. Indices are 1-based and, because nothing is
//! ever removed or reordered, an index stays valid for the life of the table.
//!
//! # Performance Characteristics
//!
//! - **Interning (hit)**: O(1) - hash lookup only
//! - **Interning (miss)**: O(1) amortized - hash insert + append
//! - **Lookup by index**: O(1)
//!
//! # Example
//!
//! ```
//! use lexc_util::symbol_table::{Constant, SymbolTable};
//!
//! let mut constants: SymbolTable<Constant> = SymbolTable::new();
//! let one = constants.intern(Constant::new(1.0));
//! let same = constants.intern(Constant::new(1.00));
//! assert_eq!(one, same);
//! assert_eq!(constants.len(), 1);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use std::num::NonZeroUsize;
use std::ops::Index;

use indexmap::IndexSet;
use rustc_hash::FxHasher;

use crate::error::{TableIndexError, TableIndexResult};

type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// A 1-based reference into a [`SymbolTable`].
///
/// The non-zero representation makes `Option<TableIndex>` the same size as
/// the index itself, which is what tokens store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableIndex(NonZeroUsize);

impl TableIndex {
    /// Create an index from its 1-based value.
    ///
    /// # Errors
    ///
    /// Returns [`TableIndexError::Zero`] for `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexc_util::TableIndex;
    ///
    /// assert_eq!(TableIndex::new(3).unwrap().get(), 3);
    /// assert!(TableIndex::new(0).is_err());
    /// ```
    pub fn new(index: usize) -> TableIndexResult<Self> {
        NonZeroUsize::new(index)
            .map(Self)
            .ok_or(TableIndexError::Zero)
    }

    /// Create an index from a 0-based storage position.
    #[inline]
    pub fn from_position(position: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(position))
    }

    /// The 1-based value of this index.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based storage position this index names.
    #[inline]
    pub fn position(self) -> usize {
        self.0.get() - 1
    }
}

impl TryFrom<usize> for TableIndex {
    type Error = TableIndexError;

    fn try_from(index: usize) -> TableIndexResult<Self> {
        Self::new(index)
    }
}

impl fmt::Display for TableIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numeric constant usable as a table key.
///
/// Equality and hashing compare the exact bit pattern of the value, with no
/// epsilon: `1.0` and `1.00` parse to the same `f64` and are therefore the
/// same constant, while `0.1 + 0.2` and `0.3` are not. Negative zero is
/// folded into positive zero on construction.
#[derive(Clone, Copy, Debug)]
pub struct Constant(f64);

impl Constant {
    /// Wrap a parsed value.
    #[inline]
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    /// The wrapped value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An append-only table of unique values in first-seen order.
#[derive(Clone)]
pub struct SymbolTable<T> {
    entries: FxIndexSet<T>,
}

impl<T> SymbolTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: FxIndexSet::default(),
        }
    }

    /// Number of distinct values recorded
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value stored at `index`, if the index is in range.
    pub fn get(&self, index: TableIndex) -> Option<&T> {
        self.entries.get_index(index.position())
    }

    /// Iterate over `(index, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TableIndex, &T)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, value)| (TableIndex::from_position(position), value))
    }

    /// Iterate over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }
}

impl<T: Hash + Eq> SymbolTable<T> {
    /// Lookup-or-insert.
    ///
    /// Returns the index of the entry equal to `value`, appending `value`
    /// first if no such entry exists.
    pub fn intern(&mut self, value: T) -> TableIndex {
        let (position, _) = self.entries.insert_full(value);
        TableIndex::from_position(position)
    }

    /// The index of the entry equal to `value`, without inserting.
    pub fn index_of<Q>(&self, value: &Q) -> Option<TableIndex>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_index_of(value).map(TableIndex::from_position)
    }

    /// Returns true if an entry equal to `value` exists.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains(value)
    }
}

impl<T> Default for SymbolTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for SymbolTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.intern(value);
        }
        table
    }
}

impl<T: Hash + Eq> Index<TableIndex> for SymbolTable<T> {
    type Output = T;

    fn index(&self, index: TableIndex) -> &T {
        &self.entries[index.position()]
    }
}

// Tables are equal when they hold the same values at the same indices.
impl<T: PartialEq> PartialEq for SymbolTable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<T: Eq> Eq for SymbolTable<T> {}

impl<T: fmt::Debug> fmt::Debug for SymbolTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

static_assertions::assert_impl_all!(SymbolTable<String>: Send, Sync);
static_assertions::assert_eq_size!(Option<TableIndex>, usize);
