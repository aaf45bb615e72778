//! Non-zero iteration protocol
//!
//! Two call shapes traverse a matrix's active entries: an observer that only
//! reads, and a transform whose callback verdict can keep, rewrite, delete,
//! or abort. The transform is the single primitive behind every elementwise
//! operator and the threshold re-filter.

use num_traits::Float;

use crate::coord::decode;
use crate::matrix::SparseMatrix;

/// Verdict returned by a transform callback for the visited entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visit<T> {
    /// Abort the traversal; remaining entries are left untouched
    Stop,
    /// Leave the entry as it is
    Keep,
    /// Delete the entry
    Remove,
    /// Replace the stored value; the new value is snapped against the
    /// matrix's threshold, and a snapped-to-zero result deletes the entry
    SetTo(T),
}

impl<T: Float> SparseMatrix<T> {
    /// Observer traversal over all non-zero entries
    ///
    /// Visits entries in the store's natural (unsorted) order and never
    /// mutates the matrix.
    pub fn for_each_non_zero<F>(&self, mut callback: F)
    where
        F: FnMut(usize, usize, T),
    {
        for (&key, &value) in self.elements.iter() {
            let (i, j) = decode(key, self.columns);
            callback(i, j, value);
        }
    }

    /// Transform traversal over all non-zero entries
    ///
    /// Entries are visited in the store's natural order. A `SetTo` verdict
    /// only writes when the snapped value differs from the stored one, so a
    /// callback returning its input verbatim is a pure re-filter pass. After
    /// the traversal (complete or aborted) the store runs its amortized
    /// shrink check.
    pub fn visit_non_zeros<F>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(usize, usize, T) -> Visit<T>,
    {
        let snapshot: Vec<(u64, T)> = self.elements.iter().map(|(&k, &v)| (k, v)).collect();
        for (key, value) in snapshot {
            let (i, j) = decode(key, self.columns);
            match callback(i, j, value) {
                Visit::Stop => break,
                Visit::Keep => {}
                Visit::Remove => self.elements.remove(key),
                Visit::SetTo(raw) => {
                    let snapped = self.snap(raw);
                    if snapped != value {
                        if snapped == T::zero() {
                            self.elements.remove(key);
                        } else {
                            self.elements.insert(key, snapped);
                        }
                    }
                }
            }
        }
        self.elements.maybe_shrink();
        self
    }
}
