//! Symmetry-aware lookup for two-electron integrals
//!
//! A stored integral (ij|kl) stands for up to eight index tuples related by
//! the real-orbital permutation symmetry
//!
//! (ij|kl) = (ji|kl) = (ij|lk) = (ji|lk) = (kl|ij) = (lk|ij) = (kl|ji) = (lk|ji)
//!
//! Instead of rescanning the entry list for every query, all stored entries
//! are folded once into a map keyed by the canonical representative of their
//! permutation class. Lookups canonicalize the query and probe the map.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{EnergyError, Result};
use crate::store_impl::store::TwoElectronEntry;

/// Two stored values for the same canonical key must agree to within this
/// tolerance; a larger discrepancy means the input is corrupt.
const VALUE_TOLERANCE: f64 = 1e-10;

/// Canonical representative of the permutation class of (i,j|k,l).
///
/// Each electron pair is sorted ascending, then the two sorted pairs are
/// ordered by first element, ties broken by second. All eight (or fewer,
/// for degenerate tuples) equivalent index tuples map to the same key.
pub fn canonical_key(i: usize, j: usize, k: usize, l: usize) -> [usize; 4] {
    let first = if i <= j { (i, j) } else { (j, i) };
    let second = if k <= l { (k, l) } else { (l, k) };
    if second < first {
        [second.0, second.1, first.0, first.1]
    } else {
        [first.0, first.1, second.0, second.1]
    }
}

/// Map from canonical key to integral value, built once at load time.
#[derive(Debug, Clone)]
pub struct SymmetryIndex {
    map: HashMap<[usize; 4], f64>,
}

impl SymmetryIndex {
    /// Fold every stored entry into the canonical-key map.
    ///
    /// A key that recurs with a value differing by more than
    /// `VALUE_TOLERANCE` is a fatal [`EnergyError::DataInconsistency`];
    /// a recurrence within tolerance keeps the first value.
    pub fn build(entries: &[TwoElectronEntry]) -> Result<Self> {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = canonical_key(entry.i, entry.j, entry.k, entry.l);
            match map.entry(key) {
                Entry::Occupied(stored) => {
                    let first: f64 = *stored.get();
                    if (first - entry.value).abs() > VALUE_TOLERANCE {
                        return Err(EnergyError::DataInconsistency {
                            key,
                            first,
                            second: entry.value,
                        });
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry.value);
                }
            }
        }
        Ok(SymmetryIndex { map })
    }

    /// Value of (i,j|k,l) under any of its symmetry-equivalent
    /// representations, or `None` if no equivalent entry was stored.
    ///
    /// Callers treat `None` as 0.0: an absent integral fell below the
    /// producer's storage threshold and is negligible, not erroneous.
    pub fn lookup(&self, i: usize, j: usize, k: usize, l: usize) -> Option<f64> {
        self.map.get(&canonical_key(i, j, k, l)).copied()
    }

    /// Number of distinct canonical keys in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
