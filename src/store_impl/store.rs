//! Integral store: dense one-electron matrix plus sparse two-electron list

extern crate nalgebra as na;

use na::DMatrix;

use crate::error::{EnergyError, Result};
use crate::store_impl::symmetry::SymmetryIndex;

/// A single stored two-electron integral (ij|kl).
///
/// One entry stands for its whole permutation class; the producer stores
/// each class at most once and omits values below its sparsity threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoElectronEntry {
    pub i: usize,
    pub j: usize,
    pub k: usize,
    pub l: usize,
    pub value: f64,
}

impl TwoElectronEntry {
    pub fn new(i: usize, j: usize, k: usize, l: usize, value: f64) -> Self {
        TwoElectronEntry { i, j, k, l, value }
    }

    /// The four indices in storage order.
    pub fn indices(&self) -> [usize; 4] {
        [self.i, self.j, self.k, self.l]
    }
}

/// Read-only store of all molecular-orbital integrals for one calculation.
///
/// Built once from provider data, then shared immutably by both energy
/// evaluators. Owns the core Hamiltonian, the two-electron entry list
/// (insertion order preserved, but only for reproducible summation -- the
/// order carries no meaning), and the symmetry-aware lookup index.
#[derive(Debug, Clone)]
pub struct IntegralStore {
    n_orbitals: usize,
    nuclear_repulsion: f64,
    core_hamiltonian: DMatrix<f64>,
    entries: Vec<TwoElectronEntry>,
    index: SymmetryIndex,
}

impl IntegralStore {
    /// Build the store from raw provider arrays.
    ///
    /// `one_electron_raw` is the row-major dense core Hamiltonian of size
    /// `n_orbitals * n_orbitals`. Fails with a shape error when the matrix
    /// length does not match or any entry index is out of range, and with a
    /// consistency error when two entries collapse onto one canonical key
    /// with conflicting values.
    pub fn load(
        n_orbitals: usize,
        nuclear_repulsion: f64,
        one_electron_raw: Vec<f64>,
        two_electron_raw: Vec<TwoElectronEntry>,
    ) -> Result<Self> {
        if one_electron_raw.len() != n_orbitals * n_orbitals {
            return Err(EnergyError::DataShape {
                field: "core_hamiltonian",
                expected: n_orbitals * n_orbitals,
                actual: one_electron_raw.len(),
            });
        }

        for entry in &two_electron_raw {
            if let Some(&bad) = entry.indices().iter().find(|&&idx| idx >= n_orbitals) {
                return Err(EnergyError::DataShape {
                    field: "two_electron orbital index",
                    expected: n_orbitals,
                    actual: bad,
                });
            }
        }

        let core_hamiltonian = DMatrix::from_row_slice(n_orbitals, n_orbitals, &one_electron_raw);
        let index = SymmetryIndex::build(&two_electron_raw)?;

        Ok(IntegralStore {
            n_orbitals,
            nuclear_repulsion,
            core_hamiltonian,
            entries: two_electron_raw,
            index,
        })
    }

    pub fn n_orbitals(&self) -> usize {
        self.n_orbitals
    }

    pub fn nuclear_repulsion(&self) -> f64 {
        self.nuclear_repulsion
    }

    /// One-electron integral <i|h|j>.
    pub fn core_hamiltonian(&self, i: usize, j: usize) -> f64 {
        self.core_hamiltonian[(i, j)]
    }

    /// Stored two-electron entries in insertion order.
    pub fn two_electron_entries(&self) -> &[TwoElectronEntry] {
        &self.entries
    }

    /// Value of (i,j|k,l) under any symmetry-equivalent representation.
    pub fn lookup_symmetric(&self, i: usize, j: usize, k: usize, l: usize) -> Option<f64> {
        self.index.lookup(i, j, k, l)
    }

    /// The canonical-key index, for diagnostics and tests.
    pub fn symmetry_index(&self) -> &SymmetryIndex {
        &self.index
    }
}
