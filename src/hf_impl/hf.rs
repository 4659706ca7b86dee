//! Hartree-Fock reference energy from stored integrals

use tracing::info;

use crate::store_impl::IntegralStore;

/// Hartree-Fock energy evaluator.
///
/// The molecular orbitals are already canonical (the integrals are given in
/// the MO basis), so no SCF iteration happens here: the energy is a single
/// pass over the diagonal of the core Hamiltonian and the stored
/// two-electron entries, restricted to occupied orbitals.
pub struct HartreeFock<'a> {
    store: &'a IntegralStore,
    n_occupied: usize,
}

impl<'a> HartreeFock<'a> {
    pub fn new(store: &'a IntegralStore, n_occupied: usize) -> Self {
        HartreeFock { store, n_occupied }
    }

    /// Total Hartree-Fock energy: nuclear repulsion + one-electron +
    /// two-electron contributions.
    pub fn energy(&self) -> f64 {
        let nuclear = self.store.nuclear_repulsion();
        info!("Nuclear repulsion energy: {:.10} Eh", nuclear);

        let one_electron = self.one_electron_energy();
        info!("One-electron energy:      {:.10} Eh", one_electron);

        let two_electron = self.two_electron_energy();
        info!("Two-electron energy:      {:.10} Eh", two_electron);

        nuclear + one_electron + two_electron
    }

    /// 2 * sum of <i|h|i> over occupied orbitals (doubly occupied in RHF).
    pub fn one_electron_energy(&self) -> f64 {
        (0..self.n_occupied)
            .map(|i| 2.0 * self.store.core_hamiltonian(i, i))
            .sum()
    }

    /// Direct and exchange contributions from the stored entry list.
    ///
    /// An entry contributes only when all four indices are occupied. The
    /// direct and exchange conditions are checked independently: an entry of
    /// shape (ii|ii) satisfies both and contributes once to each. The weight
    /// of each contribution depends on how many distinct permutations the
    /// entry stands for -- degenerate entries collapse onto a single
    /// permutation and must not be counted twice.
    pub fn two_electron_energy(&self) -> f64 {
        let n_occ = self.n_occupied;
        let mut energy = 0.0;

        for entry in self.store.two_electron_entries() {
            let occupied = entry.indices().iter().all(|&idx| idx < n_occ);
            if !occupied {
                continue;
            }

            // Direct term (ij|ij)
            if entry.i == entry.k && entry.j == entry.l {
                if entry.i == entry.j {
                    energy += 2.0 * entry.value;
                } else {
                    energy += 4.0 * entry.value;
                }
            }

            // Exchange term (ii|kk)
            if entry.i == entry.j && entry.l == entry.k {
                if entry.i == entry.k {
                    energy -= entry.value;
                } else {
                    energy -= 2.0 * entry.value;
                }
            }
        }

        energy
    }
}
