//! Second-order Moller-Plesset correction from stored integrals

extern crate nalgebra as na;

use na::DVector;
use tracing::{info, warn};

use crate::store_impl::IntegralStore;

/// A term skipped because its energy denominator vanished exactly.
///
/// Degenerate denominators are a known-unhandled edge case: the term is
/// dropped and reported, never treated as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkippedTerm {
    pub indices: [usize; 4],
}

/// Result of an MP2 evaluation: the correction plus the diagnostic record
/// of every zero-denominator term that was skipped.
#[derive(Debug, Clone)]
pub struct Mp2Correction {
    pub energy: f64,
    pub skipped: Vec<SkippedTerm>,
}

/// MP2 correction evaluator.
///
/// Classifies each stored entry by its occupied/virtual composition and
/// accumulates the spin-adapted pair energies. The exchange partner of an
/// entry is retrieved through the store's canonical-key lookup rather than
/// by rescanning the entry list.
pub struct Mp2<'a> {
    store: &'a IntegralStore,
    orbital_energies: &'a DVector<f64>,
    n_occupied: usize,
}

impl<'a> Mp2<'a> {
    pub fn new(
        store: &'a IntegralStore,
        orbital_energies: &'a DVector<f64>,
        n_occupied: usize,
    ) -> Self {
        Mp2 {
            store,
            orbital_energies,
            n_occupied,
        }
    }

    /// Accumulate the MP2 correction over all qualifying stored entries.
    ///
    /// Only entries with exactly two occupied and two virtual indices enter
    /// the sum, and of those, only entries whose occupied pair differs from
    /// the pairs reassembled from positions 0&2 and 1&3 of the original
    /// tuple.
    pub fn correction(&self) -> Mp2Correction {
        let n_occ = self.n_occupied;
        let energies = self.orbital_energies;
        let mut energy = 0.0;
        let mut skipped = Vec::new();

        for entry in self.store.two_electron_entries() {
            let indices = entry.indices();
            let n_virtual = indices.iter().filter(|&&idx| idx >= n_occ).count();
            if n_virtual != 2 {
                continue;
            }

            let mut occupied = [0usize; 2];
            let mut virtual_ = [0usize; 2];
            let mut occ_count = 0;
            let mut virt_count = 0;
            for &idx in &indices {
                if idx < n_occ {
                    occupied[occ_count] = idx;
                    occ_count += 1;
                } else {
                    virtual_[virt_count] = idx;
                    virt_count += 1;
                }
            }

            // The occupied pair must not be the one reassembled from
            // positions 0&2 or 1&3 of the original tuple, in either order.
            if (occupied[0] == entry.i && occupied[1] == entry.k)
                || (occupied[0] == entry.k && occupied[1] == entry.i)
                || (occupied[0] == entry.j && occupied[1] == entry.l)
                || (occupied[0] == entry.l && occupied[1] == entry.j)
            {
                continue;
            }

            let denominator = energies[occupied[0]] + energies[occupied[1]]
                - energies[virtual_[0]]
                - energies[virtual_[1]];

            if denominator == 0.0 {
                warn!(
                    "Skipping zero denominator for ({},{}|{},{})",
                    entry.i, entry.j, entry.k, entry.l
                );
                skipped.push(SkippedTerm { indices });
                continue;
            }

            // Exchange partner <ij|lk>: first pair swapped, resolved
            // through the canonical-key index. Absent partner means the
            // integral fell below the storage threshold.
            let partner = self
                .store
                .lookup_symmetric(entry.j, entry.i, entry.k, entry.l)
                .unwrap_or(0.0);

            let pair_energy = entry.value * (2.0 * entry.value - partner) / denominator;
            if occupied[0] == occupied[1] && virtual_[0] == virtual_[1] {
                energy += pair_energy;
            } else {
                energy += 2.0 * pair_energy;
            }
        }

        if !skipped.is_empty() {
            info!(
                "MP2: skipped {} zero-denominator term(s)",
                skipped.len()
            );
        }

        Mp2Correction { energy, skipped }
    }
}
