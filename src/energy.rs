//! Combined energy entry point: Hartree-Fock reference plus MP2 correction

extern crate nalgebra as na;

use na::DVector;
use tracing::info;

use crate::hf_impl::HartreeFock;
use crate::mp2_impl::{Mp2, SkippedTerm};
use crate::store_impl::IntegralStore;

/// Final result of one calculation, including the diagnostic record of
/// MP2 terms skipped for exactly vanishing denominators.
#[derive(Debug, Clone)]
pub struct EnergyReport {
    pub hartree_fock: f64,
    pub mp2_correction: f64,
    pub total: f64,
    pub skipped_terms: Vec<SkippedTerm>,
}

impl EnergyReport {
    /// Report for a run where the MP2 stage was not requested.
    pub fn hartree_fock_only(hartree_fock: f64) -> Self {
        EnergyReport {
            hartree_fock,
            mp2_correction: 0.0,
            total: hartree_fock,
            skipped_terms: Vec::new(),
        }
    }

    /// Log the component breakdown at info level.
    pub fn log_summary(&self) {
        info!("===========================================");
        info!("           Energy Summary");
        info!("===========================================");
        info!("Hartree-Fock energy:  {:.12} Eh", self.hartree_fock);
        info!("MP2 correction:       {:.12} Eh", self.mp2_correction);
        info!("Total energy:         {:.12} Eh", self.total);
        if !self.skipped_terms.is_empty() {
            info!(
                "Zero-denominator terms skipped: {}",
                self.skipped_terms.len()
            );
        }
        info!("===========================================");
    }
}

/// Run both evaluators over an immutable store.
///
/// Pure batch reduction: all fatal validation happened when the store was
/// loaded, so this cannot fail -- degenerate MP2 denominators are skipped
/// and reported in the returned record.
pub fn compute_energy(
    store: &IntegralStore,
    orbital_energies: &DVector<f64>,
    n_occupied: usize,
) -> EnergyReport {
    info!("Hartree-Fock energy calculation starting...");
    let hartree_fock = HartreeFock::new(store, n_occupied).energy();
    info!("Total Hartree-Fock energy: {:.10} Eh", hartree_fock);

    info!("MP2 correction calculation starting...");
    let correction = Mp2::new(store, orbital_energies, n_occupied).correction();
    info!("MP2 correction: {:.10} Eh", correction.energy);

    EnergyReport {
        hartree_fock,
        mp2_correction: correction.energy,
        total: hartree_fock + correction.energy,
        skipped_terms: correction.skipped,
    }
}
