//! Dataset loading: the concrete data provider
//!
//! The calculation is a pure function of fully-loaded inputs; everything the
//! evaluators need arrives in one YAML dataset file mirroring the fields a
//! wavefunction file carries: scalar metadata, the dense core Hamiltonian,
//! the sparse two-electron list and the orbital energies.

extern crate nalgebra as na;

use std::fs;

use na::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{EnergyError, Result};
use crate::store_impl::{IntegralStore, TwoElectronEntry};

/// One sparse two-electron record as it appears on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TwoElectronRecord {
    pub indices: [usize; 4],
    pub value: f64,
}

/// Raw provider output, deserialized but not yet validated.
#[derive(Debug, Deserialize, Serialize)]
pub struct Dataset {
    pub nuclear_repulsion: f64,
    pub n_orbitals: usize,
    pub n_occupied: usize,
    /// Declared count of stored two-electron records, checked against the
    /// list actually supplied.
    pub n_two_electron: usize,
    /// Row-major dense core Hamiltonian, length `n_orbitals^2`.
    pub core_hamiltonian: Vec<f64>,
    pub two_electron: Vec<TwoElectronRecord>,
    pub orbital_energies: Vec<f64>,
}

/// Read and parse a dataset file.
///
/// Any read or parse failure is a fatal [`EnergyError::DataSource`] naming
/// the file and the underlying cause; there is no retry.
pub fn load_dataset(path: &str) -> Result<Dataset> {
    let content = fs::read_to_string(path).map_err(|err| EnergyError::DataSource {
        path: path.to_string(),
        reason: err.to_string(),
    })?;
    serde_yml::from_str(&content).map_err(|err| EnergyError::DataSource {
        path: path.to_string(),
        reason: err.to_string(),
    })
}

impl Dataset {
    /// Validate all declared counts and hand back the immutable inputs the
    /// evaluators run over.
    pub fn build(self) -> Result<(IntegralStore, DVector<f64>, usize)> {
        if self.n_occupied > self.n_orbitals {
            return Err(EnergyError::DataShape {
                field: "n_occupied",
                expected: self.n_orbitals,
                actual: self.n_occupied,
            });
        }
        if self.two_electron.len() != self.n_two_electron {
            return Err(EnergyError::DataShape {
                field: "two_electron",
                expected: self.n_two_electron,
                actual: self.two_electron.len(),
            });
        }
        if self.orbital_energies.len() != self.n_orbitals {
            return Err(EnergyError::DataShape {
                field: "orbital_energies",
                expected: self.n_orbitals,
                actual: self.orbital_energies.len(),
            });
        }

        let entries = self
            .two_electron
            .iter()
            .map(|record| {
                TwoElectronEntry::new(
                    record.indices[0],
                    record.indices[1],
                    record.indices[2],
                    record.indices[3],
                    record.value,
                )
            })
            .collect();

        let store = IntegralStore::load(
            self.n_orbitals,
            self.nuclear_repulsion,
            self.core_hamiltonian,
            entries,
        )?;
        let orbital_energies = DVector::from_vec(self.orbital_energies);

        Ok((store, orbital_energies, self.n_occupied))
    }
}
