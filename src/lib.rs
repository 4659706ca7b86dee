//! Molecular electronic energies from precomputed MO integrals
//!
//! Computes the Hartree-Fock reference energy and the second-order
//! Moller-Plesset correction for a molecule whose one- and two-electron
//! integrals are already available in the molecular-orbital basis. The
//! two-electron integrals arrive as a sparse list with 8-fold permutation
//! symmetry; [`store_impl`] owns the storage and the canonical-key lookup
//! that both evaluators share.

pub mod config;
pub mod energy;
pub mod error;
pub mod hf_impl;
pub mod io;
pub mod mp2_impl;
pub mod store_impl;

pub use energy::{compute_energy, EnergyReport};
pub use error::{EnergyError, Result};
pub use hf_impl::HartreeFock;
pub use mp2_impl::{Mp2, Mp2Correction, SkippedTerm};
pub use store_impl::{IntegralStore, TwoElectronEntry};
