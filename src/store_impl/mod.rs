//! Integral storage and symmetry-aware lookup
//!
//! The store owns the dense one-electron core Hamiltonian and the sparse
//! two-electron integral list. Two-electron integrals obey an 8-fold index
//! permutation symmetry; only one representative per class is persisted, and
//! the [`symmetry`] submodule provides the canonical-key index that resolves
//! an arbitrary 4-index query to the stored representative in O(1).

pub mod store;
pub mod symmetry;

pub use store::{IntegralStore, TwoElectronEntry};
pub use symmetry::{canonical_key, SymmetryIndex};
