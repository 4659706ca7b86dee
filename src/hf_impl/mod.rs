//! Hartree-Fock energy evaluation
//!
//! Sums the one-electron diagonal contributions and classifies every stored
//! two-electron entry into direct and exchange contributions, with the
//! degeneracy factors that single-count entries whose permutation class has
//! collapsed.

mod hf;
#[cfg(test)]
mod tests;

pub use hf::HartreeFock;
