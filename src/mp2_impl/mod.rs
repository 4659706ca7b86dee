//! MP2 (Moller-Plesset perturbation theory, second order) correction
//!
//! The correction is accumulated directly from the sparse stored entry list:
//! each entry with exactly two occupied and two virtual indices contributes
//!
//! E += f * (ij|ab) * (2*(ij|ab) - (ji|ab)) / (e_i + e_j - e_a - e_b)
//!
//! where the exchange partner is retrieved through the symmetry-aware
//! canonical-key lookup and f single-counts fully degenerate orbital pairs.
//! Entries are classified, never enumerated over orbital quadruples -- the
//! sparsity of the store is the outer loop.

mod mp2;

pub use mp2::{Mp2, Mp2Correction, SkippedTerm};
