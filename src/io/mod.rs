//! Input/Output operations
//!
//! This module handles dataset loading, logging setup and report printing.

mod dataset;
mod output;

pub use dataset::{load_dataset, Dataset, TwoElectronRecord};
pub use output::{print_energy_report, setup_output};
