//! Command-line argument parsing

use clap::Parser;

/// Hartree-Fock + MP2 energy calculation from a precomputed integral dataset
#[derive(Parser, Debug)]
#[command(name = "mp2")]
#[command(about = "Hartree-Fock and MP2 energies from precomputed MO integrals", long_about = None)]
pub struct Args {
    /// Path to the YAML dataset file
    pub dataset: String,

    /// Write the final energy report to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Redirect the log to this file (default: stdout)
    #[arg(long)]
    pub log_file: Option<String>,

    /// Override the number of occupied orbitals from the dataset
    #[arg(long)]
    pub n_occupied: Option<usize>,

    /// Compute the Hartree-Fock energy only
    #[arg(long)]
    pub skip_mp2: bool,
}
