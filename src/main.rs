//! Energy Calculation Command-Line Interface
//!
//! Entry point for computing Hartree-Fock + MP2 energies from a YAML
//! integral dataset.

use clap::Parser;
use color_eyre::eyre::{ensure, Result};
use std::fs::File;
use tracing::info;

use mp2::config::Args;
use mp2::energy::{compute_energy, EnergyReport};
use mp2::hf_impl::HartreeFock;
use mp2::io::{load_dataset, print_energy_report, setup_output};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_output(args.log_file.as_ref());

    info!("Reading dataset from: {}", args.dataset);
    let dataset = load_dataset(&args.dataset)?;
    let (store, orbital_energies, n_occupied_from_data) = dataset.build()?;

    let n_occupied = args.n_occupied.unwrap_or(n_occupied_from_data);
    ensure!(
        n_occupied <= store.n_orbitals(),
        "--n-occupied {} exceeds the {} orbitals in the dataset",
        n_occupied,
        store.n_orbitals()
    );

    info!(
        "Loaded {} orbitals ({} occupied), {} two-electron integrals",
        store.n_orbitals(),
        n_occupied,
        store.two_electron_entries().len()
    );

    let report = if args.skip_mp2 {
        info!("MP2 stage disabled, computing Hartree-Fock energy only");
        EnergyReport::hartree_fock_only(HartreeFock::new(&store, n_occupied).energy())
    } else {
        compute_energy(&store, &orbital_energies, n_occupied)
    };

    report.log_summary();

    if let Some(ref path) = args.output {
        let mut file = File::create(path)?;
        print_energy_report(&mut file, &report)?;
        info!("Report written to: {}", path);
    }

    Ok(())
}
