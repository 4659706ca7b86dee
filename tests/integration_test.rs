//! End-to-end tests driving the example datasets through the full
//! load -> store -> evaluate pipeline.

use std::path::PathBuf;

use mp2::energy::compute_energy;
use mp2::error::EnergyError;
use mp2::io::load_dataset;

/// Helper function to get the path to example files
fn example_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join(filename)
}

fn load(filename: &str) -> mp2::io::Dataset {
    let path = example_path(filename);
    load_dataset(path.to_str().expect("utf-8 path")).expect("example dataset should load")
}

#[test]
fn test_toy_dataset_end_to_end() {
    // One-electron: 2 * (-1.0) = -2.0; direct +1.6 and exchange -0.8 from
    // (00|00); MP2 from (11|00): 0.3 * (0.6 - 0.3) / -2.0 = -0.045.
    let (store, orbital_energies, n_occupied) = load("toy.yaml").build().expect("valid dataset");
    let report = compute_energy(&store, &orbital_energies, n_occupied);

    assert!((report.hartree_fock - (-1.2)).abs() < 1e-12);
    assert!((report.mp2_correction - (-0.045)).abs() < 1e-12);
    assert!((report.total - (-1.245)).abs() < 1e-12);
    assert!(report.skipped_terms.is_empty());
}

#[test]
fn test_h2_dataset_end_to_end() {
    // HF: 0.713727 - 2 * 1.252745 + 0.674594 = -1.117169 Eh.
    // MP2: 0.181288^2 / (2 * (-0.578551) - 2 * 0.671184) = -0.0131489 Eh.
    let (store, orbital_energies, n_occupied) = load("h2.yaml").build().expect("valid dataset");
    let report = compute_energy(&store, &orbital_energies, n_occupied);

    assert!((report.hartree_fock - (-1.117169)).abs() < 1e-9);
    assert!((report.mp2_correction - (-0.0131489)).abs() < 1e-6);
    assert!((report.total - (report.hartree_fock + report.mp2_correction)).abs() < 1e-15);
    assert!(report.skipped_terms.is_empty());
}

#[test]
fn test_missing_dataset_file_is_a_source_error() {
    let result = load_dataset("example/does_not_exist.yaml");
    assert!(matches!(result, Err(EnergyError::DataSource { .. })));
}

#[test]
fn test_declared_entry_count_is_validated() {
    let mut dataset = load("toy.yaml");
    dataset.n_two_electron = 7;
    let result = dataset.build();
    assert!(matches!(
        result,
        Err(EnergyError::DataShape {
            field: "two_electron",
            expected: 7,
            actual: 3,
        })
    ));
}

#[test]
fn test_orbital_energy_length_is_validated() {
    let mut dataset = load("toy.yaml");
    dataset.orbital_energies.push(0.9);
    let result = dataset.build();
    assert!(matches!(
        result,
        Err(EnergyError::DataShape {
            field: "orbital_energies",
            ..
        })
    ));
}

#[test]
fn test_occupied_count_cannot_exceed_orbitals() {
    let mut dataset = load("toy.yaml");
    dataset.n_occupied = 3;
    let result = dataset.build();
    assert!(matches!(
        result,
        Err(EnergyError::DataShape {
            field: "n_occupied",
            ..
        })
    ));
}
