//! Tests for the Hartree-Fock evaluator

#[cfg(test)]
mod tests {
    use crate::hf_impl::HartreeFock;
    use crate::store_impl::{IntegralStore, TwoElectronEntry};

    fn store(
        n_orbitals: usize,
        nuclear_repulsion: f64,
        core: Vec<f64>,
        entries: Vec<TwoElectronEntry>,
    ) -> IntegralStore {
        IntegralStore::load(n_orbitals, nuclear_repulsion, core, entries)
            .expect("store should load")
    }

    #[test]
    fn test_two_orbital_reference_energy() {
        // Two orbitals, one doubly occupied:
        //   one-electron  2 * (-1.0)             = -2.0
        //   direct from (00|00), single count    = +1.6
        //   exchange from (00|00), single count  = -0.8
        // entries touching the virtual orbital contribute nothing.
        let st = store(
            2,
            0.0,
            vec![-1.0, 0.0, 0.0, -0.5],
            vec![
                TwoElectronEntry::new(0, 0, 0, 0, 0.8),
                TwoElectronEntry::new(1, 1, 0, 0, 0.3),
                TwoElectronEntry::new(1, 0, 1, 0, 0.1),
            ],
        );
        let hf = HartreeFock::new(&st, 1);

        assert!((hf.one_electron_energy() - (-2.0)).abs() < 1e-12);
        assert!((hf.two_electron_energy() - 0.8).abs() < 1e-12);
        assert!((hf.energy() - (-1.2)).abs() < 1e-12);
    }

    #[test]
    fn test_fully_degenerate_entry_counts_once_per_term() {
        // (00|00) satisfies the direct and the exchange condition at the
        // same time; each fires exactly once: +2v - v = +v.
        let st = store(1, 0.0, vec![0.0], vec![TwoElectronEntry::new(0, 0, 0, 0, 0.8)]);
        let hf = HartreeFock::new(&st, 1);
        assert!((hf.two_electron_energy() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_non_degenerate_direct_factor_is_four() {
        // (01|01) with i != j stands for two distinct permutations, each
        // contributing 2v.
        let st = store(
            2,
            0.0,
            vec![0.0; 4],
            vec![TwoElectronEntry::new(0, 1, 0, 1, 0.5)],
        );
        let hf = HartreeFock::new(&st, 2);
        assert!((hf.two_electron_energy() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_degenerate_exchange_factor_is_two() {
        // (00|11) is a pure exchange shape: -2v.
        let st = store(
            2,
            0.0,
            vec![0.0; 4],
            vec![TwoElectronEntry::new(0, 0, 1, 1, 0.5)],
        );
        let hf = HartreeFock::new(&st, 2);
        assert!((hf.two_electron_energy() - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_entries_touching_virtual_orbitals_are_excluded() {
        let st = store(
            3,
            0.0,
            vec![0.0; 9],
            vec![
                TwoElectronEntry::new(2, 0, 2, 0, 0.4),
                TwoElectronEntry::new(2, 2, 2, 2, 0.9),
            ],
        );
        let hf = HartreeFock::new(&st, 2);
        assert_eq!(hf.two_electron_energy(), 0.0);
    }

    #[test]
    fn test_energy_is_invariant_to_entry_order() {
        let forward = vec![
            TwoElectronEntry::new(0, 0, 0, 0, 0.8),
            TwoElectronEntry::new(0, 1, 0, 1, 0.5),
            TwoElectronEntry::new(1, 1, 0, 0, 0.3),
            TwoElectronEntry::new(1, 1, 1, 1, 0.7),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let core = vec![-1.0, 0.0, 0.0, -0.5];
        let st_forward = store(2, 0.3, core.clone(), forward);
        let st_reversed = store(2, 0.3, core, reversed);

        let e_forward = HartreeFock::new(&st_forward, 2).energy();
        let e_reversed = HartreeFock::new(&st_reversed, 2).energy();
        assert!((e_forward - e_reversed).abs() < 1e-12);
    }

    #[test]
    fn test_nuclear_repulsion_enters_total_only() {
        let st = store(1, 0.25, vec![-1.0], Vec::new());
        let hf = HartreeFock::new(&st, 1);
        assert!((hf.energy() - (0.25 - 2.0)).abs() < 1e-12);
        assert!((hf.one_electron_energy() - (-2.0)).abs() < 1e-12);
        assert_eq!(hf.two_electron_energy(), 0.0);
    }
}
