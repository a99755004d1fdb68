use crate::core::table::{PairTable, TableFormatError, parse_rows};
use crate::engine::coeff::TypePair;
use crate::engine::error::{PairForceError, VerificationError, VerifyProblem};
use crate::engine::kernel::ComputeKernel;
use crate::engine::neighbor::{NeighborTable, RcutMatrix, SubscriptionId};
use crate::engine::types::TypeRegistry;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use tracing::error;

/// A tabulated pair potential: a degenerate potential whose per-pair
/// parameters are sample rows rather than closed-form constants.
///
/// All pair tables share one width, fixed at construction. The per-pair
/// cutoff reported to the neighbor structure is simply each table's
/// `r_max`.
#[derive(Debug)]
pub struct TableForce {
    width: usize,
    tables: HashMap<TypePair, PairTable>,
    nlist: Rc<RefCell<NeighborTable>>,
    subscription: SubscriptionId,
}

impl TableForce {
    pub fn new(width: usize, nlist: Rc<RefCell<NeighborTable>>) -> Result<Self, TableFormatError> {
        if width < 2 {
            return Err(TableFormatError::WidthTooSmall(width));
        }
        let subscription = nlist.borrow_mut().subscribe();
        Ok(Self {
            width,
            tables: HashMap::new(),
            nlist,
            subscription,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Samples `potential(r) -> (V, F)` over [r_min, r_max] for one pair.
    pub fn set_from_function<F>(
        &mut self,
        a: &str,
        b: &str,
        r_min: f64,
        r_max: f64,
        potential: F,
    ) -> Result<(), TableFormatError>
    where
        F: Fn(f64) -> (f64, f64),
    {
        let table = PairTable::from_function(potential, r_min, r_max, self.width)?;
        self.tables.insert(TypePair::new(a, b), table);
        self.publish_cutoffs();
        Ok(())
    }

    /// Reads one pair's table from a whitespace-separated `r V F` file.
    /// The first row's r becomes r_min, the last row's r becomes r_max.
    pub fn set_from_file(&mut self, a: &str, b: &str, path: &Path) -> Result<(), TableFormatError> {
        let label = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| TableFormatError::Io {
            path: label.clone(),
            source,
        })?;
        let rows = parse_rows(&content, &label)?;
        let table = PairTable::from_rows(&rows, self.width, &label)?;
        self.tables.insert(TypePair::new(a, b), table);
        self.publish_cutoffs();
        Ok(())
    }

    pub fn table(&self, a: &str, b: &str) -> Option<&PairTable> {
        self.tables.get(&TypePair::new(a, b))
    }

    /// Nearest-sample retrieval for one pair; absent for an unset pair.
    pub fn lookup(&self, a: &str, b: &str, r: f64) -> Option<(f64, f64)> {
        Some(self.table(a, b)?.lookup(r))
    }

    /// Checks that every unordered registry pair has a table, surfacing one
    /// diagnostic per missing pair.
    pub fn verify(&self) -> bool {
        self.missing_pairs().is_empty()
    }

    /// Verifies completeness and pushes every pair's samples to the
    /// kernel.
    pub fn update_coeffs(&self, kernel: &mut dyn ComputeKernel) -> Result<(), PairForceError> {
        let problems = self.missing_pairs();
        if !problems.is_empty() {
            return Err(VerificationError { problems }.into());
        }

        let table = self.nlist.borrow();
        let types = table.types();
        for i in 0..types.count() {
            for j in i..types.count() {
                let pair = TypePair::new(types.name_of(i), types.name_of(j));
                let pair_table = &self.tables[&pair];
                kernel.set_table(
                    i,
                    j,
                    pair_table.energies(),
                    pair_table.forces(),
                    pair_table.r_min(),
                    pair_table.r_max(),
                );
            }
        }
        Ok(())
    }

    /// Per-pair cutoffs for the neighbor structure: each table's r_max,
    /// with unset pairs excluded.
    pub fn report_cutoffs(&self) -> RcutMatrix {
        let table = self.nlist.borrow();
        let types = table.types();
        let mut cutoffs = RcutMatrix::new();
        for i in 0..types.count() {
            for j in i..types.count() {
                let a = types.name_of(i);
                let b = types.name_of(j);
                let r = self
                    .tables
                    .get(&TypePair::new(a, b))
                    .map(|t| t.r_max())
                    .unwrap_or(-1.0);
                cutoffs.set_pair(a, b, r);
            }
        }
        cutoffs
    }

    pub fn max_rcut(&self) -> f64 {
        self.tables.values().map(PairTable::r_max).fold(0.0, f64::max)
    }

    fn missing_pairs(&self) -> Vec<VerifyProblem> {
        let table = self.nlist.borrow();
        let types = table.types();
        let mut problems = Vec::new();
        for i in 0..types.count() {
            for j in i..types.count() {
                let a = types.name_of(i);
                let b = types.name_of(j);
                if !self.tables.contains_key(&TypePair::new(a, b)) {
                    error!("type pair ('{a}', '{b}') has no table set");
                    problems.push(VerifyProblem::MissingPair {
                        a: a.to_string(),
                        b: b.to_string(),
                    });
                }
            }
        }
        problems
    }

    fn publish_cutoffs(&self) {
        let cutoffs = self.report_cutoffs();
        self.nlist
            .borrow_mut()
            .publish(self.subscription, cutoffs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cutoff::ShiftMode;
    use crate::core::potentials::PairParams;
    use crate::engine::types::ParticleTypes;
    use std::io::Write;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingKernel {
        tables: HashMap<(usize, usize), (Vec<f64>, Vec<f64>, f64, f64)>,
    }

    impl ComputeKernel for RecordingKernel {
        fn set_params(&mut self, _i: usize, _j: usize, _params: PairParams) {}

        fn set_rcut(&mut self, _i: usize, _j: usize, _r_cut: f64) {}

        fn set_ron(&mut self, _i: usize, _j: usize, _r_on: f64) {}

        fn set_shift_mode(&mut self, _mode: ShiftMode) {}

        fn set_table(
            &mut self,
            i: usize,
            j: usize,
            energies: &[f64],
            forces: &[f64],
            r_min: f64,
            r_max: f64,
        ) {
            self.tables
                .insert((i, j), (energies.to_vec(), forces.to_vec(), r_min, r_max));
        }
    }

    fn shared_nlist(names: &[&str]) -> Rc<RefCell<NeighborTable>> {
        Rc::new(RefCell::new(NeighborTable::new(ParticleTypes::new(
            names.iter().copied(),
        ))))
    }

    fn example_file_content() -> &'static str {
        "# r V F\n1.0 2.0 -3.0\n1.1 3.0 -4.0\n1.2 2.0 -3.0\n1.3 1.0 -2.0\n1.4 0.0 -1.0\n1.5 -1.0 0.0\n"
    }

    #[test]
    fn a_width_below_two_is_rejected_at_construction() {
        let result = TableForce::new(1, shared_nlist(&["A"]));
        assert!(matches!(result, Err(TableFormatError::WidthTooSmall(1))));
    }

    #[test]
    fn a_function_sourced_table_round_trips_at_sample_radii() {
        let mut force = TableForce::new(6, shared_nlist(&["A"])).unwrap();
        force
            .set_from_function("A", "A", 1.0, 2.0, |_| (5.0, 0.0))
            .unwrap();
        assert_eq!(force.lookup("A", "A", 1.4), Some((5.0, 0.0)));
        assert_eq!(force.lookup("A", "B", 1.4), None);
    }

    #[test]
    fn a_valid_file_sets_the_radial_range_from_its_first_and_last_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table_AA.dat");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", example_file_content()).unwrap();

        let mut force = TableForce::new(6, shared_nlist(&["A"])).unwrap();
        force.set_from_file("A", "A", &path).unwrap();

        let table = force.table("A", "A").unwrap();
        assert_eq!(table.r_min(), 1.0);
        assert_eq!(table.r_max(), 1.5);
        assert_eq!(force.lookup("A", "A", 1.5), Some((-1.0, 0.0)));
    }

    #[test]
    fn a_file_with_too_few_rows_for_the_configured_width_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.dat");
        std::fs::write(&path, "1.0 2.0 -3.0\n1.1 3.0 -4.0\n1.2 2.0 -3.0\n1.3 1.0 -2.0\n1.4 0.0 -1.0\n").unwrap();

        let mut force = TableForce::new(6, shared_nlist(&["A"])).unwrap();
        let result = force.set_from_file("A", "A", &path);
        assert!(matches!(
            result,
            Err(TableFormatError::RowCount {
                expected: 6,
                found: 5,
                ..
            })
        ));
    }

    #[test]
    fn a_missing_file_reports_an_io_error_with_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.dat");
        let mut force = TableForce::new(6, shared_nlist(&["A"])).unwrap();
        let result = force.set_from_file("A", "A", &path);
        assert!(matches!(result, Err(TableFormatError::Io { .. })));
    }

    #[test]
    fn update_coeffs_requires_a_table_for_every_registry_pair() {
        let mut force = TableForce::new(2, shared_nlist(&["A", "B"])).unwrap();
        force
            .set_from_function("A", "A", 1.0, 2.0, |_| (0.0, 0.0))
            .unwrap();
        assert!(!force.verify());

        let mut kernel = RecordingKernel::default();
        let error = force.update_coeffs(&mut kernel).unwrap_err();
        let PairForceError::Verification { source } = error else {
            panic!("expected a verification error");
        };
        assert_eq!(source.problems.len(), 2);
    }

    #[test]
    fn update_coeffs_pushes_every_table_to_the_kernel() {
        let mut force = TableForce::new(3, shared_nlist(&["A"])).unwrap();
        force
            .set_from_function("A", "A", 1.0, 2.0, |r| (r, -r))
            .unwrap();

        let mut kernel = RecordingKernel::default();
        force.update_coeffs(&mut kernel).unwrap();
        let (energies, forces, r_min, r_max) = &kernel.tables[&(0, 0)];
        assert_eq!(energies, &[1.0, 1.5, 2.0]);
        assert_eq!(forces, &[-1.0, -1.5, -2.0]);
        assert_eq!((*r_min, *r_max), (1.0, 2.0));
    }

    #[test]
    fn table_cutoffs_are_each_pairs_r_max() {
        let nlist = shared_nlist(&["A", "B"]);
        let mut force = TableForce::new(2, Rc::clone(&nlist)).unwrap();
        force
            .set_from_function("A", "A", 1.0, 2.5, |_| (0.0, 0.0))
            .unwrap();

        let cutoffs = force.report_cutoffs();
        assert_eq!(cutoffs.get("A", "A"), Some(2.5));
        assert_eq!(cutoffs.get("A", "B"), Some(-1.0));
        assert_eq!(force.max_rcut(), 2.5);
        assert_eq!(nlist.borrow().pair_cutoff("A", "A"), 2.5);
    }
}
