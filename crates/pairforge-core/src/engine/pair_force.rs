use crate::core::cutoff::ShiftMode;
use crate::core::potentials::{PairPotential, Traversal};
use crate::engine::coeff::{CoeffValue, PairCoeffMatrix};
use crate::engine::coeff_file::CoeffFile;
use crate::engine::error::{ConfigError, PairForceError, UnsupportedModeError};
use crate::engine::kernel::ComputeKernel;
use crate::engine::neighbor::{NeighborTable, RcutMatrix, SubscriptionId};
use crate::engine::types::TypeRegistry;
use std::cell::RefCell;
use std::rc::Rc;

/// One configured pair potential: the interaction law, its coefficient
/// matrix, the global fallback cutoff, and the active shift mode.
///
/// Construction subscribes the potential to the shared [`NeighborTable`]
/// and applies its structural requirements (traversal mode, diameter
/// shift). Every coefficient mutation republishes the resolved per-pair
/// cutoffs so the neighbor structure never sizes itself from stale radii.
#[derive(Debug)]
pub struct PairForce {
    potential: Box<dyn PairPotential>,
    coeffs: PairCoeffMatrix,
    global_r_cut: f64,
    shift_mode: ShiftMode,
    nlist: Rc<RefCell<NeighborTable>>,
    subscription: SubscriptionId,
}

impl PairForce {
    /// Creates a force with the given global fallback cutoff. A negative
    /// `r_cut` excludes every pair that does not set its own.
    pub fn new(
        potential: impl PairPotential + 'static,
        r_cut: f64,
        nlist: Rc<RefCell<NeighborTable>>,
    ) -> Self {
        let mut coeffs = PairCoeffMatrix::new();
        coeffs.set_default("r_cut", CoeffValue::Real(r_cut));
        if potential.uses_ron() {
            coeffs.set_default("r_on", CoeffValue::Real(r_cut));
        }
        for &(name, value) in potential.default_coeffs() {
            coeffs.set_default(name, CoeffValue::Real(value));
        }

        let subscription = {
            let mut table = nlist.borrow_mut();
            if potential.required_traversal() == Traversal::Full {
                table.set_traversal(Traversal::Full);
            }
            if let Some(max_diameter) = potential.max_diameter() {
                table.set_diameter_shift(max_diameter);
            }
            table.subscribe()
        };

        let force = Self {
            potential: Box::new(potential),
            coeffs,
            global_r_cut: r_cut,
            shift_mode: ShiftMode::default(),
            nlist,
            subscription,
        };
        force.publish_cutoffs();
        force
    }

    pub fn potential(&self) -> &dyn PairPotential {
        self.potential.as_ref()
    }

    pub fn coeffs(&self) -> &PairCoeffMatrix {
        &self.coeffs
    }

    pub fn shift_mode(&self) -> ShiftMode {
        self.shift_mode
    }

    /// Merges coefficients into every pair of the cross product and
    /// republishes cutoffs.
    pub fn set(
        &mut self,
        a: &[&str],
        b: &[&str],
        coeffs: &[(&str, CoeffValue)],
    ) -> Result<(), ConfigError> {
        self.coeffs.set(a, b, coeffs)?;
        self.publish_cutoffs();
        Ok(())
    }

    /// Registers a coefficient default for future resolution and
    /// republishes cutoffs (the default may be `r_cut` itself).
    pub fn set_default(&mut self, name: &str, value: CoeffValue) {
        self.coeffs.set_default(name, value);
        self.publish_cutoffs();
    }

    /// Applies a loaded coefficient file: the shift mode if one is given,
    /// then defaults and every pair block, with a single cutoff publication
    /// at the end.
    pub fn apply_coeff_file(&mut self, file: &CoeffFile) -> Result<(), PairForceError> {
        if let Some(mode) = file.shift_mode {
            self.set_shift_mode(mode)?;
        }
        file.apply_to(&mut self.coeffs)?;
        self.publish_cutoffs();
        Ok(())
    }

    /// Selects the cutoff handling mode, rejecting xplor for potentials
    /// whose cutoff criterion cannot support it.
    pub fn set_shift_mode(&mut self, mode: ShiftMode) -> Result<(), UnsupportedModeError> {
        if mode == ShiftMode::Xplor && !self.potential.supports_xplor() {
            return Err(UnsupportedModeError {
                potential: self.potential.name(),
                mode,
            });
        }
        self.shift_mode = mode;
        Ok(())
    }

    /// Parses and selects a mode by name (`none`/`no_shift`, `shift`,
    /// `xplor`).
    pub fn set_shift_mode_name(&mut self, name: &str) -> Result<(), PairForceError> {
        let mode: ShiftMode = name.parse()?;
        self.set_shift_mode(mode)?;
        Ok(())
    }

    /// Non-raising completeness check; problems are surfaced as
    /// diagnostics.
    pub fn verify(&self) -> bool {
        let required = self.required_coeffs();
        let table = self.nlist.borrow();
        self.coeffs.verify(&required, table.types())
    }

    /// Verifies the matrix, transforms every resolved pair record, and
    /// pushes parameter blocks and radii to the kernel. Radii reaching the
    /// kernel are clamped to zero; exclusion is the neighbor structure's
    /// business, not the kernel's.
    pub fn update_coeffs(&self, kernel: &mut dyn ComputeKernel) -> Result<(), PairForceError> {
        let required = self.required_coeffs();
        let resolved = {
            let table = self.nlist.borrow();
            self.coeffs.resolve(&required, table.types())?
        };

        kernel.set_shift_mode(self.shift_mode);
        for pair in resolved.iter() {
            let params = self.potential.process_coeff(&pair.record);
            kernel.set_params(pair.i, pair.j, params);
            kernel.set_rcut(pair.i, pair.j, pair.record.get("r_cut").max(0.0));
            if self.potential.uses_ron() {
                kernel.set_ron(pair.i, pair.j, pair.record.get("r_on").max(0.0));
            }
        }
        Ok(())
    }

    /// The effective per-pair cutoffs: the explicit value where one is set,
    /// the fallback otherwise; negative or disabled values map to -1.0
    /// (excluded).
    pub fn report_cutoffs(&self) -> RcutMatrix {
        let table = self.nlist.borrow();
        let types = table.types();
        let fallback = self
            .coeffs
            .default("r_cut")
            .map(CoeffValue::as_f64)
            .unwrap_or(self.global_r_cut);

        let mut cutoffs = RcutMatrix::new();
        for i in 0..types.count() {
            for j in i..types.count() {
                let a = types.name_of(i);
                let b = types.name_of(j);
                let r = self
                    .coeffs
                    .get(a, b, "r_cut")
                    .map(CoeffValue::as_f64)
                    .unwrap_or(fallback);
                cutoffs.set_pair(a, b, if r < 0.0 { -1.0 } else { r });
            }
        }
        cutoffs
    }

    /// The largest active cutoff over all pairs, ignoring exclusions.
    pub fn max_rcut(&self) -> f64 {
        self.report_cutoffs()
            .iter()
            .map(|(_, r)| r)
            .filter(|r| *r >= 0.0)
            .fold(0.0, f64::max)
    }

    fn required_coeffs(&self) -> Vec<&'static str> {
        let mut required = self.potential.required_coeffs().to_vec();
        required.push("r_cut");
        if self.potential.uses_ron() {
            required.push("r_on");
        }
        required
    }

    fn publish_cutoffs(&self) {
        let cutoffs = self.report_cutoffs();
        self.nlist
            .borrow_mut()
            .publish(self.subscription, cutoffs);
    }
}
