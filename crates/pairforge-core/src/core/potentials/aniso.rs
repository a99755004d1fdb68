use super::{CoeffRecord, PairParams, PairPotential};

/// Gay-Berne interaction between uniaxial ellipsoids.
///
/// The perpendicular and parallel semi-axis lengths are folded into the
/// parameter block; the orientation-dependent geometry is evaluated by the
/// kernel. Cutoff shaping is restricted to none/shift because the xplor
/// smoothing derivation does not extend to orientation-dependent cutoff
/// geometry, and there is no onset radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct GayBerne;

impl PairPotential for GayBerne {
    fn name(&self) -> &'static str {
        "gb"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "lperp", "lpar"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        PairParams::scalar3(coeff.get("epsilon"), coeff.get("lperp"), coeff.get("lpar"))
    }

    fn supports_xplor(&self) -> bool {
        false
    }

    fn uses_ron(&self) -> bool {
        false
    }
}

/// Screened dipole-dipole (plus dipole-charge) interactions. Shares the
/// anisotropic cutoff restrictions with [`GayBerne`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Dipole;

impl PairPotential for Dipole {
    fn name(&self) -> &'static str {
        "dipole"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["mu", "A", "kappa"]
    }

    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        &[("A", 1.0)]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        PairParams::scalar3(coeff.get("mu"), coeff.get("A"), coeff.get("kappa"))
    }

    fn supports_xplor(&self) -> bool {
        false
    }

    fn uses_ron(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gay_berne_folds_shape_parameters_into_the_block() {
        let record = CoeffRecord::from([("epsilon", 1.0), ("lperp", 0.45), ("lpar", 0.5)]);
        assert_eq!(GayBerne.process_coeff(&record).values(), &[1.0, 0.45, 0.5]);
    }

    #[test]
    fn anisotropic_variants_restrict_cutoff_shaping() {
        assert!(!GayBerne.supports_xplor());
        assert!(!GayBerne.uses_ron());
        assert!(!Dipole.supports_xplor());
        assert!(!Dipole.uses_ron());
    }

    #[test]
    fn dipole_packs_moment_scale_and_screening() {
        let record = CoeffRecord::from([("mu", 2.0), ("A", 1.0), ("kappa", 0.5)]);
        assert_eq!(Dipole.process_coeff(&record).values(), &[2.0, 1.0, 0.5]);
    }
}
