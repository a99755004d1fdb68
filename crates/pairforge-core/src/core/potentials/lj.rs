use super::{CoeffRecord, PairParams, PairPotential};

/// Folds (epsilon, sigma, alpha) into the (c12, c6) prefactors of
/// V(r) = c12/r¹² − c6/r⁶ with c12 = 4εσ¹² and c6 = α·4εσ⁶.
fn lj_prefactors(coeff: &CoeffRecord) -> (f64, f64) {
    let epsilon = coeff.get("epsilon");
    let sigma = coeff.get("sigma");
    let alpha = coeff.get("alpha");

    let c12 = 4.0 * epsilon * sigma.powi(12);
    let c6 = alpha * 4.0 * epsilon * sigma.powi(6);
    (c12, c6)
}

/// The Lennard-Jones 12-6 pair potential.
#[derive(Debug, Clone, Copy, Default)]
pub struct LennardJones;

impl PairPotential for LennardJones {
    fn name(&self) -> &'static str {
        "lj"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "sigma", "alpha"]
    }

    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        &[("alpha", 1.0)]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        let (c12, c6) = lj_prefactors(coeff);
        PairParams::scalar2(c12, c6)
    }
}

/// The diameter-shifted Lennard-Jones potential, where the interaction
/// distance is shifted per pair by (dᵢ + dⱼ)/2 − 1.
///
/// Because the effective cutoff grows with particle size, the neighbor
/// structure needs the maximum particle diameter the simulation will reach,
/// and the xplor smoothing derivation does not apply.
#[derive(Debug, Clone, Copy)]
pub struct ShiftedLennardJones {
    max_diameter: f64,
}

impl ShiftedLennardJones {
    pub fn new(max_diameter: f64) -> Self {
        Self { max_diameter }
    }
}

impl PairPotential for ShiftedLennardJones {
    fn name(&self) -> &'static str {
        "slj"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "sigma", "alpha"]
    }

    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        &[("alpha", 1.0)]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        let (c12, c6) = lj_prefactors(coeff);
        PairParams::scalar2(c12, c6)
    }

    fn supports_xplor(&self) -> bool {
        false
    }

    fn max_diameter(&self) -> Option<f64> {
        Some(self.max_diameter)
    }
}

/// Lennard-Jones with the force shifted to zero at the cutoff by a linear
/// term; shares the (c12, c6) transform with the plain law.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceShiftedLennardJones;

impl PairPotential for ForceShiftedLennardJones {
    fn name(&self) -> &'static str {
        "force_shifted_lj"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "sigma", "alpha"]
    }

    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        &[("alpha", 1.0)]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        let (c12, c6) = lj_prefactors(coeff);
        PairParams::scalar2(c12, c6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_coefficients_produce_the_canonical_prefactors() {
        let record = CoeffRecord::from([("epsilon", 1.0), ("sigma", 1.0), ("alpha", 1.0)]);
        let params = LennardJones.process_coeff(&record);
        assert_eq!(params.values(), &[4.0, 4.0]);
    }

    #[test]
    fn alpha_scales_only_the_attractive_prefactor() {
        let record = CoeffRecord::from([("epsilon", 1.0), ("sigma", 1.0), ("alpha", 0.5)]);
        let params = LennardJones.process_coeff(&record);
        assert_eq!(params.values(), &[4.0, 2.0]);
    }

    #[test]
    fn sigma_enters_at_the_twelfth_and_sixth_powers() {
        let record = CoeffRecord::from([("epsilon", 2.0), ("sigma", 2.0), ("alpha", 1.0)]);
        let params = LennardJones.process_coeff(&record);
        assert_eq!(params.values(), &[8.0 * 4096.0, 8.0 * 64.0]);
    }

    #[test]
    fn diameter_shifted_variant_forbids_xplor_and_reports_its_diameter() {
        let slj = ShiftedLennardJones::new(2.0);
        assert!(!slj.supports_xplor());
        assert_eq!(slj.max_diameter(), Some(2.0));
    }

    #[test]
    fn force_shifted_variant_shares_the_lj_transform() {
        let record = CoeffRecord::from([("epsilon", 1.5), ("sigma", 1.0), ("alpha", 1.0)]);
        let lj = LennardJones.process_coeff(&record);
        let fslj = ForceShiftedLennardJones.process_coeff(&record);
        assert_eq!(lj, fslj);
    }
}
