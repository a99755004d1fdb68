use super::{CoeffRecord, PairParams, PairPotential};

/// Gaussian repulsion, V(r) = ε·exp(−r²/2σ²).
#[derive(Debug, Clone, Copy, Default)]
pub struct Gauss;

impl PairPotential for Gauss {
    fn name(&self) -> &'static str {
        "gauss"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "sigma"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        PairParams::scalar2(coeff.get("epsilon"), coeff.get("sigma"))
    }
}
