use super::{CoeffRecord, PairParams, PairPotential};

/// Screened electrostatic (Yukawa) interaction,
/// V(r) = ε·exp(−κr)/r.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yukawa;

impl PairPotential for Yukawa {
    fn name(&self) -> &'static str {
        "yukawa"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "kappa"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        PairParams::scalar2(coeff.get("epsilon"), coeff.get("kappa"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_epsilon_and_kappa_through_unchanged() {
        let record = CoeffRecord::from([("epsilon", 1.0), ("kappa", 2.5)]);
        assert_eq!(Yukawa.process_coeff(&record).values(), &[1.0, 2.5]);
    }
}
