use super::{CoeffRecord, PairParams, PairPotential};

/// The real-space Ewald summation term. Charges come from per-particle
/// state owned by the kernel; only the splitting parameter κ is a pair
/// coefficient.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ewald;

impl PairPotential for Ewald {
    fn name(&self) -> &'static str {
        "ewald"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["kappa"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        PairParams::scalar(coeff.get("kappa"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_parameter_block_is_the_bare_splitting_parameter() {
        let record = CoeffRecord::from([("kappa", 1.2)]);
        assert_eq!(Ewald.process_coeff(&record).values(), &[1.2]);
    }
}
