use super::{CoeffRecord, PairParams, PairPotential};

/// Morse bond-like pair potential,
/// V(r) = D0·[exp(−2α(r−r0)) − 2·exp(−α(r−r0))].
#[derive(Debug, Clone, Copy, Default)]
pub struct Morse;

impl PairPotential for Morse {
    fn name(&self) -> &'static str {
        "morse"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["D0", "alpha", "r0"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        // The fourth slot is padding; the kernel's block is four-wide.
        PairParams::scalar4(coeff.get("D0"), coeff.get("alpha"), coeff.get("r0"), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_well_depth_width_and_minimum_with_zero_padding() {
        let record = CoeffRecord::from([("D0", 1.0), ("alpha", 3.0), ("r0", 1.5)]);
        assert_eq!(Morse.process_coeff(&record).values(), &[1.0, 3.0, 1.5, 0.0]);
    }
}
