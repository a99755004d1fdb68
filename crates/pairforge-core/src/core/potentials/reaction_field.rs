use super::{CoeffRecord, PairParams, PairPotential};

/// Onsager reaction-field electrostatics.
///
/// `eps_rf` is the reaction-field dielectric constant; by convention
/// `eps_rf = 0` means the infinite-dielectric limit. That convention is
/// interpreted by the kernel, not computed here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionField;

impl PairPotential for ReactionField {
    fn name(&self) -> &'static str {
        "reaction_field"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "eps_rf"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        PairParams::scalar2(coeff.get("epsilon"), coeff.get("eps_rf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_both_dielectric_parameters_through_unchanged() {
        let record = CoeffRecord::from([("epsilon", 1.0), ("eps_rf", 80.0)]);
        assert_eq!(ReactionField.process_coeff(&record).values(), &[1.0, 80.0]);
    }

    #[test]
    fn the_infinite_dielectric_sentinel_is_preserved_verbatim() {
        let record = CoeffRecord::from([("epsilon", 1.0), ("eps_rf", 0.0)]);
        assert_eq!(ReactionField.process_coeff(&record).values(), &[1.0, 0.0]);
    }
}
