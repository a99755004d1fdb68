use super::{CoeffRecord, PairParams, PairPotential};

/// The Mie (generalized Lennard-Jones) potential,
/// V(r) = C·ε·[(σ/r)ⁿ − (σ/r)ᵐ] with
/// C = (n/(n−m))·(n/m)^(m/(n−m)).
///
/// Reduces to Lennard-Jones at (n, m) = (12, 6). An exponent pair with
/// n = m divides by zero and yields non-finite prefactors; that is left to
/// propagate rather than being trapped here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mie;

impl PairPotential for Mie {
    fn name(&self) -> &'static str {
        "mie"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "sigma", "n", "m"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        let epsilon = coeff.get("epsilon");
        let sigma = coeff.get("sigma");
        let n = coeff.get("n");
        let m = coeff.get("m");

        let prefactor = (n / (n - m)) * (n / m).powf(m / (n - m));
        let m1 = epsilon * sigma.powf(n) * prefactor;
        let m2 = epsilon * sigma.powf(m) * prefactor;
        PairParams::scalar4(m1, m2, n, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::potentials::LennardJones;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn reduces_to_lennard_jones_at_twelve_six() {
        let mie_record = CoeffRecord::from([
            ("epsilon", 1.5),
            ("sigma", 2.0),
            ("n", 12.0),
            ("m", 6.0),
        ]);
        let lj_record = CoeffRecord::from([("epsilon", 1.5), ("sigma", 2.0), ("alpha", 1.0)]);

        let mie = Mie.process_coeff(&mie_record);
        let lj = LennardJones.process_coeff(&lj_record);

        assert!((mie.values()[0] - lj.values()[0]).abs() < TOLERANCE);
        assert!((mie.values()[1] - lj.values()[1]).abs() < TOLERANCE);
        assert_eq!(&mie.values()[2..], &[12.0, 6.0]);
    }

    #[test]
    fn equal_exponents_propagate_as_non_finite_prefactors() {
        let record = CoeffRecord::from([
            ("epsilon", 1.0),
            ("sigma", 1.0),
            ("n", 6.0),
            ("m", 6.0),
        ]);
        let params = Mie.process_coeff(&record);
        assert!(!params.values()[0].is_finite());
    }
}
