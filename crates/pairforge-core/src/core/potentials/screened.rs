use super::{CoeffRecord, PairParams, PairPotential};

const REQUIRED: &[&str] = &["Z_i", "Z_j", "elementary_charge", "a_0"];
const DEFAULTS: &[(&str, f64)] = &[("elementary_charge", 1.0), ("a_0", 1.0)];

fn charge_product(coeff: &CoeffRecord) -> f64 {
    let e = coeff.get("elementary_charge");
    coeff.get("Z_i") * coeff.get("Z_j") * e * e
}

/// Moliere screened-Coulomb potential for ion-solid interactions.
///
/// The screening length uses the Firsov convention
/// aF = 0.8853·a0/(√Zi + √Zj)^(2/3), degenerating to aF = 1 when both
/// atomic numbers are zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Moliere;

impl PairPotential for Moliere {
    fn name(&self) -> &'static str {
        "moliere"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        REQUIRED
    }

    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        DEFAULTS
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        let z_i = coeff.get("Z_i");
        let z_j = coeff.get("Z_j");
        let a_f = if z_i != 0.0 || z_j != 0.0 {
            0.8853 * coeff.get("a_0") / (z_i.sqrt() + z_j.sqrt()).powf(2.0 / 3.0)
        } else {
            1.0
        };
        PairParams::scalar2(charge_product(coeff), a_f)
    }
}

/// Ziegler-Biersack-Littmark screened-Coulomb potential.
///
/// Same charge product as [`Moliere`], but the universal screening length
/// aF = 0.88534·a0/(Zi^0.23 + Zj^0.23).
#[derive(Debug, Clone, Copy, Default)]
pub struct Zbl;

impl PairPotential for Zbl {
    fn name(&self) -> &'static str {
        "zbl"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        REQUIRED
    }

    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        DEFAULTS
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        let z_i = coeff.get("Z_i");
        let z_j = coeff.get("Z_j");
        let a_f = if z_i != 0.0 || z_j != 0.0 {
            0.88534 * coeff.get("a_0") / (z_i.powf(0.23) + z_j.powf(0.23))
        } else {
            1.0
        };
        PairParams::scalar2(charge_product(coeff), a_f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn record(z_i: f64, z_j: f64) -> CoeffRecord {
        CoeffRecord::from([
            ("Z_i", z_i),
            ("Z_j", z_j),
            ("elementary_charge", 1.0),
            ("a_0", 1.0),
        ])
    }

    #[test]
    fn moliere_uses_the_firsov_screening_length() {
        let params = Moliere.process_coeff(&record(4.0, 9.0));
        let expected = 0.8853 / 5.0_f64.powf(2.0 / 3.0);
        assert_eq!(params.values()[0], 36.0);
        assert!((params.values()[1] - expected).abs() < TOLERANCE);
    }

    #[test]
    fn zbl_uses_the_universal_screening_length() {
        let params = Zbl.process_coeff(&record(4.0, 9.0));
        let expected = 0.88534 / (4.0_f64.powf(0.23) + 9.0_f64.powf(0.23));
        assert_eq!(params.values()[0], 36.0);
        assert!((params.values()[1] - expected).abs() < TOLERANCE);
    }

    #[test]
    fn both_atomic_numbers_zero_degenerates_to_unit_screening_length() {
        for params in [
            Moliere.process_coeff(&record(0.0, 0.0)),
            Zbl.process_coeff(&record(0.0, 0.0)),
        ] {
            assert_eq!(params.values(), &[0.0, 1.0]);
        }
    }

    #[test]
    fn the_elementary_charge_enters_the_charge_product_squared() {
        let record = CoeffRecord::from([
            ("Z_i", 1.0),
            ("Z_j", 1.0),
            ("elementary_charge", 2.0),
            ("a_0", 1.0),
        ]);
        let params = Zbl.process_coeff(&record);
        assert_eq!(params.values()[0], 4.0);
    }
}
