use super::{CoeffRecord, PairParams, PairPotential, Traversal};

/// Tersoff-like bond-order three-body potential.
///
/// The per-pair coefficients include a cutoff-smoothing thickness (distinct
/// from the xplor mechanism), bond-order exponents, and angular-term
/// constants. The transform pre-folds γⁿ, c², d², and λ3³ so the kernel's
/// inner loop never raises to a power it can avoid. Three-body terms need
/// every pair reported in both orderings, so the full neighbor traversal is
/// required.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tersoff;

impl PairPotential for Tersoff {
    fn name(&self) -> &'static str {
        "tersoff"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &[
            "cutoff_thickness",
            "C1",
            "C2",
            "lambda1",
            "lambda2",
            "dimer_r",
            "n",
            "gamma",
            "lambda3",
            "c",
            "d",
            "m",
            "alpha",
        ]
    }

    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        &[
            ("cutoff_thickness", 0.2),
            ("C1", 1.0),
            ("C2", 1.0),
            ("lambda1", 2.0),
            ("lambda2", 1.0),
            ("dimer_r", 1.5),
            ("n", 0.0),
            ("gamma", 0.0),
            ("lambda3", 0.0),
            ("c", 0.0),
            ("d", 1.0),
            ("m", 0.0),
            ("alpha", 3.0),
        ]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        let n = coeff.get("n");
        let gamma = coeff.get("gamma");
        let c = coeff.get("c");
        let d = coeff.get("d");
        let lambda3 = coeff.get("lambda3");

        PairParams::from_values(vec![
            coeff.get("cutoff_thickness"),
            coeff.get("C1"),
            coeff.get("C2"),
            coeff.get("lambda1"),
            coeff.get("lambda2"),
            coeff.get("dimer_r"),
            n,
            gamma.powf(n),
            lambda3 * lambda3 * lambda3,
            c * c,
            d * d,
            coeff.get("m"),
            coeff.get("alpha"),
        ])
    }

    fn required_traversal(&self) -> Traversal {
        Traversal::Full
    }
}
