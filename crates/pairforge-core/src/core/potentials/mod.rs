//! # Pair Potential Family
//!
//! One type per interaction law, all behind the [`PairPotential`] trait.
//!
//! A potential's job in this crate is narrow: name the coefficients the user
//! must supply per type pair, provide defaults for the optional ones, and
//! transform a resolved coefficient record into the compact numeric
//! [`PairParams`] block the compute kernel folds into its closed-form
//! evaluator. The transforms are pure; evaluating energies and forces is the
//! kernel's business.
//!
//! Malformed numeric combinations (a Mie exponent pair with `n == m`, a zero
//! denominator) are deliberately not trapped: they propagate as non-finite
//! values into the kernel rather than being silently patched here.

use std::collections::HashMap;
use std::fmt::Debug;

mod aniso;
mod dpd;
mod ewald;
mod gauss;
mod lj;
mod mie;
mod morse;
mod reaction_field;
mod screened;
mod tersoff;
mod yukawa;

pub use self::aniso::{Dipole, GayBerne};
pub use self::dpd::{Dpd, DpdConservative, DpdLj};
pub use self::ewald::Ewald;
pub use self::gauss::Gauss;
pub use self::lj::{ForceShiftedLennardJones, LennardJones, ShiftedLennardJones};
pub use self::mie::Mie;
pub use self::morse::Morse;
pub use self::reaction_field::ReactionField;
pub use self::screened::{Moliere, Zbl};
pub use self::tersoff::Tersoff;

/// Whether a spatial query must report each candidate pair once or in both
/// orderings. Three-body potentials need the full traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    #[default]
    Half,
    Full,
}

/// The opaque numeric parameter block pushed to the compute kernel for one
/// type pair. Closed-form laws pack 1-4 folded constants; the Tersoff-like
/// potential packs its full pre-folded block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairParams {
    values: Vec<f64>,
}

impl PairParams {
    pub fn scalar(a: f64) -> Self {
        Self { values: vec![a] }
    }

    pub fn scalar2(a: f64, b: f64) -> Self {
        Self { values: vec![a, b] }
    }

    pub fn scalar3(a: f64, b: f64, c: f64) -> Self {
        Self {
            values: vec![a, b, c],
        }
    }

    pub fn scalar4(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            values: vec![a, b, c, d],
        }
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A fully resolved coefficient record for one type pair: every required
/// name present, every value numeric (the disabled sentinel reads as -1.0).
///
/// Produced by matrix resolution; [`PairPotential::process_coeff`] may assume
/// completeness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoeffRecord {
    values: HashMap<String, f64>,
}

impl CoeffRecord {
    pub fn new(values: HashMap<String, f64>) -> Self {
        Self { values }
    }

    /// Fetches a coefficient by name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is absent. A missing coefficient after a successful
    /// verification pass is a caller bug, not a recoverable condition.
    pub fn get(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(value) => *value,
            None => panic!("coefficient '{name}' missing from a verified record"),
        }
    }
}

#[cfg(test)]
impl<const N: usize> From<[(&str, f64); N]> for CoeffRecord {
    fn from(pairs: [(&str, f64); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}

/// Contract shared by every pair interaction law.
pub trait PairPotential: Debug {
    /// Short identifier used in configuration and diagnostics.
    fn name(&self) -> &'static str;

    /// The coefficient names that must resolve for every type pair.
    fn required_coeffs(&self) -> &'static [&'static str];

    /// Defaults for the optional subset of [`Self::required_coeffs`].
    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        &[]
    }

    /// Transforms one resolved coefficient record into the kernel's
    /// parameter block. Pure; must not be cached across matrix mutations.
    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams;

    /// Whether the xplor smoothing mode may be selected for this potential.
    fn supports_xplor(&self) -> bool {
        true
    }

    /// Whether this potential carries a per-pair onset radius. Anisotropic
    /// potentials restrict shaping to none/shift and have no `r_on`.
    fn uses_ron(&self) -> bool {
        true
    }

    /// The traversal mode the neighbor structure must run in.
    fn required_traversal(&self) -> Traversal {
        Traversal::Half
    }

    /// The externally tracked maximum particle diameter, for potentials
    /// whose effective cutoff grows with particle size.
    fn max_diameter(&self) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "coefficient 'sigma' missing")]
    fn reading_a_missing_coefficient_is_a_precondition_violation() {
        let record = CoeffRecord::from([("epsilon", 1.0)]);
        record.get("sigma");
    }

    #[test]
    fn params_constructors_preserve_value_order() {
        assert_eq!(PairParams::scalar(1.0).values(), &[1.0]);
        assert_eq!(PairParams::scalar2(1.0, 2.0).values(), &[1.0, 2.0]);
        assert_eq!(PairParams::scalar4(1.0, 2.0, 3.0, 4.0).values(), &[1.0, 2.0, 3.0, 4.0]);
    }
}
