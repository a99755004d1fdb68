use super::{CoeffRecord, PairParams, PairPotential};
use crate::core::variant::Variant;

/// The conservative part of the DPD pair force, with no thermostat.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpdConservative;

impl PairPotential for DpdConservative {
    fn name(&self) -> &'static str {
        "dpd_conservative"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["A"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        PairParams::scalar2(coeff.get("A"), 0.0)
    }
}

/// Dissipative particle dynamics with the integrated drag/random-force
/// thermostat.
///
/// The temperature schedule and the RNG seed are consumed by the native
/// kernel, not by this crate; they are carried here because the potential
/// instance owns them for its lifetime.
#[derive(Debug)]
pub struct Dpd {
    seed: u64,
    temperature: Box<dyn Variant>,
}

impl Dpd {
    pub fn new(temperature: impl Variant + 'static, seed: u64) -> Self {
        Self {
            seed,
            temperature: Box::new(temperature),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn temperature(&self) -> &dyn Variant {
        self.temperature.as_ref()
    }

    pub fn set_temperature(&mut self, temperature: impl Variant + 'static) {
        self.temperature = Box::new(temperature);
    }
}

impl PairPotential for Dpd {
    fn name(&self) -> &'static str {
        "dpd"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["A", "gamma"]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        PairParams::scalar2(coeff.get("A"), coeff.get("gamma"))
    }
}

/// Lennard-Jones conservative force with the DPD thermostat. The xplor
/// smoothing derivation does not apply to the thermostatted force.
#[derive(Debug)]
pub struct DpdLj {
    seed: u64,
    temperature: Box<dyn Variant>,
}

impl DpdLj {
    pub fn new(temperature: impl Variant + 'static, seed: u64) -> Self {
        Self {
            seed,
            temperature: Box::new(temperature),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn temperature(&self) -> &dyn Variant {
        self.temperature.as_ref()
    }

    pub fn set_temperature(&mut self, temperature: impl Variant + 'static) {
        self.temperature = Box::new(temperature);
    }
}

impl PairPotential for DpdLj {
    fn name(&self) -> &'static str {
        "dpdlj"
    }

    fn required_coeffs(&self) -> &'static [&'static str] {
        &["epsilon", "sigma", "alpha", "gamma"]
    }

    fn default_coeffs(&self) -> &'static [(&'static str, f64)] {
        &[("alpha", 1.0)]
    }

    fn process_coeff(&self, coeff: &CoeffRecord) -> PairParams {
        let epsilon = coeff.get("epsilon");
        let sigma = coeff.get("sigma");
        let alpha = coeff.get("alpha");

        let c12 = 4.0 * epsilon * sigma.powi(12);
        let c6 = alpha * 4.0 * epsilon * sigma.powi(6);
        PairParams::scalar4(c12, c6, coeff.get("gamma"), 0.0)
    }

    fn supports_xplor(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::variant::{Constant, LinearInterp};

    #[test]
    fn conservative_variant_zero_fills_the_thermostat_slot() {
        let record = CoeffRecord::from([("A", 25.0)]);
        assert_eq!(DpdConservative.process_coeff(&record).values(), &[25.0, 0.0]);
    }

    #[test]
    fn thermostatted_variant_passes_repulsion_and_drag_through() {
        let dpd = Dpd::new(Constant(1.0), 42);
        let record = CoeffRecord::from([("A", 25.0), ("gamma", 4.5)]);
        assert_eq!(dpd.process_coeff(&record).values(), &[25.0, 4.5]);
        assert_eq!(dpd.seed(), 42);
    }

    #[test]
    fn temperature_schedule_can_be_replaced_between_runs() {
        let mut dpd = Dpd::new(Constant(1.0), 7);
        dpd.set_temperature(LinearInterp::new(vec![(0, 1.0), (100, 2.0)]));
        assert_eq!(dpd.temperature().evaluate(100), 2.0);
    }

    #[test]
    fn lj_variant_appends_drag_to_the_lj_prefactors() {
        let dpdlj = DpdLj::new(Constant(1.0), 1);
        let record = CoeffRecord::from([
            ("epsilon", 1.0),
            ("sigma", 1.0),
            ("alpha", 1.0),
            ("gamma", 4.5),
        ]);
        assert_eq!(dpdlj.process_coeff(&record).values(), &[4.0, 4.0, 4.5, 0.0]);
        assert!(!dpdlj.supports_xplor());
    }
}
