use crate::core::potentials::Traversal;
use crate::engine::coeff::TypePair;
use crate::engine::types::{ParticleTypes, TypeRegistry};
use std::collections::HashMap;

/// A per-type-pair map of effective interaction radii. A value of -1.0
/// means the pair is excluded from candidate search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RcutMatrix {
    cutoffs: HashMap<TypePair, f64>,
}

impl RcutMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pair(&mut self, a: &str, b: &str, r_cut: f64) {
        self.cutoffs.insert(TypePair::new(a, b), r_cut);
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.cutoffs.get(&TypePair::new(a, b)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypePair, f64)> {
        self.cutoffs.iter().map(|(pair, r)| (pair, *r))
    }
}

/// Handle identifying one potential's cutoff subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// The neighbor-structure collaborator's configuration surface.
///
/// Potentials sharing one spatial query structure each publish their
/// resolved per-pair cutoffs here on every coefficient mutation; the
/// structure sizes its search radius from the per-pair maximum. The table
/// also records the traversal mode (three-body potentials need both
/// orderings of every pair) and the diameter shift used by size-dependent
/// cutoff criteria.
#[derive(Debug)]
pub struct NeighborTable {
    types: ParticleTypes,
    subscriptions: Vec<RcutMatrix>,
    traversal: Traversal,
    diameter_shift: Option<f64>,
}

impl NeighborTable {
    pub fn new(types: ParticleTypes) -> Self {
        Self {
            types,
            subscriptions: Vec::new(),
            traversal: Traversal::default(),
            diameter_shift: None,
        }
    }

    pub fn types(&self) -> &ParticleTypes {
        &self.types
    }

    pub fn subscribe(&mut self) -> SubscriptionId {
        self.subscriptions.push(RcutMatrix::new());
        SubscriptionId(self.subscriptions.len() - 1)
    }

    /// Replaces one subscriber's cutoff map. Called by potentials on every
    /// coefficient mutation.
    pub fn publish(&mut self, id: SubscriptionId, cutoffs: RcutMatrix) {
        self.subscriptions[id.0] = cutoffs;
    }

    /// The radius governing candidate search for one pair: the maximum over
    /// all subscribers, or -1.0 when every subscriber excludes the pair.
    pub fn pair_cutoff(&self, a: &str, b: &str) -> f64 {
        let max = self
            .subscriptions
            .iter()
            .filter_map(|cutoffs| cutoffs.get(a, b))
            .fold(f64::NEG_INFINITY, f64::max);
        if max.is_finite() && max >= 0.0 { max } else { -1.0 }
    }

    /// The radius that must size the spatial query structure: the maximum
    /// pair cutoff, plus the diameter shift when enabled.
    pub fn max_cutoff(&self) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..self.types.count() {
            for j in i..self.types.count() {
                let r = self.pair_cutoff(self.types.name_of(i), self.types.name_of(j));
                max = max.max(r);
            }
        }
        match self.diameter_shift {
            Some(max_diameter) => max + (max_diameter - 1.0),
            None => max,
        }
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn set_traversal(&mut self, traversal: Traversal) {
        self.traversal = traversal;
    }

    pub fn set_diameter_shift(&mut self, max_diameter: f64) {
        self.diameter_shift = Some(max_diameter);
    }

    pub fn diameter_shift(&self) -> Option<f64> {
        self.diameter_shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NeighborTable {
        NeighborTable::new(ParticleTypes::new(["A", "B"]))
    }

    #[test]
    fn pair_cutoff_is_the_maximum_over_subscribers() {
        let mut table = table();
        let lj = table.subscribe();
        let gauss = table.subscribe();

        let mut lj_cutoffs = RcutMatrix::new();
        lj_cutoffs.set_pair("A", "A", 2.5);
        table.publish(lj, lj_cutoffs);

        let mut gauss_cutoffs = RcutMatrix::new();
        gauss_cutoffs.set_pair("A", "A", 3.5);
        table.publish(gauss, gauss_cutoffs);

        assert_eq!(table.pair_cutoff("A", "A"), 3.5);
    }

    #[test]
    fn a_pair_no_subscriber_covers_is_excluded() {
        let mut table = table();
        let id = table.subscribe();
        let mut cutoffs = RcutMatrix::new();
        cutoffs.set_pair("A", "A", 2.5);
        cutoffs.set_pair("A", "B", -1.0);
        table.publish(id, cutoffs);

        assert_eq!(table.pair_cutoff("A", "B"), -1.0);
        assert_eq!(table.pair_cutoff("B", "B"), -1.0);
    }

    #[test]
    fn an_excluded_pair_is_resurrected_by_another_subscriber() {
        let mut table = table();
        let first = table.subscribe();
        let second = table.subscribe();

        let mut excluded = RcutMatrix::new();
        excluded.set_pair("A", "A", -1.0);
        table.publish(first, excluded);

        let mut active = RcutMatrix::new();
        active.set_pair("A", "A", 2.0);
        table.publish(second, active);

        assert_eq!(table.pair_cutoff("A", "A"), 2.0);
    }

    #[test]
    fn max_cutoff_spans_all_pairs_and_applies_the_diameter_shift() {
        let mut table = table();
        let id = table.subscribe();
        let mut cutoffs = RcutMatrix::new();
        cutoffs.set_pair("A", "A", 2.5);
        cutoffs.set_pair("A", "B", 3.0);
        cutoffs.set_pair("B", "B", -1.0);
        table.publish(id, cutoffs);

        assert_eq!(table.max_cutoff(), 3.0);
        table.set_diameter_shift(2.0);
        assert_eq!(table.max_cutoff(), 4.0);
    }

    #[test]
    fn traversal_defaults_to_half_and_can_be_raised_to_full() {
        let mut table = table();
        assert_eq!(table.traversal(), Traversal::Half);
        table.set_traversal(Traversal::Full);
        assert_eq!(table.traversal(), Traversal::Full);
    }
}
