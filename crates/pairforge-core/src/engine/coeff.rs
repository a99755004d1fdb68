use crate::core::potentials::CoeffRecord;
use crate::engine::error::{ConfigError, VerificationError, VerifyProblem};
use crate::engine::types::TypeRegistry;
use std::collections::HashMap;
use std::fmt;
use tracing::{error, warn};

/// One stored coefficient value: a number, or the sentinel that disables an
/// interaction (used for per-pair cutoffs). `Disabled` reads as -1.0 when a
/// numeric value is demanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoeffValue {
    Real(f64),
    Disabled,
}

impl CoeffValue {
    pub fn as_f64(self) -> f64 {
        match self {
            CoeffValue::Real(value) => value,
            CoeffValue::Disabled => -1.0,
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, CoeffValue::Disabled)
    }
}

impl From<f64> for CoeffValue {
    fn from(value: f64) -> Self {
        CoeffValue::Real(value)
    }
}

/// An unordered pair of particle type names, canonicalized so that
/// (a, b) and (b, a) share one storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypePair {
    a: String,
    b: String,
}

impl TypePair {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                a: a.to_string(),
                b: b.to_string(),
            }
        } else {
            Self {
                a: b.to_string(),
                b: a.to_string(),
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.a
    }

    pub fn second(&self) -> &str {
        &self.b
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', '{}')", self.a, self.b)
    }
}

/// The symmetric per-type-pair coefficient matrix.
///
/// Records are created on demand by [`set`](Self::set) and merged on
/// repeated calls; defaults registered with
/// [`set_default`](Self::set_default) are applied lazily during
/// verification/resolution and never override an explicitly set value.
#[derive(Debug, Clone, Default)]
pub struct PairCoeffMatrix {
    records: HashMap<TypePair, HashMap<String, CoeffValue>>,
    defaults: HashMap<String, CoeffValue>,
}

impl PairCoeffMatrix {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Merges `coeffs` into every pair of the `a` x `b` cross product,
    /// creating records as needed. Setting ('A', 'B') and ('B', 'A') target
    /// the same record.
    pub fn set(
        &mut self,
        a: &[&str],
        b: &[&str],
        coeffs: &[(&str, CoeffValue)],
    ) -> Result<(), ConfigError> {
        if coeffs.is_empty() {
            return Err(ConfigError::EmptyCoefficients);
        }
        for &ai in a {
            for &bi in b {
                let record = self.records.entry(TypePair::new(ai, bi)).or_default();
                for &(name, value) in coeffs {
                    record.insert(name.to_string(), value);
                }
            }
        }
        Ok(())
    }

    /// Canonical-pair lookup of an explicitly set value. Defaults are not
    /// visible here; an unset pair or name is absent, not an error.
    pub fn get(&self, a: &str, b: &str, name: &str) -> Option<CoeffValue> {
        self.records.get(&TypePair::new(a, b))?.get(name).copied()
    }

    /// Registers (or overwrites) a default used for future default-fill.
    pub fn set_default(&mut self, name: &str, value: CoeffValue) {
        self.defaults.insert(name.to_string(), value);
    }

    pub fn default(&self, name: &str) -> Option<CoeffValue> {
        self.defaults.get(name).copied()
    }

    /// Checks that every unordered pair of registry types has a record
    /// covering `required` after default-fill. Surfaces one diagnostic per
    /// problem and never raises; the caller decides severity.
    pub fn verify(&self, required: &[&str], types: &dyn TypeRegistry) -> bool {
        self.check(required, types).0.is_empty()
    }

    /// The verifying counterpart that produces the immutable resolved
    /// snapshot consumed by the dispatch pass, or the aggregate of every
    /// problem found.
    pub fn resolve(
        &self,
        required: &[&str],
        types: &dyn TypeRegistry,
    ) -> Result<ResolvedCoeffs, VerificationError> {
        let (problems, pairs) = self.check(required, types);
        if problems.is_empty() {
            Ok(ResolvedCoeffs { pairs })
        } else {
            Err(VerificationError { problems })
        }
    }

    fn check(
        &self,
        required: &[&str],
        types: &dyn TypeRegistry,
    ) -> (Vec<VerifyProblem>, Vec<ResolvedPair>) {
        let mut problems = Vec::new();
        let mut pairs = Vec::new();

        for i in 0..types.count() {
            for j in i..types.count() {
                let a = types.name_of(i);
                let b = types.name_of(j);
                let pair = TypePair::new(a, b);

                let Some(record) = self.records.get(&pair) else {
                    error!("type pair {pair} not found in pair coefficients");
                    problems.push(VerifyProblem::MissingPair {
                        a: a.to_string(),
                        b: b.to_string(),
                    });
                    continue;
                };

                for name in record.keys() {
                    if !required.contains(&name.as_str()) {
                        warn!(
                            "possible typo? coefficient '{name}' is specified for pair {pair} \
                             but is not used by the potential"
                        );
                    }
                }

                let mut values = HashMap::new();
                let mut complete = true;
                for &name in required {
                    let value = record
                        .get(name)
                        .copied()
                        .or_else(|| self.defaults.get(name).copied());
                    match value {
                        Some(value) => {
                            values.insert(name.to_string(), value.as_f64());
                        }
                        None => {
                            error!("type pair {pair} is missing required coefficient '{name}'");
                            problems.push(VerifyProblem::MissingCoeff {
                                a: a.to_string(),
                                b: b.to_string(),
                                name: name.to_string(),
                            });
                            complete = false;
                        }
                    }
                }

                if complete {
                    pairs.push(ResolvedPair {
                        i,
                        j,
                        pair,
                        record: CoeffRecord::new(values),
                    });
                }
            }
        }

        (problems, pairs)
    }
}

/// One type pair of a resolved snapshot: registry indices, the canonical
/// pair, and its complete numeric record.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPair {
    pub i: usize,
    pub j: usize,
    pub pair: TypePair,
    pub record: CoeffRecord,
}

/// The immutable resolved snapshot of a coefficient matrix: every unordered
/// registry pair with defaults filled in. Regenerated after any mutation;
/// never cached across `set` calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedCoeffs {
    pairs: Vec<ResolvedPair>,
}

impl ResolvedCoeffs {
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
