use crate::engine::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy for handling a pair potential at its cutoff radius.
///
/// - `NoShift` truncates the potential abruptly at `r_cut`.
/// - `Shift` subtracts `V(r_cut)` so the energy is continuous at the cutoff;
///   the force is still discontinuous.
/// - `Xplor` multiplies the potential and its derivative by the smoothing
///   function [`xplor_smoothing`] between `r_on` and `r_cut`, taking both the
///   energy and the force continuously to zero at the cutoff. When
///   `r_on >= r_cut` it degenerates to `Shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShiftMode {
    #[default]
    #[serde(rename = "none", alias = "no_shift")]
    NoShift,
    #[serde(rename = "shift")]
    Shift,
    #[serde(rename = "xplor")]
    Xplor,
}

impl fmt::Display for ShiftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftMode::NoShift => "none",
            ShiftMode::Shift => "shift",
            ShiftMode::Xplor => "xplor",
        };
        f.write_str(name)
    }
}

impl FromStr for ShiftMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "no_shift" => Ok(ShiftMode::NoShift),
            "shift" => Ok(ShiftMode::Shift),
            "xplor" => Ok(ShiftMode::Xplor),
            other => Err(ConfigError::UnknownShiftMode(other.to_string())),
        }
    }
}

/// The XPLOR smoothing factor and its radial derivative, `(S(r), dS/dr)`.
///
/// S(r) = (r_cut² − r²)² (r_cut² + 2r² − 3·r_on²) / (r_cut² − r_on²)³
///
/// Valid on `r_on <= r <= r_cut` with `r_on < r_cut`; S(r_on) = 1 and
/// S(r_cut) = 0.
#[inline]
pub fn xplor_smoothing(r: f64, r_cut: f64, r_on: f64) -> (f64, f64) {
    let r2 = r * r;
    let rc2 = r_cut * r_cut;
    let ron2 = r_on * r_on;
    let denom = (rc2 - ron2).powi(3);

    let s = (rc2 - r2).powi(2) * (rc2 + 2.0 * r2 - 3.0 * ron2) / denom;
    let ds = 12.0 * r * (rc2 - r2) * (ron2 - r2) / denom;
    (s, ds)
}

impl ShiftMode {
    /// Applies this policy to a raw radial potential.
    ///
    /// `potential(r)` must yield the raw `(V(r), dV/dr)`; the return value is
    /// the shaped `(V, dV/dr)`. Beyond `r_cut` the interaction contributes
    /// nothing in every mode.
    pub fn shape<F>(self, r: f64, r_cut: f64, r_on: f64, potential: F) -> (f64, f64)
    where
        F: Fn(f64) -> (f64, f64),
    {
        if r >= r_cut {
            return (0.0, 0.0);
        }
        let (v, dv) = potential(r);
        match self {
            ShiftMode::NoShift => (v, dv),
            ShiftMode::Shift => {
                let (v_cut, _) = potential(r_cut);
                (v - v_cut, dv)
            }
            ShiftMode::Xplor => {
                if r_on >= r_cut {
                    let (v_cut, _) = potential(r_cut);
                    (v - v_cut, dv)
                } else if r < r_on {
                    (v, dv)
                } else {
                    let (s, ds) = xplor_smoothing(r, r_cut, r_on);
                    (v * s, dv * s + v * ds)
                }
            }
        }
    }
}
