use crate::core::cutoff::ShiftMode;
use crate::engine::coeff::{CoeffValue, PairCoeffMatrix};
use crate::engine::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoeffFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("'{path}': coefficient '{name}' must be a number or false (false disables)")]
    InvalidFlag { path: String, name: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCoeffValue {
    Number(f64),
    Flag(bool),
}

#[derive(Debug, Deserialize)]
struct RawPairBlock {
    a: Vec<String>,
    b: Vec<String>,
    coeffs: HashMap<String, RawCoeffValue>,
}

#[derive(Debug, Deserialize)]
struct RawCoeffFile {
    #[serde(default)]
    shift_mode: Option<ShiftMode>,
    #[serde(default)]
    defaults: HashMap<String, RawCoeffValue>,
    #[serde(default, rename = "pair")]
    pairs: Vec<RawPairBlock>,
}

/// One `[[pair]]` block: the two type-name lists whose cross product the
/// coefficients apply to.
#[derive(Debug, Clone, PartialEq)]
pub struct PairBlock {
    pub a: Vec<String>,
    pub b: Vec<String>,
    pub coeffs: Vec<(String, CoeffValue)>,
}

/// A coefficient file: a set of defaults plus per-pair-block coefficients,
/// so a force field can live in its own file and be applied to any
/// potential's matrix.
///
/// ```toml
/// shift_mode = "xplor"
///
/// [defaults]
/// alpha = 1.0
///
/// [[pair]]
/// a = ["A"]
/// b = ["A", "B"]
/// [pair.coeffs]
/// epsilon = 1.0
/// sigma = 1.0
///
/// [[pair]]
/// a = ["B"]
/// b = ["B"]
/// [pair.coeffs]
/// epsilon = 2.0
/// sigma = 1.0
/// r_cut = false
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoeffFile {
    pub shift_mode: Option<ShiftMode>,
    pub defaults: Vec<(String, CoeffValue)>,
    pub pairs: Vec<PairBlock>,
}

impl CoeffFile {
    pub fn load(path: &Path) -> Result<Self, CoeffFileError> {
        let path_label = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| CoeffFileError::Io {
            path: path_label.clone(),
            source,
        })?;
        let raw: RawCoeffFile =
            toml::from_str(&content).map_err(|source| CoeffFileError::Toml {
                path: path_label.clone(),
                source,
            })?;

        let defaults = convert_coeffs(raw.defaults, &path_label)?;
        let mut pairs = Vec::with_capacity(raw.pairs.len());
        for block in raw.pairs {
            pairs.push(PairBlock {
                a: block.a,
                b: block.b,
                coeffs: convert_coeffs(block.coeffs, &path_label)?,
            });
        }
        Ok(Self {
            shift_mode: raw.shift_mode,
            defaults,
            pairs,
        })
    }

    /// Applies the file to a matrix: defaults first, then every pair block
    /// in file order.
    pub fn apply_to(&self, matrix: &mut PairCoeffMatrix) -> Result<(), ConfigError> {
        for (name, value) in &self.defaults {
            matrix.set_default(name, *value);
        }
        for block in &self.pairs {
            let a: Vec<&str> = block.a.iter().map(String::as_str).collect();
            let b: Vec<&str> = block.b.iter().map(String::as_str).collect();
            let coeffs: Vec<(&str, CoeffValue)> = block
                .coeffs
                .iter()
                .map(|(name, value)| (name.as_str(), *value))
                .collect();
            matrix.set(&a, &b, &coeffs)?;
        }
        Ok(())
    }
}

fn convert_coeffs(
    raw: HashMap<String, RawCoeffValue>,
    path: &str,
) -> Result<Vec<(String, CoeffValue)>, CoeffFileError> {
    let mut coeffs = Vec::with_capacity(raw.len());
    for (name, value) in raw {
        let value = match value {
            RawCoeffValue::Number(number) => CoeffValue::Real(number),
            RawCoeffValue::Flag(false) => CoeffValue::Disabled,
            RawCoeffValue::Flag(true) => {
                return Err(CoeffFileError::InvalidFlag {
                    path: path.to_string(),
                    name,
                });
            }
        };
        coeffs.push((name, value));
    }
    coeffs.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(coeffs)
}
