use crate::core::cutoff::ShiftMode;
use crate::core::table::TableFormatError;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no coefficients specified")]
    EmptyCoefficients,

    #[error("unrecognized cutoff handling mode '{0}' (expected none, shift, or xplor)")]
    UnknownShiftMode(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cutoff mode '{mode}' is not supported by the '{potential}' potential")]
pub struct UnsupportedModeError {
    pub potential: &'static str,
    pub mode: ShiftMode,
}

/// One defect found while checking a coefficient matrix against the type
/// registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyProblem {
    MissingPair { a: String, b: String },
    MissingCoeff { a: String, b: String, name: String },
}

impl fmt::Display for VerifyProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyProblem::MissingPair { a, b } => {
                write!(f, "type pair ('{a}', '{b}') is not configured")
            }
            VerifyProblem::MissingCoeff { a, b, name } => {
                write!(f, "type pair ('{a}', '{b}') is missing coefficient '{name}'")
            }
        }
    }
}

/// Aggregate of every problem found in one verification pass. Verification
/// never fails fast: all pairs are checked before this is raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("pair coefficient matrix is incomplete: {}", format_problems(.problems))]
pub struct VerificationError {
    pub problems: Vec<VerifyProblem>,
}

fn format_problems(problems: &[VerifyProblem]) -> String {
    problems
        .iter()
        .map(|problem| problem.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum PairForceError {
    #[error("invalid pair configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("{source}")]
    Verification {
        #[from]
        source: VerificationError,
    },

    #[error("{source}")]
    Table {
        #[from]
        source: TableFormatError,
    },

    #[error("{source}")]
    UnsupportedMode {
        #[from]
        source: UnsupportedModeError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_error_lists_every_problem() {
        let error = VerificationError {
            problems: vec![
                VerifyProblem::MissingPair {
                    a: "A".to_string(),
                    b: "B".to_string(),
                },
                VerifyProblem::MissingCoeff {
                    a: "A".to_string(),
                    b: "A".to_string(),
                    name: "sigma".to_string(),
                },
            ],
        };
        let message = error.to_string();
        assert!(message.contains("('A', 'B') is not configured"));
        assert!(message.contains("missing coefficient 'sigma'"));
    }

    #[test]
    fn unsupported_mode_error_names_the_potential_and_mode() {
        let error = UnsupportedModeError {
            potential: "slj",
            mode: ShiftMode::Xplor,
        };
        assert_eq!(
            error.to_string(),
            "cutoff mode 'xplor' is not supported by the 'slj' potential"
        );
    }
}
