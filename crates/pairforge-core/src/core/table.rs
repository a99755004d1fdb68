use thiserror::Error;

/// Absolute tolerance when checking that file-sourced radii sit on the
/// uniform grid inferred from the first and last rows.
const SPACING_TOLERANCE: f64 = 1e-3;

/// `label` identifies the offending table: the filename for file-sourced
/// data, or a caller-chosen tag for inline rows.
#[derive(Debug, Error)]
pub enum TableFormatError {
    #[error("I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("'{label}' line {line}: expected 3 columns (r V F), found {found}")]
    ColumnCount {
        label: String,
        line: usize,
        found: usize,
    },
    #[error("'{label}' line {line}: invalid number '{value}'")]
    InvalidNumber {
        label: String,
        line: usize,
        value: String,
    },
    #[error("'{label}': expected exactly {expected} data rows, found {found}")]
    RowCount {
        label: String,
        expected: usize,
        found: usize,
    },
    #[error("'{label}' row {row}: r values must be monotonically increasing")]
    NotIncreasing { label: String, row: usize },
    #[error(
        "'{label}' row {row}: r values must be evenly spaced (expected r = {expected}, found {found})"
    )]
    UnevenSpacing {
        label: String,
        row: usize,
        expected: f64,
        found: f64,
    },
    #[error("a table requires a width of at least 2 points (got {0})")]
    WidthTooSmall(usize),
}

/// A uniformly spaced (energy, force) sample table for one type pair.
///
/// Samples sit at `width` radii from `r_min` to `r_max` inclusive, with
/// spacing `(r_max - r_min) / (width - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairTable {
    r_min: f64,
    r_max: f64,
    energy: Vec<f64>,
    force: Vec<f64>,
}

impl PairTable {
    /// Samples `potential(r) -> (V, F)` at `width` equally spaced radii.
    pub fn from_function<F>(
        potential: F,
        r_min: f64,
        r_max: f64,
        width: usize,
    ) -> Result<Self, TableFormatError>
    where
        F: Fn(f64) -> (f64, f64),
    {
        if width < 2 {
            return Err(TableFormatError::WidthTooSmall(width));
        }
        let dr = (r_max - r_min) / (width - 1) as f64;
        let mut energy = Vec::with_capacity(width);
        let mut force = Vec::with_capacity(width);
        for i in 0..width {
            let (v, f) = potential(r_min + dr * i as f64);
            energy.push(v);
            force.push(f);
        }
        Ok(Self {
            r_min,
            r_max,
            energy,
            force,
        })
    }

    /// Builds a table from (r, V, F) rows, validating row count, monotonic
    /// radii, and uniform spacing.
    pub fn from_rows(
        rows: &[(f64, f64, f64)],
        width: usize,
        label: &str,
    ) -> Result<Self, TableFormatError> {
        if width < 2 {
            return Err(TableFormatError::WidthTooSmall(width));
        }
        if rows.len() != width {
            return Err(TableFormatError::RowCount {
                label: label.to_string(),
                expected: width,
                found: rows.len(),
            });
        }
        for (row, window) in rows.windows(2).enumerate() {
            if window[1].0 <= window[0].0 {
                return Err(TableFormatError::NotIncreasing {
                    label: label.to_string(),
                    row: row + 1,
                });
            }
        }

        let r_min = rows[0].0;
        let r_max = rows[width - 1].0;
        let dr = (r_max - r_min) / (width - 1) as f64;
        for (row, &(r, _, _)) in rows.iter().enumerate() {
            let expected = r_min + dr * row as f64;
            if (r - expected).abs() > SPACING_TOLERANCE {
                return Err(TableFormatError::UnevenSpacing {
                    label: label.to_string(),
                    row,
                    expected,
                    found: r,
                });
            }
        }

        Ok(Self {
            r_min,
            r_max,
            energy: rows.iter().map(|&(_, v, _)| v).collect(),
            force: rows.iter().map(|&(_, _, f)| f).collect(),
        })
    }

    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    pub fn width(&self) -> usize {
        self.energy.len()
    }

    pub fn energies(&self) -> &[f64] {
        &self.energy
    }

    pub fn forces(&self) -> &[f64] {
        &self.force
    }

    /// Nearest-sample retrieval: `r` is snapped to the closest grid point
    /// and that sample's (V, F) returned verbatim. Outside [r_min, r_max]
    /// the interaction contributes nothing.
    ///
    /// This reproduces the rounded-index behavior of the original tables
    /// rather than interpolating linearly between samples; see DESIGN.md.
    pub fn lookup(&self, r: f64) -> (f64, f64) {
        if r < self.r_min || r > self.r_max {
            return (0.0, 0.0);
        }
        let dr = (self.r_max - self.r_min) / (self.width() - 1) as f64;
        let index = (((r - self.r_min) / dr).round() as usize).min(self.width() - 1);
        (self.energy[index], self.force[index])
    }
}

/// Parses whitespace-separated `r V F` rows. Blank lines and lines whose
/// first non-whitespace character is `#` are skipped.
pub fn parse_rows(content: &str, label: &str) -> Result<Vec<(f64, f64, f64)>, TableFormatError> {
    let mut rows = Vec::new();
    for (line_index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        if columns.len() != 3 {
            return Err(TableFormatError::ColumnCount {
                label: label.to_string(),
                line: line_index + 1,
                found: columns.len(),
            });
        }

        let mut values = [0.0; 3];
        for (value, column) in values.iter_mut().zip(&columns) {
            *value = column
                .parse::<f64>()
                .map_err(|_| TableFormatError::InvalidNumber {
                    label: label.to_string(),
                    line: line_index + 1,
                    value: (*column).to_string(),
                })?;
        }
        rows.push((values[0], values[1], values[2]));
    }
    Ok(rows)
}
