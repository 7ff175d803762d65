//! Human-readable matrix readout
//!
//! Each entry is floored to two decimals (`floor(v * 100) / 100`) and
//! printed in shortest form, and every row is laid out as
//!
//! ```text
//! row 1:[ 0.97,	-0.21,	5.43 ]
//! ```
//!
//! with a comma plus tab between numbers.

use crate::matrix::Transform3x3;
use std::fmt;

/// Three formatted rows of a [`Transform3x3`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixReadout {
    rows: [String; 3],
}

fn floor_hundredths(v: f64) -> f64 {
    (v * 100.0).floor() / 100.0
}

fn format_number(v: f64) -> String {
    if v == 0.0 {
        // Negative zero prints as plain 0
        "0".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        v.to_string()
    }
}

impl MatrixReadout {
    /// Build the readout of `transform`.
    pub fn from_transform(transform: &Transform3x3) -> Self {
        let mut n = 0;
        let rows = transform.rows().map(|row| {
            n += 1;
            let cells: Vec<String> = row
                .iter()
                .map(|&v| format_number(floor_hundredths(v)))
                .collect();
            format!("row {}:[ {} ]", n, cells.join(",\t"))
        });
        Self { rows }
    }

    /// All three rows.
    pub fn rows(&self) -> &[String; 3] {
        &self.rows
    }

    /// Row `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    pub fn row(&self, i: usize) -> &str {
        &self.rows[i]
    }
}

impl fmt::Display for MatrixReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.rows[0], self.rows[1], self.rows[2])
    }
}
