//! `Matrix` → text rendering
//!
//! Emits the same textual convention the parser accepts: rows separated by a
//! newline, values within a row separated by a single space. Values are
//! rendered at a fixed 4 decimal places with trailing zeros (and a bare
//! trailing `.`) trimmed, and `-0` normalized to `0`, so re-parsing the
//! formatted text reproduces the matrix to that precision.

use crate::Matrix;

/// Decimal places used when rendering a value
const FORMAT_PRECISION: usize = 4;

/// Renders one value at [`FORMAT_PRECISION`] decimal places, trimmed
///
/// `19.0` → `"19"`, `-2.5` → `"-2.5"`, `0.33333…` → `"0.3333"`, and values
/// that round to negative zero come out as `"0"`.
fn format_value(value: f64) -> String {
    let rendered = format!("{:.prec$}", value, prec = FORMAT_PRECISION);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

impl Matrix {
    /// Renders the matrix back into the parser's textual convention
    ///
    /// No trailing newline; separators appear only between values and
    /// between rows.
    ///
    /// # Example
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![6.0, 8.0, 10.0, 12.0]).unwrap();
    /// assert_eq!(m.to_text(), "6 8\n10 12");
    /// ```
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows() {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.cols() {
                if col > 0 {
                    out.push(' ');
                }
                out.push_str(&format_value(self.as_slice()[row * self.cols() + col]));
            }
        }
        out
    }
}
