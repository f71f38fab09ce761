// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — 3×3 Input Matrix
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::cell::parse_cell;
use crate::error::ValidationError;

/// A 3×3 matrix of finite reals, row-major.
///
/// Every constructor rejects NaN and ±∞, so downstream code can rely on
/// finite entries without rechecking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[[f64; 3]; 3]", into = "[[f64; 3]; 3]")]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Build from numeric rows, rejecting non-finite entries.
    pub fn new(rows: [[f64; 3]; 3]) -> Result<Self, ValidationError> {
        for (row, values) in rows.iter().enumerate() {
            for (col, &v) in values.iter().enumerate() {
                if !v.is_finite() {
                    return Err(ValidationError::NotANumber {
                        row,
                        col,
                        value: v.to_string(),
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Parse a 3×3 grid of text cells.
    ///
    /// Fails on the first cell (row-major) that is not a finite number;
    /// no partially parsed matrix is ever returned.
    pub fn parse_cells<S: AsRef<str>>(cells: &[[S; 3]; 3]) -> Result<Self, ValidationError> {
        let mut rows = [[0.0; 3]; 3];
        for (row, values) in cells.iter().enumerate() {
            for (col, cell) in values.iter().enumerate() {
                let text = cell.as_ref();
                rows[row][col] = parse_cell(text).ok_or_else(|| {
                    log::debug!("rejecting cell ({row}, {col}): {text:?}");
                    ValidationError::NotANumber {
                        row,
                        col,
                        value: text.to_string(),
                    }
                })?;
            }
        }
        Ok(Self { rows })
    }

    /// Parse dynamically sized rows, checking for exactly 3×3 first.
    pub fn try_from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, ValidationError> {
        if rows.len() != 3 || rows.iter().any(|r| r.len() != 3) {
            return Err(ValidationError::Shape {
                rows: rows.len(),
                cols: rows.iter().map(Vec::len).collect(),
            });
        }
        let cells: [[&str; 3]; 3] = std::array::from_fn(|r| {
            std::array::from_fn(|c| rows[r][c].as_ref())
        });
        Self::parse_cells(&cells)
    }

    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> f64 {
        let [[a, _, _], [_, e, _], [_, _, i]] = self.rows;
        a + e + i
    }

    /// Sum of the three 2×2 principal minors (cofactors of the diagonal).
    pub fn principal_minor_sum(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        (a * e + e * i + i * a) - (b * d + f * h + c * g)
    }

    /// Determinant by the rule of Sarrus.
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * e * i + b * f * g + c * d * h - c * e * g - a * f * h - b * d * i
    }
}

impl TryFrom<[[f64; 3]; 3]> for Matrix3 {
    type Error = ValidationError;

    fn try_from(rows: [[f64; 3]; 3]) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Matrix3> for [[f64; 3]; 3] {
    fn from(m: Matrix3) -> Self {
        m.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix3 {
        Matrix3::new([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]).unwrap()
    }

    #[test]
    fn test_new_rejects_nan() {
        let err = Matrix3::new([[1.0, 0.0, 0.0], [0.0, f64::NAN, 0.0], [0.0, 0.0, 1.0]])
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { row: 1, col: 1, .. }));
    }

    #[test]
    fn test_new_rejects_infinity() {
        assert!(Matrix3::new([[f64::INFINITY, 0.0, 0.0], [0.0; 3], [0.0; 3]]).is_err());
    }

    #[test]
    fn test_parse_cells() {
        let m = Matrix3::parse_cells(&[["2", "-1", "0"], ["-1", "2", "-1"], ["0", "-1", "2"]])
            .unwrap();
        assert_eq!(m, sample());
    }

    #[test]
    fn test_parse_cells_reports_first_bad_cell() {
        let err = Matrix3::parse_cells(&[["1", "2", "3"], ["4", "1.2.3", "x"], ["7", "8", "9"]])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                row: 1,
                col: 1,
                value: "1.2.3".into()
            }
        );
    }

    #[test]
    fn test_parse_cells_empty_cell() {
        let err = Matrix3::parse_cells(&[["1", "", "3"], ["4", "5", "6"], ["7", "8", "9"]])
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_try_from_rows_shape() {
        let rows = vec![vec!["1", "2", "3"], vec!["4", "5"]];
        let err = Matrix3::try_from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Shape {
                rows: 2,
                cols: vec![3, 2]
            }
        );
    }

    #[test]
    fn test_try_from_rows_ok() {
        let rows = vec![
            vec!["2".to_string(), "-1".into(), "0".into()],
            vec!["-1".into(), "2".into(), "-1".into()],
            vec!["0".into(), "-1".into(), "2".into()],
        ];
        assert_eq!(Matrix3::try_from_rows(&rows).unwrap(), sample());
    }

    #[test]
    fn test_invariants() {
        let m = sample();
        assert_eq!(m.trace(), 6.0);
        assert_eq!(m.principal_minor_sum(), 10.0);
        assert_eq!(m.determinant(), 4.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let m: Matrix3 = serde_json::from_str("[[1,0,0],[0,1,0],[0,0,1]]").unwrap();
        assert_eq!(m.trace(), 3.0);
        assert!(serde_json::from_str::<Matrix3>("[[1,0],[0,1]]").is_err());
    }
}
