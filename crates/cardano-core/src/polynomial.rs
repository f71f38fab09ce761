// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Characteristic Polynomial
// ─────────────────────────────────────────────────────────────────────
//! Characteristic polynomial of a 3×3 matrix and its depressed form.
//!
//! For a 3×3 matrix A, det(λI - A) = λ³ + pλ² + qλ + r with
//! p = -tr(A), q = sum of 2×2 principal minors, r = -det(A).

use serde::{Deserialize, Serialize};

use cardano_types::Matrix3;

use crate::numeric::format_number;

/// Coefficients of the monic cubic λ³ + pλ² + qλ + r = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolynomialCoefficients {
    pub p: f64,
    pub q: f64,
    pub r: f64,
}

impl PolynomialCoefficients {
    pub fn from_matrix(matrix: &Matrix3) -> Self {
        Self {
            p: -matrix.trace(),
            q: matrix.principal_minor_sum(),
            r: -matrix.determinant(),
        }
    }

    /// `λ³ + {p}λ² + {q}λ + {r} = 0` with each coefficient interpolated
    /// verbatim, so a negative p reads `+ -3λ²`.
    pub fn equation_text(&self) -> String {
        format!(
            "λ³ + {}λ² + {}λ + {} = 0",
            format_number(self.p),
            format_number(self.q),
            format_number(self.r)
        )
    }

    /// Shift that undoes the depression substitution λ = t - p/3.
    #[inline]
    pub fn shift(&self) -> f64 {
        -self.p / 3.0
    }
}

/// Depressed cubic t³ + p1·t + q1 = 0 and its discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepressedCubic {
    pub p1: f64,
    pub q1: f64,
    /// q1²/4 + p1³/27. Positive: one real root; negative: three distinct
    /// real roots; zero: a repeated root.
    pub disc: f64,
}

impl DepressedCubic {
    pub fn from_coefficients(c: &PolynomialCoefficients) -> Self {
        let PolynomialCoefficients { p, q, r } = *c;
        let p1 = q - (p * p) / 3.0;
        let q1 = (2.0 * p * p * p) / 27.0 - (p * q) / 3.0 + r;
        let disc = (q1 * q1 / 4.0) + (p1 * p1 * p1 / 27.0);
        Self { p1, q1, disc }
    }
}
