// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Property-Based Tests (proptest) for cardano-core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the cubic eigenvalue solver.
//!
//! Covers: trace preservation, rounding of every eigenvalue, step shape,
//! determinism, diagonal spectra, and fail-fast validation.

use cardano_core::{round_half_away, CubicEigenSolver, RootRegime};
use cardano_types::{DerivationStep, Matrix3, ValidationError};
use proptest::prelude::*;

fn matrix_rows() -> impl Strategy<Value = [[f64; 3]; 3]> {
    prop::array::uniform3(prop::array::uniform3(-10.0f64..10.0))
}

fn solve(rows: [[f64; 3]; 3]) -> cardano_core::EigenSolution {
    let matrix = Matrix3::new(rows).unwrap();
    CubicEigenSolver::default().solve_matrix(&matrix)
}

// ── Spectrum Properties ──────────────────────────────────────────────

proptest! {
    /// λ1 + λ2 + λ3 = tr(A) in both the Cardano and the Viète regime,
    /// including the real-valued stand-ins for a complex pair.
    #[test]
    fn eigenvalue_sum_equals_trace(rows in matrix_rows()) {
        let sol = solve(rows);
        prop_assume!(sol.regime != RootRegime::Repeated);
        let trace = rows[0][0] + rows[1][1] + rows[2][2];
        let sum = sol.eigenvalues.sum();
        prop_assert!((sum - trace).abs() < 1e-3,
            "sum = {}, trace = {}, regime = {:?}", sum, trace, sol.regime);
    }

    /// Every eigenvalue is finite and already rounded to 4 decimals.
    #[test]
    fn eigenvalues_finite_and_rounded(rows in matrix_rows()) {
        let sol = solve(rows);
        prop_assert_eq!(sol.eigenvalues.values().len(), 3);
        for v in sol.eigenvalues.values() {
            prop_assert!(v.is_finite(), "non-finite eigenvalue {}", v);
            prop_assert_eq!(round_half_away(v, 4).to_bits(), v.to_bits());
            prop_assert!((v * 1e4 - (v * 1e4).round()).abs() < 1e-6);
        }
    }

    /// Distinct integer diagonals give back their entries.
    #[test]
    fn diagonal_spectrum(a in -20i32..20, b in -20i32..20, c in -20i32..20) {
        prop_assume!(a != b && b != c && a != c);
        let (a, b, c) = (a as f64, b as f64, c as f64);
        let sol = solve([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]]);

        let mut got = sol.eigenvalues.values();
        got.sort_by(|x, y| x.partial_cmp(y).unwrap());
        let mut want = [a, b, c];
        want.sort_by(|x, y| x.partial_cmp(y).unwrap());
        for (g, w) in got.iter().zip(want.iter()) {
            prop_assert!((g - w).abs() < 1e-4, "got {:?}, want {:?}", got, want);
        }
    }

    /// Scalar matrices always take the repeated-root path.
    #[test]
    fn scalar_matrix_repeated(k in -50i32..50) {
        let k = k as f64;
        let sol = solve([[k, 0.0, 0.0], [0.0, k, 0.0], [0.0, 0.0, k]]);
        prop_assert_eq!(sol.regime, RootRegime::Repeated);
        prop_assert_eq!(sol.eigenvalues.values(), [k, k, k]);
    }
}

// ── Trace and Determinism Properties ─────────────────────────────────

proptest! {
    /// Steps come out as input, characteristic matrix, equation, eigenvalues.
    #[test]
    fn step_sequence_shape(rows in matrix_rows()) {
        let sol = solve(rows);
        prop_assert_eq!(sol.steps.len(), 4);
        prop_assert!(matches!(sol.steps[0], DerivationStep::InputMatrix { .. }), "step 0 is not the input matrix");
        prop_assert!(matches!(sol.steps[1], DerivationStep::CharacteristicMatrix { .. }), "step 1 is not the characteristic matrix");
        prop_assert!(matches!(sol.steps[2], DerivationStep::CharacteristicEquation { .. }), "step 2 is not the equation");
        match &sol.steps[3] {
            DerivationStep::Eigenvalues { eigenvalues } => {
                for (idx, ev) in eigenvalues.iter().enumerate() {
                    prop_assert_eq!(ev.value.to_bits(), sol.eigenvalues[idx].to_bits());
                }
            }
            other => prop_assert!(false, "unexpected last step {:?}", other),
        }
    }

    /// Solving twice is bit-identical.
    #[test]
    fn solve_is_deterministic(rows in matrix_rows()) {
        let first = solve(rows);
        let second = solve(rows);
        prop_assert_eq!(&first, &second);
    }

    /// The text path and the numeric path agree: shortest decimal text
    /// round-trips to the same matrix.
    #[test]
    fn text_cells_match_numeric(rows in matrix_rows()) {
        let cells: [[String; 3]; 3] = rows.map(|row| row.map(|v| v.to_string()));
        let from_text = CubicEigenSolver::default().solve(&cells).unwrap();
        prop_assert_eq!(from_text, solve(rows));
    }

    /// A single bad cell anywhere rejects the whole matrix at that cell.
    #[test]
    fn bad_cell_rejected(
        row in 0usize..3,
        col in 0usize..3,
        bad in prop::sample::select(vec!["abc", "1.2.3", "", "-", ".", "NaN", "inf"]),
    ) {
        let mut cells = [["1"; 3]; 3];
        cells[row][col] = bad;
        let err = CubicEigenSolver::default().solve(&cells).unwrap_err();
        prop_assert_eq!(err, ValidationError::NotANumber { row, col, value: bad.to_string() });
    }
}
