// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Cardano Kernel Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Closed-form eigenvalues of a 3×3 real matrix with a derivation trace.
//!
//! The pipeline is strictly linear:
//! matrix → characteristic polynomial → depressed cubic → root regime →
//! roots → decimal rounding → step record.
//!
//! # Invariants
//!
//! 1. **Validation is the only failure**: a matrix whose cells all parse to
//!    finite numbers always yields exactly three eigenvalues and four steps.
//!    Rejected input yields no steps at all.
//!
//! 2. **No hidden state**: [`CubicEigenSolver`] holds only its immutable
//!    config, so repeated solves of one matrix are bit-identical and one
//!    instance can be shared across threads.
//!
//! 3. **Eigenvalues sum to the trace**: every regime's formulas keep
//!    `λ1 + λ2 + λ3 = -p`, up to rounding.

pub mod cubic;
pub mod numeric;
pub mod polynomial;
pub mod solver;

pub use cubic::RootRegime;
pub use numeric::{format_number, round_half_away};
pub use polynomial::{DepressedCubic, PolynomialCoefficients};
pub use solver::{CubicEigenSolver, EigenSolution};
