// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Cardano Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Value types, configuration, and error hierarchy for the Cardano
//! Kernel — the closed-form 3×3 eigenvalue solver.

pub mod cell;
pub mod config;
pub mod error;
pub mod matrix;
pub mod step;

pub use config::SolverConfig;
pub use error::{CardanoError, CardanoResult, ValidationError};
pub use matrix::Matrix3;
pub use step::{DerivationStep, EigenvalueTriple, LabeledEigenvalue, LabeledMatrix};
