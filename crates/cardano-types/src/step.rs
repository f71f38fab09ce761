// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Derivation Step Types
// ─────────────────────────────────────────────────────────────────────
//! The auditable trace a solve produces, one record per stage.
//!
//! Steps are pure projections of the numeric pipeline: they carry text
//! and numbers for display and are never fed back into the computation.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix3;

/// Factored form shown under the characteristic equation. Symbolic only.
pub const FACTORED_TEMPLATE: &str = "(λ - λ₁)(λ - λ₂)(λ - λ₃) = 0";

/// A 3×3 grid of display text with its label (`A`, `λI`, `A - λI`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMatrix {
    pub label: String,
    pub cells: [[String; 3]; 3],
}

/// One eigenvalue with its positional label (`λ1`, `λ2`, `λ3`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledEigenvalue {
    pub label: String,
    pub value: f64,
}

/// Exactly three eigenvalues in formula order (not sorted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EigenvalueTriple(pub [f64; 3]);

impl EigenvalueTriple {
    pub fn values(&self) -> [f64; 3] {
        self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Values paired with `λ1`..`λ3` by array position.
    pub fn labeled(&self) -> Vec<LabeledEigenvalue> {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, &value)| LabeledEigenvalue {
                label: format!("λ{}", idx + 1),
                value,
            })
            .collect()
    }
}

impl std::ops::Index<usize> for EigenvalueTriple {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}

/// One stage of the derivation, in the order a solve emits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DerivationStep {
    /// The validated input matrix.
    InputMatrix { matrix: Matrix3 },

    /// `A`, `λI` and the symbolic difference `A - λI`.
    CharacteristicMatrix { matrices: Vec<LabeledMatrix> },

    /// `λ³ + pλ² + qλ + r = 0` and its factored template.
    CharacteristicEquation { full: String, factored: String },

    /// The rounded eigenvalues with positional labels.
    Eigenvalues { eigenvalues: Vec<LabeledEigenvalue> },
}

impl DerivationStep {
    /// Heading shown above the step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InputMatrix { .. } => "Input Matrix",
            Self::CharacteristicMatrix { .. } => "Step 1: Characteristic Matrix (A - λI)",
            Self::CharacteristicEquation { .. } => "Step 2: Characteristic Equation",
            Self::Eigenvalues { .. } => "Step 3: Eigenvalues",
        }
    }

    /// Sentence introducing the step's payload.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::InputMatrix { .. } => "The given matrix is:",
            Self::CharacteristicMatrix { .. } => "Subtracting λI from A gives us:",
            Self::CharacteristicEquation { .. } => "The characteristic equation is:",
            Self::Eigenvalues { .. } => "The eigenvalues are:",
        }
    }
}
