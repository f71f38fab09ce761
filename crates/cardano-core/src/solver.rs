// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Cubic Eigenvalue Solver
// ─────────────────────────────────────────────────────────────────────
//! End-to-end solve: cells → matrix → polynomial → roots → step trace.

use serde::{Deserialize, Serialize};

use cardano_types::step::FACTORED_TEMPLATE;
use cardano_types::{
    CardanoResult, DerivationStep, EigenvalueTriple, LabeledMatrix, Matrix3, SolverConfig,
    ValidationError,
};

use crate::cubic::{solve_cubic, RootRegime};
use crate::numeric::{format_number, round_half_away};
use crate::polynomial::{DepressedCubic, PolynomialCoefficients};

/// Everything one solve produces.
///
/// `steps` always holds the four derivation steps in order:
/// input matrix, characteristic matrix, characteristic equation,
/// eigenvalues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenSolution {
    pub steps: Vec<DerivationStep>,
    pub eigenvalues: EigenvalueTriple,
    pub coefficients: PolynomialCoefficients,
    pub depressed: DepressedCubic,
    pub regime: RootRegime,
}

/// Closed-form eigenvalue solver for 3×3 real matrices.
///
/// Stateless apart from its config: safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct CubicEigenSolver {
    config: SolverConfig,
}

impl CubicEigenSolver {
    pub fn new(config: SolverConfig) -> CardanoResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read-only access to config.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Parse a 3×3 grid of cells and solve it.
    ///
    /// Any cell that is not a finite number fails the whole call before
    /// any step is produced.
    pub fn solve<S: AsRef<str>>(
        &self,
        cells: &[[S; 3]; 3],
    ) -> Result<EigenSolution, ValidationError> {
        let matrix = Matrix3::parse_cells(cells)?;
        Ok(self.solve_matrix(&matrix))
    }

    /// Like [`solve`](Self::solve) for rows of unchecked length.
    pub fn solve_rows<S: AsRef<str>>(
        &self,
        rows: &[Vec<S>],
    ) -> Result<EigenSolution, ValidationError> {
        let matrix = Matrix3::try_from_rows(rows)?;
        Ok(self.solve_matrix(&matrix))
    }

    /// Solve an already validated matrix. Infallible.
    pub fn solve_matrix(&self, matrix: &Matrix3) -> EigenSolution {
        let mut steps = Vec::with_capacity(4);
        steps.push(DerivationStep::InputMatrix { matrix: *matrix });
        steps.push(characteristic_matrix_step(matrix));

        let coefficients = PolynomialCoefficients::from_matrix(matrix);
        let depressed = DepressedCubic::from_coefficients(&coefficients);
        let (raw, regime) = solve_cubic(&coefficients, &depressed, &self.config);
        log::debug!(
            "disc={:e} -> {} regime, raw roots {raw:?}",
            depressed.disc,
            regime.name()
        );

        let eigenvalues =
            EigenvalueTriple(raw.map(|v| round_half_away(v, self.config.decimals)));
        if eigenvalues.0.iter().any(|v| !v.is_finite()) {
            log::warn!(
                "non-finite eigenvalues {:?}: matrix entries overflow the cubic formulas",
                eigenvalues.0
            );
        }

        steps.push(DerivationStep::CharacteristicEquation {
            full: coefficients.equation_text(),
            factored: FACTORED_TEMPLATE.to_string(),
        });
        steps.push(DerivationStep::Eigenvalues {
            eigenvalues: eigenvalues.labeled(),
        });

        EigenSolution {
            steps,
            eigenvalues,
            coefficients,
            depressed,
            regime,
        }
    }
}

/// `A`, `λI`, and `A - λI` as display text.
fn characteristic_matrix_step(matrix: &Matrix3) -> DerivationStep {
    let original: [[String; 3]; 3] =
        std::array::from_fn(|r| std::array::from_fn(|c| format_number(matrix.get(r, c))));
    let lambda_identity: [[String; 3]; 3] = std::array::from_fn(|r| {
        std::array::from_fn(|c| (if r == c { "λ" } else { "0" }).to_string())
    });
    let difference: [[String; 3]; 3] = std::array::from_fn(|r| {
        std::array::from_fn(|c| {
            let value = format_number(matrix.get(r, c));
            if r == c {
                format!("{value}-λ")
            } else {
                value
            }
        })
    });

    DerivationStep::CharacteristicMatrix {
        matrices: vec![
            LabeledMatrix {
                label: "A".to_string(),
                cells: original,
            },
            LabeledMatrix {
                label: "λI".to_string(),
                cells: lambda_identity,
            },
            LabeledMatrix {
                label: "A - λI".to_string(),
                cells: difference,
            },
        ],
    }
}
