// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Cardano Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{CardanoError, CardanoResult};

/// Largest rounding precision the solver accepts.
///
/// Exact half-way detection scales by 5^decimals in 128-bit integers.
pub const MAX_DECIMALS: u32 = 15;

/// Runtime configuration for the cubic eigenvalue solver.
///
/// The defaults reproduce the reference calculator output exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Absolute threshold on |disc| below which the cubic is treated as
    /// having a single repeated root.
    /// Default: 1e-10.
    pub degenerate_tolerance: f64,

    /// Decimal places each eigenvalue is rounded to.
    /// Default: 4.
    pub decimals: u32,

    /// Clamp the Viète `acos` argument into [-1, 1].
    /// Default: true. Without it, rounding noise near the regime boundary
    /// turns the argument into NaN.
    pub clamp_acos: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            degenerate_tolerance: 1e-10,
            decimals: 4,
            clamp_acos: true,
        }
    }
}

impl SolverConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> CardanoResult<()> {
        if !self.degenerate_tolerance.is_finite() || self.degenerate_tolerance < 0.0 {
            return Err(CardanoError::Config(format!(
                "degenerate_tolerance must be finite and >= 0, got {}",
                self.degenerate_tolerance
            )));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(CardanoError::Config(format!(
                "decimals must be <= {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CardanoResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CardanoError::Config(format!("JSON parse error: {e}")))
    }
}
