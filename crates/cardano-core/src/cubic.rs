// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Depressed Cubic Root Regimes
// ─────────────────────────────────────────────────────────────────────
//! Closed-form roots of the characteristic cubic.
//!
//! The discriminant of the depressed cubic picks one of three regimes:
//! - `|disc| < tolerance` — a single repeated root.
//! - `disc > 0` — Cardano's formula with real cube roots.
//! - `disc < 0` — Viète's trigonometric form, three distinct real roots.
//!
//! In the `disc > 0` regime the true spectrum is one real root plus a
//! complex-conjugate pair. The second and third values keep the real-valued
//! expressions the calculator has always shown, and the dropped imaginary
//! magnitude is reported on [`RootRegime::OneReal`] instead.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use cardano_types::SolverConfig;

use crate::polynomial::{DepressedCubic, PolynomialCoefficients};

/// Which closed form produced the roots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "regime", rename_all = "snake_case")]
pub enum RootRegime {
    /// |disc| below tolerance: one root of multiplicity three.
    Repeated,
    /// disc > 0: one real root and a complex pair whose imaginary part has
    /// magnitude `imaginary`.
    OneReal { imaginary: f64 },
    /// disc < 0: three distinct real roots. `clamped` is set when the
    /// `acos` argument fell outside [-1, 1] and was clamped.
    ThreeReal { clamped: bool },
}

impl RootRegime {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Repeated => "repeated",
            Self::OneReal { .. } => "one_real",
            Self::ThreeReal { .. } => "three_real",
        }
    }
}

/// Unrounded roots in formula order, plus the regime that produced them.
pub fn solve_cubic(
    coeffs: &PolynomialCoefficients,
    depressed: &DepressedCubic,
    config: &SolverConfig,
) -> ([f64; 3], RootRegime) {
    let DepressedCubic { p1, q1, disc } = *depressed;
    let p = coeffs.p;

    if disc.abs() < config.degenerate_tolerance {
        let u = -(q1 / 2.0).cbrt();
        let root = u - p / 3.0;
        return ([root, root, root], RootRegime::Repeated);
    }

    if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        let u = (-q1 / 2.0 + sqrt_disc).cbrt();
        let v = (-q1 / 2.0 - sqrt_disc).cbrt();
        let half_sum = -(u + v) / 2.0 - p / 3.0;
        let spread = (u - v) * 3f64.sqrt() / 2.0;
        return (
            [u + v - p / 3.0, half_sum + spread, half_sum - spread],
            RootRegime::OneReal {
                imaginary: spread.abs(),
            },
        );
    }

    // disc < 0 forces p1 < 0, so both square roots below are of positives.
    let mut cos_arg = -q1 / (2.0 * (-p1 * p1 * p1 / 27.0).sqrt());
    let mut clamped = false;
    // NaN here means the coefficients overflowed, not that rounding
    // pushed the argument out of range; leave it for the caller to report.
    if config.clamp_acos && !cos_arg.is_nan() && !(-1.0..=1.0).contains(&cos_arg) {
        log::warn!("acos argument {cos_arg:e} outside [-1, 1], clamping");
        cos_arg = cos_arg.clamp(-1.0, 1.0);
        clamped = true;
    }
    let theta = cos_arg.acos();
    let r1 = 2.0 * (-p1 / 3.0).sqrt();

    (
        [
            r1 * (theta / 3.0).cos() - p / 3.0,
            r1 * ((theta + 2.0 * PI) / 3.0).cos() - p / 3.0,
            r1 * ((theta + 4.0 * PI) / 3.0).cos() - p / 3.0,
        ],
        RootRegime::ThreeReal { clamped },
    )
}
