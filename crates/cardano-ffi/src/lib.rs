// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Cardano Kernel PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the Rust eigenvalue solver.
//!
//! Exposes `RustEigenSolver`, `SolverConfig`, `EigenSolution`, and the
//! per-keystroke `accepts_partial_input` filter to a Python front end.
//!
//! # FFI Safety
//!
//! - Validation failures surface as `ValueError` carrying the kernel's
//!   message verbatim; nothing panics across the boundary.
//! - All config validated before storage (`SolverConfig::validate()`).
//! - Solutions are plain owned values; no Rust references escape.
//!
//! Install: `pip install -e crates/cardano-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from cardano_kernel import RustEigenSolver
//!
//! solver = RustEigenSolver()
//! sol = solver.solve([["2", "0", "0"], ["0", "3", "0"], ["0", "0", "5"]])
//! sol.eigenvalues  # [5.0, 2.0, 3.0]
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use cardano_core::{CubicEigenSolver, EigenSolution, RootRegime};
use cardano_types::{cell, DerivationStep, SolverConfig};

// ─── PySolverConfig ─────────────────────────────────────────────────

/// Python-visible solver configuration.
#[pyclass(name = "SolverConfig")]
#[derive(Clone)]
struct PySolverConfig {
    inner: SolverConfig,
}

#[pymethods]
impl PySolverConfig {
    #[new]
    #[pyo3(signature = (degenerate_tolerance = 1e-10, decimals = 4, clamp_acos = true))]
    fn new(degenerate_tolerance: f64, decimals: u32, clamp_acos: bool) -> PyResult<Self> {
        let config = SolverConfig {
            degenerate_tolerance,
            decimals,
            clamp_acos,
        };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config =
            SolverConfig::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner: config })
    }

    #[getter]
    fn degenerate_tolerance(&self) -> f64 {
        self.inner.degenerate_tolerance
    }

    #[getter]
    fn decimals(&self) -> u32 {
        self.inner.decimals
    }

    #[getter]
    fn clamp_acos(&self) -> bool {
        self.inner.clamp_acos
    }

    fn __repr__(&self) -> String {
        format!(
            "SolverConfig(degenerate_tolerance={:e}, decimals={}, clamp_acos={})",
            self.inner.degenerate_tolerance, self.inner.decimals, self.inner.clamp_acos
        )
    }
}

// ─── PyEigenSolution ────────────────────────────────────────────────

/// Python-visible result of one solve.
#[pyclass(name = "EigenSolution")]
#[derive(Clone)]
struct PyEigenSolution {
    inner: EigenSolution,
}

#[pymethods]
impl PyEigenSolution {
    #[getter]
    fn eigenvalues(&self) -> Vec<f64> {
        self.inner.eigenvalues.values().to_vec()
    }

    /// `(p, q, r)` of λ³ + pλ² + qλ + r = 0.
    #[getter]
    fn coefficients(&self) -> (f64, f64, f64) {
        let c = self.inner.coefficients;
        (c.p, c.q, c.r)
    }

    #[getter]
    fn discriminant(&self) -> f64 {
        self.inner.depressed.disc
    }

    #[getter]
    fn regime(&self) -> &'static str {
        self.inner.regime.name()
    }

    /// Imaginary magnitude of the complex pair, or None when all roots
    /// are real.
    #[getter]
    fn imaginary(&self) -> Option<f64> {
        match self.inner.regime {
            RootRegime::OneReal { imaginary } => Some(imaginary),
            _ => None,
        }
    }

    /// `(title, caption)` for each step, in order.
    fn step_headings(&self) -> Vec<(&'static str, &'static str)> {
        self.inner
            .steps
            .iter()
            .map(|s| (s.title(), s.caption()))
            .collect()
    }

    /// Characteristic equation text, e.g. `λ³ + -10λ² + 31λ + -30 = 0`.
    fn equation(&self) -> Option<String> {
        self.inner.steps.iter().find_map(|s| match s {
            DerivationStep::CharacteristicEquation { full, .. } => Some(full.clone()),
            _ => None,
        })
    }

    /// Full step trace as JSON, tagged by `kind`.
    fn steps_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.steps).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("eigenvalues", self.eigenvalues())?;
        dict.set_item("coefficients", self.coefficients())?;
        dict.set_item("discriminant", self.discriminant())?;
        dict.set_item("regime", self.regime())?;
        dict.set_item("imaginary", self.imaginary())?;
        dict.set_item("equation", self.equation())?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        let [l1, l2, l3] = self.inner.eigenvalues.values();
        format!(
            "EigenSolution(λ1={l1}, λ2={l2}, λ3={l3}, regime={})",
            self.regime()
        )
    }
}

// ─── RustEigenSolver ────────────────────────────────────────────────

/// A matrix cell as sent from Python: text from a form, or a number.
#[derive(FromPyObject)]
enum PyCell {
    Text(String),
    Number(f64),
}

impl PyCell {
    fn into_text(self) -> String {
        match self {
            PyCell::Text(s) => s,
            PyCell::Number(v) => v.to_string(),
        }
    }
}

/// Closed-form 3×3 eigenvalue solver exposed to Python.
#[pyclass(name = "RustEigenSolver")]
struct PyEigenSolver {
    inner: CubicEigenSolver,
}

#[pymethods]
impl PyEigenSolver {
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PySolverConfig>) -> PyResult<Self> {
        let cfg = config.map(|c| c.inner).unwrap_or_default();
        let inner = CubicEigenSolver::new(cfg).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Solve a 3×3 matrix given as a list of 3 lists of 3 cells.
    ///
    /// Cells may be strings or numbers. Raises `ValueError` if the shape
    /// is wrong or any cell is not a finite number.
    fn solve(&self, cells: Vec<Vec<PyCell>>) -> PyResult<PyEigenSolution> {
        let rows: Vec<Vec<String>> = cells
            .into_iter()
            .map(|row| row.into_iter().map(PyCell::into_text).collect())
            .collect();
        let solution = self
            .inner
            .solve_rows(&rows)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyEigenSolution { inner: solution })
    }

    #[getter]
    fn config(&self) -> PySolverConfig {
        PySolverConfig {
            inner: self.inner.config().clone(),
        }
    }
}

/// Whether `value` is an acceptable in-progress edit of a numeric cell.
#[pyfunction]
fn accepts_partial_input(value: &str) -> bool {
    cell::accepts_partial_input(value)
}

// ─── Module ─────────────────────────────────────────────────────────

#[pymodule]
fn cardano_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolverConfig>()?;
    m.add_class::<PyEigenSolution>()?;
    m.add_class::<PyEigenSolver>()?;
    m.add_function(wrap_pyfunction!(accepts_partial_input, m)?)?;
    Ok(())
}
