//! Python FFI bindings via PyO3.
//!
//! Exposes the classifier and answer validation to Python. Persistence, codes
//! and reports stay on the Rust side.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from mindtrx_core import classify, raw_scores, Classification
//!
//! answers = {q: 3 for q in range(1, 28)}
//! comm_raw, trust_raw = raw_scores(answers)   # (42, 39)
//! c = classify(comm_raw, trust_raw)
//! print(c.quadrant)   # "Integrated Alchemist"
//! print(c.position)   # "Grounded Mystic"
//! print(c.feedback)   # one-line summary
//! ```

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::answers::AnswerSet;
use crate::scoring::{
    classify as rust_classify, Classification as RustClassification, Position, Quadrant,
};

// ── Classification ───────────────────────────────────────────────────────────

/// Result of classifying a pair of raw scores.
///
/// Labels are returned as display strings, e.g. "Skeptical Explorer".
#[pyclass(name = "Classification", frozen)]
#[derive(Clone)]
pub struct PyClassification {
    inner: RustClassification,
}

#[pymethods]
impl PyClassification {
    /// Normalized communication score (0–50 for in-range input).
    #[getter]
    pub fn comm50(&self) -> i32 {
        self.inner.comm50
    }
    /// Normalized trust score (0–50 for in-range input).
    #[getter]
    pub fn trust50(&self) -> i32 {
        self.inner.trust50
    }
    /// Quadrant label.
    #[getter]
    pub fn quadrant(&self) -> &'static str {
        self.inner.quadrant.label()
    }
    /// Position label.
    #[getter]
    pub fn position(&self) -> &'static str {
        self.inner.position.label()
    }
    /// Communication band: "lowLow", "lowHigh", "highLow" or "highHigh".
    #[getter]
    pub fn comm_band(&self) -> &'static str {
        self.inner.comm_band.label()
    }
    /// Trust band: "lowLow", "lowHigh", "highLow" or "highHigh".
    #[getter]
    pub fn trust_band(&self) -> &'static str {
        self.inner.trust_band.label()
    }
    /// Raw communication score as given.
    #[getter]
    pub fn comm_raw(&self) -> i32 {
        self.inner.comm_raw
    }
    /// Raw trust score as given.
    #[getter]
    pub fn trust_raw(&self) -> i32 {
        self.inner.trust_raw
    }
    /// One-line summary of the position.
    #[getter]
    pub fn feedback(&self) -> &'static str {
        self.inner.position.feedback().short
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "Classification(comm50={}, trust50={}, quadrant={:?}, position={:?})",
            self.inner.comm50,
            self.inner.trust50,
            self.inner.quadrant.label(),
            self.inner.position.label(),
        )
    }

    /// Python equality comparison.
    pub fn __eq__(&self, other: &PyClassification) -> bool {
        self.inner == other.inner
    }
}

// ── Functions ────────────────────────────────────────────────────────────────

/// Classify raw communication and trust scores.
///
/// Args:
///     comm_raw:  sum of answers 1–14 (14–70)
///     trust_raw: sum of answers 15–27 (13–65)
#[pyfunction]
#[pyo3(name = "classify")]
pub fn py_classify(comm_raw: i32, trust_raw: i32) -> PyClassification {
    PyClassification {
        inner: rust_classify(comm_raw, trust_raw),
    }
}

/// Sum a complete answer mapping into `(comm_raw, trust_raw)`.
///
/// Args:
///     answers: dict of question id (1–27) to rating (1–5)
///
/// Raises:
///     ValueError: on an unknown question, an out-of-range rating or a
///     missing answer.
#[pyfunction]
pub fn raw_scores(answers: HashMap<u8, u8>) -> PyResult<(i32, i32)> {
    let set = AnswerSet::from_pairs(answers).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let raw = set
        .require_complete()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((raw.comm_raw, raw.trust_raw))
}

// ── Module entry point ───────────────────────────────────────────────────────

/// MINDTRX IMII scoring bindings.
#[pymodule]
pub fn mindtrx_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyClassification>()?;
    m.add_function(wrap_pyfunction!(py_classify, m)?)?;
    m.add_function(wrap_pyfunction!(raw_scores, m)?)?;
    m.add(
        "QUADRANTS",
        Quadrant::ALL.iter().map(|q| q.label()).collect::<Vec<_>>(),
    )?;
    m.add(
        "POSITIONS",
        Position::ALL.iter().map(|p| p.label()).collect::<Vec<_>>(),
    )?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
