//! Python bindings for the Var2 grammar.
//!
//! Exposes the compiled artifact and the binding verification to Python as
//! the `_var2` extension module. `language()` hands back the raw artifact
//! text (the Python-side analogue of the grammar handle); `verify()` raises
//! when the artifact fails to construct a valid language.

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

/// The compiled Var2 grammar artifact, verbatim.
#[pyfunction]
fn language() -> &'static str {
    var2_grammar::GRAMMAR_JSON
}

/// The name of the language the artifact describes.
#[pyfunction]
fn language_name() -> &'static str {
    var2_grammar::LANGUAGE_NAME
}

/// Checks that the exported grammar loads into a valid language.
///
/// Raises `RuntimeError` with the load diagnostic otherwise.
#[pyfunction]
fn verify() -> PyResult<()> {
    var2_grammar::verify_grammar_loads().map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

#[pymodule]
fn _var2(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(language, m)?)?;
    m.add_function(wrap_pyfunction!(language_name, m)?)?;
    m.add_function(wrap_pyfunction!(verify, m)?)?;
    Ok(())
}
