//! # Python Bindings
//!
//! PyO3 bindings for Thermion, exposing the conversion function and the
//! observable form to Python.
//!
//! ## Python API
//!
//! ```python
//! from thermion import ConverterForm, convert, unit_labels
//!
//! # One-shot conversion; units by label, case-insensitive
//! convert(212.0, "Fahrenheit", "Celsius")   # 100.0
//! convert(0.0, "c", "k")                    # 273.15
//!
//! # Stateful form
//! form = ConverterForm()
//! form.value = 32.0
//! form.to_unit = "Kelvin"
//! form.output                               # 273.15
//! form.set_value_text("98.6")
//!
//! unit_labels()                             # ['Fahrenheit', 'Celsius', 'Kelvin']
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::config::FormConfig;
use crate::core::unit::TemperatureUnit;
use crate::engine::ConverterForm as RustConverterForm;

fn parse_unit(label: &str) -> PyResult<TemperatureUnit> {
    TemperatureUnit::from_str(label)
        .ok_or_else(|| PyValueError::new_err(format!("unknown temperature unit: {label:?}")))
}

/// One-shot conversion between two unit labels
#[pyfunction]
fn convert(value: f64, from_unit: &str, to_unit: &str) -> PyResult<f64> {
    Ok(crate::core::convert::convert(
        value,
        parse_unit(from_unit)?,
        parse_unit(to_unit)?,
    ))
}

/// Recognized unit labels, in picker order
#[pyfunction]
fn unit_labels() -> Vec<&'static str> {
    TemperatureUnit::ALL.iter().map(|u| u.as_str()).collect()
}

/// Python wrapper for the observable form
#[pyclass(name = "ConverterForm")]
pub struct PyConverterForm {
    inner: RustConverterForm,
}

#[pymethods]
impl PyConverterForm {
    #[new]
    fn new() -> Self {
        Self {
            inner: RustConverterForm::new(FormConfig::default()),
        }
    }

    /// Current input magnitude
    #[getter]
    fn value(&self) -> f64 {
        self.inner.value()
    }

    #[setter]
    fn set_value(&mut self, value: f64) {
        self.inner.set_value(value);
    }

    /// Source unit label
    #[getter]
    fn from_unit(&self) -> &'static str {
        self.inner.from_unit().as_str()
    }

    #[setter]
    fn set_from_unit(&mut self, label: &str) -> PyResult<()> {
        self.inner.set_from(parse_unit(label)?);
        Ok(())
    }

    /// Destination unit label
    #[getter]
    fn to_unit(&self) -> &'static str {
        self.inner.to_unit().as_str()
    }

    #[setter]
    fn set_to_unit(&mut self, label: &str) -> PyResult<()> {
        self.inner.set_to(parse_unit(label)?);
        Ok(())
    }

    /// Computed output magnitude
    #[getter]
    fn output(&self) -> f64 {
        self.inner.output()
    }

    /// Output rendered through the configured formatter
    #[getter]
    fn output_text(&self) -> String {
        self.inner.output_text()
    }

    /// Set the input from text; raises ValueError on malformed input
    fn set_value_text(&mut self, text: &str) -> PyResult<f64> {
        self.inner
            .set_value_text(text)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "ConverterForm(value={}, from_unit='{}', to_unit='{}', output={})",
            self.inner.value(),
            self.inner.from_unit(),
            self.inner.to_unit(),
            self.inner.output()
        )
    }
}

#[pymodule]
fn thermion(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyConverterForm>()?;
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    m.add_function(wrap_pyfunction!(unit_labels, m)?)?;
    Ok(())
}
