use pyo3::prelude::*;

pub mod matrix {
    pub mod error;
    pub mod matrix_f64;
}

pub mod ffi;

/// A Python module implemented in Rust.
#[pymodule]
fn rust_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::add, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::subtract, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::multiply, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::scalar_multiply, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::transpose, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::determinant, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::inverse, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::trace, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::rank, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::is_symmetric, m)?)?;
    Ok(())
}
