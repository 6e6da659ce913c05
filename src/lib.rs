use pyo3::prelude::*;

pub mod error;
pub mod matrix {
    pub mod inverter;
    pub mod matrix;
    pub mod matrix_gen;
    pub mod matrix_py;
}
pub mod rings {
    pub mod fraction;
}

pub mod utils;

/// A Python module implemented in Rust.
#[pymodule]
fn rust_matrix_ops(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::MatrixInt>()?;
    m.add_class::<matrix::matrix_py::MatrixFloat>()?;
    m.add_class::<rings::fraction::Fraction>()?;
    m.add_function(wrap_pyfunction!(utils::gcd, m)?)?;
    Ok(())
}
