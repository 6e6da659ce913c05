use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use pyo3::prelude::*;
use pyo3::types::PyType;

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

/// Integer matrix exposed to Python as `Matrix`.
#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct MatrixInt {
    inner: MatrixGen<i64>,
}

/// Float matrix, produced by `Matrix.inverse`.
#[derive(Debug, Clone)]
#[pyclass(frozen, name = "MatrixFloat")]
pub struct MatrixFloat {
    inner: MatrixGen<f64>,
}

#[pymethods]
impl MatrixInt {
    #[new]
    pub fn new(lines: Vec<Vec<i64>>) -> PyResult<Self> {
        Ok(MatrixGen::from_list(lines)?.into())
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<i64>>) -> PyResult<Self> {
        MatrixInt::new(lines)
    }

    pub fn to_list(&self) -> Vec<Vec<i64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> MatrixInt {
        self.inner.transpose().into()
    }

    pub fn __add__(&self, rhs: &MatrixInt) -> PyResult<MatrixInt> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &MatrixInt) -> PyResult<MatrixInt> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &MatrixInt) -> PyResult<MatrixInt> {
        Ok((&self.inner * &rhs.inner)?.into())
    }

    pub fn __truediv__(&self, rhs: &MatrixInt) -> PyResult<MatrixInt> {
        Ok((&self.inner / &rhs.inner)?.into())
    }

    pub fn inverse(&self) -> PyResult<MatrixFloat> {
        Ok(self.inner.inverse()?.into())
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({:?})", self.inner.to_list())
    }
}

#[pymethods]
impl MatrixFloat {
    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    /// Truncates every cell toward zero.
    pub fn to_int(&self) -> PyResult<MatrixInt> {
        Ok(self.inner.truncate_to_int()?.into())
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("MatrixFloat({:?})", self.inner.to_list())
    }
}

impl From<MatrixGen<i64>> for MatrixInt {
    fn from(inner: MatrixGen<i64>) -> Self {
        MatrixInt { inner }
    }
}

impl From<MatrixGen<f64>> for MatrixFloat {
    fn from(inner: MatrixGen<f64>) -> Self {
        MatrixFloat { inner }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_int_methods() {
        let a = MatrixInt::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = MatrixInt::new(vec![vec![5, 6], vec![7, 8]]).unwrap();

        assert_eq!((a.rows(), a.cols()), (2, 2));
        assert_eq!(a.__add__(&b).unwrap().to_list(), vec![vec![6, 8], vec![10, 12]]);
        assert_eq!(a.__sub__(&b).unwrap().to_list(), vec![vec![-4, -4], vec![-4, -4]]);
        assert_eq!(a.__mul__(&b).unwrap().to_list(), vec![vec![19, 22], vec![43, 50]]);
        assert_eq!(b.__truediv__(&a).unwrap().to_list(), vec![vec![5, 3], vec![2, 2]]);
        assert_eq!(a.T().to_list(), vec![vec![1, 3], vec![2, 4]]);
        assert_eq!(a.__str__(), "1 2\n3 4\n");
        assert_eq!(a.__repr__(), "Matrix([[1, 2], [3, 4]])");
    }

    #[test]
    fn test_matrix_int_errors() {
        assert!(MatrixInt::new(vec![vec![1, 2], vec![3]]).is_err());

        let a = MatrixInt::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let row = MatrixInt::new(vec![vec![1, 2]]).unwrap();
        let zeros = MatrixInt::new(vec![vec![0, 1], vec![1, 1]]).unwrap();
        let singular = MatrixInt::new(vec![vec![1, 2], vec![2, 4]]).unwrap();

        assert!(a.__add__(&row).is_err());
        assert!(a.__mul__(&row).is_err());
        assert!(a.__truediv__(&zeros).is_err());
        assert!(row.inverse().is_err());
        assert!(singular.inverse().is_err());
    }

    #[test]
    fn test_matrix_inverse_methods() {
        let a = MatrixInt::new(vec![vec![2, 0], vec![0, 4]]).unwrap();
        let inv = a.inverse().unwrap();

        assert_eq!((inv.rows(), inv.cols()), (2, 2));
        assert_eq!(inv.to_list(), vec![vec![0.5, 0.0], vec![0.0, 0.25]]);
        assert_eq!(inv.__str__(), "0.5 0\n0 0.25\n");
        assert_eq!(inv.to_int().unwrap().to_list(), vec![vec![0, 0], vec![0, 0]]);
    }
}
