use pyo3::exceptions::{PyOverflowError, PyValueError, PyZeroDivisionError};
use pyo3::PyErr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("cannot {op} a {left:?} matrix with a {right:?} matrix")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is singular: no non-zero pivot in column {column}")]
    Singular { column: usize },
    #[error("division by zero at ({row}, {col})")]
    DivisionByZero { row: usize, col: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("quotient at ({row}, {col}) overflows the element type")]
    Overflow { row: usize, col: usize },
    #[error("element at ({row}, {col}) is not representable in the target type")]
    NotRepresentable { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    #[error("denominator cannot be zero")]
    ZeroDenominator,
    #[error("division by a zero fraction")]
    DivisionByZero,
    #[error("reduced fraction does not fit in i64")]
    Overflow,
    #[error("invalid fraction {0:?}")]
    Parse(String),
}

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::DivisionByZero { .. } => PyZeroDivisionError::new_err(error.to_string()),
            MatrixError::Overflow { .. } => PyOverflowError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

impl From<FractionError> for PyErr {
    fn from(error: FractionError) -> PyErr {
        match error {
            FractionError::ZeroDenominator | FractionError::DivisionByZero => {
                PyZeroDivisionError::new_err(error.to_string())
            }
            FractionError::Overflow => PyOverflowError::new_err(error.to_string()),
            FractionError::Parse(_) => PyValueError::new_err(error.to_string()),
        }
    }
}
