use itertools::Itertools;
use num_traits::{CheckedDiv, One, ToPrimitive, Zero};

use crate::error::MatrixError;
use crate::matrix::inverter;
use crate::matrix::matrix::Matrix;
use std::fmt;
use std::ops;
use std::ops::{Add, Div, Mul, Sub};

pub trait GenElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + ToPrimitive
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> GenElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + ToPrimitive
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Dense row-major matrix. Never mutated once built: every operation
/// returns a new matrix.
///
/// Arithmetic happens in the element type. With `i64` cells, overflow
/// follows Rust's integer rules (panic in debug builds, wrap in release);
/// use `i128` or `num_bigint::BigInt` cells when products may not fit.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    type Inverse = MatrixGen<f64>;

    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.len());

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::Jagged {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    fn identity(n: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    fn inverse(&self) -> Result<MatrixGen<f64>, MatrixError> {
        inverter::invert(self)
    }

    fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

impl<T> MatrixGen<T> {
    /// Caller guarantees `cells.len() == rows * cols`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        MatrixGen { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn map<U, F>(&self, f: F) -> MatrixGen<U>
    where
        F: FnMut(&T) -> U,
    {
        MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    fn check_same_shape<U>(&self, rhs: &MatrixGen<U>, op: &'static str) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(())
    }

    fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl<T: GenElement> MatrixGen<T> {
    /// Widens every cell to `f64`.
    pub fn to_float(&self) -> Result<MatrixGen<f64>, MatrixError> {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(idx, x)| {
                x.to_f64().ok_or_else(|| {
                    let (row, col) = self.position(idx);
                    MatrixError::NotRepresentable { row, col }
                })
            })
            .collect::<Result<Vec<f64>, MatrixError>>()?;

        Ok(MatrixGen::from_cells(self.rows, self.cols, cells))
    }
}

impl MatrixGen<f64> {
    /// Drops the fractional part of every cell (truncation toward zero).
    pub fn truncate_to_int(&self) -> Result<MatrixGen<i64>, MatrixError> {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(idx, x)| {
                x.to_i64().ok_or_else(|| {
                    let (row, col) = self.position(idx);
                    MatrixError::NotRepresentable { row, col }
                })
            })
            .collect::<Result<Vec<i64>, MatrixError>>()?;

        Ok(MatrixGen::from_cells(self.rows, self.cols, cells))
    }
}

impl<T: GenElement> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>, MatrixError>;

    fn add(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>, MatrixError> {
        self.check_same_shape(rhs, "add")?;

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.to_owned() + b.to_owned())
                .collect(),
        })
    }
}

impl<T: GenElement> ops::Sub<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>, MatrixError>;

    fn sub(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>, MatrixError> {
        self.check_same_shape(rhs, "subtract")?;

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.to_owned() - b.to_owned())
                .collect(),
        })
    }
}

/// Matrix product.
impl<T: GenElement> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>, MatrixError>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::ShapeMismatch {
                op: "multiply",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }
}

/// Element-wise division. Any zero divisor, or a quotient the element type
/// cannot hold (`i64::MIN / -1`), fails the whole operation.
impl<T: GenElement + CheckedDiv> ops::Div<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>, MatrixError>;

    fn div(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>, MatrixError> {
        self.check_same_shape(rhs, "divide")?;

        if let Some(idx) = rhs.cells.iter().position(|x| x.is_zero()) {
            let (row, col) = rhs.position(idx);
            return Err(MatrixError::DivisionByZero { row, col });
        }

        let cells = self
            .cells
            .iter()
            .zip(rhs.cells.iter())
            .enumerate()
            .map(|(idx, (a, b))| {
                a.checked_div(b).ok_or_else(|| {
                    let (row, col) = self.position(idx);
                    MatrixError::Overflow { row, col }
                })
            })
            .collect::<Result<Vec<T>, MatrixError>>()?;

        Ok(MatrixGen::from_cells(self.rows, self.cols, cells))
    }
}

impl<T: fmt::Display> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            writeln!(f, "{}", self.row(r).iter().join(" "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
