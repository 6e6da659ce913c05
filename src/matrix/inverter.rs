//! Gauss-Jordan inversion with partial pivoting.
//!
//! The input is copied into an `n x 2n` buffer `[A | I]` of `f64`. Each
//! column picks the largest remaining pivot, normalizes its row and clears
//! the column in every other row. Once the left half is the identity the
//! right half holds `A^-1`.
//!
//! A candidate pivot counts as zero when it is within round-off of the
//! values that produced it: every row carries the largest magnitude that
//! went into its left half, and anything below
//! `PIVOT_TOLERANCE_FACTOR * n * f64::EPSILON` times that scale is residue.

use crate::error::MatrixError;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};

/// Slack on top of the `n * EPSILON` round-off bound.
pub const PIVOT_TOLERANCE_FACTOR: f64 = 2.0;

/// Working buffer of one inversion, row-major.
struct Augmented {
    n: usize,
    cells: Vec<f64>,
    // Largest magnitude accumulated into each row's left half
    scale: Vec<f64>,
}

impl Augmented {
    fn new(source: &MatrixGen<f64>) -> Self {
        let n = source.rows();
        let width = 2 * n;
        let mut cells = vec![0.0; n * width];
        let mut scale = vec![0.0; n];

        for r in 0..n {
            cells[r * width..r * width + n].copy_from_slice(source.row(r));
            cells[r * width + n + r] = 1.0;
            scale[r] = source.row(r).iter().fold(0.0, |acc: f64, x| acc.max(x.abs()));
        }

        Augmented { n, cells, scale }
    }

    #[inline(always)]
    fn width(&self) -> usize {
        2 * self.n
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.width() + col]
    }

    fn tolerance(&self, row: usize) -> f64 {
        PIVOT_TOLERANCE_FACTOR * self.n as f64 * f64::EPSILON * self.scale[row]
    }

    /// Row in `col..n` with the largest usable magnitude in `col`, first one
    /// on ties. `None` when every candidate is zero up to round-off.
    fn pivot_row(&self, col: usize) -> Option<(usize, f64)> {
        let mut best = None;

        for r in col..self.n {
            let candidate = self.at(r, col).abs();
            // NaN never compares greater, so it is never usable
            if !(candidate > self.tolerance(r)) {
                continue;
            }
            match best {
                Some((_, best_abs)) if candidate <= best_abs => {}
                _ => best = Some((r, candidate)),
            }
        }

        best
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        let width = self.width();
        for k in 0..width {
            self.cells.swap(a * width + k, b * width + k);
        }
        self.scale.swap(a, b);
    }

    fn normalize_row(&mut self, row: usize) {
        let width = self.width();
        let pivot = self.at(row, row);
        for x in &mut self.cells[row * width..(row + 1) * width] {
            *x /= pivot;
        }
        self.scale[row] /= pivot.abs();
    }

    fn eliminate(&mut self, pivot: usize) {
        let width = self.width();
        for r in 0..self.n {
            if r == pivot {
                continue;
            }

            let factor = self.at(r, pivot);
            for k in 0..width {
                let p = self.cells[pivot * width + k];
                self.cells[r * width + k] -= factor * p;
            }
            self.scale[r] = self.scale[r].max(factor.abs() * self.scale[pivot]);
        }
    }

    fn into_inverse(self) -> MatrixGen<f64> {
        let n = self.n;
        let width = self.width();
        let cells = self
            .cells
            .chunks(width.max(1))
            .take(n)
            .flat_map(|row| row[n..].iter().copied())
            .collect();

        MatrixGen::from_cells(n, n, cells)
    }
}

pub fn invert<T: GenElement>(matrix: &MatrixGen<T>) -> Result<MatrixGen<f64>, MatrixError> {
    if !matrix.is_square() {
        return Err(MatrixError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }

    let n = matrix.rows();
    let mut aug = Augmented::new(&matrix.to_float()?);
    log::debug!("inverting {}x{} matrix", n, n);

    for col in 0..n {
        let Some((pivot, magnitude)) = aug.pivot_row(col) else {
            log::debug!("column {}: no non-zero pivot, matrix is singular", col);
            return Err(MatrixError::Singular { column: col });
        };

        if pivot != col {
            log::trace!(
                "column {}: swapping rows {} and {} (pivot {:e})",
                col,
                col,
                pivot,
                magnitude
            );
            aug.swap_rows(col, pivot);
        }

        aug.normalize_row(col);
        aug.eliminate(col);
    }

    log::debug!("inverted {}x{} matrix", n, n);
    Ok(aug.into_inverse())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
