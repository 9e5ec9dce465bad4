use crate::matrix::error::MatrixError;
use std::ops;

/// Pivot magnitude below which a value is treated as zero. Shared by
/// `determinant`, `inverse`, `rank` and `is_symmetric` so a single constant
/// governs every singularity/degeneracy decision.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Dense matrix of f64 values, row-major flat storage (`row * cols + col`).
///
/// Dimensions are fixed at construction; every operation returns a fresh
/// matrix and leaves its operands untouched. Elimination algorithms work on
/// scratch copies.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixF64 {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<f64>,
}

impl MatrixF64 {
    /// A `rows x cols` matrix with every entry set to `fill`.
    /// Zero dimensions are rejected.
    pub fn filled(rows: usize, cols: usize, fill: f64) -> Result<MatrixF64, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(MatrixF64 {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        })
    }

    /// A `rows x cols` matrix of zeros.
    pub fn new(rows: usize, cols: usize) -> Result<MatrixF64, MatrixError> {
        MatrixF64::filled(rows, cols, 0.0)
    }

    /// Reconstructs a matrix from a flat row-major sequence plus explicit
    /// dimensions, the shape operands arrive in at the foreign boundary.
    pub fn from_flat(cells: Vec<f64>, rows: usize, cols: usize) -> Result<MatrixF64, MatrixError> {
        if rows == 0 || cols == 0 || cells.len() != rows * cols {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(MatrixF64 { rows, cols, cells })
    }

    /// Dimensions are inferred from the nested data; empty input yields a
    /// 0x0 matrix. Ragged input is a programming error.
    pub fn from_list(lines: Vec<Vec<f64>>) -> MatrixF64 {
        let rows = lines.len();
        let cols = lines.first().map(|line| line.len()).unwrap_or(0);
        assert!(lines.iter().all(|line| line.len() == cols));

        MatrixF64 {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.cols).map(|line| line.into()).collect()
    }

    pub fn into_flat(self) -> Vec<f64> {
        self.cells
    }

    pub fn identity(n: usize) -> MatrixF64 {
        MatrixF64 {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { 1.0 } else { 0.0 }))
                .collect(),
        }
    }

    /// Bounds-checked element read.
    pub fn at(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.get(row, col))
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    #[inline(always)]
    fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    fn require_square(&self) -> Result<usize, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.rows)
    }

    fn require_same_shape(&self, rhs: &MatrixF64) -> Result<(), MatrixError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        Ok(())
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// Row index in `[from, rows)` holding the largest magnitude in `col`.
    fn pivot_row(&self, col: usize, from: usize) -> usize {
        let mut pivot = from;
        for r in from + 1..self.rows {
            if self.get(r, col).abs() > self.get(pivot, col).abs() {
                pivot = r;
            }
        }
        pivot
    }

    /// Element-wise product; shapes must match.
    pub fn hadamard(&self, rhs: &MatrixF64) -> Result<MatrixF64, MatrixError> {
        self.require_same_shape(rhs)?;
        Ok(MatrixF64 {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a * b)
                .collect(),
        })
    }

    pub fn transpose(&self) -> MatrixF64 {
        MatrixF64 {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.get(r, c)))
                .collect(),
        }
    }

    /// Gaussian elimination with partial pivoting on a scratch copy. A pivot
    /// whose magnitude falls below `PIVOT_EPSILON` makes the determinant
    /// exactly 0.0 rather than an error.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        let n = self.require_square()?;

        match n {
            1 => return Ok(self.cells[0]),
            2 => return Ok(self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)),
            _ => {}
        }

        let mut lu = self.clone();
        let mut det = 1.0;

        for i in 0..n {
            let pivot = lu.pivot_row(i, i);
            if lu.get(pivot, i).abs() < PIVOT_EPSILON {
                return Ok(0.0);
            }
            if pivot != i {
                lu.swap_rows(i, pivot);
                det = -det;
            }

            det *= lu.get(i, i);

            for r in i + 1..n {
                let factor = lu.get(r, i) / lu.get(i, i);
                for k in i..n {
                    lu.cells[r * n + k] -= factor * lu.get(i, k);
                }
            }
        }

        Ok(det)
    }

    /// Gauss-Jordan elimination with partial pivoting on an augmented
    /// `[A | I]`; the right half of the reduced matrix is the inverse.
    pub fn inverse(&self) -> Result<MatrixF64, MatrixError> {
        let n = self.require_square()?;

        let det = self.determinant()?;
        if det.abs() < PIVOT_EPSILON {
            return Err(MatrixError::SingularMatrix);
        }

        let width = 2 * n;
        let mut aug = MatrixF64 {
            rows: n,
            cols: width,
            cells: vec![0.0; n * width],
        };
        for i in 0..n {
            for j in 0..n {
                aug.cells[i * width + j] = self.get(i, j);
            }
            aug.cells[i * width + n + i] = 1.0;
        }

        for i in 0..n {
            let pivot = aug.pivot_row(i, i);
            if pivot != i {
                aug.swap_rows(i, pivot);
            }

            let pivot_val = aug.get(i, i);
            for k in 0..width {
                aug.cells[i * width + k] /= pivot_val;
            }

            for r in 0..n {
                if r == i {
                    continue;
                }
                let factor = aug.get(r, i);
                for k in 0..width {
                    aug.cells[r * width + k] -= factor * aug.get(i, k);
                }
            }
        }

        let aug = &aug;
        Ok(MatrixF64 {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (n..width).map(move |j| aug.get(i, j)))
                .collect(),
        })
    }

    pub fn trace(&self) -> Result<f64, MatrixError> {
        let n = self.require_square()?;
        Ok((0..n).map(|i| self.get(i, i)).sum())
    }

    /// Forward elimination counting independent pivots; columns whose best
    /// remaining entry falls below `PIVOT_EPSILON` contribute no pivot.
    pub fn rank(&self) -> usize {
        let mut m = self.clone();
        let mut rank = 0;
        let mut row = 0;

        for col in 0..m.cols {
            if row >= m.rows {
                break;
            }

            let pivot = m.pivot_row(col, row);
            if m.get(pivot, col).abs() < PIVOT_EPSILON {
                continue;
            }
            if pivot != row {
                m.swap_rows(row, pivot);
            }

            for r in row + 1..m.rows {
                let factor = m.get(r, col) / m.get(row, col);
                for k in col..m.cols {
                    m.cells[r * m.cols + k] -= factor * m.get(row, k);
                }
            }

            rank += 1;
            row += 1;
        }

        rank
    }

    /// False for non-square input; otherwise tolerance-based comparison of
    /// each entry against its mirror.
    pub fn is_symmetric(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        (0..self.rows).all(|i| {
            (0..i).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= PIVOT_EPSILON)
        })
    }
}

impl ops::Add<&MatrixF64> for &MatrixF64 {
    type Output = Result<MatrixF64, MatrixError>;

    fn add(self, rhs: &MatrixF64) -> Result<MatrixF64, MatrixError> {
        self.require_same_shape(rhs)?;

        Ok(MatrixF64 {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }
}

impl ops::Sub<&MatrixF64> for &MatrixF64 {
    type Output = Result<MatrixF64, MatrixError>;

    fn sub(self, rhs: &MatrixF64) -> Result<MatrixF64, MatrixError> {
        self.require_same_shape(rhs)?;

        Ok(MatrixF64 {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a - b)
                .collect(),
        })
    }
}

impl ops::Mul<&MatrixF64> for &MatrixF64 {
    type Output = Result<MatrixF64, MatrixError>;

    fn mul(self, rhs: &MatrixF64) -> Result<MatrixF64, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        Ok(MatrixF64 {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.get(i, k) * rhs.get(k, j)).sum())
                })
                .collect(),
        })
    }
}

impl ops::Mul<f64> for &MatrixF64 {
    type Output = MatrixF64;

    fn mul(self, scalar: f64) -> MatrixF64 {
        MatrixF64 {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|a| a * scalar).collect(),
        }
    }
}

impl ops::Mul<&MatrixF64> for f64 {
    type Output = MatrixF64;

    fn mul(self, rhs: &MatrixF64) -> MatrixF64 {
        rhs * self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
