//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{Result, StudyPerfError};
use serde::{Deserialize, Serialize};

/// Relative pivot threshold below which a Cholesky factor is treated as
/// rank-deficient.
pub const RANK_TOLERANCE: f64 = 1e-10;

/// A 2D matrix of floating-point values (row-major storage).
///
/// # Examples
///
/// ```
/// use studyperf::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(StudyPerfError::length_mismatch(
                "Matrix::from_vec",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Returns a row as a slice.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if inner dimensions don't match.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(StudyPerfError::length_mismatch(
                "Matrix::matmul",
                self.cols,
                other.rows,
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the vector length doesn't match the column count.
    pub fn matvec(&self, vec: &Vector<f64>) -> Result<Vector<f64>> {
        if self.cols != vec.len() {
            return Err(StudyPerfError::length_mismatch(
                "Matrix::matvec",
                self.cols,
                vec.len(),
            ));
        }

        let result: Vec<f64> = (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(vec.as_slice())
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect();

        Ok(Vector::from_vec(result))
    }

    /// Solves the linear system Ax = b using Cholesky decomposition.
    ///
    /// The matrix must be symmetric positive definite. A pivot that falls
    /// to `RANK_TOLERANCE` times its original diagonal entry (or below) means
    /// the columns of the matrix that produced `A = XᵀX` are linearly
    /// dependent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the matrix is not square or `b` has the
    /// wrong length, and `DegenerateInput` if the matrix is singular or not
    /// positive definite.
    pub fn cholesky_solve(&self, b: &Vector<f64>) -> Result<Vector<f64>> {
        if self.rows != self.cols {
            return Err(StudyPerfError::invalid(
                "cholesky_solve",
                format!("matrix must be square, got {}x{}", self.rows, self.cols),
            ));
        }
        if self.rows != b.len() {
            return Err(StudyPerfError::length_mismatch(
                "cholesky_solve",
                self.rows,
                b.len(),
            ));
        }

        let n = self.rows;

        // A = L * L^T
        let mut l = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;

                if i == j {
                    for k in 0..j {
                        sum += l[j * n + k] * l[j * n + k];
                    }
                    let original = self.get(j, j);
                    let diag = original - sum;
                    if diag.is_nan() || diag <= RANK_TOLERANCE * original.abs() {
                        return Err(StudyPerfError::degenerate(
                            "cholesky_solve",
                            format!(
                                "matrix is singular or not positive definite \
                                 (pivot {j} = {diag:e}, diagonal = {original:e})"
                            ),
                        ));
                    }
                    l[j * n + j] = diag.sqrt();
                } else {
                    for k in 0..j {
                        sum += l[i * n + k] * l[j * n + k];
                    }
                    l[i * n + j] = (self.get(i, j) - sum) / l[j * n + j];
                }
            }
        }

        // Forward substitution: L * y = b
        let mut y = vec![0.0; n];
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..i {
                sum += l[i * n + j] * y[j];
            }
            y[i] = (b[i] - sum) / l[i * n + i];
        }

        // Backward substitution: L^T * x = y
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = 0.0;
            for j in (i + 1)..n {
                sum += l[j * n + i] * x[j];
            }
            x[i] = (y[i] - sum) / l[i * n + i];
        }

        Ok(Vector::from_vec(x))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
