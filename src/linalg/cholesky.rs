use crate::linalg::triangular::{backward_substitution, forward_substitution};
use crate::linalg::LinalgError;
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Cholesky–Banachiewicz factorization: `A = L·Lᵗ`.
///
/// The input is validated before any arithmetic: it must be square
/// ([`LinalgError::InvalidDimension`]), exactly symmetric
/// ([`LinalgError::NotSymmetric`]) and have a strictly positive diagonal
/// ([`LinalgError::NotPositiveDefinite`]). A positive diagonal is necessary
/// but not sufficient, so the factorization itself still rejects the matrix
/// when a pivot `A[i, i] − Σ L[i, k]²` comes out non-positive.
pub fn cholesky_decompose<T: FloatScalar>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    if !a.is_square() || a.is_empty() {
        return Err(LinalgError::InvalidDimension);
    }
    if !a.is_symmetric() {
        return Err(LinalgError::NotSymmetric);
    }
    let n = a.nrows();
    for i in 0..n {
        if a[(i, i)] <= T::zero() {
            return Err(LinalgError::NotPositiveDefinite);
        }
    }

    let mut l = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..=i {
            let mut sum = T::zero();
            if j == i {
                for k in 0..j {
                    sum = sum + l[(j, k)] * l[(j, k)];
                }
                let diag = a[(j, j)] - sum;
                if diag <= T::zero() {
                    return Err(LinalgError::NotPositiveDefinite);
                }
                l[(j, j)] = diag.sqrt();
            } else {
                for k in 0..j {
                    sum = sum + l[(i, k)] * l[(j, k)];
                }
                l[(i, j)] = (a[(i, j)] - sum) / l[(j, j)];
            }
        }
    }

    Ok(l)
}

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// # Example
///
/// ```
/// use lineal::{Matrix, Vector};
///
/// let a = Matrix::from_rows(&[[4.0_f64, 2.0], [2.0, 3.0]]);
/// let chol = a.cholesky().unwrap();
///
/// let x = chol.solve(&Vector::from_slice(&[8.0, 7.0])).unwrap();
/// assert!((x[0] - 1.25).abs() < 1e-12);
///
/// assert!((chol.det() - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition<T> {
    l: Matrix<T>,
}

impl<T: FloatScalar> CholeskyDecomposition<T> {
    /// Decompose a symmetric positive-definite matrix.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        let l = cholesky_decompose(a)?;
        Ok(Self { l })
    }

    /// The lower triangular factor `L`.
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The upper triangular factor `Lᵗ`, materialized on demand.
    pub fn lt(&self) -> Matrix<T> {
        self.l.transpose()
    }

    /// Solve `Ax = b` where `A = L·Lᵗ`.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let c = forward_substitution(&self.l, b)?;
        backward_substitution(&self.lt(), &c)
    }

    /// The determinant: `det(A) = (Π L[i, i])²`.
    pub fn det(&self) -> T {
        let n = self.l.nrows();
        let mut prod = T::one();
        for i in 0..n {
            prod = prod * self.l[(i, i)];
        }
        prod * prod
    }
}

/// Convenience methods on square matrices.
impl<T: FloatScalar> Matrix<T> {
    /// Cholesky decomposition (`A = L·Lᵗ`).
    ///
    /// ```
    /// use lineal::Matrix;
    /// let spd = Matrix::from_rows(&[[4.0_f64, 2.0], [2.0, 3.0]]);
    /// let chol = spd.cholesky().unwrap();
    /// let reconstructed = chol.l() * &chol.lt();
    /// assert!((reconstructed[(0, 0)] - 4.0).abs() < 1e-12);
    /// ```
    pub fn cholesky(&self) -> Result<CholeskyDecomposition<T>, LinalgError> {
        CholeskyDecomposition::new(self)
    }
}
