use alloc::vec::Vec;

use crate::linalg::triangular::{backward_substitution, forward_substitution};
use crate::linalg::LinalgError;
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Magnitude below which a diagonal entry of `D` is treated as zero.
const DIAG_GUARD: f64 = 1e-12;

/// LDLT factorization: `A = L·D·Lᵗ` with unit lower triangular `L` and
/// diagonal `D`, computed without square roots.
///
/// Unlike Cholesky this accepts indefinite matrices; the input only has to
/// be square and exactly symmetric. A diagonal entry with `|D[i]| < 1e-12`
/// aborts with [`LinalgError::SingularOrDegenerate`].
pub fn ldlt_decompose<T: FloatScalar>(a: &Matrix<T>) -> Result<(Matrix<T>, Vec<T>), LinalgError> {
    if !a.is_square() || a.is_empty() {
        return Err(LinalgError::InvalidDimension);
    }
    if !a.is_symmetric() {
        return Err(LinalgError::NotSymmetric);
    }
    let n = a.nrows();
    let guard = T::from_f64(DIAG_GUARD);

    let mut l = Matrix::eye(n);
    let mut d = Vec::with_capacity(n);

    for i in 0..n {
        let mut sum = T::zero();
        for k in 0..i {
            sum = sum + l[(i, k)] * l[(i, k)] * d[k];
        }
        let di = a[(i, i)] - sum;
        if di.abs() < guard {
            return Err(LinalgError::SingularOrDegenerate);
        }
        d.push(di);

        for j in (i + 1)..n {
            let mut sum = T::zero();
            for k in 0..i {
                sum = sum + l[(j, k)] * l[(i, k)] * d[k];
            }
            l[(j, i)] = (a[(j, i)] - sum) / di;
        }
    }

    Ok((l, d))
}

/// LDLT decomposition of a symmetric matrix.
///
/// # Example
///
/// ```
/// use lineal::Matrix;
///
/// let a = Matrix::from_rows(&[[4.0_f64, 2.0], [2.0, 3.0]]);
/// let ldlt = a.ldlt().unwrap();
/// assert_eq!(ldlt.l()[(1, 0)], 0.5);
/// assert_eq!(ldlt.d(), &[4.0, 2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct LdltDecomposition<T> {
    l: Matrix<T>,
    d: Vec<T>,
}

impl<T: FloatScalar> LdltDecomposition<T> {
    /// Decompose a symmetric matrix.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        let (l, d) = ldlt_decompose(a)?;
        Ok(Self { l, d })
    }

    /// The unit lower triangular factor `L`.
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The diagonal of `D`.
    pub fn d(&self) -> &[T] {
        &self.d
    }

    /// The diagonal factor `D` as a full matrix.
    pub fn d_matrix(&self) -> Matrix<T> {
        Matrix::from_diag(&Vector::from_slice(&self.d))
    }

    /// Solve `Ax = b` where `A = L·D·Lᵗ`.
    ///
    /// Forward substitution with `L`, a component-wise division by `D`, then
    /// backward substitution with `Lᵗ`.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let mut c = forward_substitution(&self.l, b)?;
        for (ci, di) in c.as_mut_slice().iter_mut().zip(&self.d) {
            *ci = *ci / *di;
        }
        backward_substitution(&self.l.transpose(), &c)
    }

    /// The determinant: `det(A) = Π D[i]`.
    pub fn det(&self) -> T {
        let mut prod = T::one();
        for di in &self.d {
            prod = prod * *di;
        }
        prod
    }
}

/// Convenience methods on square matrices.
impl<T: FloatScalar> Matrix<T> {
    /// LDLT decomposition (`A = L·D·Lᵗ`).
    ///
    /// Accepts any symmetric matrix whose `D` stays away from zero, which
    /// makes it the square-root-free alternative to [`cholesky`](Matrix::cholesky)
    /// for indefinite systems.
    pub fn ldlt(&self) -> Result<LdltDecomposition<T>, LinalgError> {
        LdltDecomposition::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_reproduce_input() {
        let a = Matrix::from_rows(&[[4.0_f64, 2.0, 1.0], [2.0, 10.0, 3.5], [1.0, 3.5, 4.5]]);
        let ldlt = a.ldlt().unwrap();
        let reconstructed = &(ldlt.l() * &ldlt.d_matrix()) * &ldlt.l().transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (reconstructed[(i, j)] - a[(i, j)]).abs() < 1e-12,
                    "mismatch at ({},{})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn known_factors_2x2() {
        let a = Matrix::from_rows(&[[4.0_f64, 2.0], [2.0, 3.0]]);
        let ldlt = a.ldlt().unwrap();
        assert!((ldlt.l()[(1, 0)] - 0.5).abs() < 1e-12);
        assert!((ldlt.d()[0] - 4.0).abs() < 1e-12);
        assert!((ldlt.d()[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn indefinite_matrix_accepted() {
        // Not positive definite, but LDLT only needs |D[i]| above the guard.
        let a = Matrix::from_rows(&[[1.0_f64, 5.0], [5.0, 1.0]]);
        let ldlt = a.ldlt().unwrap();
        assert!((ldlt.d()[0] - 1.0).abs() < 1e-12);
        assert!((ldlt.d()[1] - (-24.0)).abs() < 1e-12);
        assert!((ldlt.det() - (-24.0)).abs() < 1e-12);
    }

    #[test]
    fn solve_round_trip() {
        let a = Matrix::from_rows(&[[4.0_f64, 2.0, 1.0], [2.0, 10.0, 3.5], [1.0, 3.5, 4.5]]);
        let b = Vector::from_slice(&[7.0, -3.0, 2.0]);
        let x = a.ldlt().unwrap().solve(&b).unwrap();
        let recovered = &a * &x;
        for i in 0..3 {
            assert!((recovered[i] - b[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn asymmetric_rejected() {
        let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]);
        assert_eq!(a.ldlt().unwrap_err(), LinalgError::NotSymmetric);
    }

    #[test]
    fn tiny_d_rejected() {
        // D[1] = 4 - 2²·1 = 0.
        let a = Matrix::from_rows(&[[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(a.ldlt().unwrap_err(), LinalgError::SingularOrDegenerate);
    }
}
