use alloc::vec::Vec;

use crate::linalg::qr::qr_decompose;
use crate::linalg::LinalgError;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Convergence test for the QR iteration.
///
/// A working matrix counts as converged once every strictly-below-diagonal
/// entry satisfies `|H[i, j]| ≤ tol`; the diagonal then carries the
/// eigenvalues. The upper triangle is ignored, so an upper triangular input
/// is converged from the start.
///
/// # Panics
///
/// Panics if the matrix is not square.
pub fn has_converged<T: FloatScalar>(h: &Matrix<T>, tol: T) -> bool {
    assert!(h.is_square(), "convergence test requires a square matrix");
    let n = h.nrows();
    for i in 1..n {
        for j in 0..i {
            if h[(i, j)].abs() > tol {
                return false;
            }
        }
    }
    true
}

fn validate<T: FloatScalar>(a: &Matrix<T>, tol: T) -> Result<(), LinalgError> {
    if !a.is_square() || a.is_empty() {
        return Err(LinalgError::InvalidDimension);
    }
    if tol <= T::zero() {
        return Err(LinalgError::InvalidDimension);
    }
    Ok(())
}

/// Eigenvalues by the classical unshifted QR iteration.
///
/// The working copy `H` starts as `A`; while [`has_converged`] fails, one
/// step factors `H = Q·R` and recombines `H ← R·Q`, a similarity transform
/// that drives the below-diagonal entries toward zero. Convergence is
/// checked before every step, so an already-converged input (diagonal or
/// upper triangular) succeeds even with `max_iter = 0`; exhausting the
/// budget while unconverged reports [`LinalgError::NonConvergence`] rather
/// than a truncated answer.
///
/// Eigenvalues are returned in diagonal order, unsorted. The unshifted
/// iteration surfaces them in descending magnitude for generic real
/// spectra; it cannot converge when distinct eigenvalues share a magnitude,
/// most prominently for complex-conjugate pairs (any rotation matrix), and
/// reports `NonConvergence` there. A degenerate QR step inside the loop
/// propagates as [`LinalgError::SingularOrDegenerate`].
///
/// The tolerance must be strictly positive, otherwise
/// [`LinalgError::InvalidDimension`] is returned.
///
/// ```
/// use lineal::linalg::eigenvalues;
/// use lineal::Matrix;
///
/// let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
/// let ev = eigenvalues(&a, 200, 1e-10).unwrap();
/// assert!((ev[0] - 3.0).abs() < 1e-8);
/// assert!((ev[1] - 1.0).abs() < 1e-8);
/// ```
pub fn eigenvalues<T: FloatScalar>(
    a: &Matrix<T>,
    max_iter: usize,
    tol: T,
) -> Result<Vec<T>, LinalgError> {
    validate(a, tol)?;

    let mut h = a.clone();
    let mut iter = 0;
    while !has_converged(&h, tol) {
        if iter == max_iter {
            return Err(LinalgError::NonConvergence);
        }
        let (q, r) = qr_decompose(&h)?;
        h = &r * &q;
        iter += 1;
    }

    Ok((0..h.nrows()).map(|i| h[(i, i)]).collect())
}

/// The QR iteration with the orthogonal transforms accumulated.
///
/// Identical iteration to [`eigenvalues`]; additionally maintains
/// `V ← V·Q` starting from the identity, so that `H = Vᵗ·A·V` at every
/// step. Returns the diagonal and the accumulated `V`.
pub(crate) fn eigen_pairs<T: FloatScalar>(
    a: &Matrix<T>,
    max_iter: usize,
    tol: T,
) -> Result<(Vec<T>, Matrix<T>), LinalgError> {
    validate(a, tol)?;

    let n = a.nrows();
    let mut h = a.clone();
    let mut v = Matrix::eye(n);
    let mut iter = 0;
    while !has_converged(&h, tol) {
        if iter == max_iter {
            return Err(LinalgError::NonConvergence);
        }
        let (q, r) = qr_decompose(&h)?;
        h = &r * &q;
        v = &v * &q;
        iter += 1;
    }

    Ok(((0..n).map(|i| h[(i, i)]).collect(), v))
}

/// Eigenvectors as the accumulated product of the QR iteration's transforms.
///
/// Runs the same iteration as [`eigenvalues`] while accumulating
/// `V = Q₁·Q₂·…`. For a symmetric input the converged `H` is diagonal and
/// the columns of `V` are orthonormal eigenvectors, ordered to match the
/// eigenvalue order; for a non-symmetric input only `Vᵗ·A·V = H` (a Schur
/// form) is guaranteed.
///
/// ```
/// use lineal::linalg::{eigenvalues, eigenvectors};
/// use lineal::Matrix;
///
/// let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
/// let ev = eigenvalues(&a, 200, 1e-10).unwrap();
/// let v = eigenvectors(&a, 200, 1e-10).unwrap();
///
/// // A·v₀ = λ₀·v₀
/// let av = &a * &v.col(0);
/// for i in 0..2 {
///     assert!((av[i] - ev[0] * v.col(0)[i]).abs() < 1e-8);
/// }
/// ```
pub fn eigenvectors<T: FloatScalar>(
    a: &Matrix<T>,
    max_iter: usize,
    tol: T,
) -> Result<Matrix<T>, LinalgError> {
    let (_, v) = eigen_pairs(a, max_iter, tol)?;
    Ok(v)
}

/// Convenience methods on square matrices.
impl<T: FloatScalar> Matrix<T> {
    /// Eigenvalues by unshifted QR iteration. See [`eigenvalues`].
    pub fn eigenvalues(&self, max_iter: usize, tol: T) -> Result<Vec<T>, LinalgError> {
        eigenvalues(self, max_iter, tol)
    }

    /// Eigenvectors by accumulated QR transforms. See [`eigenvectors`].
    pub fn eigenvectors(&self, max_iter: usize, tol: T) -> Result<Matrix<T>, LinalgError> {
        eigenvectors(self, max_iter, tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_converges_with_zero_budget() {
        let a = Matrix::from_rows(&[[1.0_f64, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]]);
        let ev = eigenvalues(&a, 0, 1e-10).unwrap();
        assert_eq!(ev, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn upper_triangular_converges_with_zero_budget() {
        // Only the lower triangle enters the convergence test.
        let a = Matrix::from_rows(&[[1.0_f64, 4.0], [0.0, 3.0]]);
        let ev = eigenvalues(&a, 0, 1e-10).unwrap();
        assert_eq!(ev, vec![1.0, 3.0]);
    }

    #[test]
    fn symmetric_2x2() {
        let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
        let ev = eigenvalues(&a, 200, 1e-10).unwrap();
        assert!((ev[0] - 3.0).abs() < 1e-8);
        assert!((ev[1] - 1.0).abs() < 1e-8);
    }

    #[test]
    fn symmetric_3x3_descending_magnitude() {
        let a = Matrix::from_rows(&[[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]]);
        let ev = eigenvalues(&a, 500, 1e-10).unwrap();
        // Eigenvalues of this tridiagonal matrix are 3 and 3 ± √3.
        assert!((ev[0] - (3.0 + 3.0_f64.sqrt())).abs() < 1e-7);
        assert!((ev[1] - 3.0).abs() < 1e-7);
        assert!((ev[2] - (3.0 - 3.0_f64.sqrt())).abs() < 1e-7);
    }

    #[test]
    fn eigenvector_residuals() {
        let a = Matrix::from_rows(&[[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]]);
        let ev = eigenvalues(&a, 500, 1e-10).unwrap();
        let v = eigenvectors(&a, 500, 1e-10).unwrap();
        for j in 0..3 {
            let col = v.col(j);
            let av = &a * &col;
            for i in 0..3 {
                assert!(
                    (av[i] - ev[j] * col[i]).abs() < 1e-7,
                    "residual for pair {} at row {}",
                    j,
                    i
                );
            }
        }
    }

    #[test]
    fn accumulated_v_is_orthogonal() {
        let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
        let v = eigenvectors(&a, 200, 1e-10).unwrap();
        let gram = &v.transpose() * &v;
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((gram[(i, j)] - expected).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn rotation_does_not_converge() {
        // Eigenvalues ±i; a real QR iteration cannot reach them.
        let a = Matrix::from_rows(&[[0.0_f64, -1.0], [1.0, 0.0]]);
        assert_eq!(
            eigenvalues(&a, 50, 1e-10).unwrap_err(),
            LinalgError::NonConvergence
        );
    }

    #[test]
    fn zero_budget_unconverged_reported() {
        let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
        assert_eq!(
            eigenvalues(&a, 0, 1e-10).unwrap_err(),
            LinalgError::NonConvergence
        );
    }

    #[test]
    fn non_positive_tolerance_rejected() {
        let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
        assert_eq!(
            eigenvalues(&a, 10, 0.0).unwrap_err(),
            LinalgError::InvalidDimension
        );
        assert_eq!(
            eigenvalues(&a, 10, -1e-10).unwrap_err(),
            LinalgError::InvalidDimension
        );
    }

    #[test]
    fn non_square_rejected() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        assert_eq!(
            eigenvalues(&a, 10, 1e-10).unwrap_err(),
            LinalgError::InvalidDimension
        );
    }
}
