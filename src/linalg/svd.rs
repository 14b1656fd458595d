use alloc::vec::Vec;

use crate::linalg::eigen::eigen_pairs;
use crate::linalg::LinalgError;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Iteration budget for the inner eigen engine.
const MAX_ITER: usize = 1000;

/// Convergence tolerance for the inner eigen engine.
const EIGEN_TOL: f64 = 1e-20;

/// Singular values at or below this are treated as zero; their singular
/// vectors cannot be recovered by scaling and are left as zero columns.
const RANK_GUARD: f64 = 1e-12;

/// Singular value decomposition via the smaller Gram matrix.
///
/// For an m×n input with p = min(m, n), the nonzero eigenvalues of Aᵗ·A
/// and A·Aᵗ coincide and equal the squared singular values, so the eigen
/// engine always runs on the p×p Gram matrix. Tall or square input
/// eigen-decomposes Aᵗ·A for V and recovers U[:, j] = A·V[:, j] / S[j];
/// wide input eigen-decomposes A·Aᵗ, whose eigenvector matrix is U itself,
/// and recovers V[:, j] = Aᵗ·U[:, j] / S[j]. Columns whose singular value
/// falls at or below the rank guard are left zero.
///
/// Returns `(u, s, v)` with `u` m×p, `s` of length p, `v` n×n. Eigen
/// engine failures propagate unchanged; a degenerate QR step inside the
/// iteration is still reachable for a tall input with linearly dependent
/// columns.
pub fn svd_decompose<T: FloatScalar>(
    a: &Matrix<T>,
) -> Result<(Matrix<T>, Vec<T>, Matrix<T>), LinalgError> {
    if a.is_empty() {
        return Err(LinalgError::InvalidDimension);
    }

    let m = a.nrows();
    let n = a.ncols();
    let p = m.min(n);
    let tol = T::from_f64(EIGEN_TOL);
    let guard = T::from_f64(RANK_GUARD);
    let at = a.transpose();

    if m >= n {
        let gram = &at * a;
        let (lambda, v) = eigen_pairs(&gram, MAX_ITER, tol)?;
        let s: Vec<T> = lambda.iter().map(|l| l.abs().sqrt()).collect();

        let mut u = Matrix::zeros(m, p);
        for (j, &sj) in s.iter().enumerate() {
            if sj > guard {
                u.set_col(j, &((a * &v.col(j)) / sj));
            }
        }
        Ok((u, s, v))
    } else {
        let gram = a * &at;
        let (lambda, u) = eigen_pairs(&gram, MAX_ITER, tol)?;
        let s: Vec<T> = lambda.iter().map(|l| l.abs().sqrt()).collect();

        let mut v = Matrix::zeros(n, n);
        for (j, &sj) in s.iter().enumerate() {
            if sj > guard {
                v.set_col(j, &((&at * &u.col(j)) / sj));
            }
        }
        Ok((u, s, v))
    }
}

/// Singular value decomposition `A = U·diag(S)·Vᵗ`.
///
/// `u` is m×p with orthonormal columns where the corresponding singular
/// value is nonzero, `s` holds the p = min(m, n) singular values in the
/// order the eigen engine produced them (descending magnitude for generic
/// input), and `v` is n×n. Columns matched to a zero singular value are
/// zero in `u` (tall input) or in `v`'s trailing columns (wide input).
///
/// ```
/// use lineal::Matrix;
///
/// let a = Matrix::from_rows(&[[3.0_f64, 2.0, 2.0], [2.0, 3.0, -2.0]]);
/// let svd = a.svd().unwrap();
///
/// assert!((svd.s()[0] - 5.0).abs() < 1e-6);
/// assert!((svd.s()[1] - 3.0).abs() < 1e-6);
///
/// let back = svd.reconstruct();
/// for i in 0..2 {
///     for j in 0..3 {
///         assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-6);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SvdDecomposition<T> {
    u: Matrix<T>,
    s: Vec<T>,
    v: Matrix<T>,
}

impl<T: FloatScalar> SvdDecomposition<T> {
    /// Decompose `a`. See [`svd_decompose`] for the route and error cases.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        let (u, s, v) = svd_decompose(a)?;
        Ok(Self { u, s, v })
    }

    /// Left singular vectors, m×p.
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Singular values, length p = min(m, n).
    pub fn s(&self) -> &[T] {
        &self.s
    }

    /// Right singular vectors, n×n.
    pub fn v(&self) -> &Matrix<T> {
        &self.v
    }

    /// `U·diag(S)·Vᵗ`, using the first p columns of `v`. Round-trips the
    /// decomposed matrix up to iteration error.
    pub fn reconstruct(&self) -> Matrix<T> {
        let m = self.u.nrows();
        let n = self.v.nrows();
        let p = self.s.len();

        let mut us = self.u.clone();
        for j in 0..p {
            for i in 0..m {
                us[(i, j)] = us[(i, j)] * self.s[j];
            }
        }
        let vt = Matrix::from_fn(p, n, |j, i| self.v[(i, j)]);
        &us * &vt
    }
}

/// Convenience access from a matrix.
impl<T: FloatScalar> Matrix<T> {
    /// Singular value decomposition. See [`SvdDecomposition`].
    ///
    /// ```
    /// use lineal::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[3.0_f64, 0.0], [0.0, 2.0], [0.0, 0.0]]);
    /// let svd = a.svd().unwrap();
    /// assert!((svd.s()[0] - 3.0).abs() < 1e-9);
    /// assert!((svd.s()[1] - 2.0).abs() < 1e-9);
    /// ```
    pub fn svd(&self) -> Result<SvdDecomposition<T>, LinalgError> {
        SvdDecomposition::new(self)
    }
}
