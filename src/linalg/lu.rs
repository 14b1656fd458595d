use crate::linalg::triangular::{backward_substitution, forward_substitution};
use crate::linalg::{LinalgError, PIVOT_GUARD};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Doolittle LU decomposition without pivoting.
///
/// Returns `(l, u)` where `l` is unit lower triangular (the ones are stored
/// explicitly) and `u` is upper triangular, with exact zeros outside each
/// triangle. Rows are never exchanged: a zero or near-zero pivot is not
/// repaired but reported as [`LinalgError::SingularOrDegenerate`], even when
/// the matrix itself is well conditioned. The pivot guard is `1e-10` in
/// magnitude.
pub fn lu_decompose<T: FloatScalar>(
    a: &Matrix<T>,
) -> Result<(Matrix<T>, Matrix<T>), LinalgError> {
    if !a.is_square() || a.is_empty() {
        return Err(LinalgError::InvalidDimension);
    }
    let n = a.nrows();
    let guard = T::from_f64(PIVOT_GUARD);

    let mut l = Matrix::zeros(n, n);
    let mut u = Matrix::zeros(n, n);

    for k in 0..n {
        // Row k of U
        for j in k..n {
            let mut sum = a[(k, j)];
            for s in 0..k {
                sum = sum - l[(k, s)] * u[(s, j)];
            }
            u[(k, j)] = sum;
        }

        if u[(k, k)].abs() < guard {
            return Err(LinalgError::SingularOrDegenerate);
        }

        // Column k of L
        l[(k, k)] = T::one();
        for i in (k + 1)..n {
            let mut sum = a[(i, k)];
            for s in 0..k {
                sum = sum - l[(i, s)] * u[(s, k)];
            }
            l[(i, k)] = sum / u[(k, k)];
        }
    }

    Ok((l, u))
}

/// Multi-threaded Doolittle LU decomposition.
///
/// Pivot steps are inherently sequential; within step `k` the independent
/// updates (entries of row `k` of U, then entries of column `k` of L) are
/// distributed across the rayon pool. Each entry is accumulated by the same
/// loop as in [`lu_decompose`], so the factors are bitwise identical to the
/// sequential ones.
#[cfg(feature = "rayon")]
pub fn lu_decompose_parallel<T: FloatScalar + Send + Sync>(
    a: &Matrix<T>,
) -> Result<(Matrix<T>, Matrix<T>), LinalgError> {
    use rayon::prelude::*;

    if !a.is_square() || a.is_empty() {
        return Err(LinalgError::InvalidDimension);
    }
    let n = a.nrows();
    let guard = T::from_f64(PIVOT_GUARD);

    let mut l = Matrix::zeros(n, n);
    let mut u = Matrix::zeros(n, n);

    for k in 0..n {
        // Row k of U. Rows 0..k are read-only here; splitting the flat
        // storage at row k keeps both borrows safe.
        {
            let l_ref = &l;
            let (u_done, u_rest) = u.as_mut_slice().split_at_mut(k * n);
            let u_done: &[T] = u_done;
            u_rest[k..n].par_iter_mut().enumerate().for_each(|(off, out)| {
                let j = k + off;
                let mut sum = a[(k, j)];
                for s in 0..k {
                    sum = sum - l_ref[(k, s)] * u_done[s * n + j];
                }
                *out = sum;
            });
        }

        if u[(k, k)].abs() < guard {
            return Err(LinalgError::SingularOrDegenerate);
        }

        // Column k of L. Each row below the pivot is an independent chunk;
        // entries left of column k were filled by earlier pivot steps.
        l[(k, k)] = T::one();
        let pivot = u[(k, k)];
        let u_ref = &u;
        l.as_mut_slice()[(k + 1) * n..]
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(off, row)| {
                let i = k + 1 + off;
                let mut sum = a[(i, k)];
                for s in 0..k {
                    sum = sum - row[s] * u_ref[(s, k)];
                }
                row[k] = sum / pivot;
            });
    }

    Ok((l, u))
}

/// LU decomposition of a square matrix.
///
/// Stores the unit lower triangular factor `L` and the upper triangular
/// factor `U` with `A = L·U`. Use [`solve`](LuDecomposition::solve),
/// [`inverse`](LuDecomposition::inverse) or [`det`](LuDecomposition::det)
/// to work with the decomposition.
///
/// # Example
///
/// ```
/// use lineal::{Matrix, Vector};
///
/// let a = Matrix::from_rows(&[[2.0_f64, 1.0], [5.0, 3.0]]);
/// let lu = a.lu().unwrap();
///
/// let x = lu.solve(&Vector::from_slice(&[4.0, 11.0])).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    l: Matrix<T>,
    u: Matrix<T>,
}

impl<T: FloatScalar> LuDecomposition<T> {
    /// Decompose a square matrix.
    ///
    /// Returns [`LinalgError::InvalidDimension`] for a non-square or empty
    /// input and [`LinalgError::SingularOrDegenerate`] when a pivot falls
    /// below the guard.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        let (l, u) = lu_decompose(a)?;
        Ok(Self { l, u })
    }

    /// Decompose on the rayon thread pool. See [`lu_decompose_parallel`].
    #[cfg(feature = "rayon")]
    pub fn new_parallel(a: &Matrix<T>) -> Result<Self, LinalgError>
    where
        T: Send + Sync,
    {
        let (l, u) = lu_decompose_parallel(a)?;
        Ok(Self { l, u })
    }

    /// The unit lower triangular factor.
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The upper triangular factor.
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Solve `Ax = b` by a forward then a backward substitution.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let c = forward_substitution(&self.l, b)?;
        backward_substitution(&self.u, &c)
    }

    /// The determinant, as the product of both factor diagonals.
    ///
    /// `L` has a unit diagonal, so this is the product of the pivots. The
    /// factors are already validated by the constructor and the product
    /// cannot hit a guarded zero.
    pub fn det(&self) -> T {
        let n = self.l.nrows();
        let mut d = T::one();
        for i in 0..n {
            d = d * self.l[(i, i)] * self.u[(i, i)];
        }
        d
    }

    /// The matrix inverse, assembled one basis column at a time.
    ///
    /// Each column of the inverse is the solution of `Ax = e_i`, reusing the
    /// factorization for all `n` solves.
    pub fn inverse(&self) -> Result<Matrix<T>, LinalgError> {
        let n = self.l.nrows();
        let mut inv = Matrix::zeros(n, n);
        let mut e = Vector::zeros(n);

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();

            let c = forward_substitution(&self.l, &e)?;
            let x = backward_substitution(&self.u, &c)?;
            inv.set_col(col, &x);
        }

        Ok(inv)
    }
}

/// Convenience methods on square matrices.
impl<T: FloatScalar> Matrix<T> {
    /// LU decomposition without pivoting.
    pub fn lu(&self) -> Result<LuDecomposition<T>, LinalgError> {
        LuDecomposition::new(self)
    }

    /// LU decomposition on the rayon thread pool.
    #[cfg(feature = "rayon")]
    pub fn lu_parallel(&self) -> Result<LuDecomposition<T>, LinalgError>
    where
        T: Send + Sync,
    {
        LuDecomposition::new_parallel(self)
    }

    /// Solve `Ax = b` for `x` via LU decomposition.
    ///
    /// ```
    /// use lineal::{Matrix, Vector};
    /// let a = Matrix::from_rows(&[
    ///     [2.0_f64, 1.0, -1.0],
    ///     [-3.0, -1.0, 2.0],
    ///     [-2.0, 1.0, 2.0],
    /// ]);
    /// let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.lu()?.solve(b)
    }

    /// Compute the matrix inverse via LU decomposition.
    ///
    /// ```
    /// use lineal::Matrix;
    /// let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let a_inv = a.inverse().unwrap();
    /// let id = &a * &a_inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>, LinalgError> {
        self.lu()?.inverse()
    }

    /// Compute the determinant via LU decomposition.
    ///
    /// ```
    /// use lineal::Matrix;
    /// let a = Matrix::from_rows(&[
    ///     [6.0_f64, 1.0, 1.0],
    ///     [4.0, -2.0, 5.0],
    ///     [2.0, 8.0, 7.0],
    /// ]);
    /// assert!((a.det().unwrap() - (-306.0)).abs() < 1e-10);
    /// ```
    pub fn det(&self) -> Result<T, LinalgError> {
        Ok(self.lu()?.det())
    }
}
