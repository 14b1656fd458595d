use crate::linalg::{LinalgError, PIVOT_GUARD};
use crate::traits::FloatScalar;
use crate::Matrix;

fn column_norm<T: FloatScalar>(col: &[T]) -> T {
    let mut sum = T::zero();
    for x in col {
        sum = sum + *x * *x;
    }
    sum.sqrt()
}

/// QR decomposition by Modified Gram–Schmidt, economy form.
///
/// For an m×n input with m ≥ n this returns `(q, r)` where `q` is m×n with
/// orthonormal columns and `r` is n×n upper triangular with a positive
/// diagonal. Inputs with m < n are rejected with
/// [`LinalgError::InvalidDimension`].
///
/// The working copy of the input is consumed column by column; once a
/// deflated column's norm falls below `1e-10` the matrix is reported as
/// [`LinalgError::SingularOrDegenerate`]. Classical Gram–Schmidt would emit
/// a zero column there; rank deficiency is failed fast instead of repaired.
pub fn qr_decompose<T: FloatScalar>(
    a: &Matrix<T>,
) -> Result<(Matrix<T>, Matrix<T>), LinalgError> {
    let (m, n) = (a.nrows(), a.ncols());
    if a.is_empty() || m < n {
        return Err(LinalgError::InvalidDimension);
    }
    let guard = T::from_f64(PIVOT_GUARD);

    // Row j of `v` is column j of the input, stored contiguously and
    // progressively deflated. `qt` accumulates the rows of Qᵗ.
    let mut v = a.transpose();
    let mut qt = Matrix::zeros(n, m);
    let mut r = Matrix::zeros(n, n);

    for k in 0..n {
        let norm = column_norm(v.row_slice(k));
        if norm < guard {
            return Err(LinalgError::SingularOrDegenerate);
        }
        r[(k, k)] = norm;

        for (q, x) in qt.row_slice_mut(k).iter_mut().zip(v.row_slice(k)) {
            *q = *x / norm;
        }

        for j in (k + 1)..n {
            let mut proj = T::zero();
            for (q, x) in qt.row_slice(k).iter().zip(v.row_slice(j)) {
                proj = proj + *q * *x;
            }
            r[(k, j)] = proj;

            let qk = qt.row_slice(k);
            for (x, q) in v.row_slice_mut(j).iter_mut().zip(qk) {
                *x = *x - proj * *q;
            }
        }
    }

    Ok((qt.transpose(), r))
}

/// Multi-threaded Modified Gram–Schmidt.
///
/// Column steps are inherently sequential; within step k the normalization
/// is a parallel map and each trailing column is projected and deflated as
/// one independent task. The column norm and the per-column projections stay
/// single-threaded folds so every reduction keeps the sequential kernel's
/// shape, making the factors bitwise identical to [`qr_decompose`].
#[cfg(feature = "rayon")]
pub fn qr_decompose_parallel<T: FloatScalar + Send + Sync>(
    a: &Matrix<T>,
) -> Result<(Matrix<T>, Matrix<T>), LinalgError> {
    use rayon::prelude::*;

    let (m, n) = (a.nrows(), a.ncols());
    if a.is_empty() || m < n {
        return Err(LinalgError::InvalidDimension);
    }
    let guard = T::from_f64(PIVOT_GUARD);

    let mut v = a.transpose();
    let mut qt = Matrix::zeros(n, m);
    let mut r = Matrix::zeros(n, n);

    for k in 0..n {
        let norm = column_norm(v.row_slice(k));
        if norm < guard {
            return Err(LinalgError::SingularOrDegenerate);
        }
        r[(k, k)] = norm;

        {
            let vk = v.row_slice(k);
            qt.row_slice_mut(k)
                .par_iter_mut()
                .zip(vk.par_iter())
                .for_each(|(q, x)| *q = *x / norm);
        }

        let qk: &[T] = qt.row_slice(k);
        let (_, v_tail) = v.as_mut_slice().split_at_mut((k + 1) * m);
        v_tail
            .par_chunks_mut(m)
            .zip(r.row_slice_mut(k)[(k + 1)..].par_iter_mut())
            .for_each(|(vj, rkj)| {
                let mut proj = T::zero();
                for (q, x) in qk.iter().zip(vj.iter()) {
                    proj = proj + *q * *x;
                }
                *rkj = proj;
                for (x, q) in vj.iter_mut().zip(qk) {
                    *x = *x - proj * *q;
                }
            });
    }

    Ok((qt.transpose(), r))
}

/// QR decomposition of an m×n matrix with m ≥ n.
///
/// # Example
///
/// ```
/// use lineal::Matrix;
///
/// let a = Matrix::from_rows(&[
///     [12.0_f64, -51.0, 4.0],
///     [6.0, 167.0, -68.0],
///     [-4.0, 24.0, -41.0],
/// ]);
/// let qr = a.qr().unwrap();
/// assert!((qr.r()[(0, 0)] - 14.0).abs() < 1e-12);
/// assert!((qr.r()[(1, 1)] - 175.0).abs() < 1e-12);
/// assert!((qr.r()[(2, 2)] - 35.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct QrDecomposition<T> {
    q: Matrix<T>,
    r: Matrix<T>,
}

impl<T: FloatScalar> QrDecomposition<T> {
    /// Decompose a matrix with at least as many rows as columns.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        let (q, r) = qr_decompose(a)?;
        Ok(Self { q, r })
    }

    /// Decompose on the rayon thread pool. See [`qr_decompose_parallel`].
    #[cfg(feature = "rayon")]
    pub fn new_parallel(a: &Matrix<T>) -> Result<Self, LinalgError>
    where
        T: Send + Sync,
    {
        let (q, r) = qr_decompose_parallel(a)?;
        Ok(Self { q, r })
    }

    /// The m×n factor with orthonormal columns.
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The n×n upper triangular factor.
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }
}

/// Convenience methods.
impl<T: FloatScalar> Matrix<T> {
    /// QR decomposition by Modified Gram–Schmidt.
    pub fn qr(&self) -> Result<QrDecomposition<T>, LinalgError> {
        QrDecomposition::new(self)
    }

    /// QR decomposition on the rayon thread pool.
    #[cfg(feature = "rayon")]
    pub fn qr_parallel(&self) -> Result<QrDecomposition<T>, LinalgError>
    where
        T: Send + Sync,
    {
        QrDecomposition::new_parallel(self)
    }
}
