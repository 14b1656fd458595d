use crate::linalg::{LinalgError, PIVOT_GUARD};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Solve `Lc = b` for a lower triangular `L` by forward substitution.
///
/// Entries above the diagonal are never read, so a full square matrix whose
/// upper triangle happens to be nonzero is treated as lower triangular.
/// Each diagonal entry is checked against the singularity guard before the
/// division; a row with `|L[i, i]| < 1e-10` yields
/// [`LinalgError::SingularOrDegenerate`].
///
/// ```
/// use lineal::{linalg::forward_substitution, Matrix, Vector};
///
/// let l = Matrix::from_rows(&[[2.0_f64, 0.0], [1.0, 3.0]]);
/// let b = Vector::from_slice(&[4.0, 11.0]);
/// let c = forward_substitution(&l, &b).unwrap();
/// assert_eq!(c.as_slice(), &[2.0, 3.0]);
/// ```
pub fn forward_substitution<T: FloatScalar>(
    l: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    let n = l.nrows();
    if !l.is_square() || l.is_empty() || b.len() != n {
        return Err(LinalgError::InvalidDimension);
    }
    let guard = T::from_f64(PIVOT_GUARD);

    let mut c = Vector::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum = sum - l[(i, j)] * c[j];
        }
        if l[(i, i)].abs() < guard {
            return Err(LinalgError::SingularOrDegenerate);
        }
        c[i] = sum / l[(i, i)];
    }
    Ok(c)
}

/// Solve `Ux = c` for an upper triangular `U` by backward substitution.
///
/// The mirror of [`forward_substitution`]: entries below the diagonal are
/// never read, and every diagonal entry is guarded before the division.
pub fn backward_substitution<T: FloatScalar>(
    u: &Matrix<T>,
    c: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    let n = u.nrows();
    if !u.is_square() || u.is_empty() || c.len() != n {
        return Err(LinalgError::InvalidDimension);
    }
    let guard = T::from_f64(PIVOT_GUARD);

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = c[i];
        for j in (i + 1)..n {
            sum = sum - u[(i, j)] * x[j];
        }
        if u[(i, i)].abs() < guard {
            return Err(LinalgError::SingularOrDegenerate);
        }
        x[i] = sum / u[(i, i)];
    }
    Ok(x)
}
