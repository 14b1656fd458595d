pub(crate) mod cholesky;
pub(crate) mod eigen;
pub(crate) mod ldlt;
pub(crate) mod lu;
pub(crate) mod qr;
pub(crate) mod svd;
pub(crate) mod triangular;

pub use cholesky::CholeskyDecomposition;
pub use eigen::{eigenvalues, eigenvectors, has_converged};
pub use ldlt::LdltDecomposition;
pub use lu::LuDecomposition;
pub use qr::QrDecomposition;
pub use svd::SvdDecomposition;
pub use triangular::{backward_substitution, forward_substitution};

/// Magnitude below which a pivot or divisor is treated as zero.
///
/// This is a fixed decimal threshold, not a machine epsilon; the guards are
/// meant to reject near-singular systems early rather than to track rounding.
pub(crate) const PIVOT_GUARD: f64 = 1e-10;

/// Errors from linear algebra operations.
///
/// Returned by decomposition constructors and convenience methods
/// (`solve`, `inverse`, `cholesky`, `ldlt`, `qr`, `eigenvalues`, `svd`).
///
/// ```
/// use lineal::Matrix;
/// use lineal::linalg::LinalgError;
///
/// let singular = Matrix::from_rows(&[[0.0_f64, 1.0], [0.0, 2.0]]);
/// assert_eq!(singular.lu().unwrap_err(), LinalgError::SingularOrDegenerate);
///
/// let lopsided = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(lopsided.cholesky().unwrap_err(), LinalgError::NotSymmetric);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Operand shapes do not fit the operation: non-square input where a
    /// square matrix is required, fewer rows than columns for QR, mismatched
    /// solve dimensions, or a non-positive tolerance.
    InvalidDimension,
    /// Matrix is not symmetric (required for Cholesky and LDLT).
    NotSymmetric,
    /// Matrix is not positive definite (required for Cholesky).
    NotPositiveDefinite,
    /// A pivot or divisor fell below the singularity guard.
    SingularOrDegenerate,
    /// Iterative algorithm did not converge within the iteration budget.
    NonConvergence,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::InvalidDimension => write!(f, "invalid matrix dimensions"),
            LinalgError::NotSymmetric => write!(f, "matrix is not symmetric"),
            LinalgError::NotPositiveDefinite => write!(f, "matrix is not positive definite"),
            LinalgError::SingularOrDegenerate => {
                write!(f, "matrix is singular or numerically degenerate")
            }
            LinalgError::NonConvergence => write!(f, "iterative algorithm did not converge"),
        }
    }
}
