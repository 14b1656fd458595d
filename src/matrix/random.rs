use alloc::vec::Vec;
use rand::Rng;

use crate::traits::FloatScalar;

use super::vector::Vector;
use super::Matrix;

// ── Random constructors ─────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Create a matrix with entries drawn uniformly from `[0, 1)`.
    ///
    /// Uses the thread-local RNG.
    ///
    /// ```
    /// use lineal::Matrix;
    /// let m: Matrix<f64> = Matrix::random(4, 3);
    /// assert_eq!(m.nrows(), 4);
    /// assert!(m.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random(nrows: usize, ncols: usize) -> Self {
        let mut rng = rand::rng();
        let mut data = Vec::with_capacity(nrows * ncols);
        for _ in 0..nrows * ncols {
            data.push(T::from_f64(rng.random::<f64>()));
        }
        Self::from_vec(nrows, ncols, data)
    }

    /// Create a matrix with entries drawn uniformly from `[low, high)`.
    ///
    /// ```
    /// use lineal::Matrix;
    /// let m = Matrix::random_range(3, 3, -1.0, 1.0);
    /// assert!(m.iter().all(|&x: &f64| (-1.0..1.0).contains(&x)));
    /// ```
    pub fn random_range(nrows: usize, ncols: usize, low: T, high: T) -> Self {
        let mut rng = rand::rng();
        let mut data = Vec::with_capacity(nrows * ncols);
        for _ in 0..nrows * ncols {
            let u = T::from_f64(rng.random::<f64>());
            data.push(low + (high - low) * u);
        }
        Self::from_vec(nrows, ncols, data)
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Create a vector with entries drawn uniformly from `[0, 1)`.
    pub fn random(n: usize) -> Self {
        Self {
            inner: Matrix::random(1, n),
        }
    }

    /// Create a vector with entries drawn uniformly from `[low, high)`.
    pub fn random_range(n: usize, low: T, high: T) -> Self {
        Self {
            inner: Matrix::random_range(1, n, low, high),
        }
    }
}
