use crate::traits::{FloatScalar, Scalar};

use super::vector::Vector;
use super::Matrix;

// ── Vector norms ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Squared L2 norm (dot product with self).
    ///
    /// ```
    /// use lineal::Vector;
    /// let v = Vector::from_slice(&[3.0, 4.0]);
    /// assert_eq!(v.norm_squared(), 25.0);
    /// ```
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar> Vector<T> {
    /// L2 (Euclidean) norm.
    ///
    /// ```
    /// use lineal::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        let mut sum = T::zero();
        for &x in self.as_slice() {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// L1 norm (sum of absolute values).
    ///
    /// ```
    /// use lineal::Vector;
    /// let v = Vector::from_slice(&[1.0_f64, -2.0, 3.0]);
    /// assert!((v.norm_l1() - 6.0).abs() < 1e-12);
    /// ```
    pub fn norm_l1(&self) -> T {
        let mut sum = T::zero();
        for &x in self.as_slice() {
            sum = sum + x.abs();
        }
        sum
    }

    /// Return a unit vector in the same direction.
    ///
    /// Panics if the norm is zero.
    ///
    /// ```
    /// use lineal::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// let u = v.normalize();
    /// assert!((u.norm() - 1.0).abs() < 1e-12);
    /// assert!((u[0] - 0.6).abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        assert!(n > T::zero(), "cannot normalize a zero vector");
        self / n
    }
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Squared Frobenius norm (sum of all elements squared).
    pub fn frobenius_norm_squared(&self) -> T {
        let mut sum = T::zero();
        for &x in self.iter() {
            sum = sum + x * x;
        }
        sum
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm (square root of the sum of squared elements).
    ///
    /// ```
    /// use lineal::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_squared().sqrt()
    }

    /// Infinity norm (maximum absolute row sum).
    ///
    /// ```
    /// use lineal::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for i in 0..self.nrows() {
            let mut row_sum = T::zero();
            for j in 0..self.ncols() {
                row_sum = row_sum + self[(i, j)].abs();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// One norm (maximum absolute column sum).
    ///
    /// ```
    /// use lineal::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_one() - 6.0).abs() < 1e-12);
    /// ```
    pub fn norm_one(&self) -> T {
        let mut max = T::zero();
        for j in 0..self.ncols() {
            let mut col_sum = T::zero();
            for i in 0..self.nrows() {
                col_sum = col_sum + self[(i, j)].abs();
            }
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }
}
