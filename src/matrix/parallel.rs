//! Multi-threaded matrix products on top of [rayon].
//!
//! The parallel kernels split the *output* across threads, one row at a
//! time, and run the same inner loops as the sequential operators. Every
//! output element is therefore accumulated in the same order as in the
//! single-threaded product, and the results are bitwise identical.

use alloc::vec;
use rayon::prelude::*;

use crate::traits::Scalar;

use super::vector::Vector;
use super::Matrix;

impl<T: Scalar + Send + Sync> Matrix<T> {
    /// Matrix product computed across the rayon thread pool.
    ///
    /// Rows of the result are computed independently in parallel. The
    /// output is bitwise identical to `self * rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not agree, with the same message
    /// as the `*` operator.
    ///
    /// ```
    /// use lineal::Matrix;
    /// let a = Matrix::from_fn(20, 30, |i, j| (i + 2 * j) as f64);
    /// let b = Matrix::from_fn(30, 10, |i, j| (3 * i + j) as f64);
    /// assert_eq!(a.par_mul(&b), &a * &b);
    /// ```
    pub fn par_mul(&self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols
        );
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); self.nrows * p];
        if p == 0 {
            // par_chunks_mut rejects a zero chunk width
            return Matrix {
                data,
                nrows: self.nrows,
                ncols: p,
            };
        }
        data.par_chunks_mut(p)
            .enumerate()
            .for_each(|(i, out_row)| {
                for k in 0..n {
                    let a_ik = self.data[i * n + k];
                    for (j, out) in out_row.iter_mut().enumerate() {
                        *out = *out + a_ik * rhs.data[k * p + j];
                    }
                }
            });
        Matrix {
            data,
            nrows: self.nrows,
            ncols: p,
        }
    }

    /// Matrix-vector product computed across the rayon thread pool.
    ///
    /// Elements of the result are computed independently in parallel and
    /// the output is bitwise identical to `self * rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs.len()` does not match the column count.
    pub fn par_mul_vec(&self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.ncols,
            rhs.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.nrows,
            self.ncols,
            rhs.len()
        );
        let n = self.ncols;
        let x = rhs.as_slice();
        let mut data = vec![T::zero(); self.nrows];
        data.par_iter_mut().enumerate().for_each(|(i, out)| {
            let row = &self.data[i * n..(i + 1) * n];
            let mut acc = T::zero();
            for (a, xj) in row.iter().zip(x) {
                acc = acc + *a * *xj;
            }
            *out = acc;
        });
        Vector {
            inner: Matrix {
                data,
                nrows: 1,
                ncols: self.nrows,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par_mul_matches_sequential() {
        let a = Matrix::from_fn(17, 23, |i, j| (i as f64 - 0.5 * j as f64).sin());
        let b = Matrix::from_fn(23, 11, |i, j| (0.3 * i as f64 + j as f64).cos());
        assert_eq!(a.par_mul(&b), &a * &b);
    }

    #[test]
    fn par_mul_integer() {
        let a = Matrix::from_fn(8, 8, |i, j| (i * 8 + j) as i64);
        let b = Matrix::from_fn(8, 8, |i, j| (i + j) as i64);
        assert_eq!(a.par_mul(&b), &a * &b);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn par_mul_dim_mismatch() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        let b: Matrix<f64> = Matrix::zeros(4, 2);
        let _ = a.par_mul(&b);
    }

    #[test]
    fn par_mul_vec_matches_sequential() {
        let a = Matrix::from_fn(31, 13, |i, j| 1.0 / (1.0 + i as f64 + j as f64));
        let x = Vector::from_vec((0..13).map(|k| k as f64 * 0.7 - 2.0).collect());
        assert_eq!(a.par_mul_vec(&x), &a * &x);
    }
}
