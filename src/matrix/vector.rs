use alloc::vec::Vec;
use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::traits::Scalar;

use super::Matrix;

/// Dynamically-sized vector (wraps a 1×N `Matrix`).
///
/// Enforces the single-row constraint and provides single-index access `v[i]`.
///
/// # Examples
///
/// ```
/// use lineal::Vector;
///
/// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v) - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    pub(crate) inner: Matrix<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a vector from a flat slice.
    ///
    /// ```
    /// use lineal::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// assert_eq!(v.len(), 3);
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            inner: Matrix::from_slice(1, data.len(), data),
        }
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use lineal::Vector;
    /// let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: Matrix::from_vec(1, n, data),
        }
    }

    /// Create a zero vector of length `n`.
    ///
    /// ```
    /// use lineal::Vector;
    /// let v: Vector<f64> = Vector::zeros(4);
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v[3], 0.0);
    /// ```
    pub fn zeros(n: usize) -> Self {
        Self {
            inner: Matrix::zeros(1, n),
        }
    }

    /// Create a vector filled with a value.
    pub fn fill(n: usize, value: T) -> Self {
        Self {
            inner: Matrix::fill(1, n, value),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dot product.
    ///
    /// ```
    /// use lineal::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        let mut sum = T::zero();
        for i in 0..self.len() {
            sum = sum + self[i] * rhs[i];
        }
        sum
    }

    /// Element-wise product: `c[i] = a[i] * b[i]`.
    ///
    /// ```
    /// use lineal::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// let c = a.element_mul(&b);
    /// assert_eq!(c[0], 4.0);
    /// assert_eq!(c[2], 18.0);
    /// ```
    pub fn element_mul(&self, rhs: &Self) -> Self {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        Self {
            inner: self.inner.element_mul(&rhs.inner),
        }
    }

    /// Cross product of two 3-dimensional vectors.
    ///
    /// Panics unless both vectors have length 3.
    ///
    /// ```
    /// use lineal::Vector;
    /// let x = Vector::from_slice(&[1.0, 0.0, 0.0]);
    /// let y = Vector::from_slice(&[0.0, 1.0, 0.0]);
    /// let z = x.cross(&y);
    /// assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    pub fn cross(&self, rhs: &Self) -> Self {
        assert_eq!(
            (self.len(), rhs.len()),
            (3, 3),
            "cross product requires 3-dimensional vectors",
        );
        Self::from_slice(&[
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// View the vector data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.inner.iter()
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(0, i)]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(0, i)]
    }
}

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> Add for Vector<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Vector<T>) -> Vector<T> {
        self + &rhs
    }
}

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "vector length mismatch: {} + {}",
            self.len(),
            rhs.len(),
        );
        Vector {
            inner: &self.inner + &rhs.inner,
        }
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        self - &rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "vector length mismatch: {} - {}",
            self.len(),
            rhs.len(),
        );
        Vector {
            inner: &self.inner - &rhs.inner,
        }
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Vector { inner: -self.inner }
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;
    fn neg(self) -> Vector<T> {
        Vector {
            inner: -&self.inner,
        }
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Vector {
            inner: self.inner * rhs,
        }
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: T) -> Vector<T> {
        Vector {
            inner: &self.inner * rhs,
        }
    }
}

macro_rules! impl_scalar_mul_vec {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_vec!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Vector {
            inner: self.inner / rhs,
        }
    }
}

impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;
    fn div(self, rhs: T) -> Vector<T> {
        Vector {
            inner: &self.inner / rhs,
        }
    }
}

// ── Matrix × vector: (M×N) * N → M ──────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    /// Matrix-vector product `y = A x` with `y[i] = Σ_j A[i][j] * x[j]`.
    ///
    /// ```
    /// use lineal::{Matrix, Vector};
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    /// let x = Vector::from_slice(&[1.0, 1.0]);
    /// let y = &a * &x;
    /// assert_eq!(y.as_slice(), &[3.0, 7.0, 11.0]);
    /// ```
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.ncols(),
            rhs.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.nrows(),
            self.ncols(),
            rhs.len(),
        );
        let mut y = Vector::zeros(self.nrows());
        for i in 0..self.nrows() {
            let mut value = T::zero();
            for (j, &x_j) in rhs.as_slice().iter().enumerate() {
                value = value + self[(i, j)] * x_j;
            }
            y[i] = value;
        }
        y
    }
}

impl<T: Scalar> Mul<Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        &self * &rhs
    }
}

// ── Conversions: Vector ↔ Matrix ────────────────────────────────────

impl<T: Scalar> From<Vector<T>> for Matrix<T> {
    fn from(v: Vector<T>) -> Self {
        v.inner
    }
}

impl<T: Scalar> From<&Vector<T>> for Matrix<T> {
    fn from(v: &Vector<T>) -> Self {
        v.inner.clone()
    }
}
