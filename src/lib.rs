//! # lineal
//!
//! Dense linear algebra over generic real scalars, no-std compatible
//! (requires `alloc`). Runtime-sized matrices with the classical direct
//! decompositions and an iterative eigen/SVD layer.
//!
//! ## Quick start
//!
//! ```
//! use lineal::{Matrix, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(&[
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap();
//! assert!((x[0] - 2.0).abs() < 1e-12); // x = [2, 3, -1]
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: Heap-allocated `Matrix<T>` with runtime dimensions,
//!   `Vec<T>` row-major storage. Arithmetic operators, generators (zeros,
//!   identity, random fills), transpose, trace, norms, row/column access.
//!   [`Vector<T>`] is a single-row matrix with single-index access and dot,
//!   norm, and cross products. The `rayon` feature adds parallel matrix and
//!   matrix-vector products that are bitwise identical to the sequential ones.
//!
//! - [`linalg`]: Decompositions and solvers. LU (Doolittle, unpivoted, with
//!   a fixed singularity guard), QR (modified Gram-Schmidt, economy form),
//!   Cholesky (LLᵗ), LDLT, eigenvalues/eigenvectors by unshifted QR
//!   iteration, and SVD via the eigen-decomposition of the Gram matrix.
//!   Guarded forward/backward substitution. Each factorization offers
//!   `solve()` / `det()` / `inverse()` where they apply, and convenience
//!   methods on `Matrix`: `a.solve(&b)`, `a.inverse()`, `a.det()`,
//!   `a.eigenvalues(..)`, `a.svd()`. All failures are
//!   [`linalg::LinalgError`] values, never panics.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), required by the
//!     decompositions, norms, and solvers
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | baseline | Pure-Rust software float fallback for no-std targets |
//! | `rand`  | yes      | `Matrix::random` / `Vector::random` generators |
//! | `rayon` | no       | Parallel product and factorization kernels |
//! | `all`   | no       | `std` + `rand` + `rayon` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod traits;

pub use matrix::{Matrix, Vector};
pub use traits::{FloatScalar, Scalar};
