use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by everything that needs `sqrt`, `abs`, or a guarded division
/// (decompositions, norms, solvers).
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` constant into `Self`.
    ///
    /// The singularity and convergence guards in this crate are fixed
    /// decimal constants (`1e-10`, `1e-12`), not machine epsilons; this is
    /// the total conversion that carries them into `f32` kernels.
    fn from_f64(v: f64) -> Self;
}

/// Concrete impls for the real float types.
macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn from_f64(v: f64) -> $t {
                    v as $t
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
