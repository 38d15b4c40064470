use crate::backend::Backend;
use std::marker::PhantomData;

/// Scalar operations required by numerical backends.
///
/// Implemented for the primitive floating-point type a backend computes in.
///
/// # Example
/// ```
/// use linreg_scratch::backend::ScalarOps;
///
/// let x = 4.0f64;
/// assert_eq!(ScalarOps::abs(-x), 4.0);
/// assert_eq!(x.to_f64(), 4.0);
/// ```
pub trait ScalarOps:
    Clone
    + Copy
    + Send
    + Sync
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Sub<Output = Self>
{
    /// Returns the absolute value of the scalar.
    fn abs(self) -> Self;

    /// Converts this scalar to an `f64` host value.
    fn to_f64(self) -> f64;
}

impl ScalarOps for f64 {
    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// Backend-typed scalar wrapper.
///
/// Carries the originating backend as a phantom type so scalars from
/// different backends cannot be mixed.
///
/// # Example
/// ```
/// use linreg_scratch::backend::{CpuBackend, Scalar};
///
/// let s: Scalar<CpuBackend> = Scalar::new(2.0);
/// let squared = s * s;
/// assert_eq!(squared.to_f64(), 4.0);
/// ```
#[derive(Clone, Debug, Copy)]
pub struct Scalar<B: Backend> {
    pub(crate) data: B::Scalar,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Scalar<B> {
    /// Creates a new scalar from an `f64` host value.
    pub fn new(f: f64) -> Self {
        Self {
            data: B::scalar_f64(f),
            backend: PhantomData,
        }
    }

    /// Converts this backend scalar to a host `f64` value.
    pub fn to_f64(&self) -> f64 {
        self.data.to_f64()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            data: self.data.abs(),
            backend: PhantomData,
        }
    }
}

impl<B: Backend> std::ops::Add for Scalar<B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            data: self.data + rhs.data,
            backend: PhantomData,
        }
    }
}

impl<B: Backend> std::ops::Sub for Scalar<B> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            data: self.data - rhs.data,
            backend: PhantomData,
        }
    }
}

impl<B: Backend> std::ops::Mul for Scalar<B> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            data: self.data * rhs.data,
            backend: PhantomData,
        }
    }
}
