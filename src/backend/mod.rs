//! # Backend Abstraction
//!
//! The fitting code never touches a concrete array type. Everything it needs
//! (dot products, element-wise subtraction, scaling, means) goes through the
//! [`Backend`] trait, so the same generator, loss and driver run on any
//! numeric array implementation.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Storage                  |
//! |------------------|-----------|--------------------------|
//! | `CpuBackend`     | `cpu`     | `Vec<f64>`, row-major    |
//! | `NdarrayBackend` | `ndarray` | `ndarray::Array1/Array2` |
//!
//! ## Example
//!
//! ```rust
//! use linreg_scratch::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x: Tensor2D<CpuBackend> = Tensor2D::new(vec![1.0, 0.0, 0.0, 1.0], 2, 2);
//! let w: Tensor1D<CpuBackend> = Tensor1D::new(vec![2.0, -3.4]);
//!
//! let y = x.matvec(&w).unwrap();
//! assert_eq!(y.to_vec(), vec![2.0, -3.4]);
//! ```

#[cfg(feature = "cpu")]
mod cpu;
#[cfg(feature = "cpu")]
/// Pure-Rust CPU backend with no external dependencies.
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
/// Backend built on the `ndarray` crate.
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// Scalar value representation and arithmetic operations.
pub mod scalar;
/// One-dimensional tensor abstraction.
pub mod tensor1d;
/// Two-dimensional tensor abstraction.
pub mod tensor2d;

pub use scalar::{Scalar, ScalarOps};
pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;

/// Numeric-vector capability required by the generator, loss and driver.
///
/// Raw backend operations are unchecked: callers go through [`Tensor1D`] and
/// [`Tensor2D`], which validate shapes and return
/// [`LinregError::DimensionMismatch`](crate::LinregError::DimensionMismatch)
/// before delegating here.
pub trait Backend: Clone + Copy + std::fmt::Debug + 'static {
    /// Scalar type supporting arithmetic operations.
    type Scalar: ScalarOps;

    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync;

    /// Two-dimensional tensor type (row-major samples × features).
    type Tensor2D: Clone + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Constructs a 1D tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// Callers guarantee `data.len() == rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D;

    // --- Element-wise operations ---

    /// Element-wise addition of two equal-length tensors.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction of two equal-length tensors.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise multiplication of two equal-length tensors.
    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Adds a scalar to each element.
    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Element-wise absolute value.
    fn abs_1d(t: &Self::Tensor1D) -> Self::Tensor1D;

    // --- Reductions ---

    /// Sum of all elements.
    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    /// Arithmetic mean of all elements. Callers guarantee a non-empty tensor.
    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    // --- Scalars and access ---

    /// Creates a backend scalar from an `f64` host value.
    fn scalar_f64(value: f64) -> Self::Scalar;

    /// Copies a 1D tensor into a host `Vec<f64>`.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    /// Copies a 2D tensor into host row vectors.
    fn to_rows_2d(t: &Self::Tensor2D) -> Vec<Vec<f64>>;

    /// Returns `(rows, cols)`.
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    // --- Linear algebra ---

    /// `A · x` for `A` of shape (m × n) and `x` of length n.
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// `Aᵀ · x` for `A` of shape (m × n) and `x` of length m.
    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;
}
