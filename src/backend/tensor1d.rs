use super::scalar::Scalar;
use crate::backend::Backend;
use crate::error::{LinregError, Result};
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native vector (`B::Tensor1D`). Binary operations come in
/// two flavors: `checked_*` methods validate lengths and return
/// [`LinregError::DimensionMismatch`], the plain ones assume the caller
/// already did.
///
/// # Example
/// ```
/// use linreg_scratch::backend::{CpuBackend, Scalar, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(x.len(), 3);
///
/// let y = x.scale(&Scalar::<CpuBackend>::new(2.0));
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> std::fmt::Debug for Tensor1D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tensor1D").field(&self.to_vec()).finish()
    }
}

impl<B: Backend> Tensor1D<B> {
    pub(crate) fn from_raw(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Creates a new 1D tensor from host values.
    pub fn new(data: Vec<f64>) -> Self {
        Self::from_raw(B::from_vec_1d(data))
    }

    /// Creates a 1D tensor filled with zeros.
    ///
    /// ```
    /// use linreg_scratch::backend::{CpuBackend, Tensor1D};
    ///
    /// let zeros: Tensor1D<CpuBackend> = Tensor1D::zeros(4);
    /// assert_eq!(zeros.to_vec(), vec![0.0, 0.0, 0.0, 0.0]);
    /// ```
    pub fn zeros(len: usize) -> Self {
        Self::from_raw(B::zeros_1d(len))
    }

    /// Returns the number of elements in the tensor.
    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    /// Returns `true` if the tensor contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the tensor into a host `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }

    fn ensure_same_len(&self, other: &Self, context: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinregError::mismatch(context, self.len(), other.len()));
        }
        Ok(())
    }

    /// Element-wise `self - other`. Lengths must match.
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_raw(B::sub_1d(&self.data, &other.data))
    }

    /// Element-wise `self + other`. Lengths must match.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_raw(B::add_1d(&self.data, &other.data))
    }

    /// Element-wise `self * other`. Lengths must match.
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_raw(B::mul_1d(&self.data, &other.data))
    }

    /// Element-wise subtraction with length validation.
    ///
    /// ```
    /// use linreg_scratch::backend::{CpuBackend, Tensor1D};
    ///
    /// let a = Tensor1D::<CpuBackend>::new(vec![5.0, 7.0]);
    /// let b = Tensor1D::<CpuBackend>::new(vec![2.0]);
    /// assert!(a.checked_sub(&b).is_err());
    /// ```
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_len(other, "element-wise subtraction")?;
        Ok(self.sub(other))
    }

    /// Element-wise addition with length validation.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_len(other, "element-wise addition")?;
        Ok(self.add(other))
    }

    /// Dot product `Σᵢ aᵢ·bᵢ` with length validation.
    ///
    /// ```
    /// use linreg_scratch::backend::{CpuBackend, Tensor1D};
    ///
    /// let a = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
    /// let b = Tensor1D::<CpuBackend>::new(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).unwrap().to_f64(), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Result<Scalar<B>> {
        self.ensure_same_len(other, "dot product")?;
        Ok(self.mul(other).sum())
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Scalar<B> {
        Scalar {
            data: B::sum_all_1d(&self.data),
            backend: PhantomData,
        }
    }

    /// Arithmetic mean of all elements.
    ///
    /// Fails with [`LinregError::EmptyData`] on an empty tensor.
    pub fn mean(&self) -> Result<Scalar<B>> {
        if self.is_empty() {
            return Err(LinregError::EmptyData("mean of an empty tensor".into()));
        }
        Ok(Scalar {
            data: B::mean_all_1d(&self.data),
            backend: PhantomData,
        })
    }

    /// Element-wise absolute value.
    pub fn abs(&self) -> Self {
        Self::from_raw(B::abs_1d(&self.data))
    }

    /// Multiplies every element by `a`.
    pub fn scale(&self, a: &Scalar<B>) -> Self {
        Self::from_raw(B::mul_scalar_1d(&self.data, &a.data))
    }

    /// Adds `a` to every element.
    pub fn add_scalar(&self, a: &Scalar<B>) -> Self {
        Self::from_raw(B::add_scalar_1d(&self.data, &a.data))
    }

    /// L1 norm of `self - other`: `Σ|aᵢ - bᵢ|`.
    pub fn l1_distance(&self, other: &Self) -> Result<Scalar<B>> {
        Ok(self.checked_sub(other)?.abs().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_tensor1d_new() {
        let t = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(t.to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_tensor1d_new_empty() {
        let t = Tensor1D::<CpuBackend>::new(vec![]);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
    }

    #[test]
    fn test_tensor1d_zeros() {
        let t = Tensor1D::<CpuBackend>::zeros(5);
        assert_eq!(t.to_vec(), vec![0.0; 5]);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_tensor1d_sub() {
        let a = Tensor1D::<CpuBackend>::new(vec![5.0, 7.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![2.0, 3.0]);
        assert_eq!(a.checked_sub(&b).unwrap().to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_tensor1d_checked_sub_mismatch() {
        let a = Tensor1D::<CpuBackend>::new(vec![5.0, 7.0, 1.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![2.0, 3.0]);
        let err = a.checked_sub(&b).unwrap_err();
        assert!(matches!(
            err,
            LinregError::DimensionMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_tensor1d_checked_add() {
        let a = Tensor1D::<CpuBackend>::new(vec![1.0, -1.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![0.5, 0.5]);
        assert_eq!(a.checked_add(&b).unwrap().to_vec(), vec![1.5, -0.5]);
        assert!(a.checked_add(&Tensor1D::zeros(1)).is_err());
    }

    #[test]
    fn test_tensor1d_mul() {
        let a = Tensor1D::<CpuBackend>::new(vec![1.0, -2.0, 3.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![4.0, 5.0, -0.5]);
        assert_eq!(a.mul(&b).to_vec(), vec![4.0, -10.0, -1.5]);
    }

    #[test]
    fn test_tensor1d_mean() {
        let t = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(t.mean().unwrap().to_f64(), 2.5);
    }

    #[test]
    fn test_tensor1d_mean_empty_fails() {
        let t = Tensor1D::<CpuBackend>::zeros(0);
        assert!(matches!(t.mean(), Err(LinregError::EmptyData(_))));
    }

    #[test]
    fn test_tensor1d_dot_with_negatives() {
        let a = Tensor1D::<CpuBackend>::new(vec![1.0, -1.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![1.0, 1.0]);
        assert_eq!(a.dot(&b).unwrap().to_f64(), 0.0);
    }

    #[test]
    fn test_tensor1d_dot_mismatch() {
        let a = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![1.0]);
        assert!(a.dot(&b).unwrap_err().is_dimension_mismatch());
    }

    #[test]
    fn test_tensor1d_scale_zero() {
        let t = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
        let scaled = t.scale(&Scalar::<CpuBackend>::new(0.0));
        assert_eq!(scaled.to_vec(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_tensor1d_chaining_scale_add() {
        let t = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0]);
        let result = t
            .scale(&Scalar::<CpuBackend>::new(2.0))
            .add_scalar(&Scalar::<CpuBackend>::new(1.0));
        assert_eq!(result.to_vec(), vec![3.0, 5.0]);
    }

    #[test]
    fn test_tensor1d_l1_distance() {
        let a = Tensor1D::<CpuBackend>::new(vec![1.0, -2.0, 3.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![0.5, -1.0, 3.0]);
        assert_eq!(a.l1_distance(&b).unwrap().to_f64(), 1.5);
    }

    #[test]
    fn test_tensor1d_clone_independence() {
        let t = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0]);
        let modified = t.clone().scale(&Scalar::<CpuBackend>::new(2.0));
        assert_eq!(t.to_vec(), vec![1.0, 2.0]);
        assert_eq!(modified.to_vec(), vec![2.0, 4.0]);
    }
}
