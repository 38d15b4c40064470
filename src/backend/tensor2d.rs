use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use crate::error::{LinregError, Result};
use std::marker::PhantomData;

/// Backend-typed 2D tensor: a row-major feature matrix (samples × features).
#[derive(Clone)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> std::fmt::Debug for Tensor2D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tensor2D").field(&self.to_rows()).finish()
    }
}

impl<B: Backend> Tensor2D<B> {
    /// Builds a matrix from row-major data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`. Use [`Tensor2D::from_rows`] for
    /// validated construction.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self {
            data: B::from_vec_2d(data, rows, cols),
            backend: PhantomData,
        }
    }

    /// Builds a matrix from row vectors, checking that every row has the
    /// same length.
    ///
    /// ```
    /// use linreg_scratch::backend::{CpuBackend, Tensor2D};
    ///
    /// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    /// assert_eq!(x.shape(), (2, 2));
    /// assert!(Tensor2D::<CpuBackend>::from_rows(&[vec![1.0], vec![1.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
            return Err(LinregError::mismatch("feature row width", n_cols, bad.len()));
        }
        let flat = rows.iter().flatten().copied().collect();
        Ok(Self::new(flat, n_rows, n_cols))
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    /// Number of rows (samples).
    pub fn rows(&self) -> usize {
        self.shape().0
    }

    /// Number of columns (features).
    pub fn cols(&self) -> usize {
        self.shape().1
    }

    /// Copies the matrix into host row vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        B::to_rows_2d(&self.data)
    }

    /// Matrix-vector product `self · v`.
    ///
    /// Fails with [`LinregError::DimensionMismatch`] if `v.len() != cols`.
    pub fn matvec(&self, v: &Tensor1D<B>) -> Result<Tensor1D<B>> {
        if self.cols() != v.len() {
            return Err(LinregError::mismatch("matrix-vector product", self.cols(), v.len()));
        }
        Ok(Tensor1D::from_raw(B::matvec(&self.data, &v.data)))
    }

    /// Transposed matrix-vector product `selfᵀ · v`.
    ///
    /// Fails with [`LinregError::DimensionMismatch`] if `v.len() != rows`.
    pub fn tmatvec(&self, v: &Tensor1D<B>) -> Result<Tensor1D<B>> {
        if self.rows() != v.len() {
            return Err(LinregError::mismatch(
                "transposed matrix-vector product",
                self.rows(),
                v.len(),
            ));
        }
        Ok(Tensor1D::from_raw(B::matvec_transposed(&self.data, &v.data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_tensor2d_matvec_ops() {
        // A = [[1.0, 2.0],
        //      [3.0, 4.0]]
        let a = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let x = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);

        assert_eq!(a.matvec(&x).unwrap().to_vec(), vec![1.0, 3.0]);
        // Aᵀ @ x = [1.0, 2.0]
        assert_eq!(a.tmatvec(&x).unwrap().to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_tensor2d_matvec_mismatch() {
        let a = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
        let x = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0, 1.0]);
        let err = a.matvec(&x).unwrap_err();
        assert!(matches!(
            err,
            LinregError::DimensionMismatch {
                expected: 2,
                got: 3,
                ..
            }
        ));
        assert!(a.tmatvec(&Tensor1D::zeros(2)).is_err());
    }

    #[test]
    fn test_tensor2d_shape() {
        let t = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0], 3, 1);
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 1);
    }

    #[test]
    fn test_tensor2d_from_rows_ragged() {
        let err = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.is_dimension_mismatch());
    }

    #[test]
    fn test_tensor2d_to_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let t = Tensor2D::<CpuBackend>::from_rows(&rows).unwrap();
        assert_eq!(t.to_rows(), rows);
    }
}
