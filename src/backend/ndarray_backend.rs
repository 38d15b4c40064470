use super::Backend;
use ndarray::{Array1, Array2, Axis};

/// Tensor backend implemented on top of the `ndarray` crate.
///
/// # Type mappings
/// - `Scalar`: `f64`
/// - `Tensor1D`: `ndarray::Array1<f64>`
/// - `Tensor2D`: [`NdarrayTensor2D`] wrapper around `ndarray::Array2<f64>`
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

/// Wrapper type for 2D tensors using ndarray's `Array2<f64>`.
///
/// # Example
/// ```
/// use linreg_scratch::backend::NdarrayTensor2D;
/// let tensor = NdarrayTensor2D::from(&[
///     vec![1.0f64, 2.0f64, 3.0f64],
///     vec![4.0f64, 5.0f64, 6.0f64],
/// ][..]);
/// assert_eq!(tensor.0.shape(), &[2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct NdarrayTensor2D(pub Array2<f64>);

impl From<&[Vec<f64>]> for NdarrayTensor2D {
    /// # Panics
    /// Panics if rows have inconsistent lengths.
    fn from(x: &[Vec<f64>]) -> Self {
        let rows = x.len();
        if rows == 0 {
            return NdarrayTensor2D(Array2::zeros((0, 0)));
        }
        let cols = x[0].len();
        assert!(
            x.iter().all(|r| r.len() == cols),
            "All rows must have same length"
        );
        NdarrayTensor2D(Array2::from_shape_fn((rows, cols), |(i, j)| x[i][j]))
    }
}

impl Backend for NdarrayBackend {
    type Scalar = f64;
    type Tensor1D = Array1<f64>;
    type Tensor2D = NdarrayTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        Array1::zeros(len)
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        NdarrayTensor2D(
            Array2::from_shape_vec((rows, cols), data).expect("data length must equal rows * cols"),
        )
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a + b
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a - b
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a * b
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t * *s
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t + *s
    }

    fn abs_1d(t: &Self::Tensor1D) -> Self::Tensor1D {
        t.mapv(f64::abs)
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.sum()
    }

    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.mean().unwrap_or(f64::NAN)
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn to_rows_2d(t: &Self::Tensor2D) -> Vec<Vec<f64>> {
        t.0.axis_iter(Axis(0)).map(|row| row.to_vec()).collect()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        t.0.dim()
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        a.0.dot(x)
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        a.0.t().dot(x)
    }
}
