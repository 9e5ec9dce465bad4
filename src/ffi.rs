//! Flat-array boundary consumed by the host runtime.
//!
//! Operands arrive as a row-major sequence of doubles plus explicit
//! `rows`/`cols`; results leave the same way, or as a single scalar. Kernel
//! errors become Python exceptions here and nowhere else.

use crate::matrix::error::MatrixError;
use crate::matrix::matrix_f64::MatrixF64;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::IndexOutOfBounds { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[pyfunction]
pub fn add(
    a: Vec<f64>,
    ra: usize,
    ca: usize,
    b: Vec<f64>,
    rb: usize,
    cb: usize,
) -> PyResult<Vec<f64>> {
    let a = MatrixF64::from_flat(a, ra, ca)?;
    let b = MatrixF64::from_flat(b, rb, cb)?;
    Ok((&a + &b)?.into_flat())
}

#[pyfunction]
pub fn subtract(
    a: Vec<f64>,
    ra: usize,
    ca: usize,
    b: Vec<f64>,
    rb: usize,
    cb: usize,
) -> PyResult<Vec<f64>> {
    let a = MatrixF64::from_flat(a, ra, ca)?;
    let b = MatrixF64::from_flat(b, rb, cb)?;
    Ok((&a - &b)?.into_flat())
}

#[pyfunction]
pub fn multiply(
    a: Vec<f64>,
    ra: usize,
    ca: usize,
    b: Vec<f64>,
    rb: usize,
    cb: usize,
) -> PyResult<Vec<f64>> {
    let a = MatrixF64::from_flat(a, ra, ca)?;
    let b = MatrixF64::from_flat(b, rb, cb)?;
    Ok((&a * &b)?.into_flat())
}

#[pyfunction]
pub fn scalar_multiply(a: Vec<f64>, r: usize, c: usize, scalar: f64) -> PyResult<Vec<f64>> {
    let a = MatrixF64::from_flat(a, r, c)?;
    Ok((&a * scalar).into_flat())
}

#[pyfunction]
pub fn transpose(a: Vec<f64>, r: usize, c: usize) -> PyResult<Vec<f64>> {
    let a = MatrixF64::from_flat(a, r, c)?;
    Ok(a.transpose().into_flat())
}

#[pyfunction]
pub fn determinant(a: Vec<f64>, r: usize, c: usize) -> PyResult<f64> {
    let a = MatrixF64::from_flat(a, r, c)?;
    Ok(a.determinant()?)
}

#[pyfunction]
pub fn inverse(a: Vec<f64>, r: usize, c: usize) -> PyResult<Vec<f64>> {
    let a = MatrixF64::from_flat(a, r, c)?;
    Ok(a.inverse()?.into_flat())
}

#[pyfunction]
pub fn trace(a: Vec<f64>, r: usize, c: usize) -> PyResult<f64> {
    let a = MatrixF64::from_flat(a, r, c)?;
    Ok(a.trace()?)
}

#[pyfunction]
pub fn rank(a: Vec<f64>, r: usize, c: usize) -> PyResult<usize> {
    let a = MatrixF64::from_flat(a, r, c)?;
    Ok(a.rank())
}

#[pyfunction]
pub fn is_symmetric(a: Vec<f64>, r: usize, c: usize) -> PyResult<bool> {
    let a = MatrixF64::from_flat(a, r, c)?;
    Ok(a.is_symmetric())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_add() {
        let result = add(
            vec![1.0, 2.0, 3.0, 4.0],
            2,
            2,
            vec![5.0, 6.0, 7.0, 8.0],
            2,
            2,
        )
        .unwrap();
        assert_eq!(result, vec![6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn test_flat_multiply_shape() {
        // 2x3 times 3x1 -> flat length 2
        let result = multiply(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            2,
            3,
            vec![7.0, 8.0, 9.0],
            3,
            1,
        )
        .unwrap();
        assert_eq!(result, vec![50.0, 122.0]);
    }

    #[test]
    fn test_flat_transpose() {
        let result = transpose(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(result, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_flat_scalars() {
        assert_eq!(determinant(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap(), -2.0);
        assert_eq!(trace(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap(), 5.0);
        assert_eq!(rank(vec![1.0, 2.0, 2.0, 4.0], 2, 2).unwrap(), 1);
        assert!(is_symmetric(vec![1.0, 2.0, 2.0, 1.0], 2, 2).unwrap());
        assert!(!is_symmetric(vec![1.0, 2.0, 3.0, 1.0], 2, 2).unwrap());
    }

    #[test]
    fn test_flat_errors() {
        // 2x3 plus 3x2
        assert!(add(vec![0.0; 6], 2, 3, vec![0.0; 6], 3, 2).is_err());
        // singular inverse
        assert!(inverse(vec![1.0, 2.0, 2.0, 4.0], 2, 2).is_err());
        // flat data does not match the declared shape
        assert!(transpose(vec![1.0, 2.0, 3.0], 2, 2).is_err());
        // zero dimension
        assert!(determinant(vec![], 0, 0).is_err());
    }

    #[test]
    fn test_flat_inverse_round_trip() {
        let inv = inverse(vec![4.0, 7.0, 2.0, 6.0], 2, 2).unwrap();
        let product = multiply(vec![4.0, 7.0, 2.0, 6.0], 2, 2, inv, 2, 2).unwrap();
        for (value, expected) in product.iter().zip([1.0, 0.0, 0.0, 1.0]) {
            assert!((value - expected).abs() < 1e-9);
        }
    }
}
