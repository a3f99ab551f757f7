/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Single-vector conversions.

use crate::errors::{Result, ConversionError};
use crate::value::{RObject, RValue, Attributes};
use ::cmat_matrix::Matrix;

/// Read a numeric vector.  Integers are widened; the result is a copy.
pub fn as_numeric(obj: &RObject) -> Result<Vec<f64>> {
    match &obj.value {
        RValue::Real(v) => Ok(v.clone()),
        RValue::Integer(v) => Ok(v.iter().map(|&x| f64::from(x)).collect()),
        other => Err(ConversionError::TypeMismatch {
            expected: "numeric",
            actual: other.r_type(),
        }),
    }
}

pub fn as_character(obj: &RObject) -> Result<Vec<String>> {
    match &obj.value {
        RValue::Character(v) => Ok(v.clone()),
        other => Err(ConversionError::TypeMismatch {
            expected: "character",
            actual: other.r_type(),
        }),
    }
}

/// Read a matrix.  Only `Real` data is accepted.
///
/// A vector without a `dim` attribute reads as a single column.
/// A `dim` that disagrees with the data length is reported as
/// `ImpossibleMatrix`.
pub fn as_matrix(obj: &RObject) -> Result<Matrix> {
    let data = match &obj.value {
        RValue::Real(v) => v.clone(),
        other => return Err(ConversionError::TypeMismatch {
            expected: "real matrix",
            actual: other.r_type(),
        }),
    };
    let [nrow, ncol] = match obj.attributes.dim {
        Some(dim) => dim,
        None => [data.len() as isize, 1],
    };
    // the guard reports a corrupt dim with the offending sizes
    let matrix = Matrix { nrow, ncol, data };
    matrix.check_shape()?;
    Ok(matrix)
}

/// Always produces `Real`, even from integers.
pub fn numeric_to_object<T: Copy + Into<f64>>(values: &[T]) -> RObject
{ RObject::new(RValue::Real(values.iter().map(|&x| x.into()).collect())) }

pub fn integer_to_object(values: &[i32]) -> RObject
{ RObject::new(RValue::Integer(values.to_vec())) }

pub fn character_to_object<S: AsRef<str>>(values: &[S]) -> RObject
{ RObject::new(RValue::Character(values.iter().map(|s| s.as_ref().to_owned()).collect())) }

/// The buffer is copied in column-major order and `dim` is set.
pub fn matrix_to_object(matrix: &Matrix) -> Result<RObject> {
    let data = matrix.to_column_major_vec()?;
    let (nrow, ncol) = matrix.dims();
    Ok(RObject {
        value: RValue::Real(data),
        attributes: Attributes {
            dim: Some([nrow, ncol]),
            ..Default::default()
        },
    })
}
