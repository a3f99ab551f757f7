/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::value::RType;
use ::cmat_matrix::MatrixError;

pub type Result<T> = ::std::result::Result<T, ConversionError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// Asked to read a value as a type it does not hold.
    #[error("input value type does not match desired output type (wanted {expected}, found {actual})")]
    TypeMismatch { expected: &'static str, actual: RType },

    /// The value is of a type that this operation cannot handle at all.
    #[error("type {actual} is not supported for {operation}")]
    UnsupportedType { operation: &'static str, actual: RType },

    /// Shape and length problems, including paired lists of unequal length.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
