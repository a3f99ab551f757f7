/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

pub type Result<T> = ::std::result::Result<T, MatrixError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// The header disagrees with the length of the backing buffer.
    #[error("matrix size and underlying data length are not compatible ({nrow} x {ncol} header, {len} elements)")]
    ImpossibleMatrix { nrow: isize, ncol: isize, len: usize },

    #[error("operation is not possible with given input dimensions ({what}: expected {expected}, got {actual})")]
    SizeMismatch { what: &'static str, expected: isize, actual: isize },

    /// A supplied index or dimension is negative.
    #[error("given index is impossible: {index} < 0")]
    InvalidIndex { index: isize },

    #[error("index is out of bounds: {index} >= {bound}")]
    IndexOutOfBounds { index: isize, bound: isize },

    /// Paired lists (e.g. names and values) disagree in count.
    ///
    /// The matrix itself never produces this; it exists for the
    /// marshalling layer built on top of it.
    #[error("lengths of provided inputs are not the same ({what}: expected {expected}, got {actual})")]
    LengthMismatch { what: &'static str, expected: usize, actual: usize },
}

/// The category of a [`MatrixError`], without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ImpossibleMatrix,
    SizeMismatch,
    InvalidIndex,
    IndexOutOfBounds,
    LengthMismatch,
}

impl MatrixError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            MatrixError::ImpossibleMatrix { .. } => ErrorKind::ImpossibleMatrix,
            MatrixError::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            MatrixError::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            MatrixError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            MatrixError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
        }
    }
}

// Lengths in this crate never approach isize::MAX (a Vec can't hold that many f64s),
// so this is lossless in practice.
pub(crate) fn as_signed(len: usize) -> isize
{ len as isize }
