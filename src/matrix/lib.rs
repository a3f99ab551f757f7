/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A dense matrix of `f64` stored in a single flat buffer, column-major.
//!
//! The header (`nrow`, `ncol`) and the buffer (`data`) are public fields.
//! Nothing stops a caller from editing one without the other, so every
//! operation begins by checking that `nrow * ncol == data.len()`, and
//! fails with [`MatrixError::ImpossibleMatrix`] before touching anything
//! if that is not so.
//!
//! Indices are signed so that a negative index can be reported as
//! [`MatrixError::InvalidIndex`] instead of being unrepresentable.
//! Everything is 0-based.

#[macro_use] extern crate log;
#[cfg(test)]
#[macro_use] extern crate cmat_assert_close;

pub use crate::errors::{MatrixError, ErrorKind, Result};
pub use crate::matrix::Matrix;
pub use crate::arith::{add, multiply};
pub use crate::eq::{equal, equal_with_tolerance};

mod errors;
mod matrix;
mod access;
mod growth;
mod arith;
mod eq;
