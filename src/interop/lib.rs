/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Values of a dynamically typed statistical runtime, and conversions
//! between them and [`Matrix`].
//!
//! The runtime's values are modeled directly as Rust data ([`RObject`]),
//! so nothing here touches a foreign heap.  Every conversion copies: an
//! `RObject` and any `Matrix` or `Vec` made from it never share storage.
//!
//! A matrix in the runtime is a `Real` vector carrying a `dim` attribute,
//! in the same column-major order used by `Matrix`, so conversion in
//! either direction is a flat copy of the buffer.
//!
//! [`Matrix`]: ../cmat_matrix/struct.Matrix.html

#[macro_use] extern crate log;

pub use crate::errors::{ConversionError, Result};
pub use crate::value::{RValue, RObject, Attributes, RType};
pub use crate::convert::{
    as_numeric, as_character, as_matrix,
    numeric_to_object, integer_to_object, character_to_object, matrix_to_object,
};
pub use crate::list::{make_list, make_named_list, make_data_frame};

mod errors;
mod value;
mod convert;
mod list;
