/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Umbrella crate.  The real code lives in the `cmat-*` workspace members;
//! this just gathers their public surface in one place.

pub use ::cmat_matrix::{Matrix, MatrixError, ErrorKind, add, multiply, equal, equal_with_tolerance};

pub use ::cmat_matrix as matrix;
pub use ::cmat_stats as stats;
pub use ::cmat_par as par;
pub use ::cmat_interop as interop;
pub use ::cmat_tasks_config as config;
