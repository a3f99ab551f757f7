/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::matrix::Matrix;

fn same_shape(a: &Matrix, b: &Matrix) -> bool {
    // The buffer lengths should agree whenever the headers do, but the
    // headers are public and can lie.
    a.dims() == b.dims() && a.data.len() == b.data.len()
}

/// Exact equality of shape and every element.
///
/// Differing shapes are simply unequal, not an error.  Floating point error
/// counts as a difference; see [`equal_with_tolerance`].
pub fn equal(a: &Matrix, b: &Matrix) -> bool
{ same_shape(a, b) && a.data == b.data }

/// Like [`equal`], but elements may differ by up to `tol` (inclusive).
///
/// A NaN difference is never within tolerance.
pub fn equal_with_tolerance(a: &Matrix, b: &Matrix, tol: f64) -> bool
{
    same_shape(a, b) && a.data.iter().zip(&b.data).all(|(x, y)| (x - y).abs() <= tol)
}
