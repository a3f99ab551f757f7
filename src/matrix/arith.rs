/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::{Result, MatrixError, as_signed};
use crate::matrix::Matrix;

// NOTE: There is deliberately no subtract_constant or divide_constant.
//       Add the negation, or multiply by the reciprocal.
impl Matrix {
    /// Add `c` to every element, in place.
    pub fn add_constant(&mut self, c: f64) -> Result<()> {
        self.check_shape()?;
        for x in &mut self.data {
            *x += c;
        }
        Ok(())
    }

    /// Multiply every element by `c`, in place.
    pub fn multiply_constant(&mut self, c: f64) -> Result<()> {
        self.check_shape()?;
        for x in &mut self.data {
            *x *= c;
        }
        Ok(())
    }
}

/// Elementwise sum of two matrices of identical shape.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.check_shape()?;
    b.check_shape()?;
    if a.nrow != b.nrow {
        return Err(MatrixError::SizeMismatch { what: "row count", expected: a.nrow, actual: b.nrow });
    }
    if a.ncol != b.ncol {
        return Err(MatrixError::SizeMismatch { what: "column count", expected: a.ncol, actual: b.ncol });
    }

    let data = a.data.iter().zip(&b.data).map(|(x, y)| x + y).collect();
    Ok(Matrix { nrow: a.nrow, ncol: a.ncol, data })
}

/// Matrix product `a * b`.
///
/// Element `(i, j)` of the output is the dot product of row `i` of `a`
/// with column `j` of `b`, gathered through the ordinary accessors.
// this is suboptimal.  who cares.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.check_shape()?;
    b.check_shape()?;
    if a.ncol != b.nrow {
        return Err(MatrixError::SizeMismatch { what: "inner dimension", expected: a.ncol, actual: b.nrow });
    }

    let mut out = Matrix::zeros(a.nrow, b.ncol)?;
    for i in 0..a.nrow {
        let a_row = a.get_row(i)?;
        for j in 0..b.ncol {
            let b_col = b.borrow_column(j)?;
            out.set_element(i, j, dot(&a_row, b_col)?)?;
        }
    }
    Ok(out)
}

fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(MatrixError::SizeMismatch {
            what: "dot product operands",
            expected: as_signed(a.len()),
            actual: as_signed(b.len()),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}
