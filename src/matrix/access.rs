/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Element, row and column access.
//!
//! Everything here hands out *copies*.  A `Vec` returned by `get_row` has
//! no connection to the matrix; editing one never affects the other.
//! (`borrow_column` is the one exception, and says so in its name.)

use crate::errors::{Result, MatrixError, as_signed};
use crate::matrix::Matrix;

impl Matrix {
    /// Flat offset of `(row, col)`.
    ///
    /// The bounds check comes *before* the sign check, and the bounds check
    /// is against the whole buffer rather than each axis.  This means that:
    ///
    /// * `(-1, 1)` in a 3x2 matrix lands on offset 2, so it passes the bounds
    ///   check and is then reported as `InvalidIndex`.
    /// * `(3, 0)` in a 3x2 matrix lands on offset 3, which is `(0, 1)`.
    ///   Nothing rejects it.
    ///
    /// Both are long-standing behavior that callers may depend on.
    fn element_offset(&self, row: isize, col: isize) -> Result<usize> {
        self.check_shape()?;

        // i128 so that no choice of inputs can overflow
        let i = col as i128 * self.nrow as i128 + row as i128;
        let len = self.data.len();
        if i >= len as i128 {
            return Err(MatrixError::IndexOutOfBounds {
                index: clamp_to_isize(i),
                bound: as_signed(len),
            });
        }
        if i < 0 || row < 0 || col < 0 {
            let index = if row < 0 {
                row
            } else if col < 0 {
                col
            } else {
                clamp_to_isize(i)
            };
            return Err(MatrixError::InvalidIndex { index });
        }
        Ok(i as usize)
    }

    /// Validation shared by the row and column accessors.
    fn checked_axis_index(ind: isize, bound: isize) -> Result<usize> {
        if ind < 0 {
            return Err(MatrixError::InvalidIndex { index: ind });
        }
        if ind >= bound {
            return Err(MatrixError::IndexOutOfBounds { index: ind, bound });
        }
        Ok(ind as usize)
    }

    pub fn get_element(&self, row: isize, col: isize) -> Result<f64> {
        let i = self.element_offset(row, col)?;
        Ok(self.data[i])
    }

    pub fn set_element(&mut self, row: isize, col: isize, value: f64) -> Result<()> {
        let i = self.element_offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Copy out row `ind`.
    ///
    /// Rows are strided by `nrow` in the buffer, so this is a gather.
    pub fn get_row(&self, ind: isize) -> Result<Vec<f64>> {
        self.check_shape()?;
        let r = Matrix::checked_axis_index(ind, self.nrow)?;

        let stride = self.nrow as usize;
        Ok(self.data.iter().skip(r).step_by(stride).cloned().collect())
    }

    /// Copy out column `ind`.
    pub fn get_column(&self, ind: isize) -> Result<Vec<f64>> {
        Ok(self.borrow_column(ind)?.to_vec())
    }

    /// Borrow column `ind` directly from the backing buffer.
    ///
    /// Columns are contiguous, so this needs no copy.  The slice aliases
    /// the matrix's storage for as long as the borrow lives.
    pub fn borrow_column(&self, ind: isize) -> Result<&[f64]> {
        self.check_shape()?;
        let c = Matrix::checked_axis_index(ind, self.ncol)?;

        let nrow = self.nrow as usize;
        Ok(&self.data[c * nrow..(c + 1) * nrow])
    }

    /// Overwrite row `ind` with `values`.
    ///
    /// Either the whole row is written, or (on error) nothing is.
    pub fn set_row(&mut self, ind: isize, values: &[f64]) -> Result<()> {
        self.check_shape()?;
        if as_signed(values.len()) != self.ncol {
            return Err(MatrixError::SizeMismatch {
                what: "row length",
                expected: self.ncol,
                actual: as_signed(values.len()),
            });
        }
        let r = Matrix::checked_axis_index(ind, self.nrow)?;

        let stride = self.nrow as usize;
        for (dest, &value) in self.data.iter_mut().skip(r).step_by(stride).zip(values) {
            *dest = value;
        }
        Ok(())
    }

    /// Overwrite column `ind` with `values`.
    pub fn set_column(&mut self, ind: isize, values: &[f64]) -> Result<()> {
        self.check_shape()?;
        if as_signed(values.len()) != self.nrow {
            return Err(MatrixError::SizeMismatch {
                what: "column length",
                expected: self.nrow,
                actual: as_signed(values.len()),
            });
        }
        let c = Matrix::checked_axis_index(ind, self.ncol)?;

        let nrow = self.nrow as usize;
        self.data[c * nrow..(c + 1) * nrow].copy_from_slice(values);
        Ok(())
    }

    /// Iterate over copies of each row, top to bottom.
    pub fn rows_copied(&self) -> Result<impl Iterator<Item=Vec<f64>> + '_> {
        self.check_shape()?;
        let nrow = self.nrow as usize;
        let stride = nrow.max(1);
        Ok((0..nrow).map(move |r| {
            self.data.iter().skip(r).step_by(stride).cloned().collect::<Vec<_>>()
        }))
    }

    /// Iterate over copies of each column, left to right.
    pub fn columns_copied(&self) -> Result<impl Iterator<Item=Vec<f64>> + '_> {
        self.check_shape()?;
        let nrow = self.nrow as usize;
        let ncol = self.ncol as usize;
        Ok((0..ncol).map(move |c| self.data[c * nrow..(c + 1) * nrow].to_vec()))
    }
}

fn clamp_to_isize(i: i128) -> isize {
    if i > isize::MAX as i128 {
        isize::MAX
    } else if i < isize::MIN as i128 {
        isize::MIN
    } else {
        i as isize
    }
}
