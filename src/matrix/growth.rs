/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Growing a matrix in place.
//!
//! The two operations have honestly different costs.  Because storage is
//! column-major, a new column is a plain append (`O(nrow)`), while a new
//! row has to open a slot at the end of every existing column
//! (`O(nrow * ncol)`).  Code that builds a matrix incrementally should
//! prefer to do so column by column.

use crate::errors::{Result, MatrixError, as_signed};
use crate::matrix::Matrix;

impl Matrix {
    /// Append a column on the right.  `O(nrow)`; existing data does not move.
    pub fn append_column(&mut self, values: &[f64]) -> Result<()> {
        self.check_shape()?;
        if as_signed(values.len()) != self.nrow {
            return Err(MatrixError::SizeMismatch {
                what: "appended column length",
                expected: self.nrow,
                actual: as_signed(values.len()),
            });
        }

        self.data.extend_from_slice(values);
        self.ncol += 1;
        Ok(())
    }

    /// Append a row at the bottom.  `O(nrow * ncol)`.
    ///
    /// The buffer grows by `ncol` slots, and then each column in turn is
    /// given a gap at its end by shifting everything after it one place to
    /// the right.
    pub fn append_row(&mut self, values: &[f64]) -> Result<()> {
        self.check_shape()?;
        if as_signed(values.len()) != self.ncol {
            return Err(MatrixError::SizeMismatch {
                what: "appended row length",
                expected: self.ncol,
                actual: as_signed(values.len()),
            });
        }

        let old_capacity = self.data.capacity();
        self.data.resize(self.data.len() + values.len(), 0.0);
        if self.data.capacity() != old_capacity {
            debug!("append_row reallocated buffer ({} -> {})", old_capacity, self.data.capacity());
        }

        // from here on the header describes the grown buffer
        self.nrow += 1;

        let nrow = self.nrow as usize;
        let len = self.data.len();
        // the new slot of column c lives at c * nrow + (nrow - 1)
        for (c, &value) in values.iter().enumerate() {
            let i = c * nrow + nrow - 1;
            self.data.copy_within(i..len - 1, i + 1);
            self.data[i] = value;
        }
        Ok(())
    }
}
