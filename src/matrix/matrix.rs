/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::{Result, MatrixError};

use ::std::fmt;
use ::cmat_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// Owned matrix of `f64` with **column-major** (Fortran) layout.
///
/// The element at `(r, c)` lives at `data[c * nrow + r]`.  Columns are
/// therefore contiguous, which makes [`append_column`] an append and
/// [`append_row`] a shuffle of the whole buffer.
///
/// The fields are public.  Any method will refuse to run if they have
/// been left in a state where `nrow * ncol != data.len()`.
///
/// [`append_column`]: #method.append_column
/// [`append_row`]: #method.append_row
// please resist the urge to go n-dimensional
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
pub struct Matrix {
    pub nrow: isize,
    pub ncol: isize,
    // column-contiguous data
    pub data: Vec<f64>,
}

/// `nrow * ncol`, if that is a sensible buffer length.
fn checked_size(nrow: isize, ncol: isize) -> Option<usize> {
    if nrow < 0 || ncol < 0 {
        return None;
    }
    (nrow as usize).checked_mul(ncol as usize)
}

fn check_dims(nrow: isize, ncol: isize) -> Result<()> {
    for &dim in &[nrow, ncol] {
        if dim < 0 {
            return Err(MatrixError::InvalidIndex { index: dim });
        }
    }
    Ok(())
}

//--------------------------------------------------
// construction

impl Matrix {
    /// An `nrow x ncol` matrix of zeros.
    pub fn zeros(nrow: isize, ncol: isize) -> Result<Matrix> {
        check_dims(nrow, ncol)?;
        let len = checked_size(nrow, ncol)
            .ok_or(MatrixError::ImpossibleMatrix { nrow, ncol, len: 0 })?;
        Ok(Matrix { nrow, ncol, data: vec![0.0; len] })
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: isize) -> Result<Matrix> {
        let mut out = Matrix::zeros(n, n)?;
        let n = n as usize;
        for i in 0..n {
            out.data[i * n + i] = 1.0;
        }
        Ok(out)
    }

    /// Build a matrix from column-major data.
    ///
    /// The data is copied; the matrix does not keep any connection to `data`.
    pub fn from_data(nrow: isize, ncol: isize, data: &[f64]) -> Result<Matrix>
    { Matrix::from_vec(nrow, ncol, data.to_vec()) }

    /// Like [`from_data`](#method.from_data), but takes ownership of an existing buffer.
    pub fn from_vec(nrow: isize, ncol: isize, data: Vec<f64>) -> Result<Matrix> {
        check_dims(nrow, ncol)?;
        let out = Matrix { nrow, ncol, data };
        out.check_shape()?;
        Ok(out)
    }

    /// Deep copy.
    ///
    /// Equivalent to `clone()`, but reports a corrupted header instead of
    /// faithfully copying it.
    pub fn to_copy(&self) -> Result<Matrix> {
        self.check_shape()?;
        Ok(self.clone())
    }

    /// A new matrix holding the transpose.
    ///
    /// The header swap alone would be wrong here; the data must be permuted
    /// so that the old rows become contiguous.
    pub fn to_transpose(&self) -> Result<Matrix> {
        self.check_shape()?;

        let (nrow, ncol) = (self.nrow as usize, self.ncol as usize);
        let mut data = Vec::with_capacity(self.data.len());
        // t(c, r) = m(r, c); walking r outermost emits t column by column.
        for r in 0..nrow {
            for c in 0..ncol {
                data.push(self.data[c * nrow + r]);
            }
        }
        Ok(Matrix { nrow: self.ncol, ncol: self.nrow, data })
    }
}

//--------------------------------------------------
// the guard, and a couple of plain accessors

impl Matrix {
    /// Verify that the header agrees with the buffer.
    ///
    /// Negative header fields are also rejected here.  (with only the
    /// product check, `-2 x -3` would pass for a buffer of length 6)
    pub fn check_shape(&self) -> Result<()> {
        match checked_size(self.nrow, self.ncol) {
            Some(len) if len == self.data.len() => Ok(()),
            _ => {
                trace!("rejecting corrupted matrix header {}x{} (len {})", self.nrow, self.ncol, self.data.len());
                Err(MatrixError::ImpossibleMatrix {
                    nrow: self.nrow,
                    ncol: self.ncol,
                    len: self.data.len(),
                })
            },
        }
    }

    /// Whether [`check_shape`](#method.check_shape) would succeed.
    pub fn is_size_valid(&self) -> bool
    { self.check_shape().is_ok() }

    pub fn dims(&self) -> (isize, isize) { (self.nrow, self.ncol) }
    pub fn num_rows(&self) -> isize { self.nrow }
    pub fn num_cols(&self) -> isize { self.ncol }

    /// An owned copy of the backing buffer, in column-major order.
    pub fn to_column_major_vec(&self) -> Result<Vec<f64>> {
        self.check_shape()?;
        Ok(self.data.clone())
    }

    /// Borrow the backing buffer without copying.
    ///
    /// Unlike the other accessors, the returned slice *is* the matrix's
    /// storage.  It is valid only while the matrix is not mutated, which
    /// the borrow checker enforces.
    pub fn column_major_data(&self) -> Result<&[f64]> {
        self.check_shape()?;
        Ok(&self.data)
    }
}

//--------------------------------------------------

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool
    { crate::eq::equal(self, other) }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_size_valid() {
            return write!(f, "<impossible {}x{} matrix of {} elements>", self.nrow, self.ncol, self.data.len());
        }
        let (nrow, ncol) = (self.nrow as usize, self.ncol as usize);
        write!(f, "[")?;
        for r in 0..nrow {
            if r > 0 {
                write!(f, "\n ")?;
            }
            for c in 0..ncol {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[c * nrow + r])?;
            }
        }
        write!(f, "]")
    }
}

impl CheckClose for Matrix {
    type Scalar = f64;

    fn check_close(&self, other: &Matrix, tol: Tolerances) -> ::std::result::Result<(), CheckCloseError<f64>> {
        if self.dims() != other.dims() {
            return Err(CheckCloseError::ShapeMismatch {
                left: vec![self.nrow, self.ncol],
                right: vec![other.nrow, other.ncol],
            });
        }
        self.data.check_close(&other.data, tol)
    }
}
