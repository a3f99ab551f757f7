/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `cmat-grow`: the same square matrix built one row at a time, and then
//! one column at a time.

use crate::FailResult;

use ::cmat_matrix::Matrix;
use ::std::time::{Duration, Instant};

pub(crate) fn run(size: usize) -> FailResult<()> {
    ensure!(size <= 1 << 14, "size {} is unreasonably large", size);

    let (by_rows, row_time) = timed(|| build_by_rows(size))?;
    info!("{0}x{0} by append_row:    {1:>10.3} ms", size, millis(row_time));

    let (by_cols, col_time) = timed(|| build_by_columns(size))?;
    info!("{0}x{0} by append_column: {1:>10.3} ms", size, millis(col_time));

    ensure!(by_rows == by_cols, "the two constructions disagree");
    if col_time > Duration::from_nanos(0) {
        info!("rows/columns time ratio: {:.1}", row_time.as_secs_f64() / col_time.as_secs_f64());
    }
    Ok(())
}

/// The element at `(r, c)` is `r * size + c` in either construction.
fn value_at(size: usize, r: usize, c: usize) -> f64
{ (r * size + c) as f64 }

pub(crate) fn build_by_rows(size: usize) -> FailResult<Matrix> {
    let mut m = Matrix::zeros(0, size as isize)?;
    for r in 0..size {
        let row = (0..size).map(|c| value_at(size, r, c)).collect::<Vec<_>>();
        m.append_row(&row)?;
    }
    Ok(m)
}

pub(crate) fn build_by_columns(size: usize) -> FailResult<Matrix> {
    let mut m = Matrix::zeros(size as isize, 0)?;
    for c in 0..size {
        let col = (0..size).map(|r| value_at(size, r, c)).collect::<Vec<_>>();
        m.append_column(&col)?;
    }
    Ok(m)
}

fn timed<T>(f: impl FnOnce() -> FailResult<T>) -> FailResult<(T, Duration)> {
    let start = Instant::now();
    let out = f()?;
    Ok((out, start.elapsed()))
}

fn millis(d: Duration) -> f64
{ d.as_secs_f64() * 1e3 }
