/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Lists, named lists and data frames.
//!
//! A data frame is a list of equal-length atomic columns with `names`,
//! `row-names` and `class = "data.frame"` attributes.

use crate::errors::{Result, ConversionError};
use crate::value::{RObject, RValue, Attributes};
use ::cmat_matrix::MatrixError;

/// No restrictions on the elements.
pub fn make_list(items: Vec<RObject>) -> RObject
{ RObject::new(RValue::List(items)) }

pub fn make_named_list<S: AsRef<str>>(names: &[S], items: Vec<RObject>) -> Result<RObject> {
    check_len("names of a named list", items.len(), names.len())?;

    Ok(RObject {
        value: RValue::List(items),
        attributes: Attributes {
            names: Some(owned_strings(names)),
            ..Default::default()
        },
    })
}

/// Build a data frame from columns.
///
/// `row_names` may be empty, in which case rows are named `"0"`, `"1"`, ...
pub fn make_data_frame<S: AsRef<str>>(
    row_names: &[S],
    col_names: &[S],
    columns: Vec<RObject>,
) -> Result<RObject> {
    check_len("column names of a data frame", columns.len(), col_names.len())?;

    let nrow = columns.first().map(|c| c.len()).unwrap_or(0);
    for column in &columns {
        check_len("rows in a data frame column", nrow, column.len())?;
        if !column.value.is_atomic() {
            return Err(ConversionError::UnsupportedType {
                operation: "a data frame column",
                actual: column.r_type(),
            });
        }
    }

    let row_names = match row_names.len() {
        0 => {
            trace!("generating {} row names", nrow);
            (0..nrow).map(|i| i.to_string()).collect()
        },
        _ => {
            check_len("row names of a data frame", nrow, row_names.len())?;
            owned_strings(row_names)
        },
    };

    Ok(RObject {
        value: RValue::List(columns),
        attributes: Attributes {
            names: Some(owned_strings(col_names)),
            row_names: Some(row_names),
            class: Some("data.frame".to_string()),
            ..Default::default()
        },
    })
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    match expected == actual {
        true => Ok(()),
        false => Err(MatrixError::LengthMismatch { what, expected, actual }.into()),
    }
}

fn owned_strings<S: AsRef<str>>(strs: &[S]) -> Vec<String>
{ strs.iter().map(|s| s.as_ref().to_owned()).collect() }
