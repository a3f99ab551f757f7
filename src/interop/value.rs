/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::fmt;
use ::serde::{Serialize, Deserialize};

/// The payload of a runtime value.  Every variant is a vector;
/// a scalar is simply a vector of length 1.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "values", rename_all = "kebab-case")]
pub enum RValue {
    Real(Vec<f64>),
    Integer(Vec<i32>),
    Character(Vec<String>),
    /// Elements may be of any type, including other lists.
    List(Vec<RObject>),
}

/// Fieldless tag for an [`RValue`], for error messages.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RType { Real, Integer, Character, List }

impl fmt::Display for RType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(match self {
            RType::Real => "real",
            RType::Integer => "integer",
            RType::Character => "character",
            RType::List => "list",
        }, f)
    }
}

/// The attributes this crate knows how to produce and consume.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Attributes {
    /// `[nrow, ncol]` of a matrix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<[isize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RObject {
    pub value: RValue,
    #[serde(default)]
    pub attributes: Attributes,
}

impl RValue {
    pub fn r_type(&self) -> RType {
        match self {
            RValue::Real(_) => RType::Real,
            RValue::Integer(_) => RType::Integer,
            RValue::Character(_) => RType::Character,
            RValue::List(_) => RType::List,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RValue::Real(v) => v.len(),
            RValue::Integer(v) => v.len(),
            RValue::Character(v) => v.len(),
            RValue::List(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool
    { self.len() == 0 }

    /// Types that can make up a data frame column.
    pub fn is_atomic(&self) -> bool
    { self.r_type() != RType::List }
}

impl RObject {
    /// An object with no attributes.
    pub fn new(value: RValue) -> Self
    { RObject { value, attributes: Attributes::default() } }

    pub fn r_type(&self) -> RType
    { self.value.r_type() }

    pub fn len(&self) -> usize
    { self.value.len() }

    pub fn is_empty(&self) -> bool
    { self.value.is_empty() }

    pub fn is_data_frame(&self) -> bool
    { self.attributes.class.as_ref().map(|s| s == "data.frame").unwrap_or(false) }
}

impl From<RValue> for RObject {
    fn from(value: RValue) -> Self
    { RObject::new(value) }
}
