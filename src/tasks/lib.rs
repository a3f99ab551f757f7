/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Driver code behind the cmat binaries.
//!
//! Unlike the library crates, everything here speaks `failure::Error`;
//! whatever goes wrong is ultimately just printed before exiting.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;

pub type FailResult<T> = Result<T, ::failure::Error>;

pub mod entry_points;

mod logging;
mod demo;
mod grow;

pub use crate::logging::{GlobalLogger, ColorizedLevel};
