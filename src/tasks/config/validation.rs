/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! All of the post-processing that occurs after deserialization is written here.

use crate::config::*;
use failure::{Error, bail};

impl Settings {
    pub fn validate(self) -> Result<ValidatedSettings, Error> {
        if self.max_workers == Some(0) {
            bail!("max-workers must be at least 1");
        }

        // (also catches NaN)
        if !(self.tolerance >= 0.0) {
            bail!("tolerance must be non-negative, not {}", self.tolerance);
        }

        for spec in &self.products {
            let ProductSpec { rows, inner, cols } = *spec;
            let sizes = [rows.checked_mul(inner), inner.checked_mul(cols), rows.checked_mul(cols)];
            if sizes.iter().any(|s| s.map_or(true, |s| s > isize::max_value() as usize)) {
                bail!("product {}x{}x{} is too large", rows, inner, cols);
            }
        }

        Ok(ValidatedSettings(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate() {
        assert!(Settings::default().validate().is_ok());

        let bad = Settings { max_workers: Some(0), ..Settings::default() };
        assert!(bad.validate().is_err());

        let bad = Settings { tolerance: ::std::f64::NAN, ..Settings::default() };
        assert!(bad.validate().is_err());

        let zero_tol = Settings { tolerance: 0.0, ..Settings::default() };
        assert!(zero_tol.validate().is_ok());

        let huge = ProductSpec { rows: usize::max_value(), inner: 2, cols: 1 };
        let bad = Settings { products: vec![huge], ..Settings::default() };
        assert!(bad.validate().is_err());
    }
}
