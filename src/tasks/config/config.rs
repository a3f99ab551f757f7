/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!

use ::serde::{Serialize, Deserialize, de};

/// Root settings object.
///
/// This is what you should deserialize.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(pub Settings);

/// Raw deserialized form of settings.
///
/// You shouldn't deserialize this type directly; deserialize `ValidatedSettings` instead,
/// so that additional validation can be performed.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Whether independent products run on a worker cluster.
    #[serde(default)]
    pub threading: Threading,

    /// Size of the worker cluster.  Defaults to the number of logical cpus.
    #[serde(default)]
    pub max_workers: Option<usize>,

    /// Seed for the random matrices.
    #[serde(default = "settings__seed")]
    pub seed: u64,

    /// Shapes of the random products to compute.
    #[serde(default = "settings__products")]
    pub products: Vec<ProductSpec>,

    /// Used when checking `A * I == A`.
    #[serde(default = "settings__tolerance")]
    pub tolerance: f64,
}
fn settings__seed() -> u64 { 0 }
fn settings__tolerance() -> f64 { 1e-12 }
fn settings__products() -> Vec<ProductSpec> {
    vec![
        ProductSpec { rows: 3, inner: 2, cols: 3 },
        ProductSpec { rows: 16, inner: 16, cols: 16 },
        ProductSpec { rows: 40, inner: 10, cols: 25 },
        ProductSpec { rows: 1, inner: 100, cols: 1 },
    ]
}

impl<'de> de::Deserialize<'de> for ValidatedSettings {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cereal: Settings = de::Deserialize::deserialize(deserializer)?;

        cereal.validate().map_err(de::Error::custom)
    }
}

/// `(rows x inner) * (inner x cols)`
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ProductSpec {
    pub rows: usize,
    pub inner: usize,
    pub cols: usize,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Threading {
    Rayon,
    Serial,
}

// --------------------------------------------------------

impl Default for Threading {
    fn default() -> Self { Threading::Rayon }
}

impl Default for Settings {
    fn default() -> Self {
        match crate::from_empty_mapping() {
            Ok(settings) => settings,
            // every field has a serde default, so this is unreachable
            Err(_) => Settings {
                threading: Threading::default(),
                max_workers: None,
                seed: settings__seed(),
                products: settings__products(),
                tolerance: settings__tolerance(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YamlRead;

    #[test]
    fn test_defaults() {
        // NOTE: this checks that every field of Settings has a serde default
        let settings: Settings = crate::from_empty_mapping().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.threading, Threading::Rayon);
        assert_eq!(settings.max_workers, None);
        assert_eq!(settings.tolerance, 1e-12);
        assert!(!settings.products.is_empty());
    }

    #[test]
    fn read_yaml() {
        let yaml = "\
threading: serial
max-workers: 3
seed: 42
products:
  - { rows: 2, inner: 5, cols: 7 }
tolerance: 1.0e-9
";
        let ValidatedSettings(settings) = YamlRead::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(settings, Settings {
            threading: Threading::Serial,
            max_workers: Some(3),
            seed: 42,
            products: vec![ProductSpec { rows: 2, inner: 5, cols: 7 }],
            tolerance: 1e-9,
        });
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        // (these only produce a warning)
        let yaml = "seed: 3\nsede: 4\n";
        let ValidatedSettings(settings) = YamlRead::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(settings.seed, 3);
    }

    #[test]
    fn validation_runs_on_read() {
        let r: Result<ValidatedSettings, _> = YamlRead::from_reader("max-workers: 0\n".as_bytes());
        assert!(r.is_err());
        let r: Result<ValidatedSettings, _> = YamlRead::from_reader("tolerance: -1.0\n".as_bytes());
        assert!(r.is_err());

        // the raw form does no validation
        let r: Result<Settings, _> = YamlRead::from_reader("max-workers: 0\n".as_bytes());
        assert!(r.is_ok());
    }
}
