//! Clinic configuration
//!
//! Loaded from TOML. Every section is optional; command-line flags
//! override whatever the file provides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::logging_facility::Profile;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicConfig {
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Profile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Fixture loaded at startup, if any
    pub path: Option<PathBuf>,
}

impl ClinicConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `Config` for malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a configuration file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`ClinicConfig::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClinicError;

    #[test]
    fn test_empty_config_is_default() {
        let config = ClinicConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClinicConfig::default());
        assert_eq!(config.logging.profile, Profile::Development);
        assert!(config.seed.path.is_none());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
[logging]
profile = "production"

[seed]
path = "fixtures/clinic.yaml"
"#;
        let config = ClinicConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.logging.profile, Profile::Production);
        assert_eq!(config.seed.path, Some(PathBuf::from("fixtures/clinic.yaml")));
    }

    #[test]
    fn test_unknown_profile_is_config_error() {
        let err = ClinicConfig::from_toml_str("[logging]\nprofile = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ClinicError::Config { .. }));
    }
}
