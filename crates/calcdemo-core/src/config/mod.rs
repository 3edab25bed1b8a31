//! Configuration types and loading.
//!
//! A configuration file describes the demo scenario: the operands of the
//! opening addition, the people to register, the calculator steps to run and
//! the age updates to apply. Every section is optional.

mod scenario;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
pub use scenario::{AgeUpdate, ArithmeticConfig, CalculationStep, PersonSeed};

use crate::error::{Error, Result};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "CALCDEMO_CONFIG";

/// File name searched for in the working and user config directories.
pub const CONFIG_FILE_NAME: &str = "calcdemo.toml";

/// Main configuration: the demo scenario to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Operands for the standalone addition.
    #[serde(default)]
    pub arithmetic: ArithmeticConfig,

    /// People registered with the user service, in order.
    /// The first one is also displayed on its own.
    #[serde(default)]
    pub people: Vec<PersonSeed>,

    /// Calculator invocations, in order.
    #[serde(default)]
    pub calculations: Vec<CalculationStep>,

    /// Age updates applied after all people are registered.
    #[serde(default)]
    pub age_updates: Vec<AgeUpdate>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            arithmetic: ArithmeticConfig::default(),
            people: vec![PersonSeed::new("Alice", 30), PersonSeed::new("Bob", 25)],
            calculations: vec![
                CalculationStep::new(10, 5, "add"),
                CalculationStep::new(20, 4, "subtract"),
            ],
            age_updates: vec![AgeUpdate::new("Alice", 31)],
        }
    }
}

impl DemoConfig {
    /// Load configuration from the default locations.
    ///
    /// Paths checked in order:
    /// 1. `$CALCDEMO_CONFIG` environment variable
    /// 2. `./calcdemo.toml` (current directory)
    /// 3. `~/.config/calcdemo/calcdemo.toml` (Linux), or the platform
    ///    equivalent reported by `dirs::config_dir`
    ///
    /// Falls back to the built-in scenario when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found but cannot be read, parsed or
    /// validated.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::load_from(&user_config);
            }
        }

        tracing::debug!("no configuration file found, using built-in scenario");
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, parsing fails or
    /// validation fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            people = config.people.len(),
            calculations = config.calculations.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Path of the per-user configuration file, if the platform has one.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcdemo").join(CONFIG_FILE_NAME))
    }

    /// Validate the configuration.
    ///
    /// Only names are checked. Ages are unconstrained and unknown operation
    /// tags are left for the calculator to resolve to zero.
    fn validate(&self) -> Result<()> {
        for (index, person) in self.people.iter().enumerate() {
            if person.name.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "people[{index}]: name cannot be empty"
                )));
            }
        }
        for (index, update) in self.age_updates.iter().enumerate() {
            if update.name.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "age_updates[{index}]: name cannot be empty"
                )));
            }
        }
        Ok(())
    }
}
