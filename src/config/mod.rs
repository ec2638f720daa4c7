//! Configuration management module
//!
//! Resolves usage labels and the displayed program name from the environment

pub mod labels;
pub mod yaml;

pub use labels::{LabelOverrides, Language, UsageLabels};

use crate::error::DispatchError;
use crate::system::System;
use std::env::VarError;
use tracing::debug;

/// Environment variable selecting the label preset
pub const LANG_ENV: &str = "SUBCOMMAND_SCHEMA_LANG";

/// Environment variable naming a YAML label override file
pub const LABELS_ENV: &str = "SUBCOMMAND_SCHEMA_LABELS";

/// Environment variable overriding the program name shown in usage
pub const PROGRAM_ENV: &str = "SUBCOMMAND_SCHEMA_PROGRAM";

/// Settings consumed by the dispatch driver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Program name shown in usage; derived from argv[0] when unset
    pub program_name: Option<String>,

    pub labels: UsageLabels,
}

impl DispatchConfig {
    /// Build the configuration from environment variables
    ///
    /// Unset variables fall back to English labels and the argv[0] file name.
    pub fn from_system(system: &dyn System) -> Result<Self, DispatchError> {
        let language = match read_env(system, LANG_ENV)? {
            Some(value) => value
                .parse::<Language>()
                .map_err(|err| DispatchError::configuration(format!("{LANG_ENV}: {err}")))?,
            None => Language::default(),
        };

        let mut labels = UsageLabels::for_language(language);
        if let Some(path) = read_env(system, LABELS_ENV)? {
            debug!("Loading usage labels from {}", path);
            labels = labels.merged(yaml::load_label_overrides(system, &path)?);
        }

        Ok(Self {
            program_name: read_env(system, PROGRAM_ENV)?,
            labels,
        })
    }

    /// Set the program name shown in usage (builder pattern)
    #[must_use]
    pub fn with_program_name<S: Into<String>>(mut self, name: S) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Replace the usage labels (builder pattern)
    #[must_use]
    pub fn with_labels(mut self, labels: UsageLabels) -> Self {
        self.labels = labels;
        self
    }
}

/// Read a variable, treating unset and empty the same
fn read_env(system: &dyn System, key: &str) -> Result<Option<String>, DispatchError> {
    match system.env_var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(DispatchError::configuration(format!(
            "{key} is not valid unicode"
        ))),
    }
}
