//! YAML label file loading

use crate::config::labels::LabelOverrides;
use crate::error::DispatchError;
use crate::system::System;
use std::path::Path;

/// Load and parse a YAML label override file
pub fn load_label_overrides(
    system: &dyn System,
    path: &str,
) -> Result<LabelOverrides, DispatchError> {
    let content = system.read_to_string(Path::new(path)).map_err(|err| {
        DispatchError::configuration(format!("failed to read label file '{path}': {err}"))
    })?;

    // An empty document means no overrides
    if content.trim().is_empty() {
        return Ok(LabelOverrides::default());
    }

    serde_yaml::from_str(&content).map_err(|err| {
        DispatchError::configuration(format!("failed to parse label file '{path}': {err}"))
    })
}
