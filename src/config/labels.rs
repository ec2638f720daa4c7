//! Header labels used by the usage renderers

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Built-in label presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ja" | "jp" | "japanese" => Ok(Self::Japanese),
            other => Err(format!("unknown language '{other}'. Expected 'en' or 'ja'")),
        }
    }
}

/// Headers and fixed words printed in usage text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLabels {
    pub name: String,
    pub usage: String,
    pub parameters: String,
    pub description: String,
    pub available_sub_commands: String,
    /// Word before the colon in `(type:number)`
    pub type_label: String,
    pub sub_command_placeholder: String,
}

impl UsageLabels {
    /// Labels for a built-in language preset
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self {
                name: "Name:".to_owned(),
                usage: "Usage:".to_owned(),
                parameters: "Parameters:".to_owned(),
                description: "Description:".to_owned(),
                available_sub_commands: "Available sub-commands:".to_owned(),
                type_label: "type".to_owned(),
                sub_command_placeholder: "<sub-command>".to_owned(),
            },
            Language::Japanese => Self {
                name: "名前:".to_owned(),
                usage: "使い方:".to_owned(),
                parameters: "パラメータ:".to_owned(),
                description: "説明:".to_owned(),
                available_sub_commands: "使用可能なサブコマンド".to_owned(),
                type_label: "型".to_owned(),
                sub_command_placeholder: "<sub-command>".to_owned(),
            },
        }
    }

    /// Replace the labels present in `overrides`
    #[must_use]
    pub fn merged(mut self, overrides: LabelOverrides) -> Self {
        let LabelOverrides {
            name,
            usage,
            parameters,
            description,
            available_sub_commands,
            type_label,
            sub_command_placeholder,
        } = overrides;

        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = usage {
            self.usage = value;
        }
        if let Some(value) = parameters {
            self.parameters = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = available_sub_commands {
            self.available_sub_commands = value;
        }
        if let Some(value) = type_label {
            self.type_label = value;
        }
        if let Some(value) = sub_command_placeholder {
            self.sub_command_placeholder = value;
        }
        self
    }
}

impl Default for UsageLabels {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

/// Partial label set read from a YAML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelOverrides {
    pub name: Option<String>,
    pub usage: Option<String>,
    pub parameters: Option<String>,
    pub description: Option<String>,
    pub available_sub_commands: Option<String>,
    pub type_label: Option<String>,
    pub sub_command_placeholder: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" JA ".parse::<Language>().unwrap(), Language::Japanese);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_merge_replaces_only_present_fields() {
        let overrides = LabelOverrides {
            usage: Some("Synopsis:".to_owned()),
            ..LabelOverrides::default()
        };
        let labels = UsageLabels::default().merged(overrides);
        assert_eq!(labels.usage, "Synopsis:");
        assert_eq!(labels.name, "Name:");
    }
}
