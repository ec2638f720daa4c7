//! Parameter descriptors

use crate::utils::split_headline;
use serde::{Deserialize, Serialize};

/// One named parameter of a sub-command
///
/// Names must be unique within one sub-command's list. Nothing here enforces
/// that; the bundled parser rejects duplicates when binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Identifier within the owning sub-command
    pub name: String,

    /// Semantic type tag, shown in usage text
    #[serde(rename = "type")]
    pub type_tag: String,

    /// First line is the summary, the rest is extended detail
    #[serde(default)]
    pub description: String,

    /// Raw token used when the argument is omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ParameterSpec {
    /// Create a required parameter
    pub fn new<N, T, D>(name: N, type_tag: T, description: D) -> Self
    where
        N: Into<String>,
        T: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            description: description.into(),
            default: None,
        }
    }

    /// Make the parameter optional with a raw default token (builder pattern)
    #[must_use]
    pub fn with_default<S: Into<String>>(mut self, default: S) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// First line of the description
    #[must_use]
    pub fn summary(&self) -> &str {
        split_headline(&self.description).0
    }

    /// Value kind the bundled parser binds this parameter as
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        ParamKind::from_tag(&self.type_tag)
    }

    /// Kind of each bound value; the list element kind for list parameters
    #[must_use]
    pub fn element_kind(&self) -> ParamKind {
        ParamKind::element_of(&self.type_tag)
    }
}

/// Interpretation of a type tag by the bundled parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Integer,
    Boolean,
    Json,
    /// Consumes every remaining token
    List,
}

impl ParamKind {
    /// Map a free-form type tag onto a kind; unknown tags bind as strings
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.ends_with("[]") {
            return Self::List;
        }
        match tag.as_str() {
            "number" | "float" => Self::Number,
            "integer" | "int" => Self::Integer,
            "boolean" | "bool" => Self::Boolean,
            "json" => Self::Json,
            "array" | "list" => Self::List,
            _ => Self::String,
        }
    }

    /// Kind of one element: `number[]` yields `Number`, untyped lists yield
    /// `String`, scalar tags yield their own kind
    #[must_use]
    pub fn element_of(tag: &str) -> Self {
        let tag = tag.trim();
        match Self::from_tag(tag.strip_suffix("[]").unwrap_or(tag)) {
            Self::List => Self::String,
            kind => kind,
        }
    }
}
