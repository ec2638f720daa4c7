//! Sub-command definitions, handlers and sub-command usage text

use super::param::ParameterSpec;
use crate::config::UsageLabels;
use crate::error::DispatchError;
use crate::parser::Parameters;
use crate::utils::{indent, split_headline};
use anyhow::Result;
use std::fmt;
use tracing::debug;

/// Per-sub-command behavior invoked by the dispatcher
///
/// Closures of the shape `Fn(&Parameters, &Invocation<'_>) -> anyhow::Result<()>`
/// implement this automatically.
pub trait Handler {
    /// Run with the bound parameters and a handle on the owning sub-command
    fn invoke(&self, parameters: &Parameters, invocation: &Invocation<'_>) -> Result<()>;
}

impl<F> Handler for F
where
    F: Fn(&Parameters, &Invocation<'_>) -> Result<()>,
{
    fn invoke(&self, parameters: &Parameters, invocation: &Invocation<'_>) -> Result<()> {
        self(parameters, invocation)
    }
}

/// Handle given to a handler on its owning sub-command
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    sub_command: &'a SubCommandSchema,
    program: &'a str,
    labels: &'a UsageLabels,
}

impl<'a> Invocation<'a> {
    #[must_use]
    pub const fn new(
        sub_command: &'a SubCommandSchema,
        program: &'a str,
        labels: &'a UsageLabels,
    ) -> Self {
        Self {
            sub_command,
            program,
            labels,
        }
    }

    #[must_use]
    pub const fn sub_command(&self) -> &'a SubCommandSchema {
        self.sub_command
    }

    #[must_use]
    pub const fn program(&self) -> &'a str {
        self.program
    }

    /// Usage text of the owning sub-command
    #[must_use]
    pub fn usage(&self) -> String {
        self.sub_command.usage(self.program, self.labels)
    }
}

/// Plain definition a [`SubCommandSchema`] is built from
pub struct SubCommandDef {
    pub name: String,
    pub description: String,
    pub param_schema: Vec<ParameterSpec>,
    pub handler: Box<dyn Handler>,
}

impl SubCommandDef {
    /// Define a sub-command with a closure handler and no parameters
    pub fn new<N, D, F>(name: N, description: D, handler: F) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        F: Fn(&Parameters, &Invocation<'_>) -> Result<()> + 'static,
    {
        Self::with_handler(name, description, handler)
    }

    /// Define a sub-command with any [`Handler`] implementation
    pub fn with_handler<N, D, H>(name: N, description: D, handler: H) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        H: Handler + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            param_schema: Vec::new(),
            handler: Box::new(handler),
        }
    }

    /// Append a parameter (builder pattern)
    #[must_use]
    pub fn param(mut self, spec: ParameterSpec) -> Self {
        self.param_schema.push(spec);
        self
    }

    /// Replace the parameter list (builder pattern)
    #[must_use]
    pub fn params<I: IntoIterator<Item = ParameterSpec>>(mut self, specs: I) -> Self {
        self.param_schema = specs.into_iter().collect();
        self
    }
}

impl fmt::Debug for SubCommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubCommandDef")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("param_schema", &self.param_schema)
            .finish_non_exhaustive()
    }
}

/// A registered sub-command
///
/// Built once from a [`SubCommandDef`] and immutable afterwards.
pub struct SubCommandSchema {
    name: String,
    description: String,
    param_schema: Vec<ParameterSpec>,
    handler: Box<dyn Handler>,
}

impl SubCommandSchema {
    #[must_use]
    pub fn new(definition: SubCommandDef) -> Self {
        let SubCommandDef {
            name,
            description,
            param_schema,
            handler,
        } = definition;
        Self {
            name,
            description,
            param_schema,
            handler,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First line of the description
    #[must_use]
    pub fn summary(&self) -> &str {
        split_headline(&self.description).0
    }

    #[must_use]
    pub fn param_schema(&self) -> &[ParameterSpec] {
        &self.param_schema
    }

    /// Render the sub-command usage block
    #[must_use]
    pub fn usage(&self, program: &str, labels: &UsageLabels) -> String {
        let (summary, detail) = split_headline(&self.description);
        let mut lines = vec![
            String::new(),
            labels.name.clone(),
            format!("  '{}' - {summary}", self.name),
            labels.usage.clone(),
        ];

        // Unquoted here; only the name line above quotes it
        let mut synopsis = format!("  {program} {}", self.name);
        for spec in &self.param_schema {
            synopsis.push_str(&format!(" <{}>", spec.name()));
        }
        lines.push(synopsis);

        lines.push(labels.parameters.clone());
        for spec in &self.param_schema {
            let (param_summary, param_detail) = split_headline(spec.description());
            lines.push(format!(
                "  {} ({}:{}) - {param_summary}",
                spec.name(),
                labels.type_label,
                spec.type_tag()
            ));
            if !param_detail.is_empty() {
                lines.push(indent(4, param_detail));
            }
        }

        lines.push(labels.description.clone());
        if !detail.is_empty() {
            lines.push(indent(2, detail));
            lines.push(String::new());
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Invoke the handler with bound parameters
    ///
    /// Only handler failures are mapped here; resolution and binding failures
    /// are raised by [`super::CommandSchema`].
    pub fn run(
        &self,
        parameters: &Parameters,
        program: &str,
        labels: &UsageLabels,
    ) -> Result<(), DispatchError> {
        debug!("Invoking sub-command '{}'", self.name);
        let invocation = Invocation::new(self, program, labels);
        self.handler
            .invoke(parameters, &invocation)
            .map_err(|err| DispatchError::handler(&self.name, &err))
    }
}

impl From<SubCommandDef> for SubCommandSchema {
    fn from(definition: SubCommandDef) -> Self {
        Self::new(definition)
    }
}

impl fmt::Debug for SubCommandSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubCommandSchema")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("param_schema", &self.param_schema)
            .finish_non_exhaustive()
    }
}
