//! Program-level schema: sub-command registry, resolution and top-level usage

use super::sub_command::{SubCommandDef, SubCommandSchema};
use crate::config::UsageLabels;
use crate::error::DispatchError;
use crate::parser::ParameterParser;
use std::collections::HashMap;
use tracing::debug;

/// Registry of sub-commands for one program invocation
///
/// Sub-commands keep their registration order. A later definition with an
/// already registered name replaces the earlier one in its original slot.
#[derive(Debug, Default)]
pub struct CommandSchema {
    sub_commands: Vec<SubCommandSchema>,
    index: HashMap<String, usize>,
}

impl CommandSchema {
    /// Build the registry from definitions, later duplicates winning
    pub fn new<I: IntoIterator<Item = SubCommandDef>>(definitions: I) -> Self {
        definitions
            .into_iter()
            .fold(Self::default(), |mut schema, definition| {
                schema.register(SubCommandSchema::new(definition));
                schema
            })
    }

    fn register(&mut self, sub_command: SubCommandSchema) {
        if let Some(&slot) = self.index.get(sub_command.name()) {
            debug!("Replacing sub-command '{}'", sub_command.name());
            self.sub_commands[slot] = sub_command;
        } else {
            self.index
                .insert(sub_command.name().to_owned(), self.sub_commands.len());
            self.sub_commands.push(sub_command);
        }
    }

    /// Look up a sub-command by name
    #[must_use]
    pub fn sub_command(&self, name: &str) -> Option<&SubCommandSchema> {
        self.index
            .get(name)
            .and_then(|&slot| self.sub_commands.get(slot))
    }

    /// Registered sub-commands in registration order
    pub fn sub_commands(&self) -> impl Iterator<Item = &SubCommandSchema> {
        self.sub_commands.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sub_commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_commands.is_empty()
    }

    /// Render the top-level usage block
    #[must_use]
    pub fn usage(&self, program: &str, labels: &UsageLabels) -> String {
        let mut lines = vec![
            format!(
                "{} {program} {} ...",
                labels.usage, labels.sub_command_placeholder
            ),
            String::new(),
            labels.available_sub_commands.clone(),
        ];
        for sub_command in &self.sub_commands {
            lines.push(format!("  {}:", sub_command.name()));
            lines.push(format!("    {}", sub_command.summary()));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Resolve the sub-command named by the first argument
    ///
    /// `args` excludes the program path. Returns the sub-command and the
    /// tokens left for parameter binding.
    pub fn resolve<'a, 's>(
        &'s self,
        args: &'a [String],
    ) -> Result<(&'s SubCommandSchema, &'a [String]), DispatchError> {
        let (name, rest) = args
            .split_first()
            .ok_or(DispatchError::MissingSubCommand)?;
        let sub_command = self
            .sub_command(name)
            .ok_or_else(|| DispatchError::not_found(name.as_str()))?;
        debug!("Resolved sub-command '{}'", sub_command.name());
        Ok((sub_command, rest))
    }

    /// Resolve, bind and invoke
    ///
    /// Resolution and binding failures come back as top-level errors; a
    /// handler failure comes back tagged with its sub-command.
    pub fn dispatch<P: ParameterParser + ?Sized>(
        &self,
        program: &str,
        args: &[String],
        parser: &P,
        labels: &UsageLabels,
    ) -> Result<(), DispatchError> {
        let (sub_command, tokens) = self.resolve(args)?;
        let parameters = parser
            .parse(sub_command.param_schema(), tokens)
            .map_err(|err| DispatchError::binding(&err))?;
        debug!(
            "Bound {} parameters for '{}'",
            parameters.len(),
            sub_command.name()
        );
        sub_command.run(&parameters, program, labels)
    }
}

impl FromIterator<SubCommandDef> for CommandSchema {
    fn from_iter<I: IntoIterator<Item = SubCommandDef>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parameters;
    use crate::schema::ParameterSpec;

    fn noop(name: &str, description: &str) -> SubCommandDef {
        SubCommandDef::new(name, description, |_, _| Ok(()))
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn test_lookup() {
        let schema = CommandSchema::new([noop("add", "Add"), noop("sub", "Subtract")]);
        assert_eq!(schema.sub_command("add").unwrap().name(), "add");
        assert_eq!(schema.sub_command("sub").unwrap().name(), "sub");
        assert!(schema.sub_command("mul").is_none());
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
    }

    #[test]
    fn test_collect_from_definitions() {
        let schema: CommandSchema = [noop("ping", "Ping"), noop("ping", "Pong")]
            .into_iter()
            .collect();
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.sub_command("ping").unwrap().description(), "Pong");

        let empty: CommandSchema = std::iter::empty::<SubCommandDef>().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_later_duplicate_wins_in_first_slot() {
        let schema = CommandSchema::new([
            noop("run", "first"),
            noop("other", "middle"),
            noop("run", "second"),
        ]);

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.sub_command("run").unwrap().description(), "second");
        let order: Vec<_> = schema.sub_commands().map(SubCommandSchema::name).collect();
        assert_eq!(order, vec!["run", "other"]);
    }

    #[test]
    fn test_top_level_usage() {
        let schema = CommandSchema::new([
            noop("add", "Add numbers\nlong text"),
            noop("ping", "Ping"),
        ]);
        let usage = schema.usage("calc", &UsageLabels::default());
        assert_eq!(
            usage,
            "Usage: calc <sub-command> ...\n\nAvailable sub-commands:\n  add:\n    Add numbers\n  ping:\n    Ping\n"
        );
    }

    #[test]
    fn test_resolve_failures() {
        let schema = CommandSchema::new([noop("add", "Add")]);

        let err = schema.resolve(&[]).unwrap_err();
        assert!(matches!(err, DispatchError::MissingSubCommand));

        let err = schema.resolve(&args(&["bogus"])).unwrap_err();
        assert_eq!(err.to_string(), "sub-command 'bogus' is not found");
    }

    #[test]
    fn test_resolve_splits_tokens() {
        let schema = CommandSchema::new([noop("add", "Add")]);
        let argv = args(&["add", "1", "2"]);
        let (sub_command, rest) = schema.resolve(&argv).unwrap();
        assert_eq!(sub_command.name(), "add");
        assert_eq!(rest, &argv[1..]);
    }

    #[test]
    fn test_dispatch_surfaces_parser_message() {
        let schema = CommandSchema::new([
            noop("add", "Add").param(ParameterSpec::new("a", "number", "left"))
        ]);
        let parser = |_: &[ParameterSpec], _: &[String]| -> anyhow::Result<Parameters> {
            anyhow::bail!("bad token")
        };
        let err = schema
            .dispatch("calc", &args(&["add", "x"]), &parser, &UsageLabels::default())
            .unwrap_err();
        assert!(matches!(err, DispatchError::ParameterBinding { .. }));
        assert_eq!(err.to_string(), "bad token");
    }
}
