//! Top-level driver
//!
//! The only place that turns a [`DispatchError`] into diagnostics and an
//! exit status. Nothing here terminates the process; [`crate::run`] does.

use crate::config::DispatchConfig;
use crate::error::{DispatchError, UsageScope};
use crate::parser::{ClapParameterParser, ParameterParser};
use crate::schema::{CommandSchema, SubCommandDef};
use crate::utils::path::program_name;
use std::io::Write;
use tracing::{debug, warn};

/// Exit status of a successful dispatch
pub const EXIT_SUCCESS: i32 = 0;

/// Runs one resolve, bind and invoke cycle against an argument vector
#[derive(Debug)]
pub struct Runner<P = ClapParameterParser> {
    schema: CommandSchema,
    parser: P,
    config: DispatchConfig,
}

impl Runner {
    /// Create a runner using the bundled parser and default configuration
    pub fn new<I: IntoIterator<Item = SubCommandDef>>(definitions: I) -> Self {
        Self {
            schema: CommandSchema::new(definitions),
            parser: ClapParameterParser::new(),
            config: DispatchConfig::default(),
        }
    }
}

impl<P: ParameterParser> Runner<P> {
    /// Swap the parameter parser (builder pattern)
    pub fn with_parser<Q: ParameterParser>(self, parser: Q) -> Runner<Q> {
        Runner {
            schema: self.schema,
            parser,
            config: self.config,
        }
    }

    /// Replace the configuration (builder pattern)
    #[must_use]
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn schema(&self) -> &CommandSchema {
        &self.schema
    }

    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Program name shown in usage for this argument vector
    #[must_use]
    pub fn program(&self, argv: &[String]) -> String {
        match (&self.config.program_name, argv.first()) {
            (Some(name), _) => name.clone(),
            (None, Some(invoked_as)) => program_name(invoked_as),
            (None, None) => String::from("<program>"),
        }
    }

    /// Dispatch `argv` (program path at index 0) without printing anything
    pub fn dispatch(&self, argv: &[String]) -> Result<(), DispatchError> {
        let program = self.program(argv);
        let args = argv.get(1..).unwrap_or_default();
        self.schema
            .dispatch(&program, args, &self.parser, &self.config.labels)
    }

    /// Dispatch `argv` and report any failure to `diagnostics`
    ///
    /// Returns the process exit status.
    pub fn run<W: Write + ?Sized>(&self, argv: &[String], diagnostics: &mut W) -> i32 {
        match self.dispatch(argv) {
            Ok(()) => {
                debug!("Dispatch completed");
                EXIT_SUCCESS
            }
            Err(err) => {
                let program = self.program(argv);
                let report = self.report(&err, &program);
                if let Err(io_err) = diagnostics
                    .write_all(report.as_bytes())
                    .and_then(|()| diagnostics.flush())
                {
                    warn!("Failed to write diagnostics: {}", io_err);
                }
                err.exit_code()
            }
        }
    }

    /// Error line followed by the usage block the error calls for
    #[must_use]
    pub fn report(&self, err: &DispatchError, program: &str) -> String {
        let labels = &self.config.labels;
        let usage = match err.usage_scope() {
            UsageScope::TopLevel => self.schema.usage(program, labels),
            UsageScope::SubCommand(name) => self
                .schema
                .sub_command(&name)
                .map(|sub_command| sub_command.usage(program, labels))
                .unwrap_or_default(),
            UsageScope::None => String::new(),
        };
        format!("Error: {err}\n{usage}")
    }
}
