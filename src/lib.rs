//! `subcommand-schema` - Declarative sub-command dispatch for CLI programs
//!
//! A program declares its sub-commands (name, description, parameter schema,
//! handler). This library resolves the requested sub-command from `argv`,
//! binds its parameters, invokes its handler, and on failure prints
//! `Error: <message>` followed by the matching usage text.

pub mod config;
pub mod error;
pub mod parser;
pub mod runner;
pub mod schema;
pub mod system;
pub mod utils;

pub use error::DispatchError;
pub use parser::{ClapParameterParser, ParameterParser, Parameters};
pub use runner::Runner;
pub use schema::{
    CommandSchema, Handler, Invocation, ParamKind, ParameterSpec, SubCommandDef,
    SubCommandSchema,
};

use config::DispatchConfig;
use std::io::{self, Write as _};
use system::{RealSystem, System};
use tracing::warn;

/// Main entry point: dispatch the process arguments and exit
///
/// Exits with status 0 when the handler succeeds and 1 on any failure, after
/// writing the error and usage text to stderr.
pub fn run<I: IntoIterator<Item = SubCommandDef>>(definitions: I) -> ! {
    let system = RealSystem::new();
    std::process::exit(run_with_system(definitions, &system, &mut io::stderr()))
}

/// Dispatch the arguments of `system`, reporting to `diagnostics`
///
/// Returns the exit status instead of exiting.
pub fn run_with_system<I, W>(definitions: I, system: &dyn System, diagnostics: &mut W) -> i32
where
    I: IntoIterator<Item = SubCommandDef>,
    W: io::Write + ?Sized,
{
    let config = match DispatchConfig::from_system(system) {
        Ok(config) => config,
        Err(err) => {
            if let Err(io_err) = writeln!(diagnostics, "Error: {err}") {
                warn!("Failed to write diagnostics: {}", io_err);
            }
            return err.exit_code();
        }
    };

    Runner::new(definitions)
        .with_config(config)
        .run(&system.args(), diagnostics)
}
