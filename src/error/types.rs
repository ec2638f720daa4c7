//! Dispatch error types with exit codes

use thiserror::Error;

/// Which usage block accompanies an error on the diagnostic stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageScope {
    /// Program-level usage listing every sub-command
    TopLevel,
    /// Usage of the named sub-command
    SubCommand(String),
    /// No usage block
    None,
}

/// Main error type for dispatch operations
///
/// The `Display` text is the bare message; the driver prefixes it with
/// `Error: ` when it reaches the diagnostic stream.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DispatchError {
    /// No sub-command name was supplied
    #[error("sub-command is required")]
    MissingSubCommand,

    /// The supplied name has no registered schema
    #[error("sub-command '{name}' is not found")]
    SubCommandNotFound { name: String },

    /// The parameter parser rejected the argument tokens
    #[error("{message}")]
    ParameterBinding { message: String },

    /// The sub-command handler failed
    #[error("{message}")]
    Handler { sub_command: String, message: String },

    /// Label or environment configuration could not be loaded
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl DispatchError {
    /// Get the process exit code for this error
    ///
    /// Every dispatch failure is terminal and shares status 1.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::MissingSubCommand
            | Self::SubCommandNotFound { .. }
            | Self::ParameterBinding { .. }
            | Self::Handler { .. }
            | Self::Configuration { .. } => 1,
        }
    }

    /// Usage block the driver prints after the error line
    #[must_use]
    pub fn usage_scope(&self) -> UsageScope {
        match self {
            Self::MissingSubCommand
            | Self::SubCommandNotFound { .. }
            | Self::ParameterBinding { .. } => UsageScope::TopLevel,
            Self::Handler { sub_command, .. } => UsageScope::SubCommand(sub_command.clone()),
            Self::Configuration { .. } => UsageScope::None,
        }
    }

    /// Create a sub-command-not-found error
    #[inline]
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::SubCommandNotFound { name: name.into() }
    }

    /// Create a parameter binding error from the parser's failure
    #[inline]
    pub fn binding(err: &anyhow::Error) -> Self {
        Self::ParameterBinding {
            message: format!("{err:#}"),
        }
    }

    /// Create a handler error for the named sub-command
    #[inline]
    pub fn handler<S: Into<String>>(sub_command: S, err: &anyhow::Error) -> Self {
        Self::Handler {
            sub_command: sub_command.into(),
            message: format!("{err:#}"),
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
