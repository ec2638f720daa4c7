//! Parameter binding
//!
//! The dispatcher hands a sub-command's parameter schema and the remaining
//! argument tokens to a [`ParameterParser`] and treats the result as opaque:
//! either a [`Parameters`] map or a failure whose message is surfaced as-is.

pub mod clap_parser;
pub mod parameters;

pub use clap_parser::ClapParameterParser;
pub use parameters::Parameters;

use crate::schema::ParameterSpec;
use anyhow::Result;

/// Turns raw argument tokens into bound parameters
pub trait ParameterParser {
    /// Bind `tokens` against `schema`, in schema order
    fn parse(&self, schema: &[ParameterSpec], tokens: &[String]) -> Result<Parameters>;
}

impl<F> ParameterParser for F
where
    F: Fn(&[ParameterSpec], &[String]) -> Result<Parameters>,
{
    fn parse(&self, schema: &[ParameterSpec], tokens: &[String]) -> Result<Parameters> {
        self(schema, tokens)
    }
}
