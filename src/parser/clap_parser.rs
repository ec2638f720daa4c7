//! Positional parameter parser built on clap
//!
//! Every [`ParameterSpec`] becomes one positional argument, in schema order.
//! The type tag picks the value parser (see [`ParamKind`]); a spec with a
//! default token is optional.

use super::{ParameterParser, Parameters};
use crate::schema::{ParamKind, ParameterSpec};
use anyhow::{Result, anyhow, bail};
use clap::builder::{BoolishValueParser, ValueParser};
use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command, value_parser};
use serde_json::{Number, Value};
use std::collections::HashSet;
use tracing::debug;

/// Default parser used by the dispatcher
#[derive(Debug, Clone, Copy, Default)]
pub struct ClapParameterParser;

impl ClapParameterParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ParameterParser for ClapParameterParser {
    fn parse(&self, schema: &[ParameterSpec], tokens: &[String]) -> Result<Parameters> {
        // clap panics on malformed argument sets, so reject them first
        check_schema(schema)?;

        let matches = build_command(schema)
            .try_get_matches_from(tokens)
            .map_err(|err| anyhow!(condense_error(&err)))?;

        let parameters = collect_values(schema, &matches)?;
        debug!("Bound {} of {} parameters", parameters.len(), schema.len());
        Ok(parameters)
    }
}

/// Validate the shape clap needs: unique names, variadic last, optionals last
fn check_schema(schema: &[ParameterSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut optional_seen = false;

    for (position, spec) in schema.iter().enumerate() {
        let name = spec.name();
        if name.trim().is_empty() {
            bail!("parameter #{} has an empty name", position + 1);
        }
        if !seen.insert(name) {
            bail!("parameter '{name}' is declared more than once");
        }
        if spec.kind() == ParamKind::List && position + 1 != schema.len() {
            bail!("parameter '{name}' takes the remaining arguments and must be declared last");
        }
        if spec.default().is_some() {
            optional_seen = true;
        } else if optional_seen {
            bail!("required parameter '{name}' cannot follow an optional parameter");
        }
    }
    Ok(())
}

fn build_command(schema: &[ParameterSpec]) -> Command {
    let args = schema
        .iter()
        .enumerate()
        .map(|(position, spec)| build_arg(position + 1, spec));

    // A leading `--` is consumed as clap's end-of-options marker; any `--`
    // after it binds as a plain value.
    Command::new("parameters")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .color(ColorChoice::Never)
        .args(args)
}

fn build_arg(index: usize, spec: &ParameterSpec) -> Arg {
    let mut arg = Arg::new(spec.name().to_owned())
        .value_name(spec.name().to_owned())
        .help(spec.summary().to_owned())
        .index(index)
        .allow_hyphen_values(true)
        .required(spec.default().is_none())
        .value_parser(element_parser(spec.element_kind()));

    if let Some(default) = spec.default() {
        arg = arg.default_value(default.to_owned());
    }

    if spec.kind() == ParamKind::List {
        arg = arg.num_args(1..).action(ArgAction::Append);
    }
    arg
}

/// Value parser validating one token of the given element kind
fn element_parser(kind: ParamKind) -> ValueParser {
    match kind {
        ParamKind::Number => value_parser!(f64).into(),
        ParamKind::Integer => value_parser!(i64).into(),
        ParamKind::Boolean => ValueParser::new(BoolishValueParser::new()),
        ParamKind::Json => ValueParser::new(parse_json),
        ParamKind::String | ParamKind::List => ValueParser::string(),
    }
}

fn parse_json(raw: &str) -> serde_json::Result<Value> {
    serde_json::from_str(raw)
}

fn collect_values(schema: &[ParameterSpec], matches: &ArgMatches) -> Result<Parameters> {
    let mut parameters = Parameters::new();

    for spec in schema {
        let Some(values) = bound_values(matches, spec)? else {
            continue;
        };
        let value = if spec.kind() == ParamKind::List {
            Some(Value::Array(values))
        } else {
            values.into_iter().next()
        };

        if let Some(value) = value {
            parameters.insert(spec.name(), value);
        }
    }

    Ok(parameters)
}

/// Every value clap bound for `spec`, converted by element kind
fn bound_values(matches: &ArgMatches, spec: &ParameterSpec) -> Result<Option<Vec<Value>>> {
    let name = spec.name();
    let values = match spec.element_kind() {
        ParamKind::Number => match matches.try_get_many::<f64>(name)? {
            Some(values) => Some(
                values
                    .map(|value| {
                        Number::from_f64(*value).map(Value::Number).ok_or_else(|| {
                            anyhow!("parameter '{name}' must be a finite number")
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        },
        ParamKind::Integer => matches
            .try_get_many::<i64>(name)?
            .map(|values| values.map(|value| Value::from(*value)).collect()),
        ParamKind::Boolean => matches
            .try_get_many::<bool>(name)?
            .map(|values| values.map(|value| Value::Bool(*value)).collect()),
        ParamKind::Json => matches
            .try_get_many::<Value>(name)?
            .map(|values| values.cloned().collect()),
        ParamKind::String | ParamKind::List => matches
            .try_get_many::<String>(name)?
            .map(|values| values.map(|value| Value::String(value.clone())).collect()),
    };
    Ok(values)
}

/// Reduce clap's rendered error to its message, without usage or tips
fn condense_error(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let message = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");

    match message.strip_prefix("error: ") {
        Some(stripped) => stripped.to_owned(),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| (*token).to_owned()).collect()
    }

    #[test]
    fn test_binds_positionals_by_kind() {
        let schema = vec![
            ParameterSpec::new("a", "number", "left"),
            ParameterSpec::new("count", "integer", "times"),
            ParameterSpec::new("loud", "boolean", "shout"),
            ParameterSpec::new("who", "string", "name"),
        ];
        let params = ClapParameterParser::new()
            .parse(&schema, &tokens(&["-1.5", "3", "yes", "bob"]))
            .unwrap();

        assert_eq!(params.number("a"), Some(-1.5));
        assert_eq!(params.integer("count"), Some(3));
        assert_eq!(params.flag("loud"), Some(true));
        assert_eq!(params.str("who"), Some("bob"));
    }

    #[test]
    fn test_list_takes_remaining_tokens() {
        let schema = vec![
            ParameterSpec::new("op", "string", "operation"),
            ParameterSpec::new("values", "number[]", "operands"),
        ];
        let params = ClapParameterParser::new()
            .parse(&schema, &tokens(&["sum", "1", "2", "3"]))
            .unwrap();

        assert_eq!(params.get("values"), Some(&json!([1.0, 2.0, 3.0])));
        assert_eq!(params.numbers("values"), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_list_elements_are_validated() {
        let schema = vec![ParameterSpec::new("values", "number[]", "operands")];
        let err = ClapParameterParser::new()
            .parse(&schema, &tokens(&["1", "x"]))
            .unwrap_err();

        assert!(err.to_string().contains("invalid value 'x'"), "{err}");
    }

    #[test]
    fn test_untyped_list_binds_strings() {
        let schema = vec![ParameterSpec::new("words", "array", "anything")];
        let params = ClapParameterParser::new()
            .parse(&schema, &tokens(&["a", "-b", "3"]))
            .unwrap();

        assert_eq!(params.list("words"), vec!["a", "-b", "3"]);
    }

    #[test]
    fn test_first_double_dash_ends_options() {
        let schema = vec![
            ParameterSpec::new("a", "string", ""),
            ParameterSpec::new("b", "string", ""),
        ];
        let parser = ClapParameterParser::new();

        let params = parser.parse(&schema, &tokens(&["--", "p", "q"])).unwrap();
        assert_eq!(params.str("a"), Some("p"));
        assert_eq!(params.str("b"), Some("q"));

        let params = parser.parse(&schema, &tokens(&["--", "--", "q"])).unwrap();
        assert_eq!(params.str("a"), Some("--"));
    }

    #[test]
    fn test_json_value() {
        let schema = vec![ParameterSpec::new("payload", "json", "body")];
        let params = ClapParameterParser::new()
            .parse(&schema, &tokens(&[r#"{"k":[1,2]}"#]))
            .unwrap();

        assert_eq!(params.get("payload"), Some(&json!({"k": [1, 2]})));
    }

    #[test]
    fn test_default_fills_missing_optional() {
        let schema = vec![
            ParameterSpec::new("name", "string", "who"),
            ParameterSpec::new("greeting", "string", "word").with_default("Hello"),
        ];
        let params = ClapParameterParser::new()
            .parse(&schema, &tokens(&["Ann"]))
            .unwrap();

        assert_eq!(params.str("greeting"), Some("Hello"));
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let schema = vec![ParameterSpec::new("a", "number", "left")];
        let err = ClapParameterParser::new()
            .parse(&schema, &tokens(&["abc"]))
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("invalid value 'abc'"), "{message}");
        assert!(!message.contains("Usage"), "{message}");
        assert!(!message.starts_with("error:"), "{message}");
    }

    #[test]
    fn test_missing_required_names_parameter() {
        let schema = vec![
            ParameterSpec::new("a", "number", "left"),
            ParameterSpec::new("b", "number", "right"),
        ];
        let err = ClapParameterParser::new()
            .parse(&schema, &tokens(&["1"]))
            .unwrap_err();

        assert!(err.to_string().contains("<b>"), "{err}");
    }

    #[test]
    fn test_extra_token_is_rejected() {
        let schema = vec![ParameterSpec::new("a", "string", "only")];
        let err = ClapParameterParser::new()
            .parse(&schema, &tokens(&["x", "y"]))
            .unwrap_err();

        assert!(err.to_string().contains("'y'"), "{err}");
    }

    #[test]
    fn test_malformed_schemas_fail_without_panic() {
        let parser = ClapParameterParser::new();

        let duplicate = vec![
            ParameterSpec::new("a", "string", ""),
            ParameterSpec::new("a", "string", ""),
        ];
        let err = parser.parse(&duplicate, &tokens(&["1", "2"])).unwrap_err();
        assert!(err.to_string().contains("more than once"));

        let variadic_first = vec![
            ParameterSpec::new("rest", "array", ""),
            ParameterSpec::new("tail", "string", ""),
        ];
        let err = parser.parse(&variadic_first, &tokens(&["1"])).unwrap_err();
        assert!(err.to_string().contains("must be declared last"));

        let optional_first = vec![
            ParameterSpec::new("opt", "string", "").with_default("x"),
            ParameterSpec::new("req", "string", ""),
        ];
        let err = parser.parse(&optional_first, &tokens(&["1"])).unwrap_err();
        assert!(err.to_string().contains("cannot follow an optional"));
    }

    #[test]
    fn test_empty_schema_accepts_no_tokens() {
        let parser = ClapParameterParser::new();
        assert!(parser.parse(&[], &[]).unwrap().is_empty());
        assert!(parser.parse(&[], &tokens(&["stray"])).is_err());
    }
}
