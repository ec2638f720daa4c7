//! # `schema-demo`
//!
//! Small calculator showing how a program declares its sub-commands and hands
//! them to [`subcommand_schema::run`].
//!
//! ```sh
//! schema-demo add 2 3
//! schema-demo greet Ann Hi
//! schema-demo divide 1 0      # handler failure, prints sub-command usage
//! SUBCOMMAND_SCHEMA_LANG=ja schema-demo
//! ```

use anyhow::{Context as _, bail};
use subcommand_schema::{ParameterSpec, Parameters, SubCommandDef};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    // Diagnostics own stderr; keep logging quiet unless RUST_LOG asks
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    subcommand_schema::run(definitions())
}

fn definitions() -> Vec<SubCommandDef> {
    vec![
        SubCommandDef::new("add", "Add two numbers\nPrints a + b.", |params, _| {
            let (a, b) = operands(params, "a", "b")?;
            println!("{}", a + b);
            Ok(())
        })
        .param(ParameterSpec::new("a", "number", "left operand"))
        .param(ParameterSpec::new("b", "number", "right operand")),
        SubCommandDef::new(
            "divide",
            "Divide two numbers\nFails when the divisor is zero.",
            |params, _| {
                let (dividend, divisor) = operands(params, "dividend", "divisor")?;
                if divisor == 0.0 {
                    bail!("division by zero");
                }
                println!("{}", dividend / divisor);
                Ok(())
            },
        )
        .param(ParameterSpec::new("dividend", "number", "value to divide"))
        .param(ParameterSpec::new(
            "divisor",
            "number",
            "value to divide by\nMust not be zero.",
        )),
        SubCommandDef::new("greet", "Print a greeting", |params, _| {
            let name = params.str("name").context("missing name")?;
            let greeting = params.str("greeting").unwrap_or("Hello");
            println!("{greeting}, {name}!");
            Ok(())
        })
        .param(ParameterSpec::new("name", "string", "who to greet"))
        .param(ParameterSpec::new("greeting", "string", "salutation").with_default("Hello")),
        SubCommandDef::new("sum", "Sum any number of values", |params, _| {
            let values = params.numbers("values");
            let total: f64 = values.iter().sum();
            debug!("Summed {} values", values.len());
            println!("{total}");
            Ok(())
        })
        .param(ParameterSpec::new("values", "number[]", "values to add")),
    ]
}

fn operands(params: &Parameters, left: &str, right: &str) -> anyhow::Result<(f64, f64)> {
    let a = params
        .number(left)
        .with_context(|| format!("missing parameter '{left}'"))?;
    let b = params
        .number(right)
        .with_context(|| format!("missing parameter '{right}'"))?;
    Ok((a, b))
}
