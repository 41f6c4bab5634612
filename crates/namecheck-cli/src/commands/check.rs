//! Implementation of the `namecheck check` command.

use std::io::{self, BufRead};

use serde::Serialize;
use tracing::{debug, info, instrument};

use namecheck_core::domain::{NameKind, ValidationError};

use crate::{
    cli::{CheckArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Outcome for a single checked value.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub value: String,
    pub kind: NameKind,
    pub valid: bool,
    pub error: Option<String>,
    #[serde(skip)]
    rejection: Option<ValidationError>,
}

impl CheckOutcome {
    fn new(value: String, kind: NameKind, result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                value,
                kind,
                valid: true,
                error: None,
                rejection: None,
            },
            Err(e) => Self {
                value,
                kind,
                valid: false,
                error: Some(e.to_string()),
                rejection: Some(e),
            },
        }
    }
}

#[instrument(skip_all, fields(kind = %args.kind))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = args.kind;
    let field = args
        .field
        .or(config.check.field)
        .unwrap_or_else(|| kind.field_label().to_owned());
    let fail_fast = args.fail_fast || config.check.fail_fast;

    let values = collect_values(args.values, io::stdin().lock())
        .with_cli_context(|| "Failed to read values from stdin")?;
    if values.is_empty() {
        return Err(CliError::InvalidInput {
            message: "no values to check".into(),
        });
    }

    let outcomes = check_values(kind, &field, values, fail_fast);
    render(&outcomes, &output)?;
    summarize(kind, outcomes)
}

/// Use the positional values, or read stdin when there are none or the only
/// one is `-`. Every stdin line is a value, blank ones included; a trailing
/// `\r` is stripped.
fn collect_values<R: BufRead>(values: Vec<String>, reader: R) -> io::Result<Vec<String>> {
    let from_stdin = values.is_empty() || (values.len() == 1 && values[0] == "-");
    if !from_stdin {
        return Ok(values);
    }

    let mut collected = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        collected.push(line);
    }
    Ok(collected)
}

fn check_values(
    kind: NameKind,
    field: &str,
    values: Vec<String>,
    fail_fast: bool,
) -> Vec<CheckOutcome> {
    let mut outcomes = Vec::with_capacity(values.len());
    for value in values {
        let result = kind
            .validate(&value, field)
            .map(|_| ())
            .inspect_err(|e| debug!(%kind, value = %value, error = %e, "value rejected"));
        let rejected = result.is_err();
        outcomes.push(CheckOutcome::new(value, kind, result));
        if rejected && fail_fast {
            break;
        }
    }
    outcomes
}

fn render(outcomes: &[CheckOutcome], output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(outcomes);
    }

    for outcome in outcomes {
        match &outcome.error {
            None => output.success(&outcome.value)?,
            Some(message) => output.error(message)?,
        }
    }
    Ok(())
}

fn summarize(kind: NameKind, outcomes: Vec<CheckOutcome>) -> CliResult<()> {
    let checked = outcomes.len();
    let mut rejections = outcomes.into_iter().filter_map(|o| o.rejection);

    match rejections.next() {
        None => {
            info!(checked, %kind, "all values accepted");
            Ok(())
        }
        Some(first) => Err(CliError::Rejected {
            kind,
            rejected: 1 + rejections.count(),
            checked,
            first,
        }),
    }
}
