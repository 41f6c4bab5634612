//! Implementation of the `namecheck kinds` command.

use serde::Serialize;

use namecheck_core::domain::NameKind;

use crate::{
    cli::{KindsArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct KindSummary {
    kind: NameKind,
    label: &'static str,
    description: &'static str,
    example: &'static str,
    max_length: Option<usize>,
}

impl From<NameKind> for KindSummary {
    fn from(kind: NameKind) -> Self {
        Self {
            kind,
            label: kind.field_label(),
            description: kind.description(),
            example: kind.example(),
            max_length: kind.max_length(),
        }
    }
}

pub fn execute(args: KindsArgs, output: OutputManager) -> CliResult<()> {
    let summaries: Vec<KindSummary> = NameKind::ALL.into_iter().map(KindSummary::from).collect();

    match args.format {
        ListFormat::Table => {
            output.header("Supported kinds:")?;
            for s in &summaries {
                output.print(&format!(
                    "  {:<20} {}  (e.g. {})",
                    s.kind.as_str(),
                    s.description,
                    s.example
                ))?;
            }
        }

        // JSON must stay parseable in pipes, so it bypasses quiet mode.
        ListFormat::Json => output.json(&summaries)?,

        ListFormat::List => {
            for s in &summaries {
                println!("{}", s.kind);
            }
        }

        ListFormat::Csv => {
            println!("kind,label,max_length,example");
            for s in &summaries {
                let max = s.max_length.map(|m| m.to_string()).unwrap_or_default();
                println!("{},{},{},{}", s.kind, s.label, max, s.example);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_kind_in_kebab_case() {
        let json = serde_json::to_value(KindSummary::from(NameKind::ValidAssetKey)).unwrap();
        assert_eq!(json["kind"], "valid-asset-key");
        assert_eq!(json["max_length"], 512);
        assert_eq!(json["label"], "Asset key");
    }
}
