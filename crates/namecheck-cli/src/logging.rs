//! Tracing subscriber set-up for the `namecheck` binary.
//!
//! Events are written to stderr as plain lines so that `check` output on
//! stdout stays machine-readable. `namecheck-core` never logs; rejected
//! values are reported by `commands::check` at DEBUG.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! A non-empty `RUST_LOG` replaces the flag-derived filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Log target of every event emitted by this binary.
const LOG_TARGET: &str = "namecheck";

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), verbosity(args));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn build_filter(rust_log: Option<&str>, level: LevelFilter) -> EnvFilter {
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::builder().parse_lossy(directives),
        None => EnvFilter::builder().parse_lossy(format!("{LOG_TARGET}={level}")),
    }
}

fn verbosity(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_counts_up_to_trace() {
        let levels: Vec<_> = (0..=4).map(|v| verbosity(&args_with(v, false))).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(verbosity(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn flag_level_applies_to_the_binary_target() {
        let filter = build_filter(None, LevelFilter::DEBUG).to_string().to_lowercase();
        assert!(filter.contains("namecheck=debug"), "{filter}");
    }

    #[test]
    fn rust_log_replaces_the_flag_level() {
        let filter = build_filter(Some("namecheck=trace"), LevelFilter::WARN)
            .to_string()
            .to_lowercase();
        assert!(filter.contains("namecheck=trace"), "{filter}");
        assert!(!filter.contains("warn"), "{filter}");
    }

    #[test]
    fn blank_rust_log_falls_back_to_flags() {
        let filter = build_filter(Some("  "), LevelFilter::INFO).to_string().to_lowercase();
        assert!(filter.contains("namecheck=info"), "{filter}");
    }
}
