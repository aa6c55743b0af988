use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_TARGET, default_no_color};
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent captive-portal checker - fires sequential and parallel detection probes at an access point to spot socket exhaustion before real devices do."
)]
pub struct CheckArgs {
    /// Base URL of the captive portal under test
    #[arg(long, short = 'u', default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Number of sequential warmup probes (at most one per detection endpoint)
    #[arg(long, default_value = "5", value_parser = parse_positive_usize)]
    pub sequential: PositiveUsize,

    /// Connection count for the light concurrent phase
    #[arg(long, default_value = "8", value_parser = parse_positive_usize)]
    pub light: PositiveUsize,

    /// Connection count for the heavy concurrent phase
    #[arg(long, default_value = "15", value_parser = parse_positive_usize)]
    pub heavy: PositiveUsize,

    /// Pause between phases, giving the portal time to settle (supports ms/s/m/h)
    #[arg(
        long = "pause",
        default_value = "2s",
        value_parser = parse_duration_arg
    )]
    pub pause: Duration,

    /// Start immediately instead of waiting for the operator to confirm
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Exit 0 even when phases fail (report-only mode)
    #[arg(long)]
    pub forgive: bool,

    /// Write the final report as JSON to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by PORTALCHECK_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", default_value_t = default_no_color())]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./portalcheck.toml or ./portalcheck.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
