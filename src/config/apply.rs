use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{CheckArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values underneath CLI arguments.
///
/// CLI-provided values always win; config values only fill in fields the
/// operator left at their defaults.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut CheckArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "target")
        && let Some(target) = config.target.clone()
    {
        args.target = target;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration("timeout")?;
    }

    if !is_cli(matches, "sequential")
        && let Some(count) = config.sequential
    {
        args.sequential = ensure_positive(count, "sequential")?;
    }

    if !is_cli(matches, "light")
        && let Some(count) = config.light
    {
        args.light = ensure_positive(count, "light")?;
    }

    if !is_cli(matches, "heavy")
        && let Some(count) = config.heavy
    {
        args.heavy = ensure_positive(count, "heavy")?;
    }

    if !is_cli(matches, "pause")
        && let Some(pause) = config.pause.as_ref()
    {
        args.pause = pause.to_duration("pause")?;
    }

    if !is_cli(matches, "yes")
        && let Some(yes) = config.yes
    {
        args.yes = yes;
    }

    if !is_cli(matches, "forgive")
        && let Some(forgive) = config.forgive
    {
        args.forgive = forgive;
    }

    if !is_cli(matches, "export_json")
        && let Some(path) = config.export_json.clone()
    {
        args.export_json = Some(path);
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|source| AppError::config(ConfigError::FieldMustBePositive { field, source }))
}
