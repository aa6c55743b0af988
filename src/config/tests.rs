use std::io::Write as _;
use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::CheckArgs;
use crate::error::{AppError, AppResult};

use super::types::{ConfigFile, DurationValue};
use super::{apply_config, load_config_file};

fn parse_with_matches<I, T>(argv: I) -> AppResult<(CheckArgs, ArgMatches)>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cmd = CheckArgs::command();
    let matches = cmd.try_get_matches_from(argv).map_err(AppError::from)?;
    let args = CheckArgs::from_arg_matches(&matches).map_err(AppError::from)?;
    Ok((args, matches))
}

fn write_config(contents: &str, extension: &str) -> AppResult<(tempfile::TempDir, std::path::PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(format!("portalcheck.{}", extension));
    let mut file = std::fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok((dir, path))
}

#[test]
fn toml_config_fills_defaults() -> AppResult<()> {
    let (_dir, path) = write_config(
        concat!(
            "target = \"http://10.1.1.1\"\n",
            "timeout = \"250ms\"\n",
            "sequential = 3\n",
            "light = 6\n",
            "heavy = 12\n",
            "pause = 1\n",
            "forgive = true\n",
        ),
        "toml",
    )?;
    let config = load_config_file(&path)?;
    let (mut args, matches) = parse_with_matches(["portalcheck"])?;
    apply_config(&mut args, &matches, &config)?;

    let checks = [
        (args.target == "http://10.1.1.1", "Unexpected target"),
        (
            args.request_timeout == Duration::from_millis(250),
            "Unexpected timeout",
        ),
        (args.sequential.get() == 3, "Unexpected sequential"),
        (args.light.get() == 6, "Unexpected light"),
        (args.heavy.get() == 12, "Unexpected heavy"),
        (args.pause == Duration::from_secs(1), "Unexpected pause"),
        (args.forgive, "Expected forgive from config"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn json_config_parses() -> AppResult<()> {
    let (_dir, path) = write_config(r#"{"light": 4, "no_color": true}"#, "json")?;
    let config = load_config_file(&path)?;
    let (mut args, matches) = parse_with_matches(["portalcheck"])?;
    apply_config(&mut args, &matches, &config)?;

    if args.light.get() != 4 {
        return Err(AppError::validation("Unexpected light from JSON config"));
    }
    if !args.no_color {
        return Err(AppError::validation("Expected no_color from JSON config"));
    }
    Ok(())
}

#[test]
fn cli_values_win_over_config() -> AppResult<()> {
    let config = ConfigFile {
        target: Some("http://10.9.9.9".to_owned()),
        light: Some(9),
        ..ConfigFile::default()
    };
    let (mut args, matches) =
        parse_with_matches(["portalcheck", "-u", "http://10.2.2.2", "--light", "4"])?;
    apply_config(&mut args, &matches, &config)?;

    if args.target != "http://10.2.2.2" {
        return Err(AppError::validation("CLI target should win over config"));
    }
    if args.light.get() != 4 {
        return Err(AppError::validation("CLI light should win over config"));
    }
    Ok(())
}

#[test]
fn zero_counts_in_config_are_rejected() -> AppResult<()> {
    let config = ConfigFile {
        heavy: Some(0),
        ..ConfigFile::default()
    };
    let (mut args, matches) = parse_with_matches(["portalcheck"])?;
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err(AppError::validation("Expected heavy = 0 to be rejected"));
    }
    Ok(())
}

#[test]
fn duration_values_convert() -> AppResult<()> {
    let seconds = DurationValue::Seconds(5).to_duration("timeout")?;
    if seconds != Duration::from_secs(5) {
        return Err(AppError::validation("Unexpected bare-seconds duration"));
    }
    let text = DurationValue::Text("750ms".to_owned()).to_duration("timeout")?;
    if text != Duration::from_millis(750) {
        return Err(AppError::validation("Unexpected suffixed duration"));
    }
    if DurationValue::Seconds(0).to_duration("timeout").is_ok() {
        return Err(AppError::validation("Expected zero duration to be rejected"));
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> AppResult<()> {
    let (_dir, path) = write_config("target = \"http://10.1.1.1\"", "yaml")?;
    if load_config_file(&path).is_ok() {
        return Err(AppError::validation("Expected .yaml config to be rejected"));
    }
    Ok(())
}
