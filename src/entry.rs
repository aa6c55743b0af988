use std::io::Write as _;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::CheckArgs;
use crate::config;
use crate::error::{AppError, AppResult, ValidationError};
use crate::probe::DETECTION_PATHS;
use crate::report;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = config::load_config(args.config.as_deref())? {
        config::apply_config(&mut args, &matches, &config)?;
    }
    ensure_valid(&args)?;

    crate::system::logger::init_logging(args.verbose, args.no_color);
    crate::system::banner::print_cli_banner(args.no_color);
    println!("Target: {}", args.target);

    if !args.yes {
        wait_for_operator()?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(crate::app::run_checks(&args))?;

    report::print_summary(&outcome, report::use_color(args.no_color));

    if let Some(path) = args.export_json.as_deref() {
        report::export::write_json_report(path, &outcome)?;
        tracing::info!("Report written to {}", path);
    }

    if outcome.all_passed() || args.forgive {
        Ok(())
    } else {
        Err(AppError::validation(ValidationError::ChecksFailed))
    }
}

fn parse_args() -> AppResult<(CheckArgs, ArgMatches)> {
    let cmd = CheckArgs::command();
    let matches = cmd.get_matches_from(std::env::args_os());
    let args = CheckArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

/// The sequential phase walks the fixed endpoint list at most once.
fn ensure_valid(args: &CheckArgs) -> AppResult<()> {
    let max = DETECTION_PATHS.len();
    let requested = args.sequential.get();
    if requested > max {
        return Err(AppError::validation(
            ValidationError::SequentialCountTooLarge { requested, max },
        ));
    }
    Ok(())
}

fn wait_for_operator() -> AppResult<()> {
    println!("Ensure the target device is powered on with its captive portal active.");
    println!();
    print!("Press Enter to start tests...");
    std::io::stdout().flush()?;
    let mut line = String::new();
    let _read = std::io::stdin().read_line(&mut line)?;
    Ok(())
}
