//! The fixed check sequence: sequential warmup, then light and heavy
//! concurrent bursts, with a settle pause in between.
use tokio::time::sleep;
use tracing::debug;

use crate::args::CheckArgs;
use crate::error::AppResult;
use crate::phases;
use crate::probe::{self, ProbeOutcome};
use crate::report::{self, PhaseReport, RunReport};

pub(crate) async fn run_checks(args: &CheckArgs) -> AppResult<RunReport> {
    let base = probe::parse_target(&args.target)?;
    let client = probe::build_probe_client(args.request_timeout)?;
    let use_color = report::use_color(args.no_color);

    let sequential_count = args.sequential.get();
    report::print_phase_banner(&format!(
        "Testing {} sequential connections",
        sequential_count
    ));
    let sequential = phases::run_sequential(&client, &base, sequential_count, use_color).await?;
    report::print_sequential_summary(&sequential.stats);

    sleep(args.pause).await;

    let light_count = args.light.get();
    report::print_phase_banner(&format!("Testing {} concurrent connections", light_count));
    let light = phases::run_concurrent(&client, &base, light_count).await?;
    log_slowest(&light.outcomes);
    report::print_concurrent_results(&light.stats, use_color);

    sleep(args.pause).await;

    let heavy_count = args.heavy.get();
    report::print_phase_banner(&format!("Testing {} concurrent connections", heavy_count));
    let heavy = phases::run_concurrent(&client, &base, heavy_count).await?;
    log_slowest(&heavy.outcomes);
    report::print_concurrent_results(&heavy.stats, use_color);

    Ok(RunReport {
        target: String::from(base),
        sequential: PhaseReport {
            slug: "sequential",
            label: format!("Sequential ({} req):", sequential_count),
            passed: sequential.passed(),
            stats: sequential.stats,
        },
        light: PhaseReport {
            slug: "light_concurrent",
            label: format!("Light concurrent ({}):", light_count),
            passed: light.passed(),
            stats: light.stats,
        },
        heavy: PhaseReport {
            slug: "heavy_concurrent",
            label: format!("Heavy concurrent ({}):", heavy_count),
            passed: heavy.passed(),
            stats: heavy.stats,
        },
    })
}

fn log_slowest(outcomes: &[ProbeOutcome]) {
    if let Some(slowest) = outcomes.iter().max_by_key(|outcome| outcome.elapsed) {
        debug!(
            "Slowest probe: {} in {}ms (success={})",
            slowest.url,
            slowest.elapsed_ms(),
            slowest.success
        );
    }
}
