use reqwest::Client;
use tokio::time::Instant;
use url::Url;

use crate::error::{AppError, AppResult, HttpError};
use crate::probe::{DETECTION_PATHS, probe_once};
use crate::report;

use super::{PhaseOutcome, PhaseStats};

/// Probes the first `count` detection endpoints one at a time, in list
/// order, reporting each result as soon as it lands. The baseline check
/// before any concurrency is attempted.
pub(crate) async fn run_sequential(
    client: &Client,
    base: &Url,
    count: usize,
    use_color: bool,
) -> AppResult<PhaseOutcome> {
    let started = Instant::now();
    let mut outcomes = Vec::with_capacity(count);

    for path in DETECTION_PATHS.iter().take(count) {
        let target = base.join(path).map_err(|source| {
            AppError::http(HttpError::JoinEndpointFailed {
                path: (*path).to_owned(),
                source,
            })
        })?;
        let outcome = probe_once(client, target.as_str()).await;
        report::print_probe_line(path, &outcome, use_color);
        outcomes.push(outcome);
    }

    let stats = PhaseStats::from_outcomes(&outcomes, started.elapsed());
    Ok(PhaseOutcome { outcomes, stats })
}
