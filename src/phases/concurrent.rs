use reqwest::Client;
use tokio::sync::mpsc;
use tokio::time::Instant;
use url::Url;

use crate::error::AppResult;
use crate::probe::{build_targets, probe_once};

use super::{PhaseOutcome, PhaseStats};

/// Fans out `count` probes at once, one task per simulated device, and
/// gathers outcomes in completion order.
///
/// The task pool is sized exactly to the connection count, so every
/// request opens its socket immediately; that simultaneous burst is the
/// load being tested. Once dispatched, a probe runs to completion or to
/// its own timeout.
///
/// # Errors
///
/// Returns an error when targets cannot be built or a probe task is
/// cancelled or panics.
pub(crate) async fn run_concurrent(
    client: &Client,
    base: &Url,
    count: usize,
) -> AppResult<PhaseOutcome> {
    let targets = build_targets(base, count)?;
    let started = Instant::now();

    let (outcome_tx, mut outcome_rx) = mpsc::channel(count.max(1));
    let mut handles = Vec::with_capacity(targets.len());
    for target in targets {
        let client = client.clone();
        let outcome_tx = outcome_tx.clone();
        handles.push(tokio::spawn(async move {
            let outcome = probe_once(&client, &target).await;
            drop(outcome_tx.send(outcome).await);
        }));
    }
    drop(outcome_tx);

    let mut outcomes = Vec::with_capacity(count);
    while let Some(outcome) = outcome_rx.recv().await {
        outcomes.push(outcome);
    }
    for handle in handles {
        handle.await?;
    }

    let stats = PhaseStats::from_outcomes(&outcomes, started.elapsed());
    Ok(PhaseOutcome { outcomes, stats })
}
