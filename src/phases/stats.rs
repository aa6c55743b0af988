use std::time::Duration;

use crate::probe::ProbeOutcome;

/// Aggregate statistics for one phase. Ratios are carried as scaled
/// integers: `success_rate_x10` is tenths of a percent, times are
/// milliseconds.
#[derive(Debug, Clone)]
pub(crate) struct PhaseStats {
    pub(crate) total: usize,
    pub(crate) successful: usize,
    pub(crate) failed: usize,
    pub(crate) success_rate_x10: u64,
    pub(crate) avg_elapsed_ms: u64,
    pub(crate) wall_time_ms: u64,
}

impl PhaseStats {
    pub(crate) fn from_outcomes(outcomes: &[ProbeOutcome], wall_time: Duration) -> Self {
        let total = outcomes.len();
        let successful = outcomes
            .iter()
            .filter(|outcome| outcome.success)
            .count();
        let failed = total.saturating_sub(successful);

        Self {
            total,
            successful,
            failed,
            success_rate_x10: success_rate_x10(successful, total),
            avg_elapsed_ms: mean_elapsed_ms(outcomes),
            wall_time_ms: u64::try_from(wall_time.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Success rate in tenths of a percent, rounded half-up, so one decimal
/// place renders exactly.
pub(crate) fn success_rate_x10(successful: usize, total: usize) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = (successful as u128)
        .saturating_mul(1000)
        .saturating_add((total as u128) / 2)
        .checked_div(total as u128)
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Arithmetic mean of recorded elapsed times, in whole milliseconds.
pub(crate) fn mean_elapsed_ms(outcomes: &[ProbeOutcome]) -> u64 {
    if outcomes.is_empty() {
        return 0;
    }
    let count = outcomes.len() as u128;
    let sum: u128 = outcomes
        .iter()
        .map(|outcome| u128::from(outcome.elapsed_ms()))
        .sum();
    let mean = sum
        .saturating_add(count / 2)
        .checked_div(count)
        .unwrap_or(0);
    u64::try_from(mean).unwrap_or(u64::MAX)
}
