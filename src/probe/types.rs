use std::time::Duration;

/// Outcome of one detection probe. Created when the request completes,
/// consumed by phase aggregation, then discarded.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub url: String,
    pub success: bool,
    pub elapsed: Duration,
}

impl ProbeOutcome {
    #[must_use]
    pub(crate) fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}
