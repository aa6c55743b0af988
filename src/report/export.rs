use chrono::Utc;
use serde::Serialize;

use crate::error::AppResult;

use super::{RunReport, format_rate_x10};

#[derive(Debug, Serialize)]
pub(crate) struct PhaseRecord {
    pub(crate) name: String,
    pub(crate) total: usize,
    pub(crate) successful: usize,
    pub(crate) failed: usize,
    pub(crate) success_rate: String,
    pub(crate) avg_response_ms: u64,
    pub(crate) wall_time_ms: u64,
    pub(crate) passed: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportDocument {
    pub(crate) generated_at: String,
    pub(crate) target: String,
    pub(crate) phases: Vec<PhaseRecord>,
    pub(crate) passed: bool,
}

pub(crate) fn build_document(report: &RunReport) -> ReportDocument {
    let phases = report
        .phases()
        .into_iter()
        .map(|phase| PhaseRecord {
            name: phase.slug.to_owned(),
            total: phase.stats.total,
            successful: phase.stats.successful,
            failed: phase.stats.failed,
            success_rate: format_rate_x10(phase.stats.success_rate_x10),
            avg_response_ms: phase.stats.avg_elapsed_ms,
            wall_time_ms: phase.stats.wall_time_ms,
            passed: phase.passed,
        })
        .collect();

    ReportDocument {
        generated_at: Utc::now().to_rfc3339(),
        target: report.target.clone(),
        phases,
        passed: report.all_passed(),
    }
}

/// Writes the run report as pretty JSON.
///
/// # Errors
///
/// Returns an error when serialization or the file write fails.
pub(crate) fn write_json_report(path: &str, report: &RunReport) -> AppResult<()> {
    let document = build_document(report);
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, json)?;
    Ok(())
}
