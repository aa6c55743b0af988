//! All user-facing rendering: banners, per-probe lines, phase results,
//! and the final summary.
pub(crate) mod export;


use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::phases::PhaseStats;
use crate::probe::ProbeOutcome;

const RULE: &str = "============================================================";
const SUMMARY_LABEL_WIDTH: usize = 24;

pub(crate) fn use_color(no_color: bool) -> bool {
    !no_color && std::io::stdout().is_terminal()
}

pub(crate) fn print_phase_banner(title: &str) {
    println!();
    println!("{}", RULE);
    println!("{}", title);
    println!("{}", RULE);
    println!();
}

fn paint(text: &str, color: Color, use_color: bool) -> String {
    if use_color {
        format!("{}", text.with(color))
    } else {
        text.to_owned()
    }
}

fn status_symbol(success: bool, use_color: bool) -> String {
    if success {
        paint("\u{2713}", Color::Green, use_color)
    } else {
        paint("\u{2717}", Color::Red, use_color)
    }
}

/// Renders a tenths-of-a-percent rate with one decimal place.
pub(crate) fn format_rate_x10(value: u64) -> String {
    format!("{}.{}", value / 10, value % 10)
}

/// Renders whole milliseconds as seconds with millisecond precision.
pub(crate) fn format_secs_ms(ms: u64) -> String {
    format!("{}.{:03}", ms / 1000, ms % 1000)
}

pub(crate) fn print_probe_line(path: &str, outcome: &ProbeOutcome, use_color: bool) {
    println!(
        "  {} {}: {}s",
        status_symbol(outcome.success, use_color),
        path,
        format_secs_ms(outcome.elapsed_ms())
    );
}

pub(crate) fn print_sequential_summary(stats: &PhaseStats) {
    println!();
    println!(
        "Sequential test: {}/{} successful",
        stats.successful, stats.total
    );
}

pub(crate) fn print_concurrent_results(stats: &PhaseStats, use_color: bool) {
    println!("Results:");
    println!("  Total requests: {}", stats.total);
    println!("  Successful: {}", stats.successful);
    println!("  Failed: {}", stats.failed);
    println!(
        "  Success rate: {}%",
        format_rate_x10(stats.success_rate_x10)
    );
    println!(
        "  Average response time: {}s",
        format_secs_ms(stats.avg_elapsed_ms)
    );
    println!("  Total test time: {}s", format_secs_ms(stats.wall_time_ms));
    println!();

    if stats.failed > 0 {
        println!(
            "  {} {} connections failed - possible socket exhaustion!",
            paint("\u{26a0}", Color::Yellow, use_color),
            stats.failed
        );
    } else {
        println!(
            "  {} All connections successful!",
            paint("\u{2713}", Color::Green, use_color)
        );
    }
}

/// One finished phase, as rendered in the final summary.
#[derive(Debug)]
pub(crate) struct PhaseReport {
    pub(crate) slug: &'static str,
    pub(crate) label: String,
    pub(crate) stats: PhaseStats,
    pub(crate) passed: bool,
}

/// The whole run, ready for the summary table and the JSON export.
#[derive(Debug)]
pub(crate) struct RunReport {
    pub(crate) target: String,
    pub(crate) sequential: PhaseReport,
    pub(crate) light: PhaseReport,
    pub(crate) heavy: PhaseReport,
}

impl RunReport {
    pub(crate) const fn all_passed(&self) -> bool {
        self.sequential.passed && self.light.passed && self.heavy.passed
    }

    pub(crate) fn phases(&self) -> [&PhaseReport; 3] {
        [&self.sequential, &self.light, &self.heavy]
    }
}

pub(crate) fn print_summary(report: &RunReport, use_color: bool) {
    println!();
    println!("{}", RULE);
    println!("Test Summary");
    println!("{}", RULE);

    for phase in report.phases() {
        let verdict = if phase.passed {
            format!("PASS {}", status_symbol(true, use_color))
        } else {
            format!("FAIL {}", status_symbol(false, use_color))
        };
        println!("{:<width$}{}", phase.label, verdict, width = SUMMARY_LABEL_WIDTH);
    }

    println!();
    if report.heavy.passed {
        println!(
            "{} Socket configuration supports multi-device captive detection!",
            status_symbol(true, use_color)
        );
    } else {
        println!(
            "{} Socket exhaustion detected - check the portal's maximum socket limit (LWIP_MAX_SOCKETS on lwIP targets)",
            status_symbol(false, use_color)
        );
    }
}
