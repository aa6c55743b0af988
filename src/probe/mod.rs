//! Single-request probing of captive-portal detection endpoints.
mod client;
mod endpoints;
mod prober;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub(crate) use client::build_probe_client;
pub(crate) use endpoints::{DETECTION_PATHS, build_targets, parse_target};
pub(crate) use prober::probe_once;
pub(crate) use types::ProbeOutcome;
