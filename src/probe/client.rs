use std::time::Duration;

use reqwest::{Client, redirect};

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the HTTP client shared by every probe in a run.
///
/// Redirects are never followed: a 3xx from a detection endpoint is the
/// portal intercept itself, not something to chase.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub(crate) fn build_probe_client(timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .redirect(redirect::Policy::none())
        .build()
        .map_err(|source| AppError::http(HttpError::BuildClientFailed { source }))
}
