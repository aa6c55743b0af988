use url::Url;

use crate::error::{AppError, AppResult, HttpError};

/// Detection paths probed by real operating systems when they join a
/// network: root, Android's generate_204, the iOS/macOS hotspot page,
/// Android's connectivity check, and Windows NCSI.
pub(crate) const DETECTION_PATHS: [&str; 5] = [
    "/",
    "/generate_204",
    "/hotspot-detect.html",
    "/connectivity-check.html",
    "/ncsi.txt",
];

/// Endpoint for the i-th simulated device. Cycles through the fixed
/// list so a burst of N connections mixes all detection conventions.
pub(crate) fn endpoint_for(index: usize) -> &'static str {
    let slot = index.checked_rem(DETECTION_PATHS.len()).unwrap_or(0);
    DETECTION_PATHS.get(slot).copied().unwrap_or("/")
}

/// Parses and sanity-checks the portal base URL.
///
/// # Errors
///
/// Returns an error when the URL does not parse or uses a non-HTTP scheme.
pub(crate) fn parse_target(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw).map_err(|source| {
        AppError::http(HttpError::InvalidTargetUrl {
            url: raw.to_owned(),
            source,
        })
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::http(HttpError::UnsupportedScheme {
            scheme: other.to_owned(),
        })),
    }
}

/// Builds the target URL list for a concurrent phase of `count` probes.
///
/// # Errors
///
/// Returns an error when an endpoint path cannot be joined onto the base.
pub(crate) fn build_targets(base: &Url, count: usize) -> AppResult<Vec<String>> {
    let mut targets = Vec::with_capacity(count);
    for index in 0..count {
        let path = endpoint_for(index);
        let joined = base.join(path).map_err(|source| {
            AppError::http(HttpError::JoinEndpointFailed {
                path: path.to_owned(),
                source,
            })
        })?;
        targets.push(String::from(joined));
    }
    Ok(targets)
}
