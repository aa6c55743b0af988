use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid target URL '{url}': {source}")]
    InvalidTargetUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported target scheme '{scheme}'. Portal checks speak plain http (or https).")]
    UnsupportedScheme { scheme: String },
    #[error("Failed to join endpoint '{path}' onto the target: {source}")]
    JoinEndpointFailed {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}
