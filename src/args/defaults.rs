use super::parsers::parse_bool_env;

/// Default AP-side address captive portals answer on.
pub(crate) const DEFAULT_TARGET: &str = "http://192.168.4.1";

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("portalcheck/", env!("CARGO_PKG_VERSION"));

pub(crate) fn default_no_color() -> bool {
    std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false)
}
