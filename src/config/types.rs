use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_value;
use crate::error::{ConfigError, ValidationError};

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub target: Option<String>,
    pub timeout: Option<DurationValue>,
    pub sequential: Option<usize>,
    pub light: Option<usize>,
    pub heavy: Option<usize>,
    pub pause: Option<DurationValue>,
    pub yes: Option<bool>,
    pub forgive: Option<bool>,
    pub export_json: Option<String>,
    pub no_color: Option<bool>,
}

/// Duration settings accept either bare seconds (`timeout = 5`) or a
/// suffixed string (`timeout = "500ms"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> Result<Duration, ConfigError> {
        match self {
            DurationValue::Seconds(0) => Err(ConfigError::InvalidDuration {
                field,
                source: ValidationError::DurationZero,
            }),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_value(text)
                .map_err(|source| ConfigError::InvalidDuration { field, source }),
        }
    }
}
