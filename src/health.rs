use crate::constants::liveness;
use crate::options::LivenessOptions;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Body returned for liveness requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    #[serde(rename = "appId")]
    pub app_id: String,
    pub manifest: String,
    pub version: String,
}

impl HealthStatus {
    pub fn new(options: &LivenessOptions, app_id: Option<&str>, at: DateTime<Utc>) -> Self {
        Self {
            status: liveness::STATUS_OK.into(),
            timestamp: format_timestamp(at),
            app_id: app_id
                .filter(|value| !value.is_empty())
                .unwrap_or(liveness::UNKNOWN_APP_ID)
                .into(),
            manifest: options.service_state.clone(),
            version: options.version.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-18T09:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;
