use crate::constants::{env, header, liveness, method};
use crate::source::AllowListSource;
use crate::util::is_http_token;
use thiserror::Error;

/// Paths answered directly with the liveness document and the values it
/// reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivenessOptions {
    pub path: String,
    pub suffix: String,
    pub service_state: String,
    pub version: String,
}

impl LivenessOptions {
    /// `path` excludes the query string.
    pub fn matches(&self, path: &str) -> bool {
        path == self.path || path.ends_with(self.suffix.as_str())
    }
}

impl Default for LivenessOptions {
    fn default() -> Self {
        Self {
            path: liveness::PATH.into(),
            suffix: liveness::SUFFIX.into(),
            service_state: liveness::SERVICE_STATE.into(),
            version: liveness::VERSION.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub origins: AllowListSource,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub credentials: bool,
    pub preflight_status: u16,
    pub liveness: LivenessOptions,
}

impl FilterOptions {
    /// Defaults with the allow-list taken from `ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        Self {
            origins: AllowListSource::env(env::ALLOWED_ORIGINS),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allowed_methods.is_empty() {
            return Err(ValidationError::EmptyAllowedMethods);
        }
        if let Some(value) = self
            .allowed_methods
            .iter()
            .find(|value| !is_http_token(value))
        {
            return Err(ValidationError::InvalidMethod(value.clone()));
        }

        if let Some(value) = self
            .allowed_headers
            .iter()
            .find(|value| !is_http_token(value))
        {
            return Err(ValidationError::InvalidHeaderName(value.clone()));
        }
        if self.credentials && self.allowed_headers.iter().any(|value| value == "*") {
            return Err(ValidationError::AllowedHeadersCannotContainWildcard);
        }

        if !(200..300).contains(&self.preflight_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.preflight_status,
            ));
        }

        if !self.liveness.path.starts_with('/') {
            return Err(ValidationError::InvalidLivenessPath(
                self.liveness.path.clone(),
            ));
        }
        if self.liveness.suffix.is_empty() {
            return Err(ValidationError::EmptyLivenessSuffix);
        }

        Ok(())
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            origins: AllowListSource::default(),
            allowed_methods: vec![
                method::GET.into(),
                method::POST.into(),
                method::PUT.into(),
                method::DELETE.into(),
                method::OPTIONS.into(),
            ],
            allowed_headers: vec![
                header::CONTENT_TYPE.into(),
                header::AUTHORIZATION.into(),
                header::X_APP_ID.into(),
                header::ACCEPT.into(),
                header::ORIGIN.into(),
                header::X_REQUESTED_WITH.into(),
            ],
            credentials: true,
            preflight_status: 204,
            liveness: LivenessOptions::default(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed methods cannot be empty")]
    EmptyAllowedMethods,
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("allowed header `{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("allowed headers cannot contain '*' when credentials are enabled")]
    AllowedHeadersCannotContainWildcard,
    #[error("preflight status {0} is not a 2xx status")]
    InvalidPreflightStatus(u16),
    #[error("liveness path `{0}` must start with '/'")]
    InvalidLivenessPath(String),
    #[error("liveness suffix cannot be empty")]
    EmptyLivenessSuffix,
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
