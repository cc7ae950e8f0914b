use crate::health::HealthStatus;
use crate::headers::Headers;
use crate::source::ConfigError;
use std::str::Utf8Error;
use thiserror::Error;

/// Whether the request origin may receive cross-origin headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Allowed(Headers),
    Blocked,
}

impl OriginDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, OriginDecision::Allowed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Empty,
    Health(HealthStatus),
}

impl ResponseBody {
    pub fn to_json(&self) -> Result<Option<String>, serde_json::Error> {
        match self {
            ResponseBody::Empty => Ok(None),
            ResponseBody::Health(status) => status.to_json().map(Some),
        }
    }
}

/// A response produced by the filter itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: ResponseBody,
}

/// What the host should do with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Answer with this response and skip the remaining handlers.
    Respond(FilterResponse),
    /// Run the next handler and add these headers to its response.
    Continue(Headers),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub origin: Result<OriginDecision, FilterError>,
    pub action: FilterAction,
}

impl FilterOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(&self.origin, Ok(decision) if decision.is_allowed())
    }

    pub fn is_recovered(&self) -> bool {
        self.origin.is_err()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.action, FilterAction::Respond(_))
    }

    pub fn headers(&self) -> &Headers {
        match &self.action {
            FilterAction::Respond(response) => &response.headers,
            FilterAction::Continue(headers) => headers,
        }
    }
}

/// Failures while deciding on the origin. The filter recovers from all of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("origin header is not valid UTF-8: {0}")]
    InvalidOrigin(#[from] Utf8Error),
}
