use crate::allow_list::OriginPattern;
use crate::result::FilterError;
use tracing::{debug, warn};

const TARGET: &str = "origin_access_filter";

/// Diagnostic events emitted while a request passes through the filter.
#[derive(Debug, Clone, Copy)]
pub enum FilterEvent<'a> {
    RequestReceived {
        method: &'a str,
        path: &'a str,
        app_id: &'a str,
    },
    OriginMissing,
    PatternMatched {
        origin: &'a str,
        pattern: &'a OriginPattern,
    },
    OriginBlocked {
        origin: &'a str,
        patterns: usize,
    },
    HeadersApplied {
        origin: &'a str,
    },
    PreflightAnswered {
        allowed: bool,
    },
    LivenessAnswered {
        app_id: &'a str,
    },
    PassedThrough {
        path: &'a str,
    },
    Recovered {
        error: &'a FilterError,
    },
}

pub trait FilterObserver: Send + Sync {
    fn on_event(&self, event: &FilterEvent<'_>);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FilterObserver for TracingObserver {
    fn on_event(&self, event: &FilterEvent<'_>) {
        match *event {
            FilterEvent::RequestReceived {
                method,
                path,
                app_id,
            } => debug!(target: TARGET, method, path, app_id, "request received"),
            FilterEvent::OriginMissing => {
                debug!(target: TARGET, "no origin header, allowing")
            }
            FilterEvent::PatternMatched { origin, pattern } => debug!(
                target: TARGET,
                origin,
                pattern = pattern.as_str(),
                wildcard = pattern.is_wildcard(),
                "origin matched"
            ),
            FilterEvent::OriginBlocked { origin, patterns } => {
                debug!(target: TARGET, origin, patterns, "no pattern matched, blocking origin")
            }
            FilterEvent::HeadersApplied { origin } => {
                debug!(target: TARGET, origin, "cross-origin headers set")
            }
            FilterEvent::PreflightAnswered { allowed } => {
                debug!(target: TARGET, allowed, "preflight answered")
            }
            FilterEvent::LivenessAnswered { app_id } => {
                debug!(target: TARGET, app_id, "liveness check answered")
            }
            FilterEvent::PassedThrough { path } => {
                debug!(target: TARGET, path, "continuing to next handler")
            }
            FilterEvent::Recovered { error } => {
                warn!(target: TARGET, %error, "origin check failed, continuing without cross-origin headers")
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FilterObserver for NoopObserver {
    fn on_event(&self, _event: &FilterEvent<'_>) {}
}
