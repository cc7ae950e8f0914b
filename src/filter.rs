use crate::constants::{header, liveness, method};
use crate::context::RequestContext;
use crate::headers::{HeaderCollection, Headers};
use crate::health::HealthStatus;
use crate::observer::{FilterEvent, FilterObserver, TracingObserver};
use crate::options::{FilterOptions, ValidationError};
use crate::result::{
    FilterAction, FilterError, FilterOutcome, FilterResponse, OriginDecision, ResponseBody,
};
use crate::util::join_list;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

const LIVENESS_STATUS: u16 = 200;

/// Origin access filter evaluated ahead of every route.
///
/// Decides whether the request origin receives cross-origin headers, answers
/// preflight and liveness requests directly and hands everything else back to
/// the host with the headers to apply.
pub struct OriginFilter {
    options: FilterOptions,
    allow_methods: String,
    allow_headers: String,
    observer: Arc<dyn FilterObserver>,
}

impl OriginFilter {
    pub fn new(options: FilterOptions) -> Result<Self, ValidationError> {
        Self::with_observer(options, Arc::new(TracingObserver))
    }

    pub fn with_observer(
        options: FilterOptions,
        observer: Arc<dyn FilterObserver>,
    ) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self {
            allow_methods: join_list(&options.allowed_methods),
            allow_headers: join_list(&options.allowed_headers),
            options,
            observer,
        })
    }

    /// Default options with the allow-list read from `ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::new(FilterOptions::from_env())
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>) -> FilterOutcome {
        let received_at = Utc::now();
        self.check_at(request, received_at)
    }

    /// Same as [`check`](Self::check) with the request entry time supplied by
    /// the caller.
    pub fn check_at(
        &self,
        request: &RequestContext<'_>,
        received_at: DateTime<Utc>,
    ) -> FilterOutcome {
        self.emit(FilterEvent::RequestReceived {
            method: request.method,
            path: request.path,
            app_id: request
                .app_id
                .filter(|value| !value.is_empty())
                .unwrap_or(liveness::UNKNOWN_APP_ID),
        });

        match self.evaluate_origin(request.origin) {
            Ok(decision) => {
                let action = self.route(request, &decision, received_at);
                FilterOutcome {
                    origin: Ok(decision),
                    action,
                }
            }
            Err(error) => self.recover(request, error),
        }
    }

    pub fn evaluate_origin(&self, origin: Option<&[u8]>) -> Result<OriginDecision, FilterError> {
        let origin = origin.map(std::str::from_utf8).transpose()?;
        let Some(origin) = origin.filter(|value| !value.is_empty()) else {
            self.emit(FilterEvent::OriginMissing);
            return Ok(OriginDecision::Allowed(Headers::new()));
        };

        let patterns = self.options.origins.load()?;
        match patterns.find_match(origin) {
            Some(pattern) => {
                self.emit(FilterEvent::PatternMatched { origin, pattern });
                let headers = self.cross_origin_headers(origin);
                self.emit(FilterEvent::HeadersApplied { origin });
                Ok(OriginDecision::Allowed(headers))
            }
            None => {
                self.emit(FilterEvent::OriginBlocked {
                    origin,
                    patterns: patterns.len(),
                });
                Ok(OriginDecision::Blocked)
            }
        }
    }

    fn route(
        &self,
        request: &RequestContext<'_>,
        decision: &OriginDecision,
        received_at: DateTime<Utc>,
    ) -> FilterAction {
        let headers = match decision {
            OriginDecision::Allowed(headers) => headers.clone(),
            OriginDecision::Blocked => Headers::new(),
        };

        if request.method == method::OPTIONS {
            self.emit(FilterEvent::PreflightAnswered {
                allowed: decision.is_allowed(),
            });
            return self.preflight_response(headers);
        }

        if self.options.liveness.matches(request.path) {
            let status = HealthStatus::new(&self.options.liveness, request.app_id, received_at);
            self.emit(FilterEvent::LivenessAnswered {
                app_id: &status.app_id,
            });
            return FilterAction::Respond(FilterResponse {
                status: LIVENESS_STATUS,
                headers,
                body: ResponseBody::Health(status),
            });
        }

        self.emit(FilterEvent::PassedThrough { path: request.path });
        FilterAction::Continue(headers)
    }

    /// Preflights still terminate; everything else continues without
    /// cross-origin headers.
    fn recover(&self, request: &RequestContext<'_>, error: FilterError) -> FilterOutcome {
        self.emit(FilterEvent::Recovered { error: &error });

        let action = if request.method == method::OPTIONS {
            self.preflight_response(Headers::new())
        } else {
            FilterAction::Continue(Headers::new())
        };

        FilterOutcome {
            origin: Err(error),
            action,
        }
    }

    fn preflight_response(&self, headers: Headers) -> FilterAction {
        FilterAction::Respond(FilterResponse {
            status: self.options.preflight_status,
            headers,
            body: ResponseBody::Empty,
        })
    }

    fn cross_origin_headers(&self, origin: &str) -> Headers {
        let mut headers = HeaderCollection::new();
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        if !self.allow_methods.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                self.allow_methods.as_str(),
            );
        }
        if !self.allow_headers.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                self.allow_headers.as_str(),
            );
        }
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers.into_headers()
    }

    fn emit(&self, event: FilterEvent<'_>) {
        self.observer.on_event(&event);
    }
}

impl fmt::Debug for OriginFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OriginFilter")
            .field("options", &self.options)
            .field("allow_methods", &self.allow_methods)
            .field("allow_headers", &self.allow_headers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
