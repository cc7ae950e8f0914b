#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use origin_access_filter::constants::method;
use origin_access_filter::{
    AllowListSource, FilterObserver, FilterOptions, FilterOutcome, LivenessOptions, NoopObserver,
    OriginFilter, RequestContext,
};
use std::sync::Arc;

pub fn received_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[derive(Default)]
pub struct FilterBuilder {
    origins: Option<AllowListSource>,
    credentials: Option<bool>,
    liveness: Option<LivenessOptions>,
    observer: Option<Arc<dyn FilterObserver>>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_origins(mut self, raw: &str) -> Self {
        self.origins = Some(AllowListSource::parse(raw));
        self
    }

    pub fn source(mut self, source: AllowListSource) -> Self {
        self.origins = Some(source);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn liveness(mut self, liveness: LivenessOptions) -> Self {
        self.liveness = Some(liveness);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn FilterObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> OriginFilter {
        let defaults = FilterOptions::default();
        let options = FilterOptions {
            origins: self.origins.unwrap_or(defaults.origins),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            liveness: self.liveness.unwrap_or(defaults.liveness),
            ..FilterOptions::default()
        };
        let observer = self
            .observer
            .unwrap_or_else(|| Arc::new(NoopObserver) as Arc<dyn FilterObserver>);

        OriginFilter::with_observer(options, observer).expect("valid filter options")
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<Vec<u8>>,
    app_id: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            origin: None,
            app_id: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into().into_bytes());
        self
    }

    pub fn origin_bytes(mut self, origin: &[u8]) -> Self {
        self.origin = Some(origin.to_vec());
        self
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn check(self, filter: &OriginFilter) -> FilterOutcome {
        let ctx = RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            app_id: self.app_id.as_deref(),
        };
        filter.check_at(&ctx, received_at())
    }
}

pub fn filter() -> FilterBuilder {
    FilterBuilder::new()
}

pub fn get(path: &str) -> RequestBuilder {
    RequestBuilder::new(method::GET, path)
}

pub fn post(path: &str) -> RequestBuilder {
    RequestBuilder::new(method::POST, path)
}

pub fn preflight(path: &str) -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS, path)
}
