//! Origin allow-list filter for HTTP services.
//!
//! Every request passes through [`OriginFilter`] before any route handler.
//! Allowed origins get their `Origin` echoed back together with a fixed set of
//! cross-origin headers, `OPTIONS` requests are answered with an empty `204`
//! and liveness paths get a small JSON status document. Everything else is
//! handed back to the host to dispatch.

mod allow_list;
pub mod constants;
mod context;
mod filter;
mod headers;
mod health;
#[cfg(feature = "axum")]
pub mod middleware;
mod observer;
mod options;
mod result;
mod source;
mod util;

pub use allow_list::{AllowList, OriginPattern, is_allowed};
pub use context::RequestContext;
pub use filter::OriginFilter;
pub use headers::Headers;
pub use health::{HealthStatus, format_timestamp};
pub use observer::{FilterEvent, FilterObserver, NoopObserver, TracingObserver};
pub use options::{FilterOptions, LivenessOptions, ValidationError};
pub use result::{
    FilterAction, FilterError, FilterOutcome, FilterResponse, OriginDecision, ResponseBody,
};
pub use source::{AllowListLoaderFn, AllowListSource, ConfigError, EnvAllowList};
