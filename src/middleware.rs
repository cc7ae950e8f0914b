//! Axum integration.
//!
//! ```no_run
//! use std::sync::Arc;
//! use axum::{Router, routing::get};
//! use origin_access_filter::OriginFilter;
//! use origin_access_filter::middleware::origin_filter_middleware;
//!
//! let filter = Arc::new(OriginFilter::from_env().expect("valid filter options"));
//! let app: Router = Router::new()
//!     .route("/api/orders", get(|| async { "[]" }))
//!     .layer(axum::middleware::from_fn_with_state(filter, origin_filter_middleware));
//! ```
//!
//! Mount it with `Router::layer` (not `route_layer`) so that preflight and
//! liveness requests are answered for paths without a route as well.

use crate::constants::header;
use crate::context::RequestContext;
use crate::filter::OriginFilter;
use crate::headers::Headers;
use crate::result::{FilterAction, FilterResponse};
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::warn;

pub type SharedFilter = Arc<OriginFilter>;

const JSON_CONTENT_TYPE: &str = "application/json";

pub async fn origin_filter_middleware(
    State(filter): State<SharedFilter>,
    request: Request,
    next: Next,
) -> Response {
    let outcome = {
        let headers = request.headers();
        let context = RequestContext {
            method: request.method().as_str(),
            path: request.uri().path(),
            origin: headers.get(header::ORIGIN).map(HeaderValue::as_bytes),
            app_id: headers
                .get(header::X_APP_ID)
                .and_then(|value| value.to_str().ok()),
        };
        filter.check(&context)
    };

    match outcome.action {
        FilterAction::Respond(response) => filter_response(response),
        FilterAction::Continue(headers) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
    }
}

fn filter_response(response: FilterResponse) -> Response {
    let FilterResponse {
        status,
        headers,
        body,
    } = response;

    let (status, body, json) = match body.to_json() {
        Ok(Some(json)) => (status, Body::from(json), true),
        Ok(None) => (status, Body::empty(), false),
        Err(err) => {
            warn!(target: "origin_access_filter", error = %err, "failed to serialize liveness body");
            (500, Body::empty(), false)
        }
    };

    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
    if json {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }
    apply_headers(response.headers_mut(), &headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}
