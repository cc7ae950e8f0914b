#![allow(dead_code)]

use origin_access_filter::{FilterAction, FilterOutcome, FilterResponse, Headers};

pub fn assert_respond(outcome: FilterOutcome) -> FilterResponse {
    match outcome.action {
        FilterAction::Respond(response) => response,
        other => panic!("expected terminal response, got {:?}", other),
    }
}

pub fn assert_continue(outcome: FilterOutcome) -> Headers {
    match outcome.action {
        FilterAction::Continue(headers) => headers,
        other => panic!("expected pass-through, got {:?}", other),
    }
}
