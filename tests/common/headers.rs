#![allow(dead_code)]

use origin_access_filter::Headers;
use origin_access_filter::constants::header;

pub const CROSS_ORIGIN_HEADERS: [&str; 4] = [
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    header::ACCESS_CONTROL_ALLOW_METHODS,
    header::ACCESS_CONTROL_ALLOW_HEADERS,
    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
];

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn has_no_cross_origin_headers(headers: &Headers) -> bool {
    CROSS_ORIGIN_HEADERS
        .iter()
        .all(|name| !has_header(headers, name))
}
