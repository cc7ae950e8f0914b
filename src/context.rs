/// The parts of an inbound request the filter looks at.
///
/// `origin` holds the raw `Origin` header bytes so that a value which is not
/// valid UTF-8 still reaches the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: Option<&'a [u8]>,
    pub app_id: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, path: &'a str) -> Self {
        Self {
            method,
            path,
            origin: None,
            app_id: None,
        }
    }

    pub fn with_origin(self, origin: &'a str) -> Self {
        self.with_origin_bytes(origin.as_bytes())
    }

    pub fn with_origin_bytes(mut self, origin: &'a [u8]) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_app_id(mut self, app_id: &'a str) -> Self {
        self.app_id = Some(app_id);
        self
    }
}
