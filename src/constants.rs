pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCEPT: &str = "Accept";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
    pub const X_APP_ID: &str = "X-App-ID";
    pub const X_REQUESTED_WITH: &str = "X-Requested-With";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod env {
    /// Comma-separated origin patterns, e.g. `https://shop.example.com,*.example.com`.
    pub const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
}

pub mod liveness {
    pub const PATH: &str = "/api/health";
    pub const SUFFIX: &str = "/health";
    pub const STATUS_OK: &str = "ok";
    pub const SERVICE_STATE: &str = "running";
    pub const VERSION: &str = "1.0.0";
    pub const UNKNOWN_APP_ID: &str = "Unknown";
}
