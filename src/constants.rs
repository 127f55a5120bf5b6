pub mod query {
    pub const OFFSET: &str = "offset";
    pub const LIMIT: &str = "limit";
}

pub mod pagination {
    pub const DEFAULT_LIMIT: i64 = 25;
    pub const DEFAULT_OFFSET: i64 = 0;
}

pub mod network {
    pub const TIMEOUT_REQUEST_MS: u64 = 30_000;
    pub const USER_AGENT: &str = "stormpath-rust/0.1";
}

pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}
