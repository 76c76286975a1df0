//! Admin header helpers for router tests.

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

pub const TEST_ADMIN_SECRET: &str = "test-admin-secret";

/// Builds the `Authorization` header the admin gate expects.
pub struct MockAdmin {
    pub secret: String,
}

impl MockAdmin {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.secret).expect("admin secret must be a valid header"),
        );
        map
    }
}

impl Default for MockAdmin {
    fn default() -> Self {
        Self::new(TEST_ADMIN_SECRET)
    }
}
