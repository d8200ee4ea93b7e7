//! Central configuration for the oauth2_session_axum crate

use std::sync::LazyLock;

/// Path prefix the auth router is expected to be nested under
///
/// Default: "/api/auth"
pub static AUTH_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/api/auth".to_string())
});

#[cfg(test)]
mod tests {
    #[test]
    fn test_route_prefix_default() {
        // The LazyLock may already be initialized, so test the same logic it uses
        let prefix =
            std::env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/api/auth".to_string());
        assert!(prefix.starts_with('/'));
    }
}
