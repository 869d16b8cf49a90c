//! Central configuration for the login_redirect_axum crate

use std::sync::LazyLock;

/// Route prefix under which the success handler router is mounted
/// Default: "/login"
pub static LR_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("LR_ROUTE_PREFIX").unwrap_or_else(|_| "/login".to_string()));

/// Name of the cookie holding the last authentication failure
/// Default: "lr_auth_error"
pub static LR_AUTH_ERROR_COOKIE: LazyLock<String> = LazyLock::new(|| {
    std::env::var("LR_AUTH_ERROR_COOKIE").unwrap_or_else(|_| "lr_auth_error".to_string())
});
