//! login-redirect-axum - Axum integration for post-authentication redirects
//!
//! Mount [`login_redirect_router`] under [`LR_ROUTE_PREFIX`] behind your authentication
//! layer, or call [`authentication_success`] from your own login handler once the
//! user has been authenticated.

mod config;
mod cookie;
mod error;
mod router;
mod success;

pub use config::{LR_AUTH_ERROR_COOKIE, LR_ROUTE_PREFIX};
pub use cookie::set_auth_error_cookie;
pub use error::IntoResponseError;
pub use router::{login_redirect_router, login_redirect_router_no_trace};
pub use success::{authentication_success, redirect_response};

// Re-export the core types so applications only need this crate
pub use login_redirect::{Principal, RedirectDecision, RedirectError};
