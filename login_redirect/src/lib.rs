//! login-redirect - Post-authentication redirect decisions
//!
//! This crate decides where a freshly authenticated user is sent, based only on the
//! authorities granted to them. It does not touch requests or responses; the web
//! framework integration performs the actual redirect.

mod errors;
mod resolver;
mod types;

pub use errors::RedirectError;
pub use resolver::{
    CONSOLE_PATH, HOMEPAGE_PATH, MANAGEMENT_PATH, READ_PRIVILEGE, ROLE_MANAGER, USER_QUERY_PARAM,
    WRITE_PRIVILEGE, resolve_principal_redirect, resolve_redirect,
};
pub use types::{Principal, QueryParam, RedirectDecision};
