use std::collections::HashSet;

use crate::errors::RedirectError;
use crate::types::{Principal, RedirectDecision};

pub const ROLE_MANAGER: &str = "ROLE_MANAGER";
pub const WRITE_PRIVILEGE: &str = "WRITE_PRIVILEGE";
pub const READ_PRIVILEGE: &str = "READ_PRIVILEGE";

pub const MANAGEMENT_PATH: &str = "/management.html";
pub const CONSOLE_PATH: &str = "/console";
pub const HOMEPAGE_PATH: &str = "/homepage.html";

/// Query parameter carrying the display name on the homepage redirect
pub const USER_QUERY_PARAM: &str = "user";

/// Decide where an authenticated user goes after login
///
/// Rules are checked in a fixed order and the first match wins:
///
/// 1. `ROLE_MANAGER` → `/management.html`
/// 2. `WRITE_PRIVILEGE` → `/console`
/// 3. `READ_PRIVILEGE` → `/homepage.html?user=<display_name>`
///
/// A manager does not need `READ_PRIVILEGE`, and overlapping authorities are settled
/// by the order above, not by which rule is more specific.
///
/// # Errors
///
/// Returns [`RedirectError::InvalidState`] when none of the authorities is recognized,
/// including the empty set. The error is never recovered here.
pub fn resolve_redirect(
    authorities: &HashSet<String>,
    display_name: &str,
) -> Result<RedirectDecision, RedirectError> {
    decide(|authority| authorities.contains(authority), display_name)
        .ok_or_else(|| no_destination(authorities))
}

/// Same as [`resolve_redirect`], reading both inputs from a [`Principal`]
///
/// # Errors
///
/// See [`resolve_redirect`].
pub fn resolve_principal_redirect(
    principal: &Principal,
) -> Result<RedirectDecision, RedirectError> {
    decide(|authority| principal.has_authority(authority), &principal.display_name)
        .ok_or_else(|| no_destination(&principal.authorities))
}

fn decide(has_authority: impl Fn(&str) -> bool, display_name: &str) -> Option<RedirectDecision> {
    let decision = if has_authority(ROLE_MANAGER) {
        RedirectDecision::new(MANAGEMENT_PATH)
    } else if has_authority(WRITE_PRIVILEGE) {
        RedirectDecision::new(CONSOLE_PATH)
    } else if has_authority(READ_PRIVILEGE) {
        RedirectDecision::with_query(HOMEPAGE_PATH, USER_QUERY_PARAM, display_name)
    } else {
        tracing::debug!("No redirect rule matches {}", display_name);
        return None;
    };

    tracing::debug!("Redirecting {} to {}", display_name, decision.path());
    Some(decision)
}

// Logged by the caller that surfaces it, through RedirectError::log
fn no_destination(authorities: &HashSet<String>) -> RedirectError {
    RedirectError::InvalidState(format!("no redirect rule matches {authorities:?}"))
}
