use http::{
    HeaderMap, StatusCode,
    header::{HeaderValue, SET_COOKIE},
};

use super::config::LR_AUTH_ERROR_COOKIE;

/// Lifetime of the authentication failure cookie in seconds
const AUTH_ERROR_COOKIE_MAX_AGE: i64 = 300;

fn header_set_cookie(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
    max_age: i64,
) -> Result<(), (StatusCode, String)> {
    let cookie = format!("{name}={value}; SameSite=Lax; HttpOnly; Path=/; Max-Age={max_age}");
    let header_value = HeaderValue::from_str(&cookie).map_err(|e| {
        tracing::error!("Failed to build Set-Cookie header: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    headers.append(SET_COOKIE, header_value);
    Ok(())
}

/// Record an authentication failure for the login page to pick up
///
/// The message is percent-encoded. A later successful login clears it.
///
/// # Errors
///
/// Fails with 500 when the cookie cannot be expressed as a header value.
pub fn set_auth_error_cookie(
    headers: &mut HeaderMap,
    message: &str,
) -> Result<(), (StatusCode, String)> {
    header_set_cookie(
        headers,
        LR_AUTH_ERROR_COOKIE.as_str(),
        &urlencoding::encode(message),
        AUTH_ERROR_COOKIE_MAX_AGE,
    )
}

/// Expire the authentication failure cookie
pub(crate) fn clear_auth_error_cookie(headers: &mut HeaderMap) -> Result<(), (StatusCode, String)> {
    header_set_cookie(headers, LR_AUTH_ERROR_COOKIE.as_str(), "", 0)
}
