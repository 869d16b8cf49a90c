use axum::{Extension, body::Body, response::Response};
use axum_extra::{TypedHeader, headers};
use http::{StatusCode, header::LOCATION};

use login_redirect::{Principal, RedirectDecision, RedirectError, resolve_principal_redirect};

use super::config::LR_AUTH_ERROR_COOKIE;
use super::cookie::clear_auth_error_cookie;
use super::error::IntoResponseError;

/// Success handler for the authentication pipeline
///
/// The pipeline authenticates the request, inserts the resulting [`Principal`] into the
/// request extensions and hands over to this handler. The handler only redirects; it
/// never authenticates anything itself.
///
/// A principal without any recognized authority is answered with
/// `500 Internal Server Error`.
pub async fn authentication_success(
    Extension(principal): Extension<Principal>,
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<Response, (StatusCode, String)> {
    let clear_auth_error = cookies
        .as_ref()
        .is_some_and(|TypedHeader(c)| c.get(LR_AUTH_ERROR_COOKIE.as_str()).is_some());

    let decision = resolve_principal_redirect(&principal)
        .map_err(RedirectError::log)
        .into_response_error()?;

    tracing::info!(
        "Authentication succeeded for {}, redirecting to {}",
        principal.display_name,
        decision
    );
    redirect_response(&decision, clear_auth_error)
}

/// Build the `302 Found` response for a redirect decision
///
/// With `clear_auth_error` set, the response also expires the authentication failure
/// cookie left by an earlier failed attempt.
///
/// # Errors
///
/// Fails with 500 when the destination cannot be used as a `Location` header.
pub fn redirect_response(
    decision: &RedirectDecision,
    clear_auth_error: bool,
) -> Result<Response, (StatusCode, String)> {
    let mut response = http::Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, decision.to_url())
        .body(Body::empty())
        .into_response_error()?;
    if clear_auth_error {
        clear_auth_error_cookie(response.headers_mut())?;
    }
    Ok(response)
}
