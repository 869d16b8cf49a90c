//! Toy authentication pipeline in front of the success handler
//!
//! `POST /authenticate` checks the user name and remembers it in a cookie, then sends
//! the browser to `{LR_ROUTE_PREFIX}/success`. The `require_principal` middleware on
//! that route turns the cookie back into a `Principal` for the success handler.

use axum::{
    Form,
    extract::Request,
    http::{HeaderMap, HeaderValue, StatusCode, header::SET_COOKIE},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::{TypedHeader, headers};
use serde::Deserialize;

use login_redirect_axum::{LR_ROUTE_PREFIX, set_auth_error_cookie};

use crate::users::authenticate;

pub(crate) const DEMO_USER_COOKIE: &str = "demo_user";

#[derive(Deserialize, Debug)]
pub(crate) struct LoginForm {
    username: String,
}

fn reject(message: &str) -> Response {
    let mut headers = HeaderMap::new();
    match set_auth_error_cookie(&mut headers, message) {
        Ok(()) => (headers, Redirect::to("/")).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn login(Form(form): Form<LoginForm>) -> Response {
    let username = form.username.trim();
    let Some(principal) = authenticate(username) else {
        tracing::warn!("Login failed for unknown user {:?}", form.username);
        return reject("Unknown user");
    };

    let cookie = format!(
        "{DEMO_USER_COOKIE}={}; SameSite=Lax; HttpOnly; Path=/; Max-Age=60",
        principal.display_name
    );
    let header_value = match HeaderValue::from_str(&cookie) {
        Ok(value) => value,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };

    tracing::debug!("Authenticated {}", principal.display_name);
    let success_url = format!("{}/success", LR_ROUTE_PREFIX.as_str());
    ([(SET_COOKIE, header_value)], Redirect::to(&success_url)).into_response()
}

// Route layer for the success handler: inserts the Principal it expects
pub(crate) async fn require_principal(
    cookies: Option<TypedHeader<headers::Cookie>>,
    mut req: Request,
    next: Next,
) -> Response {
    let principal = cookies
        .as_ref()
        .and_then(|TypedHeader(c)| c.get(DEMO_USER_COOKIE))
        .and_then(authenticate);

    match principal {
        Some(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        None => reject("Please log in first"),
    }
}
