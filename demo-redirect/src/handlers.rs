use askama::Template;
use axum::{extract::Query, http::StatusCode, response::Html};
use axum_extra::{TypedHeader, headers};
use serde::Deserialize;

use login_redirect_axum::LR_AUTH_ERROR_COOKIE;

use crate::users::user_names;

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate {
    error: Option<String>,
    users: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "landing.j2")]
struct LandingTemplate<'a> {
    title: &'a str,
    message: &'a str,
}

fn render<T: Template>(template: &T) -> Result<Html<String>, (StatusCode, String)> {
    template
        .render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub(crate) async fn index(
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let error = cookies.as_ref().and_then(|TypedHeader(c)| {
        c.get(LR_AUTH_ERROR_COOKIE.as_str())
            .map(|raw| urlencoding::decode(raw).map_or_else(|_| raw.to_string(), String::from))
    });
    render(&LoginTemplate {
        error,
        users: user_names(),
    })
}

pub(crate) async fn management() -> Result<Html<String>, (StatusCode, String)> {
    render(&LandingTemplate {
        title: "Management",
        message: "Welcome, manager.",
    })
}

pub(crate) async fn console() -> Result<Html<String>, (StatusCode, String)> {
    render(&LandingTemplate {
        title: "Console",
        message: "You have write access.",
    })
}

#[derive(Deserialize, Debug)]
pub(crate) struct HomepageQuery {
    user: Option<String>,
}

pub(crate) async fn homepage(
    Query(query): Query<HomepageQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let message = format!("Hey {}!", query.user.as_deref().unwrap_or("there"));
    render(&LandingTemplate {
        title: "Homepage",
        message: &message,
    })
}
