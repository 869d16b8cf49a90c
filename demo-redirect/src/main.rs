use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use login_redirect_axum::{LR_ROUTE_PREFIX, login_redirect_router};

mod auth;
mod handlers;
mod server;
mod users;

use crate::{
    auth::{login, require_principal},
    handlers::{console, homepage, index, management},
    server::{init_tracing, spawn_http_server},
};

fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/authenticate", post(login))
        .route("/management.html", get(management))
        .route("/console", get(console))
        .route("/homepage.html", get(homepage))
        .nest(
            LR_ROUTE_PREFIX.as_str(),
            login_redirect_router().route_layer(from_fn(require_principal)),
        )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing(env!("CARGO_CRATE_NAME"));

    let port = match std::env::var("PORT") {
        Ok(value) => value.parse::<u16>()?,
        Err(_) => 3001,
    };

    spawn_http_server(port, app()).await??;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{
        Method, Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    };
    use tower::ServiceExt;

    fn login_request(username: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/authenticate")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("username={username}")))
            .expect("valid request")
    }

    fn success_request(cookie: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("{}/success", LR_ROUTE_PREFIX.as_str()))
            .header(COOKIE, cookie)
            .body(Body::empty())
            .expect("valid request")
    }

    fn header<'a>(response: &'a axum::response::Response, name: &str) -> Option<&'a str> {
        response.headers().get(name).and_then(|v| v.to_str().ok())
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[tokio::test]
    async fn test_login_hands_over_to_success_route() {
        let response = app()
            .oneshot(login_request("alice"))
            .await
            .expect("infallible");

        let success_url = format!("{}/success", LR_ROUTE_PREFIX.as_str());
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(header(&response, LOCATION.as_str()), Some(success_url.as_str()));
        let cookie = header(&response, SET_COOKIE.as_str()).expect("Set-Cookie header");
        assert!(cookie.starts_with("demo_user=alice;"));
    }

    #[tokio::test]
    async fn test_nested_success_route_redirects_by_authority() {
        let cases = [
            ("alice", "/management.html"),
            ("bob", "/console"),
            ("carol", "/homepage.html?user=carol"),
        ];

        for (username, expected) in cases {
            let response = app()
                .oneshot(success_request(&format!("demo_user={username}")))
                .await
                .expect("infallible");

            assert_eq!(response.status(), StatusCode::FOUND, "user {username}");
            assert_eq!(header(&response, LOCATION.as_str()), Some(expected));
        }
    }

    #[tokio::test]
    async fn test_nested_success_route_without_authorities_is_server_error() {
        let response = app()
            .oneshot(success_request("demo_user=dave"))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_nested_success_route_requires_login() {
        let response = app()
            .oneshot(success_request("other=1"))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(header(&response, LOCATION.as_str()), Some("/"));
    }

    #[tokio::test]
    async fn test_unknown_user_sets_auth_error_cookie() {
        let response = app()
            .oneshot(login_request("mallory"))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(header(&response, LOCATION.as_str()), Some("/"));
        let cookie = header(&response, SET_COOKIE.as_str()).expect("Set-Cookie header");
        assert!(cookie.starts_with("lr_auth_error=Unknown%20user;"));
    }

    #[tokio::test]
    async fn test_successful_login_clears_auth_error_cookie() {
        let request = success_request("demo_user=carol; lr_auth_error=Unknown%20user");

        let response = app().oneshot(request).await.expect("infallible");

        assert_eq!(response.status(), StatusCode::FOUND);
        let cookie = header(&response, SET_COOKIE.as_str()).expect("Set-Cookie header");
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_index_shows_auth_error() {
        let request = Request::builder()
            .uri("/")
            .header(COOKIE, "lr_auth_error=Unknown%20user")
            .body(Body::empty())
            .expect("valid request");

        let response = app().oneshot(request).await.expect("infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Unknown user"));
    }

    #[tokio::test]
    async fn test_homepage_greets_user() {
        let request = Request::builder()
            .uri("/homepage.html?user=carol")
            .body(Body::empty())
            .expect("valid request");

        let response = app().oneshot(request).await.expect("infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Hey carol!"));
    }
}
