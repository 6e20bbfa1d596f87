//! Same-origin forwarder for `POST /login`
//!
//! The login form posts to a relative `/login`. When the authentication
//! service lives elsewhere, the server relays the form body to it and hands
//! the upstream status, content type and body back untouched.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::post,
};

use super::login::LOGIN_ENDPOINT;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Shared state for the login forwarder
#[derive(Clone)]
pub struct LoginProxyState {
    client: reqwest::Client,
    upstream_url: String,
}

impl LoginProxyState {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream_url: upstream_url.into(),
        }
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }
}

/// Create the forwarder router
pub fn login_proxy_router(state: LoginProxyState) -> Router {
    Router::new()
        .route(LOGIN_ENDPOINT, post(forward_login))
        .with_state(state)
}

/// POST /login
///
/// Body and content type are passed through; credentials are never logged.
async fn forward_login(
    State(state): State<LoginProxyState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(FORM_CONTENT_TYPE);

    let result = state
        .client
        .post(&state.upstream_url)
        .header(reqwest::header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await;

    match result {
        Ok(upstream) => {
            tracing::info!("Login forwarded, upstream answered {}", upstream.status());
            relay(upstream).await
        }
        Err(e) => {
            tracing::error!("Auth upstream unreachable: {}", e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

async fn relay(upstream: reqwest::Response) -> Response {
    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok());

    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read auth upstream body: {}", e);
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    /// Fake auth service: accepts `alice@example.com` / `secret` only
    async fn spawn_upstream() -> String {
        async fn token(headers: HeaderMap, body: String) -> Response {
            let is_form = headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with(FORM_CONTENT_TYPE));

            if is_form && body == "username=alice%40example.com&password=secret" {
                (
                    [(CONTENT_TYPE, "application/json")],
                    r#"{"access_token":"abc123","token_type":"bearer"}"#,
                )
                    .into_response()
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    [(CONTENT_TYPE, "application/json")],
                    r#"{"detail":"Incorrect username or password"}"#,
                )
                    .into_response()
            }
        }

        let app = Router::new().route("/token", post(token));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/token", addr)
    }

    fn login_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_forwards_successful_login() {
        let upstream = spawn_upstream().await;
        let state = LoginProxyState::new(upstream.clone());
        assert_eq!(state.upstream_url(), upstream);
        let app = login_proxy_router(state);

        let response = app
            .oneshot(login_request("username=alice%40example.com&password=secret"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"{"access_token":"abc123","token_type":"bearer"}"#
        );
    }

    #[tokio::test]
    async fn test_relays_rejection_status() {
        let upstream = spawn_upstream().await;
        let app = login_proxy_router(LoginProxyState::new(upstream));

        let response = app
            .oneshot(login_request("username=alice%40example.com&password=wrong"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("Incorrect"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let app = login_proxy_router(LoginProxyState::new("http://127.0.0.1:1/token"));

        let response = app
            .oneshot(login_request("username=&password="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_only_post_is_routed() {
        let app = login_proxy_router(LoginProxyState::new("http://127.0.0.1:1/token"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/login")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
