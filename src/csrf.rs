//! CSRF protection using the double-submit cookie pattern.

use crate::state::AppState;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Issue a CSRF token and set cookie
pub async fn issue_csrf_token(
    State(state): State<AppState>,
) -> Result<(HeaderMap, axum::Json<serde_json::Value>), (StatusCode, &'static str)> {
    use ring::rand::{SecureRandom, SystemRandom};
    let mut bytes = [0u8; 32];

    // Try multiple times before failing
    let mut attempts = 0;
    loop {
        match SystemRandom::new().fill(&mut bytes) {
            Ok(()) => break,
            Err(_) if attempts < 3 => {
                attempts += 1;
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                continue;
            }
            Err(_) => {
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate secure CSRF token",
                ))
            }
        }
    }

    let token = hex::encode(bytes);
    let mut headers = HeaderMap::new();
    let secure = if state.config.secure_cookies { " Secure;" } else { "" };
    let cookie = format!(
        "csrf_token={}; Path=/;{} SameSite=Strict; Max-Age={}",
        token, secure, state.config.csrf_cookie_max_age_seconds
    );

    match HeaderValue::from_str(&cookie) {
        Ok(cookie_value) => {
            headers.insert(axum::http::header::SET_COOKIE, cookie_value);
            Ok((headers, axum::Json(serde_json::json!({"csrf": token}))))
        }
        Err(_) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create secure cookie header",
        )),
    }
}

/// CSRF protection for state-changing requests. Safe methods and the token
/// endpoint are exempt; everything else must submit the cookie token back in
/// the `X-CSRF-Token` header.
pub async fn csrf_protect(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let exempt = matches!(method, Method::GET | Method::HEAD | Method::OPTIONS)
        || path.starts_with("/csrf/token")
        || path.starts_with("/health");

    if exempt {
        return next.run(request).await;
    }

    let headers = request.headers();
    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let csrf_cookie = cookie_header
        .split(';')
        .map(|s| s.trim())
        .find_map(|kv| kv.strip_prefix("csrf_token="))
        .unwrap_or("");
    let csrf_header = headers
        .get("X-CSRF-Token")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if csrf_cookie.is_empty() || csrf_header.is_empty() || csrf_cookie != csrf_header {
        tracing::warn!(%path, "rejecting request without matching CSRF token");
        return match axum::http::Response::builder()
            .status(StatusCode::FORBIDDEN)
            .body(axum::body::Body::from("CSRF validation failed"))
        {
            Ok(response) => response,
            Err(_) => axum::http::Response::new(axum::body::Body::from("CSRF validation failed")),
        };
    }

    next.run(request).await
}
