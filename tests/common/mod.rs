#![allow(dead_code)]

//! Shared harness for the workflow integration tests. Every test builds a
//! fresh router and state, so data never leaks between tests.

use adoption_service::auth::Role;
use adoption_service::config::AppConfig;
use adoption_service::state::AppState;
use adoption_service::build_router;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const PET_UUID: &str = "0566f4a5-ec4c-4f80-a9b8-4f1bafed245b";
pub const BOUNDARY: &str = "adoption-test-boundary";

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_secret: "test-secret".to_string(),
        secure_cookies: false,
        ..AppConfig::default()
    }
}

pub fn test_app() -> (Router, AppState) {
    let state = AppState::new(test_config());
    (build_router(state.clone()), state)
}

pub fn user_token(state: &AppState) -> String {
    state.jwt.generate_token("josdem", &[Role::User]).unwrap()
}

pub fn token_with_roles(state: &AppState, roles: &[Role]) -> String {
    state.jwt.generate_token("josdem", roles).unwrap()
}

/// Fetch a CSRF token; returns the cookie pair and the token value.
pub async fn csrf_token(app: &Router) -> (String, String) {
    let request = Request::builder()
        .uri("/csrf/token")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("csrf cookie")
        .to_string();
    let json = read_json(response).await;
    let token = json["csrf"].as_str().expect("csrf token").to_string();
    (cookie, token)
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assemble a multipart/form-data body the way a browser would.
pub fn multipart_body(
    fields: &[(&str, &str)],
    image: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"mockImage\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn default_pet_fields<'a>(uuid: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "Cremita"),
        ("uuid", uuid),
        ("birthDate", "2024-08-22"),
        ("sterilized", "true"),
        ("breed", "11"),
        ("user", "1"),
        ("weight", "6.50"),
        ("unit", "KG"),
        ("status", "OWNED"),
        ("type", "DOG"),
    ]
}

pub async fn post_multipart(
    app: &Router,
    token: &str,
    cookie: &str,
    csrf: &str,
    body: Vec<u8>,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/pet/save")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::COOKIE, cookie)
        .header("X-CSRF-Token", csrf)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(
    app: &Router,
    uri: &str,
    token: &str,
    cookie: &str,
    csrf: &str,
    fields: &[(&str, &str)],
) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::COOKIE, cookie)
        .header("X-CSRF-Token", csrf)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get_with_token(app: &Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Register the canonical test pet and return the rendered context.
pub async fn register_pet(app: &Router, state: &AppState, uuid: &str) -> serde_json::Value {
    let token = user_token(state);
    let (cookie, csrf) = csrf_token(app).await;
    let body = multipart_body(
        &default_pet_fields(uuid),
        Some(("image.jpg", "image/jpeg", b"image")),
    );
    let response = post_multipart(app, &token, &cookie, &csrf, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await
}
