//! Happy-path integration tests for the adoption workflow: register a pet,
//! view the description form, save the adoption description.

mod common;

use adoption_service::domain::PetStatus;
use axum::http::StatusCode;
use common::*;
use uuid::Uuid;

#[tokio::test]
async fn test_register_pet_renders_create_view() {
    let (app, state) = test_app();

    let context = register_pet(&app, &state, PET_UUID).await;

    assert_eq!(context["view"], "pet/create");
    assert_eq!(context["model"]["pet"]["name"], "Cremita");
    assert_eq!(context["model"]["pet"]["uuid"], PET_UUID);
    assert_eq!(context["model"]["pet"]["status"], "OWNED");
    assert_eq!(context["model"]["pet"]["type"], "DOG");
    assert_eq!(context["model"]["pet"]["image"]["file_name"], "image.jpg");
}

#[tokio::test]
async fn test_description_form_contains_pet_and_command() {
    let (app, state) = test_app();
    register_pet(&app, &state, PET_UUID).await;

    let token = user_token(&state);
    let response = get_with_token(
        &app,
        &format!("/adoption/descriptionForAdoption?uuid={PET_UUID}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let context = read_json(response).await;
    assert_eq!(context["view"], "adoption/descriptionForAdoption");
    assert!(context["model"].get("pet").is_some());
    assert!(context["model"].get("adoptionCommand").is_some());
    assert_eq!(context["model"]["pet"]["name"], "Cremita");
    assert_eq!(context["model"]["adoptionCommand"]["uuid"], PET_UUID);
    assert_eq!(context["model"]["adoptionCommand"]["status"], "IN_ADOPTION");
}

#[tokio::test]
async fn test_save_adoption_renders_listing_with_default_image() {
    let (app, state) = test_app();
    register_pet(&app, &state, PET_UUID).await;

    let token = user_token(&state);
    let (cookie, csrf) = csrf_token(&app).await;
    let response = post_form(
        &app,
        "/adoption/save",
        &token,
        &cookie,
        &csrf,
        &[
            ("uuid", PET_UUID),
            ("description", "Cremita is a lovely dog"),
            ("status", "IN_ADOPTION"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let context = read_json(response).await;
    assert_eq!(context["view"], "pet/listForAdoption");
    assert!(context["model"].get("defaultImage").is_some());
    let pets = context["model"]["pets"].as_array().unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0]["uuid"], PET_UUID);
    assert_eq!(pets[0]["status"], "IN_ADOPTION");
}

#[tokio::test]
async fn test_save_adoption_updates_store() {
    let (app, state) = test_app();
    register_pet(&app, &state, PET_UUID).await;

    let token = user_token(&state);
    let (cookie, csrf) = csrf_token(&app).await;
    let response = post_form(
        &app,
        "/adoption/save",
        &token,
        &cookie,
        &csrf,
        &[
            ("uuid", PET_UUID),
            ("description", "Cremita is a lovely dog"),
            ("status", "IN_ADOPTION"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let uuid = Uuid::parse_str(PET_UUID).unwrap();
    let pet = state.repository.find_by_uuid(uuid).await.unwrap().unwrap();
    assert_eq!(pet.status, PetStatus::InAdoption);

    let description = state
        .repository
        .find_description(uuid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(description.description, "Cremita is a lovely dog");
}

#[tokio::test]
async fn test_full_adoption_scenario() {
    let (app, state) = test_app();
    let token = user_token(&state);

    // Register Cremita.
    let context = register_pet(&app, &state, PET_UUID).await;
    assert_eq!(context["view"], "pet/create");

    // View the description form for her uuid.
    let response = get_with_token(
        &app,
        &format!("/adoption/descriptionForAdoption?uuid={PET_UUID}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let context = read_json(response).await;
    assert_eq!(context["view"], "adoption/descriptionForAdoption");
    assert!(context["model"].get("pet").is_some());
    assert!(context["model"].get("adoptionCommand").is_some());

    // Put her up for adoption.
    let (cookie, csrf) = csrf_token(&app).await;
    let response = post_form(
        &app,
        "/adoption/save",
        &token,
        &cookie,
        &csrf,
        &[
            ("uuid", PET_UUID),
            ("description", "Cremita is a lovely dog"),
            ("status", "IN_ADOPTION"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let context = read_json(response).await;
    assert_eq!(context["view"], "pet/listForAdoption");
    assert!(context["model"].get("defaultImage").is_some());
}

#[tokio::test]
async fn test_save_adoption_accepts_description_at_length_bound() {
    let (app, state) = test_app();
    register_pet(&app, &state, PET_UUID).await;

    let token = user_token(&state);
    let (cookie, csrf) = csrf_token(&app).await;
    // Form posts often arrive with trailing whitespace; bounds apply to the
    // trimmed text.
    let description = format!("{}\r\n", "a".repeat(500));
    let response = post_form(
        &app,
        "/adoption/save",
        &token,
        &cookie,
        &csrf,
        &[
            ("uuid", PET_UUID),
            ("description", description.as_str()),
            ("status", "IN_ADOPTION"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let uuid = Uuid::parse_str(PET_UUID).unwrap();
    let saved = state
        .repository
        .find_description(uuid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.description.len(), 500);
}

#[tokio::test]
async fn test_pet_without_image_is_accepted() {
    let (app, state) = test_app();
    let token = user_token(&state);
    let (cookie, csrf) = csrf_token(&app).await;

    let body = multipart_body(&default_pet_fields(PET_UUID), None);
    let response = post_multipart(&app, &token, &cookie, &csrf, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let context = read_json(response).await;
    assert_eq!(context["view"], "pet/create");
    assert!(context["model"]["pet"]["image"].is_null());
}
