//! Adoption workflow handlers: description form and save.

use crate::domain::{AdoptionCommand, PetStatus};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{ModelAndView, VIEW_DESCRIPTION_FOR_ADOPTION, VIEW_LIST_FOR_ADOPTION};
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Form;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct DescriptionFormQuery {
    pub uuid: String,
}

/// GET /adoption/descriptionForAdoption
///
/// Renders the description form for an existing pet together with an empty
/// adoption command pre-filled with the pet's uuid.
pub async fn description_for_adoption(
    State(state): State<AppState>,
    query: Result<Query<DescriptionFormQuery>, QueryRejection>,
) -> AppResult<ModelAndView> {
    let Query(query) = query.map_err(|rej| AppError::bad_request(rej.to_string()))?;
    let uuid = parse_uuid(&query.uuid)?;
    let pet = state
        .repository
        .find_by_uuid(uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("pet {uuid}")))?;

    tracing::info!(uuid = %uuid, "rendering adoption description form");
    Ok(ModelAndView::new(VIEW_DESCRIPTION_FOR_ADOPTION)
        .with("pet", &pet)
        .with("adoptionCommand", AdoptionCommand::for_pet(uuid)))
}

/// Raw form fields as posted by the description form.
#[derive(Debug, Deserialize)]
pub struct SaveAdoptionForm {
    pub uuid: String,
    pub description: String,
    pub status: String,
}

/// Parsed and validated save command. Bounds apply to the trimmed
/// description.
#[derive(Debug, Validate)]
pub struct SaveAdoptionCommand {
    pub uuid: Uuid,
    #[validate(length(min = 1, max = 500, message = "description must be 1-500 characters"))]
    pub description: String,
    pub status: PetStatus,
}

impl SaveAdoptionForm {
    pub fn parse(self) -> Result<SaveAdoptionCommand, AppError> {
        let command = SaveAdoptionCommand {
            uuid: parse_uuid(&self.uuid)?,
            description: self.description.trim().to_string(),
            status: self
                .status
                .trim()
                .parse()
                .map_err(|err: String| AppError::bad_request(err))?,
        };

        command
            .validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        Ok(command)
    }
}

/// POST /adoption/save
///
/// Persists the description, moves the pet to the target status, and renders
/// the adoption listing.
pub async fn save_adoption(
    State(state): State<AppState>,
    form: Result<Form<SaveAdoptionForm>, FormRejection>,
) -> AppResult<ModelAndView> {
    let Form(form) = form.map_err(|rej| AppError::bad_request(rej.to_string()))?;
    let command = form.parse()?;

    let pet = state
        .repository
        .save_adoption(command.uuid, command.description, command.status)
        .await?;
    tracing::info!(uuid = %pet.uuid, name = %pet.name, status = %command.status, "adoption description saved");

    let in_adoption = state.repository.list_by_status(PetStatus::InAdoption).await?;
    Ok(ModelAndView::new(VIEW_LIST_FOR_ADOPTION)
        .with("defaultImage", &state.config.default_image)
        .with("pets", &in_adoption))
}

fn parse_uuid(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::bad_request(format!("malformed uuid: {raw}")))
}
