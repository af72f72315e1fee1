//! Pet registration handler: multipart form binding and validation.

use crate::domain::{Pet, PetStatus, PetType, StoredImage, WeightUnit};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{ModelAndView, VIEW_PET_CREATE};
use axum::extract::{Multipart, State};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

/// Typed registration command, built explicitly from the multipart body.
#[derive(Debug, Validate)]
pub struct RegisterPetCommand {
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: String,
    pub uuid: Uuid,
    pub birth_date: NaiveDate,
    pub sterilized: bool,
    pub breed: i64,
    pub user: i64,
    #[validate(range(min = 0.001, message = "weight must be positive"))]
    pub weight: f64,
    pub unit: WeightUnit,
    pub status: PetStatus,
    pub pet_type: PetType,
    pub image: Option<StoredImage>,
}

/// Raw multipart fields before parsing. Field names match the HTML form.
#[derive(Debug, Default)]
struct RawPetForm {
    name: Option<String>,
    uuid: Option<String>,
    birth_date: Option<String>,
    sterilized: Option<String>,
    breed: Option<String>,
    user: Option<String>,
    weight: Option<String>,
    unit: Option<String>,
    status: Option<String>,
    pet_type: Option<String>,
    image: Option<StoredImage>,
}

impl RegisterPetCommand {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut raw = RawPetForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| AppError::bad_request(format!("malformed multipart body: {err}")))?
        {
            // Any part carrying a filename is the uploaded image; the part
            // name varies between clients.
            if let Some(file_name) = field.file_name() {
                let file_name = file_name.to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|err| {
                    AppError::bad_request(format!("failed to read image part: {err}"))
                })?;
                raw.image = Some(StoredImage {
                    file_name,
                    content_type,
                    size: bytes.len(),
                });
                continue;
            }

            let name = field.name().unwrap_or_default().to_string();
            let value = field.text().await.map_err(|err| {
                AppError::bad_request(format!("failed to read field {name}: {err}"))
            })?;
            match name.as_str() {
                "name" => raw.name = Some(value),
                "uuid" => raw.uuid = Some(value),
                "birthDate" => raw.birth_date = Some(value),
                "sterilized" => raw.sterilized = Some(value),
                "breed" => raw.breed = Some(value),
                "user" => raw.user = Some(value),
                "weight" => raw.weight = Some(value),
                "unit" => raw.unit = Some(value),
                "status" => raw.status = Some(value),
                "type" => raw.pet_type = Some(value),
                _ => tracing::debug!(field = %name, "ignoring unknown form field"),
            }
        }

        raw.parse()
    }

    pub fn into_pet(self) -> Pet {
        Pet {
            uuid: self.uuid,
            name: self.name,
            birth_date: self.birth_date,
            sterilized: self.sterilized,
            breed: self.breed,
            user: self.user,
            weight: self.weight,
            unit: self.unit,
            status: self.status,
            pet_type: self.pet_type,
            image: self.image,
            // The store stamps the authoritative creation time.
            created_at: Utc::now(),
        }
    }
}

impl RawPetForm {
    fn parse(self) -> Result<RegisterPetCommand, AppError> {
        let command = RegisterPetCommand {
            name: required(self.name, "name")?.trim().to_string(),
            uuid: Uuid::parse_str(required(self.uuid, "uuid")?.trim())
                .map_err(|_| AppError::bad_request("malformed uuid"))?,
            birth_date: NaiveDate::parse_from_str(required(self.birth_date, "birthDate")?.trim(), "%Y-%m-%d")
                .map_err(|_| AppError::bad_request("birthDate must be YYYY-MM-DD"))?,
            sterilized: required(self.sterilized, "sterilized")?
                .trim()
                .parse()
                .map_err(|_| AppError::bad_request("sterilized must be true or false"))?,
            breed: required(self.breed, "breed")?
                .trim()
                .parse()
                .map_err(|_| AppError::bad_request("breed must be a numeric reference"))?,
            user: required(self.user, "user")?
                .trim()
                .parse()
                .map_err(|_| AppError::bad_request("user must be a numeric reference"))?,
            weight: required(self.weight, "weight")?
                .trim()
                .parse()
                .map_err(|_| AppError::bad_request("weight must be a decimal number"))?,
            unit: required(self.unit, "unit")?
                .trim()
                .parse()
                .map_err(AppError::bad_request)?,
            status: required(self.status, "status")?
                .trim()
                .parse()
                .map_err(AppError::bad_request)?,
            pet_type: required(self.pet_type, "type")?
                .trim()
                .parse()
                .map_err(AppError::bad_request)?,
            image: self.image,
        };

        command
            .validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        Ok(command)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::bad_request(format!("missing field: {field}")))
}

/// POST /pet/save
///
/// Registers a new pet from the multipart form and renders the creation
/// confirmation view.
pub async fn save_pet(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<ModelAndView> {
    let command = RegisterPetCommand::from_multipart(multipart).await?;
    let pet = state.repository.create(command.into_pet()).await?;
    tracing::info!(uuid = %pet.uuid, name = %pet.name, "pet registered");

    Ok(ModelAndView::new(VIEW_PET_CREATE).with("pet", &pet))
}
