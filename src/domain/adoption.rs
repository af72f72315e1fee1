//! Adoption description attached to a registered pet.

use crate::domain::pet::PetStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-text adoption description, keyed 1:1 by the pet's uuid. Can only
/// exist for a pet that is already registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionDescription {
    pub pet_uuid: Uuid,
    pub description: String,
    pub status: PetStatus,
    pub created_at: DateTime<Utc>,
}

/// Transient command object rendered into the description form so the client
/// can post it back filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionCommand {
    pub uuid: Option<Uuid>,
    pub description: String,
    pub status: PetStatus,
}

impl AdoptionCommand {
    pub fn for_pet(uuid: Uuid) -> Self {
        Self {
            uuid: Some(uuid),
            ..Self::default()
        }
    }
}

impl Default for AdoptionCommand {
    fn default() -> Self {
        Self {
            uuid: None,
            description: String::new(),
            status: PetStatus::InAdoption,
        }
    }
}
