//! Persistence seam for pets and adoption descriptions.
//!
//! The shipped implementation is in-memory; a database-backed store plugs in
//! behind [`PetRepository`] without touching the handlers.

use crate::domain::{AdoptionDescription, Pet, PetStatus};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store error types
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Pet not found")]
    NotFound,

    #[error("Pet uuid already registered")]
    DuplicateUuid,

    #[error("Internal store error")]
    Internal,
}

impl RepositoryError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::NotFound => axum::http::StatusCode::NOT_FOUND,
            Self::DuplicateUuid => axum::http::StatusCode::CONFLICT,
            Self::Internal => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::NotFound => "Pet not found",
            Self::DuplicateUuid => "Pet already registered",
            Self::Internal => "Store temporarily unavailable",
        }
    }
}

/// Repository trait for pet and adoption operations
#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn create(&self, pet: Pet) -> Result<Pet, RepositoryError>;
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Pet>, RepositoryError>;
    async fn list_by_status(&self, status: PetStatus) -> Result<Vec<Pet>, RepositoryError>;

    /// Persists the description and moves the pet to the target status in
    /// one step. Fails with `NotFound` when the uuid is not registered.
    async fn save_adoption(
        &self,
        uuid: Uuid,
        description: String,
        status: PetStatus,
    ) -> Result<Pet, RepositoryError>;

    async fn find_description(
        &self,
        uuid: Uuid,
    ) -> Result<Option<AdoptionDescription>, RepositoryError>;
}

/// In-memory repository implementation for development/testing
#[derive(Default)]
pub struct InMemoryPetRepository {
    pets: Arc<RwLock<HashMap<Uuid, Pet>>>,
    descriptions: Arc<RwLock<HashMap<Uuid, AdoptionDescription>>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn create(&self, pet: Pet) -> Result<Pet, RepositoryError> {
        let mut pets = self.pets.write().await;
        if pets.contains_key(&pet.uuid) {
            return Err(RepositoryError::DuplicateUuid);
        }
        let stored = Pet {
            created_at: Utc::now(),
            ..pet
        };
        pets.insert(stored.uuid, stored.clone());
        tracing::debug!(uuid = %stored.uuid, name = %stored.name, "pet registered");
        Ok(stored)
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Pet>, RepositoryError> {
        let pets = self.pets.read().await;
        Ok(pets.get(&uuid).cloned())
    }

    async fn list_by_status(&self, status: PetStatus) -> Result<Vec<Pet>, RepositoryError> {
        let pets = self.pets.read().await;
        let mut listed: Vec<Pet> = pets
            .values()
            .filter(|pet| pet.status == status)
            .cloned()
            .collect();
        // Deterministic ordering for the listing view
        listed.sort_by_key(|pet| pet.uuid);
        Ok(listed)
    }

    async fn save_adoption(
        &self,
        uuid: Uuid,
        description: String,
        status: PetStatus,
    ) -> Result<Pet, RepositoryError> {
        // Both maps are updated under the pets write lock so a concurrent
        // reader never sees the description without the status change.
        let mut pets = self.pets.write().await;
        let pet = pets.get_mut(&uuid).ok_or(RepositoryError::NotFound)?;
        pet.status = status;

        let mut descriptions = self.descriptions.write().await;
        descriptions.insert(
            uuid,
            AdoptionDescription {
                pet_uuid: uuid,
                description,
                status,
                created_at: Utc::now(),
            },
        );
        tracing::debug!(uuid = %uuid, status = %status, "adoption description saved");
        Ok(pet.clone())
    }

    async fn find_description(
        &self,
        uuid: Uuid,
    ) -> Result<Option<AdoptionDescription>, RepositoryError> {
        let descriptions = self.descriptions.read().await;
        Ok(descriptions.get(&uuid).cloned())
    }
}
