//! Shared application state threaded through the router.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repository::{InMemoryPetRepository, PetRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn PetRepository>,
    pub jwt: Arc<JwtService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let jwt = JwtService::new(config.jwt_secret.clone(), Some(config.token_ttl_hours));
        Self {
            repository: Arc::new(InMemoryPetRepository::new()),
            jwt: Arc::new(jwt),
            config: Arc::new(config),
        }
    }
}
