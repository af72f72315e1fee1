//! Domain models for the adoption workflow.

pub mod adoption;
pub mod pet;

pub use adoption::{AdoptionCommand, AdoptionDescription};
pub use pet::{Pet, PetStatus, PetType, StoredImage, WeightUnit};
