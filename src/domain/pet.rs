//! Pet model and its wire-level enumerations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of a pet within the adoption workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetStatus {
    Owned,
    InAdoption,
    Adopted,
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Owned => "OWNED",
            Self::InAdoption => "IN_ADOPTION",
            Self::Adopted => "ADOPTED",
        };
        f.write_str(name)
    }
}

impl FromStr for PetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OWNED" => Ok(Self::Owned),
            "IN_ADOPTION" => Ok(Self::InAdoption),
            "ADOPTED" => Ok(Self::Adopted),
            other => Err(format!("unknown pet status: {other}")),
        }
    }
}

/// Unit of the weight field submitted at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kg => "KG",
            Self::Lb => "LB",
        };
        f.write_str(name)
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KG" => Ok(Self::Kg),
            "LB" => Ok(Self::Lb),
            other => Err(format!("unknown weight unit: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Rabbit,
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dog => "DOG",
            Self::Cat => "CAT",
            Self::Bird => "BIRD",
            Self::Rabbit => "RABBIT",
        };
        f.write_str(name)
    }
}

impl FromStr for PetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DOG" => Ok(Self::Dog),
            "CAT" => Ok(Self::Cat),
            "BIRD" => Ok(Self::Bird),
            "RABBIT" => Ok(Self::Rabbit),
            other => Err(format!("unknown pet type: {other}")),
        }
    }
}

/// Metadata of an uploaded pet image. The binary itself is handed to the
/// file-storage collaborator; only what the views need is retained here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

/// Pet record. Identity (`uuid`) is immutable once registered; status is the
/// only field the adoption workflow mutates afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub uuid: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub sterilized: bool,
    pub breed: i64,
    pub user: i64,
    pub weight: f64,
    pub unit: WeightUnit,
    pub status: PetStatus,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub image: Option<StoredImage>,
    pub created_at: DateTime<Utc>,
}
