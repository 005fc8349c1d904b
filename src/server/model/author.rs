//! Author domain models and parameters.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    model::author::{AuthorDto, CreateAuthorDto},
    server::{representation::property_mapping::OrderingStep, util::age::current_age},
};

/// Author with the stored name parts and dates.
///
/// The API never exposes these directly; `into_dto` folds them into the
/// computed `name` and `age` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
    pub genre: String,
}

impl Author {
    /// Converts an entity model to an author domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            date_of_birth: entity.date_of_birth,
            date_of_death: entity.date_of_death,
            genre: entity.genre,
        }
    }

    /// Converts the author domain model to a DTO for API responses, deriving
    /// the display name and the age.
    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            name: format!("{} {}", self.first_name, self.last_name),
            age: current_age(self.date_of_birth, self.date_of_death),
            genre: self.genre,
        }
    }
}

/// Parameters for creating a new author.
#[derive(Debug, Clone)]
pub struct CreateAuthorParam {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
    pub genre: String,
}

impl From<CreateAuthorDto> for CreateAuthorParam {
    fn from(dto: CreateAuthorDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            date_of_birth: dto.date_of_birth,
            date_of_death: dto.date_of_death,
            genre: dto.genre,
        }
    }
}

/// Parameters for the paginated author query, with the client's sort clauses
/// already resolved into physical ordering steps.
#[derive(Debug, Clone)]
pub struct GetAuthorsParam {
    pub page_number: u64,
    pub page_size: u64,
    pub genre: Option<String>,
    pub search_query: Option<String>,
    pub ordering: Vec<OrderingStep>,
}
