//! Book domain models and parameters.

use uuid::Uuid;

use crate::model::book::{BookDto, CreateBookDto, UpdateBookDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl Book {
    /// Converts an entity model to a book domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            title: entity.title,
            description: entity.description,
        }
    }

    /// Converts the book domain model to a DTO for API responses.
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            description: self.description,
            author_id: self.author_id,
        }
    }
}

/// Parameters for creating a new book under an author.
#[derive(Debug, Clone)]
pub struct CreateBookParam {
    pub title: String,
    pub description: Option<String>,
}

impl From<CreateBookDto> for CreateBookParam {
    fn from(dto: CreateBookDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
        }
    }
}

/// Repository-level insert parameters. The id is supplied by the service:
/// freshly generated on creation, taken from the request path on upsert.
#[derive(Debug, Clone)]
pub struct InsertBookParam {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

/// Parameters for replacing a book's contents.
#[derive(Debug, Clone)]
pub struct UpdateBookParam {
    pub title: String,
    pub description: String,
}

impl From<UpdateBookDto> for UpdateBookParam {
    fn from(dto: UpdateBookDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
        }
    }
}
