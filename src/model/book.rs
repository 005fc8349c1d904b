use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::server::representation::shaping::{FieldDescriptor, Shaped};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub author_id: Uuid,
}

impl Shaped for BookDto {
    const SHAPE_NAME: &'static str = "BookDto";

    fn field_descriptors() -> &'static [FieldDescriptor<Self>] {
        const FIELDS: &[FieldDescriptor<BookDto>] = &[
            FieldDescriptor {
                name: "id",
                get: |book: &BookDto| json!(book.id),
            },
            FieldDescriptor {
                name: "title",
                get: |book: &BookDto| json!(book.title),
            },
            FieldDescriptor {
                name: "description",
                get: |book: &BookDto| json!(book.description),
            },
            FieldDescriptor {
                name: "author_id",
                get: |book: &BookDto| json!(book.author_id),
            },
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateBookDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for full book replacement. Unlike creation, the description is
/// required here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookDto {
    pub title: String,
    pub description: String,
}
