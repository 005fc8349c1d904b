use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::server::representation::shaping::{FieldDescriptor, Shaped};

/// Maximum number of authors a client may request per page.
pub const MAX_PAGE_SIZE: u64 = 20;

const DEFAULT_PAGE_NUMBER: u64 = 1;
const DEFAULT_PAGE_SIZE: u64 = 10;
const DEFAULT_ORDER_BY: &str = "name";

/// Author as exposed over the API.
///
/// `name` and `age` are computed during domain-to-DTO conversion: `name` joins
/// the stored first and last name, `age` derives from the stored dates. Sorting
/// on these computed fields is resolved back onto stored columns through the
/// property mapping registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub genre: String,
}

impl Shaped for AuthorDto {
    const SHAPE_NAME: &'static str = "AuthorDto";

    fn field_descriptors() -> &'static [FieldDescriptor<Self>] {
        const FIELDS: &[FieldDescriptor<AuthorDto>] = &[
            FieldDescriptor {
                name: "id",
                get: |author: &AuthorDto| json!(author.id),
            },
            FieldDescriptor {
                name: "name",
                get: |author: &AuthorDto| json!(author.name),
            },
            FieldDescriptor {
                name: "age",
                get: |author: &AuthorDto| json!(author.age),
            },
            FieldDescriptor {
                name: "genre",
                get: |author: &AuthorDto| json!(author.genre),
            },
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateAuthorDto {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub date_of_death: Option<NaiveDate>,
    pub genre: String,
}

/// Query-string parameters accepted by the author collection endpoint.
///
/// Bound from the query string with camelCase names (`pageNumber`, `pageSize`,
/// `searchQuery`, `orderBy`, `fields`, `genre`). The raw `page_size` is kept
/// as supplied; read it through [`AuthorResourceParams::page_size`], which
/// clamps to `[1, MAX_PAGE_SIZE]`. An oversized page size is a UX concern,
/// not a client error, so it is clamped rather than rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorResourceParams {
    pub page_number: u64,
    pub page_size: u64,
    pub search_query: Option<String>,
    pub genre: Option<String>,
    pub order_by: String,
    pub fields: Option<String>,
}

impl Default for AuthorResourceParams {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            search_query: None,
            genre: None,
            order_by: DEFAULT_ORDER_BY.to_string(),
            fields: None,
        }
    }
}

impl AuthorResourceParams {
    /// Effective page size, clamped to `[1, MAX_PAGE_SIZE]`.
    pub fn page_size(&self) -> u64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Requested field selection, empty when the client asked for all fields.
    pub fn fields(&self) -> &str {
        self.fields.as_deref().unwrap_or("")
    }
}
