use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDto, AuthorResourceParams, CreateAuthorDto},
        link::LinkedCollectionDto,
    },
    server::{
        controller::AUTHOR_TAG,
        error::AppError,
        model::author::Author,
        representation::{
            field_selection,
            links::{LinkFactory, PageTurn},
            media_type::accepts_hateoas,
            pagination::PageMetadata,
            shaping::{shape, shape_many},
            uri::{RouteName, UriParams},
        },
        service::author::AuthorService,
        state::AppState,
    },
};

const X_PAGINATION: &str = "X-Pagination";

/// Query parameters for single-author requests.
#[derive(Deserialize)]
pub struct FieldsQuery {
    pub fields: Option<String>,
}

fn pagination_header(metadata: &PageMetadata) -> Result<HeaderValue, AppError> {
    let json = serde_json::to_string(metadata)?;
    HeaderValue::from_str(&json)
        .map_err(|e| AppError::InternalError(format!("Failed to encode X-Pagination header: {e}")))
}

/// GET /api/authors - Get one page of the author collection.
///
/// Validates the `orderBy` clauses against the property mapping registry and
/// the `fields` selection against the author shape before anything is
/// queried; either failing rejects the whole request with 400. Under the
/// vendor media type the response embeds per-author and collection links and
/// the `X-Pagination` header carries counts only; otherwise the body is the
/// bare array of shaped authors and the header also carries the previous/next
/// page hrefs.
///
/// # Returns
/// - `200 OK`: Shaped author page in the negotiated representation
/// - `400 Bad Request`: Unknown sort key or field name
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    params(
        ("pageNumber" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Items per page (default: 10, max: 20)"),
        ("searchQuery" = Option<String>, Query, description = "Substring filter across name and genre"),
        ("genre" = Option<String>, Query, description = "Exact genre filter"),
        ("orderBy" = Option<String>, Query, description = "Comma-separated sort clauses, e.g. `name desc, age`"),
        ("fields" = Option<String>, Query, description = "Comma-separated field selection, e.g. `id,name`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved one page of authors"),
        (status = 400, description = "Unknown sort key or field name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authors(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AuthorResourceParams>,
) -> Result<Response, AppError> {
    if !state
        .mapping_registry
        .is_valid_mapping::<AuthorDto, entity::author::Model>(&params.order_by)
    {
        return Err(AppError::BadRequest(format!(
            "orderBy contains an unknown sort key: {}",
            params.order_by
        )));
    }

    if !field_selection::has_properties::<AuthorDto>(params.fields()) {
        return Err(AppError::BadRequest(format!(
            "fields contains an unknown field: {}",
            params.fields()
        )));
    }

    let page = AuthorService::new(&state.db)
        .get_authors(&state.mapping_registry, &params)
        .await?;

    let link_factory = LinkFactory::new(&state.uri_builder);
    let hateoas = accepts_hateoas(&headers);

    let mut metadata = page.metadata();
    if !hateoas {
        if page.has_previous() {
            metadata.previous_page_link =
                Some(link_factory.author_page_uri(&params, PageTurn::Previous));
        }
        if page.has_next() {
            metadata.next_page_link = Some(link_factory.author_page_uri(&params, PageTurn::Next));
        }
    }

    let page = page.map(Author::into_dto);
    let mut shaped = shape_many(page.items(), params.fields())?;

    let mut response_headers = HeaderMap::new();
    response_headers.insert(X_PAGINATION, pagination_header(&metadata)?);

    if hateoas {
        for (record, author) in shaped.iter_mut().zip(page.items()) {
            let links = link_factory.author_links(author.id, params.fields.as_deref());
            record.insert("links", serde_json::to_value(links)?);
        }

        let links =
            link_factory.author_collection_links(&params, page.has_previous(), page.has_next());

        Ok((
            StatusCode::OK,
            response_headers,
            Json(LinkedCollectionDto::new(shaped, links)),
        )
            .into_response())
    } else {
        Ok((StatusCode::OK, response_headers, Json(shaped)).into_response())
    }
}

/// GET /api/authors/{id} - Get a single author.
///
/// Validates the `fields` selection, shapes the author down to it, and embeds
/// the author's links under the vendor media type.
///
/// # Returns
/// - `200 OK`: Shaped author in the negotiated representation
/// - `400 Bad Request`: Unknown field name
/// - `404 Not Found`: No author with that id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = Uuid, Path, description = "Author id"),
        ("fields" = Option<String>, Query, description = "Comma-separated field selection")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the author"),
        (status = 400, description = "Unknown field name", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Query(query): Query<FieldsQuery>,
) -> Result<Response, AppError> {
    let fields = query.fields.as_deref().unwrap_or("");
    if !field_selection::has_properties::<AuthorDto>(fields) {
        return Err(AppError::BadRequest(format!(
            "fields contains an unknown field: {fields}"
        )));
    }

    let author = AuthorService::new(&state.db)
        .get_author(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {id} not found")))?;

    let dto = author.into_dto();
    let mut record = shape(&dto, fields)?;

    if accepts_hateoas(&headers) {
        let links =
            LinkFactory::new(&state.uri_builder).author_links(dto.id, query.fields.as_deref());
        record.insert("links", serde_json::to_value(links)?);
    }

    Ok((StatusCode::OK, Json(record)).into_response())
}

/// POST /api/authors - Create a new author.
///
/// # Returns
/// - `201 Created`: The created author, with a `Location` header pointing at
///   it and links embedded under the vendor media type
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    request_body = CreateAuthorDto,
    responses(
        (status = 201, description = "Successfully created the author"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAuthorDto>,
) -> Result<Response, AppError> {
    let author = AuthorService::new(&state.db)
        .create_author(payload.into())
        .await?;
    let dto = author.into_dto();

    let location = state.uri_builder.href(
        RouteName::GetAuthor,
        &UriParams::new().set("id", dto.id.to_string()),
    );

    let mut record = shape(&dto, "")?;
    if accepts_hateoas(&headers) {
        let links = LinkFactory::new(&state.uri_builder).author_links(dto.id, None);
        record.insert("links", serde_json::to_value(links)?);
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&location).map_err(|e| {
            AppError::InternalError(format!("Failed to encode Location header: {e}"))
        })?,
    );

    Ok((StatusCode::CREATED, response_headers, Json(record)).into_response())
}

/// POST /api/authors/{id} - Reject creation at a caller-chosen author URI.
///
/// Authors get server-generated ids; posting to a concrete author URI either
/// conflicts with the existing author or names a resource that does not
/// exist.
///
/// # Returns
/// - `409 Conflict`: An author with that id already exists
/// - `404 Not Found`: No author with that id
#[utoipa::path(
    post,
    path = "/api/authors/{id}",
    tag = AUTHOR_TAG,
    params(("id" = Uuid, Path, description = "Author id")),
    responses(
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 409, description = "Author already exists", body = ErrorDto)
    ),
)]
pub async fn block_author_creation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    if AuthorService::new(&state.db).author_exists(id).await? {
        return Err(AppError::Conflict(format!("Author {id} already exists")));
    }

    Err(AppError::NotFound(format!("Author {id} not found")))
}

/// DELETE /api/authors/{id} - Delete an author and their books.
///
/// # Returns
/// - `204 No Content`: Author deleted
/// - `404 Not Found`: No author with that id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    tag = AUTHOR_TAG,
    params(("id" = Uuid, Path, description = "Author id")),
    responses(
        (status = 204, description = "Successfully deleted the author"),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = AuthorService::new(&state.db).delete_author(id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("Author {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
