use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDto, CreateAuthorDto},
    },
    server::{
        controller::AUTHOR_TAG,
        error::AppError,
        model::author::{Author, CreateAuthorParam},
        representation::uri::{RouteName, UriParams},
        service::author::AuthorService,
        state::AppState,
        util::parse::parse_uuid_list,
    },
};

/// POST /api/authorcollections - Create several authors in one request.
///
/// # Returns
/// - `201 Created`: The created authors, with a `Location` header addressing
///   them as a collection by their comma-joined ids
/// - `400 Bad Request`: Empty collection
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/api/authorcollections",
    tag = AUTHOR_TAG,
    request_body = Vec<CreateAuthorDto>,
    responses(
        (status = 201, description = "Successfully created the authors", body = Vec<AuthorDto>),
        (status = 400, description = "Empty author collection", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author_collection(
    State(state): State<AppState>,
    Json(payload): Json<Vec<CreateAuthorDto>>,
) -> Result<Response, AppError> {
    if payload.is_empty() {
        return Err(AppError::BadRequest(
            "The author collection cannot be empty".to_string(),
        ));
    }

    let params: Vec<CreateAuthorParam> = payload.into_iter().map(CreateAuthorParam::from).collect();
    let authors = AuthorService::new(&state.db).create_authors(params).await?;
    let dtos: Vec<AuthorDto> = authors.into_iter().map(Author::into_dto).collect();

    let ids = dtos
        .iter()
        .map(|author| author.id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let location = state
        .uri_builder
        .href(RouteName::GetAuthorCollection, &UriParams::new().set("ids", ids));

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&location).map_err(|e| {
            AppError::InternalError(format!("Failed to encode Location header: {e}"))
        })?,
    );

    Ok((StatusCode::CREATED, response_headers, Json(dtos)).into_response())
}

/// GET /api/authorcollections/{ids} - Get a fixed set of authors by id.
///
/// The path segment is a comma-separated list of author ids. The collection
/// only resolves as a whole: if any id is missing the entire request is 404.
///
/// # Returns
/// - `200 OK`: The requested authors
/// - `400 Bad Request`: Malformed id list
/// - `404 Not Found`: At least one id has no author
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/authorcollections/{ids}",
    tag = AUTHOR_TAG,
    params(("ids" = String, Path, description = "Comma-separated author ids")),
    responses(
        (status = 200, description = "Successfully retrieved the authors", body = Vec<AuthorDto>),
        (status = 400, description = "Malformed id list", body = ErrorDto),
        (status = 404, description = "One or more authors not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author_collection(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let author_ids = parse_uuid_list(&ids)?;

    let authors = AuthorService::new(&state.db)
        .get_authors_by_ids(&author_ids)
        .await?;

    if authors.len() != author_ids.len() {
        return Err(AppError::NotFound(
            "One or more requested authors do not exist".to_string(),
        ));
    }

    let dtos: Vec<AuthorDto> = authors.into_iter().map(Author::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
