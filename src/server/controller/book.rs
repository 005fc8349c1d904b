use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        book::{BookDto, CreateBookDto, UpdateBookDto},
        link::LinkedCollectionDto,
    },
    server::{
        controller::BOOK_TAG,
        error::AppError,
        model::book::Book,
        representation::{
            links::LinkFactory,
            media_type::accepts_hateoas,
            shaping::{shape, shape_many},
            uri::{RouteName, UriParams},
        },
        service::{
            author::AuthorService,
            book::{BookService, BookUpsert},
        },
        state::AppState,
    },
};

/// A book description equal to its title carries no information; both create
/// and replace reject it as semantically unprocessable.
fn validate_description(title: &str, description: Option<&str>) -> Result<(), AppError> {
    if description == Some(title) {
        return Err(AppError::UnprocessableEntity(
            "The provided description should be different from the title.".to_string(),
        ));
    }

    Ok(())
}

fn location_header(location: &str) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(location).map_err(|e| {
            AppError::InternalError(format!("Failed to encode Location header: {e}"))
        })?,
    );

    Ok(headers)
}

/// GET /api/authors/{author_id}/books - Get all books for an author.
///
/// Under the vendor media type every book carries its own links and the
/// collection is wrapped in an envelope with a `self` link; otherwise the
/// body is the bare array of books.
///
/// # Returns
/// - `200 OK`: Books in the negotiated representation
/// - `404 Not Found`: No author with that id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/authors/{author_id}/books",
    tag = BOOK_TAG,
    params(("author_id" = Uuid, Path, description = "Author id")),
    responses(
        (status = 200, description = "Successfully retrieved the author's books"),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books_for_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(author_id): Path<Uuid>,
) -> Result<Response, AppError> {
    if !AuthorService::new(&state.db).author_exists(author_id).await? {
        return Err(AppError::NotFound(format!("Author {author_id} not found")));
    }

    let books = BookService::new(&state.db)
        .get_books_for_author(author_id)
        .await?;
    let dtos: Vec<BookDto> = books.into_iter().map(Book::into_dto).collect();

    if accepts_hateoas(&headers) {
        let factory = LinkFactory::new(&state.uri_builder);

        let mut shaped = shape_many(&dtos, "")?;
        for (record, book) in shaped.iter_mut().zip(&dtos) {
            let links = factory.book_links(author_id, book.id);
            record.insert("links", serde_json::to_value(links)?);
        }

        let links = factory.book_collection_links(author_id);

        Ok((StatusCode::OK, Json(LinkedCollectionDto::new(shaped, links))).into_response())
    } else {
        Ok((StatusCode::OK, Json(dtos)).into_response())
    }
}

/// GET /api/authors/{author_id}/books/{id} - Get a single book.
///
/// # Returns
/// - `200 OK`: The book, with links embedded under the vendor media type
/// - `404 Not Found`: No such author, or no such book under that author
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/authors/{author_id}/books/{id}",
    tag = BOOK_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
        ("id" = Uuid, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the book"),
        (status = 404, description = "Author or book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_for_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((author_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Response, AppError> {
    if !AuthorService::new(&state.db).author_exists(author_id).await? {
        return Err(AppError::NotFound(format!("Author {author_id} not found")));
    }

    let book = BookService::new(&state.db)
        .get_book_for_author(author_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {id} not found for author {author_id}")))?;

    let dto = book.into_dto();
    let mut record = shape(&dto, "")?;

    if accepts_hateoas(&headers) {
        let links = LinkFactory::new(&state.uri_builder).book_links(author_id, dto.id);
        record.insert("links", serde_json::to_value(links)?);
    }

    Ok((StatusCode::OK, Json(record)).into_response())
}

/// POST /api/authors/{author_id}/books - Create a new book for an author.
///
/// # Returns
/// - `201 Created`: The created book with a `Location` header pointing at it
/// - `404 Not Found`: No author with that id
/// - `422 Unprocessable Entity`: Description equals the title
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/api/authors/{author_id}/books",
    tag = BOOK_TAG,
    params(("author_id" = Uuid, Path, description = "Author id")),
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Successfully created the book"),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 422, description = "Description equals the title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book_for_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(author_id): Path<Uuid>,
    Json(payload): Json<CreateBookDto>,
) -> Result<Response, AppError> {
    validate_description(&payload.title, payload.description.as_deref())?;

    if !AuthorService::new(&state.db).author_exists(author_id).await? {
        return Err(AppError::NotFound(format!("Author {author_id} not found")));
    }

    let book = BookService::new(&state.db)
        .create_book(author_id, payload.into())
        .await?;
    let dto = book.into_dto();

    let location = state.uri_builder.href(
        RouteName::GetBookForAuthor,
        &UriParams::new()
            .set("author_id", author_id.to_string())
            .set("id", dto.id.to_string()),
    );

    let mut record = shape(&dto, "")?;
    if accepts_hateoas(&headers) {
        let links = LinkFactory::new(&state.uri_builder).book_links(author_id, dto.id);
        record.insert("links", serde_json::to_value(links)?);
    }

    Ok((StatusCode::CREATED, location_header(&location)?, Json(record)).into_response())
}

/// PUT /api/authors/{author_id}/books/{id} - Replace a book, upserting when
/// it does not exist yet.
///
/// # Returns
/// - `204 No Content`: Existing book replaced
/// - `201 Created`: No book existed; one was created under the supplied id
/// - `404 Not Found`: No author with that id
/// - `422 Unprocessable Entity`: Description equals the title
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    put,
    path = "/api/authors/{author_id}/books/{id}",
    tag = BOOK_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
        ("id" = Uuid, Path, description = "Book id")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 201, description = "Book created under the supplied id"),
        (status = 204, description = "Successfully replaced the book"),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 422, description = "Description equals the title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book_for_author(
    State(state): State<AppState>,
    Path((author_id, id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateBookDto>,
) -> Result<Response, AppError> {
    validate_description(&payload.title, Some(&payload.description))?;

    if !AuthorService::new(&state.db).author_exists(author_id).await? {
        return Err(AppError::NotFound(format!("Author {author_id} not found")));
    }

    match BookService::new(&state.db)
        .upsert_book(author_id, id, payload.into())
        .await?
    {
        BookUpsert::Updated => Ok(StatusCode::NO_CONTENT.into_response()),
        BookUpsert::Created(book) => {
            let dto = book.into_dto();
            let location = state.uri_builder.href(
                RouteName::GetBookForAuthor,
                &UriParams::new()
                    .set("author_id", author_id.to_string())
                    .set("id", dto.id.to_string()),
            );

            Ok((StatusCode::CREATED, location_header(&location)?, Json(dto)).into_response())
        }
    }
}

/// DELETE /api/authors/{author_id}/books/{id} - Delete a book.
///
/// # Returns
/// - `204 No Content`: Book deleted
/// - `404 Not Found`: No such author, or no such book under that author
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    delete,
    path = "/api/authors/{author_id}/books/{id}",
    tag = BOOK_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
        ("id" = Uuid, Path, description = "Book id")
    ),
    responses(
        (status = 204, description = "Successfully deleted the book"),
        (status = 404, description = "Author or book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book_for_author(
    State(state): State<AppState>,
    Path((author_id, id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    if !AuthorService::new(&state.db).author_exists(author_id).await? {
        return Err(AppError::NotFound(format!("Author {author_id} not found")));
    }

    let deleted = BookService::new(&state.db).delete_book(author_id, id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!(
            "Book {id} not found for author {author_id}"
        )));
    }

    tracing::info!("Book {} for author {} was deleted", id, author_id);

    Ok(StatusCode::NO_CONTENT)
}
