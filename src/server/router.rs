use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDto, CreateAuthorDto},
        book::{BookDto, CreateBookDto, UpdateBookDto},
        link::LinkDto,
    },
    server::{
        controller::{author, author_collection, book, root},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::get_root,
        author::get_authors,
        author::get_author,
        author::create_author,
        author::block_author_creation,
        author::delete_author,
        author_collection::create_author_collection,
        author_collection::get_author_collection,
        book::get_books_for_author,
        book::get_book_for_author,
        book::create_book_for_author,
        book::update_book_for_author,
        book::delete_book_for_author,
    ),
    components(schemas(
        AuthorDto,
        CreateAuthorDto,
        BookDto,
        CreateBookDto,
        UpdateBookDto,
        LinkDto,
        ErrorDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(root::get_root))
        .route(
            "/api/authors",
            get(author::get_authors).post(author::create_author),
        )
        .route(
            "/api/authors/{id}",
            get(author::get_author)
                .post(author::block_author_creation)
                .delete(author::delete_author),
        )
        .route(
            "/api/authorcollections",
            post(author_collection::create_author_collection),
        )
        .route(
            "/api/authorcollections/{ids}",
            get(author_collection::get_author_collection),
        )
        .route(
            "/api/authors/{author_id}/books",
            get(book::get_books_for_author).post(book::create_book_for_author),
        )
        .route(
            "/api/authors/{author_id}/books/{id}",
            get(book::get_book_for_author)
                .put(book::update_book_for_author)
                .delete(book::delete_book_for_author),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
