use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::link::LinkDto,
    server::{
        controller::ROOT_TAG, representation::links::LinkFactory,
        representation::media_type::accepts_hateoas, state::AppState,
    },
};

/// GET /api - API entry point.
///
/// Under the vendor media type, returns the root link document pointing at
/// the operations a client can start from; for any other representation there
/// is nothing useful to say, so the response is empty.
///
/// # Returns
/// - `200 OK`: Root link document (vendor media type only)
/// - `204 No Content`: Any other requested representation
#[utoipa::path(
    get,
    path = "/api",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Root link document", body = Vec<LinkDto>),
        (status = 204, description = "No hypermedia representation requested")
    ),
)]
pub async fn get_root(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if accepts_hateoas(&headers) {
        let links = LinkFactory::new(&state.uri_builder).root_links();
        return (StatusCode::OK, Json(links)).into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}
