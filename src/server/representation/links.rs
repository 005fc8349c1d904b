//! Hypermedia link assembly for single resources and collections.
//!
//! Links are only attached when the client negotiated the hypermedia
//! representation; the plain representation carries pagination hrefs in the
//! `X-Pagination` header instead. Everything here is pure construction on top
//! of [`ResourceUriBuilder`].

use uuid::Uuid;

use crate::model::{author::AuthorResourceParams, link::LinkDto};

use super::uri::{ResourceUriBuilder, RouteName, UriParams};

/// Which page an author-collection URI should point at, relative to the
/// current parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    Current,
    Previous,
    Next,
}

/// Builds the link sets for authors, books and the API root.
pub struct LinkFactory<'a> {
    uri: &'a ResourceUriBuilder,
}

impl<'a> LinkFactory<'a> {
    pub fn new(uri: &'a ResourceUriBuilder) -> Self {
        Self { uri }
    }

    /// URI of the author collection for the given parameters, turned to the
    /// requested page. Empty optional parameters are left out of the query
    /// string; the effective (clamped) page size is rendered.
    pub fn author_page_uri(&self, params: &AuthorResourceParams, turn: PageTurn) -> String {
        let page_number = match turn {
            PageTurn::Current => params.page_number,
            PageTurn::Previous => params.page_number.saturating_sub(1),
            PageTurn::Next => params.page_number + 1,
        };

        let uri_params = UriParams::new()
            .set_opt("searchQuery", params.search_query.as_deref())
            .set_opt("genre", params.genre.as_deref())
            .set("orderBy", params.order_by.clone())
            .set_opt("fields", params.fields.as_deref())
            .set("pageNumber", page_number.to_string())
            .set("pageSize", params.page_size().to_string());

        self.uri.href(RouteName::GetAuthors, &uri_params)
    }

    /// Links for the author collection envelope: always `self`, plus
    /// `nextPage`/`previousPage` only when those pages exist.
    pub fn author_collection_links(
        &self,
        params: &AuthorResourceParams,
        has_previous: bool,
        has_next: bool,
    ) -> Vec<LinkDto> {
        let mut links = vec![LinkDto::new(
            self.author_page_uri(params, PageTurn::Current),
            "self",
            "GET",
        )];

        if has_next {
            links.push(LinkDto::new(
                self.author_page_uri(params, PageTurn::Next),
                "nextPage",
                "GET",
            ));
        }

        if has_previous {
            links.push(LinkDto::new(
                self.author_page_uri(params, PageTurn::Previous),
                "previousPage",
                "GET",
            ));
        }

        links
    }

    /// Links for a single author: `self` (carrying the active field selection
    /// so the href reproduces the shaped representation), deletion, and the
    /// two book-collection operations scoped to the author.
    pub fn author_links(&self, author_id: Uuid, fields: Option<&str>) -> Vec<LinkDto> {
        let id = author_id.to_string();

        vec![
            LinkDto::new(
                self.uri.href(
                    RouteName::GetAuthor,
                    &UriParams::new().set("id", id.clone()).set_opt("fields", fields),
                ),
                "self",
                "GET",
            ),
            LinkDto::new(
                self.uri
                    .href(RouteName::DeleteAuthor, &UriParams::new().set("id", id.clone())),
                "delete_author",
                "DELETE",
            ),
            LinkDto::new(
                self.uri.href(
                    RouteName::CreateBookForAuthor,
                    &UriParams::new().set("author_id", id.clone()),
                ),
                "create_book_for_author",
                "POST",
            ),
            LinkDto::new(
                self.uri.href(
                    RouteName::GetBooksForAuthor,
                    &UriParams::new().set("author_id", id),
                ),
                "books",
                "GET",
            ),
        ]
    }

    /// Links for a single book within its author's collection.
    pub fn book_links(&self, author_id: Uuid, book_id: Uuid) -> Vec<LinkDto> {
        let params = UriParams::new()
            .set("author_id", author_id.to_string())
            .set("id", book_id.to_string());

        vec![
            LinkDto::new(
                self.uri.href(RouteName::GetBookForAuthor, &params),
                "self",
                "GET",
            ),
            LinkDto::new(
                self.uri.href(RouteName::DeleteBookForAuthor, &params),
                "delete_book",
                "DELETE",
            ),
            LinkDto::new(
                self.uri.href(RouteName::UpdateBookForAuthor, &params),
                "update_book",
                "PUT",
            ),
        ]
    }

    /// Link for the envelope around an author's book collection.
    pub fn book_collection_links(&self, author_id: Uuid) -> Vec<LinkDto> {
        vec![LinkDto::new(
            self.uri.href(
                RouteName::GetBooksForAuthor,
                &UriParams::new().set("author_id", author_id.to_string()),
            ),
            "self",
            "GET",
        )]
    }

    /// Entry-point link document served at the API root.
    pub fn root_links(&self) -> Vec<LinkDto> {
        vec![
            LinkDto::new(
                self.uri.href(RouteName::GetRoot, &UriParams::new()),
                "self",
                "GET",
            ),
            LinkDto::new(
                self.uri.href(RouteName::GetAuthors, &UriParams::new()),
                "authors",
                "GET",
            ),
            LinkDto::new(
                self.uri.href(RouteName::CreateAuthor, &UriParams::new()),
                "create_author",
                "POST",
            ),
        ]
    }
}
