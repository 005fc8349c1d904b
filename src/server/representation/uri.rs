//! Canonical URI rendering for named routes.
//!
//! All link and pagination hrefs go through [`ResourceUriBuilder`], the single
//! seam between link construction and the routing layer. Handing it a route
//! name plus a parameter set yields a deterministic absolute URI: parameters
//! matching a path placeholder are substituted into the path, the remaining
//! non-empty parameters become the query string in insertion order.

use url::Url;

/// Named routes of the API, mirroring the route table registered in
/// `server::router`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    GetRoot,
    GetAuthors,
    CreateAuthor,
    GetAuthor,
    DeleteAuthor,
    CreateAuthorCollection,
    GetAuthorCollection,
    GetBooksForAuthor,
    CreateBookForAuthor,
    GetBookForAuthor,
    UpdateBookForAuthor,
    DeleteBookForAuthor,
}

impl RouteName {
    /// Path template with `{name}` placeholders.
    pub const fn template(self) -> &'static str {
        match self {
            Self::GetRoot => "/api",
            Self::GetAuthors | Self::CreateAuthor => "/api/authors",
            Self::GetAuthor | Self::DeleteAuthor => "/api/authors/{id}",
            Self::CreateAuthorCollection => "/api/authorcollections",
            Self::GetAuthorCollection => "/api/authorcollections/{ids}",
            Self::GetBooksForAuthor | Self::CreateBookForAuthor => {
                "/api/authors/{author_id}/books"
            }
            Self::GetBookForAuthor | Self::UpdateBookForAuthor | Self::DeleteBookForAuthor => {
                "/api/authors/{author_id}/books/{id}"
            }
        }
    }
}

/// Ordered route parameter set. Keys not consumed by a path placeholder are
/// rendered as query parameters in the order they were set; keys with empty
/// values are omitted entirely.
#[derive(Debug, Clone, Default)]
pub struct UriParams(Vec<(&'static str, String)>);

impl UriParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    /// Sets the key only when a non-empty value is present.
    pub fn set_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.set(key, value),
            _ => self,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Renders absolute URIs for named routes against the configured application
/// base URL.
pub struct ResourceUriBuilder {
    base: Url,
}

impl ResourceUriBuilder {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Renders the URI for `route`, substituting path placeholders from
    /// `params` and appending the rest as a query string. Same route and same
    /// parameters always produce the same href.
    pub fn href(&self, route: RouteName, params: &UriParams) -> String {
        let mut path = route.template().to_string();
        let mut consumed = Vec::new();

        for (key, value) in params.iter() {
            let placeholder = format!("{{{key}}}");
            if path.contains(&placeholder) {
                path = path.replace(&placeholder, value);
                consumed.push(key);
            }
        }

        let mut url = self.base.clone();
        url.set_path(&path);

        let query: Vec<(&str, &str)> = params
            .iter()
            .filter(|(key, value)| !consumed.contains(key) && !value.is_empty())
            .collect();

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        url.into()
    }
}
