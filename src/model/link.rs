use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hypermedia link describing a follow-up operation on a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LinkDto {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl LinkDto {
    pub fn new(href: impl Into<String>, rel: &str, method: &str) -> Self {
        Self {
            href: href.into(),
            rel: rel.to_string(),
            method: method.to_string(),
        }
    }
}

/// Envelope for collection responses under the hypermedia representation:
/// the member records plus the links that apply to the collection itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedCollectionDto<T> {
    pub value: Vec<T>,
    pub links: Vec<LinkDto>,
}

impl<T> LinkedCollectionDto<T> {
    pub fn new(value: Vec<T>, links: Vec<LinkDto>) -> Self {
        Self { value, links }
    }
}
