//! Author service for business logic.
//!
//! This module provides the `AuthorService` for orchestrating author queries
//! and mutations. It resolves client sort clauses through the property
//! mapping registry before handing the query to the repository, and works
//! with domain models rather than DTOs.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::author::{AuthorDto, AuthorResourceParams},
    server::{
        data::author::AuthorRepository,
        error::AppError,
        model::author::{Author, CreateAuthorParam, GetAuthorsParam},
        representation::{pagination::PagedList, property_mapping::PropertyMappingRegistry},
    },
};

/// Service providing business logic for author management.
pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    /// Creates a new AuthorService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthorService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of the author collection.
    ///
    /// Resolves the client's `orderBy` clauses into physical ordering steps
    /// via the registry (the clauses must have been validated by the
    /// controller first), then queries the filtered, sorted window.
    ///
    /// # Arguments
    /// - `registry` - Property mapping registry built at startup
    /// - `params` - Client-supplied resource parameters
    ///
    /// # Returns
    /// - `Ok(PagedList<Author>)` - Authors for the requested page with paging
    ///   metadata
    /// - `Err(AppError)` - Database error, or an unvalidated sort key reached
    ///   resolution
    pub async fn get_authors(
        &self,
        registry: &PropertyMappingRegistry,
        params: &AuthorResourceParams,
    ) -> Result<PagedList<Author>, AppError> {
        let ordering =
            registry.resolve_order_by::<AuthorDto, entity::author::Model>(&params.order_by)?;

        let param = GetAuthorsParam {
            page_number: params.page_number,
            page_size: params.page_size(),
            genre: params.genre.clone(),
            search_query: params.search_query.clone(),
            ordering,
        };

        let authors = AuthorRepository::new(self.db).get_paginated(&param).await?;

        Ok(authors)
    }

    /// Retrieves a single author by id.
    pub async fn get_author(&self, id: Uuid) -> Result<Option<Author>, AppError> {
        let author = AuthorRepository::new(self.db).find_by_id(id).await?;

        Ok(author)
    }

    /// Retrieves the authors matching a list of ids, ordered by first name.
    /// Missing ids shorten the result; callers compare lengths.
    pub async fn get_authors_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Author>, AppError> {
        let authors = AuthorRepository::new(self.db).find_by_ids(ids).await?;

        Ok(authors)
    }

    /// Checks whether an author exists.
    pub async fn author_exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists = AuthorRepository::new(self.db).exists(id).await?;

        Ok(exists)
    }

    /// Creates a new author.
    pub async fn create_author(&self, param: CreateAuthorParam) -> Result<Author, AppError> {
        let author = AuthorRepository::new(self.db).insert(param).await?;

        Ok(author)
    }

    /// Creates a batch of authors in one request.
    pub async fn create_authors(
        &self,
        params: Vec<CreateAuthorParam>,
    ) -> Result<Vec<Author>, AppError> {
        let authors = AuthorRepository::new(self.db).insert_many(params).await?;

        Ok(authors)
    }

    /// Deletes an author and, through the schema's cascade, their books.
    ///
    /// # Returns
    /// - `Ok(true)` - Author deleted
    /// - `Ok(false)` - No author with that id
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete_author(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = AuthorRepository::new(self.db).delete(id).await?;

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_utils::{builder::TestBuilder, factory::author::AuthorFactory};

    fn params(order_by: &str) -> AuthorResourceParams {
        AuthorResourceParams {
            order_by: order_by.to_string(),
            ..AuthorResourceParams::default()
        }
    }

    #[tokio::test]
    async fn age_sort_resolves_to_reverted_birth_date_order() {
        let test = TestBuilder::new().with_library_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        AuthorFactory::new(db)
            .first_name("Old")
            .date_of_birth(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap())
            .build()
            .await
            .unwrap();
        AuthorFactory::new(db)
            .first_name("Young")
            .date_of_birth(NaiveDate::from_ymd_opt(1980, 1, 1).unwrap())
            .build()
            .await
            .unwrap();

        let registry = PropertyMappingRegistry::new();
        let service = AuthorService::new(db);

        // Ascending age is youngest first, i.e. descending date of birth.
        let page = service.get_authors(&registry, &params("age")).await.unwrap();
        let first_names: Vec<&str> = page
            .items()
            .iter()
            .map(|author| author.first_name.as_str())
            .collect();
        assert_eq!(first_names, vec!["Young", "Old"]);

        let page = service
            .get_authors(&registry, &params("age desc"))
            .await
            .unwrap();
        let first_names: Vec<&str> = page
            .items()
            .iter()
            .map(|author| author.first_name.as_str())
            .collect();
        assert_eq!(first_names, vec!["Old", "Young"]);
    }

    #[tokio::test]
    async fn composite_name_sort_orders_across_both_name_parts() {
        let test = TestBuilder::new().with_library_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        AuthorFactory::new(db)
            .first_name("Arthur")
            .last_name("Doyle")
            .build()
            .await
            .unwrap();
        AuthorFactory::new(db)
            .first_name("Arthur")
            .last_name("Clarke")
            .build()
            .await
            .unwrap();

        let registry = PropertyMappingRegistry::new();

        let page = AuthorService::new(db)
            .get_authors(&registry, &params("name"))
            .await
            .unwrap();

        let last_names: Vec<&str> = page
            .items()
            .iter()
            .map(|author| author.last_name.as_str())
            .collect();
        assert_eq!(last_names, vec!["Clarke", "Doyle"]);
    }

    #[tokio::test]
    async fn oversized_page_size_is_clamped_before_the_query() {
        let test = TestBuilder::new().with_library_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        AuthorFactory::new(db).build().await.unwrap();

        let registry = PropertyMappingRegistry::new();
        let query = AuthorResourceParams {
            page_size: 500,
            ..AuthorResourceParams::default()
        };

        let page = AuthorService::new(db)
            .get_authors(&registry, &query)
            .await
            .unwrap();

        assert_eq!(page.page_size(), crate::model::author::MAX_PAGE_SIZE);
    }
}
