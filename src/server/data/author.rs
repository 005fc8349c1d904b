//! Author data repository for database operations.
//!
//! This module provides the `AuthorRepository` for managing author records in
//! the database. It handles the paginated collection query with filtering and
//! resolved ordering, plus lookups, inserts, and deletes, converting entity
//! models to domain models at the infrastructure boundary.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    model::author::{Author, CreateAuthorParam, GetAuthorsParam},
    representation::{pagination::PagedList, property_mapping::SortDirection},
};

/// Repository providing database operations for author management.
pub struct AuthorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorRepository<'a> {
    /// Creates a new AuthorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthorRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Queries one page of the author collection.
    ///
    /// Applies the optional genre filter (exact, case-insensitive) and search
    /// filter (substring across genre, first and last name), then the
    /// ordering steps resolved from the client's sort clauses. The total
    /// count is taken from the unpaged query before the window is fetched,
    /// so paging metadata stays accurate regardless of the window size. The
    /// page number is used as supplied; a page past the end simply yields an
    /// empty window.
    ///
    /// # Arguments
    /// - `param` - Page window, filters, and resolved ordering steps
    ///
    /// # Returns
    /// - `Ok(PagedList<Author>)` - Requested window with paging metadata
    /// - `Err(DbErr)` - Database error, or an ordering step referencing a
    ///   column the author table cannot sort on
    pub async fn get_paginated(&self, param: &GetAuthorsParam) -> Result<PagedList<Author>, DbErr> {
        let mut query = entity::prelude::Author::find();

        if let Some(genre) = &param.genre {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::author::Column::Genre)))
                    .eq(genre.trim().to_lowercase()),
            );
        }

        if let Some(search) = &param.search_query {
            let pattern = format!("%{}%", search.trim().to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::author::Column::Genre)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::author::Column::FirstName)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::author::Column::LastName)))
                            .like(pattern),
                    ),
            );
        }

        for step in &param.ordering {
            let column = order_column(step.target_field).ok_or_else(|| {
                DbErr::Custom(format!(
                    "author query cannot sort on {:?}",
                    step.target_field
                ))
            })?;
            let order = match step.direction {
                SortDirection::Ascending => Order::Asc,
                SortDirection::Descending => Order::Desc,
            };
            query = query.order_by(column, order);
        }

        let paginator = query.paginate(self.db, param.page_size);

        let total = paginator.num_items().await?;
        let entities = paginator
            .fetch_page(param.page_number.saturating_sub(1))
            .await?;
        let authors = entities.into_iter().map(Author::from_entity).collect();

        Ok(PagedList::new(
            authors,
            total,
            param.page_number,
            param.page_size,
        ))
    }

    /// Finds an author by id.
    ///
    /// # Returns
    /// - `Ok(Some(Author))` - Author found
    /// - `Ok(None)` - No author with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DbErr> {
        let entity = entity::prelude::Author::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Author::from_entity))
    }

    /// Finds every author whose id appears in `ids`, ordered by first name.
    ///
    /// Ids without a matching author are simply absent from the result; the
    /// caller compares lengths to detect missing authors.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Author>, DbErr> {
        let entities = entity::prelude::Author::find()
            .filter(entity::author::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::author::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Author::from_entity).collect())
    }

    /// Checks whether an author with the given id exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Author::find()
            .filter(entity::author::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new author with a freshly generated id.
    ///
    /// # Arguments
    /// - `param` - Author creation parameters
    ///
    /// # Returns
    /// - `Ok(Author)` - The created author including its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: CreateAuthorParam) -> Result<Author, DbErr> {
        let entity = entity::author::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            date_of_birth: ActiveValue::Set(param.date_of_birth),
            date_of_death: ActiveValue::Set(param.date_of_death),
            genre: ActiveValue::Set(param.genre),
        }
        .insert(self.db)
        .await?;

        Ok(Author::from_entity(entity))
    }

    /// Inserts a batch of authors, returning them in input order.
    pub async fn insert_many(
        &self,
        params: Vec<CreateAuthorParam>,
    ) -> Result<Vec<Author>, DbErr> {
        let mut authors = Vec::with_capacity(params.len());
        for param in params {
            authors.push(self.insert(param).await?);
        }

        Ok(authors)
    }

    /// Deletes an author by id. Books cascade at the schema level.
    ///
    /// # Returns
    /// - `Ok(true)` - Author deleted
    /// - `Ok(false)` - No author with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Author::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Maps a resolved ordering target field onto its author column.
fn order_column(field: &str) -> Option<entity::author::Column> {
    match field {
        "id" => Some(entity::author::Column::Id),
        "first_name" => Some(entity::author::Column::FirstName),
        "last_name" => Some(entity::author::Column::LastName),
        "date_of_birth" => Some(entity::author::Column::DateOfBirth),
        "genre" => Some(entity::author::Column::Genre),
        _ => None,
    }
}
