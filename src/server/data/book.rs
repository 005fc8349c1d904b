//! Book data repository for database operations.
//!
//! Books only exist within an author's collection, so every lookup and delete
//! here is scoped by the author id from the request path.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::book::{Book, InsertBookParam, UpdateBookParam};

/// Repository providing database operations for an author's books.
pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    /// Creates a new BookRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all books for an author, ordered by title.
    pub async fn get_for_author(&self, author_id: Uuid) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .order_by_asc(entity::book::Column::Title)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Finds a book by id within an author's collection.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Book found under that author
    /// - `Ok(None)` - No such book, or it belongs to another author
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_author(
        &self,
        author_id: Uuid,
        book_id: Uuid,
    ) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find()
            .filter(entity::book::Column::Id.eq(book_id))
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Inserts a book under an author with the id carried by `param`.
    ///
    /// # Returns
    /// - `Ok(Book)` - The created book
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, author_id: Uuid, param: InsertBookParam) -> Result<Book, DbErr> {
        let entity = entity::book::ActiveModel {
            id: ActiveValue::Set(param.id),
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Replaces a book's title and description.
    pub async fn update(&self, book_id: Uuid, param: &UpdateBookParam) -> Result<(), DbErr> {
        entity::prelude::Book::update_many()
            .filter(entity::book::Column::Id.eq(book_id))
            .col_expr(entity::book::Column::Title, Expr::value(param.title.clone()))
            .col_expr(
                entity::book::Column::Description,
                Expr::value(param.description.clone()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a book within an author's collection.
    ///
    /// # Returns
    /// - `Ok(true)` - Book deleted
    /// - `Ok(false)` - No such book under that author
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, author_id: Uuid, book_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Book::delete_many()
            .filter(entity::book::Column::Id.eq(book_id))
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
