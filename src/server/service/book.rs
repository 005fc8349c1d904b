//! Book service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{Book, CreateBookParam, InsertBookParam, UpdateBookParam},
};

/// Outcome of a PUT on a book: replaced an existing book, or created one
/// under the id the client supplied.
pub enum BookUpsert {
    Created(Book),
    Updated,
}

/// Service providing business logic for an author's books.
pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    /// Creates a new BookService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all books for an author, ordered by title.
    pub async fn get_books_for_author(&self, author_id: Uuid) -> Result<Vec<Book>, AppError> {
        let books = BookRepository::new(self.db).get_for_author(author_id).await?;

        Ok(books)
    }

    /// Retrieves a single book within an author's collection.
    pub async fn get_book_for_author(
        &self,
        author_id: Uuid,
        book_id: Uuid,
    ) -> Result<Option<Book>, AppError> {
        let book = BookRepository::new(self.db)
            .find_for_author(author_id, book_id)
            .await?;

        Ok(book)
    }

    /// Creates a new book under an author with a freshly generated id.
    pub async fn create_book(
        &self,
        author_id: Uuid,
        param: CreateBookParam,
    ) -> Result<Book, AppError> {
        let book = BookRepository::new(self.db)
            .insert(
                author_id,
                InsertBookParam {
                    id: Uuid::new_v4(),
                    title: param.title,
                    description: param.description,
                },
            )
            .await?;

        Ok(book)
    }

    /// Replaces a book, or creates it under the supplied id when it does not
    /// exist yet.
    ///
    /// # Returns
    /// - `Ok(BookUpsert::Updated)` - Existing book replaced
    /// - `Ok(BookUpsert::Created(book))` - No book existed; one was created
    ///   with the client-supplied id
    /// - `Err(AppError)` - Database error
    pub async fn upsert_book(
        &self,
        author_id: Uuid,
        book_id: Uuid,
        param: UpdateBookParam,
    ) -> Result<BookUpsert, AppError> {
        let repo = BookRepository::new(self.db);

        match repo.find_for_author(author_id, book_id).await? {
            Some(_) => {
                repo.update(book_id, &param).await?;
                Ok(BookUpsert::Updated)
            }
            None => {
                let book = repo
                    .insert(
                        author_id,
                        InsertBookParam {
                            id: book_id,
                            title: param.title,
                            description: Some(param.description),
                        },
                    )
                    .await?;
                Ok(BookUpsert::Created(book))
            }
        }
    }

    /// Deletes a book within an author's collection.
    pub async fn delete_book(&self, author_id: Uuid, book_id: Uuid) -> Result<bool, AppError> {
        let deleted = BookRepository::new(self.db).delete(author_id, book_id).await?;

        Ok(deleted)
    }
}
