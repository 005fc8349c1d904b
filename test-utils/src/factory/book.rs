//! Book factory for creating test book entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test books with customizable fields.
///
/// Books always belong to an author, so the author id is required up front.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db, author.id)
///     .title("The Dispossessed")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: Uuid,
    title: String,
    description: Option<String>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"` where id is auto-incremented
    /// - description: `Some("A test book")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - Id of the author the book belongs to
    ///
    /// # Returns
    /// - `BookFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, author_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Book {}", id),
            description: Some("A test book".to_string()),
        }
    }

    /// Sets the title for the book.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the book.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Clears the description for the book.
    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    /// Inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - The created book entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}
