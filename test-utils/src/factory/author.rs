//! Author factory for creating test author entities.
//!
//! This module provides a factory for creating author entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test authors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::author::AuthorFactory;
///
/// let author = AuthorFactory::new(&db)
///     .first_name("Ursula K.")
///     .last_name("Le Guin")
///     .genre("Science fiction")
///     .build()
///     .await?;
/// ```
pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    date_of_death: Option<NaiveDate>,
    genre: String,
}

impl<'a> AuthorFactory<'a> {
    /// Creates a new AuthorFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Author"`
    /// - last_name: `"Name {id}"` where id is auto-incremented
    /// - date_of_birth: 1950-01-01
    /// - date_of_death: `None`
    /// - genre: `"Fantasy"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AuthorFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Author".to_string(),
            last_name: format!("Name {}", id),
            date_of_birth: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
            date_of_death: None,
            genre: "Fantasy".to_string(),
        }
    }

    /// Sets the first name for the author.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name for the author.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the date of birth for the author.
    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    /// Sets the date of death for the author.
    pub fn date_of_death(mut self, date_of_death: NaiveDate) -> Self {
        self.date_of_death = Some(date_of_death);
        self
    }

    /// Sets the genre for the author.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Inserts the author entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::author::Model)` - The created author entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            date_of_death: ActiveValue::Set(self.date_of_death),
            genre: ActiveValue::Set(self.genre),
        }
        .insert(self.db)
        .await
    }
}
