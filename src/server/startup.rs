use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};
use uuid::Uuid;

use crate::server::{config::Config, error::AppError};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the SQLite database using the connection
/// string from configuration, then automatically runs all pending SeaORM
/// migrations to ensure the database schema is up-to-date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds an empty database with a small set of sample authors and books.
///
/// Runs once per fresh database: when any author already exists, seeding is
/// skipped entirely so restarts never duplicate data.
///
/// # Returns
/// - `Ok(())` - Database seeded, or already populated
/// - `Err(AppError)` - Database error during seeding
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), AppError> {
    let author_count = entity::prelude::Author::find().count(db).await?;
    if author_count > 0 {
        return Ok(());
    }

    tracing::info!("Seeding empty database with sample authors and books");

    seed_author(
        db,
        "Stephen",
        "King",
        date(1947, 9, 21),
        None,
        "Horror",
        &[
            ("The Shining", "An alcoholic writer takes a job as the winter caretaker of an isolated hotel."),
            ("It", "Seven children are terrorized by an entity that exploits the fears of its victims."),
        ],
    )
    .await?;

    seed_author(
        db,
        "George R.R.",
        "Martin",
        date(1948, 9, 20),
        None,
        "Fantasy",
        &[
            ("A Game of Thrones", "Nine noble families fight for control over the lands of Westeros."),
            ("A Clash of Kings", "The Seven Kingdoms tear themselves apart in a war of succession."),
        ],
    )
    .await?;

    seed_author(
        db,
        "Douglas",
        "Adams",
        date(1952, 3, 11),
        Some(date(2001, 5, 11)),
        "Science fiction",
        &[(
            "The Hitchhiker's Guide to the Galaxy",
            "Seconds before Earth is demolished, Arthur Dent is swept off the planet.",
        )],
    )
    .await?;

    seed_author(
        db,
        "Ursula K.",
        "Le Guin",
        date(1929, 10, 21),
        Some(date(2018, 1, 22)),
        "Science fiction",
        &[(
            "The Left Hand of Darkness",
            "An envoy is sent to a planet whose inhabitants have no fixed sex.",
        )],
    )
    .await?;

    seed_author(
        db,
        "Agatha",
        "Christie",
        date(1890, 9, 15),
        Some(date(1976, 1, 12)),
        "Crime",
        &[
            ("Murder on the Orient Express", "A murder aboard a snowbound train leaves a carriage full of suspects."),
            ("And Then There Were None", "Ten strangers are lured to an island and accused of murder."),
        ],
    )
    .await?;

    Ok(())
}

async fn seed_author(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    date_of_birth: NaiveDate,
    date_of_death: Option<NaiveDate>,
    genre: &str,
    books: &[(&str, &str)],
) -> Result<(), AppError> {
    let author = entity::author::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        first_name: ActiveValue::Set(first_name.to_string()),
        last_name: ActiveValue::Set(last_name.to_string()),
        date_of_birth: ActiveValue::Set(date_of_birth),
        date_of_death: ActiveValue::Set(date_of_death),
        genre: ActiveValue::Set(genre.to_string()),
    }
    .insert(db)
    .await?;

    for (title, description) in books {
        entity::book::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            author_id: ActiveValue::Set(author.id),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(Some(description.to_string())),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

// Seed dates are fixed literals; an invalid one is a programming error.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
