use super::*;

/// Tests author creation.
///
/// Verifies that the repository stores the supplied fields and generates a
/// fresh id per insert.
///
/// Expected: Ok with the created authors carrying distinct ids
#[tokio::test]
async fn creates_authors_with_generated_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    let first = repo.insert(author_param("Mary", "Shelley", 1797, "Horror")).await?;
    let second = repo.insert(author_param("Bram", "Stoker", 1847, "Horror")).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.first_name, "Mary");
    assert_eq!(first.last_name, "Shelley");
    assert_eq!(first.genre, "Horror");
    assert_eq!(first.date_of_death, None);

    let found = repo.find_by_id(first.id).await?;
    assert_eq!(found, Some(first));

    Ok(())
}

/// Tests batch creation.
///
/// Expected: Ok with the created authors in input order
#[tokio::test]
async fn insert_many_returns_authors_in_input_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    let authors = repo
        .insert_many(vec![
            author_param("Zadie", "Smith", 1975, "Fiction"),
            author_param("Ali", "Smith", 1962, "Fiction"),
        ])
        .await?;

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].first_name, "Zadie");
    assert_eq!(authors[1].first_name, "Ali");

    Ok(())
}
