use super::*;

/// Tests lookup of an existing author.
///
/// Expected: Ok with the full author
#[tokio::test]
async fn returns_author_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let created = repo.insert(author_param("Jane", "Austen", 1775, "Romance")).await?;

    let found = repo.find_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests lookup of a missing author.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    let found = repo.find_by_id(uuid::Uuid::new_v4()).await?;

    assert_eq!(found, None);

    Ok(())
}
