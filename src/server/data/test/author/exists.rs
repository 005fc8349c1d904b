use super::*;

/// Tests existence checks for present and absent authors.
///
/// Expected: Ok(true) for a created author, Ok(false) otherwise
#[tokio::test]
async fn reports_presence_and_absence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let created = repo.insert(author_param("Jane", "Austen", 1775, "Romance")).await?;

    assert!(repo.exists(created.id).await?);
    assert!(!repo.exists(uuid::Uuid::new_v4()).await?);

    Ok(())
}
