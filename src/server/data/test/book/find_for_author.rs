use super::*;

/// Tests the scoped single-book lookup.
///
/// A book only resolves within its own author's collection; the same id under
/// a different author is not found.
///
/// Expected: Ok(Some) under the owning author, Ok(None) elsewhere
#[tokio::test]
async fn resolves_only_within_the_owning_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = AuthorFactory::new(db).build().await?;
    let other = AuthorFactory::new(db).build().await?;
    let book = BookFactory::new(db, author.id).title("Emma").build().await?;

    let repo = BookRepository::new(db);

    let found = repo.find_for_author(author.id, book.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().title, "Emma");

    assert_eq!(repo.find_for_author(other.id, book.id).await?, None);
    assert_eq!(repo.find_for_author(author.id, Uuid::new_v4()).await?, None);

    Ok(())
}
