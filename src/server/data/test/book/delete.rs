use super::*;

/// Tests scoped book deletion.
///
/// A delete through the wrong author must not remove the book.
///
/// Expected: Ok(false) under the wrong author, Ok(true) under the right one
#[tokio::test]
async fn deletes_only_within_the_owning_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = AuthorFactory::new(db).build().await?;
    let other = AuthorFactory::new(db).build().await?;
    let book = BookFactory::new(db, author.id).build().await?;

    let repo = BookRepository::new(db);

    assert!(!repo.delete(other.id, book.id).await?);
    assert!(repo.find_for_author(author.id, book.id).await?.is_some());

    assert!(repo.delete(author.id, book.id).await?);
    assert_eq!(repo.find_for_author(author.id, book.id).await?, None);

    assert!(!repo.delete(author.id, book.id).await?);

    Ok(())
}
