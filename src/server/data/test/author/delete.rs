use super::*;

use crate::server::data::book::BookRepository;
use test_utils::factory::book::BookFactory;

/// Tests author deletion.
///
/// Expected: Ok(true) on delete, Ok(false) for a missing author
#[tokio::test]
async fn deletes_author_and_reports_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let created = repo.insert(author_param("Jane", "Austen", 1775, "Romance")).await?;

    assert!(repo.delete(created.id).await?);
    assert_eq!(repo.find_by_id(created.id).await?, None);

    assert!(!repo.delete(created.id).await?);

    Ok(())
}

/// Tests that deleting an author cascades to their books.
///
/// The cascade lives in the schema's foreign key, so the book table must be
/// created alongside the author table for this to hold.
///
/// Expected: Ok with no books left for the deleted author
#[tokio::test]
async fn deleting_an_author_removes_their_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author_repo = AuthorRepository::new(db);
    let author = author_repo
        .insert(author_param("Jane", "Austen", 1775, "Romance"))
        .await?;

    BookFactory::new(db, author.id).title("Emma").build().await?;
    BookFactory::new(db, author.id).title("Persuasion").build().await?;

    assert!(author_repo.delete(author.id).await?);

    let books = BookRepository::new(db).get_for_author(author.id).await?;
    assert!(books.is_empty());

    Ok(())
}
