use super::*;

/// Tests the per-author book listing.
///
/// Verifies that only the author's own books come back, ordered by title.
///
/// Expected: Ok with the author's books in title order
#[tokio::test]
async fn returns_only_the_authors_books_in_title_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = AuthorFactory::new(db).build().await?;
    let other = AuthorFactory::new(db).build().await?;

    BookFactory::new(db, author.id).title("Persuasion").build().await?;
    BookFactory::new(db, author.id).title("Emma").build().await?;
    BookFactory::new(db, other.id).title("Dracula").build().await?;

    let books = BookRepository::new(db).get_for_author(author.id).await?;

    let titles: Vec<&str> = books.iter().map(|book| book.title.as_str()).collect();
    assert_eq!(titles, vec!["Emma", "Persuasion"]);

    Ok(())
}

/// Tests the listing for an author without books.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_an_author_without_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = AuthorFactory::new(db).build().await?;

    let books = BookRepository::new(db).get_for_author(author.id).await?;

    assert!(books.is_empty());

    Ok(())
}
