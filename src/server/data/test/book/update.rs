use super::*;

/// Tests full replacement of a book's contents.
///
/// Expected: Ok with the stored title and description replaced
#[tokio::test]
async fn replaces_title_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = AuthorFactory::new(db).build().await?;
    let book = BookFactory::new(db, author.id)
        .title("Emma")
        .description("First draft")
        .build()
        .await?;

    let repo = BookRepository::new(db);

    repo.update(
        book.id,
        &UpdateBookParam {
            title: "Emma (Revised)".to_string(),
            description: "Second draft".to_string(),
        },
    )
    .await?;

    let updated = repo.find_for_author(author.id, book.id).await?.unwrap();
    assert_eq!(updated.title, "Emma (Revised)");
    assert_eq!(updated.description, Some("Second draft".to_string()));

    Ok(())
}
