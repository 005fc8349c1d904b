use super::*;

/// Tests book insertion under an author.
///
/// The id is supplied by the caller (generated on create, path-supplied on
/// upsert), so the stored book must carry exactly that id.
///
/// Expected: Ok with the created book under the supplied id
#[tokio::test]
async fn stores_the_book_under_the_supplied_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = AuthorFactory::new(db).build().await?;
    let repo = BookRepository::new(db);

    let id = Uuid::new_v4();
    let created = repo
        .insert(
            author.id,
            InsertBookParam {
                id,
                title: "Emma".to_string(),
                description: Some("A novel about youthful hubris.".to_string()),
            },
        )
        .await?;

    assert_eq!(created.id, id);
    assert_eq!(created.author_id, author.id);
    assert_eq!(created.title, "Emma");

    let found = repo.find_for_author(author.id, id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests insertion without a description.
///
/// Expected: Ok with a None description
#[tokio::test]
async fn allows_a_missing_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = AuthorFactory::new(db).build().await?;

    let created = BookRepository::new(db)
        .insert(
            author.id,
            InsertBookParam {
                id: Uuid::new_v4(),
                title: "Emma".to_string(),
                description: None,
            },
        )
        .await?;

    assert_eq!(created.description, None);

    Ok(())
}
