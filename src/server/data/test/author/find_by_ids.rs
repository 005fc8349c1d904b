use super::*;

/// Tests lookup of a fixed id set.
///
/// Verifies that only the requested authors come back, ordered by first
/// name.
///
/// Expected: Ok with the matching authors
#[tokio::test]
async fn returns_requested_authors_ordered_by_first_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    let zadie = repo.insert(author_param("Zadie", "Smith", 1975, "Fiction")).await?;
    let ali = repo.insert(author_param("Ali", "Smith", 1962, "Fiction")).await?;
    repo.insert(author_param("Jane", "Austen", 1775, "Romance")).await?;

    let authors = repo.find_by_ids(&[zadie.id, ali.id]).await?;

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].first_name, "Ali");
    assert_eq!(authors[1].first_name, "Zadie");

    Ok(())
}

/// Tests lookup with an id that matches nothing.
///
/// Missing ids are not an error at this layer; the result is simply shorter
/// than the request.
///
/// Expected: Ok with only the authors that exist
#[tokio::test]
async fn missing_ids_shorten_the_result() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let created = repo.insert(author_param("Jane", "Austen", 1775, "Romance")).await?;

    let authors = repo.find_by_ids(&[created.id, uuid::Uuid::new_v4()]).await?;

    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].id, created.id);

    Ok(())
}
