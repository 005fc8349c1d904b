use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested window along with the
/// total count of the unpaged result set, and that the derived paging facts
/// hold on the first, last, and out-of-range pages.
///
/// Expected: Ok with correct windows and totals
#[tokio::test]
async fn returns_correct_window_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    for i in 1..=5 {
        repo.insert(author_param(&format!("First{}", i), &format!("Last{}", i), 1950 + i, "Fantasy"))
            .await?;
    }

    let first_page = repo.get_paginated(&page_param(1, 2)).await?;
    assert_eq!(first_page.items().len(), 2);
    assert_eq!(first_page.total_count(), 5);
    assert_eq!(first_page.total_pages(), 3);
    assert!(!first_page.has_previous());
    assert!(first_page.has_next());

    let last_page = repo.get_paginated(&page_param(3, 2)).await?;
    assert_eq!(last_page.items().len(), 1);
    assert!(last_page.has_previous());
    assert!(!last_page.has_next());

    let past_the_end = repo.get_paginated(&page_param(9, 2)).await?;
    assert!(past_the_end.items().is_empty());
    assert_eq!(past_the_end.current_page(), 9);
    assert_eq!(past_the_end.total_count(), 5);

    Ok(())
}

/// Tests pagination with an empty database.
///
/// Expected: Ok with empty window and zero totals
#[tokio::test]
async fn returns_empty_for_no_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let page = repo.get_paginated(&page_param(1, 10)).await?;

    assert!(page.items().is_empty());
    assert_eq!(page.total_count(), 0);
    assert_eq!(page.total_pages(), 0);

    Ok(())
}

/// Tests the genre filter.
///
/// Verifies exact, case-insensitive genre matching, and that the total count
/// reflects the filtered result set.
///
/// Expected: Ok with only the matching authors
#[tokio::test]
async fn filters_by_genre_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    repo.insert(author_param("Mary", "Shelley", 1797, "Horror")).await?;
    repo.insert(author_param("Bram", "Stoker", 1847, "Horror")).await?;
    repo.insert(author_param("Jane", "Austen", 1775, "Romance")).await?;

    let mut param = page_param(1, 10);
    param.genre = Some("horror".to_string());

    let page = repo.get_paginated(&param).await?;

    assert_eq!(page.total_count(), 2);
    assert!(page.items().iter().all(|author| author.genre == "Horror"));

    Ok(())
}

/// Tests the search filter.
///
/// Verifies that the search query matches substrings of the first name, last
/// name, and genre, ignoring case.
///
/// Expected: Ok with only the matching authors
#[tokio::test]
async fn search_matches_names_and_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    repo.insert(author_param("Ursula", "Le Guin", 1929, "Science fiction")).await?;
    repo.insert(author_param("Frank", "Herbert", 1920, "Science fiction")).await?;
    repo.insert(author_param("Jane", "Austen", 1775, "Romance")).await?;

    let mut by_last_name = page_param(1, 10);
    by_last_name.search_query = Some("GUIN".to_string());
    let page = repo.get_paginated(&by_last_name).await?;
    assert_eq!(page.total_count(), 1);
    assert_eq!(page.items()[0].last_name, "Le Guin");

    let mut by_genre = page_param(1, 10);
    by_genre.search_query = Some("science".to_string());
    let page = repo.get_paginated(&by_genre).await?;
    assert_eq!(page.total_count(), 2);

    Ok(())
}

/// Tests multi-step name ordering.
///
/// Verifies that ordering steps apply left to right: first name first, last
/// name breaking ties.
///
/// Expected: Ok with authors in resolved name order
#[tokio::test]
async fn applies_ordering_steps_in_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    repo.insert(author_param("John", "Wyndham", 1903, "Science fiction")).await?;
    repo.insert(author_param("Arthur", "Doyle", 1859, "Crime")).await?;
    repo.insert(author_param("Arthur", "Clarke", 1917, "Science fiction")).await?;

    let mut param = page_param(1, 10);
    param.ordering = vec![
        OrderingStep {
            target_field: "first_name",
            direction: SortDirection::Ascending,
        },
        OrderingStep {
            target_field: "last_name",
            direction: SortDirection::Ascending,
        },
    ];

    let page = repo.get_paginated(&param).await?;

    let names: Vec<String> = page
        .items()
        .iter()
        .map(|author| format!("{} {}", author.first_name, author.last_name))
        .collect();
    assert_eq!(names, vec!["Arthur Clarke", "Arthur Doyle", "John Wyndham"]);

    Ok(())
}

/// Tests the reverted ordering an `age` sort resolves to.
///
/// Ascending age means youngest first, which the mapping registry resolves
/// to descending date of birth; the repository must honor that physical
/// direction.
///
/// Expected: Ok with the youngest author first
#[tokio::test]
async fn reverted_date_ordering_puts_youngest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    repo.insert(author_param("Old", "Author", 1900, "Fantasy")).await?;
    repo.insert(author_param("Young", "Author", 1980, "Fantasy")).await?;
    repo.insert(author_param("Middle", "Author", 1940, "Fantasy")).await?;

    let mut param = page_param(1, 10);
    param.ordering = vec![OrderingStep {
        target_field: "date_of_birth",
        direction: SortDirection::Descending,
    }];

    let page = repo.get_paginated(&param).await?;

    let first_names: Vec<&str> = page
        .items()
        .iter()
        .map(|author| author.first_name.as_str())
        .collect();
    assert_eq!(first_names, vec!["Young", "Middle", "Old"]);

    Ok(())
}

/// Tests rejection of an unsortable target field.
///
/// Expected: Err naming the unknown column
#[tokio::test]
async fn unknown_ordering_column_is_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    let mut param = page_param(1, 10);
    param.ordering = vec![OrderingStep {
        target_field: "publisher",
        direction: SortDirection::Ascending,
    }];

    let result = repo.get_paginated(&param).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
