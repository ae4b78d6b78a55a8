use super::*;

/// Tests rejecting a page number below 1.
///
/// Expected: Err(InvalidArgument)
#[tokio::test]
async fn rejects_page_number_below_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let result = service.get_paginated(0, 10).await;

    match result {
        Err(AppError::InvalidArgument(msg)) => {
            assert_eq!(msg, "Page number must be greater than zero.")
        }
        other => panic!("expected InvalidArgument, got {:?}", other),
    }

    Ok(())
}

/// Tests listing groups with default paging.
///
/// Expected: Ok with groups ordered by name
#[tokio::test]
async fn lists_groups_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Work", "Family"] {
        factory::group::GroupFactory::new(db).name(name).build().await?;
    }

    let service = GroupService::new(db);
    let groups = service.get_paginated(1, 10).await.unwrap();

    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Family", "Work"]);

    Ok(())
}
