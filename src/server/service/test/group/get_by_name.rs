use super::*;

/// Tests reading a group with members.
///
/// Expected: Ok with the member listed
#[tokio::test]
async fn returns_group_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, contact) = factory::helpers::create_contact_in_group(db).await?;

    let service = GroupService::new(db);
    let found = service.get_by_name(&group.name).await.unwrap();

    assert_eq!(found.members.len(), 1);
    assert_eq!(found.members[0].first_name, contact.first_name);
    assert_eq!(found.members[0].last_name, contact.last_name);

    Ok(())
}

/// Tests reading a group that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let result = service.get_by_name("Family").await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Group: Family not found."),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests that the name is validated before lookup.
///
/// Expected: Err(InvalidArgument)
#[tokio::test]
async fn rejects_invalid_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let result = service.get_by_name("string").await;

    match result {
        Err(AppError::InvalidArgument(msg)) => assert_eq!(msg, "Enter a new valid Group name."),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }

    Ok(())
}
