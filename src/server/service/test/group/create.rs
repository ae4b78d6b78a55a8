use super::*;

/// Tests creating a group and then creating it again.
///
/// Verifies that the first create stores the group with no members, the second one
/// is rejected, and the stored group reads back with an empty member list.
///
/// Expected: Ok, then Err(Conflict)
#[tokio::test]
async fn creates_group_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);

    let group = service.create(create_params("Family")).await.unwrap();
    assert_eq!(group.name, "Family");

    let result = service.create(create_params("Family")).await;
    match result {
        Err(AppError::Conflict(msg)) => assert_eq!(
            msg,
            "Group 'Family' already exists. Enter new Group Name to add."
        ),
        other => panic!("expected Conflict, got {:?}", other),
    }

    let found = service.get_by_name("Family").await.unwrap();
    assert!(found.members.is_empty());

    Ok(())
}

/// Tests rejecting a name with punctuation.
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
    let result = service.create(create_params("Friends & Family")).await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));

    Ok(())
}
