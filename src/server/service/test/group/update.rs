use super::*;

/// Tests renaming a group.
///
/// Verifies that members follow the group to its new name.
///
/// Expected: Ok with renamed group
#[tokio::test]
async fn renames_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, _contact) = factory::helpers::create_contact_in_group(db).await?;

    let service = GroupService::new(db);
    let renamed = service
        .update(update_params(&group.name, "Relatives"))
        .await
        .unwrap();

    assert_eq!(renamed.name, "Relatives");
    assert_eq!(renamed.members.len(), 1);
    assert!(matches!(
        service.get_by_name(&group.name).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests renaming a group to its own name.
///
/// Expected: Ok with the name unchanged
#[tokio::test]
async fn allows_rename_to_same_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).name("Family").build().await?;

    let service = GroupService::new(db);
    let group = service
        .update(update_params("Family", "Family"))
        .await
        .unwrap();

    assert_eq!(group.name, "Family");

    Ok(())
}

/// Tests updating a group that does not exist.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let result = service.update(update_params("Family", "Relatives")).await;

    match result {
        Err(AppError::Conflict(msg)) => assert_eq!(
            msg,
            "Group: Family does not exist. Enter existing Group Name to update."
        ),
        other => panic!("expected Conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests renaming onto a name held by another group.
///
/// Expected: Err(Conflict) and both groups unchanged
#[tokio::test]
async fn rejects_rename_to_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).name("Family").build().await?;
    factory::group::GroupFactory::new(db).name("Work").build().await?;

    let service = GroupService::new(db);
    let result = service.update(update_params("Work", "Family")).await;

    match result {
        Err(AppError::Conflict(msg)) => assert_eq!(
            msg,
            "Group 'Family' already exists. Enter new Group Name to update."
        ),
        other => panic!("expected Conflict, got {:?}", other),
    }
    assert!(service.get_by_name("Work").await.is_ok());

    Ok(())
}

/// Tests validating the new name after the existence check.
///
/// Expected: Err(InvalidArgument)
#[tokio::test]
async fn rejects_invalid_new_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).name("Family").build().await?;

    let service = GroupService::new(db);
    let result = service.update(update_params("Family", "x")).await;

    match result {
        Err(AppError::InvalidArgument(msg)) => {
            assert_eq!(msg, "Group name must be at least 2 characters long.")
        }
        other => panic!("expected InvalidArgument, got {:?}", other),
    }

    Ok(())
}
