use super::*;

/// Tests creating a new group.
///
/// Verifies that the group is stored and returned without members.
///
/// Expected: Ok with group created
#[tokio::test]
async fn creates_group_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParams {
            name: "Family".to_string(),
        })
        .await?;

    assert_eq!(group.name, "Family");
    assert!(group.members.is_empty());
    assert_eq!(entity::prelude::Group::find().count(db).await?, 1);

    Ok(())
}

/// Tests the unique index on group names.
///
/// Expected: Err(UniqueConstraintViolation)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).name("Family").build().await?;

    let repo = GroupRepository::new(db);
    let result = repo
        .create(CreateGroupParams {
            name: "Family".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
