use super::*;

/// Tests renaming a group.
///
/// Verifies that the name changes in place and memberships are kept.
///
/// Expected: Ok with renamed group and unchanged members
#[tokio::test]
async fn renames_group_keeping_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, _contact) = factory::helpers::create_contact_in_group(db).await?;

    let repo = GroupRepository::new(db);
    let renamed = repo.update(group.id, "Relatives".to_string()).await?;

    assert_eq!(renamed.id, group.id);
    assert_eq!(renamed.name, "Relatives");
    assert_eq!(renamed.members.len(), 1);
    assert!(repo.find_by_name(&group.name).await?.is_none());

    Ok(())
}

/// Tests renaming a group to a name held by another group.
///
/// Expected: Err(UniqueConstraintViolation)
#[tokio::test]
async fn rejects_rename_to_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).name("Family").build().await?;
    let work = factory::group::GroupFactory::new(db).name("Work").build().await?;

    let repo = GroupRepository::new(db);
    let err = repo
        .update(work.id, "Family".to_string())
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
