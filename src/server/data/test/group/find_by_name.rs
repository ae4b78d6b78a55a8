use super::*;

/// Tests finding a group together with its members.
///
/// Expected: Ok(Some) with members ordered by first name
#[tokio::test]
async fn finds_group_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::GroupFactory::new(db).name("Family").build().await?;
    for first_name in ["Zoe", "Amy"] {
        let contact = factory::contact::ContactFactory::new(db)
            .first_name(first_name)
            .build()
            .await?;
        factory::add_to_group(db, contact.id, group.id).await?;
    }

    let repo = GroupRepository::new(db);
    let found = repo.find_by_name("Family").await?.unwrap();

    assert_eq!(found.id, group.id);
    assert_eq!(found.members.len(), 2);
    assert_eq!(found.members[0].first_name, "Amy");
    assert_eq!(found.members[1].first_name, "Zoe");

    Ok(())
}

/// Tests looking up a name that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).name("Family").build().await?;

    let repo = GroupRepository::new(db);
    let found = repo.find_by_name("Friends").await?;

    assert!(found.is_none());

    Ok(())
}
