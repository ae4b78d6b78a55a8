use super::*;

/// Tests finding a contact by its name pair.
///
/// Verifies that the contact is returned together with the names of its groups.
///
/// Expected: Ok(Some) with group names populated
#[tokio::test]
async fn finds_contact_with_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, contact) = factory::helpers::create_contact_in_group(db).await?;

    let repo = ContactRepository::new(db);
    let found = repo
        .find_by_name(&contact.first_name, &contact.last_name)
        .await?
        .unwrap();

    assert_eq!(found.id, contact.id);
    assert_eq!(found.group_names, vec![group.name]);

    Ok(())
}

/// Tests that both names must match.
///
/// Verifies that a contact sharing only the first name is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_last_name_differs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::contact::ContactFactory::new(db)
        .first_name("John")
        .last_name("Doe")
        .build()
        .await?;

    let repo = ContactRepository::new(db);
    let found = repo.find_by_name("John", "Smith").await?;

    assert!(found.is_none());

    Ok(())
}
