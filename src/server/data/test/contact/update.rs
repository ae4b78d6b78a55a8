use super::*;

/// Tests overwriting a contact's mutable fields and memberships.
///
/// Verifies that phone number and email are replaced, the old group membership is
/// dropped and the new one is written, while the names stay unchanged.
///
/// Expected: Ok with updated contact
#[tokio::test]
async fn replaces_fields_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_old_group, contact) = factory::helpers::create_contact_in_group(db).await?;
    let work = factory::group::GroupFactory::new(db).name("Work").build().await?;

    let repo = ContactRepository::new(db);
    let mut params = contact_params("Ignored", "Ignored");
    params.phone_number = "0987654321".to_string();
    params.email = "new@example.com".to_string();

    let updated = repo.update(contact.id, params, &[work.id]).await?;

    assert_eq!(updated.first_name, contact.first_name);
    assert_eq!(updated.last_name, contact.last_name);
    assert_eq!(updated.phone_number, "0987654321");
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.group_names, vec!["Work"]);

    let memberships = entity::prelude::ContactGroup::find().count(db).await?;
    assert_eq!(memberships, 1);

    Ok(())
}

/// Tests clearing every membership of a contact.
///
/// Expected: Ok with no group names and no join rows
#[tokio::test]
async fn clears_memberships_with_empty_group_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, contact) = factory::helpers::create_contact_in_group(db).await?;

    let repo = ContactRepository::new(db);
    let updated = repo
        .update(contact.id, contact_params("John", "Doe"), &[])
        .await?;

    assert!(updated.group_names.is_empty());
    assert_eq!(entity::prelude::ContactGroup::find().count(db).await?, 0);
    // The group itself survives
    assert!(entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
