use super::*;

/// Tests creating a contact without group memberships.
///
/// Verifies that the repository stores every field and returns a contact with no
/// group names.
///
/// Expected: Ok with contact created
#[tokio::test]
async fn creates_contact_without_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactRepository::new(db);
    let contact = repo.create(contact_params("John", "Doe"), &[]).await?;

    assert_eq!(contact.first_name, "John");
    assert_eq!(contact.last_name, "Doe");
    assert_eq!(contact.phone_number, "1234567890");
    assert_eq!(contact.email, "someone@example.com");
    assert!(contact.group_names.is_empty());

    let count = entity::prelude::Contact::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests creating a contact that joins existing groups.
///
/// Verifies that one join row is written per group and the returned contact lists
/// the group names.
///
/// Expected: Ok with contact and memberships created
#[tokio::test]
async fn creates_contact_with_group_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::group::GroupFactory::new(db).name("Family").build().await?;
    let work = factory::group::GroupFactory::new(db).name("Work").build().await?;

    let repo = ContactRepository::new(db);
    let contact = repo
        .create(contact_params("John", "Doe"), &[work.id, family.id])
        .await?;

    assert_eq!(contact.group_names, vec!["Family", "Work"]);

    let memberships = entity::prelude::ContactGroup::find().count(db).await?;
    assert_eq!(memberships, 2);

    Ok(())
}

/// Tests that a failed membership insert rolls back the contact row.
///
/// Verifies that referencing a group id that does not exist fails the whole write
/// and leaves neither the contact nor any join row behind.
///
/// Expected: Err and no rows persisted
#[tokio::test]
async fn rolls_back_contact_when_membership_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = ContactRepository::new(db);
    // Same group twice violates the composite primary key of the join table
    let result = repo
        .create(contact_params("John", "Doe"), &[group.id, group.id])
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Contact::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ContactGroup::find().count(db).await?, 0);

    Ok(())
}

/// Tests the unique index on the contact's name pair.
///
/// Verifies that storing a second contact with the same first and last name fails
/// with a unique constraint violation.
///
/// Expected: Err(UniqueConstraintViolation)
#[tokio::test]
async fn rejects_duplicate_name_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_book_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactRepository::new(db);
    repo.create(contact_params("John", "Doe"), &[]).await?;
    let result = repo.create(contact_params("John", "Doe"), &[]).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
