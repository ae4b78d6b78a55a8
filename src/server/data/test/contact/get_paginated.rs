use super::*;

/// Tests that contacts are ordered by first name.
///
/// Verifies that insertion order does not affect the listing order.
///
/// Expected: Ok with contacts sorted alphabetically by first name
#[tokio::test]
async fn orders_contacts_by_first_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for first_name in ["Charlie", "Alice", "Bob"] {
        factory::contact::ContactFactory::new(db)
            .first_name(first_name)
            .build()
            .await?;
    }

    let repo = ContactRepository::new(db);
    let contacts = repo.get_paginated(1, 10).await?;

    let names: Vec<&str> = contacts.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}

/// Tests offset and limit of a later page.
///
/// Verifies that page 2 with size 1 over two contacts returns the second contact
/// alphabetically.
///
/// Expected: Ok with exactly the second contact
#[tokio::test]
async fn returns_second_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for first_name in ["Zara", "Adam"] {
        factory::contact::ContactFactory::new(db)
            .first_name(first_name)
            .build()
            .await?;
    }

    let repo = ContactRepository::new(db);
    let contacts = repo.get_paginated(2, 1).await?;

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].first_name, "Zara");

    Ok(())
}

/// Tests that each listed contact carries its own groups.
///
/// Verifies that memberships are attributed to the right contact when several
/// contacts are loaded at once.
///
/// Expected: Ok with per-contact group names
#[tokio::test]
async fn loads_groups_per_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::group::GroupFactory::new(db).name("Family").build().await?;
    let alice = factory::contact::ContactFactory::new(db)
        .first_name("Alice")
        .build()
        .await?;
    factory::contact::ContactFactory::new(db)
        .first_name("Bob")
        .build()
        .await?;
    factory::add_to_group(db, alice.id, family.id).await?;

    let repo = ContactRepository::new(db);
    let contacts = repo.get_paginated(1, 10).await?;

    assert_eq!(contacts[0].group_names, vec!["Family"]);
    assert!(contacts[1].group_names.is_empty());

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_past_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_contact(db).await?;

    let repo = ContactRepository::new(db);
    let contacts = repo.get_paginated(3, 10).await?;

    assert!(contacts.is_empty());

    Ok(())
}

/// Tests a page number whose offset exceeds what the database can bind.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_page_past_offset_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_contact(db).await?;

    let repo = ContactRepository::new(db);
    let contacts = repo.get_paginated(1_000_000_000_000_000_000, 10).await?;

    assert!(contacts.is_empty());

    Ok(())
}

/// Tests a page size larger than the database can bind.
///
/// Expected: Ok with every contact on the first page
#[tokio::test]
async fn returns_all_contacts_for_oversized_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_entity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_contact(db).await?;
    factory::create_contact(db).await?;

    let repo = ContactRepository::new(db);
    let contacts = repo.get_paginated(1, u64::MAX).await?;

    assert_eq!(contacts.len(), 2);

    Ok(())
}
