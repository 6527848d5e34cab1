use super::*;

/// Tests updating only some profile fields.
///
/// Verifies that provided fields change, omitted fields keep their value and
/// `updated_at` moves forward.
///
/// Expected: Ok(Some) with the merged profile
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Old Name")
        .profile(None, Some("0901234567".to_string()), None)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update_profile(UpdateProfileParam {
            id: created.id,
            name: Some("New Name".to_string()),
            address: Some("Hà Nội".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(user.name, "New Name");
    assert_eq!(user.address.as_deref(), Some("Hà Nội"));
    assert_eq!(user.phone.as_deref(), Some("0901234567"));
    assert_eq!(user.avatar, None);
    assert!(user.updated_at >= created.updated_at);
    assert_eq!(user.created_at, created.created_at);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateProfileParam {
            id: uuid::Uuid::new_v4(),
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that soft-deleted users cannot be edited.
///
/// Expected: Ok(None) and the row keeps its name
#[tokio::test]
async fn ignores_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::create_soft_deleted_user(db, "gone@example.com").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateProfileParam {
            id: deleted.id,
            name: Some("Changed".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
