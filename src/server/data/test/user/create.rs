use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository assigns an id, marks the account active and
/// stamps both timestamps.
///
/// Expected: Ok with an active, non-deleted user
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("reader@example.com")).await?;

    assert_eq!(user.email, "reader@example.com");
    assert_eq!(user.name, "Reader");
    assert!(user.is_active);
    assert!(!user.is_deleted());
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests that the password hash never reaches the DTO.
///
/// Expected: DTO carries id and profile, serialized JSON has no password key
#[tokio::test]
async fn dto_omits_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("dto@example.com")).await?;
    let id = user.id.to_string();

    let json = serde_json::to_value(user.into_dto()).unwrap();

    assert_eq!(json["id"], id);
    assert!(json.get("password").is_none());

    Ok(())
}

/// Tests creating a user with an email that is already taken.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_email(db, "taken@example.com").await?;

    let repo = UserRepository::new(db);
    let result = repo.create(create_param("taken@example.com")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests reusing the email of a soft-deleted user.
///
/// Verifies that soft deletion does not free the unique email slot.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_email_of_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_soft_deleted_user(db, "gone@example.com").await?;

    let repo = UserRepository::new(db);
    let result = repo.create(create_param("gone@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
