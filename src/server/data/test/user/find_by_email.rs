use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for the matching user only
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_email(db, "first@example.com").await?;
    let second = factory::create_user_with_email(db, "second@example.com").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("second@example.com").await?;

    assert_eq!(user.map(|u| u.id), Some(second.id));

    Ok(())
}

/// Tests looking up an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that soft-deleted users are not found by email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_soft_deleted_user(db, "gone@example.com").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("gone@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
