use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some) with matching email
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user_with_email(db, "found@example.com").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().email, "found@example.com");

    Ok(())
}

/// Tests finding a user id that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(uuid::Uuid::new_v4()).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that soft-deleted users are hidden.
///
/// Expected: Ok(None) even though the row exists
#[tokio::test]
async fn hides_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::create_soft_deleted_user(db, "hidden@example.com").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(deleted.id).await?;

    assert!(user.is_none());

    Ok(())
}
