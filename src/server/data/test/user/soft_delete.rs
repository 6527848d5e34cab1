use super::*;
use sea_orm::EntityTrait;

/// Tests soft-deleting a live user.
///
/// Verifies that the row stays in the table with `deleted_at` set and the
/// account deactivated.
///
/// Expected: Ok(true) and the user hidden from lookups
#[tokio::test]
async fn soft_deletes_live_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.soft_delete(created.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(created.id).await?.is_none());

    let row = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.deleted_at.is_some());
    assert!(!row.is_active);

    Ok(())
}

/// Tests soft-deleting a user twice.
///
/// Expected: second call returns Ok(false) and keeps the original timestamp
#[tokio::test]
async fn second_delete_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.soft_delete(created.id).await?);

    let first = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap()
        .deleted_at;

    assert!(!repo.soft_delete(created.id).await?);

    let second = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap()
        .deleted_at;
    assert_eq!(first, second);

    Ok(())
}

/// Tests soft-deleting an id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_user_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.soft_delete(uuid::Uuid::new_v4()).await?);

    Ok(())
}
