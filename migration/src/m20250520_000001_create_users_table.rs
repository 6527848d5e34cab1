use sea_orm_migration::{prelude::*, schema::*};

/// Name of the lookup index on `users.email`.
pub const USERS_EMAIL_INDEX: &str = "IDX_USERS_EMAIL";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_uuid(Users::Id))
                    .col(string_len(Users::Name, 255))
                    .col(string_len_uniq(Users::Email, 255))
                    .col(string_len(Users::Password, 255))
                    .col(boolean(Users::IsActive).default(true))
                    .col(timestamp(Users::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Users::UpdatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_null(Users::DeletedAt))
                    .col(string_len_null(Users::Avatar, 255))
                    .col(string_len_null(Users::Phone, 255))
                    .col(string_len_null(Users::Address, 255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(USERS_EMAIL_INDEX)
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(USERS_EMAIL_INDEX)
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    Email,
    Password,
    #[sea_orm(iden = "isActive")]
    IsActive,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
    #[sea_orm(iden = "deletedAt")]
    DeletedAt,
    Avatar,
    Phone,
    Address,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Migrator;
    use sea_orm_migration::sea_orm::{ConnectionTrait, Database, DatabaseConnection};

    async fn connect() -> Result<DatabaseConnection, DbErr> {
        Database::connect("sqlite::memory:").await
    }

    /// Inserts a user row directly, optionally already soft-deleted.
    async fn insert_user(
        db: &DatabaseConnection,
        id: &str,
        email: &str,
        deleted: bool,
    ) -> Result<(), DbErr> {
        let deleted_at = if deleted { "CURRENT_TIMESTAMP" } else { "NULL" };
        db.execute_unprepared(&format!(
            r#"INSERT INTO "users" ("id", "name", "email", "password", "deletedAt")
               VALUES ('{id}', 'Reader', '{email}', 'hash', {deleted_at})"#
        ))
        .await?;

        Ok(())
    }

    /// Tests that applying the migration creates the users table and its email index.
    ///
    /// Expected: table and named index exist after `up`
    #[tokio::test]
    async fn up_creates_users_table_and_email_index() -> Result<(), DbErr> {
        let db = connect().await?;
        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("users").await?);
        assert!(manager.has_column("users", "isActive").await?);
        assert!(manager.has_column("users", "deletedAt").await?);
        assert!(manager.has_index("users", USERS_EMAIL_INDEX).await?);

        Ok(())
    }

    /// Tests that rolling the migration back restores the pre-migration schema.
    ///
    /// Expected: no users table after `down`
    #[tokio::test]
    async fn down_drops_index_then_table() -> Result<(), DbErr> {
        let db = connect().await?;
        Migrator::up(&db, None).await?;
        Migrator::down(&db, None).await?;

        let manager = SchemaManager::new(&db);
        assert!(!manager.has_table("users").await?);

        Ok(())
    }

    /// Tests that the migrated schema rejects a second row with the same email.
    ///
    /// Expected: second insert fails
    #[tokio::test]
    async fn up_rejects_duplicate_email() -> Result<(), DbErr> {
        let db = connect().await?;
        Migrator::up(&db, None).await?;

        insert_user(&db, "00000000-0000-4000-8000-000000000001", "a@example.com", false).await?;
        let duplicate =
            insert_user(&db, "00000000-0000-4000-8000-000000000002", "a@example.com", false).await;

        assert!(duplicate.is_err());

        Ok(())
    }

    /// Tests that a soft-deleted row still holds its email in the migrated schema.
    ///
    /// Expected: inserting a live row with the deleted row's email fails
    #[tokio::test]
    async fn up_keeps_email_of_soft_deleted_row_unique() -> Result<(), DbErr> {
        let db = connect().await?;
        Migrator::up(&db, None).await?;

        insert_user(&db, "00000000-0000-4000-8000-000000000001", "gone@example.com", true).await?;
        let reuse =
            insert_user(&db, "00000000-0000-4000-8000-000000000002", "gone@example.com", false)
                .await;

        assert!(reuse.is_err());

        Ok(())
    }
}
