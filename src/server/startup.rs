use std::time::Duration;

use dioxus_logger::tracing;

use crate::server::{config::Config, error::AppError, router, state::AppState};

/// Timeout applied to every request against the content API.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool using the connection string assembled from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// database schema is up-to-date. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(config.database_url());
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for the content API.
///
/// Redirects are not followed and every request is bounded by a timeout so a slow
/// upstream cannot hold a page render open.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Binds the REST API listener and serves it in a background task.
///
/// The listener is bound before returning so an occupied port fails startup instead
/// of only being logged.
///
/// # Returns
/// - `Ok(())` - Listener bound and serving
/// - `Err(AppError::IoErr)` - Failed to bind the configured port
pub async fn spawn_api_server(config: &Config, state: AppState) -> Result<(), AppError> {
    let addr = config.api_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let app = router::api_router().with_state(state);

    tracing::info!("REST API listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/api", addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("REST API server error: {}", e);
        }
    });

    Ok(())
}
