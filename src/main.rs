mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, router, service::content::ContentService, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let content = ContentService::new(
            http_client,
            config.content_api_url.clone(),
            config.content_revalidate,
        );
        content.clone().install();
        let state = AppState::new(db, content);

        tracing::info!("Starting server");
        tracing::info!("Content API at {}", config.content_api_url);

        startup::spawn_api_server(&config, state.clone()).await?;

        let mut router = dioxus::server::router(App);
        let content_routes = router::content_router().with_state(state);
        router = router.merge(content_routes);

        Ok(router)
    })
}
