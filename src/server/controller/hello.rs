use axum::extract::Query;
use serde::Deserialize;
use utoipa::IntoParams;

pub static HELLO_TAG: &str = "hello";

#[derive(Deserialize, IntoParams)]
pub struct WelcomeParam {
    /// Name to greet, embedded verbatim.
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = HELLO_TAG,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_hello() -> &'static str {
    "Hello World!"
}

#[utoipa::path(
    get,
    path = "/welcome",
    tag = HELLO_TAG,
    params(WelcomeParam),
    responses(
        (status = 200, description = "Personal welcome message", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing name parameter")
    ),
)]
pub async fn get_welcome(Query(param): Query<WelcomeParam>) -> String {
    format!("Welcome to project, {}!", param.name)
}
