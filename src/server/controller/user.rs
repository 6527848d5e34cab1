use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::AppError, model::user::GetUserParam, service::user::UserService, state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// GET /users/{id} - Get a user account by id
///
/// Soft-deleted accounts are reported as missing.
///
/// # Returns
/// - `200 OK`: UserDto without the password hash
/// - `400 Bad Request`: `id` is not a UUID
/// - `404 Not Found`: No live user with that id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User UUID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Malformed user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::BadRequest(format!("Invalid user id: {}", id)))?;

    let user = UserService::new(&state.db)
        .get_user(GetUserParam { id })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
