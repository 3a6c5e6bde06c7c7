use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::users::{UpdateUserRequest, UserExists},
    error::{AppError, AppResult},
    models::{Cart, User},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/{id}/carts", get(list_user_carts))
        .route("/by-username/{username}", get(get_user_by_username))
        .route("/exists/{username}", get(user_exists))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List customers", body = ApiResponse<Vec<User>>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let users = state.users.get_users().await?;
    Ok(Json(ApiResponse::listing("Users", users)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = ApiResponse<User>),
        (status = 404, description = "Not Found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.users.get_user(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("User", user, None)))
}

#[utoipa::path(
    get,
    path = "/api/users/by-username/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User", body = ApiResponse<User>),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state
        .users
        .get_user_by_username(&username)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("User", user, None)))
}

#[utoipa::path(
    get,
    path = "/api/users/exists/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Whether the username is registered", body = ApiResponse<UserExists>)
    ),
    tag = "Users"
)]
pub async fn user_exists(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<ApiResponse<UserExists>>> {
    let exists = state.users.check_user_exists(&username).await?;
    Ok(Json(ApiResponse::success(
        "OK",
        UserExists { username, exists },
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<User>),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Username taken")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.users.update_user(id, payload).await?;
    Ok(Json(ApiResponse::success("Updated", user, None)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Not Found")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if !state.users.delete_user(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/carts",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Carts owned by the user", body = ApiResponse<Vec<Cart>>)
    ),
    tag = "Users"
)]
pub async fn list_user_carts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<Cart>>>> {
    let carts = state.carts.get_carts_by_user(id).await?;
    Ok(Json(ApiResponse::listing("Carts", carts)))
}
