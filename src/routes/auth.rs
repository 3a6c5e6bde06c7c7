use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    dto::users::{LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    models::User,
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Register user", body = ApiResponse<User>),
        (status = 409, description = "Username taken")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    if state.users.check_user_exists(&payload.username).await? {
        return Err(AppError::DuplicateUser(payload.username));
    }
    let user = state.users.add_user(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created", user, None)),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user", body = ApiResponse<User>),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state
        .users
        .check_login(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest("Invalid username or password. Please try again.".into())
        })?;
    Ok(Json(ApiResponse::success("Logged in", user, None)))
}
