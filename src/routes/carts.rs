use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::carts::{AddCartProductRequest, CartRequest, UpdateCartProductRequest},
    error::{AppError, AppResult},
    models::{Cart, CartProduct, Product},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_carts).post(create_cart))
        .route("/{id}", get(get_cart).put(update_cart).delete(delete_cart))
        .route("/{id}/products", get(list_cart_products).post(add_cart_product))
}

pub fn cart_products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_links))
        .route("/{id}", put(update_link).delete(delete_link))
}

#[utoipa::path(
    get,
    path = "/api/carts",
    responses(
        (status = 200, description = "List carts", body = ApiResponse<Vec<Cart>>)
    ),
    tag = "Carts"
)]
pub async fn list_carts(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Cart>>>> {
    let carts = state.carts.get_carts().await?;
    Ok(Json(ApiResponse::listing("Carts", carts)))
}

#[utoipa::path(
    post,
    path = "/api/carts",
    request_body = CartRequest,
    responses(
        (status = 201, description = "Cart created", body = ApiResponse<Cart>),
        (status = 400, description = "Unknown owner")
    ),
    tag = "Carts"
)]
pub async fn create_cart(
    State(state): State<AppState>,
    Json(payload): Json<CartRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Cart>>)> {
    let cart = state.carts.add_cart(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Cart created", cart, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/carts/{id}",
    params(("id" = Uuid, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart", body = ApiResponse<Cart>),
        (status = 404, description = "Not Found")
    ),
    tag = "Carts"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let cart = state.carts.get_cart(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Cart", cart, None)))
}

#[utoipa::path(
    put,
    path = "/api/carts/{id}",
    params(("id" = Uuid, Path, description = "Cart ID")),
    request_body = CartRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<Cart>),
        (status = 404, description = "Not Found")
    ),
    tag = "Carts"
)]
pub async fn update_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CartRequest>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let cart = state.carts.update_cart(id, payload).await?;
    Ok(Json(ApiResponse::success("Updated", cart, None)))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{id}",
    params(("id" = Uuid, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Not Found")
    ),
    tag = "Carts"
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if !state.carts.delete_cart(id).await? {
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
    path = "/api/carts/{id}/products",
    params(("id" = Uuid, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Products in the cart", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Carts"
)]
pub async fn list_cart_products(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = state.carts.get_products_by_cart_id(id).await?;
    Ok(Json(ApiResponse::listing("OK", products)))
}

#[utoipa::path(
    post,
    path = "/api/carts/{id}/products",
    params(("id" = Uuid, Path, description = "Cart ID")),
    request_body = AddCartProductRequest,
    responses(
        (status = 201, description = "Product added to cart", body = ApiResponse<CartProduct>),
        (status = 400, description = "Unknown cart or product")
    ),
    tag = "Carts"
)]
pub async fn add_cart_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddCartProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CartProduct>>)> {
    let link = state.carts.add_cart_product(id, payload.product_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("OK", link, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/cart-products",
    responses(
        (status = 200, description = "List cart/product links", body = ApiResponse<Vec<CartProduct>>)
    ),
    tag = "Carts"
)]
pub async fn list_links(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CartProduct>>>> {
    let links = state.carts.get_cart_products().await?;
    Ok(Json(ApiResponse::listing("OK", links)))
}

#[utoipa::path(
    put,
    path = "/api/cart-products/{id}",
    params(("id" = Uuid, Path, description = "Cart product ID")),
    request_body = UpdateCartProductRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<CartProduct>),
        (status = 400, description = "Unknown cart or product"),
        (status = 404, description = "Not Found")
    ),
    tag = "Carts"
)]
pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCartProductRequest>,
) -> AppResult<Json<ApiResponse<CartProduct>>> {
    let link = state.carts.update_cart_product(id, payload).await?;
    Ok(Json(ApiResponse::success("Updated", link, None)))
}

#[utoipa::path(
    delete,
    path = "/api/cart-products/{id}",
    params(("id" = Uuid, Path, description = "Cart product ID")),
    responses(
        (status = 200, description = "Removed from cart", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Not Found")
    ),
    tag = "Carts"
)]
pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if !state.carts.delete_cart_product(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
