#![allow(dead_code)]

use storefront_api::{
    db::{create_orm_conn, sync_schema},
    dto::{products::CreateProductRequest, users::RegisterRequest},
    models::{Category, Product},
    state::AppState,
};
use uuid::Uuid;

/// Fresh in-memory database with every table created.
///
/// A single pooled connection keeps the in-memory database alive for the
/// whole test.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    sync_schema(&orm).await?;
    Ok(AppState::new(orm))
}

pub fn register_request(username: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        email: format!("{username}@example.com"),
        address: "1 Market Street".to_string(),
    }
}

pub fn product_request(name: &str, category_id: Uuid) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        category_id,
        description: Some(format!("{name} description")),
        price: 1200,
        image: Some(format!("{}.png", name.to_lowercase())),
        weight: 250,
        quantity: 10,
    }
}

pub async fn create_category(state: &AppState, name: &str) -> anyhow::Result<Category> {
    Ok(state.categories.add_category(name).await?)
}

pub async fn create_product(
    state: &AppState,
    name: &str,
    category_id: Uuid,
) -> anyhow::Result<Product> {
    Ok(state
        .products
        .add_product(product_request(name, category_id))
        .await?)
}
