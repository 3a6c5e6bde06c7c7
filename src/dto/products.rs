use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub price: i64,
    pub image: Option<String>,
    pub weight: i32,
    pub quantity: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub weight: Option<i32>,
    pub quantity: Option<i32>,
}
