use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    dto::products::CreateProductRequest,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::Product,
};

#[derive(Clone)]
pub struct ProductDao {
    orm: DatabaseConnection,
}

impl ProductDao {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }

    pub async fn add(&self, payload: &CreateProductRequest) -> AppResult<Product> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name.clone()),
            category_id: Set(payload.category_id),
            description: Set(payload.description.clone()),
            price: Set(payload.price),
            image: Set(payload.image.clone()),
            weight: Set(payload.weight),
            quantity: Set(payload.quantity),
            created_at: Set(super::now()),
        };
        let product = active.insert(&self.orm).await?;
        tracing::debug!(id = %product.id, "dao: product inserted");
        Ok(product_from_entity(product))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Product>> {
        let products = Products::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(products)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let product = Products::find_by_id(id).one(&self.orm).await?;
        Ok(product.map(product_from_entity))
    }

    pub async fn find_by_category_id(&self, category_id: Uuid) -> AppResult<Vec<Product>> {
        let products = Products::find()
            .filter(Column::CategoryId.eq(category_id))
            .order_by_asc(Column::Name)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(products)
    }

    /// Replaces every field of an existing product; unknown ids are `NotFound`.
    pub async fn update(&self, product: &Product) -> AppResult<Product> {
        tracing::debug!(id = %product.id, "dao: update product");
        let active = ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            category_id: Set(product.category_id),
            description: Set(product.description.clone()),
            price: Set(product.price),
            image: Set(product.image.clone()),
            weight: Set(product.weight),
            quantity: Set(product.quantity),
            created_at: NotSet,
        };
        let updated = active.update(&self.orm).await.map_err(AppError::from_update)?;
        Ok(product_from_entity(updated))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        tracing::debug!(%id, "dao: delete product");
        let result = Products::delete_by_id(id).exec(&self.orm).await?;
        Ok(result.rows_affected > 0)
    }
}

pub(super) fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        category_id: model.category_id,
        description: model.description,
        price: model.price,
        image: model.image,
        weight: model.weight,
        quantity: model.quantity,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
