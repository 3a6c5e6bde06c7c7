use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::product_dao::product_from_entity;
use crate::{
    entity::{
        cart_products::{ActiveModel, Column, Entity as CartProducts, Model as CartProductModel},
        products::{Column as ProductCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{CartProduct, Product},
};

#[derive(Clone)]
pub struct CartProductDao {
    orm: DatabaseConnection,
}

impl CartProductDao {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }

    pub async fn add(&self, cart_id: Uuid, product_id: Uuid) -> AppResult<CartProduct> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            cart_id: Set(cart_id),
            product_id: Set(product_id),
            created_at: Set(super::now()),
        };
        let link = active.insert(&self.orm).await?;
        tracing::debug!(id = %link.id, %cart_id, %product_id, "dao: cart product inserted");
        Ok(cart_product_from_entity(link))
    }

    pub async fn find_all(&self) -> AppResult<Vec<CartProduct>> {
        let links = CartProducts::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(cart_product_from_entity)
            .collect();
        Ok(links)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CartProduct>> {
        let link = CartProducts::find_by_id(id).one(&self.orm).await?;
        Ok(link.map(cart_product_from_entity))
    }

    pub async fn find_by_cart_id(&self, cart_id: Uuid) -> AppResult<Vec<CartProduct>> {
        let links = CartProducts::find()
            .filter(Column::CartId.eq(cart_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(cart_product_from_entity)
            .collect();
        Ok(links)
    }

    /// Products linked to a cart, resolved in two queries: the junction rows
    /// first, then the products whose ids they reference. A product linked
    /// several times is returned once.
    pub async fn find_products_by_cart_id(&self, cart_id: Uuid) -> AppResult<Vec<Product>> {
        let mut product_ids: Vec<Uuid> = self
            .find_by_cart_id(cart_id)
            .await?
            .into_iter()
            .map(|link| link.product_id)
            .collect();
        product_ids.sort_unstable();
        product_ids.dedup();
        tracing::debug!(%cart_id, products = product_ids.len(), "dao: resolving cart products");

        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let products = Products::find()
            .filter(ProductCol::Id.is_in(product_ids))
            .order_by_asc(ProductCol::Name)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(products)
    }

    /// Replaces both references of an existing link; unknown ids are `NotFound`.
    pub async fn update(&self, link: &CartProduct) -> AppResult<CartProduct> {
        tracing::debug!(id = %link.id, "dao: update cart product");
        let active = ActiveModel {
            id: Set(link.id),
            cart_id: Set(link.cart_id),
            product_id: Set(link.product_id),
            created_at: NotSet,
        };
        let updated = active.update(&self.orm).await.map_err(AppError::from_update)?;
        Ok(cart_product_from_entity(updated))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        tracing::debug!(%id, "dao: delete cart product");
        let result = CartProducts::delete_by_id(id).exec(&self.orm).await?;
        Ok(result.rows_affected > 0)
    }
}

fn cart_product_from_entity(model: CartProductModel) -> CartProduct {
    CartProduct {
        id: model.id,
        cart_id: model.cart_id,
        product_id: model.product_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
