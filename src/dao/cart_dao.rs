use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity::carts::{ActiveModel, Column, Entity as Carts, Model as CartModel},
    error::{AppError, AppResult},
    models::Cart,
};

#[derive(Clone)]
pub struct CartDao {
    orm: DatabaseConnection,
}

impl CartDao {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }

    pub async fn add(&self, user_id: Option<Uuid>) -> AppResult<Cart> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            created_at: Set(super::now()),
        };
        let cart = active.insert(&self.orm).await?;
        tracing::debug!(id = %cart.id, "dao: cart inserted");
        Ok(cart_from_entity(cart))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Cart>> {
        let carts = Carts::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(cart_from_entity)
            .collect();
        Ok(carts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Cart>> {
        let cart = Carts::find_by_id(id).one(&self.orm).await?;
        Ok(cart.map(cart_from_entity))
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Vec<Cart>> {
        let carts = Carts::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(cart_from_entity)
            .collect();
        Ok(carts)
    }

    /// Replaces the owner of an existing cart; unknown ids are `NotFound`.
    pub async fn update(&self, cart: &Cart) -> AppResult<Cart> {
        tracing::debug!(id = %cart.id, "dao: update cart");
        let active = ActiveModel {
            id: Set(cart.id),
            user_id: Set(cart.user_id),
            created_at: NotSet,
        };
        let updated = active.update(&self.orm).await.map_err(AppError::from_update)?;
        Ok(cart_from_entity(updated))
    }

    /// Removing a cart also removes its product links.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        tracing::debug!(%id, "dao: delete cart");
        let result = Carts::delete_by_id(id).exec(&self.orm).await?;
        Ok(result.rows_affected > 0)
    }
}

fn cart_from_entity(model: CartModel) -> Cart {
    Cart {
        id: model.id,
        user_id: model.user_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
