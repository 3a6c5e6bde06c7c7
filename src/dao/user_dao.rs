use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, sea_query::OnConflict,
};
use uuid::Uuid;

use crate::{
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::User,
};

#[derive(Clone)]
pub struct UserDao {
    orm: DatabaseConnection,
}

impl UserDao {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }

    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = Users::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(user_from_entity)
            .collect();
        Ok(users)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        tracing::debug!(%id, "dao: find user by id");
        let user = Users::find_by_id(id).one(&self.orm).await?;
        Ok(user.map(user_from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        tracing::debug!(username, "dao: find user by username");
        let user = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.orm)
            .await?;
        Ok(user.map(user_from_entity))
    }

    pub async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let count = Users::find()
            .filter(Column::Username.eq(username))
            .count(&self.orm)
            .await?;
        Ok(count > 0)
    }

    /// Writes the full record, inserting it under its id when no row has that id yet.
    ///
    /// `created_at` is only written on insert.
    pub async fn upsert(&self, user: &User) -> AppResult<User> {
        tracing::debug!(id = %user.id, username = %user.username, "dao: upsert user");
        let active = ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            email: Set(user.email.clone()),
            address: Set(user.address.clone()),
            role: Set(user.role.clone()),
            created_at: Set(user.created_at.fixed_offset()),
        };

        Users::insert(active)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Username,
                        Column::PasswordHash,
                        Column::Email,
                        Column::Address,
                        Column::Role,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.orm)
            .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("user {} vanished after upsert", user.id)))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        tracing::debug!(%id, "dao: delete user");
        let result = Users::delete_by_id(id).exec(&self.orm).await?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        email: model.email,
        address: model.address,
        role: model.role,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
