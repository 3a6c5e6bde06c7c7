use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    DatabaseConnection, EntityTrait, QueryOrder, SqlErr,
};
use uuid::Uuid;

use crate::{
    entity::categories::{ActiveModel, Column, Entity as Categories, Model as CategoryModel},
    error::{AppError, AppResult},
    models::Category,
};

#[derive(Clone)]
pub struct CategoryDao {
    orm: DatabaseConnection,
}

impl CategoryDao {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }

    pub async fn add(&self, name: &str) -> AppResult<Category> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_owned()),
            created_at: Set(super::now()),
        };
        let category = active.insert(&self.orm).await?;
        tracing::debug!(id = %category.id, "dao: category inserted");
        Ok(category_from_entity(category))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        let categories = Categories::find()
            .order_by_asc(Column::Name)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(category_from_entity)
            .collect();
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let category = Categories::find_by_id(id).one(&self.orm).await?;
        Ok(category.map(category_from_entity))
    }

    /// Replaces the stored fields of an existing category; unknown ids are `NotFound`.
    pub async fn update(&self, category: &Category) -> AppResult<Category> {
        tracing::debug!(id = %category.id, "dao: update category");
        let active = ActiveModel {
            id: Set(category.id),
            name: Set(category.name.clone()),
            created_at: NotSet,
        };
        let updated = active.update(&self.orm).await.map_err(AppError::from_update)?;
        Ok(category_from_entity(updated))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        tracing::debug!(%id, "dao: delete category");
        let result = Categories::delete_by_id(id)
            .exec(&self.orm)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    AppError::BadRequest("category still has products".to_string())
                }
                _ => AppError::Storage(err),
            })?;
        Ok(result.rows_affected > 0)
    }
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
