use uuid::Uuid;

use crate::{
    dao::CategoryDao,
    error::{AppError, AppResult},
    models::Category,
};

#[derive(Clone)]
pub struct CategoryService {
    dao: CategoryDao,
}

impl CategoryService {
    pub fn new(dao: CategoryDao) -> Self {
        Self { dao }
    }

    pub async fn add_category(&self, name: &str) -> AppResult<Category> {
        let name = validate_name(name)?;
        let category = self.dao.add(name).await?;
        tracing::info!(category_id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    pub async fn get_categories(&self) -> AppResult<Vec<Category>> {
        self.dao.find_all().await
    }

    pub async fn get_category(&self, id: Uuid) -> AppResult<Option<Category>> {
        self.dao.find_by_id(id).await
    }

    pub async fn update_category(&self, id: Uuid, name: &str) -> AppResult<Category> {
        let name = validate_name(name)?;
        let mut category = self.dao.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        category.name = name.to_string();
        let category = self.dao.update(&category).await?;
        tracing::info!(category_id = %category.id, "category updated");
        Ok(category)
    }

    pub async fn delete_category(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.dao.delete(id).await?;
        if deleted {
            tracing::info!(category_id = %id, "category deleted");
        }
        Ok(deleted)
    }
}

fn validate_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "category name must not be empty".to_string(),
        ));
    }
    Ok(name)
}
