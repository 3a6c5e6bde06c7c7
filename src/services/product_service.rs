use uuid::Uuid;

use crate::{
    dao::{CategoryDao, ProductDao},
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
};

#[derive(Clone)]
pub struct ProductService {
    dao: ProductDao,
    categories: CategoryDao,
}

impl ProductService {
    pub fn new(dao: ProductDao, categories: CategoryDao) -> Self {
        Self { dao, categories }
    }

    pub async fn get_products(&self) -> AppResult<Vec<Product>> {
        self.dao.find_all().await
    }

    pub async fn get_product(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.dao.find_by_id(id).await
    }

    pub async fn get_products_by_category(&self, category_id: Uuid) -> AppResult<Vec<Product>> {
        self.dao.find_by_category_id(category_id).await
    }

    pub async fn add_product(&self, mut payload: CreateProductRequest) -> AppResult<Product> {
        payload.name = payload.name.trim().to_string();
        validate(&payload.name, payload.price, payload.weight, payload.quantity)?;
        self.ensure_category(payload.category_id).await?;

        let product = self.dao.add(&payload).await?;
        tracing::info!(product_id = %product.id, category_id = %product.category_id, "product created");
        Ok(product)
    }

    /// Applies the provided fields onto the stored product.
    pub async fn update_product(&self, id: Uuid, payload: UpdateProductRequest) -> AppResult<Product> {
        let mut product = self.dao.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if let Some(name) = payload.name {
            product.name = name.trim().to_string();
        }
        if let Some(category_id) = payload.category_id {
            if category_id != product.category_id {
                self.ensure_category(category_id).await?;
            }
            product.category_id = category_id;
        }
        if let Some(description) = payload.description {
            product.description = Some(description);
        }
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(image) = payload.image {
            product.image = Some(image);
        }
        if let Some(weight) = payload.weight {
            product.weight = weight;
        }
        if let Some(quantity) = payload.quantity {
            product.quantity = quantity;
        }
        validate(&product.name, product.price, product.weight, product.quantity)?;

        let product = self.dao.update(&product).await?;
        tracing::info!(product_id = %product.id, "product updated");
        Ok(product)
    }

    pub async fn delete_product(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.dao.delete(id).await?;
        if deleted {
            tracing::info!(product_id = %id, "product deleted");
        }
        Ok(deleted)
    }

    async fn ensure_category(&self, category_id: Uuid) -> AppResult<()> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(AppError::BadRequest("category not found".to_string()));
        }
        Ok(())
    }
}

fn validate(name: &str, price: i64, weight: i32, quantity: i32) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::BadRequest("product name must not be empty".to_string()));
    }
    if price < 0 {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }
    if weight < 0 {
        return Err(AppError::BadRequest("weight must not be negative".to_string()));
    }
    if quantity < 0 {
        return Err(AppError::BadRequest("quantity must not be negative".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn zero_values_are_allowed() {
        assert!(validate("Sticker", 0, 0, 0).is_ok());
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(validate("Sticker", -1, 0, 0).is_err());
        assert!(validate("Sticker", 0, -1, 0).is_err());
        assert!(validate("Sticker", 0, 0, -1).is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate("", 10, 1, 1).is_err());
    }
}
