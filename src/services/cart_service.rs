use uuid::Uuid;

use crate::{
    dao::{CartDao, CartProductDao, ProductDao, UserDao},
    dto::carts::{CartRequest, UpdateCartProductRequest},
    error::{AppError, AppResult},
    models::{Cart, CartProduct, Product},
};

/// Carts and the cart/product links they own.
#[derive(Clone)]
pub struct CartService {
    dao: CartDao,
    links: CartProductDao,
    products: ProductDao,
    users: UserDao,
}

impl CartService {
    pub fn new(dao: CartDao, links: CartProductDao, products: ProductDao, users: UserDao) -> Self {
        Self {
            dao,
            links,
            products,
            users,
        }
    }

    pub async fn add_cart(&self, payload: CartRequest) -> AppResult<Cart> {
        if let Some(user_id) = payload.user_id {
            self.ensure_user(user_id).await?;
        }
        let cart = self.dao.add(payload.user_id).await?;
        tracing::info!(cart_id = %cart.id, "cart created");
        Ok(cart)
    }

    pub async fn get_carts(&self) -> AppResult<Vec<Cart>> {
        self.dao.find_all().await
    }

    pub async fn get_cart(&self, id: Uuid) -> AppResult<Option<Cart>> {
        self.dao.find_by_id(id).await
    }

    pub async fn get_carts_by_user(&self, user_id: Uuid) -> AppResult<Vec<Cart>> {
        self.dao.find_by_user_id(user_id).await
    }

    pub async fn update_cart(&self, id: Uuid, payload: CartRequest) -> AppResult<Cart> {
        let mut cart = self.dao.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if let Some(user_id) = payload.user_id {
            self.ensure_user(user_id).await?;
        }
        cart.user_id = payload.user_id;
        self.dao.update(&cart).await
    }

    pub async fn delete_cart(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.dao.delete(id).await?;
        if deleted {
            tracing::info!(cart_id = %id, "cart deleted");
        }
        Ok(deleted)
    }

    pub async fn add_cart_product(&self, cart_id: Uuid, product_id: Uuid) -> AppResult<CartProduct> {
        self.ensure_cart(cart_id).await?;
        self.ensure_product(product_id).await?;
        let link = self.links.add(cart_id, product_id).await?;
        tracing::info!(cart_id = %cart_id, product_id = %product_id, "product added to cart");
        Ok(link)
    }

    pub async fn get_cart_products(&self) -> AppResult<Vec<CartProduct>> {
        self.links.find_all().await
    }

    pub async fn get_products_by_cart_id(&self, cart_id: Uuid) -> AppResult<Vec<Product>> {
        self.links.find_products_by_cart_id(cart_id).await
    }

    pub async fn update_cart_product(
        &self,
        id: Uuid,
        payload: UpdateCartProductRequest,
    ) -> AppResult<CartProduct> {
        let mut link = self.links.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if let Some(cart_id) = payload.cart_id {
            self.ensure_cart(cart_id).await?;
            link.cart_id = cart_id;
        }
        if let Some(product_id) = payload.product_id {
            self.ensure_product(product_id).await?;
            link.product_id = product_id;
        }
        self.links.update(&link).await
    }

    pub async fn delete_cart_product(&self, id: Uuid) -> AppResult<bool> {
        self.links.delete(id).await
    }

    async fn ensure_cart(&self, cart_id: Uuid) -> AppResult<()> {
        if self.dao.find_by_id(cart_id).await?.is_none() {
            return Err(AppError::BadRequest("cart not found".to_string()));
        }
        Ok(())
    }

    async fn ensure_product(&self, product_id: Uuid) -> AppResult<()> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(AppError::BadRequest("product not found".to_string()));
        }
        Ok(())
    }

    async fn ensure_user(&self, user_id: Uuid) -> AppResult<()> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::BadRequest("user not found".to_string()));
        }
        Ok(())
    }
}
