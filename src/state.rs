use sea_orm::DatabaseConnection;

use crate::{
    dao::{CartDao, CartProductDao, CategoryDao, ProductDao, UserDao},
    services::{CartService, CategoryService, ProductService, UserService},
};

/// Services shared by every request handler.
///
/// Each service owns its DAOs, and every DAO holds a clone of the same
/// connection pool handle.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub users: UserService,
    pub categories: CategoryService,
    pub products: ProductService,
    pub carts: CartService,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        let user_dao = UserDao::new(orm.clone());
        let category_dao = CategoryDao::new(orm.clone());
        let product_dao = ProductDao::new(orm.clone());
        let cart_dao = CartDao::new(orm.clone());
        let cart_product_dao = CartProductDao::new(orm.clone());

        Self {
            orm,
            users: UserService::new(user_dao.clone()),
            categories: CategoryService::new(category_dao.clone()),
            products: ProductService::new(product_dao.clone(), category_dao),
            carts: CartService::new(cart_dao, cart_product_dao, product_dao, user_dao),
        }
    }
}
