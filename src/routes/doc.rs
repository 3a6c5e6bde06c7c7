use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        carts::{AddCartProductRequest, CartRequest, UpdateCartProductRequest},
        categories::CategoryRequest,
        products::{CreateProductRequest, UpdateProductRequest},
        users::{LoginRequest, RegisterRequest, UpdateUserRequest, UserExists},
    },
    models::{Cart, CartProduct, Category, Product, User},
    response::{ApiResponse, Meta},
    routes::{auth, carts, categories, health, products, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        users::list_users,
        users::get_user,
        users::get_user_by_username,
        users::user_exists,
        users::update_user,
        users::delete_user,
        users::list_user_carts,
        categories::list_categories,
        categories::create_category,
        categories::get_category,
        categories::update_category,
        categories::delete_category,
        categories::list_category_products,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        carts::list_carts,
        carts::create_cart,
        carts::get_cart,
        carts::update_cart,
        carts::delete_cart,
        carts::list_cart_products,
        carts::add_cart_product,
        carts::list_links,
        carts::update_link,
        carts::delete_link
    ),
    components(
        schemas(
            User,
            Category,
            Product,
            Cart,
            CartProduct,
            RegisterRequest,
            LoginRequest,
            UpdateUserRequest,
            UserExists,
            CategoryRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CartRequest,
            AddCartProductRequest,
            UpdateCartProductRequest,
            health::HealthData,
            Meta,
            ApiResponse<User>,
            ApiResponse<Category>,
            ApiResponse<Product>,
            ApiResponse<Cart>,
            ApiResponse<CartProduct>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "Customer administration"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Carts", description = "Cart and cart product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
