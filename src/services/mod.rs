pub mod cart_service;
pub mod category_service;
pub mod product_service;
pub mod user_service;

pub use cart_service::CartService;
pub use category_service::CategoryService;
pub use product_service::ProductService;
pub use user_service::UserService;
