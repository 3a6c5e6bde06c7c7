//! Data access objects, one per table.
//!
//! Each DAO wraps a cloned [`sea_orm::DatabaseConnection`] and keeps no other
//! state between calls. Reads report absence as `Ok(None)`; store failures
//! propagate as [`crate::error::AppError::Storage`].

pub mod cart_dao;
pub mod cart_product_dao;
pub mod category_dao;
pub mod product_dao;
pub mod user_dao;

pub use cart_dao::CartDao;
pub use cart_product_dao::CartProductDao;
pub use category_dao::CategoryDao;
pub use product_dao::ProductDao;
pub use user_dao::UserDao;

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;

fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}
