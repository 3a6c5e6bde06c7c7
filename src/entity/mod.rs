pub mod cart_products;
pub mod carts;
pub mod categories;
pub mod products;
pub mod users;

pub use cart_products::Entity as CartProducts;
pub use carts::Entity as Carts;
pub use categories::Entity as Categories;
pub use products::Entity as Products;
pub use users::Entity as Users;
