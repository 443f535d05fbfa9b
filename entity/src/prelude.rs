pub use super::availability::Entity as Availability;
pub use super::brand::Entity as Brand;
pub use super::category::Entity as Category;
pub use super::category_product::Entity as CategoryProduct;
pub use super::menu::Entity as Menu;
pub use super::menu_category::Entity as MenuCategory;
pub use super::overrider::Entity as Overrider;
pub use super::product::Entity as Product;
pub use super::store::Entity as Store;
