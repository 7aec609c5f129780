//! Database entities module

pub mod product;
pub mod product_image;

pub use product::Entity as Product;
pub use product_image::Entity as ProductImage;
