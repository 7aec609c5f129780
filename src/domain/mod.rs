pub mod product;

// Re-export commonly used types
pub use product::{
    normalize_slug, CreateProduct, Gender, Product, ProductAggregate, ProductImage,
    ProductRepository, ProductView, UpdateProduct,
};

pub use crate::shared::{DomainError, DomainResult};
