//! Product aggregate
//!
//! Contains the Product entity, its images, use-case inputs and the
//! repository interface.

pub mod commands;
pub mod model;
pub mod repository;

pub use commands::{CreateProduct, UpdateProduct};
pub use model::{normalize_slug, Gender, Product, ProductAggregate, ProductImage, ProductView};
pub use repository::ProductRepository;
