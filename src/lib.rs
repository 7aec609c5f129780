//! # Shop Catalog
//!
//! Product catalog REST backend: products with images, offset pagination,
//! lookup by id, title or slug, transactional image replacement and a
//! reseeding endpoint.
//!
//! ## Architecture
//!
//! - **domain**: product aggregate, slug rules, repository trait
//! - **application**: product and seed services
//! - **infrastructure**: SeaORM entities, migrations and repository; in-memory repository
//! - **interfaces**: axum REST API with Swagger documentation
//! - **server**: runtime lifecycle shared by the CLI

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::create_api_router;
