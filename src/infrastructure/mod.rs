//! Infrastructure layer - external concerns

pub mod database;
pub mod storage;

pub use database::repositories::SeaOrmProductRepository;
pub use database::{init_database, DatabaseConfig};
pub use storage::InMemoryProductRepository;
