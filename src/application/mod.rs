pub mod services;

pub use services::{ProductService, SeedService, SEED_SUCCESS_MESSAGE};
