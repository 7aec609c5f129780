pub mod product;
pub mod seed;
pub mod seed_data;

#[cfg(test)]
pub(crate) mod test_support;

pub use product::ProductService;
pub use seed::{SeedService, SEED_SUCCESS_MESSAGE};
