//! Catalog reseeding

use std::sync::Arc;

use futures_util::future::try_join_all;
use log::info;

use super::product::ProductService;
use super::seed_data::SEED_PRODUCTS;
use crate::domain::DomainResult;

pub const SEED_SUCCESS_MESSAGE: &str = "SEED EXECUTED SUCCESSFULLY!";

/// Wipes the catalog and repopulates it from [`SEED_PRODUCTS`].
pub struct SeedService {
    products: Arc<ProductService>,
}

impl SeedService {
    pub fn new(products: Arc<ProductService>) -> Self {
        Self { products }
    }

    /// Deletes every product, then creates the seed records concurrently.
    /// Records created before a failure are kept.
    pub async fn run_seed(&self) -> DomainResult<&'static str> {
        self.products.delete_all_products().await?;

        let inserts = SEED_PRODUCTS
            .iter()
            .map(|seed| self.products.create(seed.to_command()));
        let created = try_join_all(inserts).await?;

        info!("Seed inserted {} products", created.len());
        Ok(SEED_SUCCESS_MESSAGE)
    }
}
