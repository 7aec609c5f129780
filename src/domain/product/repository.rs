//! Product repository interface

use async_trait::async_trait;

use super::model::{Product, ProductAggregate};
use crate::shared::DomainResult;

/// Persistence for the product aggregate.
///
/// Implementations report unique-constraint violations as
/// `DomainError::Duplicate` and every other datastore failure as
/// `DomainError::Storage`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts the product row and one image row per URL atomically.
    async fn insert(&self, product: Product, images: Vec<String>) -> DomainResult<ProductAggregate>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ProductAggregate>>;

    /// First product whose upper-cased title equals `title_upper` or whose
    /// slug equals `slug_lower`.
    async fn find_by_title_or_slug(
        &self,
        title_upper: &str,
        slug_lower: &str,
    ) -> DomainResult<Option<ProductAggregate>>;

    /// Storage order, `offset` rows skipped, at most `limit` returned.
    async fn find_page(&self, limit: u64, offset: u64) -> DomainResult<Vec<ProductAggregate>>;

    /// Writes every column of an existing product. When `images` is given the
    /// stored images are deleted and replaced in the same transaction.
    async fn save(&self, product: Product, images: Option<Vec<String>>) -> DomainResult<()>;

    /// Deletes one product and, by cascade, its images.
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// Deletes every product. Returns the number of removed rows.
    async fn delete_all(&self) -> DomainResult<u64>;
}
