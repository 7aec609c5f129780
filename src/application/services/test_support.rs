//! Repository doubles shared by service tests

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Product, ProductAggregate, ProductRepository};

/// Every call fails the way a dropped database connection would.
pub struct FailingRepository;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Storage("connection reset by peer".into()))
}

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn insert(&self, _: Product, _: Vec<String>) -> DomainResult<ProductAggregate> {
        broken()
    }

    async fn find_by_id(&self, _: &str) -> DomainResult<Option<ProductAggregate>> {
        broken()
    }

    async fn find_by_title_or_slug(
        &self,
        _: &str,
        _: &str,
    ) -> DomainResult<Option<ProductAggregate>> {
        broken()
    }

    async fn find_page(&self, _: u64, _: u64) -> DomainResult<Vec<ProductAggregate>> {
        broken()
    }

    async fn save(&self, _: Product, _: Option<Vec<String>>) -> DomainResult<()> {
        broken()
    }

    async fn delete(&self, _: &str) -> DomainResult<()> {
        broken()
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        broken()
    }
}
