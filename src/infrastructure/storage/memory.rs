//! In-memory product repository for development and testing

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{
    DomainError, DomainResult, Product, ProductAggregate, ProductImage, ProductRepository,
};

#[derive(Default)]
struct State {
    /// Insertion order doubles as storage order.
    products: Vec<ProductAggregate>,
    next_image_id: i32,
}

impl State {
    fn build_images(&mut self, urls: Vec<String>) -> Vec<ProductImage> {
        urls.into_iter()
            .map(|url| {
                self.next_image_id += 1;
                ProductImage {
                    id: self.next_image_id,
                    url,
                }
            })
            .collect()
    }

    /// Mirrors the unique indexes on `products.title` and `products.slug`.
    fn check_unique(&self, candidate: &Product) -> DomainResult<()> {
        for existing in self.products.iter().map(|a| &a.product) {
            if existing.id == candidate.id {
                continue;
            }
            if existing.title == candidate.title {
                return Err(DomainError::Duplicate(format!(
                    "Key (title)=({}) already exists.",
                    candidate.title
                )));
            }
            if existing.slug == candidate.slug {
                return Err(DomainError::Duplicate(format!(
                    "Key (slug)=({}) already exists.",
                    candidate.slug
                )));
            }
        }
        Ok(())
    }
}

/// Product repository backed by a mutex-guarded vector.
///
/// Enforces the same uniqueness rules as the SQL schema so service behaviour
/// can be exercised without a database.
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: Mutex<State>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Storage("in-memory store poisoned".to_string()))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: Product, images: Vec<String>) -> DomainResult<ProductAggregate> {
        let mut state = self.lock()?;
        if state.products.iter().any(|a| a.product.id == product.id) {
            return Err(DomainError::Duplicate(format!(
                "Key (id)=({}) already exists.",
                product.id
            )));
        }
        state.check_unique(&product)?;

        let images = state.build_images(images);
        let aggregate = ProductAggregate { product, images };
        state.products.push(aggregate.clone());
        Ok(aggregate)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ProductAggregate>> {
        let state = self.lock()?;
        Ok(state.products.iter().find(|a| a.product.id == id).cloned())
    }

    async fn find_by_title_or_slug(
        &self,
        title_upper: &str,
        slug_lower: &str,
    ) -> DomainResult<Option<ProductAggregate>> {
        let state = self.lock()?;
        Ok(state
            .products
            .iter()
            .find(|a| a.product.title.to_uppercase() == title_upper || a.product.slug == slug_lower)
            .cloned())
    }

    async fn find_page(&self, limit: u64, offset: u64) -> DomainResult<Vec<ProductAggregate>> {
        let state = self.lock()?;
        Ok(state
            .products
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn save(&self, product: Product, images: Option<Vec<String>>) -> DomainResult<()> {
        let mut state = self.lock()?;
        let Some(index) = state.products.iter().position(|a| a.product.id == product.id) else {
            return Err(DomainError::Storage(format!(
                "no row updated for product {}",
                product.id
            )));
        };
        // Validate before touching anything so a failure leaves the row intact.
        state.check_unique(&product)?;

        let images = images.map(|urls| state.build_images(urls));
        let stored = &mut state.products[index];
        stored.product = product;
        if let Some(images) = images {
            stored.images = images;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let mut state = self.lock()?;
        let before = state.products.len();
        state.products.retain(|a| a.product.id != id);
        if state.products.len() == before {
            return Err(DomainError::not_found("Product", "id", id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let mut state = self.lock()?;
        let removed = state.products.len() as u64;
        state.products.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    fn product(id: &str, title: &str, slug: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            price: 10.0,
            description: None,
            slug: slug.to_string(),
            stock: 1,
            sizes: vec!["M".into()],
            gender: Gender::Unisex,
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn insert_assigns_image_ids() {
        let repo = InMemoryProductRepository::new();
        let saved = repo
            .insert(product("1", "Cap", "cap"), vec!["a.jpg".into(), "b.jpg".into()])
            .await
            .unwrap();
        assert_eq!(saved.images.len(), 2);
        assert_ne!(saved.images[0].id, saved.images[1].id);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_slug() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("1", "Cap", "cap"), vec![]).await.unwrap();
        let err = repo
            .insert(product("2", "Other Cap", "cap"), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(detail) if detail.contains("slug")));
    }

    #[tokio::test]
    async fn save_without_images_keeps_them() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("1", "Cap", "cap"), vec!["a.jpg".into()])
            .await
            .unwrap();
        repo.save(product("1", "Cap v2", "cap"), None).await.unwrap();

        let stored = repo.find_by_id("1").await.unwrap().unwrap();
        assert_eq!(stored.product.title, "Cap v2");
        assert_eq!(stored.images.len(), 1);
    }

    #[tokio::test]
    async fn failed_save_leaves_row_untouched() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("1", "Cap", "cap"), vec!["a.jpg".into()])
            .await
            .unwrap();
        repo.insert(product("2", "Hat", "hat"), vec![]).await.unwrap();

        let err = repo
            .save(product("1", "Hat", "cap"), Some(vec!["b.jpg".into()]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));

        let stored = repo.find_by_id("1").await.unwrap().unwrap();
        assert_eq!(stored.product.title, "Cap");
        assert_eq!(stored.images[0].url, "a.jpg");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let err = repo.delete("nope").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
