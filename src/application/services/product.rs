//! Product catalog business logic service

use std::sync::Arc;

use log::{error, info};
use uuid::Uuid;

use crate::domain::{
    normalize_slug, CreateProduct, DomainError, DomainResult, Product, ProductAggregate,
    ProductRepository, ProductView, UpdateProduct,
};
use crate::shared::{Pagination, MAX_PAGE_VALUE};

/// Service for product catalog operations
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Create a product and its images in one unit of work.
    pub async fn create(&self, input: CreateProduct) -> DomainResult<ProductView> {
        let slug_source = match input.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug,
            _ => input.title.as_str(),
        };
        let slug = checked_slug(slug_source)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            price: input.price.unwrap_or(0.0),
            description: input.description,
            slug,
            stock: input.stock.unwrap_or(0),
            sizes: input.sizes,
            gender: input.gender,
            tags: input.tags.unwrap_or_default(),
        };

        let aggregate = self
            .repo
            .insert(product, input.images.unwrap_or_default())
            .await
            .map_err(handle_db_error)?;

        info!(
            "Product created: {} ({}) slug={}",
            aggregate.product.title, aggregate.product.id, aggregate.product.slug
        );
        Ok(aggregate.into())
    }

    /// One page of products in storage order.
    pub async fn find_all(&self, pagination: Pagination) -> DomainResult<Vec<ProductView>> {
        if !pagination.is_bindable() {
            return Err(DomainError::Validation(format!(
                "limit and offset must not exceed {}",
                MAX_PAGE_VALUE
            )));
        }
        let page = self
            .repo
            .find_page(pagination.limit, pagination.offset)
            .await
            .map_err(handle_db_error)?;
        Ok(page.into_iter().map(ProductView::from).collect())
    }

    /// Resolve `term` as a UUID id, otherwise as a title (any case) or slug.
    pub async fn find_one(&self, term: &str) -> DomainResult<ProductAggregate> {
        let found = match parse_term_id(term) {
            Some(id) => self.repo.find_by_id(&id.to_string()).await,
            None => {
                self.repo
                    .find_by_title_or_slug(&term.to_uppercase(), &term.to_lowercase())
                    .await
            }
        }
        .map_err(handle_db_error)?;

        found.ok_or_else(|| DomainError::not_found("Product", "term", term))
    }

    pub async fn find_one_plain(&self, term: &str) -> DomainResult<ProductView> {
        self.find_one(term).await.map(ProductView::from)
    }

    /// Merge `patch` into the stored product. Supplied images replace the
    /// stored set atomically with the row update.
    pub async fn update(&self, id: &str, patch: UpdateProduct) -> DomainResult<ProductView> {
        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(handle_db_error)?
            .ok_or_else(|| DomainError::not_found("Product", "id", id))?
            .product;

        let slug = checked_slug(patch.slug.as_deref().unwrap_or(&current.slug))?;
        let merged = Product {
            id: current.id,
            title: patch.title.unwrap_or(current.title),
            price: patch.price.unwrap_or(current.price),
            description: patch.description.unwrap_or(current.description),
            slug,
            stock: patch.stock.unwrap_or(current.stock),
            sizes: patch.sizes.unwrap_or(current.sizes),
            gender: patch.gender.unwrap_or(current.gender),
            tags: patch.tags.unwrap_or(current.tags),
        };

        self.repo
            .save(merged, patch.images)
            .await
            .map_err(handle_db_error)?;

        self.find_one_plain(id).await
    }

    /// Delete one product by id and return what it looked like.
    pub async fn remove(&self, id: &str) -> DomainResult<ProductView> {
        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(handle_db_error)?
            .ok_or_else(|| DomainError::not_found("Product", "id", id))?;

        self.repo.delete(id).await.map_err(handle_db_error)?;
        Ok(existing.into())
    }

    /// Bulk delete, images included. Returns the number of removed products.
    pub async fn delete_all_products(&self) -> DomainResult<u64> {
        let removed = self.repo.delete_all().await.map_err(handle_db_error)?;
        info!("Removed {} products", removed);
        Ok(removed)
    }
}

/// Only the hyphenated 36-character form is treated as an id; other UUID
/// spellings stay eligible as titles or slugs.
fn parse_term_id(term: &str) -> Option<Uuid> {
    if term.len() != 36 {
        return None;
    }
    Uuid::try_parse(term).ok()
}

fn checked_slug(raw: &str) -> DomainResult<String> {
    let slug = normalize_slug(raw);
    if slug.is_empty() {
        return Err(DomainError::Validation(format!(
            "slug derived from '{}' is empty",
            raw
        )));
    }
    Ok(slug)
}

/// Storage failures are logged with full detail and surfaced opaquely.
fn handle_db_error(err: DomainError) -> DomainError {
    match err {
        DomainError::Storage(detail) => {
            error!("{}", detail);
            DomainError::internal()
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::FailingRepository;
    use crate::domain::Gender;
    use crate::infrastructure::InMemoryProductRepository;
    use crate::shared::INTERNAL_ERROR_MESSAGE;

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::new()))
    }

    fn red_tee() -> CreateProduct {
        CreateProduct::new("Red Tee", Gender::Men, vec!["S".into(), "M".into()])
    }

    #[tokio::test]
    async fn create_derives_slug_and_applies_defaults() {
        let service = service();
        let created = service.create(red_tee()).await.unwrap();

        assert_eq!(created.product.slug, "red_tee");
        assert_eq!(created.product.price, 0.0);
        assert_eq!(created.product.stock, 0);
        assert!(created.product.tags.is_empty());
        assert!(created.images.is_empty());
        assert!(Uuid::parse_str(&created.product.id).is_ok());
    }

    #[tokio::test]
    async fn create_normalizes_explicit_slug() {
        let service = service();
        let mut input = CreateProduct::new("Kids Tee", Gender::Kids, vec!["XS".into()]);
        input.slug = Some("Kids' Cyber Tee".into());
        input.images = Some(vec!["1.jpg".into(), "2.jpg".into()]);

        let created = service.create(input).await.unwrap();
        assert_eq!(created.product.slug, "kids_cyber_tee");
        assert_eq!(created.images, vec!["1.jpg", "2.jpg"]);
    }

    #[tokio::test]
    async fn empty_slug_falls_back_to_title() {
        let service = service();
        let mut input = red_tee();
        input.slug = Some(String::new());

        let created = service.create(input).await.unwrap();
        assert_eq!(created.product.slug, "red_tee");
    }

    #[tokio::test]
    async fn slug_that_normalizes_to_nothing_is_rejected() {
        let service = service();
        let mut input = red_tee();
        input.slug = Some("'''".into());

        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn duplicate_title_or_slug_is_rejected() {
        let service = service();
        service.create(red_tee()).await.unwrap();

        let err = service.create(red_tee()).await.unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));

        let mut same_slug = CreateProduct::new("Another", Gender::Men, vec![]);
        same_slug.slug = Some("red_tee".into());
        let err = service.create(same_slug).await.unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[tokio::test]
    async fn find_one_resolves_id_title_and_slug() {
        let service = service();
        let created = service.create(red_tee()).await.unwrap();
        let id = created.product.id.clone();
        let upper_id = id.to_uppercase();

        let terms: [&str; 6] = [&id, &upper_id, "red tee", "RED TEE", "Red_Tee", "red_tee"];
        for term in terms {
            let found = service.find_one(term).await.unwrap();
            assert_eq!(found.product.id, id, "term {term}");
        }
    }

    #[tokio::test]
    async fn find_one_missing_term_is_not_found() {
        let service = service();
        service.create(red_tee()).await.unwrap();

        let err = service.find_one("blue_tee").await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Product", "term", "blue_tee"));

        let err = service
            .find_one(&Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn hex_titles_are_not_mistaken_for_ids() {
        let service = service();
        let hex = "0123456789abcdef0123456789abcdef";
        let created = service
            .create(CreateProduct::new(hex, Gender::Unisex, vec![]))
            .await
            .unwrap();

        let found = service.find_one(hex).await.unwrap();
        assert_eq!(found.product.id, created.product.id);

        let braced = format!("{{{}}}", Uuid::new_v4());
        let err = service.find_one(&braced).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Product", "term", braced.as_str()));
    }

    #[tokio::test]
    async fn update_title_keeps_existing_slug() {
        let service = service();
        let created = service.create(red_tee()).await.unwrap();

        let patch = UpdateProduct {
            title: Some("Red Tee v2".into()),
            ..Default::default()
        };
        let updated = service.update(&created.product.id, patch).await.unwrap();

        assert_eq!(updated.product.title, "Red Tee v2");
        assert_eq!(updated.product.slug, "red_tee");
        assert_eq!(updated.product.sizes, vec!["S", "M"]);
    }

    #[tokio::test]
    async fn update_normalizes_patched_slug() {
        let service = service();
        let created = service.create(red_tee()).await.unwrap();

        let patch = UpdateProduct {
            slug: Some("Crimson Tee".into()),
            ..Default::default()
        };
        let updated = service.update(&created.product.id, patch).await.unwrap();
        assert_eq!(updated.product.slug, "crimson_tee");
    }

    #[tokio::test]
    async fn update_images_replaces_the_set() {
        let service = service();
        let mut input = red_tee();
        input.images = Some(vec!["a.jpg".into(), "b.jpg".into()]);
        let created = service.create(input).await.unwrap();

        let patch = UpdateProduct {
            images: Some(vec!["c.jpg".into()]),
            ..Default::default()
        };
        let updated = service.update(&created.product.id, patch).await.unwrap();
        assert_eq!(updated.images, vec!["c.jpg"]);

        let untouched = service
            .update(
                &created.product.id,
                UpdateProduct {
                    stock: Some(3),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(untouched.images, vec!["c.jpg"]);
        assert_eq!(untouched.product.stock, 3);
    }

    #[tokio::test]
    async fn update_can_clear_or_keep_description() {
        let service = service();
        let mut input = red_tee();
        input.description = Some("cotton".into());
        let created = service.create(input).await.unwrap();
        let id = created.product.id;

        let kept = service.update(&id, UpdateProduct::default()).await.unwrap();
        assert_eq!(kept.product.description.as_deref(), Some("cotton"));

        let patch = UpdateProduct {
            description: Some(None),
            ..Default::default()
        };
        let cleared = service.update(&id, patch).await.unwrap();
        assert_eq!(cleared.product.description, None);
    }

    #[tokio::test]
    async fn update_missing_product_is_not_found() {
        let service = service();
        let id = Uuid::new_v4().to_string();
        let err = service
            .update(&id, UpdateProduct::default())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Product", "id", id));
    }

    #[tokio::test]
    async fn remove_returns_prior_state() {
        let service = service();
        let mut input = red_tee();
        input.images = Some(vec!["a.jpg".into()]);
        let created = service.create(input).await.unwrap();

        let removed = service.remove(&created.product.id).await.unwrap();
        assert_eq!(removed, created);
        assert!(service.remove(&created.product.id).await.is_err());
    }

    #[tokio::test]
    async fn pages_are_disjoint_and_delete_all_empties() {
        let service = service();
        service.create(red_tee()).await.unwrap();
        service
            .create(CreateProduct::new("Blue Tee", Gender::Women, vec!["L".into()]))
            .await
            .unwrap();

        let first = service.find_all(Pagination::new(Some(1), Some(0))).await.unwrap();
        let second = service.find_all(Pagination::new(Some(1), Some(1))).await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_ne!(first[0].product.id, second[0].product.id);

        assert_eq!(service.delete_all_products().await.unwrap(), 2);
        assert!(service.find_all(Pagination::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn oversized_page_bounds_are_rejected() {
        let service = service();
        service.create(red_tee()).await.unwrap();

        for page in [
            Pagination::new(Some(u64::MAX), None),
            Pagination::new(None, Some(u64::MAX)),
        ] {
            let err = service.find_all(page).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "got {err:?}");
        }
    }

    #[tokio::test]
    async fn storage_failures_become_opaque_internal_errors() {
        let service = ProductService::new(Arc::new(FailingRepository));

        let err = service.create(red_tee()).await.unwrap_err();
        assert_eq!(err, DomainError::Internal(INTERNAL_ERROR_MESSAGE.into()));

        let err = service.find_one("red_tee").await.unwrap_err();
        assert_eq!(err, DomainError::internal());

        let err = service.delete_all_products().await.unwrap_err();
        assert_eq!(err, DomainError::internal());
    }
}
