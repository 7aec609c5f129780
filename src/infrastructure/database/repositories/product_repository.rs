//! SeaORM implementation of ProductRepository

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};

use crate::domain::{
    DomainError, DomainResult, Gender, Product, ProductAggregate, ProductImage, ProductRepository,
};
use crate::infrastructure::database::entities::{product, product_image};
use crate::infrastructure::database::run_in_transaction;

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::Duplicate(detail),
        _ => DomainError::Storage(e.to_string()),
    }
}

fn gender_to_entity(g: Gender) -> product::Gender {
    match g {
        Gender::Men => product::Gender::Men,
        Gender::Women => product::Gender::Women,
        Gender::Kids => product::Gender::Kids,
        Gender::Unisex => product::Gender::Unisex,
    }
}

fn gender_from_entity(g: product::Gender) -> Gender {
    match g {
        product::Gender::Men => Gender::Men,
        product::Gender::Women => Gender::Women,
        product::Gender::Kids => Gender::Kids,
        product::Gender::Unisex => Gender::Unisex,
    }
}

fn product_from_model(m: product::Model) -> Product {
    Product {
        id: m.id,
        title: m.title,
        price: m.price,
        description: m.description,
        slug: m.slug,
        stock: m.stock,
        sizes: m.sizes.0,
        gender: gender_from_entity(m.gender),
        tags: m.tags.0,
    }
}

fn to_active_model(p: &Product) -> product::ActiveModel {
    product::ActiveModel {
        id: Set(p.id.clone()),
        title: Set(p.title.clone()),
        price: Set(p.price),
        description: Set(p.description.clone()),
        slug: Set(p.slug.clone()),
        stock: Set(p.stock),
        sizes: Set(product::StringList(p.sizes.clone())),
        gender: Set(gender_to_entity(p.gender)),
        tags: Set(product::StringList(p.tags.clone())),
    }
}

/// Images of the given products, grouped by product id, in insertion order.
async fn load_images<C: ConnectionTrait>(
    db: &C,
    product_ids: &[String],
) -> Result<HashMap<String, Vec<ProductImage>>, DbErr> {
    let mut by_product: HashMap<String, Vec<ProductImage>> = HashMap::new();
    if product_ids.is_empty() {
        return Ok(by_product);
    }

    let rows = product_image::Entity::find()
        .filter(product_image::Column::ProductId.is_in(product_ids.iter().cloned()))
        .order_by_asc(product_image::Column::Id)
        .all(db)
        .await?;

    for row in rows {
        by_product.entry(row.product_id).or_default().push(ProductImage {
            id: row.id,
            url: row.url,
        });
    }
    Ok(by_product)
}

async fn with_images<C: ConnectionTrait>(
    db: &C,
    models: Vec<product::Model>,
) -> Result<Vec<ProductAggregate>, DbErr> {
    let ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
    let mut images = load_images(db, &ids).await?;

    Ok(models
        .into_iter()
        .map(|m| {
            let own = images.remove(&m.id).unwrap_or_default();
            ProductAggregate {
                product: product_from_model(m),
                images: own,
            }
        })
        .collect())
}

async fn insert_images<C: ConnectionTrait>(
    db: &C,
    product_id: &str,
    urls: Vec<String>,
) -> Result<Vec<ProductImage>, DbErr> {
    let mut images = Vec::with_capacity(urls.len());
    for url in urls {
        let model = product_image::ActiveModel {
            id: NotSet,
            url: Set(url),
            product_id: Set(product_id.to_string()),
        };
        let saved = model.insert(db).await?;
        images.push(ProductImage {
            id: saved.id,
            url: saved.url,
        });
    }
    Ok(images)
}

impl SeaOrmProductRepository {
    async fn hydrate(&self, model: Option<product::Model>) -> DomainResult<Option<ProductAggregate>> {
        let Some(model) = model else {
            return Ok(None);
        };
        let mut aggregates = with_images(&self.db, vec![model]).await.map_err(db_err)?;
        Ok(aggregates.pop())
    }
}

// ── ProductRepository impl ──────────────────────────────────────

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, product: Product, images: Vec<String>) -> DomainResult<ProductAggregate> {
        debug!("Inserting product: {}", product.title);

        let model = to_active_model(&product);
        let product_id = product.id.clone();
        let saved_images = run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                model.insert(txn).await?;
                insert_images(txn, &product_id, images).await
            })
        })
        .await
        .map_err(db_err)?;

        info!("Product saved: {} ({})", product.title, product.id);
        Ok(ProductAggregate {
            product,
            images: saved_images,
        })
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ProductAggregate>> {
        let model = product::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        self.hydrate(model).await
    }

    async fn find_by_title_or_slug(
        &self,
        title_upper: &str,
        slug_lower: &str,
    ) -> DomainResult<Option<ProductAggregate>> {
        let model = product::Entity::find()
            .filter(
                Condition::any()
                    .add(Expr::expr(Func::upper(Expr::col(product::Column::Title))).eq(title_upper))
                    .add(product::Column::Slug.eq(slug_lower)),
            )
            .one(&self.db)
            .await
            .map_err(db_err)?;
        self.hydrate(model).await
    }

    async fn find_page(&self, limit: u64, offset: u64) -> DomainResult<Vec<ProductAggregate>> {
        let models = product::Entity::find()
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        with_images(&self.db, models).await.map_err(db_err)
    }

    async fn save(&self, product: Product, images: Option<Vec<String>>) -> DomainResult<()> {
        debug!("Saving product: {}", product.id);

        let id = product.id.clone();
        let model = to_active_model(&product);
        let replaced = images.as_ref().map(Vec::len);

        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                if images.is_some() {
                    product_image::Entity::delete_many()
                        .filter(product_image::Column::ProductId.eq(id.as_str()))
                        .exec(txn)
                        .await?;
                }

                model.update(txn).await?;

                if let Some(urls) = images {
                    insert_images(txn, &id, urls).await?;
                }
                Ok(())
            })
        })
        .await
        .map_err(db_err)?;

        match replaced {
            Some(count) => info!("Product updated: {} ({} images replaced)", product.id, count),
            None => info!("Product updated: {}", product.id),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = product::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Product", "id", id));
        }
        info!("Product deleted: {}", id);
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = product::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!("Deleted {} products", result.rows_affected);
        Ok(result.rows_affected)
    }
}
