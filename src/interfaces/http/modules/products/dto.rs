//! Product DTOs

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{CreateProduct, Gender, ProductView, UpdateProduct};
use crate::shared::{Pagination, MAX_PAGE_VALUE};

/// Target audience accepted on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenderDto {
    Men,
    Women,
    Kids,
    Unisex,
}

impl From<GenderDto> for Gender {
    fn from(g: GenderDto) -> Self {
        match g {
            GenderDto::Men => Gender::Men,
            GenderDto::Women => Gender::Women,
            GenderDto::Kids => Gender::Kids,
            GenderDto::Unisex => Gender::Unisex,
        }
    }
}

impl From<Gender> for GenderDto {
    fn from(g: Gender) -> Self {
        match g {
            Gender::Men => GenderDto::Men,
            Gender::Women => GenderDto::Women,
            Gender::Kids => GenderDto::Kids,
            Gender::Unisex => GenderDto::Unisex,
        }
    }
}

/// Product with its image URLs
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub slug: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: GenderDto,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

impl From<ProductView> for ProductResponse {
    fn from(view: ProductView) -> Self {
        let p = view.product;
        Self {
            id: p.id,
            title: p.title,
            price: p.price,
            description: p.description,
            slug: p.slug,
            stock: p.stock,
            sizes: p.sizes,
            gender: p.gender.into(),
            tags: p.tags,
            images: view.images,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,
    pub description: Option<String>,
    /// Derived from the title when absent
    pub slug: Option<String>,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: Option<i32>,
    pub sizes: Vec<String>,
    pub gender: GenderDto,
    pub tags: Option<Vec<String>>,
    /// Image URLs, stored in this order
    pub images: Option<Vec<String>>,
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(r: CreateProductRequest) -> Self {
        Self {
            title: r.title,
            price: r.price,
            description: r.description,
            slug: r.slug,
            stock: r.stock,
            sizes: r.sizes,
            gender: r.gender.into(),
            tags: r.tags,
            images: r.images,
        }
    }
}

/// Partial update. `images`, when present, replaces the stored set.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,
    /// `null` clears the stored description
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: Option<String>,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<GenderDto>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

/// Maps a present field to `Some`, keeping an explicit `null` as `Some(None)`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(r: UpdateProductRequest) -> Self {
        Self {
            title: r.title,
            price: r.price,
            description: r.description,
            slug: r.slug,
            stock: r.stock,
            sizes: r.sizes,
            gender: r.gender.map(Into::into),
            tags: r.tags,
            images: r.images,
        }
    }
}

/// Offset pagination for the product list
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page size, defaults to 10
    #[validate(range(min = 1, max = MAX_PAGE_VALUE, message = "limit must be between 1 and 9223372036854775807"))]
    pub limit: Option<u64>,
    /// Rows to skip, defaults to 0
    #[validate(range(max = MAX_PAGE_VALUE, message = "offset must not exceed 9223372036854775807"))]
    pub offset: Option<u64>,
}

impl From<PaginationQuery> for Pagination {
    fn from(q: PaginationQuery) -> Self {
        Pagination::new(q.limit, q.offset)
    }
}
