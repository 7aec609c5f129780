//! Inputs accepted by the product use cases

use super::model::Gender;

/// Data for a new product. Optional fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub title: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

impl CreateProduct {
    pub fn new(title: impl Into<String>, gender: Gender, sizes: Vec<String>) -> Self {
        Self {
            title: title.into(),
            price: None,
            description: None,
            slug: None,
            stock: None,
            sizes,
            gender,
            tags: None,
            images: None,
        }
    }
}

/// Partial update; `None` leaves the stored value untouched.
///
/// `images: Some(..)` replaces the whole image set, an empty list included.
/// `description: Some(None)` clears the stored description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<Option<String>>,
    pub slug: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<Gender>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}
