//! Product domain entities

use std::str::FromStr;

use crate::shared::DomainError;

/// Target audience of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Men,
    Women,
    Kids,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Kids => "kids",
            Self::Unisex => "unisex",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "kids" => Ok(Self::Kids),
            "unisex" => Ok(Self::Unisex),
            other => Err(DomainError::Validation(format!(
                "gender must be one of men, women, kids, unisex (got '{}')",
                other
            ))),
        }
    }
}

/// Product row, without its images
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// UUID v4, hyphenated lower-case
    pub id: String,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    /// Always normalized, see [`normalize_slug`]
    pub slug: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub tags: Vec<String>,
}

/// Image owned by a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub id: i32,
    pub url: String,
}

/// A product together with the images it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAggregate {
    pub product: Product,
    pub images: Vec<ProductImage>,
}

/// Plain shape returned to callers: images flattened to their URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub product: Product,
    pub images: Vec<String>,
}

impl From<ProductAggregate> for ProductView {
    fn from(aggregate: ProductAggregate) -> Self {
        Self {
            product: aggregate.product,
            images: aggregate.images.into_iter().map(|image| image.url).collect(),
        }
    }
}

/// Lower-case, spaces to underscores, apostrophes dropped.
pub fn normalize_slug(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_").replace('\'', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_slug_lowercases_and_replaces_spaces() {
        assert_eq!(normalize_slug("Red Tee"), "red_tee");
    }

    #[test]
    fn normalize_slug_strips_apostrophes() {
        assert_eq!(
            normalize_slug("Men's Chill Crew Neck Sweatshirt"),
            "mens_chill_crew_neck_sweatshirt"
        );
    }

    #[test]
    fn normalize_slug_is_idempotent() {
        let once = normalize_slug("Kids' Cyber Tee");
        assert_eq!(normalize_slug(&once), once);
    }

    #[test]
    fn gender_round_trips_through_str() {
        for gender in [Gender::Men, Gender::Women, Gender::Kids, Gender::Unisex] {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), gender);
        }
    }

    #[test]
    fn unknown_gender_is_rejected() {
        assert!(matches!(
            "robots".parse::<Gender>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn view_flattens_images_in_order() {
        let aggregate = ProductAggregate {
            product: Product {
                id: "id".into(),
                title: "Red Tee".into(),
                price: 0.0,
                description: None,
                slug: "red_tee".into(),
                stock: 0,
                sizes: vec!["S".into()],
                gender: Gender::Men,
                tags: vec![],
            },
            images: vec![
                ProductImage { id: 2, url: "a.jpg".into() },
                ProductImage { id: 1, url: "b.jpg".into() },
            ],
        };
        let view = ProductView::from(aggregate);
        assert_eq!(view.images, vec!["a.jpg", "b.jpg"]);
    }
}
