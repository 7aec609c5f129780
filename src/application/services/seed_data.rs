//! Fixed catalog used to reseed the database

use crate::domain::{CreateProduct, Gender};

pub struct SeedProduct {
    pub title: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub stock: i32,
    pub sizes: &'static [&'static str],
    pub gender: Gender,
    pub tags: &'static [&'static str],
    pub images: &'static [&'static str],
}

impl SeedProduct {
    pub fn to_command(&self) -> CreateProduct {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        CreateProduct {
            title: self.title.to_string(),
            price: Some(self.price),
            description: Some(self.description.to_string()),
            slug: Some(self.slug.to_string()),
            stock: Some(self.stock),
            sizes: owned(self.sizes),
            gender: self.gender,
            tags: Some(owned(self.tags)),
            images: Some(owned(self.images)),
        }
    }
}

pub const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        title: "Men's Chill Crew Neck Sweatshirt",
        slug: "mens_chill_crew_neck_sweatshirt",
        description: "Introducing the Tesla Chill Collection. The Men's Chill Crew Neck Sweatshirt has a premium, heavyweight exterior and soft fleece interior for comfort in any season.",
        price: 75.0,
        stock: 7,
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        gender: Gender::Men,
        tags: &["sweatshirt"],
        images: &["1740176-00-A_0_2000.jpg", "1740176-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Men's Quilted Shirt Jacket",
        slug: "men_quilted_shirt_jacket",
        description: "The Men's Quilted Shirt Jacket features a uniquely fit, quilted design for warmth and mobility in cold weather seasons.",
        price: 200.0,
        stock: 5,
        sizes: &["XS", "S", "M", "XL", "XXL"],
        gender: Gender::Men,
        tags: &["jacket"],
        images: &["1740507-00-A_0_2000.jpg", "1740507-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Men's Raven Lightweight Zip Up Bomber Jacket",
        slug: "men_raven_lightweight_zip_up_bomber_jacket",
        description: "Introducing the Tesla Raven Collection. The Men's Raven Lightweight Zip Up Bomber has a premium, modern silhouette made from a sustainable bamboo cotton blend.",
        price: 130.0,
        stock: 10,
        sizes: &["S", "M", "L", "XL", "XXL"],
        gender: Gender::Men,
        tags: &["shirt"],
        images: &["1740250-00-A_0_2000.jpg", "1740250-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Men's Turbine Long Sleeve Tee",
        slug: "men_turbine_long_sleeve_tee",
        description: "Introducing the Tesla Turbine Collection. Designed for style, comfort and everyday lifestyle, the Men's Turbine Long Sleeve Tee features a subtle, water-based T logo on the left chest.",
        price: 45.0,
        stock: 50,
        sizes: &["XS", "S", "M", "L"],
        gender: Gender::Men,
        tags: &["shirt"],
        images: &["1740280-00-A_0_2000.jpg", "1740280-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Women's Cropped Puffer Jacket",
        slug: "women_cropped_puffer_jacket",
        description: "The Women's Cropped Puffer Jacket features a uniquely cropped silhouette for the perfect, modern style while on the go during the cozy season ahead.",
        price: 225.0,
        stock: 85,
        sizes: &["XS", "S", "M"],
        gender: Gender::Women,
        tags: &["hoodie"],
        images: &["1740535-00-A_0_2000.jpg", "1740535-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Women's Chill Half Zip Cropped Hoodie",
        slug: "women_chill_half_zip_cropped_hoodie",
        description: "Introducing the Tesla Chill Collection. The Women's Chill Half Zip Cropped Hoodie has a premium, soft fleece exterior and cropped silhouette for comfort in everyday lifestyle.",
        price: 130.0,
        stock: 10,
        sizes: &["XS", "S", "M", "XXL"],
        gender: Gender::Women,
        tags: &["hoodie"],
        images: &["1740226-00-A_0_2000.jpg", "1740226-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Women's Raven Slouchy Crew Sweatshirt",
        slug: "women_raven_slouchy_crew_sweatshirt",
        description: "Introducing the Tesla Raven Collection. The Women's Raven Slouchy Crew Sweatshirt has a premium, relaxed silhouette made from a sustainable bamboo cotton blend.",
        price: 110.0,
        stock: 9,
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        gender: Gender::Women,
        tags: &["hoodie"],
        images: &["1740260-00-A_0_2000.jpg", "1740260-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Women's T Logo Short Sleeve Scoop Neck Tee",
        slug: "women_t_logo_short_sleeve_scoop_neck_tee",
        description: "Designed for style and comfort, the Women's T Logo Short Sleeve Scoop Neck Tee features a tonal 3D silicone-printed T logo in the center chest.",
        price: 35.0,
        stock: 0,
        sizes: &["XS", "S", "L", "XL", "XXL"],
        gender: Gender::Women,
        tags: &["shirt"],
        images: &["8765090-00-A_0_2000.jpg", "8765090-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Kids Cybertruck Long Sleeve Tee",
        slug: "kids_cybertruck_long_sleeve_tee",
        description: "The Kids Cybertruck Long Sleeve Tee features the iconic Cybertruck graffiti wordmark and is made from 100% Peruvian cotton for maximum comfort.",
        price: 30.0,
        stock: 10,
        sizes: &["XS", "S", "M"],
        gender: Gender::Kids,
        tags: &["shirt"],
        images: &["1742694-00-A_1_2000.jpg", "1742694-00-A_2.jpg"],
    },
    SeedProduct {
        title: "Kids Scribble T Logo Tee",
        slug: "kids_scribble_t_logo_tee",
        description: "The Kids Scribble T Logo Tee is made from 100% Peruvian cotton and features a Tesla T sketched logo for every young artist to wear.",
        price: 25.0,
        stock: 0,
        sizes: &["XS", "S", "M"],
        gender: Gender::Kids,
        tags: &["shirt"],
        images: &["8529312-00-A_0_2000.jpg", "8529312-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Kids Racing Stripe Tee",
        slug: "kids_racing_stripe_tee",
        description: "Your mini speedster will love the Kids Racing Stripe Tee. Made from 100% Peruvian cotton with a classic racing stripe down the front.",
        price: 30.0,
        stock: 10,
        sizes: &["XS", "S", "M"],
        gender: Gender::Kids,
        tags: &["shirt"],
        images: &["1742693-00-A_0_2000.jpg", "1742693-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Relaxed T Logo Hat",
        slug: "relaxed_t_logo_hat",
        description: "The Relaxed T Logo Hat is a classic silhouette combined with modern details, featuring a 3D T logo and a custom metal buckle closure.",
        price: 30.0,
        stock: 11,
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        gender: Gender::Unisex,
        tags: &["hats"],
        images: &["1657932-00-A_0_2000.jpg", "1657932-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Thermal Cuffed Beanie",
        slug: "thermal_cuffed_beanie",
        description: "The Thermal Cuffed Beanie keeps you warm with a soft thermal knit and a subtle embroidered T logo on the front cuff.",
        price: 35.0,
        stock: 13,
        sizes: &["M", "L", "XL", "XXL"],
        gender: Gender::Unisex,
        tags: &["hats"],
        images: &["1740417-00-A_0_2000.jpg", "1740417-00-A_1.jpg"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::normalize_slug;

    #[test]
    fn titles_and_slugs_are_unique() {
        let titles: HashSet<_> = SEED_PRODUCTS.iter().map(|p| p.title).collect();
        let slugs: HashSet<_> = SEED_PRODUCTS.iter().map(|p| normalize_slug(p.slug)).collect();
        assert_eq!(titles.len(), SEED_PRODUCTS.len());
        assert_eq!(slugs.len(), SEED_PRODUCTS.len());
    }

    #[test]
    fn covers_every_gender() {
        for gender in [Gender::Men, Gender::Women, Gender::Kids, Gender::Unisex] {
            assert!(SEED_PRODUCTS.iter().any(|p| p.gender == gender));
        }
    }

    #[test]
    fn command_carries_every_field() {
        let cmd = SEED_PRODUCTS[0].to_command();
        assert_eq!(cmd.title, SEED_PRODUCTS[0].title);
        assert_eq!(cmd.sizes.len(), SEED_PRODUCTS[0].sizes.len());
        assert_eq!(cmd.images.map(|i| i.len()), Some(2));
    }
}
