pub mod health;
pub mod metrics;
pub mod products;
pub mod request_id;
pub mod seed;
