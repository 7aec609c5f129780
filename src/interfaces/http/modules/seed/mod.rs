//! Database reseeding endpoint

pub mod handlers;

pub use handlers::*;
