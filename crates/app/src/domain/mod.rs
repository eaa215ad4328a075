//! Shopfront Domain Concerns

pub mod products;
