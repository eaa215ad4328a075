//! Products

pub mod errors;
pub mod records;
mod slug;
pub mod store;

pub use errors::ProductStoreError;
pub use store::*;
