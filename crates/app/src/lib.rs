//! Shared application domain and storage modules.

pub mod auth;
pub mod context;
pub mod domain;
