//! `catalog-core`: shared building blocks for the catalog client.
//!
//! Pure types only (no HTTP, no runtime).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
