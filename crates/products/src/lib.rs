//! Catalog records as the client sees them.
//!
//! `Product` mirrors what the Product Service returns; `Draft` is the
//! in-progress submission form. Pure data and rules (no IO, no HTTP).

pub mod draft;
pub mod product;

pub use catalog_core::ProductId;
pub use draft::{missing_fields_error, Draft, DraftField};
pub use product::{Price, Product};
