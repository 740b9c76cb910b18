//! `catalog-desktop`
//!
//! **Responsibility:** client for a remote product catalog.
//!
//! This crate provides:
//! - The catalog view-model (owned state + Product Service calls)
//! - An HTTP Product Service client
//! - Pluggable confirmation and alert dialogs
//! - A terminal frontend (`catalog` binary)
//!
//! The client is a **thin shell** around the Product Service, which owns
//! storage, validation and search.

pub mod cache;
pub mod commands;
pub mod config;
pub mod dialog;
pub mod frontend;
pub mod service;
pub mod types;
pub mod view_model;

pub use cache::{CatalogState, RefreshTicket};
pub use config::{ClientConfig, QueryEncoding};
pub use dialog::{AutoConfirm, Confirm, Notify, StderrAlert};
pub use service::{HttpProductService, ProductService, ServiceError};
pub use types::{RefreshOutcome, RemoveOutcome, SubmitOutcome, ViewTab};
pub use view_model::CatalogViewModel;
