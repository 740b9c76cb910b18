//! Catalog view-model.
//!
//! Issues Product Service requests and reconciles their outcomes into the
//! owned [`CatalogState`]. The state lock is only taken for synchronous
//! transitions, never across a request, so independent operations may be in
//! flight at the same time.
//!
//! Failure handling follows two classes:
//! - listing fetches (`load_all`, `search`) log to the diagnostic channel
//!   (`tracing`) and keep the previous list;
//! - mutations (`submit`, `remove`) also raise a user-visible alert.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use catalog_core::ProductId;
use catalog_products::{Draft, Product};

use crate::cache::{CatalogState, RefreshTicket};
use crate::config::ClientConfig;
use crate::dialog::{Confirm, Notify};
use crate::service::{HttpProductService, ProductService, ServiceError};
use crate::types::{RefreshOutcome, RemoveOutcome, SubmitOutcome, ViewTab};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";
pub const SUBMIT_FAILED_ALERT: &str = "Failed to submit product. Please check fields and try again.";
pub const DELETE_FAILED_ALERT: &str = "Failed to delete product. Please try again.";

pub struct CatalogViewModel {
    service: Arc<dyn ProductService>,
    confirm: Arc<dyn Confirm>,
    notify: Arc<dyn Notify>,
    state: Mutex<CatalogState>,
}

impl CatalogViewModel {
    pub fn new(
        service: Arc<dyn ProductService>,
        confirm: Arc<dyn Confirm>,
        notify: Arc<dyn Notify>,
    ) -> Self {
        Self {
            service,
            confirm,
            notify,
            state: Mutex::new(CatalogState::new()),
        }
    }

    /// View-model talking HTTP to the service described by `config`.
    pub fn from_config(
        config: &ClientConfig,
        confirm: Arc<dyn Confirm>,
        notify: Arc<dyn Notify>,
    ) -> Result<Self, ServiceError> {
        let service = HttpProductService::new(config)?;
        tracing::info!(api_url = %service.api_url(), "catalog client configured");
        Ok(Self::new(Arc::new(service), confirm, notify))
    }

    // A panic elsewhere cannot leave the state half-updated (transitions are
    // single assignments), so a poisoned lock is still usable.
    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state, for rendering.
    pub fn snapshot(&self) -> CatalogState {
        self.state().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state().products().to_vec()
    }

    pub fn tab(&self) -> ViewTab {
        self.state().tab()
    }

    pub fn draft(&self) -> Draft {
        self.state().draft().clone()
    }

    pub fn select_tab(&self, tab: ViewTab) {
        tracing::debug!(tab = tab.label(), "tab selected");
        self.state().select_tab(tab);
    }

    /// Edit the pending draft in place.
    pub fn update_draft(&self, edit: impl FnOnce(&mut Draft)) {
        edit(self.state().draft_mut());
    }

    /// Initial load when the view starts.
    pub async fn mount(&self) -> RefreshOutcome {
        self.load_all().await
    }

    /// Replace the displayed list with the full collection.
    pub async fn load_all(&self) -> RefreshOutcome {
        let ticket = self.state().begin_refresh();
        let result = self.service.list().await;
        self.finish_refresh("load_all", ticket, result)
    }

    /// Replace the displayed list with server-side matches for `query`.
    ///
    /// A blank query clears the search and loads everything.
    pub async fn search(&self, query: &str) -> RefreshOutcome {
        self.state().set_query(query);
        if query.trim().is_empty() {
            return self.load_all().await;
        }

        let ticket = self.state().begin_refresh();
        let result = self.service.search(query).await;
        self.finish_refresh("search", ticket, result)
    }

    fn finish_refresh(
        &self,
        operation: &'static str,
        ticket: RefreshTicket,
        result: Result<Vec<Product>, ServiceError>,
    ) -> RefreshOutcome {
        match result {
            Ok(products) => {
                let count = products.len();
                if self.state().apply_refresh(ticket, products) {
                    tracing::info!(operation, count, "product list refreshed");
                    RefreshOutcome::Applied { count }
                } else {
                    tracing::debug!(
                        operation,
                        generation = ticket.generation(),
                        "discarding stale product list"
                    );
                    RefreshOutcome::Stale
                }
            }
            Err(e) => {
                tracing::error!(operation, error = %e, "failed to fetch products");
                RefreshOutcome::Failed
            }
        }
    }

    /// Submit `draft` as a new product.
    ///
    /// The draft becomes the pending form first, so a failure leaves it in
    /// place for the user to fix and retry.
    pub async fn submit(&self, draft: Draft) -> SubmitOutcome {
        self.state().replace_draft(draft.clone());

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "draft incomplete; not submitting");
            return SubmitOutcome::Incomplete(missing);
        }

        match self.service.create(&draft).await {
            Ok(product) => {
                tracing::info!(id = %product.id, name = %product.name, "product created");
                self.state().apply_created(product.clone());
                SubmitOutcome::Created(product)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to submit product");
                self.notify.alert(SUBMIT_FAILED_ALERT);
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit whatever is currently in the pending draft.
    pub async fn submit_pending(&self) -> SubmitOutcome {
        let draft = self.draft();
        self.submit(draft).await
    }

    /// Delete a product after the user confirms.
    pub async fn remove(&self, id: &ProductId) -> RemoveOutcome {
        if !self.confirm.confirm(DELETE_PROMPT).await {
            tracing::info!(%id, "delete declined");
            return RemoveOutcome::Declined;
        }

        match self.service.delete(id).await {
            Ok(()) => {
                let removed = self.state().apply_removed(id);
                tracing::info!(%id, removed, "product deleted");
                RemoveOutcome::Removed
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "failed to delete product");
                self.notify.alert(DELETE_FAILED_ALERT);
                RemoveOutcome::Failed
            }
        }
    }
}
