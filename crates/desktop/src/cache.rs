//! Client-side catalog state.
//!
//! `CatalogState` owns everything the view shows: the displayed products,
//! the pending draft, the active tab and the search query. Every request
//! outcome is reconciled through one of the transition methods below, each a
//! single synchronous replacement, so callers can hold the state behind a
//! plain mutex and never across an `.await`.

use catalog_core::{Entity, ProductId};
use catalog_products::{Draft, Product};

pub use crate::types::ViewTab;

/// Tag handed out when a list-replacing request starts.
///
/// Only the ticket of the most recently started refresh can apply its
/// response; older ones are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Displayed catalog plus view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    draft: Draft,
    tab: ViewTab,
    query: String,
    refresh_generation: u64,
}

impl CatalogState {
    /// Initial state: no products, blank draft, Submission tab.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn select_tab(&mut self, tab: ViewTab) {
        self.tab = tab;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn replace_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Start a list-replacing request. Any ticket issued earlier goes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.refresh_generation += 1;
        RefreshTicket(self.refresh_generation)
    }

    /// Replace the displayed list with a server response, verbatim and in
    /// server order. Returns `false` (and changes nothing) for a stale ticket.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, products: Vec<Product>) -> bool {
        if ticket.0 != self.refresh_generation {
            return false;
        }
        self.products = products;
        true
    }

    /// A create succeeded: show the new record first, reset the form and
    /// switch to the listing.
    pub fn apply_created(&mut self, product: Product) {
        self.products.insert(0, product);
        self.draft = Draft::default();
        self.tab = ViewTab::Listing;
    }

    /// A delete succeeded: drop every displayed record with this id.
    ///
    /// Returns how many entries were removed (zero if a concurrent refresh
    /// already dropped it).
    pub fn apply_removed(&mut self, id: &ProductId) -> usize {
        let before = self.products.len();
        self.products.retain(|p| !p.is_identified_by(id));
        before - self.products.len()
    }
}
