//! Shared view types.
//!
//! Kept free of runtime and HTTP dependencies so any frontend can use them.

use serde::{Deserialize, Serialize};

use catalog_products::{DraftField, Product};

/// The two UI modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewTab {
    /// Submission form (initial tab).
    #[default]
    Submission,
    /// Product listing with search.
    Listing,
}

impl ViewTab {
    pub const ALL: [ViewTab; 2] = [ViewTab::Submission, ViewTab::Listing];

    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Submission => "Product Submission",
            ViewTab::Listing => "My Products",
        }
    }
}

impl core::str::FromStr for ViewTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "submit" | "submission" | "form" => Ok(ViewTab::Submission),
            "list" | "listing" | "products" => Ok(ViewTab::Listing),
            other => Err(format!("unknown tab '{}'; expected submit or list", other)),
        }
    }
}

/// Result of a list-replacing request (`load_all` / `search`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response replaced the displayed list.
    Applied { count: usize },
    /// A newer refresh was issued meanwhile; the response was dropped.
    Stale,
    /// The request failed; the list is unchanged.
    Failed,
}

/// Result of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Created record, now at the front of the list.
    Created(Product),
    /// Required fields were empty; nothing was sent.
    Incomplete(Vec<DraftField>),
    /// The service rejected the draft or was unreachable (user was alerted).
    Failed,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// The service call failed (user was alerted).
    Failed,
}
