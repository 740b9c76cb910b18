//! Text rendering of the catalog view.

use catalog_products::{Draft, DraftField, Product};

use crate::cache::CatalogState;
use crate::types::ViewTab;

/// Both tab labels, the active one bracketed.
pub fn tab_bar(active: ViewTab) -> String {
    ViewTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// One product: id and name, price, then description and image when present.
pub fn product_card(product: &Product) -> String {
    let mut card = format!("#{}  {}\n    ${}\n", product.id, product.name, product.price);
    if !product.description.trim().is_empty() {
        card.push_str(&format!("    {}\n", product.description));
    }
    if let Some(url) = product.image_url() {
        card.push_str(&format!("    image: {}\n", url));
    }
    card
}

pub fn listing(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products to show.\n".to_string();
    }
    products
        .iter()
        .map(product_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Submission form with the current draft values; required fields are
/// starred.
pub fn submission_form(draft: &Draft) -> String {
    let mut form = String::new();
    for field in DraftField::ALL {
        let marker = if field.is_required() { "*" } else { " " };
        form.push_str(&format!("  {}{}: {}\n", marker, field.label(), draft.get(field)));
    }
    form
}

/// The whole screen for the active tab.
pub fn view(state: &CatalogState) -> String {
    let mut screen = format!("{}\n\n", tab_bar(state.tab()));
    match state.tab() {
        ViewTab::Submission => screen.push_str(&submission_form(state.draft())),
        ViewTab::Listing => {
            screen.push_str(&format!("Search: {}\n\n", state.query()));
            screen.push_str(&listing(state.products()));
        }
    }
    screen
}

pub fn listing_json(products: &[Product]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(products)
}
