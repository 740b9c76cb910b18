//! One-shot command handlers behind the `catalog` subcommands.
//!
//! Each handler runs a single view-model operation and prints the result.
//! Failures were already logged or alerted by the view-model; handlers only
//! turn them into a non-zero exit.

use std::io::Write;

use anyhow::{bail, Context};

use catalog_core::ProductId;
use catalog_products::{missing_fields_error, Draft};

use crate::frontend::render;
use crate::types::{RefreshOutcome, RemoveOutcome, SubmitOutcome};
use crate::view_model::CatalogViewModel;

/// How listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Cards,
    Json,
}

/// Print every product.
pub async fn list_products<W: Write>(
    vm: &CatalogViewModel,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let outcome = vm.load_all().await;
    print_listing(vm, outcome, format, out)
}

/// Print the products matching `query` (all products for a blank query).
pub async fn search_products<W: Write>(
    vm: &CatalogViewModel,
    query: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let outcome = vm.search(query).await;
    print_listing(vm, outcome, format, out)
}

fn print_listing<W: Write>(
    vm: &CatalogViewModel,
    outcome: RefreshOutcome,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    if outcome == RefreshOutcome::Failed {
        bail!("could not fetch products from the Product Service");
    }

    let products = vm.products();
    match format {
        OutputFormat::Cards => write!(out, "{}", render::listing(&products))?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            render::listing_json(&products).context("failed to encode products")?
        )?,
    }
    Ok(())
}

/// Create a product and print the record the service returned. An
/// incomplete draft is rejected before anything is sent.
pub async fn submit_product<W: Write>(
    vm: &CatalogViewModel,
    draft: Draft,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    draft.ensure_complete()?;

    match vm.submit(draft).await {
        SubmitOutcome::Created(product) => {
            match format {
                OutputFormat::Cards => write!(out, "{}", render::product_card(&product))?,
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    serde_json::to_string_pretty(&product).context("failed to encode product")?
                )?,
            }
            Ok(())
        }
        SubmitOutcome::Incomplete(missing) => Err(missing_fields_error(&missing).into()),
        SubmitOutcome::Failed => bail!("product was not created"),
    }
}

/// Delete a product; the view-model asks for confirmation first.
pub async fn delete_product<W: Write>(
    vm: &CatalogViewModel,
    id: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let id: ProductId = id.parse().context("invalid product id")?;

    match vm.remove(&id).await {
        RemoveOutcome::Removed => writeln!(out, "deleted #{}", id)?,
        RemoveOutcome::Declined => writeln!(out, "kept #{}", id)?,
        RemoveOutcome::Failed => bail!("product #{} was not deleted", id),
    }
    Ok(())
}
