//! `catalog` command-line entry point.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use catalog_desktop::commands::{self, OutputFormat};
use catalog_desktop::frontend::{self, TerminalInput};
use catalog_desktop::{
    AutoConfirm, CatalogViewModel, ClientConfig, Confirm, QueryEncoding, StderrAlert,
};
use catalog_products::Draft;

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Submit, list, search and delete catalog products")]
struct Cli {
    /// Product Service base URL (overrides CATALOG_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// How search text goes into the URL: raw or percent (overrides CATALOG_QUERY_ENCODING).
    #[arg(long, global = true)]
    query_encoding: Option<QueryEncoding>,

    /// Request timeout in seconds (overrides CATALOG_REQUEST_TIMEOUT_SECS).
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Print products as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all products.
    List,
    /// Search products; a blank query lists everything.
    Search {
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Submit a new product.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Delete a product by id.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Interactive session (default).
    Shell,
}

impl Cli {
    fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = ClientConfig::from_env().context("invalid catalog environment")?;
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url.as_str())?;
        }
        if let Some(encoding) = self.query_encoding {
            config = config.with_query_encoding(encoding);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_request_timeout(Some(Duration::from_secs(secs)));
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let cli = Cli::parse();
    let config = cli.client_config()?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Cards
    };

    let input = Arc::new(TerminalInput::stdin());
    let confirm: Arc<dyn Confirm> = match &cli.command {
        Some(Command::Delete { yes: true, .. }) => Arc::new(AutoConfirm),
        _ => input.clone(),
    };
    let vm = CatalogViewModel::from_config(&config, confirm, Arc::new(StderrAlert))
        .context("failed to build Product Service client")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Shell) {
        Command::List => commands::list_products(&vm, format, &mut out).await,
        Command::Search { query } => {
            commands::search_products(&vm, &query.join(" "), format, &mut out).await
        }
        Command::Submit {
            name,
            price,
            description,
            image,
        } => {
            let draft = Draft::new(name, price, description, image);
            commands::submit_product(&vm, draft, format, &mut out).await
        }
        Command::Delete { id, .. } => commands::delete_product(&vm, &id, &mut out).await,
        Command::Shell => {
            tracing::info!(api_url = %config.api_url, "starting interactive session");
            frontend::run_shell(&vm, &input, &mut out)
                .await
                .context("terminal session failed")
        }
    }
}
