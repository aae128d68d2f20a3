mod catalog;
mod quick_view;
mod render;

use clap::{Parser, Subcommand};
use quickview_storefront::StorefrontClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "quickview-cli")]
#[command(about = "Browse a Shopify storefront from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the product grid for a collection
    Grid {
        /// Collection handle (defaults to QUICKVIEW_COLLECTION_HANDLE)
        #[arg(long)]
        collection: Option<String>,
        /// Number of products to show (1-250)
        #[arg(long)]
        limit: Option<u32>,
        /// Print the cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a product's quick view and resolve a variant
    QuickView {
        /// Product handle
        handle: String,
        /// Option choice as Name=Value; repeatable, applied in order
        #[arg(long = "select", value_name = "NAME=VALUE", value_parser = parse_selection)]
        selections: Vec<(String, String)>,
        /// Print the selection state as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the shop's first collections
    Collections {
        #[arg(long, default_value = "10")]
        first: u32,
    },
    /// Show the shop's name and description
    Shop,
}

/// Parses one `--select Name=Value` argument. `Name=` selects the empty value.
fn parse_selection(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing option name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("quickview-cli: run with --help to list commands");
        return Ok(());
    };

    let config = quickview_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = StorefrontClient::new(&config)
        .map_err(|e| anyhow::anyhow!("failed to build storefront client: {e}"))?;

    match command {
        Commands::Grid {
            collection,
            limit,
            json,
        } => {
            let handle = collection.unwrap_or_else(|| config.collection_handle.clone());
            let limit = limit.unwrap_or(config.collection_limit);
            catalog::run_grid(&client, &handle, limit, json).await?;
        }
        Commands::QuickView {
            handle,
            selections,
            json,
        } => quick_view::run_quick_view(&client, &handle, &selections, json).await?,
        Commands::Collections { first } => catalog::run_collections(&client, first).await?,
        Commands::Shop => catalog::run_shop(&client).await?,
    }

    Ok(())
}
