mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ecwid_api::{Client, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "ecwid")]
#[command(about = "Query an Ecwid store through the REST API v3")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Numeric store ID
    #[arg(long, env = "ECWID_STORE_ID", global = true)]
    store_id: Option<u64>,

    /// OAuth access token
    #[arg(long, env = "ECWID_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long, env = "ECWID_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search products or get one by ID
    Products(commands::products::ProductsArgs),
    /// List categories or get one by ID
    Categories(commands::categories::CategoriesArgs),
    /// Search orders or get one by number
    Orders(commands::orders::OrdersArgs),
    /// Search customers or get one by ID
    Customers(commands::customers::CustomersArgs),
    /// List discount coupons or get one by code
    Coupons(commands::coupons::CouponsArgs),
    /// Show the store profile
    Profile,
    /// Show when the catalog, orders and profile last changed
    Stats,
    /// List deleted products, customers, orders or coupons
    Deleted(commands::deleted::DeletedArgs),
    /// Download a file attached to a product
    DownloadFile(commands::download::DownloadArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ecwid=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output)?;

    let store_id = cli
        .store_id
        .context("no store ID: pass --store-id or set ECWID_STORE_ID")?;
    let token = cli.token.unwrap_or_default();
    if token.is_empty() {
        tracing::warn!("No access token set; most endpoints will reject the request");
    }

    let client = Client::with_base_url(&cli.base_url)?;
    let store = client.store(store_id, token);

    match &cli.command {
        Commands::Products(args) => commands::products::run(args, &store, &format)?,
        Commands::Categories(args) => commands::categories::run(args, &store, &format)?,
        Commands::Orders(args) => commands::orders::run(args, &store, &format)?,
        Commands::Customers(args) => commands::customers::run(args, &store, &format)?,
        Commands::Coupons(args) => commands::coupons::run(args, &store, &format)?,
        Commands::Profile => commands::profile::run_profile(&store, &format)?,
        Commands::Stats => commands::profile::run_stats(&store, &format)?,
        Commands::Deleted(args) => commands::deleted::run(args, &store, &format)?,
        Commands::DownloadFile(args) => commands::download::run(args, &store)?,
    }

    Ok(())
}
