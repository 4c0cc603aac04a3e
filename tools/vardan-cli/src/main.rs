//! Vardan CLI - developer tool for the Vardan storefront.
//!
//! Commands:
//! - `vardan catalog` - Inspect product prices
//! - `vardan cart` - Inspect and edit a cart kept in a JSON file store
//! - `vardan checkout` - Preview the order message and messaging link
//! - `vardan migrate` - Rewrite inline add-to-cart handlers in HTML files
//! - `vardan config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CatalogArgs, CheckoutArgs, ConfigArgs, MigrateArgs};

/// Vardan CLI - inspect the catalog, carts and storefront markup
#[derive(Parser)]
#[command(name = "vardan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the price catalog
    Catalog(CatalogArgs),

    /// Inspect and edit the offline cart
    Cart(CartArgs),

    /// Preview the order message for the current cart
    Checkout(CheckoutArgs),

    /// Migrate inline add-to-cart handlers to data attributes
    Migrate(MigrateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("VARDAN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Migrate(args) => commands::migrate::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
