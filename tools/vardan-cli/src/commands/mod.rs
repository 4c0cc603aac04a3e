//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod migrate;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products with their prices.
    List {
        /// Only products in this category.
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Resolve the current price of a product.
    Price {
        /// Product name.
        name: String,
        /// Variant label (default: first variant).
        #[arg(short, long)]
        variant: Option<String>,
    },
    /// Search products by name.
    Search {
        /// Case-insensitive substring.
        term: String,
    },
    /// Show every variant of a product.
    Show {
        /// Product name.
        name: String,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,

    /// Skip confirmation prompts.
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product.
    Add {
        /// Product name.
        name: String,
        /// Variant label.
        #[arg(short, long, default_value = "")]
        variant: String,
        /// Display price used when the catalog has none (e.g. "₹450").
        #[arg(short, long)]
        price: Option<String>,
        /// Image URL.
        #[arg(long, default_value = "")]
        image: String,
        /// Units to add.
        #[arg(short, long, default_value = "1")]
        qty: u32,
    },
    /// Change a line's quantity by a delta; zero or below removes it.
    Update {
        /// Line number as shown by `cart show`.
        line: usize,
        /// Quantity change, e.g. 2 or -1.
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a line.
    Remove {
        /// Line number as shown by `cart show`.
        line: usize,
    },
    /// Remove every line.
    Clear,
    /// Re-price every line from the catalog.
    Sync,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Offer to clear the cart once the link is produced.
    #[arg(long)]
    pub clear: bool,

    /// Skip confirmation prompts.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the migrate command.
#[derive(Args)]
pub struct MigrateArgs {
    /// HTML files to rewrite.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated), e.g. store.company_name.
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Convert a 1-based line number to a cart index.
pub(crate) fn line_index(line: usize) -> Option<usize> {
    line.checked_sub(1)
}
