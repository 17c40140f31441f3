//! ecoverde CLI - command line client for the marketplace backend.
//!
//! # Usage
//!
//! ```bash
//! # Log in and persist the session
//! ecoverde login -e anna@example.it -p segretissima
//!
//! # Show the logged-in user
//! ecoverde whoami
//!
//! # Browse listings
//! ecoverde products list --search "mele" --city Firenze
//! ecoverde products show 0d9e1a7e-9f3e-4a9e-8a2e-0b1c2d3e4f50
//!
//! # Reference data
//! ecoverde regions
//! ecoverde provinces --region Toscana
//! ```
//!
//! # Environment Variables
//!
//! - `ECOVERDE_API_URL` - backend base URL (default `http://localhost:8080`)
//! - `ECOVERDE_SESSION_FILE` - session file path (default `.ecoverde-session.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use ecoverde_core::types::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "ecoverde")]
#[command(author, version, about = "ecoverde marketplace client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Browse product listings
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// List the Italian regions
    Regions,
    /// List Italian provinces, optionally filtered by region
    Provinces {
        /// Only provinces of this region (e.g. `Toscana`)
        #[arg(short, long)]
        region: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List public listings, or your own with --mine
    List {
        #[arg(long)]
        page: Option<i64>,

        #[arg(long)]
        per_page: Option<i64>,

        /// Full-text search over title and description
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        min_price: Option<String>,

        #[arg(long)]
        max_price: Option<String>,

        /// Sort field (`price`, `created_at`, ...)
        #[arg(long)]
        sort_by: Option<String>,

        /// `asc` or `desc`
        #[arg(long)]
        sort_order: Option<String>,

        /// Your own listings instead of the public catalogue
        #[arg(long)]
        mine: bool,

        /// Status filter for --mine (`DRAFT`, `ACTIVE`, `SOLD`, ...)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show a single listing as JSON
    Show {
        /// Product ID
        id: ProductId,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&email, &password).await?,
        Commands::Logout => commands::auth::logout()?,
        Commands::Whoami => commands::auth::whoami().await?,
        Commands::Products { action } => match action {
            ProductsAction::List {
                page,
                per_page,
                search,
                city,
                min_price,
                max_price,
                sort_by,
                sort_order,
                mine,
                status,
            } => {
                if mine {
                    commands::products::list_mine(page, per_page, status.as_deref()).await?;
                } else {
                    let filter = commands::products::build_filter(
                        page, per_page, search, city, min_price, max_price, sort_by, sort_order,
                    )?;
                    commands::products::list(&filter).await?;
                }
            }
            ProductsAction::Show { id } => commands::products::show(id).await?,
        },
        Commands::Regions => commands::provinces::regions(),
        Commands::Provinces { region } => commands::provinces::list(region.as_deref()),
    }
    Ok(())
}
