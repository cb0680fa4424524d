//! IMS Inventory - command-line front end
//!
//! Mounts the inventory screen for one user, applies a single action and
//! prints the resulting product table.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use ims_inventory::{
    FetchOutcome, GatewayConfig, InventoryScreen, InventoryView, NewProduct, ProductUpdate,
};

/// Inventory screen client for the IMS backend
#[derive(Parser, Debug)]
#[command(name = "ims_inventory")]
#[command(version, about, long_about = None)]
struct Args {
    /// Owner whose products and stores are shown
    #[arg(short, long, env = "IMS_USER")]
    user: String,

    /// Backend base URL (overrides config file and IMS_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all products (default)
    List,
    /// Show products matching a search term
    Search { term: String },
    /// Create a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        manufacturer: String,
        #[arg(long, default_value_t = 0)]
        stock: u32,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Change fields of an existing product
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        manufacturer: Option<String>,
        #[arg(long)]
        stock: Option<u32>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a product
    Delete { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Set RUST_LOG to control verbosity, e.g. RUST_LOG=ims_inventory=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = GatewayConfig::load();
    if let Some(url) = args.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    log::info!("Using backend: {}", config.base_url);

    let screen = match InventoryScreen::connect(&config, &args.user) {
        Ok(screen) => screen,
        Err(e) => {
            log::error!("Failed to open inventory: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(FetchOutcome::Failed(msg)) = screen.mount().await {
        log::warn!("Initial product fetch failed: {msg}");
    }

    if let Err(e) = run_command(&screen, args.command.unwrap_or(Command::List)).await {
        log::error!("{e}");
        print_view(&screen.view().await);
        return ExitCode::FAILURE;
    }

    print_view(&screen.view().await);
    ExitCode::SUCCESS
}

async fn run_command(screen: &InventoryScreen, command: Command) -> ims_inventory::Result<()> {
    match command {
        Command::List => {}
        Command::Search { term } => {
            if let FetchOutcome::Failed(msg) = screen.set_search_query(&term).await {
                log::warn!("Search failed: {msg}");
            }
        }
        Command::Add {
            name,
            manufacturer,
            stock,
            description,
        } => {
            screen.open_add().await;
            let created = screen
                .create_product(NewProduct {
                    user_id: String::new(),
                    name,
                    manufacturer,
                    stock,
                    description,
                })
                .await?;
            log::info!("Added {} ({})", created.name, created.id);
        }
        Command::Update {
            id,
            name,
            manufacturer,
            stock,
            description,
        } => {
            if !screen.open_edit(&id).await {
                log::warn!("Product {id} is not in the current list");
            }
            let update = ProductUpdate {
                name,
                manufacturer,
                stock,
                description,
            };
            let updated = screen.update_product(&id, update).await?;
            log::info!("Updated {} ({})", updated.name, updated.id);
        }
        Command::Delete { id } => {
            screen.delete_product(&id).await?;
            log::info!("Deleted {id}");
        }
    }
    Ok(())
}

fn print_view(view: &InventoryView) {
    print!("{view}");
}
