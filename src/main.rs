use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront::{config::Config, load_catalog, utils::init_logger};
use tracing::info;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the catalog, fill a cart and check out from the terminal", long_about = None)]
struct Cli {
    /// Catalog JSON file (overrides STOREFRONT_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive storefront (default)
    Tui,

    /// Print the products matching a query and category
    Products {
        /// Case-insensitive text to look for in names and descriptions
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// Only show this category
        #[arg(long, short = 'c', default_value = "")]
        category: String,
    },

    /// Print the category list
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    let _guard = init_logger(&config.logging)?;
    info!("Configuration loaded: {:?}", config.catalog);

    let catalog = load_catalog(&config.catalog).await?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => storefront::tui::run(config, catalog).await?,
        Commands::Products { query, category } => {
            let products = catalog.filter(&query, &category);
            if products.is_empty() {
                eprintln!("No products match.");
            }
            for product in products {
                println!(
                    "{:>4}  {:<36} {:>10}  {}",
                    product.id,
                    product.name,
                    format!("${}", product.price),
                    product.category
                );
            }
        }
        Commands::Categories => {
            for category in catalog.categories() {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
