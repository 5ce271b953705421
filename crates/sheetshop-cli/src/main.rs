mod sheets;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sheetshop-cli")]
#[command(about = "Inspect shop and catalog spreadsheets from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the CSV-export URL for a spreadsheet link
    CsvUrl {
        /// Spreadsheet share or edit link
        url: String,
    },
    /// Fetch an item sheet and print its catalog entries as JSON
    Items {
        /// Spreadsheet link of the item sheet
        url: String,
        /// Also report rows that were dropped and why
        #[arg(long)]
        show_skipped: bool,
    },
    /// Fetch the customers sheet and print shop profiles as JSON
    Customers {
        /// Spreadsheet link (defaults to `SHEETSHOP_CUSTOMERS_SHEET_URL`)
        #[arg(long)]
        url: Option<String>,
        /// Also report rows that were dropped and why
        #[arg(long)]
        show_skipped: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = sheetshop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::CsvUrl { url }) => sheets::run_csv_url(&url)?,
        Some(Commands::Items { url, show_skipped }) => {
            sheets::run_items(&config, &url, show_skipped).await?;
        }
        Some(Commands::Customers { url, show_skipped }) => {
            let url = url.unwrap_or_else(|| config.customers_sheet_url.clone());
            sheets::run_customers(&config, &url, show_skipped).await?;
        }
        None => println!("sheetshop-cli: run with --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
