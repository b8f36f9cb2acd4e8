mod clients;
mod opportunities;
mod search;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kef-cli")]
#[command(about = "Keyword Engagement Finder command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a search over every stored client and replace the stored set.
    Search,
    /// List stored clients and their keywords.
    Clients,
    /// List stored opportunities with optional filters.
    Opportunities(opportunities::ListArgs),
    /// Export the filtered opportunity table as CSV.
    Export(opportunities::ExportArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = kef_core::load_app_config()?;

    match cli.command {
        Commands::Search => search::run(&config).await,
        Commands::Clients => clients::list(&config).await,
        Commands::Opportunities(args) => opportunities::list(&config, args).await,
        Commands::Export(args) => opportunities::export(&config, args).await,
    }
}
