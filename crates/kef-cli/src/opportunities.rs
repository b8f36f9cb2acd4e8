use std::path::PathBuf;

use clap::Args;
use kef_core::{AppConfig, Opportunity, Platform};
use kef_discovery::{
    export::to_csv, filter_opportunities, sort_opportunities, OpportunityFilter, SortDirection,
    SortKey,
};
use kef_store::{ClientStore, OpportunityStore};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Filter by client id.
    #[arg(long)]
    client: Option<String>,
    /// Filter by platform (reddit, quora, facebook, ...).
    #[arg(long)]
    platform: Option<String>,
    /// Filter by keyword substring (case-insensitive).
    #[arg(long)]
    keyword: Option<String>,
    /// Show only visited (true) or unvisited (false) opportunities.
    #[arg(long)]
    visited: Option<bool>,
    /// Sort key: discoveredAt, rankingPosition, platform, keyword, client.
    #[arg(long, default_value = "discoveredAt")]
    sort: String,
    /// Sort direction: asc or desc.
    #[arg(long, default_value = "desc")]
    direction: String,
}

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    list: ListArgs,
    /// Destination CSV file.
    #[arg(long)]
    output: PathBuf,
}

async fn load_view(
    config: &AppConfig,
    args: &ListArgs,
) -> anyhow::Result<(Vec<Opportunity>, Vec<kef_core::Client>)> {
    let filter = OpportunityFilter {
        client_id: args.client.clone(),
        platform: args
            .platform
            .as_deref()
            .map(str::parse::<Platform>)
            .transpose()?,
        keyword: args.keyword.clone(),
        visited: args.visited,
    };
    let sort = args.sort.parse::<SortKey>()?;
    let direction = args.direction.parse::<SortDirection>()?;

    let opportunities = OpportunityStore::new(&config.data_dir).list().await?;
    let clients = ClientStore::new(&config.data_dir).list().await?;

    let filtered = filter_opportunities(opportunities, &filter);
    let sorted = sort_opportunities(filtered, &clients, sort, direction);
    Ok((sorted, clients))
}

pub(crate) async fn list(config: &AppConfig, args: ListArgs) -> anyhow::Result<()> {
    let (opportunities, _) = load_view(config, &args).await?;
    if opportunities.is_empty() {
        println!("no opportunities match");
        return Ok(());
    }

    for opp in opportunities {
        println!(
            "{:<13} #{:<3} {}  {}  {}  {}",
            opp.platform,
            opp.ranking_position,
            opp.discovered_at.format("%Y-%m-%d"),
            if opp.visited { "visited" } else { "new" },
            opp.title,
            opp.url
        );
    }
    Ok(())
}

pub(crate) async fn export(config: &AppConfig, args: ExportArgs) -> anyhow::Result<()> {
    let (opportunities, clients) = load_view(config, &args.list).await?;
    let csv = to_csv(&opportunities, &clients);

    tokio::fs::write(&args.output, csv).await?;
    println!(
        "exported {} opportunities to {}",
        opportunities.len(),
        args.output.display()
    );
    Ok(())
}
