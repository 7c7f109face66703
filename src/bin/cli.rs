use anyhow::Result;
use capacity_report::{
    inventory::{Inventory, InventoryProvider},
    model, report, summary,
};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Restrict the report to the given flavor names.
    #[arg(short, long)]
    flavor: Vec<String>,

    /// Path to the cluster inventory snapshot.
    #[arg(short, long)]
    inventory: String,

    /// Print the report rows as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let inventory = Inventory::from_file(&cli.inventory).await?;

    let nodes = model::enabled_nodes(&inventory.services().await?);
    let flavors = inventory.flavors().await?;

    let summary = summary::summarize(&nodes, &flavors, &cli.flavor);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary.rows)?);
    } else {
        print!("{}", report::render(&nodes, &summary, cli.verbose));
    }

    Ok(())
}
