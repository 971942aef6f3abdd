use clap::Parser;
use log::{info, warn};

use dishes_index::{load_config, IndexConfig, RebuildSummary, RecipeIndexer};

/// Index a tree of Markdown recipes into a JSON artifact
#[derive(Debug, Parser)]
#[command(name = "dishes-index", version, about)]
struct Cli {
    /// Directory holding the Markdown recipes
    #[arg(long)]
    root: Option<String>,

    /// Where to write the JSON artifact
    #[arg(short, long)]
    output: Option<String>,

    /// Name every source_file is rooted at
    #[arg(long)]
    root_name: Option<String>,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<String>,
}

/// Flags given on the command line win over the loaded configuration
fn apply_cli(cli: Cli, mut config: IndexConfig) -> IndexConfig {
    if let Some(root) = cli.root {
        config.corpus_root = root;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(root_name) = cli.root_name {
        config.root_name = root_name;
    }
    config
}

fn summary_line(summary: &RebuildSummary, output: &str) -> String {
    format!(
        "Successfully parsed {} recipes into {}",
        summary.recipes, output
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let config = apply_cli(cli, config);
    info!("Indexing {} into {}", config.corpus_root, config.output);

    let summary = RecipeIndexer::builder()
        .from_config(&config)
        .build()
        .rebuild(&config.output)?;

    if summary.errors > 0 {
        warn!("{} files could not be parsed", summary.errors);
    }
    println!("{}", summary_line(&summary, &config.output));

    Ok(())
}
