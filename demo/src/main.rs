//! llrb-demo - builds a tree from a scenario and prints its metrics
//!
//! Usage:
//!   llrb-demo [--scenario <yaml>] [--insert 1,2,3] [--delete 2]

mod scenario;

use anyhow::{Context, Result};
use clap::Parser;
use llrb::LlrbTree;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scenario::{Scenario, ScenarioArgs};

#[derive(Parser)]
#[command(name = "llrb-demo")]
#[command(about = "Insert and delete keys in a left-leaning red-black tree")]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Print the tree contents after every step
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let scenario = Scenario::resolve(cli.scenario)?;
    tracing::info!(name = %scenario.name, "Running scenario");

    let tree = run(&scenario, cli.verbose)?;

    println!("Keys: {tree}");
    println!("Total height: {}", tree.total_height());
    println!("Black height: {}", tree.black_height());
    println!("Black node count: {}", tree.black_node_count());
    Ok(())
}

fn run(scenario: &Scenario, verbose: bool) -> Result<LlrbTree<i64>> {
    let mut tree = LlrbTree::new();

    tracing::info!(keys = ?scenario.insert, "Inserting");
    for &key in &scenario.insert {
        tree = tree.insert(key);
        tree.validate()
            .with_context(|| format!("tree invalid after inserting {key}"))?;
        if verbose {
            tracing::info!("insert {key}: {tree}");
        }
    }

    tracing::info!(keys = ?scenario.delete, "Deleting");
    for key in &scenario.delete {
        if !tree.contains(key) {
            tracing::warn!("key {key} is not in the tree; skipping");
            continue;
        }
        tree = tree.delete(key);
        tree.validate()
            .with_context(|| format!("tree invalid after deleting {key}"))?;
        if verbose {
            tracing::info!("delete {key}: {tree}");
        }
    }

    Ok(tree)
}
