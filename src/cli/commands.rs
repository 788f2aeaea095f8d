use tracing::Level;

use crate::analyzers::{Aggregator, InsightSet};
use crate::cli::args::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::Country;
use crate::store::DatasetStore;
use crate::utils::progress::ProgressReporter;
use crate::views;

pub async fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;
    let store = DatasetStore::new(config);

    let progress = ProgressReporter::new_spinner("Loading datasets...", false);
    let outcome = store.get_or_load().await?;
    progress.finish_with_message(&outcome.report.summary());

    match cli.command {
        Commands::Overview => {
            println!("{}", views::render_overview(&outcome));
        }

        Commands::Compare { json } => {
            let table = Aggregator::new().summary_table(&outcome.combined);
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("{}", views::render_comparison(&table));
            }
        }

        Commands::Country { name } => {
            let country: Country = name.parse()?;
            println!("{}", views::render_country(outcome.dataset(country)));
        }

        Commands::Observations { json } => {
            let insights = InsightSet::generate(&outcome.combined);
            if json {
                println!("{}", serde_json::to_string_pretty(&insights)?);
            } else {
                println!("{}", views::render_observations(&insights));
            }
        }

        Commands::Report => {
            println!("{}", views::render_overview(&outcome));

            let table = Aggregator::new().summary_table(&outcome.combined);
            println!("{}", views::render_comparison(&table));

            for country in Country::ALL {
                println!("{}", views::render_country(outcome.dataset(country)));
            }

            let insights = InsightSet::generate(&outcome.combined);
            println!("{}", views::render_observations(&insights));
        }
    }

    Ok(())
}
