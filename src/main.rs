mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use careboard_core::Careboard;
use careboard_core::catalog;

#[derive(Parser)]
#[command(name = "careboard")]
#[command(about = "Browse care event months, check coverage, and export reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the months that have events
    Months,
    /// Render a month's calendar grid
    Calendar {
        /// Month slug (YYYY-MM); defaults to the most recent month
        month: Option<String>,
    },
    /// Show per-event coverage for a month
    Coverage {
        /// Month slug (YYYY-MM); defaults to the most recent month
        month: Option<String>,

        /// Only show events in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Write the month's coverage report as CSV
    Export {
        /// Month slug (YYYY-MM); defaults to the most recent month
        month: Option<String>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = Careboard::load()?;

    match cli.command {
        Commands::Months => commands::months::run(&store),
        Commands::Calendar { month } => {
            let slug = resolve_month(&store, month)?;
            commands::calendar::run(&store, &slug)
        }
        Commands::Coverage { month, category } => {
            let slug = resolve_month(&store, month)?;
            commands::coverage::run(&store, &slug, category.as_deref())
        }
        Commands::Export { month, output } => {
            let slug = resolve_month(&store, month)?;
            commands::export::run(&store, &slug, output.as_deref())
        }
    }
}

/// Use the given slug, or fall back to the most recent month with events.
fn resolve_month(store: &Careboard, month: Option<String>) -> Result<String> {
    if let Some(slug) = month {
        return Ok(slug);
    }

    let months = store.available_months()?;
    match catalog::default_month(&months) {
        Some(item) => Ok(item.slug.clone()),
        None => anyhow::bail!(
            "No events found.\n\n\
            Add events to the store first, then pick a month with:\n  \
            careboard months"
        ),
    }
}
