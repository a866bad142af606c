use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use careboard_core::Careboard;
use careboard_core::month::MonthRange;
use careboard_core::report;

pub fn run(store: &Careboard, slug: &str, output: Option<&Path>) -> Result<()> {
    let range = MonthRange::from_slug(slug)?;

    let events = store.events_in(&range)?;
    let ledger = store.ledger()?;

    let event_ids: Vec<i64> = events.iter().map(|event| event.id).collect();
    let counts = ledger.counts_for(&event_ids);

    let rows = report::month_report(&events, &counts);
    let csv = report::render_csv(&rows);

    match output {
        Some(path) => {
            std::fs::write(path, &csv)?;
            println!(
                "Wrote {} ({} {})",
                path.display().to_string().bold(),
                rows.len(),
                if rows.len() == 1 { "event" } else { "events" }
            );
        }
        None => println!("{csv}"),
    }

    Ok(())
}
