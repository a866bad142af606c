use anyhow::Result;
use owo_colors::OwoColorize;

use careboard_core::Careboard;
use careboard_core::coverage;
use careboard_core::month::MonthRange;

use crate::render::Render;

pub fn run(store: &Careboard, slug: &str, category: Option<&str>) -> Result<()> {
    let range = MonthRange::from_slug(slug)?;

    let events = store.events_in_category(&range, category)?;
    let ledger = store.ledger()?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    println!("{}", range.label().bold());

    for event in &events {
        let signed = ledger.count_for(event.id);
        let coverage = coverage::coverage(event.target_headcount, signed);

        let time = event.start.format("%a %e %b %H:%M");
        let category_tag = event
            .category
            .as_deref()
            .map(|c| format!("[{c}]").dimmed().to_string())
            .unwrap_or_default();

        println!(
            "  #{:<4} {} {} {} {}",
            event.id,
            time,
            event.name,
            coverage.render(),
            category_tag
        );
    }

    Ok(())
}
