use anyhow::Result;

use careboard_core::coverage;
use careboard_core::grid;
use careboard_core::month::MonthRange;
use careboard_core::Careboard;

use crate::render::render_calendar;

pub fn run(store: &Careboard, slug: &str) -> Result<()> {
    let range = MonthRange::from_slug(slug)?;

    let events = store.events_in(&range)?;
    let ledger = store.ledger()?;

    let cells = grid::build_grid(&range, &events);

    let is_full = |event_id: i64| {
        events
            .iter()
            .find(|event| event.id == event_id)
            .map(|event| {
                coverage::coverage(event.target_headcount, ledger.count_for(event_id))
                    .status
                    .is_full()
            })
            .unwrap_or(false)
    };

    println!("{}", render_calendar(&range.label(), &cells, is_full));
    Ok(())
}
