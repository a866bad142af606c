use anyhow::Result;
use owo_colors::OwoColorize;

use careboard_core::Careboard;

use crate::render::Render;

pub fn run(store: &Careboard) -> Result<()> {
    let months = store.available_months()?;

    if months.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for (index, month) in months.iter().enumerate() {
        if index == 0 {
            println!("{} {}", month.render(), "(latest)".dimmed());
        } else {
            println!("{}", month.render());
        }
    }

    Ok(())
}
