use std::path::Path;

use anyhow::Result;

pub fn run(path: &Path) -> Result<()> {
    let deck = super::load_deck(path)?;

    let hero = deck
        .slides
        .iter()
        .filter(|s| s.layout == flowpitch_core::SlideLayout::Hero)
        .count();
    println!(
        "{}: OK, {} slide{} ({} hero)",
        path.display(),
        deck.len(),
        if deck.len() == 1 { "" } else { "s" },
        hero
    );
    Ok(())
}
