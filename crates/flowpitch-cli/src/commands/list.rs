use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use flowpitch_core::{AppConfig, Deck, SlideLayout};

#[derive(Debug, Serialize)]
struct SlideSummary<'a> {
    index: usize,
    layout: SlideLayout,
    kicker: &'a str,
    title: &'a str,
}

fn summaries(deck: &Deck) -> Vec<SlideSummary<'_>> {
    deck.slides
        .iter()
        .enumerate()
        .map(|(i, slide)| SlideSummary {
            index: i + 1,
            layout: slide.layout,
            kicker: &slide.kicker,
            title: &slide.title,
        })
        .collect()
}

pub fn run(config: &AppConfig, deck: Option<PathBuf>, json: bool) -> Result<()> {
    let deck = super::resolve_deck(config, deck)?;
    let slides = summaries(&deck);

    if json {
        println!("{}", serde_json::to_string_pretty(&slides)?);
        return Ok(());
    }

    let title = deck.display_title();
    if title.is_empty() {
        println!("Slides ({}):\n", slides.len());
    } else {
        println!("{} ({} slides):\n", title, slides.len());
    }

    for slide in &slides {
        let layout = match slide.layout {
            SlideLayout::Standard => "",
            SlideLayout::Hero => " [hero]",
        };
        if slide.kicker.is_empty() {
            println!("  {:>2}. {}{}", slide.index, slide.title, layout);
        } else {
            println!("  {:>2}. {} - {}{}", slide.index, slide.kicker, slide.title, layout);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summaries_are_one_based() {
        let deck = Deck::demo().unwrap();
        let slides = summaries(&deck);
        assert_eq!(slides.len(), 7);
        assert_eq!(slides[0].index, 1);
        assert_eq!(slides[0].layout, SlideLayout::Hero);
        assert_eq!(slides[0].kicker, "FLOWPITCH");
        assert_eq!(
            slides[0].title,
            "FlowPitch turns a presentation into a trackable persuasive asset."
        );
    }

    #[test]
    fn test_summary_json_shape() {
        let deck = Deck::demo().unwrap();
        let json = serde_json::to_value(summaries(&deck)).unwrap();
        assert_eq!(json[0]["layout"], "hero");
        assert_eq!(json[2]["index"], 3);
        assert_eq!(json[2]["layout"], "standard");
    }
}
