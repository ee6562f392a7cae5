use std::path::PathBuf;

use color_eyre::eyre::Result;
use pretty_assertions::assert_eq;

use keynote::infrastructure::deck_loader::DeckLoader;
use keynote::model::Stepper;

fn loader() -> DeckLoader {
    DeckLoader::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/slides"))
}

#[tokio::test]
async fn test_fixture_deck_in_file_name_order() -> Result<()> {
    let deck = loader().load().await?;

    let titles: Vec<&str> = deck
        .slides()
        .iter()
        .filter_map(|slide| slide.lines().next())
        .collect();
    assert_eq!(
        titles,
        vec!["# Fixture Deck", "## Second Slide", "## Third Slide"]
    );
    Ok(())
}

#[tokio::test]
async fn test_steps_map_to_slides() -> Result<()> {
    let deck = loader().load().await?;
    let mut stepper = Stepper::new(deck.len());

    assert_eq!(deck.slide_for_step(stepper.step()), None);
    stepper.apply(1);
    assert!(deck
        .slide_for_step(stepper.step())
        .is_some_and(|s| s.starts_with("# Fixture Deck")));
    stepper.apply(10);
    assert_eq!(stepper.step(), 3);
    assert!(deck
        .slide_for_step(stepper.step())
        .is_some_and(|s| s.contains("fn main() {}")));
    Ok(())
}

#[tokio::test]
async fn test_shipped_deck_loads() -> Result<()> {
    let deck = DeckLoader::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("slides"))
        .load()
        .await?;
    assert_eq!(deck.len(), 5);
    Ok(())
}
