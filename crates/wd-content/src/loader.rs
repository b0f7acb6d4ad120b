//! Loading flashcard decks from JSON.
//!
//! Two layouts are accepted:
//!
//! - a flat array of cards, each with `front`, `back` and an optional
//!   `chapter` (other fields such as `id`, `difficulty` or `tags` are
//!   ignored), as produced by the deck export tooling;
//! - an object mapping chapter names to arrays of `{front, back}` cards.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::card::Flashcard;
use crate::error::{ContentError, ContentResult};
use crate::store::ContentStore;

#[derive(Deserialize)]
struct DeckCard {
    front: String,
    back: String,
    #[serde(default)]
    chapter: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Deck {
    Flat(Vec<DeckCard>),
    Chapters(BTreeMap<String, Vec<Flashcard>>),
}

/// Parse a deck from a JSON string.
pub fn from_json_str(json: &str) -> ContentResult<ContentStore> {
    let deck: Deck = serde_json::from_str(json)?;
    let store = match deck {
        Deck::Flat(cards) => ContentStore::from_cards(
            cards
                .into_iter()
                .map(|c| (c.chapter, Flashcard::new(c.front, c.back))),
        ),
        Deck::Chapters(chapters) => {
            let mut store = ContentStore::new();
            for (name, cards) in chapters {
                store.insert_chapter(name, cards);
            }
            store
        }
    };
    tracing::debug!(
        chapters = store.len(),
        cards = store.card_count(),
        "loaded flashcard deck"
    );
    Ok(store)
}

/// Read and parse a deck file.
pub fn load_file(path: &Path) -> ContentResult<ContentStore> {
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&json)
}
