use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::card::Flashcard;

/// Chapter assigned to cards that do not name one, and the label used when
/// the store is empty.
pub const DEFAULT_CHAPTER: &str = "Chapter1";

/// Flashcards partitioned into named chapters.
///
/// Chapters iterate in sorted name order, which is also the order floors
/// cycle through them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentStore {
    chapters: BTreeMap<String, Vec<Flashcard>>,
}

impl ContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(chapter, card)` pairs, keeping card order within
    /// each chapter. A missing chapter goes to [`DEFAULT_CHAPTER`].
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, Flashcard)>,
    {
        let mut store = Self::new();
        for (chapter, card) in cards {
            let chapter = chapter.unwrap_or_else(|| DEFAULT_CHAPTER.to_string());
            store.push(chapter, card);
        }
        store
    }

    /// Append a card to a chapter, creating the chapter if needed.
    pub fn push(&mut self, chapter: impl Into<String>, card: Flashcard) {
        self.chapters.entry(chapter.into()).or_default().push(card);
    }

    /// Replace a chapter's cards wholesale. An empty list is allowed.
    pub fn insert_chapter(&mut self, chapter: impl Into<String>, cards: Vec<Flashcard>) {
        self.chapters.insert(chapter.into(), cards);
    }

    /// Chapter names in sorted order.
    pub fn chapter_names(&self) -> impl Iterator<Item = &str> {
        self.chapters.keys().map(String::as_str)
    }

    /// Cards in a chapter, if the chapter exists.
    pub fn chapter(&self, name: &str) -> Option<&[Flashcard]> {
        self.chapters.get(name).map(Vec::as_slice)
    }

    /// Iterate `(chapter, cards)` in sorted chapter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Flashcard])> {
        self.chapters
            .iter()
            .map(|(name, cards)| (name.as_str(), cards.as_slice()))
    }

    /// The chapter studied on a given floor (1-based). Floors cycle through
    /// the chapters in sorted order. `None` when the store has no chapters.
    pub fn chapter_for_floor(&self, floor: u32) -> Option<&str> {
        let count = self.chapters.len();
        if count == 0 {
            return None;
        }
        let index = (floor.saturating_sub(1) as usize) % count;
        self.chapter_names().nth(index)
    }

    /// Cards to draw from for a chapter: the chapter itself when it has
    /// cards, otherwise the first chapter in sorted order. Returns an empty
    /// slice when neither has anything.
    pub fn cards_or_first(&self, chapter: &str) -> &[Flashcard] {
        match self.chapter(chapter) {
            Some(cards) if !cards.is_empty() => cards,
            _ => {
                tracing::warn!(chapter, "chapter has no cards, using first chapter");
                self.chapters
                    .values()
                    .next()
                    .map(Vec::as_slice)
                    .unwrap_or(&[])
            }
        }
    }

    /// Number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether the store has no chapters.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Total number of cards across all chapters.
    pub fn card_count(&self) -> usize {
        self.chapters.values().map(Vec::len).sum()
    }

    /// A small Swedish–English deck for playing without a content file.
    pub fn sample() -> Self {
        let mut store = Self::new();
        store.insert_chapter(
            "Chapter1",
            vec![
                Flashcard::new("hej", "hello, hi"),
                Flashcard::new("tack", "thanks / thank you"),
                Flashcard::new("ja", "yes"),
                Flashcard::new("nej", "no"),
                Flashcard::new("god morgon", "good morning"),
                Flashcard::new("hej då", "goodbye, bye"),
            ],
        );
        store.insert_chapter(
            "Chapter2",
            vec![
                Flashcard::new("katt", "cat"),
                Flashcard::new("hund", "dog"),
                Flashcard::new("hus", "house"),
                Flashcard::new("bok", "book"),
                Flashcard::new("vatten", "water"),
                Flashcard::new("bröd", "bread"),
            ],
        );
        store.insert_chapter(
            "Chapter3",
            vec![
                Flashcard::new("att äta", "to eat / eat"),
                Flashcard::new("att dricka", "to drink / drink"),
                Flashcard::new("att springa", "to run / run"),
                Flashcard::new("att läsa", "to read / read"),
                Flashcard::new("att sova", "to sleep / sleep"),
            ],
        );
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(prompt: &str) -> Flashcard {
        Flashcard::new(prompt, "x")
    }

    #[test]
    fn groups_cards_by_chapter() {
        let store = ContentStore::from_cards(vec![
            (Some("B".to_string()), card("b1")),
            (None, card("default")),
            (Some("A".to_string()), card("a1")),
            (Some("B".to_string()), card("b2")),
        ]);
        assert_eq!(
            store.chapter_names().collect::<Vec<_>>(),
            vec!["A", "B", "Chapter1"]
        );
        let b = store.chapter("B").unwrap();
        assert_eq!(b[0].prompt, "b1");
        assert_eq!(b[1].prompt, "b2");
        assert_eq!(store.card_count(), 4);
    }

    #[test]
    fn chapter_for_floor_cycles() {
        let store = ContentStore::sample();
        assert_eq!(store.chapter_for_floor(1), Some("Chapter1"));
        assert_eq!(store.chapter_for_floor(2), Some("Chapter2"));
        assert_eq!(store.chapter_for_floor(3), Some("Chapter3"));
        assert_eq!(store.chapter_for_floor(4), Some("Chapter1"));
    }

    #[test]
    fn chapter_for_floor_empty_store() {
        assert_eq!(ContentStore::new().chapter_for_floor(1), None);
    }

    #[test]
    fn cards_or_first_uses_chapter_when_present() {
        let store = ContentStore::sample();
        assert_eq!(store.cards_or_first("Chapter2")[0].prompt, "katt");
    }

    #[test]
    fn cards_or_first_falls_back_for_empty_chapter() {
        let mut store = ContentStore::new();
        store.insert_chapter("A", vec![card("first")]);
        store.insert_chapter("B", Vec::new());
        assert_eq!(store.cards_or_first("B")[0].prompt, "first");
        assert_eq!(store.cards_or_first("missing")[0].prompt, "first");
    }

    #[test]
    fn cards_or_first_on_empty_store() {
        assert!(ContentStore::new().cards_or_first("Chapter1").is_empty());
    }

    #[test]
    fn first_chapter_empty_yields_nothing() {
        let mut store = ContentStore::new();
        store.insert_chapter("A", Vec::new());
        assert!(store.cards_or_first("A").is_empty());
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
