//! Flashcard content for Word Dungeon.
//!
//! Content is a read-only mapping from chapter names to ordered lists of
//! prompt/answer pairs. The engine draws its combat prompts from here; this
//! crate knows nothing about dungeons or monsters.

/// Flashcard type and the built-in fallback card.
pub mod card;
/// Error types for content loading.
pub mod error;
/// JSON loading of flashcard decks.
pub mod loader;
/// The chapter-partitioned content store.
pub mod store;

/// Re-export the flashcard type.
pub use card::Flashcard;
/// Re-export error types.
pub use error::{ContentError, ContentResult};
/// Re-export the content store.
pub use store::{ContentStore, DEFAULT_CHAPTER};
