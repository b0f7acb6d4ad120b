use serde::{Deserialize, Serialize};

/// A single prompt/answer pair.
///
/// Decks on disk use `front`/`back` for the two sides; the engine only ever
/// shows the prompt and checks submissions against the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// The word or phrase shown to the player.
    #[serde(rename = "front")]
    pub prompt: String,
    /// The expected answer. May list alternatives separated by `,` or `/`.
    #[serde(rename = "back")]
    pub answer: String,
}

impl Flashcard {
    /// Create a flashcard from a prompt and its answer.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// The card used when no chapter has any content at all.
    pub fn fallback() -> Self {
        Self::new("hej", "hello")
    }
}

impl std::fmt::Display for Flashcard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.prompt, self.answer)
    }
}
