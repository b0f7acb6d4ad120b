//! The in-game message log.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// What a message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    /// Blows exchanged or a retreat.
    Combat,
    /// XP, gold and level-ups.
    Reward,
    /// Everything else: floors, welcome text.
    Info,
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combat => write!(f, "combat"),
            Self::Reward => write!(f, "reward"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A human-readable log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The text shown to the player.
    pub text: String,
    /// Its category.
    pub category: MessageCategory,
}

/// The most recent messages, newest first, with a fixed capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLog {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    /// An empty log holding at most `capacity` messages.
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a message, dropping the oldest once over capacity.
    pub fn push(&mut self, category: MessageCategory, text: impl Into<String>) {
        let text = text.into();
        tracing::trace!(%category, %text, "message");
        self.messages.push_front(Message { text, category });
        self.messages.truncate(self.capacity);
    }

    /// Messages from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// The newest message.
    pub fn latest(&self) -> Option<&Message> {
        self.messages.front()
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut log = MessageLog::new(5);
        log.push(MessageCategory::Info, "one");
        log.push(MessageCategory::Reward, "two");
        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "one"]);
        assert_eq!(log.latest().unwrap().category, MessageCategory::Reward);
    }

    #[test]
    fn drops_oldest_over_capacity() {
        let mut log = MessageLog::new(3);
        for i in 0..5 {
            log.push(MessageCategory::Combat, format!("m{i}"));
        }
        assert_eq!(log.len(), 3);
        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["m4", "m3", "m2"]);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&MessageCategory::Reward).unwrap();
        assert_eq!(json, "\"reward\"");
    }
}
