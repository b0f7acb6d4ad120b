//! Game engine for Word Dungeon, a vocabulary drill disguised as a
//! dungeon crawl.
//!
//! Provides procedural floor generation, fog of war, monster population
//! scaled by depth, grid movement, and a combat system in which monsters
//! are fought by answering flashcard prompts. All randomness flows through
//! one seeded RNG, so a seed fully determines a run for a given sequence of
//! inputs.

pub mod answer;
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod encounter;
pub mod error;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod log;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod vision;

pub use answer::{check_answer, normalize_answer};
pub use combat::{AnswerOutcome, CombatSession, FleeOutcome};
pub use config::EngineConfig;
pub use encounter::Monster;
pub use error::{EngineError, EngineResult};
pub use game::{Game, Phase};
pub use geometry::{Direction, Position};
pub use grid::{Cell, Grid};
pub use log::{Message, MessageCategory, MessageLog};
pub use movement::MoveOutcome;
pub use player::Player;
pub use snapshot::{Snapshot, Tile};
pub use vision::RevealedSet;
